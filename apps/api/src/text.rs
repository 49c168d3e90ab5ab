//! Text normalization applied to résumé text and job descriptions before
//! embedding. Pure transform, identical on both sides of the match.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+").expect("valid regex"));
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));
static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|www\.\S+").expect("valid regex"));
static NON_ALPHA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\s]").expect("valid regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Normalizes raw document text for embedding:
/// lower-case, strip email-like tokens, digit runs, URL-like tokens and
/// everything that is not an ASCII letter, then collapse whitespace.
///
/// Never fails; empty input yields an empty string.
pub fn clean_text(text: &str) -> String {
    let text = text.to_lowercase();
    let text = EMAIL.replace_all(&text, "");
    let text = DIGITS.replace_all(&text, "");
    let text = URL.replace_all(&text, "");
    let text = NON_ALPHA.replace_all(&text, "");
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_collapses_whitespace() {
        assert_eq!(clean_text("  Senior   Rust\tEngineer \n"), "senior rust engineer");
    }

    #[test]
    fn strips_emails_digits_and_urls() {
        let cleaned = clean_text("Jane Doe jane.doe@example.com 2019 https://example.com/cv www.example.org/x rust");
        assert_eq!(cleaned, "jane doe rust");
    }

    #[test]
    fn strips_non_alphabetic_characters() {
        assert_eq!(clean_text("C++ & C#, résumé!"), "c c rsum");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   \n\t "), "");
        assert_eq!(clean_text("12345 !!! 67"), "");
    }

    #[test]
    fn idempotent() {
        for input in [
            "",
            "plain text already",
            "Jane Doe jane@example.com built 12 models, see http://example.com",
            "C++ & C#, résumé! 99 www.example.org",
        ] {
            let once = clean_text(input);
            assert_eq!(clean_text(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn output_alphabet_is_lowercase_letters_and_spaces() {
        let cleaned = clean_text("Mixed INPUT with symbols @#%, digits 42 and http://x.y");
        assert!(cleaned
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == ' '));
        assert!(!cleaned.contains("  "));
    }
}
