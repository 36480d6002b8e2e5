// src/name.rs

//! Handwritten-name normalization
//!
//! Raw entry names arrive as freeform handwriting: arbitrary separator
//! runs, stray digits and punctuation, inconsistent casing. [`normalize`]
//! reduces them to a canonical display form.

use crate::error::{Error, Result};

/// Normalize a raw freeform name into its canonical display form.
///
/// Spaces, hyphens and underscores all separate words. Within each word
/// every non-alphabetic character is stripped; a word left empty by
/// stripping is dropped entirely. Surviving words are title-cased (first
/// letter uppercase, the rest lowercase) and joined with single spaces.
///
/// Fails with [`Error::InvalidName`] when no words survive.
pub fn normalize(raw: &str) -> Result<String> {
    let mut words: Vec<String> = Vec::new();

    for candidate in raw.split([' ', '-', '_']) {
        let mut word = String::new();
        for ch in candidate.chars().filter(|c| c.is_alphabetic()) {
            // case conversion can expand to multiple chars
            if word.is_empty() {
                word.extend(ch.to_uppercase());
            } else {
                word.extend(ch.to_lowercase());
            }
        }
        if !word.is_empty() {
            words.push(word);
        }
    }

    if words.is_empty() {
        return Err(Error::InvalidName);
    }

    Ok(words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators_and_casing() {
        assert_eq!(normalize("my_rhubarb-pie ").unwrap(), "My Rhubarb Pie");
        assert_eq!(normalize("ChOcOlAtE CAKE").unwrap(), "Chocolate Cake");
    }

    #[test]
    fn test_strips_non_letters_within_words() {
        // digits vanish from inside the word, the word itself survives
        assert_eq!(normalize("c4ke").unwrap(), "Cke");
        assert_eq!(normalize("fish&chips no.3").unwrap(), "Fishchips No");
    }

    #[test]
    fn test_drops_words_emptied_by_stripping() {
        assert_eq!(normalize("42 eggs").unwrap(), "Eggs");
        assert_eq!(normalize("beef -- wellington").unwrap(), "Beef Wellington");
    }

    #[test]
    fn test_separator_runs_collapse() {
        assert_eq!(normalize("  soy _- sauce  ").unwrap(), "Soy Sauce");
    }

    #[test]
    fn test_rejects_when_nothing_survives() {
        assert_eq!(normalize("!!! ---"), Err(Error::InvalidName));
        assert_eq!(normalize(""), Err(Error::InvalidName));
        assert_eq!(normalize("12 34"), Err(Error::InvalidName));
    }

    #[test]
    fn test_alphabetic_is_not_ascii_only() {
        assert_eq!(normalize("crème brûlée").unwrap(), "Crème Brûlée");
    }

    #[test]
    fn test_no_leading_or_trailing_whitespace() {
        let parsed = normalize(" toast ").unwrap();
        assert_eq!(parsed, parsed.trim());
    }
}
