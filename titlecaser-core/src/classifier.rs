//! # Classifier — per-word disposition rules
//!
//! Decides, for each word component, one of three dispositions: leave the
//! word untouched, lowercase it entirely, or recapitalize it naively. The
//! rules are heuristics that interact, so their *order* is the contract:
//! structural signals (intentional capitals, emails, filenames) win over
//! positional ones, and positional/boundary signals win over the small-word
//! list.
//!
//! ## Rule order
//!
//! 1. Interior capital letters, unless the whole input is all-caps —
//!    acronyms and stylized names ("iTunes", "AT&T") pass through verbatim.
//! 2. Contains `@` — email addresses pass through.
//! 3. Looks like a filename or path — "my_file.txt", "/usr/local" pass
//!    through.
//! 4. First or last word of the title — always recapitalized, never
//!    lowercased, small word or not.
//! 5. Tagged by the tokenizer (subtitle start, hyphenation start or
//!    continuation) — always recapitalized.
//! 6. Small word or protocol token — lowercased.
//! 7. Anything else — recapitalized.
//!
//! All-caps input disables rule 1 only: an input typed entirely in capitals
//! carries no intentional-capitalization signal, so every word falls through
//! to the structural and small-word rules and gets re-derived from scratch
//! ("WAR AND PEACE" → "War and Peace").

use serde::{Deserialize, Serialize};

use crate::tokenizer::Tag;

/// Minor words conventionally lowercased inside a title. Closed set, matched
/// case-insensitively; includes the abbreviated legal forms "v." and "vs.".
pub const SMALL_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "en", "for", "if", "in", "nor",
    "of", "on", "or", "per", "the", "to", "v", "v.", "vs", "vs.", "via",
];

/// URL-scheme tokens whose trailing colon does not open a subtitle.
pub const PROTOCOL_TOKENS: &[&str] = &["http", "https", "ftp"];

/// What the capitalizer should do with one word component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    /// Copy the word through verbatim.
    Unchanged,
    /// Lowercase the whole word.
    Lowercased,
    /// Recapitalize from scratch, discarding the original casing.
    NaivelyCapitalized,
}

/// Decides the disposition for `word`, the `position`-th of `total_words`
/// word components, carrying `tag` from the tokenizer. `input_is_all_caps`
/// refers to the entire input string, not just this word.
pub fn classify(
    word: &str,
    position: usize,
    total_words: usize,
    tag: Option<Tag>,
    input_is_all_caps: bool,
) -> Disposition {
    if has_interior_capital(word) && !input_is_all_caps {
        return Disposition::Unchanged;
    }
    if is_email_address(word) {
        return Disposition::Unchanged;
    }
    if is_filename(word) {
        return Disposition::Unchanged;
    }
    if position == 0 || position + 1 == total_words {
        return Disposition::NaivelyCapitalized;
    }
    if tag.is_some() {
        // All three tags mark a boundary the word must stay capitalized at.
        return Disposition::NaivelyCapitalized;
    }
    if is_small_word(word) || is_protocol_token(word) {
        return Disposition::Lowercased;
    }
    Disposition::NaivelyCapitalized
}

/// True when the input contains no lowercase letter at all. Caseless
/// characters (digits, punctuation) are ignored by checking for the absence
/// of lowercase rather than the presence of uppercase.
pub fn is_all_caps(text: &str) -> bool {
    !text.chars().any(char::is_lowercase)
}

/// An uppercase letter anywhere after the first character signals an acronym
/// or stylized name ("iTunes", "TheStreet.com's").
fn has_interior_capital(word: &str) -> bool {
    word.chars().skip(1).any(char::is_uppercase)
}

fn is_email_address(word: &str) -> bool {
    word.contains('@')
}

/// Filename/path heuristic: a period with no punctuation in the word other
/// than `.`, `_` and `-`, not in final position ("my_file.txt" yes,
/// "sentence." no, "\u{201C}v2.0\u{201D}" no) — or a leading slash.
fn is_filename(word: &str) -> bool {
    let only_path_punctuation = !word
        .chars()
        .any(|ch| is_punctuation(ch) && !matches!(ch, '.' | '_' | '-'));

    word.contains('.') && only_path_punctuation && !word.ends_with('.')
        || word.starts_with('/')
}

/// Punctuation for the filename check: ASCII punctuation plus the common
/// typographic marks that survive inside a word run.
fn is_punctuation(ch: char) -> bool {
    ch.is_ascii_punctuation()
        || matches!(
            ch,
            '\u{2018}' | '\u{2019}' | '\u{201C}' | '\u{201D}' | '\u{2026}' | '\u{00A1}'
                | '\u{00BF}' | '\u{00AB}' | '\u{00BB}'
        )
}

fn is_small_word(word: &str) -> bool {
    SMALL_WORDS
        .iter()
        .any(|small| word.eq_ignore_ascii_case(small))
}

/// Case-insensitive membership in [`PROTOCOL_TOKENS`]. Used both here and by
/// the tokenizer's subtitle-colon rule.
pub fn is_protocol_token(word: &str) -> bool {
    PROTOCOL_TOKENS
        .iter()
        .any(|protocol| word.eq_ignore_ascii_case(protocol))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Interior word with no tag, in a mixed-case title.
    fn interior(word: &str) -> Disposition {
        classify(word, 1, 3, None, false)
    }

    #[test]
    fn test_interior_capitals_preserved() {
        assert_eq!(interior("iTunes"), Disposition::Unchanged);
        assert_eq!(interior("AT&T"), Disposition::Unchanged);
        assert_eq!(interior("TheStreet.com's"), Disposition::Unchanged);
    }

    #[test]
    fn test_all_caps_input_disables_preservation() {
        assert_eq!(
            classify("PEACE", 1, 3, None, true),
            Disposition::NaivelyCapitalized
        );
        assert_eq!(classify("AND", 1, 3, None, true), Disposition::Lowercased);
    }

    #[test]
    fn test_email_preserved_even_in_all_caps_input() {
        assert_eq!(interior("John@Example.com"), Disposition::Unchanged);
        assert_eq!(
            classify("JOHN@EXAMPLE.COM", 1, 3, None, true),
            Disposition::Unchanged
        );
    }

    #[test]
    fn test_filenames_and_paths_preserved() {
        assert_eq!(interior("my_file.txt"), Disposition::Unchanged);
        assert_eq!(interior("readme.md"), Disposition::Unchanged);
        assert_eq!(interior("/usr/local"), Disposition::Unchanged);
        assert_eq!(interior("//example.com"), Disposition::Unchanged);
    }

    #[test]
    fn test_trailing_period_is_not_a_filename() {
        assert_eq!(interior("end."), Disposition::NaivelyCapitalized);
        // "v." would be a small word, not a filename.
        assert_eq!(interior("v."), Disposition::Lowercased);
    }

    #[test]
    fn test_quoted_dotted_token_is_not_a_filename() {
        // The quote mark is punctuation outside "._-", so the period does
        // not make this a filename.
        assert_eq!(
            interior("\u{201C}v2.0\u{201D}"),
            Disposition::NaivelyCapitalized
        );
    }

    #[test]
    fn test_edge_words_never_lowercased() {
        assert_eq!(
            classify("the", 0, 4, None, false),
            Disposition::NaivelyCapitalized
        );
        assert_eq!(
            classify("of", 3, 4, None, false),
            Disposition::NaivelyCapitalized
        );
        // Single word is both first and last.
        assert_eq!(
            classify("and", 0, 1, None, false),
            Disposition::NaivelyCapitalized
        );
    }

    #[test]
    fn test_tags_suppress_lowercasing() {
        for tag in [
            Tag::BeginsSubtitle,
            Tag::BeginsHyphenation,
            Tag::HyphenationContinuation,
        ] {
            assert_eq!(
                classify("to", 1, 4, Some(tag), false),
                Disposition::NaivelyCapitalized
            );
        }
    }

    #[test]
    fn test_small_words_lowercased_interior() {
        for word in ["and", "The", "VS.", "via", "per"] {
            assert_eq!(interior(word), Disposition::Lowercased, "word: {word}");
        }
    }

    #[test]
    fn test_protocol_tokens_lowercased_interior() {
        assert_eq!(interior("HTTP"), Disposition::Unchanged); // interior caps
        assert_eq!(interior("http"), Disposition::Lowercased);
        assert_eq!(interior("ftp"), Disposition::Lowercased);
    }

    #[test]
    fn test_ordinary_words_recapitalized() {
        assert_eq!(interior("quick"), Disposition::NaivelyCapitalized);
        assert_eq!(interior("with"), Disposition::NaivelyCapitalized);
        assert_eq!(interior("&"), Disposition::NaivelyCapitalized);
    }

    #[test]
    fn test_is_all_caps() {
        assert!(is_all_caps("WAR AND PEACE"));
        assert!(is_all_caps("WAR & PEACE, 1869!"));
        assert!(is_all_caps("123 456"));
        assert!(!is_all_caps("War and Peace"));
        assert!(!is_all_caps("WAr"));
    }
}
