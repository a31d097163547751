//! # Capitalizer — applying dispositions to word text
//!
//! The rendering half of the pipeline: [`naively_capitalize`] rebuilds a
//! word's casing from scratch, and [`apply`] maps each
//! [`Disposition`](crate::classifier::Disposition) to its output text.
//! Reassembly itself lives in [`pipeline`](crate::pipeline).

use crate::classifier::Disposition;

/// Recapitalizes a word naively: uppercase the first capitalizable character,
/// lowercase every later one, copy all other characters (apostrophes, quotes,
/// trailing punctuation) through verbatim.
///
/// A word containing `/` is treated as a slash-delimited compound: each
/// segment is recapitalized independently and the slashes are kept
/// ("either/or" → "Either/Or"). A lone "/" is returned as-is.
///
/// Capitalizable characters are ASCII alphanumerics plus the extended Latin
/// range U+00C0–U+00FF, so "crème brûlée" recapitalizes correctly while
/// curly quotes and dashes pass through.
///
/// ```rust
/// use titlecaser_core::capitalizer::naively_capitalize;
///
/// assert_eq!(naively_capitalize("hELLO!"), "Hello!");
/// assert_eq!(naively_capitalize("devil's"), "Devil's");
/// assert_eq!(naively_capitalize("either/or"), "Either/Or");
/// ```
pub fn naively_capitalize(word: &str) -> String {
    if word.contains('/') && word.chars().count() > 1 {
        return word
            .split('/')
            .map(naively_capitalize)
            .collect::<Vec<_>>()
            .join("/");
    }

    let mut recomposed = String::with_capacity(word.len());
    let mut capitalized_first = false;

    for ch in word.chars() {
        if !is_capitalizable(ch) {
            recomposed.push(ch);
        } else if capitalized_first {
            recomposed.extend(ch.to_lowercase());
        } else {
            recomposed.extend(ch.to_uppercase());
            capitalized_first = true;
        }
    }

    recomposed
}

/// Renders a word component according to its disposition.
pub fn apply(disposition: Disposition, word: &str) -> String {
    match disposition {
        Disposition::Unchanged => word.to_string(),
        Disposition::Lowercased => word.to_lowercase(),
        Disposition::NaivelyCapitalized => naively_capitalize(word),
    }
}

/// ASCII letters and digits plus Latin-1 letters (U+00C0–U+00FF).
fn is_capitalizable(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ('\u{00C0}'..='\u{00FF}').contains(&ch)
}
