//! # Tokenizer — separator-aware component splitting
//!
//! Splits the input into an ordered, gap-free sequence of components: word
//! runs and the separator characters between them. Every component keeps its
//! byte range in the original text, so concatenating the sequence reproduces
//! the input exactly — punctuation, doubled spaces and all. The capitalizer
//! later rewrites only the word components in place.
//!
//! Beyond splitting, the tokenizer annotates *context* that the classifier
//! cannot recover from a word in isolation:
//!
//! - **Subtitle boundary**: a colon that does not follow a protocol token
//!   ("http:", "ftp:") defers capitalization to the *next* word, which is
//!   tagged [`Tag::BeginsSubtitle`].
//! - **Hyphenated compounds**: hyphens retroactively tag the word they
//!   terminate, alternating [`Tag::BeginsHyphenation`] /
//!   [`Tag::HyphenationContinuation`] across a multi-hyphen chain
//!   ("a-b-c" tags "a" then "b"; "c" is handled positionally).
//!
//! ## Example
//!
//! ```rust
//! use titlecaser_core::tokenizer::{tokenize, ComponentKind, Tag};
//!
//! let components = tokenize("a tale: the sequel");
//!
//! // Words and separators interleave, covering the input exactly.
//! let rebuilt: String = components.iter().map(|c| c.text.as_str()).collect();
//! assert_eq!(rebuilt, "a tale: the sequel");
//!
//! // "the" follows the subtitle colon and is tagged accordingly.
//! let the = components.iter().find(|c| c.text == "the").unwrap();
//! assert_eq!(the.kind, ComponentKind::Word);
//! assert_eq!(the.tag, Some(Tag::BeginsSubtitle));
//! ```

use serde::{Deserialize, Serialize};

use crate::classifier::is_protocol_token;

/// The only characters that terminate a word run: space, colon, en dash,
/// em dash, hyphen, non-breaking hyphen. Everything else — periods, commas,
/// quotes, slashes, `@` — stays attached to its word, which is what lets the
/// classifier recognize filenames, emails and abbreviations downstream.
pub const WORD_SEPARATORS: &[char] = &[' ', ':', '\u{2013}', '\u{2014}', '-', '\u{2011}'];

/// Returns `true` for characters in [`WORD_SEPARATORS`].
pub fn is_word_separator(ch: char) -> bool {
    WORD_SEPARATORS.contains(&ch)
}

/// Context annotation attached to a word component by the separators around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    /// First word after a subtitle colon ("a tale: **the** sequel").
    BeginsSubtitle,
    /// Word immediately before the first hyphen of a compound ("**a**-to-z").
    BeginsHyphenation,
    /// Word between two hyphens of a compound ("a-**to**-z").
    HyphenationContinuation,
}

/// Whether a component is a word run or a single separator character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Word,
    Separator,
}

/// A tagged slice of the original text.
///
/// `start`/`end` are byte offsets forming a half-open range. The ordered
/// component sequence partitions the input: no gaps, no overlap, so the
/// reassembly stage can substitute word components and copy separators
/// verbatim without tracking positions itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// The component's text, exactly as it appears in the input.
    pub text: String,
    /// Starting byte offset in the original text (inclusive).
    pub start: usize,
    /// Ending byte offset in the original text (exclusive).
    pub end: usize,
    /// Word run or separator.
    pub kind: ComponentKind,
    /// Context annotation, if any. Only meaningful on word components.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub tag: Option<Tag>,
}

impl Component {
    fn word(text: &str, start: usize, end: usize, tag: Option<Tag>) -> Self {
        Self {
            text: text.to_string(),
            start,
            end,
            kind: ComponentKind::Word,
            tag,
        }
    }

    fn separator(text: &str, start: usize, end: usize) -> Self {
        Self {
            text: text.to_string(),
            start,
            end,
            kind: ComponentKind::Separator,
            tag: None,
        }
    }
}

/// Splits `text` into tagged word and separator components.
///
/// Single left-to-right scan with two independent bits of pending state:
///
/// - `subtitle_pending` — set by a non-protocol colon, consumed by the next
///   word run, which gets [`Tag::BeginsSubtitle`].
/// - `hyphen_pending` — toggled by each hyphen. The hyphen retags the most
///   recently emitted component: [`Tag::BeginsHyphenation`] when the toggle
///   was off, [`Tag::HyphenationContinuation`] when it was on.
///
/// The retag touches only the last element of the output vec; there are no
/// back references. En and em dashes split words but carry no side effect.
pub fn tokenize(text: &str) -> Vec<Component> {
    let mut components: Vec<Component> = Vec::new();
    let mut word_start: Option<usize> = None;
    let mut subtitle_pending = false;
    let mut hyphen_pending = false;

    for (pos, ch) in text.char_indices() {
        if !is_word_separator(ch) {
            if word_start.is_none() {
                word_start = Some(pos);
            }
            continue;
        }

        if let Some(start) = word_start.take() {
            let tag = if subtitle_pending {
                subtitle_pending = false;
                Some(Tag::BeginsSubtitle)
            } else {
                None
            };
            components.push(Component::word(&text[start..pos], start, pos, tag));
        }

        match ch {
            ':' => {
                // A colon right after "http"/"https"/"ftp" introduces a URL,
                // not a subtitle. A colon with nothing before it tags nothing.
                if let Some(previous) = components.last() {
                    if !is_protocol_token(&previous.text) {
                        subtitle_pending = true;
                    }
                }
            }
            '-' | '\u{2011}' => {
                if let Some(previous) = components.last_mut() {
                    if hyphen_pending {
                        previous.tag = Some(Tag::HyphenationContinuation);
                        hyphen_pending = false;
                    } else {
                        previous.tag = Some(Tag::BeginsHyphenation);
                        hyphen_pending = true;
                    }
                }
            }
            _ => {}
        }

        let end = pos + ch.len_utf8();
        components.push(Component::separator(&text[pos..end], pos, end));
    }

    if let Some(start) = word_start {
        components.push(Component::word(&text[start..], start, text.len(), None));
    }

    components
}
