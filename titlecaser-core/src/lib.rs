//! # titlecaser-core — conventional English title casing
//!
//! Converts a string to title case: principal words capitalized, minor
//! ("small") words lowercased except at title boundaries or after a subtitle
//! colon, intentionally-capitalized tokens (acronyms, stylized names)
//! preserved verbatim, and emails, filenames/paths and URL-scheme tokens
//! left untouched.
//!
//! ## Architecture
//!
//! A single synchronous pass through three stages:
//!
//! 1. **Tokenization** ([`tokenizer`]): the input is split into an ordered,
//!    gap-free sequence of word and separator components, each keeping its
//!    byte range. Subtitle colons and hyphen chains annotate the affected
//!    word components with context tags.
//! 2. **Classification** ([`classifier`]): each word component gets a
//!    [`Disposition`] — leave unchanged, lowercase, or recapitalize — from
//!    an ordered list of heuristics (intentional capitals, emails,
//!    filenames, edge position, boundary tags, the small-word list).
//! 3. **Reassembly** ([`pipeline`], [`capitalizer`]): dispositions are
//!    applied, separators copied verbatim, and the concatenation trimmed.
//!
//! The whole pipeline is a pure function of its input plus fixed constant
//! tables. There is no shared state and no I/O, so conversion can run
//! unrestricted from concurrent threads.
//!
//! ## Example
//!
//! ```rust
//! use titlecaser_core::{to_title_case, ToTitleCase};
//!
//! assert_eq!(to_title_case("war and peace"), "War and Peace");
//! assert_eq!(to_title_case("a tale: the sequel"), "A Tale: The Sequel");
//! assert_eq!(to_title_case("open my_file.txt now"), "Open my_file.txt Now");
//!
//! // Or through the extension trait:
//! assert_eq!("a-to-z".to_title_case(), "A-To-Z");
//! ```

pub mod capitalizer;
pub mod classifier;
pub mod pipeline;
pub mod tokenizer;

pub use classifier::Disposition;
pub use pipeline::{convert_with_trace, ComponentDecision};
pub use tokenizer::{Component, ComponentKind, Tag};

/// Converts `text` to conventional English title case.
///
/// Total over all valid strings; the empty string maps to the empty string.
pub fn to_title_case(text: &str) -> String {
    pipeline::convert(text)
}

/// Extension trait so conversion reads as a method on string types.
pub trait ToTitleCase {
    fn to_title_case(&self) -> String;
}

impl ToTitleCase for str {
    fn to_title_case(&self) -> String {
        pipeline::convert(self)
    }
}
