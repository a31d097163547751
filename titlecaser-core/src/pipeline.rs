//! # Pipeline — tokenize, classify, reassemble
//!
//! Orchestrates the three stages in a single synchronous pass. The pipeline
//! is stateless: [`convert`] is a pure function of its input plus the
//! constant word tables, so it is safe to call concurrently from any number
//! of threads.
//!
//! [`convert_with_trace`] runs the same pass but keeps a per-component
//! record of what was decided, which the web UI renders as an explanation of
//! the result.

use serde::{Deserialize, Serialize};

use crate::capitalizer::apply;
use crate::classifier::{classify, is_all_caps, Disposition};
use crate::tokenizer::{tokenize, Component, ComponentKind};

/// One component's outcome: the component itself, the disposition chosen for
/// it (None for separators, which are always copied verbatim), and the text
/// that ended up in the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDecision {
    pub component: Component,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub disposition: Option<Disposition>,
    pub rendered: String,
}

/// Converts `text` to title case.
///
/// Total over all valid strings: empty input, separator-only input and
/// letterless input all produce a defined, trimmed result.
pub fn convert(text: &str) -> String {
    let (result, _) = convert_with_trace(text);
    result
}

/// Converts `text` to title case, returning the per-component decision trace
/// alongside the result.
///
/// The word position handed to the classifier counts word components only;
/// separators never shift it. The all-caps check is evaluated once against
/// the whole input, as it governs every word equally.
pub fn convert_with_trace(text: &str) -> (String, Vec<ComponentDecision>) {
    let components = tokenize(text);
    let input_is_all_caps = is_all_caps(text);
    let total_words = components
        .iter()
        .filter(|c| c.kind == ComponentKind::Word)
        .count();

    let mut decisions = Vec::with_capacity(components.len());
    let mut output = String::with_capacity(text.len());
    let mut word_position = 0;

    for component in components {
        let (disposition, rendered) = match component.kind {
            ComponentKind::Separator => (None, component.text.clone()),
            ComponentKind::Word => {
                let disposition = classify(
                    &component.text,
                    word_position,
                    total_words,
                    component.tag,
                    input_is_all_caps,
                );
                word_position += 1;
                (Some(disposition), apply(disposition, &component.text))
            }
        };

        output.push_str(&rendered);
        decisions.push(ComponentDecision {
            component,
            disposition,
            rendered,
        });
    }

    (output.trim().to_string(), decisions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_small_words_lowercased() {
        assert_eq!(convert("war and peace"), "War and Peace");
        assert_eq!(convert("the lord of the rings"), "The Lord of the Rings");
    }

    #[test]
    fn test_all_caps_rederived() {
        assert_eq!(convert("WAR AND PEACE"), "War and Peace");
        assert_eq!(convert("IF IT'S ALL CAPS, FIX IT"), "If It's All Caps, Fix It");
    }

    #[test]
    fn test_edge_words_protected() {
        assert_eq!(convert("for you and me"), "For You and Me");
        assert_eq!(convert("nothing to be afraid of?"), "Nothing to Be Afraid Of?");
    }

    #[test]
    fn test_subtitle_boundary() {
        assert_eq!(convert("a tale: the sequel"), "A Tale: The Sequel");
        assert_eq!(convert("2018: a space odyssey"), "2018: A Space Odyssey");
    }

    #[test]
    fn test_protocol_colon_is_not_a_subtitle() {
        assert_eq!(
            convert("visit http://example.com for details"),
            "Visit http://example.com for Details"
        );
        assert_eq!(
            convert("ftp: the forgotten protocol"),
            "Ftp: the Forgotten Protocol"
        );
    }

    #[test]
    fn test_hyphenated_compounds_protected() {
        assert_eq!(convert("a-to-z"), "A-To-Z");
        assert_eq!(convert("mother-in-law"), "Mother-In-Law");
    }

    #[test]
    fn test_email_preserved() {
        assert_eq!(
            convert("email me at John@Example.com"),
            "Email Me at John@Example.com"
        );
    }

    #[test]
    fn test_filename_preserved() {
        assert_eq!(convert("open my_file.txt now"), "Open my_file.txt Now");
        assert_eq!(convert("reading /usr/local/docs now"), "Reading /usr/local/docs Now");
    }

    #[test]
    fn test_intentional_capitals_preserved() {
        assert_eq!(convert("iTunes should stay"), "iTunes Should Stay");
        assert_eq!(
            convert("apple deal with AT&T falls through"),
            "Apple Deal With AT&T Falls Through"
        );
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(convert("  hello world  "), "Hello World");
        assert_eq!(convert("   "), "");
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(convert(""), "");
        assert_eq!(convert(":-"), ":-");
        assert_eq!(convert("the"), "The");
    }

    #[test]
    fn test_idempotence() {
        for text in [
            "war and peace",
            "a tale: the sequel",
            "a-to-z",
            "open my_file.txt now",
            "email me at John@Example.com",
            "nothing to be afraid of?",
            "  hello world  ",
            "WAR AND PEACE",
        ] {
            let once = convert(text);
            assert_eq!(convert(&once), once, "input: {text:?}");
        }
    }

    #[test]
    fn test_trace_covers_input() {
        let (_, decisions) = convert_with_trace("a tale: the sequel");
        let rebuilt: String = decisions
            .iter()
            .map(|d| d.component.text.as_str())
            .collect();
        assert_eq!(rebuilt, "a tale: the sequel");
    }

    #[test]
    fn test_trace_dispositions() {
        let (result, decisions) = convert_with_trace("war and peace");
        assert_eq!(result, "War and Peace");

        let and = decisions
            .iter()
            .find(|d| d.component.text == "and")
            .unwrap();
        assert_eq!(and.disposition, Some(Disposition::Lowercased));
        assert_eq!(and.rendered, "and");

        let separators: Vec<_> = decisions
            .iter()
            .filter(|d| d.component.kind == ComponentKind::Separator)
            .collect();
        assert!(separators.iter().all(|d| d.disposition.is_none()));
    }
}
