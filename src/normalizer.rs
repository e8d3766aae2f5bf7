//! Utterance normalization: annotated training line to display sample.

use crate::annotation::{parse_annotations, Segment};
use crate::errors::AnnotationError;
use once_cell::sync::Lazy;
use regex::Regex;

/// `?`, `!`, `,` and every Unicode decimal digit.
static STRIPPED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[?!,\d]").expect("Invalid stripped characters regex"));

/// A sample rewritten for the interaction model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUtterance {
    /// Sample text with `{slot}` placeholders in place of annotations.
    pub text: String,
    /// Placeholder slot names, deduplicated, in order of appearance.
    pub placeholders: Vec<String>,
}

/// Normalize one training sample (list marker already stripped).
///
/// `?`, `!`, `,` and digits are removed everywhere in the line, including
/// slot names inside annotations. Every slot reference becomes `{slot}` and
/// orphan `[display]` spans are dropped. None of the removed characters are
/// brackets, so annotations are read from the raw sample and error offsets
/// point into it.
pub fn normalize_utterance(sample: &str) -> Result<NormalizedUtterance, AnnotationError> {
    let mut text = String::with_capacity(sample.len());
    let mut placeholders: Vec<String> = Vec::new();

    for segment in parse_annotations(sample)? {
        match segment {
            Segment::Text(t) => text.push_str(&STRIPPED.replace_all(&t, "")),
            Segment::Display(_) => {}
            Segment::Slot(span) => {
                let slot = STRIPPED.replace_all(&span.slot, "").into_owned();
                text.push('{');
                text.push_str(&slot);
                text.push('}');
                if !placeholders.contains(&slot) {
                    placeholders.push(slot);
                }
            }
        }
    }

    Ok(NormalizedUtterance { text, placeholders })
}
