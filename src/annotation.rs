//! Tokenizer for inline slot annotations in training samples.
//!
//! Recognized forms:
//! - `[display](slot)` plain value, display text is the value
//! - `[display](slot:value)` alias, display text is a synonym of `value`
//! - `(slot)` / `(slot:value)` slot reference without display text
//! - `[display]` with no following parenthesis, an orphan display span

use crate::errors::AnnotationError;

/// A piece of an annotated sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text between spans.
    Text(String),
    /// `[display]` not followed by a slot reference.
    Display(String),
    /// A slot reference, with or without display text.
    Slot(SlotSpan),
}

/// A parsed `[display](slot[:value])` or `(slot[:value])` span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSpan {
    pub display: Option<String>,
    pub slot: String,
    pub value: Option<String>,
}

impl SlotSpan {
    /// The canonical entity value this span contributes, if it has display text.
    pub fn canonical_value(&self) -> Option<&str> {
        match (&self.value, &self.display) {
            (Some(value), Some(_)) => Some(value),
            (None, Some(display)) => Some(display),
            _ => None,
        }
    }

    /// The synonym this span contributes (alias form only).
    pub fn synonym(&self) -> Option<&str> {
        match (&self.value, &self.display) {
            (Some(_), Some(display)) => Some(display),
            _ => None,
        }
    }
}

/// Split a sample into text and annotation segments in one pass.
///
/// An opening `[` or `(` without its closer is kept as literal text.
pub fn parse_annotations(input: &str) -> Result<Vec<Segment>, AnnotationError> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut resume = 0;

    for (pos, ch) in input.char_indices() {
        if pos < resume {
            continue;
        }

        match ch {
            '[' => match find_closer(input, pos, ']') {
                Some(close) => {
                    flush_text(&mut text, &mut segments);
                    let display = input[pos + 1..close].to_string();
                    let paren = close + 1;
                    resume = paren;

                    if input[paren..].starts_with('(') {
                        if let Some(paren_close) = find_closer(input, paren, ')') {
                            let mut span =
                                parse_slot_body(&input[paren + 1..paren_close], paren)?;
                            span.display = Some(display);
                            segments.push(Segment::Slot(span));
                            resume = paren_close + 1;
                            continue;
                        }
                    }
                    segments.push(Segment::Display(display));
                }
                None => text.push(ch),
            },
            '(' => match find_closer(input, pos, ')') {
                Some(close) => {
                    flush_text(&mut text, &mut segments);
                    segments.push(Segment::Slot(parse_slot_body(&input[pos + 1..close], pos)?));
                    resume = close + 1;
                }
                None => text.push(ch),
            },
            _ => text.push(ch),
        }
    }

    flush_text(&mut text, &mut segments);
    Ok(segments)
}

/// Byte position of the first `close` after the opener at `open`.
fn find_closer(input: &str, open: usize, close: char) -> Option<usize> {
    input[open + 1..].find(close).map(|idx| open + 1 + idx)
}

fn flush_text(text: &mut String, segments: &mut Vec<Segment>) {
    if !text.is_empty() {
        segments.push(Segment::Text(std::mem::take(text)));
    }
}

/// Parse `slot` or `slot:value`; the value is split at the first colon.
fn parse_slot_body(body: &str, offset: usize) -> Result<SlotSpan, AnnotationError> {
    let (slot, value) = match body.find(':') {
        Some(colon) => (&body[..colon], Some(body[colon + 1..].trim())),
        None => (body, None),
    };

    let slot = slot.trim();
    if slot.is_empty() {
        return Err(AnnotationError::new(offset, "empty slot name in annotation"));
    }

    Ok(SlotSpan {
        display: None,
        slot: slot.to_string(),
        // `slot:` with nothing after the colon is the plain form
        value: value.filter(|v| !v.is_empty()).map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(display: Option<&str>, slot: &str, value: Option<&str>) -> Segment {
        Segment::Slot(SlotSpan {
            display: display.map(str::to_string),
            slot: slot.to_string(),
            value: value.map(str::to_string),
        })
    }

    #[test]
    fn test_plain_span() {
        let segments = parse_annotations("serves [indonesian](cuisine) food").unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Text("serves ".into()),
                slot(Some("indonesian"), "cuisine", None),
                Segment::Text(" food".into()),
            ]
        );
    }

    #[test]
    fn test_alias_span() {
        let segments = parse_annotations("any [pan asian](cuisine:asian) place").unwrap();
        let span = match &segments[1] {
            Segment::Slot(span) => span,
            other => panic!("expected slot, got {:?}", other),
        };
        assert_eq!(span.canonical_value(), Some("asian"));
        assert_eq!(span.synonym(), Some("pan asian"));
    }

    #[test]
    fn test_bare_slot_reference() {
        let segments = parse_annotations("for (num_people:3)").unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Text("for ".into()),
                slot(None, "num_people", Some("3")),
            ]
        );
        match &segments[1] {
            Segment::Slot(span) => {
                assert_eq!(span.canonical_value(), None);
                assert_eq!(span.synonym(), None);
            }
            other => panic!("expected slot, got {:?}", other),
        }
    }

    #[test]
    fn test_orphan_display_and_spaced_paren() {
        let segments = parse_annotations("[tonight] (time)").unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Display("tonight".into()),
                Segment::Text(" ".into()),
                slot(None, "time", None),
            ]
        );
    }

    #[test]
    fn test_empty_value_is_plain_form() {
        let segments = parse_annotations("[cheap](price:)").unwrap();
        assert_eq!(segments, vec![slot(Some("cheap"), "price", None)]);
    }

    #[test]
    fn test_value_keeps_later_colons() {
        let segments = parse_annotations("at [noon](time:12:00)").unwrap();
        assert_eq!(segments[1], slot(Some("noon"), "time", Some("12:00")));
    }

    #[test]
    fn test_stray_closers_are_text() {
        let segments = parse_annotations("smile :) ]").unwrap();
        assert_eq!(segments, vec![Segment::Text("smile :) ]".into())]);
    }

    #[test]
    fn test_unclosed_bracket_is_text() {
        let segments = parse_annotations("book [a table").unwrap();
        assert_eq!(segments, vec![Segment::Text("book [a table".into())]);
    }

    #[test]
    fn test_unclosed_paren_is_text() {
        let segments = parse_annotations("very sad :(").unwrap();
        assert_eq!(segments, vec![Segment::Text("very sad :(".into())]);
    }

    #[test]
    fn test_unclosed_paren_after_display() {
        let segments = parse_annotations("[thai](cuisine").unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Display("thai".into()),
                Segment::Text("(cuisine".into()),
            ]
        );
    }

    #[test]
    fn test_unclosed_bracket_before_span() {
        let segments = parse_annotations("[sic (cuisine)").unwrap();
        assert_eq!(
            segments,
            vec![Segment::Text("[sic ".into()), slot(None, "cuisine", None)]
        );
    }

    #[test]
    fn test_empty_slot_name() {
        assert_eq!(parse_annotations("[thai]()").unwrap_err().offset, 6);
        assert_eq!(parse_annotations("so (:thai)").unwrap_err().offset, 3);
    }
}
