//! Parser for the line-oriented training document.
//!
//! ```text
//! ## intent:request_restaurant
//! - i am looking for [indonesian](cuisine) food
//! - a table for (num_people:3)
//! ```
//!
//! A block starts at an `## intent:` header and takes every following list
//! line. The first line that is not a list item closes the block and is then
//! examined on its own, so it may open the next block.

use crate::errors::{ConvertError, ConvertResult};

const INTENT_HEADER: &str = "## intent:";
const LIST_MARKER: char = '-';

/// A parsed training document.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingDocument {
    /// Name used in error locations (usually the file path).
    pub source: String,
    /// Intent blocks in document order.
    pub blocks: Vec<IntentBlock>,
    /// Every list item in the document, inside intent blocks or not.
    pub items: Vec<TrainingLine>,
}

/// An `## intent:<name>` block.
#[derive(Debug, Clone, PartialEq)]
pub struct IntentBlock {
    pub intent: String,
    /// 1-based line of the header
    pub line: usize,
    pub samples: Vec<TrainingLine>,
}

/// A list item with its marker and surrounding whitespace stripped.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingLine {
    /// 1-based line number
    pub line: usize,
    pub text: String,
}

impl TrainingDocument {
    /// Error location for a line of this document.
    pub fn location(&self, line: usize) -> String {
        format!("{}:{}", self.source, line)
    }

    /// Total number of samples across all intent blocks.
    pub fn sample_count(&self) -> usize {
        self.blocks.iter().map(|b| b.samples.len()).sum()
    }
}

/// Parse a training document held in memory.
pub fn parse_training(source: &str, input: &str) -> ConvertResult<TrainingDocument> {
    let mut blocks: Vec<IntentBlock> = Vec::new();
    let mut items = Vec::new();
    let mut in_block = false;

    for (idx, line) in input.lines().enumerate() {
        let line_num = idx + 1;
        let trimmed = line.trim();

        if trimmed.starts_with(LIST_MARKER) {
            let item = TrainingLine {
                line: line_num,
                text: trimmed[LIST_MARKER.len_utf8()..].trim().to_string(),
            };
            if in_block {
                if let Some(block) = blocks.last_mut() {
                    block.samples.push(item.clone());
                }
            }
            items.push(item);
            continue;
        }

        in_block = false;

        if let Some(name) = trimmed.strip_prefix(INTENT_HEADER) {
            let name = name.trim();
            if name.is_empty() {
                return Err(ConvertError::format(
                    format!("{}:{}", source, line_num),
                    "intent header without a name",
                ));
            }
            blocks.push(IntentBlock {
                intent: name.to_string(),
                line: line_num,
                samples: Vec::new(),
            });
            in_block = true;
        }
    }

    Ok(TrainingDocument {
        source: source.to_string(),
        blocks,
        items,
    })
}
