use super::{FeatureParser, ParserContext};
use crate::Issue;
use endzeit_common::Choice;

pub const CHOICE_SEPARATOR: &str = "->";

/// Parser for choice lines (`Label -> Target`).
#[derive(Debug, Default)]
pub struct ChoiceParser;

impl ChoiceParser {
    pub fn new() -> Self {
        Self
    }

    pub fn is_choice_line(input: &str) -> bool {
        input.contains(CHOICE_SEPARATOR)
    }
}

impl FeatureParser for ChoiceParser {
    type Output = Option<Choice>;

    /// Splits on the first separator. Label and target are trimmed.
    fn parse(&self, input: &str, context: &mut ParserContext) -> Self::Output {
        if !Self::is_choice_line(input) {
            return None;
        }
        let (label, target) = input.split_once(CHOICE_SEPARATOR)?;
        let label = label.trim();
        let target = target.trim();

        if target.contains(CHOICE_SEPARATOR) {
            context.report(Issue::MultipleSeparators {
                text: input.to_string(),
            });
        }
        if label.is_empty() {
            context.report(Issue::EmptyChoiceLabel {
                target: target.to_string(),
            });
        }
        if target.is_empty() {
            context.report(Issue::EmptyChoiceTarget {
                label: label.to_string(),
            });
        }

        Some(Choice::new(label, target))
    }
}
