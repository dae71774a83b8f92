use super::{FeatureParser, ParserContext};

/// Parser for narrative lines: anything that is neither a header nor a
/// choice. Malformed lines end up here too.
#[derive(Debug, Default)]
pub struct NarrativeParser;

#[derive(Debug)]
pub struct NarrativeParseResult {
    pub string: String,
}

impl NarrativeParser {
    pub fn new() -> Self {
        Self
    }
}

impl FeatureParser for NarrativeParser {
    type Output = NarrativeParseResult;

    fn parse(&self, input: &str, _context: &mut ParserContext) -> Self::Output {
        NarrativeParseResult {
            string: input.to_string(),
        }
    }
}
