use super::{FeatureParser, ParserContext};
use crate::Issue;

/// Parser for section headers (lines starting with `#`).
///
/// The name is everything after the single marker character, taken
/// verbatim. `# Start` therefore names the section `" Start"`; such names
/// are accepted but reported, since choices never carry leading spaces in
/// their targets.
#[derive(Debug, Default)]
pub struct SectionParser;

/// The result of parsing a section header.
#[derive(Debug)]
pub struct SectionParseResult {
    pub name: String,
}

impl SectionParser {
    pub fn new() -> Self {
        Self
    }

    pub fn is_section_header(input: &str) -> bool {
        input.trim_start().starts_with('#')
    }
}

impl FeatureParser for SectionParser {
    type Output = Option<SectionParseResult>;

    fn parse(&self, input: &str, context: &mut ParserContext) -> Self::Output {
        if !Self::is_section_header(input) {
            return None;
        }
        let name = input.trim_start().strip_prefix('#')?;

        if name.is_empty() {
            context.report(Issue::EmptySectionName);
        } else if name.trim() != name {
            context.report(Issue::UntrimmedSectionName {
                name: name.to_string(),
            });
        }

        Some(SectionParseResult {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_section() {
        let parser = SectionParser::new();
        let mut context = ParserContext::new();

        let result = parser.parse("#Start", &mut context).unwrap();
        assert_eq!(result.name, "Start");
        assert!(context.warnings.is_empty());
    }

    #[test]
    fn test_parse_only_strips_one_marker() {
        let parser = SectionParser::new();
        let mut context = ParserContext::new();

        let result = parser.parse("##Keller", &mut context).unwrap();
        assert_eq!(result.name, "#Keller");
    }

    #[test]
    fn test_parse_keeps_space_after_marker() {
        let parser = SectionParser::new();
        let mut context = ParserContext::new();

        let result = parser.parse("# Start", &mut context).unwrap();
        assert_eq!(result.name, " Start");
        assert_eq!(
            context.warnings[0].issue,
            Issue::UntrimmedSectionName {
                name: " Start".to_string()
            }
        );
    }

    #[test]
    fn test_parse_non_section() {
        let parser = SectionParser::new();
        let mut context = ParserContext::new();

        assert!(parser.parse("Regular text", &mut context).is_none());
        assert!(parser.parse("Go -> #Start", &mut context).is_none());
        assert!(context.warnings.is_empty());
    }

    #[test]
    fn test_parse_empty_section() {
        let parser = SectionParser::new();
        let mut context = ParserContext::new();

        let result = parser.parse("#", &mut context).unwrap();
        assert_eq!(result.name, "");
        assert_eq!(context.warnings[0].issue, Issue::EmptySectionName);
    }

    #[test]
    fn test_is_section_header() {
        assert!(SectionParser::is_section_header("#Start"));
        assert!(SectionParser::is_section_header("  #Start"));
        assert!(!SectionParser::is_section_header("Start #1"));
    }
}
