use std::path::{Path, PathBuf};

use crate::line_parser;
use crate::parsers::choice_parser::ChoiceParser;
use crate::parsers::narrative_parser::NarrativeParser;
use crate::parsers::section_parser::SectionParser;
use crate::parsers::{FeatureParser, ParserContext};
use crate::{Issue, LoadError, ParseErrors, ParseWarning};
use endzeit_common::*;

/// A parsed story and the warnings found while parsing it.
pub type Parsed = (StoryGraph, Vec<ParseWarning>);

#[derive(Debug, Default, Clone)]
pub struct Parser {
    file_path: Option<PathBuf>,
    strict: bool,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file<P>(file_path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            file_path: Some(file_path.into()),
            strict: false,
        }
    }

    /// In strict mode every issue, including choices leading to unknown
    /// sections, fails the parse.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn parse<A>(&self, script: A) -> Result<Parsed, ParseErrors>
    where
        A: AsRef<str>,
    {
        let mut context = match &self.file_path {
            Some(path) => ParserContext::with_file(path.clone()),
            None => ParserContext::new(),
        };
        context.strict = self.strict;

        for (index, raw_text) in line_parser::split_lines(script.as_ref()).enumerate() {
            let line = line_parser::parse(line_parser::Line {
                raw_text,
                line_number: index + 1,
            });
            context.current_line = line.line_number;

            if !line.is_blank() {
                Self::parse_line(&line.string, &mut context);
            }
        }

        context.check_targets();

        tracing::debug!(
            sections = context.graph.len(),
            warnings = context.warnings.len(),
            errors = context.errors.len(),
            "parsed story"
        );

        if !context.errors.is_empty() {
            return Err(ParseErrors(context.errors));
        }

        Ok((context.graph, context.warnings))
    }

    /// Reads and parses the story at `path`.
    pub fn load<P>(&self, path: P) -> Result<Parsed, LoadError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let script = read_source(path)?;
        let parser = Parser {
            file_path: Some(path.to_path_buf()),
            strict: self.strict,
        };

        Ok(parser.parse(script)?)
    }

    fn parse_line(line: &str, context: &mut ParserContext) {
        if let Some(header) = SectionParser::new().parse(line, context) {
            context.open_section(header.name);
            return;
        }

        match context.current_section.as_deref() {
            None => {
                context.report(Issue::LineOutsideSection {
                    text: line.to_string(),
                });
                return;
            }
            Some("") => {
                context.report(Issue::LineInUnnamedSection {
                    text: line.to_string(),
                });
                return;
            }
            Some(_) => {}
        }

        if let Some(choice) = ChoiceParser::new().parse(line, context) {
            context.add_choice(choice);
            return;
        }

        let narrative = NarrativeParser::new().parse(line, context);
        context.push_narrative(&narrative.string);
    }
}

/// Reads the whole file and decodes it as UTF-8, keeping the two failures
/// apart.
pub fn read_source<P>(path: P) -> Result<String, LoadError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|source| LoadError::Encoding {
        path: path.to_path_buf(),
        source,
    })
}
