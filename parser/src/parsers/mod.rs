use crate::{Issue, ParseError, ParseWarning};
use endzeit_common::*;

pub mod choice_parser;
pub mod narrative_parser;
pub mod section_parser;

/// A choice as it was found in the file, kept to validate its target once
/// the whole graph is known.
#[derive(Debug, Clone)]
pub struct ChoiceSite {
    pub line: usize,
    pub section: SectionName,
    pub label: String,
    pub target: SectionName,
}

/// Represents the shared context between different parsers
#[derive(Debug)]
pub struct ParserContext {
    /// The current line being processed
    pub current_line: usize,
    /// The file path being processed, if any
    pub file_path: Option<std::path::PathBuf>,
    /// Report issues as errors instead of warnings
    pub strict: bool,
    /// Section receiving narrative and choice lines
    pub current_section: Option<SectionName>,
    /// The graph being built
    pub graph: StoryGraph,
    pub choice_sites: Vec<ChoiceSite>,
    pub warnings: Vec<ParseWarning>,
    pub errors: Vec<ParseError>,
}

impl Default for ParserContext {
    fn default() -> Self {
        Self {
            current_line: 1,
            file_path: None,
            strict: false,
            current_section: None,
            graph: StoryGraph::new(),
            choice_sites: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl ParserContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(file_path: std::path::PathBuf) -> Self {
        Self {
            file_path: Some(file_path),
            ..Self::default()
        }
    }

    pub fn report(&mut self, issue: Issue) {
        self.report_at(self.current_line, issue);
    }

    pub fn report_at(&mut self, line: usize, issue: Issue) {
        tracing::debug!(line, strict = self.strict, "{}", issue);
        if self.strict {
            self.errors.push(ParseError {
                file: self.file_path.clone(),
                line,
                issue,
            });
        } else {
            self.warnings.push(ParseWarning {
                file: self.file_path.clone(),
                line,
                issue,
            });
        }
    }

    /// Starts a new, empty section and makes it the current one. A section
    /// that already exists is reset.
    pub fn open_section(&mut self, name: SectionName) {
        tracing::debug!(line = self.current_line, section = %name, "section");
        if self.graph.insert_section(Section::new(name.clone())).is_some() {
            self.choice_sites.retain(|site| site.section != name);
            self.report(Issue::DuplicateSection { name: name.clone() });
        }
        self.current_section = Some(name);
    }

    pub fn add_choice(&mut self, choice: Choice) {
        let Some(name) = self.current_section.clone() else {
            return;
        };
        if let Some(section) = self.graph.get_mut(&name) {
            self.choice_sites.push(ChoiceSite {
                line: self.current_line,
                section: name,
                label: choice.label.clone(),
                target: choice.target.clone(),
            });
            section.add_choice(choice);
        }
    }

    pub fn push_narrative(&mut self, text: &str) {
        let Some(name) = self.current_section.as_deref() else {
            return;
        };
        if let Some(section) = self.graph.get_mut(name) {
            section.push_line(text);
        }
    }

    /// Reports every choice whose target is not a section, at the line the
    /// choice was written on.
    pub fn check_targets(&mut self) {
        let mut claimed = vec![false; self.choice_sites.len()];
        let mut unresolved: Vec<(usize, UnresolvedTarget)> = Vec::new();

        for target in self.graph.unresolved_targets() {
            let site = self.choice_sites.iter().enumerate().position(|(index, site)| {
                !claimed[index]
                    && site.section == target.section
                    && site.label == target.label
                    && site.target == target.target
            });
            let line = match site {
                Some(index) => {
                    claimed[index] = true;
                    self.choice_sites[index].line
                }
                None => self.current_line,
            };
            unresolved.push((line, target));
        }
        unresolved.sort_by_key(|(line, _)| *line);

        for (line, target) in unresolved {
            self.report_at(
                line,
                Issue::UnresolvedTarget {
                    section: target.section,
                    label: target.label,
                    target: target.target,
                },
            );
        }
    }
}

/// The core trait that all feature parsers must implement
pub trait FeatureParser {
    /// The type of output this parser produces
    type Output;

    /// Parse the input string using the given context. Parsers never fail;
    /// anything suspicious is reported through the context.
    ///
    /// # Arguments
    /// * `input` - The trimmed line to parse
    /// * `context` - The shared parser context
    fn parse(&self, input: &str, context: &mut ParserContext) -> Self::Output;
}
