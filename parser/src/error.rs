use std::fmt;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use thiserror::Error;

/// Something odd about a story line. Permissive parsing reports these as
/// warnings, strict parsing as errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Issue {
    #[error("Line outside of any section: {text}")]
    LineOutsideSection { text: String },
    #[error("Section header without a name")]
    EmptySectionName,
    #[error("Line ignored inside a section without a name: {text}")]
    LineInUnnamedSection { text: String },
    #[error("Section name `{name}` has surrounding whitespace")]
    UntrimmedSectionName { name: String },
    #[error("Section `{name}` is defined again, its previous content is discarded")]
    DuplicateSection { name: String },
    #[error("Choice line contains more than one '->', split on the first: {text}")]
    MultipleSeparators { text: String },
    #[error("Choice leading to `{target}` has an empty label")]
    EmptyChoiceLabel { target: String },
    #[error("Choice `{label}` has an empty target")]
    EmptyChoiceTarget { label: String },
    #[error("Choice `{label}` in section `{section}` leads to unknown section `{target}`")]
    UnresolvedTarget {
        section: String,
        label: String,
        target: String,
    },
}

fn file_label(file: &Option<PathBuf>) -> String {
    file.as_deref()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .unwrap_or("story")
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    pub file: Option<PathBuf>,
    pub line: usize,
    pub issue: Issue,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: WARNING: {}",
            file_label(&self.file),
            self.line,
            self.issue
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}:{}: ERROR: {}", file_label(.file), .line, .issue)]
pub struct ParseError {
    pub file: Option<PathBuf>,
    pub line: usize,
    pub issue: Issue,
}

/// Every error found in a strict parse, in line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors(pub Vec<ParseError>);

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

impl std::error::Error for ParseErrors {}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("ERROR: Cannot read story file `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("ERROR: Story file `{}` is not valid UTF-8: {source}", path.display())]
    Encoding {
        path: PathBuf,
        source: FromUtf8Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseErrors),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_uses_file_name_only() {
        let warning = ParseWarning {
            file: Some(PathBuf::from("stories/ruinen.story")),
            line: 4,
            issue: Issue::EmptySectionName,
        };

        assert_eq!(
            warning.to_string(),
            "ruinen.story:4: WARNING: Section header without a name"
        );
    }

    #[test]
    fn error_without_file() {
        let error = ParseError {
            file: None,
            line: 7,
            issue: Issue::UnresolvedTarget {
                section: "Start".to_string(),
                label: "Run".to_string(),
                target: "Nowhere".to_string(),
            },
        };

        assert_eq!(
            error.to_string(),
            "story:7: ERROR: Choice `Run` in section `Start` leads to unknown section `Nowhere`"
        );
    }

    #[test]
    fn errors_are_listed_one_per_line() {
        let errors = ParseErrors(vec![
            ParseError {
                file: None,
                line: 1,
                issue: Issue::EmptySectionName,
            },
            ParseError {
                file: None,
                line: 2,
                issue: Issue::LineInUnnamedSection {
                    text: "lost".to_string(),
                },
            },
        ]);

        assert_eq!(
            errors.to_string(),
            "story:1: ERROR: Section header without a name\nstory:2: ERROR: Line ignored inside a section without a name: lost"
        );
    }
}
