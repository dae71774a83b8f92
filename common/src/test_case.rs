use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TestCaseError {
    #[error("test case has no `# Title` line")]
    MissingName,
    #[error("test case has no ```{0} block")]
    MissingBlock(String),
}

/// A compatibility test written as markdown: a title, a `story` block, the
/// comma-free `input` block (one command per line) and the expected
/// `result` block.
#[derive(Debug, Clone)]
pub struct TestCase {
    pub name: String,
    pub script: String,
    pub input: String,
    pub result: String,
    pub path: PathBuf,
    pub disabled: bool,
}

fn parse_name(content: &str) -> Result<String, TestCaseError> {
    content
        .lines()
        .next()
        .and_then(|line| line.strip_prefix("# "))
        .map(|name| name.trim().to_string())
        .ok_or(TestCaseError::MissingName)
}

fn parse_markdown_block(content: &str, language: &str) -> Result<String, TestCaseError> {
    let (_, rest) = content
        .split_once(&format!("```{}\n", language))
        .ok_or_else(|| TestCaseError::MissingBlock(language.to_string()))?;
    let (block, _) = rest
        .split_once("```")
        .ok_or_else(|| TestCaseError::MissingBlock(language.to_string()))?;

    Ok(block.trim_end_matches(['\r', '\n']).to_string())
}

impl TestCase {
    pub fn from_string<A, B>(content: A, path: B) -> Result<Self, TestCaseError>
    where
        A: AsRef<str>,
        B: AsRef<Path>,
    {
        let content = content.as_ref();
        let name = parse_name(content)?;
        let script = parse_markdown_block(content, "story")?;
        let input = parse_markdown_block(content, "input")?;
        let result = parse_markdown_block(content, "result")?;
        let disabled = content.trim().ends_with("!!! disabled");

        Ok(TestCase {
            name,
            script,
            input,
            result,
            path: path.as_ref().into(),
            disabled,
        })
    }

    /// The input lines joined the way the `run` command expects them.
    pub fn input_commands(&self) -> String {
        self.input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_case_from_string_with_simple_test() {
        let content = include_str!("../../compatibility-tests/00000000001-single-section.md");

        let test_case =
            TestCase::from_string(content, "compatibility-tests/00000000001-single-section.md")
                .unwrap();

        assert_eq!(test_case.name, "Single Section");
        assert_eq!(test_case.script, "#Start\nThe sky is the colour of rust.\nNothing moves.");
        assert_eq!(test_case.input, "");
        assert_eq!(
            test_case.result,
            "-> Start\nThe sky is the colour of rust.\nNothing moves."
        );
        assert!(!test_case.disabled);
    }

    #[test]
    fn test_case_from_string_with_disabled_test() {
        let content = "# Test Name\n\nTest description\n\n## Story\n```story\n#Start\ntest\n```\n\n## Input\n```input\n1\n```\n\n## Result\n```result\ntest\n```\n\n!!! disabled";

        let test_case = TestCase::from_string(content, "test.md").unwrap();

        assert!(test_case.disabled);
        assert_eq!(test_case.input_commands(), "1");
    }

    #[test]
    fn test_case_without_result_block() {
        let content = "# Broken\n\n```story\n#Start\n```\n\n```input\n```\n";

        let result = TestCase::from_string(content, "broken.md");

        assert_eq!(
            result.unwrap_err(),
            TestCaseError::MissingBlock("result".to_string())
        );
    }

    #[test]
    fn input_commands_are_comma_joined() {
        let content = "# Inputs\n```story\n#Start\n```\n```input\n1\n\n2\nq\n```\n```result\n```\n";

        let test_case = TestCase::from_string(content, "inputs.md").unwrap();

        assert_eq!(test_case.input_commands(), "1,2,q");
    }
}
