use endzeit_common::*;
use std::path::Path;

mod error;
pub use error::{Issue, LoadError, ParseError, ParseErrors, ParseWarning};

mod parser;
pub use parser::{read_source, Parsed, Parser};

mod line_parser;
pub mod parsers;


/// Parses `script` permissively.
pub fn parse(script: &str) -> Result<Parsed, ParseErrors> {
    Parser::new().parse(script)
}

/// Reads and parses the story file at `path` permissively.
pub fn load<P>(path: P) -> Result<Parsed, LoadError>
where
    P: AsRef<Path>,
{
    Parser::new().load(path)
}

/// Parses `script` and returns only the graph, dropping warnings.
pub fn parse_graph(script: &str) -> Result<StoryGraph, ParseErrors> {
    parse(script).map(|(graph, _)| graph)
}
