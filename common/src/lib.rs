mod story_graph;
pub use story_graph::*;

mod section;
pub use section::*;

mod config;
pub use config::*;

pub mod test_case;
pub use test_case::TestCase;
