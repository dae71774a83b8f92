use thiserror::Error;

/// Errors that can occur during runtime execution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Picked a choice number the current section does not offer
    #[error("ERROR: Invalid option {choice}, there are {total} options")]
    InvalidChoice { choice: usize, total: usize },
}
