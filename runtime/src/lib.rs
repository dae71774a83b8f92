use endzeit_common::*;

mod error;
pub use error::RuntimeError;

mod runtime;
pub use runtime::{is_terminal_in, Runtime, Story};

mod runtime_datatypes;
pub use runtime_datatypes::View;

mod runtime_state;
pub use runtime_state::NavigationState;

mod typewriter;
pub use typewriter::{tick, Typewriter};


/// The view of the current section, or the fallback view when the section
/// does not exist. Never fails.
pub fn current_view(graph: &StoryGraph, state: &NavigationState) -> View {
    Story::default().view(graph, state)
}

/// Moves `state` to `target` without checking that it exists.
pub fn advance(state: NavigationState, target: &str) -> NavigationState {
    state.advance(target)
}

/// True for the reserved ending names, ignoring case.
pub fn is_terminal(name: &str) -> bool {
    is_terminal_in(name, &TERMINAL_SECTIONS)
}

/// A fresh state at the entry section.
pub fn reset() -> NavigationState {
    NavigationState::new(ENTRY_SECTION)
}
