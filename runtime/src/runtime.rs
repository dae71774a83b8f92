use crate::{NavigationState, RuntimeError, View};
use endzeit_common::*;

/// The reserved names a runtime works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub entry_section: SectionName,
    pub terminal_sections: Vec<SectionName>,
    pub fallback_text: String,
}

impl Default for Story {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for Story {
    fn from(config: &Config) -> Self {
        Self {
            entry_section: config.entry_section.clone(),
            terminal_sections: config.terminal_sections.clone(),
            fallback_text: config.fallback_text.clone(),
        }
    }
}

impl Story {
    pub fn is_terminal(&self, name: &str) -> bool {
        is_terminal_in(name, &self.terminal_sections)
    }

    pub fn view(&self, graph: &StoryGraph, state: &NavigationState) -> View {
        let name = state.current();
        match graph.get(name) {
            Some(section) => View {
                name: section.name.clone(),
                text: section.text.clone(),
                choices: section.choices.clone(),
                is_terminal: self.is_terminal(name),
                found: true,
            },
            None => View {
                name: name.to_string(),
                text: self.fallback_text.clone(),
                choices: Vec::new(),
                is_terminal: self.is_terminal(name),
                found: false,
            },
        }
    }
}

/// Whole-name comparison ignoring case; substrings never match.
pub fn is_terminal_in<S>(name: &str, terminal_sections: &[S]) -> bool
where
    S: AsRef<str>,
{
    let name = name.to_lowercase();
    terminal_sections
        .iter()
        .any(|terminal| terminal.as_ref().to_lowercase() == name)
}

/// A parsed story plus the player's position in it.
pub struct Runtime {
    pub graph: StoryGraph,
    story: Story,
    state: NavigationState,
}

impl Runtime {
    pub fn new(graph: StoryGraph) -> Self {
        Self::with_story(graph, Story::default())
    }

    pub fn with_config(graph: StoryGraph, config: &Config) -> Self {
        Self::with_story(graph, Story::from(config))
    }

    pub fn with_story(graph: StoryGraph, story: Story) -> Self {
        let state = NavigationState::new(story.entry_section.clone());
        Self {
            graph,
            story,
            state,
        }
    }

    pub fn current_section(&self) -> &str {
        self.state.current()
    }

    pub fn current_view(&self) -> View {
        self.story.view(&self.graph, &self.state)
    }

    pub fn is_terminal(&self) -> bool {
        self.story.is_terminal(self.state.current())
    }

    /// Moves to `target` whether or not it exists.
    pub fn choose<A>(&mut self, target: A)
    where
        A: Into<SectionName>,
    {
        let target = target.into();
        if !self.graph.contains(&target) {
            tracing::warn!(section = %target, "moving to unknown section");
        }
        tracing::info!(from = %self.state.current(), to = %target, "advance");
        let state = std::mem::take(&mut self.state);
        self.state = state.advance(target);
    }

    /// Picks the `choice`-th option of the current section, counting from 1.
    pub fn choose_option(&mut self, choice: usize) -> Result<Choice, RuntimeError> {
        let choices = self
            .graph
            .get(self.state.current())
            .map(|section| section.choices.as_slice())
            .unwrap_or_default();

        let picked = choice
            .checked_sub(1)
            .and_then(|index| choices.get(index))
            .cloned()
            .ok_or(RuntimeError::InvalidChoice {
                choice,
                total: choices.len(),
            })?;

        self.choose(picked.target.clone());
        Ok(picked)
    }

    /// Goes back to the entry section. The graph is reused as is.
    pub fn reset(&mut self) {
        tracing::info!(section = %self.story.entry_section, "restart");
        self.state = NavigationState::new(self.story.entry_section.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> StoryGraph {
        let mut graph = StoryGraph::new();
        let mut start = Section::new("Start");
        start.push_line("Two roads.");
        start.add_choice(Choice::new("Left", "Ende"));
        start.add_choice(Choice::new("Right", "Sumpf"));
        graph.insert_section(start);
        let mut ende = Section::new("Ende");
        ende.push_line("You made it.");
        graph.insert_section(ende);
        graph
    }

    #[test]
    fn starts_at_entry_section() {
        let runtime = Runtime::new(graph());
        let view = runtime.current_view();

        assert_eq!(view.name, "Start");
        assert_eq!(view.text, "Two roads.\n");
        assert_eq!(view.choices.len(), 2);
        assert!(view.found);
        assert!(!view.is_terminal);
    }

    #[test]
    fn choose_option_follows_choice() {
        let mut runtime = Runtime::new(graph());

        let picked = runtime.choose_option(1).unwrap();

        assert_eq!(picked.label, "Left");
        assert_eq!(runtime.current_section(), "Ende");
        assert!(runtime.is_terminal());
        assert!(runtime.current_view().is_terminal);
    }

    #[test]
    fn choose_option_out_of_range() {
        let mut runtime = Runtime::new(graph());

        assert_eq!(
            runtime.choose_option(0),
            Err(RuntimeError::InvalidChoice {
                choice: 0,
                total: 2
            })
        );
        assert_eq!(
            runtime.choose_option(3),
            Err(RuntimeError::InvalidChoice {
                choice: 3,
                total: 2
            })
        );
        assert_eq!(runtime.current_section(), "Start");
    }

    #[test]
    fn unknown_section_shows_fallback() {
        let mut runtime = Runtime::new(graph());
        runtime.choose_option(2).unwrap();

        let view = runtime.current_view();

        assert_eq!(view.name, "Sumpf");
        assert_eq!(view.text, FALLBACK_TEXT);
        assert!(view.choices.is_empty());
        assert!(!view.found);
        assert_eq!(
            runtime.choose_option(1),
            Err(RuntimeError::InvalidChoice {
                choice: 1,
                total: 0
            })
        );
    }

    #[test]
    fn reset_returns_to_entry() {
        let mut runtime = Runtime::new(graph());
        runtime.choose("Ende");
        runtime.reset();

        assert_eq!(runtime.current_section(), "Start");
    }

    #[test]
    fn config_changes_reserved_names() {
        let config = Config {
            entry_section: "Prolog".to_string(),
            terminal_sections: vec!["Finale".to_string()],
            fallback_text: "Fehler".to_string(),
            ..Config::default()
        };
        let mut runtime = Runtime::with_config(graph(), &config);

        let view = runtime.current_view();
        assert_eq!(view.name, "Prolog");
        assert_eq!(view.text, "Fehler");

        runtime.choose("FINALE");
        assert!(runtime.is_terminal());
        runtime.choose("Ende");
        assert!(!runtime.is_terminal());
    }

    #[test]
    fn terminal_check_ignores_case_only() {
        assert!(is_terminal_in("ende", &TERMINAL_SECTIONS));
        assert!(is_terminal_in("TOD", &TERMINAL_SECTIONS));
        assert!(is_terminal_in("Tod", &TERMINAL_SECTIONS));
        assert!(!is_terminal_in("Todesstern", &TERMINAL_SECTIONS));
        assert!(!is_terminal_in("Das Ende", &TERMINAL_SECTIONS));
        assert!(!is_terminal_in("Start", &TERMINAL_SECTIONS));
    }
}
