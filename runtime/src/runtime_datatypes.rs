use endzeit_common::{Choice, SectionName};

/// What the presentation layer shows for the current section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub name: SectionName,
    pub text: String,
    pub choices: Vec<Choice>,
    pub is_terminal: bool,
    /// False when the section is missing and `text` is the fallback.
    pub found: bool,
}

impl View {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}
