use endzeit_common::{SectionName, ENTRY_SECTION};

/// The player's position in the story: nothing but the current section
/// name. There is no history, so there is no way back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigationState {
    current: SectionName,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(ENTRY_SECTION)
    }
}

impl NavigationState {
    pub fn new<A>(entry: A) -> Self
    where
        A: Into<SectionName>,
    {
        Self {
            current: entry.into(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Moves to `target` unconditionally. Whether the section exists is
    /// only checked when it is displayed.
    pub fn advance<A>(self, target: A) -> Self
    where
        A: Into<SectionName>,
    {
        Self {
            current: target.into(),
        }
    }
}
