pub type SectionName = String;

/// A labeled transition from one section to another.
#[derive(Debug, Default, Eq, PartialEq, Clone, Hash)]
pub struct Choice {
    pub label: String,
    pub target: SectionName,
}

impl Choice {
    pub fn new<A, B>(label: A, target: B) -> Self
    where
        A: Into<String>,
        B: Into<SectionName>,
    {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

/// A named unit of narrative text plus its outgoing choices.
///
/// `text` holds every narrative line of the section in source order, each
/// one terminated by `\n`. `choices` keeps the order in which choice lines
/// appeared, which is the order they are offered to the player.
#[derive(Debug, Default, Eq, PartialEq, Clone)]
pub struct Section {
    pub name: SectionName,
    pub text: String,
    pub choices: Vec<Choice>,
}

impl Section {
    pub fn new<A>(name: A) -> Self
    where
        A: Into<SectionName>,
    {
        Self {
            name: name.into(),
            text: String::new(),
            choices: Vec::new(),
        }
    }

    pub fn push_line(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
    }

    pub fn add_choice(&mut self, choice: Choice) {
        self.choices.push(choice);
    }

    /// The narrative lines as they were recorded, without their newlines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    pub fn has_choices(&self) -> bool {
        !self.choices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_line_appends_trailing_newline() {
        let mut section = Section::new("Start");
        section.push_line("Ash covers the road.");
        section.push_line("Nothing moves.");

        assert_eq!(section.text, "Ash covers the road.\nNothing moves.\n");
        assert_eq!(
            section.lines().collect::<Vec<_>>(),
            vec!["Ash covers the road.", "Nothing moves."]
        );
    }

    #[test]
    fn choices_keep_insertion_order() {
        let mut section = Section::new("Crossroads");
        section.add_choice(Choice::new("North", "Ruins"));
        section.add_choice(Choice::new("South", "River"));

        assert!(section.has_choices());
        assert_eq!(section.choices[0].target, "Ruins");
        assert_eq!(section.choices[1].target, "River");
    }
}
