use crate::section::{Section, SectionName};
use std::collections::HashMap;

pub type SectionId = usize;

/// A choice whose target names a section that is not in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedTarget {
    pub section: SectionName,
    pub label: String,
    pub target: SectionName,
}

/// Every section of a story, keyed by name.
///
/// Sections are stored in the order their header first appeared so that
/// listings are stable between runs.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StoryGraph {
    sections: Vec<Section>,
    index: HashMap<SectionName, SectionId>,
}

impl StoryGraph {
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Inserts `section`, replacing any section with the same name in place.
    /// Returns the replaced section, if there was one.
    pub fn insert_section(&mut self, section: Section) -> Option<Section> {
        match self.index.get(&section.name) {
            Some(&section_id) => Some(std::mem::replace(
                &mut self.sections[section_id],
                section,
            )),
            None => {
                let section_id = self.sections.len();
                self.index.insert(section.name.clone(), section_id);
                self.sections.push(section);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Section> {
        self.index.get(name).map(|&id| &self.sections[id])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Section> {
        match self.index.get(name) {
            Some(&id) => Some(&mut self.sections[id]),
            None => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|section| section.name.as_str())
    }

    /// All choices pointing at sections that do not exist, in file order.
    pub fn unresolved_targets(&self) -> Vec<UnresolvedTarget> {
        self.sections
            .iter()
            .flat_map(|section| {
                section
                    .choices
                    .iter()
                    .filter(|choice| !self.contains(&choice.target))
                    .map(|choice| UnresolvedTarget {
                        section: section.name.clone(),
                        label: choice.label.clone(),
                        target: choice.target.clone(),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Choice;

    #[test]
    fn insert_and_lookup() {
        let mut graph = StoryGraph::new();
        assert!(graph.insert_section(Section::new("Start")).is_none());
        assert!(graph.insert_section(Section::new("Ende")).is_none());

        assert_eq!(graph.len(), 2);
        assert!(graph.contains("Start"));
        assert!(!graph.contains("start"));
        assert_eq!(graph.get("Ende").unwrap().name, "Ende");
    }

    #[test]
    fn reinsert_replaces_in_place() {
        let mut graph = StoryGraph::new();
        let mut first = Section::new("Start");
        first.push_line("old text");
        graph.insert_section(first);
        graph.insert_section(Section::new("Cellar"));

        let replaced = graph.insert_section(Section::new("Start")).unwrap();

        assert_eq!(replaced.text, "old text\n");
        assert_eq!(graph.get("Start").unwrap().text, "");
        assert_eq!(graph.names().collect::<Vec<_>>(), vec!["Start", "Cellar"]);
    }

    #[test]
    fn unresolved_targets_in_file_order() {
        let mut graph = StoryGraph::new();
        let mut start = Section::new("Start");
        start.add_choice(Choice::new("Enter", "Cellar"));
        start.add_choice(Choice::new("Flee", "Nowhere"));
        graph.insert_section(start);
        let mut cellar = Section::new("Cellar");
        cellar.add_choice(Choice::new("Dig", "Tunnel"));
        graph.insert_section(cellar);

        let unresolved = graph.unresolved_targets();

        assert_eq!(
            unresolved,
            vec![
                UnresolvedTarget {
                    section: "Start".to_string(),
                    label: "Flee".to_string(),
                    target: "Nowhere".to_string(),
                },
                UnresolvedTarget {
                    section: "Cellar".to_string(),
                    label: "Dig".to_string(),
                    target: "Tunnel".to_string(),
                },
            ]
        );
    }
}
