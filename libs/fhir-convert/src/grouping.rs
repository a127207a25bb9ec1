//! Grouping of concepts into ValueSet inclusion groups
//!
//! Groups are keyed by exact equality of the system value. An absent
//! system (`None`) and an empty-string system (`Some("")`) are distinct
//! keys and end up in separate groups.

use std::collections::HashMap;
use vsgen_models::{ValueSetConcept, ValueSetInclude};

/// A concept tagged with the system it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub system: Option<String>,
    pub concept: ValueSetConcept,
}

/// Group records by system in a single pass.
///
/// Group order follows the first appearance of each system, and concepts
/// keep their arrival order inside a group. Nothing is sorted and duplicate
/// codes are kept.
pub fn group_by_system<I, R>(records: I) -> Vec<ValueSetInclude>
where
    I: IntoIterator<Item = R>,
    R: Into<Record>,
{
    let mut groups: Vec<ValueSetInclude> = Vec::new();
    let mut index: HashMap<Option<String>, usize> = HashMap::new();

    for record in records {
        let Record { system, concept } = record.into();
        match index.get(&system) {
            Some(&i) => groups[i].concept.push(concept),
            None => {
                index.insert(system.clone(), groups.len());
                let mut group = ValueSetInclude::new(system);
                group.concept.push(concept);
                groups.push(group);
            }
        }
    }

    tracing::debug!(groups = groups.len(), "grouped concepts by system");
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(system: Option<&str>, code: &str) -> Record {
        Record {
            system: system.map(str::to_string),
            concept: ValueSetConcept::new(code, None),
        }
    }

    fn codes(group: &ValueSetInclude) -> Vec<&str> {
        group.concept.iter().map(|c| c.code.as_str()).collect()
    }

    #[test]
    fn test_groups_follow_first_appearance() {
        let groups = group_by_system(vec![
            record(Some("http://b"), "1"),
            record(Some("http://a"), "2"),
            record(Some("http://b"), "3"),
            record(Some("http://c"), "4"),
            record(Some("http://a"), "5"),
        ]);

        let systems: Vec<_> = groups.iter().map(|g| g.system.as_deref()).collect();
        assert_eq!(
            systems,
            vec![Some("http://b"), Some("http://a"), Some("http://c")]
        );
        assert_eq!(codes(&groups[0]), vec!["1", "3"]);
        assert_eq!(codes(&groups[1]), vec!["2", "5"]);
        assert_eq!(codes(&groups[2]), vec!["4"]);
    }

    #[test]
    fn test_total_concepts_preserved() {
        let input: Vec<_> = (0..50)
            .map(|i| record(Some(["x", "y", "z"][i % 3]), &i.to_string()))
            .collect();
        let groups = group_by_system(input);

        let total: usize = groups.iter().map(|g| g.concept.len()).sum();
        assert_eq!(total, 50);
        assert_eq!(groups.len(), 3);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let groups = group_by_system(vec![
            record(Some("s"), "A"),
            record(Some("s"), "A"),
        ]);
        assert_eq!(codes(&groups[0]), vec!["A", "A"]);
    }

    #[test]
    fn test_empty_and_absent_system_are_distinct() {
        let groups = group_by_system(vec![
            record(None, "A2"),
            record(Some(""), "A1"),
            record(None, "A3"),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].system, None);
        assert_eq!(codes(&groups[0]), vec!["A2", "A3"]);
        assert_eq!(groups[1].system.as_deref(), Some(""));
        assert_eq!(codes(&groups[1]), vec!["A1"]);
    }

    #[test]
    fn test_system_match_is_exact() {
        let groups = group_by_system(vec![
            record(Some("http://sys"), "A"),
            record(Some("http://sys/"), "B"),
            record(Some("HTTP://sys"), "C"),
        ]);
        assert_eq!(groups.len(), 3);
    }

    #[test]
    fn test_no_records_no_groups() {
        assert!(group_by_system(Vec::<Record>::new()).is_empty());
    }
}
