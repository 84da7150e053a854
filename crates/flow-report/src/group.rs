/*
 * group.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Grouping of bundles by the file they were reported against.

use hashlink::LinkedHashMap;

use crate::bundle::Bundle;

/// All bundles whose primary path is `source`.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub source: String,
    pub bundles: Vec<Bundle>,
}

/// Group bundles by [`Bundle::primary_path`].
///
/// Groups come out in the order their file first appears in `bundles`, and
/// bundles keep their relative order within each group.
pub fn group_by_file<I>(bundles: I) -> Vec<Group>
where
    I: IntoIterator<Item = Bundle>,
{
    let mut groups: LinkedHashMap<String, Vec<Bundle>> = LinkedHashMap::new();
    for bundle in bundles {
        // `entry()` would move a repeated key to the back of the list
        match groups.get_mut(bundle.primary_path()) {
            Some(group) => group.push(bundle),
            None => {
                groups.insert(bundle.primary_path().to_string(), vec![bundle]);
            }
        }
    }
    groups
        .into_iter()
        .map(|(source, bundles)| Group { source, bundles })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Message, MessageKind};
    use pretty_assertions::assert_eq;

    fn bundle(path: &str, descr: &str) -> Bundle {
        Bundle {
            messages: vec![Message {
                kind: MessageKind::Blame,
                descr: descr.to_string(),
                path: path.to_string(),
                line: Some(1),
                endline: Some(1),
                context: None,
                loc: None,
            }],
            extras: vec![],
            children: vec![],
        }
    }

    fn summary(groups: &[Group]) -> Vec<(&str, Vec<&str>)> {
        groups
            .iter()
            .map(|group| {
                (
                    group.source.as_str(),
                    group
                        .bundles
                        .iter()
                        .map(|b| b.messages[0].descr.as_str())
                        .collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let groups = group_by_file(vec![
            bundle("z.js", "1"),
            bundle("a.js", "2"),
            bundle("z.js", "3"),
            bundle("m.js", "4"),
            bundle("a.js", "5"),
        ]);
        assert_eq!(
            summary(&groups),
            vec![
                ("z.js", vec!["1", "3"]),
                ("a.js", vec!["2", "5"]),
                ("m.js", vec!["4"]),
            ]
        );
    }

    #[test]
    fn test_returning_to_a_file_keeps_its_position() {
        let groups = group_by_file(vec![
            bundle("app.js", "1"),
            bundle("util.js", "2"),
            bundle("app.js", "3"),
        ]);
        assert_eq!(
            summary(&groups),
            vec![("app.js", vec!["1", "3"]), ("util.js", vec!["2"])]
        );
    }

    #[test]
    fn test_every_bundle_lands_in_one_group() {
        let input: Vec<Bundle> = (0..20)
            .map(|i| bundle(&format!("f{}.js", i % 3), &i.to_string()))
            .collect();
        let groups = group_by_file(input);
        let total: usize = groups.iter().map(|g| g.bundles.len()).sum();
        assert_eq!(total, 20);
        assert_eq!(groups.len(), 3);
    }

    #[test]
    fn test_group_nothing() {
        assert!(group_by_file(Vec::new()).is_empty());
    }
}
