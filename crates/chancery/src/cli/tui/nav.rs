//! Navigation rail: one entry per module, grouped under the original
//! sidebar headings.

use crate::modules::ModuleConfig;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct NavEntry {
    pub group: &'static str,
    pub title: &'static str,
    pub key: &'static str,
    /// Index into the controller vector.
    pub module_index: usize,
}

pub fn build(registry: &[Arc<ModuleConfig>]) -> Vec<NavEntry> {
    registry
        .iter()
        .enumerate()
        .map(|(index, config)| NavEntry {
            group: config.group,
            title: config.title,
            key: config.key,
            module_index: index,
        })
        .collect()
}

/// Whether this entry opens a new group in the rail (first of its heading).
pub fn starts_group(entries: &[NavEntry], index: usize) -> bool {
    match index.checked_sub(1) {
        Some(previous) => entries[previous].group != entries[index].group,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules;

    #[test]
    fn entries_cover_every_module_once() {
        let registry = modules::registry();
        let entries = build(&registry);
        assert_eq!(entries.len(), registry.len());
        let mut seen = std::collections::HashSet::new();
        for entry in &entries {
            assert!(seen.insert(entry.key), "duplicate nav key {}", entry.key);
        }
    }

    #[test]
    fn group_starts_follow_heading_changes() {
        let registry = modules::registry();
        let entries = build(&registry);
        assert!(starts_group(&entries, 0));
        for index in 1..entries.len() {
            let expected = entries[index - 1].group != entries[index].group;
            assert_eq!(starts_group(&entries, index), expected);
        }
    }

    #[test]
    fn module_indices_are_positional() {
        let registry = modules::registry();
        let entries = build(&registry);
        for (index, entry) in entries.iter().enumerate() {
            assert_eq!(entry.module_index, index);
            assert_eq!(registry[index].key, entry.key);
        }
    }
}
