//! Immutable id -> label lookup tables.
//!
//! Reference lists are built once by the module registry and shared by
//! reference. A missing id degrades to `"-"`; lookups never fail.

use serde::Serialize;

/// Placeholder shown when an id cannot be resolved.
pub const UNRESOLVED: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceEntry {
    pub id: i64,
    /// Stable machine name (`VEHICULE`, `PENDING`, ...) when the source
    /// defines one.
    pub code: Option<&'static str>,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceList {
    pub name: &'static str,
    entries: Vec<ReferenceEntry>,
}

impl ReferenceList {
    pub fn new(name: &'static str, pairs: &[(i64, &'static str)]) -> Self {
        Self {
            name,
            entries: pairs
                .iter()
                .map(|(id, label)| ReferenceEntry {
                    id: *id,
                    code: None,
                    label,
                })
                .collect(),
        }
    }

    pub fn with_codes(name: &'static str, triples: &[(i64, &'static str, &'static str)]) -> Self {
        Self {
            name,
            entries: triples
                .iter()
                .map(|(id, code, label)| ReferenceEntry {
                    id: *id,
                    code: Some(code),
                    label,
                })
                .collect(),
        }
    }

    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn label(&self, id: i64) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.label)
    }

    /// Label for display; unresolved ids render as [`UNRESOLVED`].
    pub fn label_or_dash(&self, id: i64) -> &'static str {
        self.label(id).unwrap_or(UNRESOLVED)
    }

    pub fn code(&self, id: i64) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .and_then(|entry| entry.code)
    }

    pub fn first_id(&self) -> Option<i64> {
        self.entries.first().map(|entry| entry.id)
    }

    pub fn position(&self, id: i64) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Id after `current`, wrapping. Used by select inputs cycling options.
    pub fn next_id(&self, current: Option<i64>) -> Option<i64> {
        if self.entries.is_empty() {
            return None;
        }
        let next = match current.and_then(|id| self.position(id)) {
            Some(pos) => (pos + 1) % self.entries.len(),
            None => 0,
        };
        Some(self.entries[next].id)
    }

    /// Id before `current`, wrapping.
    pub fn prev_id(&self, current: Option<i64>) -> Option<i64> {
        if self.entries.is_empty() {
            return None;
        }
        let prev = match current.and_then(|id| self.position(id)) {
            Some(0) | None => self.entries.len() - 1,
            Some(pos) => pos - 1,
        };
        Some(self.entries[prev].id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sexes() -> ReferenceList {
        ReferenceList::new("sexes", &[(1, "Masculin"), (2, "Féminin")])
    }

    #[test]
    fn resolves_labels_and_degrades_to_dash() {
        let list = sexes();
        assert_eq!(list.label(1), Some("Masculin"));
        assert_eq!(list.label_or_dash(99), UNRESOLVED);
    }

    #[test]
    fn cycling_wraps_both_ways() {
        let list = sexes();
        assert_eq!(list.next_id(None), Some(1));
        assert_eq!(list.next_id(Some(2)), Some(1));
        assert_eq!(list.prev_id(Some(1)), Some(2));
        assert_eq!(list.prev_id(None), Some(2));
    }

    #[test]
    fn codes_resolve_when_present() {
        let list = ReferenceList::with_codes(
            "asset_types",
            &[(1, "VEHICULE", "Véhicule"), (2, "MOBILIER", "Mobilier")],
        );
        assert_eq!(list.code(1), Some("VEHICULE"));
        assert_eq!(list.code(3), None);
        assert_eq!(list.label_or_dash(2), "Mobilier");
    }
}
