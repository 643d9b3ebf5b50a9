//! Recorded actions on a card.
//!
//! `ActionLog` is a multiset over `ActionKind`: one entry per kind with a
//! positive repetition count. Entries keep the order in which their kind
//! was first recorded. A count never sits at zero; decrementing the last
//! occurrence removes the entry.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::kind::ActionKind;
use crate::error::SavePointsError;

/// One recorded action kind and how many times it was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionEntry {
    pub action: ActionKind,
    pub count: u32,
}

/// Direction of an action count update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Adjust {
    Increment,
    Decrement,
}

/// Recorded action multiset for one card.
///
/// There are only five action kinds, so entries live inline.
///
/// Deserializing rejects zero counts and repeated kinds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SmallVec<[ActionEntry; 5]>", into = "SmallVec<[ActionEntry; 5]>")]
pub struct ActionLog {
    entries: SmallVec<[ActionEntry; 5]>,
}

impl TryFrom<SmallVec<[ActionEntry; 5]>> for ActionLog {
    type Error = SavePointsError;

    fn try_from(entries: SmallVec<[ActionEntry; 5]>) -> Result<Self, Self::Error> {
        for (i, entry) in entries.iter().enumerate() {
            if entry.count == 0 {
                return Err(SavePointsError::ZeroActionCount(entry.action));
            }
            if entries[..i].iter().any(|e| e.action == entry.action) {
                return Err(SavePointsError::DuplicateAction(entry.action));
            }
        }
        Ok(Self { entries })
    }
}

impl From<ActionLog> for SmallVec<[ActionEntry; 5]> {
    fn from(log: ActionLog) -> Self {
        log.entries
    }
}

impl ActionLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Repetition count for `kind` (0 when absent).
    #[must_use]
    pub fn count(&self, kind: ActionKind) -> u32 {
        self.entries
            .iter()
            .find(|e| e.action == kind)
            .map_or(0, |e| e.count)
    }

    /// Whether any epiphany or divine epiphany has been recorded.
    #[must_use]
    pub fn has_epiphany(&self) -> bool {
        self.entries.iter().any(|e| e.action.is_epiphany())
    }

    /// Record one more occurrence of `kind`. Returns the new count.
    pub fn increment(&mut self, kind: ActionKind) -> u32 {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.action == kind) {
            entry.count = entry.count.saturating_add(1);
            return entry.count;
        }
        self.entries.push(ActionEntry { action: kind, count: 1 });
        1
    }

    /// Drop one occurrence of `kind`. Returns the new count.
    ///
    /// An absent kind stays absent; reaching zero removes the entry.
    pub fn decrement(&mut self, kind: ActionKind) -> u32 {
        let Some(pos) = self.entries.iter().position(|e| e.action == kind) else {
            return 0;
        };
        let entry = &mut self.entries[pos];
        entry.count = entry.count.saturating_sub(1);
        let count = entry.count;
        if count == 0 {
            self.entries.remove(pos);
        }
        count
    }

    /// Apply an increment or decrement.
    pub fn adjust(&mut self, kind: ActionKind, adjust: Adjust) -> u32 {
        match adjust {
            Adjust::Increment => self.increment(kind),
            Adjust::Decrement => self.decrement(kind),
        }
    }

    /// Set the count for `kind` directly. Zero removes the entry.
    pub fn set(&mut self, kind: ActionKind, count: u32) {
        let pos = self.entries.iter().position(|e| e.action == kind);
        match (pos, count) {
            (Some(pos), 0) => {
                self.entries.remove(pos);
            }
            (Some(pos), n) => self.entries[pos].count = n,
            (None, 0) => {}
            (None, n) => self.entries.push(ActionEntry { action: kind, count: n }),
        }
    }

    /// Builder form of `set`.
    #[must_use]
    pub fn with(mut self, kind: ActionKind, count: u32) -> Self {
        self.set(kind, count);
        self
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate entries in first-recorded order.
    pub fn iter(&self) -> impl Iterator<Item = &ActionEntry> {
        self.entries.iter()
    }

    /// Number of distinct kinds recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ActionLog {
    type Item = &'a ActionEntry;
    type IntoIter = std::slice::Iter<'a, ActionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_creates_entry() {
        let mut log = ActionLog::new();
        assert_eq!(log.count(ActionKind::Copy), 0);

        assert_eq!(log.increment(ActionKind::Copy), 1);
        assert_eq!(log.increment(ActionKind::Copy), 2);
        assert_eq!(log.count(ActionKind::Copy), 2);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_decrement_removes_at_zero() {
        let mut log = ActionLog::new();
        log.increment(ActionKind::Remove);
        log.increment(ActionKind::Remove);

        assert_eq!(log.decrement(ActionKind::Remove), 1);
        assert_eq!(log.len(), 1);
        assert_eq!(log.decrement(ActionKind::Remove), 0);
        assert!(log.is_empty());
    }

    #[test]
    fn test_decrement_absent_is_noop() {
        let mut log = ActionLog::new().with(ActionKind::Convert, 1);
        assert_eq!(log.decrement(ActionKind::Copy), 0);
        assert_eq!(log.len(), 1);
        assert_eq!(log.count(ActionKind::Copy), 0);
    }

    #[test]
    fn test_entries_keep_first_recorded_order() {
        let mut log = ActionLog::new();
        log.increment(ActionKind::Remove);
        log.increment(ActionKind::Epiphany);
        log.increment(ActionKind::Remove);

        let kinds: Vec<_> = log.iter().map(|e| e.action).collect();
        assert_eq!(kinds, vec![ActionKind::Remove, ActionKind::Epiphany]);
    }

    #[test]
    fn test_set_zero_removes() {
        let mut log = ActionLog::new().with(ActionKind::Copy, 3);
        log.set(ActionKind::Copy, 0);
        assert!(log.is_empty());
        log.set(ActionKind::Copy, 0);
        assert!(log.is_empty());
    }

    #[test]
    fn test_has_epiphany() {
        let log = ActionLog::new().with(ActionKind::Copy, 2);
        assert!(!log.has_epiphany());
        assert!(log.with(ActionKind::DivineEpiphany, 1).has_epiphany());
    }

    #[test]
    fn test_adjust() {
        let mut log = ActionLog::new();
        assert_eq!(log.adjust(ActionKind::Epiphany, Adjust::Increment), 1);
        assert_eq!(log.adjust(ActionKind::Epiphany, Adjust::Decrement), 0);
        assert_eq!(log.adjust(ActionKind::Epiphany, Adjust::Decrement), 0);
        assert!(log.is_empty());
    }

    #[test]
    fn test_serialization() {
        let log = ActionLog::new()
            .with(ActionKind::Epiphany, 1)
            .with(ActionKind::Copy, 2);
        let json = serde_json::to_string(&log).unwrap();
        assert_eq!(
            json,
            r#"[{"action":"epiphany","count":1},{"action":"copy","count":2}]"#
        );
        let back: ActionLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
    }

    #[test]
    fn test_deserialize_rejects_zero_count() {
        let json = r#"[{"action":"copy","count":2},{"action":"epiphany","count":0}]"#;
        let err = serde_json::from_str::<ActionLog>(json).unwrap_err();
        assert!(err.to_string().contains("zero count"));
    }

    #[test]
    fn test_deserialize_rejects_repeated_kind() {
        let json = r#"[{"action":"copy","count":2},{"action":"copy","count":5}]"#;
        let err = serde_json::from_str::<ActionLog>(json).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_increment_saturates() {
        let mut log = ActionLog::new().with(ActionKind::Convert, u32::MAX);
        assert_eq!(log.increment(ActionKind::Convert), u32::MAX);
    }
}
