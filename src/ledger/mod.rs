//! Score ledger
//!
//! An unbalanced binary search tree of [`ScoreRecord`]s ordered by score.
//! Equal scores descend to the right, so among entries with the same score the
//! earliest inserted comes first in ascending order.
//!
//! Removal searches by *name* along this score-ordered tree: at each node the
//! target name is compared with the node's name and the search goes left when
//! it sorts before, right when after. An entry whose name does not agree with
//! that descent is not found and stays in the ledger.

mod traversal;

pub use traversal::Traversal;
use traversal::Order;

use crate::core::ScoreRecord;
use std::cmp::Ordering;
use tracing::debug;

type Link = Option<Box<ScoreNode>>;

#[derive(Debug, Clone)]
struct ScoreNode {
    record: ScoreRecord,
    left: Link,
    right: Link,
}

impl ScoreNode {
    fn leaf(record: ScoreRecord) -> Box<Self> {
        Box::new(Self {
            record,
            left: None,
            right: None,
        })
    }
}

/// Score-ordered binary search tree of player records
#[derive(Debug, Clone, Default)]
pub struct ScoreLedger {
    root: Link,
    len: usize,
}

impl ScoreLedger {
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert a record
    ///
    /// Names and scores need not be unique.
    ///
    /// # Examples
    /// ```
    /// use crossword_engine::ledger::ScoreLedger;
    ///
    /// let mut ledger = ScoreLedger::new();
    /// ledger.insert("ada", 30, 3);
    /// ledger.insert("bob", 10, 1);
    ///
    /// let names: Vec<_> = ledger.traverse_descending().map(|r| r.name.as_str()).collect();
    /// assert_eq!(names, ["ada", "bob"]);
    /// ```
    pub fn insert(&mut self, name: impl Into<String>, score: i32, words_correct: u32) {
        self.insert_record(ScoreRecord::new(name, score, words_correct));
    }

    /// Insert an existing record
    pub fn insert_record(&mut self, record: ScoreRecord) {
        debug!(name = %record.name, score = record.score, "ledger insert");
        insert_into(&mut self.root, record);
        self.len += 1;
    }

    /// Remove the entry named `name`
    ///
    /// Returns the removed record, or `None` when the name-guided search finds
    /// nothing; the ledger is then unchanged.
    ///
    /// Removing a node with two children copies its successor up and then
    /// searches for that successor by name. When the search misses, the
    /// successor's record stays in the tree twice and the entry count is
    /// unchanged.
    pub fn remove(&mut self, name: &str) -> Option<ScoreRecord> {
        let removal = remove_from(&mut self.root, name);
        if removal.as_ref().is_some_and(|r| r.unlinked) {
            self.len -= 1;
        }
        debug!(
            name,
            found = removal.is_some(),
            unlinked = removal.as_ref().is_some_and(|r| r.unlinked),
            "ledger remove"
        );
        removal.map(|r| r.record)
    }

    /// Records from lowest to highest score
    #[must_use]
    pub fn traverse_ascending(&self) -> Traversal<'_> {
        Traversal::new(self.root.as_deref(), Order::Ascending)
    }

    /// Records from highest to lowest score (leaderboard order)
    #[must_use]
    pub fn traverse_descending(&self) -> Traversal<'_> {
        Traversal::new(self.root.as_deref(), Order::Descending)
    }
}

fn insert_into(link: &mut Link, record: ScoreRecord) {
    match link {
        None => *link = Some(ScoreNode::leaf(record)),
        Some(node) => {
            if record.score < node.record.score {
                insert_into(&mut node.left, record);
            } else {
                insert_into(&mut node.right, record);
            }
        }
    }
}

struct Removal {
    record: ScoreRecord,
    /// Whether a node left the tree
    unlinked: bool,
}

fn remove_from(link: &mut Link, name: &str) -> Option<Removal> {
    let node = link.as_mut()?;

    match name.cmp(node.record.name.as_str()) {
        Ordering::Less => remove_from(&mut node.left, name),
        Ordering::Greater => remove_from(&mut node.right, name),
        Ordering::Equal => match (node.left.is_some(), node.right.is_some()) {
            (_, false) => {
                let node = link.take()?;
                *link = node.left;
                Some(Removal {
                    record: node.record,
                    unlinked: true,
                })
            }
            (false, true) => {
                let node = link.take()?;
                *link = node.right;
                Some(Removal {
                    record: node.record,
                    unlinked: true,
                })
            }
            (true, true) => {
                // Promote the in-order successor, then delete it from the right subtree by name.
                let successor = leftmost(node.right.as_deref()?).clone();
                let successor_name = successor.name.clone();
                let record = std::mem::replace(&mut node.record, successor);
                let unlinked =
                    remove_from(&mut node.right, &successor_name).is_some_and(|r| r.unlinked);
                Some(Removal { record, unlinked })
            }
        },
    }
}

fn leftmost(mut node: &ScoreNode) -> &ScoreRecord {
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    &node.record
}

impl Extend<ScoreRecord> for ScoreLedger {
    fn extend<I: IntoIterator<Item = ScoreRecord>>(&mut self, iter: I) {
        for record in iter {
            self.insert_record(record);
        }
    }
}

impl FromIterator<ScoreRecord> for ScoreLedger {
    fn from_iter<I: IntoIterator<Item = ScoreRecord>>(iter: I) -> Self {
        let mut ledger = Self::new();
        ledger.extend(iter);
        ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(traversal: Traversal<'_>) -> Vec<i32> {
        traversal.map(|r| r.score).collect()
    }

    fn names(traversal: Traversal<'_>) -> Vec<&str> {
        traversal.map(|r| r.name.as_str()).collect()
    }

    fn ledger_of(entries: &[(&str, i32)]) -> ScoreLedger {
        entries
            .iter()
            .map(|&(name, score)| ScoreRecord::new(name, score, 0))
            .collect()
    }

    #[test]
    fn empty_ledger() {
        let ledger = ScoreLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert_eq!(ledger.traverse_ascending().count(), 0);
        assert_eq!(ledger.traverse_descending().count(), 0);
    }

    #[test]
    fn ascending_is_sorted_by_score() {
        let ledger = ledger_of(&[("d", 40), ("a", -6), ("c", 22), ("b", 8), ("e", 0)]);
        assert_eq!(scores(ledger.traverse_ascending()), vec![-6, 0, 8, 22, 40]);
        assert_eq!(ledger.len(), 5);
    }

    #[test]
    fn equal_scores_keep_insertion_order() {
        let ledger = ledger_of(&[("A", 10), ("B", 30), ("C", 10)]);

        assert_eq!(scores(ledger.traverse_ascending()), vec![10, 10, 30]);
        assert_eq!(names(ledger.traverse_ascending()), vec!["A", "C", "B"]);
        assert_eq!(names(ledger.traverse_descending()), vec!["B", "C", "A"]);
    }

    #[test]
    fn descending_is_reverse_of_ascending() {
        let ledger = ledger_of(&[
            ("p", 12),
            ("q", -2),
            ("r", 12),
            ("s", 50),
            ("t", 0),
            ("u", 12),
            ("v", 8),
        ]);

        let mut ascending: Vec<_> = ledger.traverse_ascending().cloned().collect();
        ascending.reverse();
        let descending: Vec<_> = ledger.traverse_descending().cloned().collect();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn traversals_are_restartable() {
        let ledger = ledger_of(&[("x", 5), ("y", 1), ("z", 9)]);
        let first = scores(ledger.traverse_descending());
        let second = scores(ledger.traverse_descending());
        assert_eq!(first, second);
        assert_eq!(first, vec![9, 5, 1]);
    }

    #[test]
    fn duplicate_names_coexist() {
        let ledger = ledger_of(&[("sam", 10), ("sam", 20)]);
        assert_eq!(ledger.len(), 2);
        assert_eq!(names(ledger.traverse_ascending()), vec!["sam", "sam"]);
    }

    #[test]
    fn remove_absent_name_is_noop() {
        let mut ledger = ledger_of(&[("m", 10), ("c", 5), ("t", 15)]);
        let before: Vec<_> = ledger.traverse_ascending().cloned().collect();

        assert_eq!(ledger.remove("nobody"), None);

        let after: Vec<_> = ledger.traverse_ascending().cloned().collect();
        assert_eq!(before, after);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn remove_leaf() {
        let mut ledger = ledger_of(&[("m", 10), ("c", 5), ("t", 15)]);

        let removed = ledger.remove("c").unwrap();

        assert_eq!(removed.score, 5);
        assert_eq!(names(ledger.traverse_ascending()), vec!["m", "t"]);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn remove_root_with_one_child() {
        let mut ledger = ledger_of(&[("m", 10), ("t", 15)]);
        ledger.remove("m").unwrap();
        assert_eq!(names(ledger.traverse_ascending()), vec!["t"]);
    }

    #[test]
    fn remove_only_entry() {
        let mut ledger = ledger_of(&[("solo", 3)]);
        assert!(ledger.remove("solo").is_some());
        assert!(ledger.is_empty());
    }

    #[test]
    fn remove_with_two_children_promotes_successor() {
        // Names agree with score order here, so every descent succeeds.
        let mut ledger = ledger_of(&[("m", 50), ("c", 20), ("t", 80), ("p", 60), ("x", 90)]);

        let removed = ledger.remove("m").unwrap();

        assert_eq!(removed.score, 50);
        assert_eq!(names(ledger.traverse_ascending()), vec!["c", "p", "t", "x"]);
        assert_eq!(scores(ledger.traverse_ascending()), vec![20, 60, 80, 90]);
        assert_eq!(ledger.len(), 4);
    }

    #[test]
    fn remove_follows_name_order_not_score_order() {
        // "b" sits in the right subtree (higher score) but sorts before "m".
        let mut ledger = ledger_of(&[("m", 10), ("b", 20)]);

        assert_eq!(ledger.remove("b"), None);
        assert_eq!(ledger.len(), 2);
        assert_eq!(names(ledger.traverse_ascending()), vec!["m", "b"]);
    }

    #[test]
    fn successor_missed_by_name_stays_in_tree() {
        // "z" is the successor of "m" but sorts after "b", so the follow-up
        // search goes right of "b" and never reaches it.
        let mut ledger = ledger_of(&[("m", 50), ("c", 20), ("b", 80), ("z", 60)]);

        let removed = ledger.remove("m").unwrap();

        assert_eq!(removed.name, "m");
        assert_eq!(names(ledger.traverse_ascending()), vec!["c", "z", "z", "b"]);
        assert_eq!(scores(ledger.traverse_ascending()), vec![20, 60, 60, 80]);
        assert_eq!(ledger.len(), 4);
        assert_eq!(ledger.len(), ledger.traverse_ascending().count());
    }

    #[test]
    fn len_matches_tree_after_repeated_missed_successors() {
        let mut ledger = ledger_of(&[("m", 50), ("c", 20), ("b", 80), ("z", 60)]);
        ledger.remove("m").unwrap();

        for _ in 0..5 {
            assert_eq!(ledger.remove("z").map(|r| r.score), Some(60));
            assert_eq!(ledger.len(), ledger.traverse_ascending().count());
        }

        ledger.remove("c").unwrap();
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.len(), ledger.traverse_descending().count());
        assert!(!ledger.is_empty());
    }

    #[test]
    fn insert_after_remove() {
        let mut ledger = ledger_of(&[("m", 10), ("c", 5)]);
        ledger.remove("c").unwrap();
        ledger.insert("z", 1, 0);
        assert_eq!(scores(ledger.traverse_ascending()), vec![1, 10]);
    }

    #[test]
    fn words_correct_carried() {
        let mut ledger = ScoreLedger::new();
        ledger.insert("ann", 28, 3);
        let top = ledger.traverse_descending().next().unwrap();
        assert_eq!(top, &ScoreRecord::new("ann", 28, 3));
    }
}
