//! Lazy in-order walks over the ledger

use super::ScoreNode;
use crate::core::ScoreRecord;
use std::iter::FusedIterator;

/// Direction of a ledger walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Order {
    /// In-order: left, node, right
    Ascending,
    /// Reverse in-order: right, node, left
    Descending,
}

/// Borrowing iterator over ledger records in score order
///
/// Holds the path of pending ancestors on an explicit stack, so the walk is
/// lazy and never touches the tree itself.
#[derive(Debug, Clone)]
pub struct Traversal<'a> {
    stack: Vec<&'a ScoreNode>,
    order: Order,
}

impl<'a> Traversal<'a> {
    pub(super) fn new(root: Option<&'a ScoreNode>, order: Order) -> Self {
        let mut traversal = Self {
            stack: Vec::new(),
            order,
        };
        traversal.descend(root);
        traversal
    }

    /// Child visited before the node
    fn first_child(&self, node: &'a ScoreNode) -> Option<&'a ScoreNode> {
        match self.order {
            Order::Ascending => node.left.as_deref(),
            Order::Descending => node.right.as_deref(),
        }
    }

    /// Child visited after the node
    fn second_child(&self, node: &'a ScoreNode) -> Option<&'a ScoreNode> {
        match self.order {
            Order::Ascending => node.right.as_deref(),
            Order::Descending => node.left.as_deref(),
        }
    }

    fn descend(&mut self, mut node: Option<&'a ScoreNode>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = self.first_child(current);
        }
    }
}

impl<'a> Iterator for Traversal<'a> {
    type Item = &'a ScoreRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let next = self.second_child(node);
        self.descend(next);
        Some(&node.record)
    }
}

impl FusedIterator for Traversal<'_> {}
