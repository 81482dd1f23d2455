//! Unbalanced binary search tree index for course records.
//!
//! Nodes live in an arena (`Vec`) and link by index, so ownership stays with
//! the tree and no raw pointers are involved. Keys are course ids compared
//! lexicographically. There is no rebalancing: lookup cost degrades to the
//! insertion order's worst case, which is acceptable at catalog scale.

use crate::api::CourseId;
use crate::models::CourseRecord;
use crate::store::error::{RegistryError, RegistryResult};

#[derive(Debug, Clone)]
struct Node {
    record: CourseRecord,
    left: Option<usize>,
    right: Option<usize>,
}

/// BST keyed by course id, arena-backed.
#[derive(Debug, Clone, Default)]
pub struct CourseTree {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl CourseTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a course as a new leaf.
    ///
    /// Descends comparing ids, smaller keys to the left. A key equal to an
    /// existing node is rejected with `DuplicateCourse`: a second node under
    /// the same id could never be reached by `search`.
    pub fn insert(&mut self, record: CourseRecord) -> RegistryResult<()> {
        let new_idx = self.nodes.len();

        let Some(mut current) = self.root else {
            self.nodes.push(Node {
                record,
                left: None,
                right: None,
            });
            self.root = Some(new_idx);
            return Ok(());
        };

        loop {
            let node = &self.nodes[current];
            match record.id().cmp(node.record.id()) {
                std::cmp::Ordering::Equal => {
                    return Err(RegistryError::DuplicateCourse {
                        id: record.id().clone(),
                    });
                }
                std::cmp::Ordering::Less => match node.left {
                    Some(next) => current = next,
                    None => {
                        self.nodes.push(Node {
                            record,
                            left: None,
                            right: None,
                        });
                        self.nodes[current].left = Some(new_idx);
                        return Ok(());
                    }
                },
                std::cmp::Ordering::Greater => match node.right {
                    Some(next) => current = next,
                    None => {
                        self.nodes.push(Node {
                            record,
                            left: None,
                            right: None,
                        });
                        self.nodes[current].right = Some(new_idx);
                        return Ok(());
                    }
                },
            }
        }
    }

    fn position(&self, id: &CourseId) -> Option<usize> {
        let mut current = self.root;
        while let Some(idx) = current {
            let node = &self.nodes[idx];
            match id.cmp(node.record.id()) {
                std::cmp::Ordering::Equal => return Some(idx),
                std::cmp::Ordering::Less => current = node.left,
                std::cmp::Ordering::Greater => current = node.right,
            }
        }
        None
    }

    /// Look up a course by id.
    pub fn search(&self, id: &CourseId) -> Option<&CourseRecord> {
        self.position(id).map(|idx| &self.nodes[idx].record)
    }

    /// Look up a course by id for mutation.
    pub fn search_mut(&mut self, id: &CourseId) -> Option<&mut CourseRecord> {
        let idx = self.position(id)?;
        Some(&mut self.nodes[idx].record)
    }

    pub fn exists(&self, id: &CourseId) -> bool {
        self.position(id).is_some()
    }

    /// Lazy in-order traversal: course records in ascending id order.
    ///
    /// The iterator is finite and restartable; each call starts a fresh
    /// traversal.
    pub fn iter_inorder(&self) -> InorderIter<'_> {
        let mut iter = InorderIter {
            tree: self,
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root);
        iter
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// In-order iterator over a `CourseTree` (left, node, right).
pub struct InorderIter<'a> {
    tree: &'a CourseTree,
    stack: Vec<usize>,
}

impl<'a> InorderIter<'a> {
    fn push_left_spine(&mut self, mut current: Option<usize>) {
        while let Some(idx) = current {
            self.stack.push(idx);
            current = self.tree.nodes[idx].left;
        }
    }
}

impl<'a> Iterator for InorderIter<'a> {
    type Item = &'a CourseRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let node = &self.tree.nodes[idx];
        self.push_left_spine(node.right);
        Some(&node.record)
    }
}
