//! Bounded binary min-heap over node handles.
//!
//! The heap doesn't store weights itself, every operation takes a `weight`
//! lookup so that it stays in sync with the arena the handles point into.
//!
//! Ties are resolved by structure only: an element moves past its parent or
//! child only if its weight is strictly smaller. Among equal weights the pop
//! order is therefore not the insertion order, but the same sequence of
//! operations always yields the same sequence of pops, which is what makes
//! the generated codes reproducible.

use crate::arena::NodeId;
use std::error;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CapacityError;

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("node capacity exceeded")
    }
}

impl error::Error for CapacityError {}

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

fn left(i: usize) -> usize {
    2 * i + 1
}

fn right(i: usize) -> usize {
    2 * i + 2
}

#[derive(Clone, Debug)]
pub struct MinHeap {
    data: Vec<NodeId>,
    capacity: usize,
}

impl MinHeap {
    pub fn with_capacity(capacity: usize) -> MinHeap {
        MinHeap {
            data: Vec::with_capacity(capacity),
            capacity: capacity,
        }
    }
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    /// Returns the handle with the smallest weight without removing it.
    pub fn peek(&self) -> Option<NodeId> {
        self.data.first().cloned()
    }
    pub fn push<F>(&mut self, id: NodeId, weight: F) -> Result<(), CapacityError>
        where F: Fn(NodeId) -> u64,
    {
        if self.data.len() >= self.capacity {
            return Err(CapacityError);
        }
        self.data.push(id);
        let last = self.data.len() - 1;
        self.sift_up(last, &weight);
        Ok(())
    }
    /// Removes the handle with the smallest weight.
    ///
    /// Returns `None` if the heap is empty.
    pub fn pop<F>(&mut self, weight: F) -> Option<NodeId>
        where F: Fn(NodeId) -> u64,
    {
        if self.data.is_empty() {
            return None;
        }
        // Moves the last element into the root slot.
        let min = self.data.swap_remove(0);
        self.sift_down(0, &weight);
        Some(min)
    }
    fn sift_up<F>(&mut self, mut pos: usize, weight: &F)
        where F: Fn(NodeId) -> u64,
    {
        while pos > 0 {
            let p = parent(pos);
            if weight(self.data[pos]) >= weight(self.data[p]) {
                break;
            }
            self.data.swap(pos, p);
            pos = p;
        }
    }
    fn sift_down<F>(&mut self, mut pos: usize, weight: &F)
        where F: Fn(NodeId) -> u64,
    {
        let len = self.data.len();
        loop {
            let mut smallest = pos;
            for &child in &[left(pos), right(pos)] {
                if child < len && weight(self.data[child]) < weight(self.data[smallest]) {
                    smallest = child;
                }
            }
            if smallest == pos {
                break;
            }
            self.data.swap(pos, smallest);
            pos = smallest;
        }
    }
    /// Checks that no parent is heavier than its children.
    pub fn is_heap<F>(&self, weight: F) -> bool
        where F: Fn(NodeId) -> u64,
    {
        (1..self.data.len()).all(|i| {
            weight(self.data[parent(i)]) <= weight(self.data[i])
        })
    }
}
