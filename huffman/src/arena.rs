use crate::Error;
use crate::frequency::Frequencies;
use crate::heap::CapacityError;
use std::fmt;
use std::ops;

/// Handle of a node inside an `Arena`.
///
/// Handles are handed out in append order and never reused. Only the crate
/// creates them, so a handle always refers to a node of the arena that
/// returned it.
///
/// ```compile_fail
/// alphahuff_huffman::NodeId::from_index(0);
/// ```
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(u16);

impl NodeId {
    pub(crate) fn from_index(index: usize) -> Option<NodeId> {
        u16::try_from(index).ok().map(NodeId)
    }
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeKind {
    /// A lowercase ASCII letter.
    Leaf(u8),
    /// Left (`0`) and right (`1`) child.
    Internal([NodeId; 2]),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Node {
    pub weight: u64,
    pub kind: NodeKind,
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        match self.kind {
            NodeKind::Leaf(_) => true,
            NodeKind::Internal(_) => false,
        }
    }
    pub fn symbol(&self) -> Option<u8> {
        match self.kind {
            NodeKind::Leaf(s) => Some(s),
            NodeKind::Internal(_) => None,
        }
    }
    pub fn children(&self) -> Option<[NodeId; 2]> {
        match self.kind {
            NodeKind::Leaf(_) => None,
            NodeKind::Internal(c) => Some(c),
        }
    }
}

/// Append-only node storage with a fixed upper bound on its size.
#[derive(Clone, Debug)]
pub struct Arena {
    nodes: Vec<Node>,
    capacity: usize,
}

impl Arena {
    pub fn with_capacity(capacity: usize) -> Result<Arena, CapacityError> {
        // Every handle must be representable.
        if capacity > usize::from(u16::MAX) + 1 {
            return Err(CapacityError);
        }
        Ok(Arena {
            nodes: Vec::with_capacity(capacity),
            capacity: capacity,
        })
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
    pub fn weight(&self, id: NodeId) -> u64 {
        self.get(id).weight
    }
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        // `capacity` fits into `u16` handles, checked in `with_capacity`.
        (0..self.nodes.len()).map(|i| NodeId(i as u16))
    }
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
    fn push(&mut self, node: Node) -> Result<NodeId, CapacityError> {
        if self.nodes.len() >= self.capacity {
            return Err(CapacityError);
        }
        let id = NodeId::from_index(self.nodes.len()).ok_or(CapacityError)?;
        self.nodes.push(node);
        Ok(id)
    }
    /// Appends one leaf per used letter, in alphabetical order.
    ///
    /// Fails without appending anything if the whole tree for these leaves
    /// (`2 * k - 1` nodes) wouldn't fit. Returns the number of leaves.
    pub fn push_leaves(&mut self, frequencies: &Frequencies) -> Result<usize, CapacityError> {
        let num_leaves = frequencies.num_symbols();
        let needed = (2 * num_leaves).saturating_sub(1);
        if self.nodes.len() + needed > self.capacity {
            return Err(CapacityError);
        }
        for (symbol, weight) in frequencies.iter_used() {
            self.push(Node {
                weight: weight,
                kind: NodeKind::Leaf(symbol),
            })?;
        }
        info!("created {} leaf nodes", num_leaves);
        Ok(num_leaves)
    }
    /// Appends the parent of `left` and `right`, weighing as much as both.
    pub fn push_internal(&mut self, left: NodeId, right: NodeId) -> Result<NodeId, Error> {
        let weight = self.weight(left).checked_add(self.weight(right))
            .ok_or(Error::WeightOverflow)?;
        Ok(self.push(Node {
            weight: weight,
            kind: NodeKind::Internal([left, right]),
        })?)
    }
}

impl ops::Index<NodeId> for Arena {
    type Output = Node;
    fn index(&self, id: NodeId) -> &Node {
        self.get(id)
    }
}

#[cfg(test)]
mod test {
    use crate::Error;
    use crate::frequency::Frequencies;
    use crate::heap::CapacityError;
    use super::Arena;
    use super::NodeId;
    use super::NodeKind;

    #[test]
    fn leaves_alphabetical() {
        let mut arena = Arena::with_capacity(64).unwrap();
        let n = arena.push_leaves(&Frequencies::from_bytes(b"ccbAa")).unwrap();
        assert_eq!(n, 3);
        let leaves: Vec<_> = arena.nodes().iter()
            .map(|n| (n.symbol().unwrap(), n.weight))
            .collect();
        assert_eq!(leaves, [(b'a', 2), (b'b', 1), (b'c', 2)]);
    }

    #[test]
    fn no_leaves() {
        let mut arena = Arena::with_capacity(64).unwrap();
        assert_eq!(arena.push_leaves(&Frequencies::from_bytes(b"123!!!")), Ok(0));
        assert!(arena.is_empty());
    }

    #[test]
    fn internal_weight() {
        let mut arena = Arena::with_capacity(64).unwrap();
        arena.push_leaves(&Frequencies::from_bytes(b"aabbb")).unwrap();
        let a = NodeId::from_index(0).unwrap();
        let b = NodeId::from_index(1).unwrap();
        let parent = arena.push_internal(a, b).unwrap();
        assert_eq!(parent.index(), 2);
        assert_eq!(arena[parent].weight, 5);
        assert_eq!(arena[parent].kind, NodeKind::Internal([a, b]));
        assert!(!arena[parent].is_leaf());
    }

    #[test]
    fn internal_weight_overflow() {
        let mut counts = [0; 26];
        counts[0] = u64::MAX / 2 + 1;
        counts[1] = u64::MAX / 2 + 1;
        let mut arena = Arena::with_capacity(64).unwrap();
        arena.push_leaves(&Frequencies::from_counts(counts)).unwrap();
        let ids: Vec<_> = arena.ids().collect();
        assert!(matches!(arena.push_internal(ids[0], ids[1]), Err(Error::WeightOverflow)));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn capacity_checked_upfront() {
        // Three leaves need five nodes.
        let mut arena = Arena::with_capacity(4).unwrap();
        assert_eq!(arena.push_leaves(&Frequencies::from_bytes(b"abc")), Err(CapacityError));
        assert!(arena.is_empty());

        let mut arena = Arena::with_capacity(5).unwrap();
        assert_eq!(arena.push_leaves(&Frequencies::from_bytes(b"abc")), Ok(3));
    }

    #[test]
    fn capacity_too_large() {
        assert!(Arena::with_capacity(65536).is_ok());
        assert_eq!(Arena::with_capacity(65537).unwrap_err(), CapacityError);
    }
}
