use crate::Error;
use crate::arena::Arena;
use crate::arena::NodeId;
use crate::heap::MinHeap;

/// Builds the tree above the leaves already in `arena` and returns its root.
///
/// The leaves form the initial forest, so this is meant to be called right
/// after `Arena::push_leaves`. Returns `Error::NoSymbols` if the arena has no
/// nodes and `Error::AlreadyBuilt` if it already contains internal nodes.
pub fn build(arena: &mut Arena) -> Result<NodeId, Error> {
    if !arena.nodes().iter().all(|n| n.is_leaf()) {
        return Err(Error::AlreadyBuilt);
    }
    let mut heap = MinHeap::with_capacity(arena.capacity());
    for id in arena.ids() {
        heap.push(id, |n| arena.weight(n))?;
    }

    // The heap holds exactly the roots of the current forest.
    while heap.len() > 1 {
        // `heap.len() > 1`, so both pops succeed.
        let a = heap.pop(|n| arena.weight(n)).ok_or(Error::NoSymbols)?;
        let b = heap.pop(|n| arena.weight(n)).ok_or(Error::NoSymbols)?;
        let parent = arena.push_internal(a, b)?;
        debug!("merged {:?} and {:?} into {:?} (weight {})",
               a, b, parent, arena.weight(parent));
        heap.push(parent, |n| arena.weight(n))?;
    }

    heap.pop(|n| arena.weight(n)).ok_or(Error::NoSymbols)
}
