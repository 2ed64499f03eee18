use arrayvec::ArrayVec;
use crate::Error;
use crate::arena::Arena;
use crate::arena::NodeId;
use crate::arena::NodeKind;
use crate::frequency::NUM_LETTERS;
use crate::frequency::letter_index;
use crate::heap::CapacityError;
use std::fmt;
use std::fmt::Write;

pub const MAX_CODE_BITS: u8 = 32;

/// Path from the root to a leaf, bit `i` being the `i`-th step.
///
/// A `0` bit means going to the left child, a `1` bit to the right one.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct Code {
    bits: u32,
    len: u8,
}

impl Code {
    pub fn new() -> Code {
        Default::default()
    }
    pub fn len(self) -> u32 {
        u32::from(self.len)
    }
    pub fn is_empty(self) -> bool {
        self.len == 0
    }
    pub fn bit(self, idx: u32) -> bool {
        assert!(idx < self.len());
        ((self.bits >> idx) & 1) != 0
    }
    pub fn bits(self) -> impl Iterator<Item = bool> {
        (0..self.len()).map(move |i| self.bit(i))
    }
    /// Returns the code one step further down, or `None` if it wouldn't fit.
    pub fn child(self, bit: bool) -> Option<Code> {
        if self.len >= MAX_CODE_BITS {
            return None;
        }
        Some(Code {
            bits: self.bits | (u32::from(bit) << self.len),
            len: self.len + 1,
        })
    }
    pub fn is_prefix_of(self, other: Code) -> bool {
        if self.len > other.len {
            return false;
        }
        let mask = if self.len == 0 { 0 } else { !0 >> (32 - self.len()) };
        (self.bits ^ other.bits) & mask == 0
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for b in self.bits() {
            f.write_char(if b { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Code of every letter that occurs in the tree.
#[derive(Clone, Copy, Default, Eq, PartialEq)]
pub struct CodeTable {
    codes: [Option<Code>; NUM_LETTERS],
}

impl CodeTable {
    pub fn empty() -> CodeTable {
        Default::default()
    }
    /// Assigns a code to every leaf below `root`.
    ///
    /// If `root` itself is a leaf, its code is the single bit `0`.
    pub fn generate(arena: &Arena, root: NodeId) -> Result<CodeTable, Error> {
        let mut result = CodeTable::empty();

        if let NodeKind::Leaf(symbol) = arena[root].kind {
            result.set(symbol, Code::new().child(false).ok_or(CapacityError)?);
            return Ok(result);
        }

        // The stack never holds more than one entry per tree level, plus one,
        // i.e. `MAX_CODE_BITS + 1`.
        let mut stack: ArrayVec<[(NodeId, Code); 64]> = ArrayVec::new();
        stack.push((root, Code::new()));

        while let Some((id, code)) = stack.pop() {
            match arena[id].kind {
                NodeKind::Leaf(symbol) => {
                    trace!("code for {:?}: {}", symbol as char, code);
                    result.set(symbol, code);
                }
                NodeKind::Internal([left, right]) => {
                    // Push the right child first so that the left subtree is
                    // visited first.
                    let right_code = code.child(true).ok_or(CapacityError)?;
                    let left_code = code.child(false).ok_or(CapacityError)?;
                    stack.try_push((right, right_code)).map_err(|_| CapacityError)?;
                    stack.try_push((left, left_code)).map_err(|_| CapacityError)?;
                }
            }
        }
        Ok(result)
    }
    // Leaves are only created from letters, see `Arena::push_leaves`.
    fn set(&mut self, symbol: u8, code: Code) {
        if let Some(i) = letter_index(symbol) {
            self.codes[i] = Some(code);
        }
    }
    /// Code of `symbol`, either case.
    pub fn get(&self, symbol: u8) -> Option<Code> {
        letter_index(symbol).and_then(|i| self.codes[i])
    }
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|c| c.is_none())
    }
    /// Letters that have a code, alphabetically.
    pub fn iter(&self) -> Iter {
        Iter {
            inner: self.codes.iter().enumerate(),
        }
    }
}

impl fmt::Debug for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(s, c)| (s as char, c)))
            .finish()
    }
}

impl<'a> IntoIterator for &'a CodeTable {
    type Item = (u8, Code);
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

pub struct Iter<'a> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, Option<Code>>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (u8, Code);
    fn next(&mut self) -> Option<(u8, Code)> {
        for (i, code) in &mut self.inner {
            if let Some(c) = *code {
                return Some((b'a' + i as u8, c));
            }
        }
        None
    }
}
