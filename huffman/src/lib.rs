#[cfg(test)]
#[macro_use]
extern crate quickcheck;

#[macro_use]
extern crate log;

pub use self::arena::Arena;
pub use self::arena::Node;
pub use self::arena::NodeId;
pub use self::arena::NodeKind;
pub use self::code::Code;
pub use self::code::CodeTable;
pub use self::frequency::Frequencies;
pub use self::heap::CapacityError;
pub use self::heap::MinHeap;

pub mod arena;
pub mod code;
pub mod frequency;
pub mod heap;
pub mod tree;

use std::error;
use std::fmt;
use std::io;
use std::io::Read;

/// Default bound on the number of tree nodes, enough for all 26 letters.
pub const MAX_NODES: usize = 64;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Fmt(fmt::Error),
    Capacity(CapacityError),
    /// The input contains no letters, so there's no tree.
    NoSymbols,
    /// The weights of two merged nodes don't fit into a `u64`.
    WeightOverflow,
    /// The arena already contains a tree.
    AlreadyBuilt,
    /// The letter has no code in the table.
    MissingCode(u8),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<fmt::Error> for Error {
    fn from(err: fmt::Error) -> Error {
        Error::Fmt(err)
    }
}

impl From<CapacityError> for Error {
    fn from(err: CapacityError) -> Error {
        Error::Capacity(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Io(ref e) => write!(f, "i/o error: {}", e),
            Error::Fmt(ref e) => write!(f, "could not write output: {}", e),
            Error::Capacity(ref e) => fmt::Display::fmt(e, f),
            Error::NoSymbols => f.write_str("no symbols to encode"),
            Error::WeightOverflow => f.write_str("node weight overflow"),
            Error::AlreadyBuilt => f.write_str("tree already built"),
            Error::MissingCode(s) => write!(f, "no code for {:?}", s as char),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Io(ref e) => Some(e),
            Error::Fmt(ref e) => Some(e),
            Error::Capacity(ref e) => Some(e),
            Error::NoSymbols
                | Error::WeightOverflow
                | Error::AlreadyBuilt
                | Error::MissingCode(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Config {
    /// Maximum number of nodes in the arena and handles in the heap.
    pub capacity: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config::with_capacity(MAX_NODES)
    }
}

impl Config {
    pub fn with_capacity(capacity: usize) -> Config {
        Config { capacity: capacity }
    }
}

/// Huffman tree over the letters of a text, together with its code table.
#[derive(Clone, Debug)]
pub struct Huffman {
    frequencies: Frequencies,
    arena: Arena,
    root: Option<NodeId>,
    codes: CodeTable,
}

impl Huffman {
    pub fn from_bytes(text: &[u8]) -> Result<Huffman, Error> {
        let frequencies = Frequencies::from_bytes(text);
        frequencies.log_summary();
        Huffman::from_frequencies(&frequencies)
    }
    pub fn from_reader<R: Read>(reader: R) -> Result<Huffman, Error> {
        Huffman::from_frequencies(&Frequencies::from_reader(reader)?)
    }
    pub fn from_frequencies(frequencies: &Frequencies) -> Result<Huffman, Error> {
        Huffman::from_frequencies_with(frequencies, &Config::default())
    }
    /// Builds the tree and the code table.
    ///
    /// Frequencies without any letter yield an empty table rather than an
    /// error.
    pub fn from_frequencies_with(frequencies: &Frequencies, config: &Config)
        -> Result<Huffman, Error>
    {
        let mut arena = Arena::with_capacity(config.capacity)?;
        arena.push_leaves(frequencies)?;
        let (root, codes) = match tree::build(&mut arena) {
            Ok(root) => (Some(root), CodeTable::generate(&arena, root)?),
            Err(Error::NoSymbols) => (None, CodeTable::empty()),
            Err(e) => return Err(e),
        };
        Ok(Huffman {
            frequencies: *frequencies,
            arena: arena,
            root: root,
            codes: codes,
        })
    }
    pub fn frequencies(&self) -> &Frequencies {
        &self.frequencies
    }
    pub fn arena(&self) -> &Arena {
        &self.arena
    }
    /// Root of the tree, `None` if there were no letters.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }
    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }
    fn code(&self, symbol: u8) -> Result<Option<Code>, Error> {
        if frequency::letter_index(symbol).is_none() {
            return Ok(None);
        }
        self.codes.get(symbol).map(Some).ok_or(Error::MissingCode(symbol.to_ascii_lowercase()))
    }
    /// Writes the codes of the letters of `text` in order, skipping
    /// everything else.
    pub fn encode_to<W: fmt::Write>(&self, text: &[u8], out: &mut W) -> Result<(), Error> {
        for &b in text {
            if let Some(code) = self.code(b)? {
                write!(out, "{}", code)?;
            }
        }
        Ok(())
    }
    pub fn encode(&self, text: &[u8]) -> Result<String, Error> {
        let mut result = String::with_capacity(self.encoded_len(text)?);
        self.encode_to(text, &mut result)?;
        Ok(result)
    }
    /// Number of bits `encode` produces for `text`.
    pub fn encoded_len(&self, text: &[u8]) -> Result<usize, Error> {
        let mut len = 0;
        for &b in text {
            if let Some(code) = self.code(b)? {
                len += code.len() as usize;
            }
        }
        Ok(len)
    }
    /// Number of bits needed for the text the tree was built from.
    ///
    /// Saturates at `u64::MAX`.
    pub fn weighted_len(&self) -> u64 {
        self.codes.iter()
            .map(|(s, c)| self.frequencies.get(s).saturating_mul(u64::from(c.len())))
            .fold(0, u64::saturating_add)
    }
}
