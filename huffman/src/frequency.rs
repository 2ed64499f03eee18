use std::fmt;
use std::io;
use std::io::Read;

pub const NUM_LETTERS: usize = 26;

/// Folds an ASCII letter to its index in `a..=z`.
///
/// Everything that isn't an ASCII letter has no index.
pub fn letter_index(byte: u8) -> Option<usize> {
    if byte.is_ascii_alphabetic() {
        Some(usize::from(byte.to_ascii_lowercase() - b'a'))
    } else {
        None
    }
}

fn letter(index: usize) -> u8 {
    assert!(index < NUM_LETTERS);
    b'a' + index as u8
}

/// Occurrence counts of the letters `a` to `z`, case-insensitive.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct Frequencies {
    counts: [u64; NUM_LETTERS],
}

impl Frequencies {
    pub fn new() -> Frequencies {
        Default::default()
    }
    pub fn from_counts(counts: [u64; NUM_LETTERS]) -> Frequencies {
        Frequencies { counts: counts }
    }
    pub fn from_bytes(bytes: &[u8]) -> Frequencies {
        let mut result = Frequencies::new();
        result.add_bytes(bytes);
        result
    }
    /// Counts the letters of a stream until EOF.
    ///
    /// A read error discards everything counted so far.
    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<Frequencies> {
        let mut result = Frequencies::new();
        let mut buf = [0; 4096];
        loop {
            let read = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(r) => r,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            result.add_bytes(&buf[..read]);
        }
        result.log_summary();
        Ok(result)
    }
    pub fn add_byte(&mut self, byte: u8) {
        if let Some(i) = letter_index(byte) {
            self.counts[i] += 1;
        }
    }
    pub fn add_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.add_byte(b);
        }
    }
    /// Count of the letter `symbol`, either case.
    pub fn get(&self, symbol: u8) -> u64 {
        letter_index(symbol).map(|i| self.counts[i]).unwrap_or(0)
    }
    pub fn counts(&self) -> &[u64; NUM_LETTERS] {
        &self.counts
    }
    /// Total number of letters counted, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.counts.iter().cloned().fold(0, u64::saturating_add)
    }
    /// Number of distinct letters that occurred.
    pub fn num_symbols(&self) -> usize {
        self.counts.iter().filter(|&&c| c != 0).count()
    }
    /// Letters with a non-zero count and their counts, alphabetically.
    pub fn iter_used(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().cloned().enumerate()
            .filter(|&(_, c)| c != 0)
            .map(|(i, c)| (letter(i), c))
    }
    pub fn log_summary(&self) {
        info!("frequency table built: {} letters, {} distinct", self.total(), self.num_symbols());
    }
}

impl fmt::Debug for Frequencies {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map()
            .entries(self.iter_used().map(|(s, c)| (s as char, c)))
            .finish()
    }
}
