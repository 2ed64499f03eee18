use alphahuff_huffman::CodeTable;
use alphahuff_huffman::Config;
use alphahuff_huffman::Error;
use alphahuff_huffman::Frequencies;
use alphahuff_huffman::Huffman;
use alphahuff_huffman::NodeKind;
use itertools::Itertools;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;

fn read_file(filename: &str) -> Vec<u8> {
    let mut result = Vec::new();
    File::open(filename).unwrap().read_to_end(&mut result).unwrap();
    result
}

fn read_lines(filename: &str) -> Vec<String> {
    BufReader::new(File::open(filename).unwrap())
        .lines()
        .map(|ml| ml.unwrap())
        .collect()
}

fn repr(h: &Huffman) -> Vec<String> {
    h.codes().iter().map(|(s, c)| format!("{} : {}", s as char, c)).collect()
}

fn huffman_sample() -> Huffman {
    Huffman::from_bytes(&read_file("data/sample")).unwrap()
}

#[test]
fn sample_repr() {
    assert_eq!(repr(&huffman_sample()), read_lines("data/repr"));
}

#[test]
fn sample_encode() {
    let h = huffman_sample();
    let encoded = read_lines("data/encoded").into_iter().join("");
    assert_eq!(h.encode(&read_file("data/sample")).unwrap(), encoded);
    assert_eq!(h.weighted_len(), encoded.len() as u64);
}

#[test]
fn sample_reader() {
    let h = Huffman::from_reader(File::open("data/sample").unwrap()).unwrap();
    assert_eq!(h.codes(), huffman_sample().codes());
}

#[test]
fn single_symbol() {
    let h = Huffman::from_bytes(b"aaaa").unwrap();
    assert_eq!(repr(&h), ["a : 0"]);
    assert_eq!(h.encode(b"aaaa").unwrap(), "0000");
    let root = h.root().unwrap();
    assert_eq!(h.arena()[root].kind, NodeKind::Leaf(b'a'));
}

#[test]
fn three_symbols() {
    let h = Huffman::from_bytes(b"aabbbcccc").unwrap();
    assert_eq!(repr(&h), ["a : 10", "b : 11", "c : 0"]);
    assert_eq!(h.encode(b"aabbbcccc").unwrap(), "10101111110000");
    assert_eq!(h.weighted_len(), 14);
    assert_eq!(h.arena().weight(h.root().unwrap()), 9);
}

#[test]
fn handles_from_arena() {
    let h = huffman_sample();
    let ids: Vec<_> = h.arena().ids().collect();
    assert_eq!(ids.len(), h.arena().len());
    assert_eq!(ids.last().cloned(), h.root());
    let root = h.root().unwrap();
    assert_eq!(CodeTable::generate(h.arena(), root).unwrap(), *h.codes());
}

#[test]
fn weight_overflow() {
    let f = Frequencies::from_counts([u64::MAX / 2; 26]);
    assert!(matches!(Huffman::from_frequencies(&f), Err(Error::WeightOverflow)));
}

#[test]
fn case_folded() {
    let lower = Huffman::from_bytes(b"hello world").unwrap();
    let mixed = Huffman::from_bytes(b"HeLLo, World!").unwrap();
    assert_eq!(lower.codes(), mixed.codes());
    assert_eq!(lower.encode(b"hello world").unwrap(), mixed.encode(b"HeLLo, World!").unwrap());
}

#[test]
fn empty() {
    let h = Huffman::from_bytes(b"").unwrap();
    assert!(h.codes().is_empty());
    assert_eq!(h.root(), None);
    assert_eq!(h.encode(b"").unwrap(), "");
}

#[test]
fn no_letters() {
    let h = Huffman::from_bytes(b"123!!!").unwrap();
    assert!(h.codes().is_empty());
    assert_eq!(h.root(), None);
    assert_eq!(h.encode(b"123!!!").unwrap(), "");
}

#[test]
fn all_letters() {
    let text: Vec<u8> = (b'a'..=b'z').collect();
    let h = Huffman::from_bytes(&text).unwrap();
    assert_eq!(h.codes().len(), 26);
    assert_eq!(h.arena().len(), 51);
    // 26 equally likely symbols: six leaves at depth 4, twenty at depth 5.
    assert_eq!(h.weighted_len(), 6 * 4 + 20 * 5);
}

#[test]
fn small_capacity() {
    let f = Frequencies::from_bytes(b"abcdefghijklmnopqrstuvwxyz");
    match Huffman::from_frequencies_with(&f, &Config::with_capacity(50)) {
        Err(Error::Capacity(_)) => {}
        r => panic!("unexpected result: {:?}", r),
    }
    assert!(Huffman::from_frequencies_with(&f, &Config::with_capacity(51)).is_ok());
}

#[test]
fn unreadable() {
    struct Broken;
    impl Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "unreadable"))
        }
    }
    assert!(matches!(Huffman::from_reader(Broken), Err(Error::Io(_))));
}
