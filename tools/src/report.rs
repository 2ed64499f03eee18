use huffman::Error;
use huffman::Huffman;
use std::fmt::Write;

/// Formats the code table followed by the encoded `text`.
///
/// ```text
/// Character : Code
/// a : 10
/// b : 11
/// c : 0
///
/// Encoded message:
/// 10101111110000
/// ```
pub fn report(huffman: &Huffman, text: &[u8]) -> Result<String, Error> {
    let mut result = String::new();
    writeln!(result, "Character : Code")?;
    for (symbol, code) in huffman.codes() {
        writeln!(result, "{} : {}", symbol as char, code)?;
    }
    writeln!(result)?;
    writeln!(result, "Encoded message:")?;
    huffman.encode_to(text, &mut result)?;
    writeln!(result)?;
    Ok(result)
}
