#[macro_use]
extern crate log;

use alphahuff_tools::report::report;
use clap::App;
use clap::Arg;
use huffman::Error;
use huffman::Huffman;
use std::fs::File;
use std::io;
use std::io::Read;
use std::io::Write;
use std::process;

fn read_input(input: &str) -> Result<Vec<u8>, io::Error> {
    let mut result = Vec::new();
    if input == "-" {
        io::stdin().read_to_end(&mut result)?;
    } else {
        File::open(input)?.read_to_end(&mut result)?;
    }
    Ok(result)
}

fn run(input: &str) -> Result<(), Error> {
    let text = read_input(input)?;
    let huffman = Huffman::from_bytes(&text)?;
    if huffman.codes().is_empty() {
        warn!("{}: no letters to encode", input);
    }
    let output = report(&huffman, &text)?;
    io::stdout().write_all(output.as_bytes())?;
    Ok(())
}

fn main() {
    logger::init();

    let matches = App::new("Huffman encoder")
        .about("Builds a Huffman code for the letters of a text and prints \
                the code table and the encoded text")
        .arg(Arg::with_name("INPUT")
            .help("Text file to encode, `-` for standard input")
            .default_value("input.txt"))
        .get_matches();

    let input = matches.value_of("INPUT").unwrap_or("input.txt");
    if let Err(e) = run(input) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
