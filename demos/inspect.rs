use std::io;
use std::io::Read;

use flate2::read::GzDecoder;
use nbtree::Document;

//
// Reads gzip-compressed NBT from stdin and prints the decoded tree in
// Rust's Debug format.
//

fn main() {
    let stdin = io::stdin();
    let mut decoder = GzDecoder::new(stdin);
    let mut buf = vec![];
    decoder.read_to_end(&mut buf).unwrap();

    let doc = Document::from_bytes(&buf).unwrap();
    println!("{:#?}", doc);
}
