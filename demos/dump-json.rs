use std::fs::File;
use std::io::Read;

use flate2::read::GzDecoder;
use nbtree::Document;

//
// Dumps an NBT file (e.g. a level.dat) as JSON. Gzipped files are detected
// by their magic bytes and decompressed first.
//

fn main() {
    let args: Vec<_> = std::env::args().skip(1).collect();
    let mut file = File::open(args[0].clone()).unwrap();

    let mut data = vec![];
    file.read_to_end(&mut data).unwrap();

    if data.starts_with(&[0x1f, 0x8b]) {
        let mut decoder = GzDecoder::new(data.as_slice());
        let mut raw = vec![];
        decoder.read_to_end(&mut raw).unwrap();
        data = raw;
    }

    let doc = Document::from_bytes(&data).unwrap();
    println!("{}", serde_json::to_string_pretty(&doc.dump()).unwrap());
}
