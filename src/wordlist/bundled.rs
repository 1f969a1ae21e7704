//! Word lists compiled into the library, stored gzip compressed.

use std::io::Read;

/// Around two thousand common English words of 3 to 8 letters.
const ENGLISH: &[u8] = include_bytes!("english.txt.gz");

pub(super) fn find(name: &str) -> Option<&'static [u8]> {
    match name {
        "english" => Some(ENGLISH),
        _ => None,
    }
}

pub(super) fn inflate(compressed: &[u8]) -> Result<Vec<String>, std::io::Error> {
    let mut dec = flate2::read::GzDecoder::new(compressed);

    let mut text = String::new();
    dec.read_to_string(&mut text)?;

    Ok(text.lines().map(str::to_owned).collect())
}
