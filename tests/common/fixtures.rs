use std::io::Write;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tempfile::NamedTempFile;

/// `count` distinct lowercase words: "aa", "ab", ... in ascending order.
pub fn word_list(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let mut word = String::new();
            let mut n = i;
            for _ in 0..4 {
                word.insert(0, char::from(b'a' + (n % 26) as u8));
                n /= 26;
            }
            word
        })
        .collect()
}

pub fn shuffled(words: &[String], seed: u64) -> Vec<String> {
    let mut words = words.to_vec();
    words.shuffle(&mut StdRng::seed_from_u64(seed));
    words
}

/// A temporary file holding `contents`; removed when dropped.
pub fn text_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
