use std::fs::File;
use std::io::{BufReader, Cursor};

use freqdict::text::word_reader::WordReader;

use crate::assert_ok;
use crate::common::fixtures::text_file;

fn collect<R: std::io::BufRead>(reader: WordReader<R>) -> Vec<String> {
    assert_ok!(reader.collect::<Result<Vec<_>, _>>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_words_from_file() {
        let file = text_file("The quick brown fox.\nThe LAZY dog's bone;\n");
        let reader = WordReader::new(BufReader::new(File::open(file.path()).unwrap()));
        assert_eq!(
            collect(reader),
            vec!["the", "quick", "brown", "fox", "the", "lazy", "dogs", "bone"]
        );
    }

    #[test]
    fn test_small_buffer_does_not_split_words() {
        // a 2-byte buffer forces many refills mid-word
        let input = "alphabet soup, mixed-up letters";
        let reader = WordReader::new(BufReader::with_capacity(2, input.as_bytes()));
        assert_eq!(
            collect(reader),
            vec!["alphabet", "soup", "mixed", "up", "letters"]
        );
    }

    #[test]
    fn test_into_inner_returns_remaining_input() {
        let mut reader = WordReader::new(Cursor::new("one two"));
        assert_eq!(reader.next().unwrap().unwrap(), "one");
        let cursor = reader.into_inner();
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_digits_count_as_letters() {
        let reader = WordReader::new("route 66 and r2d2".as_bytes());
        assert_eq!(collect(reader), vec!["route", "66", "and", "r2d2"]);
    }
}
