use freqdict::container::dictionary::WordDictionary;
use freqdict::container::hash_function::ProbingMethod;
use freqdict::container::open_address_hash_table::OpenAddressHashTable;
use freqdict::container::search_tree::{SearchTree, TreeKind};

use crate::assert_ok;

fn engines() -> Vec<(&'static str, Box<dyn WordDictionary>)> {
    vec![
        ("linear", Box::new(OpenAddressHashTable::new(53, ProbingMethod::Linear))),
        ("double", Box::new(OpenAddressHashTable::new(53, ProbingMethod::Double))),
        ("bst", Box::new(SearchTree::new(TreeKind::Bst))),
        ("red-black", Box::new(SearchTree::new(TreeKind::RedBlack))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engines_agree_on_frequencies() {
        let text = ["the", "cat", "sat", "on", "the", "mat", "the", "end"];
        for (name, mut dict) in engines() {
            assert!(dict.is_empty(), "{}", name);
            for word in text {
                assert_ok!(dict.insert(word), "{} inserting {}", name, word);
            }
            assert_eq!(dict.len(), 6, "{}", name);
            assert_eq!(dict.frequency("the"), Some(3), "{}", name);
            assert!(dict.contains("mat"), "{}", name);
            assert!(!dict.contains("dog"), "{}", name);
        }
    }

    #[test]
    fn test_for_each_entry_visits_everything_once() {
        for (name, mut dict) in engines() {
            for word in ["x", "y", "z", "y"] {
                assert_ok!(dict.insert(word));
            }
            let mut seen = Vec::new();
            dict.for_each_entry(&mut |word, frequency| seen.push((word.to_string(), frequency)));
            seen.sort();
            assert_eq!(
                seen,
                vec![("x".to_string(), 1), ("y".to_string(), 2), ("z".to_string(), 1)],
                "{}",
                name
            );
        }
    }

    #[test]
    fn test_full_table_surfaces_through_trait() {
        let mut dict: Box<dyn WordDictionary> =
            Box::new(OpenAddressHashTable::new(2, ProbingMethod::Linear));
        assert_ok!(dict.insert("one"));
        assert_ok!(dict.insert("two"));
        let err = dict.insert("three").unwrap_err();
        assert!(err.is_table_full());
    }
}
