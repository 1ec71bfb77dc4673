#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(err) => panic!("Expected Ok(_), got Err({:?})", err),
        }
    };
    ($expr:expr, $($arg:tt)+) => {
        match $expr {
            Ok(val) => val,
            Err(err) => panic!("Expected Ok(_): {}: {:?}", format!($($arg)+), err),
        }
    };
}

/// Asserts that an insert hit a full hash table.
#[macro_export]
macro_rules! assert_table_full {
    ($expr:expr) => {
        match $expr {
            Err(freqdict::common::exception::HashTableError::TableFull { .. }) => {}
            other => panic!("Expected TableFull, got {:?}", other),
        }
    };
}

/// Asserts that a search tree satisfies the red-black rules and is ordered.
#[macro_export]
macro_rules! assert_red_black {
    ($tree:expr) => {{
        let tree = &$tree;
        if let Err(reason) = tree.check_red_black() {
            panic!("Red-black violation: {}", reason);
        }
        assert!(tree.is_ordered(), "inorder walk is not sorted");
    }};
}
