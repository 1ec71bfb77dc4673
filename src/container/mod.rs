pub mod dictionary;
pub mod hash_function;
pub mod hash_table_stats;
pub mod open_address_hash_table;
pub mod search_tree;
pub mod tree_dot;
