use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HashTableError {
    #[error("Hash table is full ({capacity} slots)")]
    TableFull { capacity: usize },
}

#[derive(Error, Debug)]
pub enum WordReaderError {
    #[error("Failed to read words: {0}")]
    Io(#[from] io::Error),
}

#[derive(Error, Debug)]
pub enum DictError {
    #[error(transparent)]
    HashTable(#[from] HashTableError),
    #[error(transparent)]
    WordReader(#[from] WordReaderError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DictError {
    /// True when the error is the recoverable "no free slot" signal.
    pub fn is_table_full(&self) -> bool {
        matches!(self, DictError::HashTable(HashTableError::TableFull { .. }))
    }
}
