pub mod word_reader;
