mod word_reader_tests;
