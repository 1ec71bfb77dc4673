use clap::Parser;
use freqdict::cli::{run_htable, Cli, Command, HtableArgs};

use crate::assert_ok;
use crate::common::fixtures::{text_file, word_list};
use crate::common::logger::init_test_logger;

fn htable_args(flags: &[&str]) -> HtableArgs {
    let argv = ["freqdict", "htable"].iter().chain(flags.iter()).copied();
    match Cli::try_parse_from(argv).unwrap().command {
        Command::Htable(args) => args,
        other => panic!("parsed {:?}", other),
    }
}

fn run(flags: &[&str], input: &str) -> (String, String) {
    init_test_logger();
    let args = htable_args(flags);
    let mut out = Vec::new();
    let mut err = Vec::new();
    assert_ok!(run_htable(&args, input.as_bytes(), &mut out, &mut err));
    (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_listing() {
        let (out, err) = run(&[], "b a b");
        let mut lines: Vec<&str> = out.lines().collect();
        lines.sort();
        assert_eq!(lines, vec!["1    a", "2    b"]);
        assert!(err.is_empty());
    }

    #[test]
    fn test_spell_check_reports_unknown_words() {
        let check = text_file("cat dog bird cat\n");
        let path = check.path().to_str().unwrap();
        let (out, err) = run(&["-c", path, "-p"], "the cat sat");
        assert_eq!(out, "dog\nbird\n");
        assert!(err.contains("Fill time\t: "));
        assert!(err.contains("Search time\t: "));
        assert!(err.ends_with("unknown words\t= 2\n"));
    }

    #[test]
    fn test_missing_check_file_is_an_error() {
        let args = htable_args(&["-c", "/definitely/not/here.txt"]);
        let result = run_htable(&args, "word".as_bytes(), &mut Vec::new(), &mut Vec::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_stats_report() {
        let input = word_list(100).join(" ");
        let (out, _) = run(&["-p", "-d", "-s", "5", "-t", "200"], &input);
        assert!(out.starts_with("\nDouble Hashing\n\n"));
        // next_prime(200) = 211; 20% and 40% fit under 100 keys
        assert!(out.contains("  20         42"));
        assert!(out.contains("  40         84"));
        assert!(!out.contains("  60 "));
    }

    #[test]
    fn test_entire_table_goes_to_stderr() {
        let (out, err) = run(&["-e", "-t", "5"], "x");
        assert_eq!(out.lines().count(), 1);
        let dump: Vec<&str> = err.lines().collect();
        assert_eq!(dump[0], "   LL Stats  Freq   Word");
        // capacity 5 plus header and rule
        assert_eq!(dump.len(), 7);
    }

    #[test]
    fn test_full_table_drops_words() {
        let input = word_list(20).join("\n");
        let (out, _) = run(&["-t", "7"], &input);
        assert_eq!(out.lines().count(), 7);
    }
}
