use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::{info, warn};

use crate::common::config::{
    HashTableConfig, StatsOrder, TreeConfig, DEFAULT_CAPACITY, DEFAULT_DOT_FILE,
    DEFAULT_SNAPSHOTS,
};
use crate::common::exception::DictError;
use crate::common::logger::initialize_logger;
use crate::common::time::{PhaseTime, PhaseTimer};
use crate::common::util::helpers::next_prime;
use crate::container::dictionary::WordDictionary;
use crate::container::hash_function::ProbingMethod;
use crate::container::open_address_hash_table::OpenAddressHashTable;
use crate::container::search_tree::{SearchTree, TreeKind};
use crate::text::word_reader::WordReader;

/// Build a word-frequency dictionary from stdin and report on it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Use an open-addressing hash table
    Htable(HtableArgs),
    /// Use a binary search tree (or red-black tree)
    Tree(TreeArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct HtableArgs {
    /// Check spelling of words in FILENAME using words from stdin as dictionary.
    /// Unknown words go to stdout, timing info and count to stderr (ignores -p)
    #[arg(short = 'c', value_name = "FILENAME")]
    pub check: Option<PathBuf>,

    /// Use double hashing (linear probing is the default)
    #[arg(short = 'd')]
    pub double_hashing: bool,

    /// Display entire contents of the hash table on stderr
    #[arg(short = 'e')]
    pub entire_table: bool,

    /// Print stats info instead of frequencies & words
    #[arg(short = 'p')]
    pub print_stats: bool,

    /// Show SNAPSHOTS stats snapshots (if -p is used)
    #[arg(short = 's', value_name = "SNAPSHOTS", default_value_t = DEFAULT_SNAPSHOTS)]
    pub snapshots: usize,

    /// Use the first prime >= TABLESIZE as the table size
    #[arg(short = 't', value_name = "TABLESIZE")]
    pub table_size: Option<usize>,

    /// Compute stats snapshots over the first N physical slots instead of
    /// the first N inserted keys
    #[arg(long)]
    pub slot_order_stats: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct TreeArgs {
    /// Check spelling of words in FILENAME using words from stdin as dictionary.
    /// Unknown words go to stdout, timing info and count to stderr (ignores -d & -o)
    #[arg(short = 'c', value_name = "FILENAME")]
    pub check: Option<PathBuf>,

    /// Print the tree depth instead of the preorder listing
    #[arg(short = 'd')]
    pub depth: bool,

    /// Write DOT output to FILENAME (if -o given)
    #[arg(short = 'f', value_name = "FILENAME")]
    pub dot_file: Option<PathBuf>,

    /// Output the tree in DOT form to 'tree-view.dot'
    #[arg(short = 'o')]
    pub output_dot: bool,

    /// Make the tree a red-black tree (BST is the default)
    #[arg(short = 'r')]
    pub red_black: bool,
}

impl HtableArgs {
    pub fn table_config(&self) -> HashTableConfig {
        HashTableConfig {
            capacity: self.table_size.map(next_prime).unwrap_or(DEFAULT_CAPACITY),
            method: if self.double_hashing {
                ProbingMethod::Double
            } else {
                ProbingMethod::Linear
            },
            stats_order: if self.slot_order_stats {
                StatsOrder::Slot
            } else {
                StatsOrder::Insertion
            },
        }
    }
}

impl TreeArgs {
    pub fn tree_config(&self) -> TreeConfig {
        TreeConfig {
            kind: if self.red_black {
                TreeKind::RedBlack
            } else {
                TreeKind::Bst
            },
        }
    }
}

/// Totals from loading a word stream into a dictionary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub words_read: usize,
    /// New words that found no free slot.
    pub dropped: usize,
}

/// Inserts every word from `words` into `dict`.
///
/// A full hash table is not fatal: the word is dropped and counted.
pub fn build_dictionary<D, R>(dict: &mut D, words: WordReader<R>) -> Result<BuildStats, DictError>
where
    D: WordDictionary + ?Sized,
    R: BufRead,
{
    let mut stats = BuildStats::default();
    for word in words {
        let word = word?;
        stats.words_read += 1;
        match dict.insert(&word) {
            Ok(_) => {}
            Err(e) if e.is_table_full() => {
                if stats.dropped == 0 {
                    warn!("{}; new words are being dropped", e);
                }
                stats.dropped += 1;
            }
            Err(e) => return Err(e),
        }
    }
    info!(
        "Loaded {} words ({} distinct, {} dropped)",
        stats.words_read,
        dict.len(),
        stats.dropped
    );
    Ok(stats)
}

/// Writes each word of `words` missing from `dict` to `out`, returning how many.
pub fn spell_check<D, R, W>(dict: &D, words: WordReader<R>, out: &mut W) -> Result<usize, DictError>
where
    D: WordDictionary + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut unknown = 0;
    for word in words {
        let word = word?;
        if !dict.contains(&word) {
            writeln!(out, "{}", word)?;
            unknown += 1;
        }
    }
    Ok(unknown)
}

fn open_words(path: &Path) -> Result<WordReader<BufReader<File>>, DictError> {
    let file = File::open(path).map_err(|e| {
        DictError::InvalidArgument(format!("cannot open {}: {}", path.display(), e))
    })?;
    Ok(WordReader::new(BufReader::new(file)))
}

fn write_timings<E: Write>(
    err: &mut E,
    fill: PhaseTime,
    search: PhaseTime,
    unknown: usize,
) -> io::Result<()> {
    writeln!(err, "Fill time\t: {}", fill)?;
    writeln!(err, "Search time\t: {}", search)?;
    writeln!(err, "unknown words\t= {}", unknown)
}

/// Checks the words of `path` against `dict` and reports timings.
fn run_spell_check<D, W, E>(
    dict: &D,
    path: &Path,
    fill: PhaseTime,
    out: &mut W,
    err: &mut E,
) -> Result<(), DictError>
where
    D: WordDictionary + ?Sized,
    W: Write,
    E: Write,
{
    let words = open_words(path)?;
    let (unknown, search) = PhaseTimer::time("search", || spell_check(dict, words, out));
    write_timings(err, fill, search, unknown?)?;
    Ok(())
}

pub fn run_htable<R, W, E>(args: &HtableArgs, input: R, out: &mut W, err: &mut E) -> Result<(), DictError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut table = OpenAddressHashTable::with_config(args.table_config());
    let (built, fill) =
        PhaseTimer::time("fill", || build_dictionary(&mut table, WordReader::new(input)));
    built?;

    if args.entire_table {
        table.dump_all(err)?;
    }

    if let Some(path) = &args.check {
        run_spell_check(&table, path, fill, out, err)?;
    } else if args.print_stats {
        table.print_stats(out, args.snapshots)?;
    } else {
        for (word, frequency) in table.iter() {
            writeln!(out, "{:<4} {}", frequency, word)?;
        }
    }
    Ok(())
}

pub fn run_tree<R, W, E>(args: &TreeArgs, input: R, out: &mut W, err: &mut E) -> Result<(), DictError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut tree = SearchTree::with_config(args.tree_config());
    let (built, fill) =
        PhaseTimer::time("fill", || build_dictionary(&mut tree, WordReader::new(input)));
    built?;

    if let Some(path) = &args.check {
        run_spell_check(&tree, path, fill, out, err)?;
        return Ok(());
    }

    if args.output_dot {
        let path = args
            .dot_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOT_FILE));
        writeln!(out, "Creating dot file  {}", path.display())?;
        let mut dot = BufWriter::new(File::create(&path)?);
        tree.output_dot(&mut dot)?;
        dot.flush()?;
    }

    if args.depth {
        writeln!(out, "{}", tree.depth())?;
    } else if !args.output_dot {
        let mut result = Ok(());
        tree.preorder(|word, frequency| {
            if result.is_ok() {
                result = writeln!(out, "{}\t{}", frequency, word);
            }
        });
        result?;
    }
    Ok(())
}

pub fn run_cli() -> Result<(), DictError> {
    initialize_logger();
    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    let mut err = BufWriter::new(io::stderr().lock());

    match &cli.command {
        Command::Htable(args) => run_htable(args, stdin.lock(), &mut out, &mut err)?,
        Command::Tree(args) => run_tree(args, stdin.lock(), &mut out, &mut err)?,
    }

    out.flush()?;
    err.flush()?;
    Ok(())
}
