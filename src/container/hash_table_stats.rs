use std::io::{self, Write};

use crate::common::config::ProbeCount;
use crate::container::hash_function::ProbingMethod;

const STATS_RULE: &str = "-----------------------------------------------------";

/// How the table looked when it was `percent_full` percent full.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSnapshot {
    pub percent_full: usize,
    pub current_entries: usize,
    /// Share of the scanned keys placed with zero collisions, 0.0..=100.0.
    pub percent_at_home: f64,
    pub average_collisions: f64,
    pub max_collisions: ProbeCount,
}

impl StatsSnapshot {
    /// Summarises `counts`, the collision counts of the first `current_entries` keys.
    pub fn from_counts(percent_full: usize, counts: &[ProbeCount]) -> Self {
        let current_entries = counts.len();
        let at_home = counts.iter().filter(|&&c| c == 0).count();
        let total: u64 = counts.iter().map(|&c| u64::from(c)).sum();
        let max_collisions = counts.iter().copied().max().unwrap_or(0);
        let (percent_at_home, average_collisions) = if current_entries == 0 {
            (0.0, 0.0)
        } else {
            (
                at_home as f64 * 100.0 / current_entries as f64,
                total as f64 / current_entries as f64,
            )
        };
        Self {
            percent_full,
            current_entries,
            percent_at_home,
            average_collisions,
            max_collisions,
        }
    }
}

/// Computes up to `num_stats` snapshots at evenly spaced fill levels.
///
/// For snapshot `i` the fill level is `100 * i / num_stats` percent and the
/// entry count is `capacity * percent / 100`. Levels with no entries, or with
/// more entries than `num_keys`, are skipped. `counts_for(n)` must return the
/// collision counts to scan for `n` entries.
pub fn collect_snapshots<'a>(
    capacity: usize,
    num_keys: usize,
    num_stats: usize,
    counts_for: impl Fn(usize) -> &'a [ProbeCount],
) -> Vec<StatsSnapshot> {
    (1..=num_stats)
        .filter_map(|i| {
            let percent_full = 100 * i / num_stats;
            let current_entries = capacity * percent_full / 100;
            if current_entries == 0 || current_entries > num_keys {
                return None;
            }
            Some(StatsSnapshot::from_counts(
                percent_full,
                counts_for(current_entries),
            ))
        })
        .collect()
}

/// Writes the snapshot table in the fixed-width report layout.
pub fn write_report<W: Write>(
    out: &mut W,
    method: ProbingMethod,
    snapshots: &[StatsSnapshot],
) -> io::Result<()> {
    write!(out, "\n{}\n\n", method)?;
    writeln!(out, "Percent   Current   Percent    Average      Maximum")?;
    writeln!(out, " Full     Entries   At Home   Collisions   Collisions")?;
    writeln!(out, "{}", STATS_RULE)?;
    for s in snapshots {
        writeln!(
            out,
            "{:4} {:10} {:10.1} {:10.2} {:11}",
            s.percent_full,
            s.current_entries,
            s.percent_at_home,
            s.average_collisions,
            s.max_collisions
        )?;
    }
    write!(out, "{}\n\n", STATS_RULE)?;
    Ok(())
}
