//! Tallies and the cumulative vote series

use super::vote::Vote;
use crate::room::options::VotingOptions;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One option's current count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyEntry {
    pub option: String,
    pub count: u64,
}

/// Mapping from vote option to current count, in configured option order.
///
/// Every configured option is present, including those with zero votes, so
/// a viewing layer never has to special-case absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    entries: Vec<TallyEntry>,
}

impl Tally {
    /// Count `votes` against the configured options.
    ///
    /// Votes for options outside the configured set are not counted; the
    /// cast decision rejects them before they can be persisted.
    pub fn of(votes: &[Vote], options: &VotingOptions) -> Self {
        let entries = options
            .iter()
            .map(|option| TallyEntry {
                option: option.to_string(),
                count: votes.iter().filter(|v| v.vote_option == option).count() as u64,
            })
            .collect();
        Self { entries }
    }

    /// Current count for `option`, zero if not configured.
    pub fn count(&self, option: &str) -> u64 {
        self.entries
            .iter()
            .find(|e| e.option == option)
            .map(|e| e.count)
            .unwrap_or(0)
    }

    /// Total votes across all options.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries in configured option order.
    pub fn entries(&self) -> &[TallyEntry] {
        &self.entries
    }

    /// One-line rendering for forecast prompts: `"Attend Class: 2 votes, ..."`.
    pub fn summary(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{}: {} votes", e.option, e.count))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One point of the cumulative series: the running totals immediately after
/// a vote landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub counts: Tally,
}

/// Derive the time-ordered cumulative series: one point per vote, running
/// totals per option.
///
/// Votes are ordered by timestamp ascending, with equal timestamps broken by
/// voter id — stable regardless of the order the store returned them in. Per
/// option the resulting counts form a monotonically non-decreasing step
/// function.
pub fn cumulative_series(votes: &[Vote], options: &VotingOptions) -> Vec<SeriesPoint> {
    let mut ordered: Vec<&Vote> = votes.iter().collect();
    ordered.sort_by(|a, b| {
        a.timestamp
            .cmp(&b.timestamp)
            .then_with(|| a.voter_id.cmp(&b.voter_id))
    });

    let mut running: Vec<TallyEntry> = options
        .iter()
        .map(|option| TallyEntry {
            option: option.to_string(),
            count: 0,
        })
        .collect();

    ordered
        .into_iter()
        .map(|vote| {
            if let Some(entry) = running.iter_mut().find(|e| e.option == vote.vote_option) {
                entry.count += 1;
            }
            SeriesPoint {
                timestamp: vote.timestamp,
                counts: Tally {
                    entries: running.clone(),
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn vote(voter: &str, option: &str, at: DateTime<Utc>) -> Vote {
        Vote::new("room-1", voter, option, at)
    }

    #[test]
    fn test_tally_includes_zero_count_options() {
        let options = VotingOptions::default();
        let now = Utc::now();
        let votes = vec![vote("v1", "Attend Class", now)];
        let tally = Tally::of(&votes, &options);

        assert_eq!(tally.count("Attend Class"), 1);
        assert_eq!(tally.count("Bunk Class"), 0);
        assert_eq!(tally.entries().len(), 2);
        assert_eq!(tally.total(), 1);
    }

    #[test]
    fn test_tally_preserves_configured_order() {
        let options = VotingOptions::new(vec!["Z".into(), "A".into()]);
        let tally = Tally::of(&[], &options);
        let order: Vec<_> = tally.entries().iter().map(|e| e.option.as_str()).collect();
        assert_eq!(order, vec!["Z", "A"]);
    }

    #[test]
    fn test_summary_rendering() {
        let options = VotingOptions::default();
        let now = Utc::now();
        let votes = vec![
            vote("v1", "Attend Class", now),
            vote("v2", "Attend Class", now),
        ];
        let tally = Tally::of(&votes, &options);
        assert_eq!(tally.summary(), "Attend Class: 2 votes, Bunk Class: 0 votes");
    }

    #[test]
    fn test_series_one_point_per_vote_with_running_totals() {
        let options = VotingOptions::default();
        let start = Utc::now();
        let votes = vec![
            vote("v1", "Attend Class", start),
            vote("v2", "Bunk Class", start + Duration::seconds(10)),
            vote("v3", "Attend Class", start + Duration::seconds(20)),
        ];

        let series = cumulative_series(&votes, &options);
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].counts.count("Attend Class"), 1);
        assert_eq!(series[0].counts.count("Bunk Class"), 0);
        assert_eq!(series[1].counts.count("Bunk Class"), 1);
        assert_eq!(series[2].counts.count("Attend Class"), 2);
        assert_eq!(series[2].counts.total(), 3);
    }

    #[test]
    fn test_series_is_monotonic_per_option() {
        let options = VotingOptions::default();
        let start = Utc::now();
        let votes: Vec<Vote> = (0..10)
            .map(|i| {
                let option = if i % 3 == 0 { "Bunk Class" } else { "Attend Class" };
                vote(&format!("v{i}"), option, start + Duration::seconds(i))
            })
            .collect();

        let series = cumulative_series(&votes, &options);
        for option in options.iter() {
            let mut previous = 0;
            for point in &series {
                let count = point.counts.count(option);
                assert!(count >= previous);
                previous = count;
            }
        }
    }

    #[test]
    fn test_series_sorts_out_of_order_votes_and_breaks_ties_stably() {
        let options = VotingOptions::default();
        let start = Utc::now();
        // Supplied out of order, with a timestamp tie between vb and va.
        let votes = vec![
            vote("vc", "Attend Class", start + Duration::seconds(30)),
            vote("vb", "Bunk Class", start),
            vote("va", "Attend Class", start),
        ];

        let series = cumulative_series(&votes, &options);
        // Tie broken by voter id: va before vb.
        assert_eq!(series[0].counts.count("Attend Class"), 1);
        assert_eq!(series[0].counts.count("Bunk Class"), 0);
        assert_eq!(series[1].counts.count("Bunk Class"), 1);
        assert_eq!(series[2].counts.total(), 3);
    }

    #[test]
    fn test_series_empty_ledger() {
        let options = VotingOptions::default();
        assert!(cumulative_series(&[], &options).is_empty());
    }
}
