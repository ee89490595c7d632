//! Vote ledger
//!
//! Records one vote per participant per room and derives tallies and a
//! time-ordered cumulative series. Votes are append-only: created once on a
//! participant's first cast, never mutated, and removed only by admin
//! moderation or a session reset (which archives them first).

pub mod tally;
pub mod vote;

pub use tally::{SeriesPoint, Tally, TallyEntry, cumulative_series};
pub use vote::{ArchivedVote, Vote, cast};
