//! Winner resolution

use crate::core::error::EngineError;
use crate::ledger::tally::Tally;
use crate::room::entities::Room;

/// Resolve the winning option from a tally.
///
/// Fails with [`EngineError::NoVotesCast`] when every count is zero.
/// Otherwise the option with the strictly greatest count wins; ties go to
/// the option appearing first in the room's configured order. The tie-break
/// is a deliberate, stable policy — not alphabetical, not most-recent-vote.
pub fn resolve(tally: &Tally) -> Result<&str, EngineError> {
    if tally.total() == 0 {
        return Err(EngineError::NoVotesCast);
    }
    let winner = tally
        .entries()
        .iter()
        .reduce(|best, entry| if entry.count > best.count { entry } else { best })
        .expect("non-zero tally has entries");
    Ok(&winner.option)
}

/// Resolve the winner and mark the room as decided.
///
/// Sets `winner_announced` and `winner_option`; the caller persists the
/// room. Idempotent: re-announcing with the same tally yields the same
/// winner and the same room state.
pub fn announce(room: &mut Room, tally: &Tally) -> Result<String, EngineError> {
    let winner = resolve(tally)?.to_string();
    room.winner_announced = true;
    room.winner_option = Some(winner.clone());
    Ok(winner)
}
