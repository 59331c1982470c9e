//! Player-visible score for a single placement.

use blokie_core::Bitset81;

use crate::combo::combo_magnitude;
use crate::config::ScoreConfig;

/// Score earned by dropping `placement` onto `before`, leaving `after`.
///
/// One point per placed cell that survives the clear. A move that completes
/// any region also earns the combo bonus, plus the streak bonus when the
/// previous move cleared too.
///
/// Panics if `placement` overlaps `before`.
pub fn move_score(
    config: &ScoreConfig,
    previous_was_clear: bool,
    before: Bitset81,
    placement: Bitset81,
    after: Bitset81,
) -> u32 {
    assert!(
        before.is_disjoint(placement),
        "placement overlaps occupied cells"
    );
    let mut score = after.count_diff(before);
    let combo = combo_magnitude(before | placement);
    if combo == 0 {
        return score;
    }

    if previous_was_clear {
        score += config.streak_bonus;
    }
    score + config.combo_bonus(combo)
}
