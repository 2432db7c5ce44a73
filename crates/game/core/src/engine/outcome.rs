//! Outcome reporting for the turn engine.

use crate::state::MonsterId;

/// What a single [`step`](super::step) call did.
///
/// The engine is total: input that cannot apply is reported as
/// [`StepOutcome::Ignored`] or [`StepOutcome::Blocked`] rather than as an
/// error, and the state is left value-equal in both cases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepOutcome {
    /// The game already ended; the input was discarded.
    Ignored,
    /// The target cell is out of bounds or a wall; nothing changed.
    Blocked,
    /// The player stepped onto a walkable cell.
    Moved,
    /// The player traded blows with the monster on the target cell.
    Fought {
        target: MonsterId,
        defeated: bool,
        player_died: bool,
        leveled_up: bool,
    },
    /// The player took the stairs down; `floor` is the new depth.
    Descended { floor: u32 },
}

impl StepOutcome {
    /// True when the input changed nothing.
    pub fn is_no_op(&self) -> bool {
        matches!(self, StepOutcome::Ignored | StepOutcome::Blocked)
    }
}
