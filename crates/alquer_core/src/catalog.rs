//! Static movement tables.

use crate::types::Side;

/// Diagonal single steps available to `First` pawns (toward higher rows).
pub const FIRST_STEPS: [(i8, i8); 2] = [(1, -1), (1, 1)];

/// Diagonal single steps available to `Second` pawns (toward row 0).
pub const SECOND_STEPS: [(i8, i8); 2] = [(-1, -1), (-1, 1)];

/// Orthogonal two-square jumps, shared by both sides.
pub const JUMPS: [(i8, i8); 4] = [(0, 2), (0, -2), (2, 0), (-2, 0)];

/// The forward diagonal offsets of `side`.
#[inline]
pub fn steps(side: Side) -> &'static [(i8, i8); 2] {
    match side {
        Side::First => &FIRST_STEPS,
        Side::Second => &SECOND_STEPS,
    }
}
