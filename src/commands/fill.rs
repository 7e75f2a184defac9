use std::collections::HashSet;

use crate::board::Board;

/// Recolors the maximal 8-connected region sharing the seed's current
/// color.
///
/// The target color is captured once up front. Comparing neighbors against
/// the popped cell's live color instead would stop terminating whenever the
/// fill color equals the target, since painted cells would keep matching.
/// The queued set admits each coordinate at most once, so the loop is
/// bounded by the board area.
pub fn flood_fill(board: &mut Board, x: i64, y: i64, color: &str) {
    let target = board.color_at(x, y).to_owned();
    let mut queued = HashSet::from([(x, y)]);
    let mut pending = vec![(x, y)];

    while let Some((cx, cy)) = pending.pop() {
        for (nx, ny) in neighbors(cx, cy) {
            if board.has_coordinates(nx, ny)
                && board.color_at(nx, ny) == target
                && queued.insert((nx, ny))
            {
                pending.push((nx, ny));
            }
        }
        // Only the seed can be out of bounds here; neighbors were
        // bounds-checked before being enqueued. The seed is painted
        // unconditionally, like the point-coloring command.
        board.set_color(cx, cy, color);
    }
}

// Saturating steps keep extreme coordinates from overflowing; anything that
// far out fails the bounds check regardless.
fn neighbors(x: i64, y: i64) -> [(i64, i64); 8] {
    let (left, right) = (x.saturating_sub(1), x.saturating_add(1));
    let (up, down) = (y.saturating_sub(1), y.saturating_add(1));
    [
        (left, up),
        (x, up),
        (right, up),
        (left, y),
        (right, y),
        (left, down),
        (x, down),
        (right, down),
    ]
}
