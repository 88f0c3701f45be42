//! Brute-force square detection.
//!
//! Four points are a square exactly when, among their six pairwise squared
//! distances sorted ascending, the first four are equal and non-zero (the
//! sides) and the last two are equal (the diagonals). Squared distances keep
//! everything in integers.

use tracing::{instrument, trace};

/// Integer point `(x, y)`.
pub type Point = (i64, i64);

fn squared_distance(a: Point, b: Point) -> i64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    dx * dx + dy * dy
}

/// Returns true when the four points are the corners of a square with
/// positive side, in any order and any orientation.
pub fn is_square(points: [Point; 4]) -> bool {
    let mut d = [0i64; 6];
    let mut n = 0;
    for i in 0..4 {
        for j in (i + 1)..4 {
            d[n] = squared_distance(points[i], points[j]);
            n += 1;
        }
    }
    d.sort_unstable();

    d[0] > 0 && d[0] == d[1] && d[1] == d[2] && d[2] == d[3] && d[4] == d[5]
}

/// Returns true when any four of `points` form a square.
///
/// Tries every 4-combination and stops at the first hit, so the cost is
/// `O(k⁴)` in the number of points.
#[instrument(skip(points), fields(count = points.len()))]
pub fn has_any_square(points: &[Point]) -> bool {
    let m = points.len();
    for i in 0..m {
        for j in (i + 1)..m {
            for k in (j + 1)..m {
                for l in (k + 1)..m {
                    let corners = [points[i], points[j], points[k], points[l]];
                    if is_square(corners) {
                        trace!(?corners, "Square found");
                        return true;
                    }
                }
            }
        }
    }
    false
}
