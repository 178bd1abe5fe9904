use tracing::{debug, trace};

use crate::arena::{Arena, BufferId};
use crate::naive::linear_multiply;
use crate::ops::{sub, sum};
use crate::sizing::padded_dimension;
use crate::stats::OpStats;
use crate::view::View;

/// Multiply two square buffers with Strassen's algorithm.
///
/// `a` and `b` must have equal dimension n. The product is written to a new
/// buffer of the padded dimension allocated in `arena`; the returned view
/// covers its top-left n×n window. Below `cutoff` (and for odd sizes) the
/// recursion falls back to [`linear_multiply`]. A `cutoff` of 0 is treated
/// as 1.
///
/// # Panics
/// Panics if the input dimensions differ.
pub fn multiply(arena: &mut Arena, a: BufferId, b: BufferId, cutoff: usize) -> View {
    let mut stats = OpStats::new();
    multiply_with_stats(arena, a, b, cutoff, &mut stats)
}

/// [`multiply`], accumulating operation counts into `stats`.
pub fn multiply_with_stats(
    arena: &mut Arena,
    a: BufferId,
    b: BufferId,
    cutoff: usize,
    stats: &mut OpStats,
) -> View {
    let dimension = arena.buffer(a).dimension();
    assert_eq!(
        dimension,
        arena.buffer(b).dimension(),
        "multiply: input dimensions differ"
    );

    let cutoff = cutoff.max(1);
    let padded = padded_dimension(dimension, cutoff);
    debug!(dimension, padded, cutoff, "strassen multiply");

    let c = arena.alloc(padded);
    let scratch = arena.alloc(padded);
    stats.record_allocation(padded);
    stats.record_allocation(padded);

    let a_view = View::of(arena, a).with_dimension(padded);
    let b_view = View::of(arena, b).with_dimension(padded);
    let c_view = View::of(arena, c);
    let s_view = View::of(arena, scratch);

    strassen_recursive(arena, a_view, b_view, c_view, s_view, cutoff, 0, stats);

    arena.release(scratch);
    c_view.with_dimension(dimension)
}

/// Quadrants in (0,0), (0,1), (1,0), (1,1) order.
fn quadrants(v: View) -> [View; 4] {
    [v.quadrant(0, 0), v.quadrant(0, 1), v.quadrant(1, 0), v.quadrant(1, 1)]
}

fn tracked_sum(arena: &mut Arena, a: View, b: View, c: View, stats: &mut OpStats) {
    sum(arena, a, b, c);
    stats.record_elementwise(c.dimension());
}

fn tracked_sub(arena: &mut Arena, a: View, b: View, c: View, stats: &mut OpStats) {
    sub(arena, a, b, c);
    stats.record_elementwise(c.dimension());
}

/// One level of the seven-product recursion.
///
/// `s` is scratch space of the same dimension as `c`. It is carved into
/// four quadrants: `m` receives each product, `sr` becomes the whole scratch
/// space of the next level, and `sum0`/`sum1` hold operand combinations.
/// Total scratch is therefore one buffer regardless of depth.
#[allow(clippy::too_many_arguments)]
fn strassen_recursive(
    arena: &mut Arena,
    a: View,
    b: View,
    c: View,
    s: View,
    cutoff: usize,
    depth: u32,
    stats: &mut OpStats,
) {
    // A parent's quadrant of C still holds earlier contributions.
    c.clear(arena);
    stats.record_depth(depth);

    let dimension = c.dimension();
    // Odd sizes cannot be quartered evenly and always fall back, even
    // above the cutoff.
    if dimension % 2 == 1 || dimension <= cutoff {
        trace!(dimension, depth, "naive base case");
        linear_multiply(arena, a, b, c);
        stats.record_naive(dimension);
        return;
    }

    let [a00, a01, a10, a11] = quadrants(a);
    let [b00, b01, b10, b11] = quadrants(b);
    let [c00, c01, c10, c11] = quadrants(c);

    let m = s.quadrant(0, 0);
    let sr = s.quadrant(0, 1);
    let sum0 = s.quadrant(1, 0);
    let sum1 = s.quadrant(1, 1);
    let next = depth + 1;

    // M1 = (A00 + A11)(B00 + B11)
    tracked_sum(arena, a00, a11, sum0, stats);
    tracked_sum(arena, b00, b11, sum1, stats);
    strassen_recursive(arena, sum0, sum1, m, sr, cutoff, next, stats);
    tracked_sum(arena, c00, m, c00, stats);
    tracked_sum(arena, c11, m, c11, stats);

    // M2 = (A10 + A11) B00
    tracked_sum(arena, a10, a11, sum0, stats);
    strassen_recursive(arena, sum0, b00, m, sr, cutoff, next, stats);
    tracked_sum(arena, c10, m, c10, stats);
    tracked_sub(arena, c11, m, c11, stats);

    // M3 = A00 (B01 - B11)
    tracked_sub(arena, b01, b11, sum0, stats);
    strassen_recursive(arena, a00, sum0, m, sr, cutoff, next, stats);
    tracked_sum(arena, c01, m, c01, stats);
    tracked_sum(arena, c11, m, c11, stats);

    // M4 = A11 (B10 - B00)
    tracked_sub(arena, b10, b00, sum0, stats);
    strassen_recursive(arena, a11, sum0, m, sr, cutoff, next, stats);
    tracked_sum(arena, c00, m, c00, stats);
    tracked_sum(arena, c10, m, c10, stats);

    // M5 = (A00 + A01) B11
    tracked_sum(arena, a00, a01, sum0, stats);
    strassen_recursive(arena, sum0, b11, m, sr, cutoff, next, stats);
    tracked_sub(arena, c00, m, c00, stats);
    tracked_sum(arena, c01, m, c01, stats);

    // M6 = (A10 - A00)(B00 + B01)
    tracked_sub(arena, a10, a00, sum0, stats);
    tracked_sum(arena, b00, b01, sum1, stats);
    strassen_recursive(arena, sum0, sum1, m, sr, cutoff, next, stats);
    tracked_sum(arena, c11, m, c11, stats);

    // M7 = (A01 - A11)(B10 + B11)
    tracked_sub(arena, a01, a11, sum0, stats);
    tracked_sum(arena, b10, b11, sum1, stats);
    strassen_recursive(arena, sum0, sum1, m, sr, cutoff, next, stats);
    tracked_sum(arena, c00, m, c00, stats);
}
