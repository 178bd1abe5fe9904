use crate::arena::Arena;
use crate::buffer::Buffer;
use crate::view::View;

/// Triple-loop multiply-accumulate: `c += a * b`.
///
/// `c` is expected to be cleared by the caller. The loop order is k, i, j
/// with `a[i, k]` hoisted out of the inner loop, so the inner loop walks a
/// row of `b` and a row of `c` sequentially.
///
/// Loop bounds are clipped to the cells backed by real storage: padding reads
/// as zero and swallows writes, so it contributes nothing. Row `k` of `b` is
/// copied out once per `k`, which lets any of the three views share a
/// buffer. `c` must not overlap `a` or `b`.
///
/// This is both the Strassen base case and the independent reference used
/// for verification.
///
/// # Panics
/// Panics if the three views do not share one dimension.
pub fn linear_multiply(arena: &mut Arena, a: View, b: View, c: View) {
    let dimension = c.dimension();
    assert!(
        a.dimension() == dimension && b.dimension() == dimension,
        "linear_multiply: operand dimensions {} and {} do not match destination {}",
        a.dimension(),
        b.dimension(),
        dimension
    );

    let (a_rows, a_cols) = a.extent(arena);
    let (b_rows, b_cols) = b.extent(arena);
    let (c_rows, c_cols) = c.extent(arena);
    let inner = a_cols.min(b_rows);
    let rows = a_rows.min(c_rows);
    let cols = b_cols.min(c_cols);
    if inner == 0 || rows == 0 || cols == 0 {
        return;
    }

    let mut b_row = vec![0; cols];
    for k in 0..inner {
        b_row.copy_from_slice(b.row(arena, k, cols));
        for i in 0..rows {
            let r = a.get(arena, i, k);
            let c_row = c.row_mut(arena, i, cols);
            for (acc, &v) in c_row.iter_mut().zip(&b_row) {
                *acc = acc.wrapping_add(r.wrapping_mul(v));
            }
        }
    }
}

/// Naive product of two whole buffers into a new buffer.
///
/// # Panics
/// Panics if the buffers differ in dimension.
pub fn naive_product(a: &Buffer, b: &Buffer) -> Buffer {
    let mut arena = Arena::new();
    let dimension = a.dimension();
    let a = arena.insert(a.clone());
    let b = arena.insert(b.clone());
    let c = arena.alloc(dimension);
    let (a, b, c) = (View::of(&arena, a), View::of(&arena, b), View::of(&arena, c));
    linear_multiply(&mut arena, a, b, c);
    c.to_buffer(&arena)
}
