/// Half of `x`, rounded up.
#[inline]
pub fn ceil_divide(x: usize) -> usize {
    x / 2 + (x % 2 != 0) as usize
}

/// Smallest padded dimension that halves cleanly down to the cutoff.
///
/// Halves `dimension` (rounding up) until it is at most `cutoff`, counting
/// the halvings `p`, and returns the final value times `2^p`. Recursively
/// halving the result then stays even at every level above the cutoff.
///
/// A `cutoff` of 0 is treated as 1.
pub fn padded_dimension(dimension: usize, cutoff: usize) -> usize {
    let cutoff = cutoff.max(1);
    let mut d = dimension;
    let mut power = 0u32;
    while d > cutoff {
        power += 1;
        d = ceil_divide(d);
    }
    d << power
}
