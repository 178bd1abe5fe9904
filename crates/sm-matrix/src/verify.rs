use crate::arena::Arena;
use crate::error::{MatrixError, Result};
use crate::view::View;

/// First cell, in row-major order, where two equally sized views differ.
///
/// Returns `None` when every cell matches. Dimensions are not compared.
pub fn first_mismatch(arena: &Arena, a: View, b: View) -> Option<(usize, usize)> {
    let dimension = a.dimension().min(b.dimension());
    for x in 0..dimension {
        for y in 0..dimension {
            if a.get(arena, x, y) != b.get(arena, x, y) {
                return Some((x, y));
            }
        }
    }
    None
}

/// Exact cell-by-cell equality. Views of different dimension are never equal.
pub fn views_equal(arena: &Arena, a: View, b: View) -> bool {
    a.dimension() == b.dimension() && first_mismatch(arena, a, b).is_none()
}

/// Check `actual` against `expected`, reporting the first difference.
///
/// # Errors
/// Returns `DimensionMismatch` if the sizes differ and `VerificationFailed`
/// at the first differing cell.
pub fn verify_views(arena: &Arena, expected: View, actual: View) -> Result<()> {
    if expected.dimension() != actual.dimension() {
        return Err(MatrixError::DimensionMismatch {
            left: expected.dimension(),
            right: actual.dimension(),
        });
    }
    match first_mismatch(arena, expected, actual) {
        None => Ok(()),
        Some((row, col)) => Err(MatrixError::VerificationFailed {
            row,
            col,
            expected: expected.get(arena, row, col),
            got: actual.get(arena, row, col),
        }),
    }
}
