// Elementwise view arithmetic. Results are plain assignments into `c`;
// callers that accumulate pass the destination as one of the operands.
use crate::arena::Arena;
use crate::buffer::Element;
use crate::view::View;

#[inline]
fn check_dimensions(op: &str, a: &View, b: &View, c: &View) {
    assert!(
        a.dimension() == c.dimension() && b.dimension() == c.dimension(),
        "{}: operand dimensions {} and {} do not match destination {}",
        op,
        a.dimension(),
        b.dimension(),
        c.dimension()
    );
}

fn zip_into(
    arena: &mut Arena,
    a: View,
    b: View,
    c: View,
    f: impl Fn(Element, Element) -> Element,
) {
    let dimension = c.dimension();
    for x in 0..dimension {
        for y in 0..dimension {
            let value = f(a.get(arena, x, y), b.get(arena, x, y));
            c.set(arena, x, y, value);
        }
    }
}

/// `c[x, y] = a[x, y] + b[x, y]` over c's window.
///
/// # Panics
/// Panics if the three views do not share one dimension.
pub fn sum(arena: &mut Arena, a: View, b: View, c: View) {
    check_dimensions("sum", &a, &b, &c);
    zip_into(arena, a, b, c, Element::wrapping_add);
}

/// `c[x, y] = a[x, y] - b[x, y]` over c's window.
///
/// # Panics
/// Panics if the three views do not share one dimension.
pub fn sub(arena: &mut Arena, a: View, b: View, c: View) {
    check_dimensions("sub", &a, &b, &c);
    zip_into(arena, a, b, c, Element::wrapping_sub);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Buffer;

    fn setup() -> (Arena, View, View, View) {
        let mut arena = Arena::new();
        let a = arena.insert(Buffer::from_vec(2, vec![1, 2, 3, 4]).unwrap());
        let b = arena.insert(Buffer::from_vec(2, vec![10, 20, 30, 40]).unwrap());
        let c = arena.alloc(2);
        let (a, b, c) = (
            View::of(&arena, a),
            View::of(&arena, b),
            View::of(&arena, c),
        );
        (arena, a, b, c)
    }

    #[test]
    fn test_sum() {
        let (mut arena, a, b, c) = setup();
        sum(&mut arena, a, b, c);
        assert_eq!(arena.buffer(c.buffer()).as_slice(), &[11, 22, 33, 44]);
    }

    #[test]
    fn test_sub() {
        let (mut arena, a, b, c) = setup();
        sub(&mut arena, b, a, c);
        assert_eq!(arena.buffer(c.buffer()).as_slice(), &[9, 18, 27, 36]);
    }

    #[test]
    fn test_assignment_not_accumulation() {
        let (mut arena, a, b, c) = setup();
        sum(&mut arena, a, b, c);
        sum(&mut arena, a, b, c);
        assert_eq!(arena.buffer(c.buffer()).as_slice(), &[11, 22, 33, 44]);
    }

    #[test]
    fn test_in_place_accumulate() {
        let (mut arena, a, _b, c) = setup();
        sum(&mut arena, c, a, c);
        sum(&mut arena, c, a, c);
        assert_eq!(arena.buffer(c.buffer()).as_slice(), &[2, 4, 6, 8]);
    }

    #[test]
    fn test_wrapping() {
        let mut arena = Arena::new();
        let a = arena.insert(Buffer::from_vec(1, vec![Element::MAX]).unwrap());
        let b = arena.insert(Buffer::from_vec(1, vec![1]).unwrap());
        let (a, b) = (View::of(&arena, a), View::of(&arena, b));
        sum(&mut arena, a, b, a);
        assert_eq!(a.get(&arena, 0, 0), Element::MIN);
    }

    #[test]
    #[should_panic(expected = "sum: operand dimensions")]
    fn test_dimension_mismatch_panics() {
        let (mut arena, a, b, c) = setup();
        sum(&mut arena, a.quadrant(0, 0), b, c);
    }
}
