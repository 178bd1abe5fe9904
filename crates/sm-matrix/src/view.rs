use crate::arena::{Arena, BufferId};
use crate::buffer::{Buffer, Element};
use crate::sizing::ceil_divide;

/// A square window into one Buffer of an [`Arena`].
///
/// A view is a plain descriptor: the buffer it reads, the offset `(i, j)` of
/// its top-left cell, and its dimension. Coordinates outside `[0, dimension)`
/// or outside the backing buffer read as zero and swallow writes, which lets
/// a view describe a matrix padded to a larger size without storing the
/// padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View {
    buffer: BufferId,
    i: usize,
    j: usize,
    dimension: usize,
}

impl View {
    /// A view covering an entire buffer.
    pub fn of(arena: &Arena, buffer: BufferId) -> Self {
        View {
            buffer,
            i: 0,
            j: 0,
            dimension: arena.buffer(buffer).dimension(),
        }
    }

    /// The same window origin with a different declared dimension.
    pub fn with_dimension(self, dimension: usize) -> Self {
        View { dimension, ..self }
    }

    pub fn buffer(&self) -> BufferId {
        self.buffer
    }

    pub fn offset(&self) -> (usize, usize) {
        (self.i, self.j)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// One of the four half-size child windows.
    ///
    /// `qx` selects the row half and `qy` the column half; both must be 0 or 1.
    /// For an odd dimension the children overlap the padding region.
    pub fn quadrant(&self, qx: usize, qy: usize) -> View {
        debug_assert!(qx < 2 && qy < 2, "quadrant ({}, {}) out of range", qx, qy);
        let half = ceil_divide(self.dimension);
        View {
            buffer: self.buffer,
            i: self.i + qx * half,
            j: self.j + qy * half,
            dimension: half,
        }
    }

    #[inline]
    fn in_window(&self, x: usize, y: usize) -> bool {
        x < self.dimension && y < self.dimension
    }

    /// Read cell (x, y) of the window.
    #[inline]
    pub fn get(&self, arena: &Arena, x: usize, y: usize) -> Element {
        if !self.in_window(x, y) {
            return 0;
        }
        arena.buffer(self.buffer).get(self.i + x, self.j + y)
    }

    /// Write cell (x, y) of the window.
    #[inline]
    pub fn set(&self, arena: &mut Arena, x: usize, y: usize, value: Element) {
        if !self.in_window(x, y) {
            return;
        }
        arena.buffer_mut(self.buffer).set(self.i + x, self.j + y, value);
    }

    /// Rows and columns of the window that are backed by real cells.
    ///
    /// Everything past these bounds is padding.
    pub fn extent(&self, arena: &Arena) -> (usize, usize) {
        let n = arena.buffer(self.buffer).dimension();
        (
            self.dimension.min(n.saturating_sub(self.i)),
            self.dimension.min(n.saturating_sub(self.j)),
        )
    }

    /// The first `len` cells of window row `x`, borrowed from the buffer.
    ///
    /// # Panics
    /// Panics unless `x` and `len` lie within [`View::extent`].
    #[inline]
    pub fn row<'a>(&self, arena: &'a Arena, x: usize, len: usize) -> &'a [Element] {
        let buffer = arena.buffer(self.buffer);
        let start = self.row_start(buffer.dimension(), x, len);
        &buffer.as_slice()[start..start + len]
    }

    /// Mutable form of [`View::row`].
    ///
    /// # Panics
    /// Panics unless `x` and `len` lie within [`View::extent`].
    #[inline]
    pub fn row_mut<'a>(&self, arena: &'a mut Arena, x: usize, len: usize) -> &'a mut [Element] {
        let buffer = arena.buffer_mut(self.buffer);
        let start = self.row_start(buffer.dimension(), x, len);
        &mut buffer.as_mut_slice()[start..start + len]
    }

    fn row_start(&self, n: usize, x: usize, len: usize) -> usize {
        assert!(
            x < self.dimension && self.i + x < n && len <= self.dimension && self.j + len <= n,
            "row {} of length {} is outside the backed window",
            x,
            len
        );
        (self.i + x) * n + self.j
    }

    /// Zero every cell visible through the window.
    pub fn clear(&self, arena: &mut Arena) {
        let buffer = arena.buffer_mut(self.buffer);
        for x in 0..self.dimension {
            for y in 0..self.dimension {
                buffer.set(self.i + x, self.j + y, 0);
            }
        }
    }

    /// Copy the window into a new owned Buffer of the view's dimension.
    pub fn to_buffer(&self, arena: &Arena) -> Buffer {
        let mut out = Buffer::zeros(self.dimension);
        for x in 0..self.dimension {
            for y in 0..self.dimension {
                out.set(x, y, self.get(arena, x, y));
            }
        }
        out
    }
}
