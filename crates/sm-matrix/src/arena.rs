use crate::buffer::Buffer;

/// Handle to a Buffer owned by an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId(usize);

/// Owns every Buffer taking part in one multiplication.
///
/// Views refer to Buffers by `BufferId`, so any number of views may alias
/// the same storage while the arena keeps sole ownership. Released slots
/// are reused by later allocations.
#[derive(Debug, Clone, Default)]
pub struct Arena {
    slots: Vec<Option<Buffer>>,
}

impl Arena {
    pub fn new() -> Self {
        Arena { slots: Vec::new() }
    }

    /// Allocate a zero-filled Buffer of the given dimension.
    pub fn alloc(&mut self, dimension: usize) -> BufferId {
        self.insert(Buffer::zeros(dimension))
    }

    /// Take ownership of an existing Buffer.
    pub fn insert(&mut self, buffer: Buffer) -> BufferId {
        if let Some(index) = self.slots.iter().position(Option::is_none) {
            self.slots[index] = Some(buffer);
            return BufferId(index);
        }
        self.slots.push(Some(buffer));
        BufferId(self.slots.len() - 1)
    }

    /// Remove a Buffer from the arena, handing it back to the caller.
    ///
    /// Returns `None` if the id was already released.
    pub fn release(&mut self, id: BufferId) -> Option<Buffer> {
        self.slots.get_mut(id.0).and_then(Option::take)
    }

    /// Borrow a Buffer.
    ///
    /// # Panics
    /// Panics if `id` was released or never allocated by this arena.
    #[inline]
    pub fn buffer(&self, id: BufferId) -> &Buffer {
        match self.slots.get(id.0) {
            Some(Some(buffer)) => buffer,
            _ => panic!("buffer {:?} is not live in this arena", id),
        }
    }

    /// Mutably borrow a Buffer.
    ///
    /// # Panics
    /// Panics if `id` was released or never allocated by this arena.
    #[inline]
    pub fn buffer_mut(&mut self, id: BufferId) -> &mut Buffer {
        match self.slots.get_mut(id.0) {
            Some(Some(buffer)) => buffer,
            _ => panic!("buffer {:?} is not live in this arena", id),
        }
    }

    /// Number of live Buffers.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Returns true if the arena owns no Buffers.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
