//! Arena storage for the blocks of an unrolled deque.
//!
//! Blocks never hold references to each other. Each block stores the
//! [`BlockHandle`] of its neighbors, and the arena is the single owner of
//! every block. Releasing a handle drops the block together with any values
//! still stored in its slots.

/// Stable index of a block inside a [`BlockArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct BlockHandle(usize);

/// A fixed-length run of slots plus the handles of its neighbors.
#[derive(Clone)]
pub(crate) struct Block<T> {
    slots: Box<[Option<T>]>,
    next: Option<BlockHandle>,
    previous: Option<BlockHandle>,
}

impl<T> Block<T> {
    fn new(block_size: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(block_size).collect(),
            next: None,
            previous: None,
        }
    }

    /// Returns the value stored at `index`, if the slot is live.
    #[inline]
    pub(crate) fn slot(&self, index: usize) -> Option<&T> {
        self.slots[index].as_ref()
    }

    #[inline]
    pub(crate) fn slot_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots[index].as_mut()
    }

    #[inline]
    pub(crate) fn store(&mut self, index: usize, element: T) {
        self.slots[index] = Some(element);
    }

    /// Clears the slot at `index` and returns what it held.
    #[inline]
    pub(crate) fn take(&mut self, index: usize) -> Option<T> {
        self.slots[index].take()
    }
}

/// Owner of all blocks of one deque.
///
/// Vacant positions left by released blocks are remembered and handed out
/// again by [`BlockArena::allocate`]; the block storage itself is always
/// freshly created.
#[derive(Clone)]
pub(crate) struct BlockArena<T> {
    block_size: usize,
    blocks: Vec<Option<Block<T>>>,
    vacant: Vec<BlockHandle>,
}

impl<T> BlockArena<T> {
    pub(crate) const fn new(block_size: usize) -> Self {
        Self {
            block_size,
            blocks: Vec::new(),
            vacant: Vec::new(),
        }
    }

    /// Creates an empty, unlinked block and returns its handle.
    pub(crate) fn allocate(&mut self) -> BlockHandle {
        let block = Block::new(self.block_size);
        let handle = match self.vacant.pop() {
            Some(handle) => {
                self.blocks[handle.0] = Some(block);
                handle
            }
            None => {
                self.blocks.push(Some(block));
                BlockHandle(self.blocks.len() - 1)
            }
        };
        tracing::trace!(
            handle = handle.0,
            block_size = self.block_size,
            live_blocks = self.live_blocks(),
            "allocated block"
        );
        handle
    }

    /// Drops the block behind `handle`. Neighbors are not touched.
    pub(crate) fn release(&mut self, handle: BlockHandle) {
        if self.blocks[handle.0].take().is_some() {
            self.vacant.push(handle);
        }
        tracing::trace!(
            handle = handle.0,
            live_blocks = self.live_blocks(),
            "released block"
        );
    }

    /// Drops every block and starts over with a single fresh one.
    pub(crate) fn reset(&mut self) -> BlockHandle {
        self.blocks.clear();
        self.vacant.clear();
        self.allocate()
    }

    #[inline]
    pub(crate) fn get(&self, handle: BlockHandle) -> &Block<T> {
        match &self.blocks[handle.0] {
            Some(block) => block,
            None => unreachable!("block handle {} is vacant", handle.0),
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: BlockHandle) -> &mut Block<T> {
        match &mut self.blocks[handle.0] {
            Some(block) => block,
            None => unreachable!("block handle {} is vacant", handle.0),
        }
    }

    /// Makes `after` the successor of `before`.
    pub(crate) fn link(&mut self, before: BlockHandle, after: BlockHandle) {
        self.get_mut(before).next = Some(after);
        self.get_mut(after).previous = Some(before);
    }

    #[inline]
    pub(crate) fn next(&self, handle: BlockHandle) -> Option<BlockHandle> {
        self.get(handle).next
    }

    #[inline]
    pub(crate) fn previous(&self, handle: BlockHandle) -> Option<BlockHandle> {
        self.get(handle).previous
    }

    /// Unlinks `handle` from its successor, making it the last block.
    pub(crate) fn detach_next(&mut self, handle: BlockHandle) {
        self.get_mut(handle).next = None;
    }

    /// Unlinks `handle` from its predecessor, making it the first block.
    pub(crate) fn detach_previous(&mut self, handle: BlockHandle) {
        self.get_mut(handle).previous = None;
    }

    #[inline]
    pub(crate) const fn block_size(&self) -> usize {
        self.block_size
    }

    /// Number of blocks currently owned by the arena.
    pub(crate) fn live_blocks(&self) -> usize {
        self.blocks.len() - self.vacant.len()
    }
}
