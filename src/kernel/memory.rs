use tracing::debug;

/// A free interval of the memory region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryBlock {
    pub start: usize,
    pub size: usize,
}

/// Fixed-size contiguous memory region with a first-fit allocator.
///
/// Free blocks are kept in ascending address order; `release` restores that
/// order and merges adjacent blocks, so `allocate` ties go to the lowest
/// address.
pub struct Memory {
    total_size: usize,
    free_blocks: Vec<MemoryBlock>,
}

impl Memory {
    pub fn new(total_size: usize) -> Memory {
        Memory {
            total_size,
            free_blocks: vec![MemoryBlock {
                start: 0,
                size: total_size,
            }],
        }
    }

    /// First-fit allocation. Returns the start address of the first free
    /// block large enough for `size`, shrinking it in place, or `None` when
    /// nothing fits. No state changes on the `None` path.
    pub fn allocate(&mut self, size: usize) -> Option<usize> {
        let i = self.free_blocks.iter().position(|block| block.size >= size)?;

        let block = self.free_blocks[i];
        if block.size > size {
            self.free_blocks[i] = MemoryBlock {
                start: block.start + size,
                size: block.size - size,
            };
        } else {
            self.free_blocks.remove(i);
        }

        debug!(start = block.start, size, "allocated block");
        Some(block.start)
    }

    /// Returns a previously-allocated interval to the free set and merges it
    /// with any directly-adjacent free blocks.
    ///
    /// Panics when the interval is out of bounds or overlaps the free set;
    /// that is an engine bug, not a recoverable condition.
    pub fn release(&mut self, start: usize, size: usize) {
        if start + size > self.total_size {
            panic!("Released interval is out of bounds");
        }

        for block in &self.free_blocks {
            if start < block.start + block.size && block.start < start + size {
                panic!("Released interval overlaps the free set");
            }
        }

        self.free_blocks.push(MemoryBlock { start, size });
        self.free_blocks.sort_by_key(|block| block.start);

        let mut merged: Vec<MemoryBlock> = Vec::with_capacity(self.free_blocks.len());
        for block in self.free_blocks.drain(..) {
            match merged.last_mut() {
                Some(prev) if prev.start + prev.size == block.start => prev.size += block.size,
                _ => merged.push(block),
            }
        }
        self.free_blocks = merged;

        debug!(start, size, "released block");
    }

    pub fn get_remaining_memory(&self) -> usize {
        self.free_blocks.iter().map(|block| block.size).sum()
    }

    pub fn get_total_size(&self) -> usize {
        self.total_size
    }

    pub fn get_free_blocks(&self) -> &[MemoryBlock] {
        &self.free_blocks
    }
}
