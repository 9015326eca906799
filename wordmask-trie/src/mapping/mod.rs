// wordmask-trie/src/mapping/mod.rs
//! Dense byte remapping for trie lookup tables.
//!
//! Every byte that occurs somewhere in a pattern key gets a dense index in
//! `0..size`, assigned in ascending byte order. All other bytes share the
//! sentinel index `size`, which never addresses a table slot.

/// Maps raw bytes to dense table indices.
#[derive(Debug, Clone)]
pub struct ByteMapping {
    slots: [u16; 256],
    size: usize,
}

impl ByteMapping {
    /// Builds the mapping from the bytes used by `keys`.
    pub fn from_keys<'a, I>(keys: I) -> Self
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut used = [false; 256];
        for key in keys {
            for &b in key {
                used[b as usize] = true;
            }
        }

        let size = used.iter().filter(|&&u| u).count();
        let mut slots = [size as u16; 256];
        let mut next = 0u16;
        for (slot, &u) in slots.iter_mut().zip(used.iter()) {
            if u {
                *slot = next;
                next += 1;
            }
        }

        Self { slots, size }
    }

    /// Number of slots a lookup table needs.
    pub fn table_size(&self) -> usize {
        self.size
    }

    /// Dense index of `b`, or `None` when no key uses it.
    #[inline]
    pub fn index(&self, b: u8) -> Option<usize> {
        let idx = self.slots[b as usize] as usize;
        (idx < self.size).then_some(idx)
    }
}
