//! Lazy enumeration of the minterms covered by one implicant.

/// Iterator over the cube of an implicant.
///
/// The fixed '1' positions form a base value; each free '-' position is then
/// expanded to both 0 and 1, producing `2^f` distinct minterms for `f` free
/// positions. The expansion is driven by a counter whose low bits are
/// scattered over the free positions, so the full combinatorial set is
/// produced exactly once with nothing materialized up front.
///
/// For bit width 0 the (empty) implicant covers exactly the minterm 0.
#[derive(Debug, Clone)]
pub struct MintermIter {
    base: u64,
    /// Bit positions of free slots, MSB-first in the implicant text.
    free: Vec<u32>,
    /// Next expansion index. `u128` so that 64 free positions do not
    /// overflow the `2^64` counter range.
    next: u128,
    total: u128,
}

impl MintermIter {
    pub(crate) fn new(text: &str, bit_width: u32) -> Self {
        let mut base = 0u64;
        let mut free = Vec::new();

        for (i, ch) in text.chars().enumerate() {
            let bitpos = bit_width - 1 - i as u32;
            match ch {
                '1' => base |= 1 << bitpos,
                '-' => free.push(bitpos),
                _ => {}
            }
        }

        let total = 1u128 << free.len();
        Self { base, free, next: 0, total }
    }
}

impl Iterator for MintermIter {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.next == self.total {
            return None;
        }
        let mask = self.next;
        self.next += 1;

        let mut value = self.base;
        for (j, &pos) in self.free.iter().enumerate() {
            if mask >> j & 1 == 1 {
                value |= 1 << pos;
            }
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.total - self.next) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
