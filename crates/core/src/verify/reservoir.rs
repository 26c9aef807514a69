//! Bounded-size uniform sampling of diagnostic examples.

use rand::Rng;

/// A reservoir sample of at most `capacity` items (Algorithm R).
///
/// Every item offered so far has equal probability of being retained,
/// regardless of stream length, which does not need to be known in advance.
/// With capacity 0 the reservoir still counts offered items but retains
/// nothing. All randomness comes from the caller-supplied generator, so a
/// seeded generator makes the sample fully deterministic.
#[derive(Debug, Clone)]
pub struct Reservoir<T> {
    capacity: usize,
    seen: u64,
    items: Vec<T>,
}

impl<T> Reservoir<T> {
    /// Create an empty reservoir with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self { capacity, seen: 0, items: Vec::new() }
    }

    /// Offer one item from the stream.
    pub fn offer<R: Rng + ?Sized>(&mut self, item: T, rng: &mut R) {
        self.seen += 1;
        if self.capacity == 0 {
            return;
        }
        if self.items.len() < self.capacity {
            self.items.push(item);
            return;
        }
        // Keep the new item with probability capacity / seen, evicting a
        // uniformly chosen resident.
        let slot = rng.random_range(0..self.seen);
        if (slot as usize) < self.capacity {
            self.items[slot as usize] = item;
        }
    }

    /// How many items have been offered in total.
    pub fn seen(&self) -> u64 {
        self.seen
    }

    /// The retained sample, in no particular order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the reservoir, yielding the retained sample.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
