//! Comparator-driven in-place ordering for dense arrays.
use core::cmp::Ordering;

use crate::{
    table::Table,
    value::{Key, Value},
};

/// A built-in ordering for [`Table::sort`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Order {
    /// Smallest value first.
    #[default]
    Ascending,
    /// Largest value first.
    Descending,
    /// A non-deterministic shuffle. Seed via [`fastrand::seed`] for
    /// reproducible tests.
    #[cfg(feature = "std")]
    Shuffled,
}

/// Total order over mixed-kind values: numbers compare numerically across
/// both numeric kinds and sort before everything else; all other kinds
/// compare by textual representation.
pub(crate) fn compare(a: &Value, b: &Value) -> Ordering {
    use alloc::string::ToString;
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.to_string().cmp(&b.to_string()),
    }
}

impl Table {
    /// Sorts the array's values in place with a built-in ordering.
    ///
    /// A map-classified table is returned untouched. See [`Table::sort_by`]
    /// for the algorithm and its cost.
    pub fn sort(&mut self, order: Order) -> &mut Self {
        match order {
            Order::Ascending => self.sort_by(|a, b| compare(a, b) == Ordering::Greater),
            Order::Descending => self.sort_by(|a, b| compare(a, b) == Ordering::Less),
            #[cfg(feature = "std")]
            Order::Shuffled => self.sort_by(|_, _| fastrand::bool()),
        }
    }

    /// Sorts the array's values in place with a caller-supplied comparator.
    ///
    /// `swap_when(a, b)` is consulted for every index pair `x < y` and a
    /// `true` verdict swaps the two values. The scan is a plain O(n²)
    /// pairwise pass and is not stable; callers with large arrays should
    /// sort elsewhere. A map-classified table is returned untouched.
    pub fn sort_by<F>(&mut self, mut swap_when: F) -> &mut Self
    where
        F: FnMut(&Value, &Value) -> bool,
    {
        if !self.is_array() {
            return self;
        }
        let n = self.entries.len();
        // Storage position of each key 1..=n. The array check guarantees
        // every key is present exactly once, whatever the insertion order.
        let mut pos = alloc::vec![0usize; n];
        for (at, (key, _)) in self.entries.iter().enumerate() {
            if let Key::Integer(i) = key {
                #[allow(clippy::cast_sign_loss)]
                let slot = (*i - 1) as usize;
                pos[slot] = at;
            }
        }
        for x in 0..n {
            for y in (x + 1)..n {
                if swap_when(&self.entries[pos[x]].1, &self.entries[pos[y]].1) {
                    // Swap the values only; keys keep their positions.
                    let (lo, hi) = if pos[x] < pos[y] {
                        (pos[x], pos[y])
                    } else {
                        (pos[y], pos[x])
                    };
                    let (head, tail) = self.entries.split_at_mut(hi);
                    core::mem::swap(&mut head[lo].1, &mut tail[0].1);
                }
            }
        }
        self
    }
}
