//! An append-only text accumulator with amortized concatenation cost.
use alloc::{
    string::{String, ToString},
    vec,
    vec::Vec,
};
use core::fmt;

/// An ordered stack of text fragments whose left-to-right concatenation is
/// the buffer's logical string value.
///
/// After every [`append`](Self::append) the stack is rebalanced: adjacent
/// fragments of non-increasing length are merged from the tail backward.
/// With similarly sized appends this bounds the fragment count by
/// O(log total-length), avoiding the quadratic cost of repeated direct
/// concatenation.
///
/// # Examples
///
/// ```
/// use tabula::StringBuffer;
///
/// let mut buf = StringBuffer::new();
/// buf.append("x=").append(42).append(";");
/// assert_eq!(buf.render(), "x=42;");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringBuffer {
    fragments: Vec<String>,
}

impl Default for StringBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl StringBuffer {
    /// Creates a buffer seeded with the empty string.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fragments: vec![String::new()],
        }
    }

    /// Creates a buffer seeded with `seed` as its first fragment.
    #[must_use]
    pub fn with_seed(seed: impl Into<String>) -> Self {
        Self {
            fragments: vec![seed.into()],
        }
    }

    /// Appends the textual representation of `fragment` and rebalances.
    ///
    /// Returns the buffer itself so appends can be chained.
    pub fn append(&mut self, fragment: impl fmt::Display) -> &mut Self {
        self.fragments.push(fragment.to_string());
        self.rebalance();
        self
    }

    // Merge backward from the second-to-last fragment: while the fragment
    // before the last is no longer than the last, fold the last into it.
    // Stops at the first fragment longer than its successor.
    fn rebalance(&mut self) {
        while self.fragments.len() >= 2 {
            let n = self.fragments.len();
            if self.fragments[n - 2].len() > self.fragments[n - 1].len() {
                break;
            }
            let Some(tail) = self.fragments.pop() else {
                break;
            };
            if let Some(head) = self.fragments.last_mut() {
                head.push_str(&tail);
            }
        }
    }

    /// Concatenates all fragments into the logical string value.
    ///
    /// Pure; callable repeatedly.
    #[must_use]
    pub fn render(&self) -> String {
        self.fragments.concat()
    }

    /// The logical string length, without rendering.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.iter().map(String::len).sum()
    }

    /// Returns `true` if the logical string value is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many fragments the balancer is currently holding.
    #[must_use]
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }
}

/// Renders the logical string value.
impl fmt::Display for StringBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            f.write_str(fragment)?;
        }
        Ok(())
    }
}
