// Character regions with an anchor and a caret

use std::fmt;

/// A span of character offsets. `a` is the anchor and `b` the caret, so a
/// region with `a > b` is reversed and has its caret at the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    pub a: usize,
    pub b: usize,
}

impl Region {
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// An empty region: a bare caret.
    pub fn point(pt: usize) -> Self {
        Self { a: pt, b: pt }
    }

    pub fn begin(&self) -> usize {
        self.a.min(self.b)
    }

    pub fn end(&self) -> usize {
        self.a.max(self.b)
    }

    pub fn len(&self) -> usize {
        self.end() - self.begin()
    }

    pub fn is_empty(&self) -> bool {
        self.a == self.b
    }

    /// The same span with the caret at its start.
    pub fn reversed(&self) -> Self {
        Self {
            a: self.end(),
            b: self.begin(),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}
