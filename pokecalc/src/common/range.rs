use std::fmt::Display;

use serde::{
    Deserialize,
    Serialize,
};

/// An inclusive range of values, such as the low and high rolls of a damage calculation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range<I>(I, I);

impl<I> Range<I>
where
    I: Copy + PartialOrd,
{
    /// Creates a new range.
    pub fn new(a: I, b: I) -> Self {
        assert!(a <= b, "range start exceeds range end");
        Self(a, b)
    }

    /// The start of the range.
    pub fn a(&self) -> I {
        self.0
    }

    /// The end of the range (inclusive).
    pub fn b(&self) -> I {
        self.1
    }
}

impl<I> Display for Range<I>
where
    I: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.0, self.1)
    }
}
