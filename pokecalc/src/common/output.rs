use std::{
    fmt::Display,
    ops::{
        Add,
        Div,
        Mul,
    },
};

use num::rational::Ratio;

/// An output value with a description of each mathematical operation performed on it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Output<T> {
    value: T,
    description: Vec<String>,
}

impl<T> Output<T>
where
    T: Default,
{
    pub fn new<V, I, S>(val: V, description: I) -> Self
    where
        V: Into<T>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            value: val.into(),
            description: description
                .into_iter()
                .map(|reason| reason.into())
                .collect(),
        }
    }

    /// Starts the output with a new value with an attached message.
    pub fn start<V, S>(val: V, reason: S) -> Self
    where
        V: Clone + Display + Into<T>,
        S: Display,
    {
        let mut s = Self::default();
        s.set(val, reason);
        s
    }

    /// The current value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Description of all changes.
    pub fn description(&self) -> &[String] {
        self.description.as_slice()
    }

    /// Adds to the value.
    pub fn add<V, S>(&mut self, rhs: V, reason: S)
    where
        V: Clone + Display,
        S: Display,
        T: Add<V, Output = T>,
    {
        let val = std::mem::take(&mut self.value);
        self.value = val.add(rhs.clone());
        self.description.push(format!("+{rhs} - {reason}"));
    }

    /// Multiples the value.
    pub fn mul<V, S>(&mut self, rhs: V, reason: S)
    where
        V: Clone + Display,
        S: Display,
        T: Mul<V, Output = T>,
    {
        let val = std::mem::take(&mut self.value);
        self.value = val.mul(rhs.clone());
        self.description.push(format!("x{rhs} - {reason}"));
    }

    /// Divides the value.
    pub fn div<V, S>(&mut self, rhs: V, reason: S)
    where
        V: Clone + Display,
        S: Display,
        T: Div<V, Output = T>,
    {
        let val = std::mem::take(&mut self.value);
        self.value = val.div(rhs.clone());
        self.description.push(format!("\u{00F7}{rhs} - {reason}"));
    }

    /// Sets the value.
    pub fn set<V, S>(&mut self, rhs: V, reason: S)
    where
        V: Clone + Display + Into<T>,
        S: Display,
    {
        self.value = rhs.clone().into();
        self.description.push(format!("={rhs} - {reason}"));
    }
}

impl Output<u64> {
    /// Multiplies the value by an exact modifier, then floors the result.
    ///
    /// A modifier of exactly 1 is not recorded.
    pub fn mul_floor<S>(&mut self, modifier: Ratio<u64>, reason: S)
    where
        S: Display,
    {
        if modifier == Ratio::from_integer(1) {
            return;
        }
        self.value = (Ratio::from_integer(self.value) * modifier)
            .floor()
            .to_integer();
        self.description.push(format!("x{modifier} - {reason}"));
    }
}

impl<T> From<T> for Output<T> {
    fn from(value: T) -> Self {
        Self {
            value,
            description: Vec::default(),
        }
    }
}
