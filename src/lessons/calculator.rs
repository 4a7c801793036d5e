//! Methods: a stateless type exposing one pure operation.

/// Stateless integer calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    /// Returns `a + b`, wrapping around on overflow in every build profile.
    pub fn add(&self, a: i32, b: i32) -> i32 {
        a.wrapping_add(b)
    }
}
