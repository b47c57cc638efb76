//! The fixed-constant [`Ziguana`].

use super::Ziguana;

/// Poggersiness reported by every [`Benjamin`].
pub const POGGERSINESS: f32 = 10.5;

/// A stateless calculator whose poggersiness is always [`POGGERSINESS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Benjamin;

impl Benjamin {
    /// Creates a new calculator.
    pub const fn new() -> Self {
        Self
    }
}

impl Ziguana for Benjamin {
    fn poggersiness(&self) -> f32 {
        POGGERSINESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poggersiness_is_constant() {
        assert_eq!(Benjamin::new().poggersiness(), 10.5);
        assert_eq!(Benjamin::default().poggersiness(), POGGERSINESS);
    }

    #[test]
    fn test_awesomeness() {
        let benjamin = Benjamin::new();
        assert_eq!(benjamin.awesomeness(), 105);
        #[allow(clippy::cast_possible_truncation)]
        let expected = (benjamin.poggersiness() * 10.0) as i32;
        assert_eq!(benjamin.awesomeness(), expected);
    }
}
