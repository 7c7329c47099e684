/// Controls how an [`Array`](crate::Array) grows once it runs out of room.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// The number of slots reserved by the first allocation.
    min_non_zero_capacity: usize,
    /// When the array is full, its capacity is multiplied by this factor.
    growth_factor: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_non_zero_capacity: 1,
            growth_factor: 2,
        }
    }
}

impl Config {
    /// Constructs a new `Config`.
    ///
    /// # Panics
    ///
    /// Panics if
    /// - `min_non_zero_capacity` is zero
    /// - `growth_factor` is smaller than 2
    pub fn new(min_non_zero_capacity: usize, growth_factor: usize) -> Self {
        assert!(min_non_zero_capacity > 0, "minimum capacity must be non-zero");
        assert!(growth_factor >= 2, "growth factor must be at least 2");
        Self {
            min_non_zero_capacity,
            growth_factor,
        }
    }

    #[inline]
    pub fn min_non_zero_capacity(&self) -> usize {
        self.min_non_zero_capacity
    }

    #[inline]
    pub fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    /// Returns the capacity that follows `capacity`, or `None` if it overflows `usize`.
    pub fn next_capacity(&self, capacity: usize) -> Option<usize> {
        if capacity == 0 {
            return Some(self.min_non_zero_capacity);
        }
        capacity
            .checked_mul(self.growth_factor)
            .map(|cap| cap.max(self.min_non_zero_capacity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_doubles_from_one() {
        let config = Config::default();
        let mut cap = 0;
        let mut seen = Vec::new();
        for _ in 0..5 {
            cap = config.next_capacity(cap).unwrap();
            seen.push(cap);
        }
        assert_eq!(seen, [1, 2, 4, 8, 16]);
    }

    #[test]
    fn custom_policy() {
        let config = Config::new(4, 3);
        assert_eq!(config.next_capacity(0), Some(4));
        assert_eq!(config.next_capacity(4), Some(12));
        assert_eq!(config.next_capacity(1), Some(4));
    }

    #[test]
    fn overflow_is_none() {
        assert_eq!(Config::default().next_capacity(usize::MAX), None);
    }

    #[test]
    #[should_panic]
    fn rejects_factor_of_one() {
        Config::new(1, 1);
    }

    #[test]
    #[should_panic]
    fn rejects_zero_minimum() {
        Config::new(0, 2);
    }
}
