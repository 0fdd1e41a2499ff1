//! Creation-order assignment.

/// Hands out strictly increasing creation-order keys, starting at 1.
///
/// Each library owns its own assigner, so independent instances never
/// interfere with each other. The `&mut self` receivers mean exclusive
/// access is enforced by the borrow checker rather than by locking.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OrderAssigner {
    last: u64,
}

impl OrderAssigner {
    /// Creates an assigner whose first key will be 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Returns the next creation-order key, one greater than the
    /// previous one.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u64 {
        self.last += 1;
        self.last
    }

    /// Returns the counter to zero; the next key handed out is 1 again.
    pub fn reset(&mut self) {
        self.last = 0;
    }

    /// Returns the last key handed out, or 0 if none has been since
    /// construction or the last reset.
    #[must_use]
    pub const fn last(&self) -> u64 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_strictly_increasing() {
        let mut orders = OrderAssigner::new();
        let keys: Vec<u64> = (0..10).map(|_| orders.next()).collect();

        assert_eq!(keys, (1..=10).collect::<Vec<u64>>());
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_reset_restarts_at_one() {
        let mut orders = OrderAssigner::new();
        orders.next();
        orders.next();
        orders.reset();

        assert_eq!(orders.last(), 0);
        assert_eq!(orders.next(), 1);
    }

    #[test]
    fn test_instances_are_independent() {
        let mut a = OrderAssigner::new();
        let mut b = OrderAssigner::new();
        a.next();
        a.next();

        assert_eq!(b.next(), 1);
        assert_eq!(a.next(), 3);
    }
}
