//! A single die.

use rand::Rng;
use serde::Serialize;

use crate::error::{DiceError, DiceResult};

/// A die with a fixed number of sides and the face currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Die {
    sides: u32,
    top: u32,
}

impl Die {
    /// Create a die showing 1. Fails when `sides` is zero.
    pub fn new(sides: u32) -> DiceResult<Self> {
        if sides == 0 {
            return Err(DiceError::InvalidArgument(
                "a die needs at least one side".to_string(),
            ));
        }
        Ok(Self::fresh(sides))
    }

    /// Callers guarantee `sides >= 1`.
    pub(crate) fn fresh(sides: u32) -> Self {
        Self { sides, top: 1 }
    }

    /// Number of sides on this die.
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// The face currently showing.
    pub fn top(&self) -> u32 {
        self.top
    }

    /// Roll the die, drawing the new top uniformly from `1..=sides`.
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.top = rng.random_range(1..=self.sides);
    }

    /// Turn the die to face `n`. The top is left alone when `n` is not a face.
    pub fn set(&mut self, n: u32) -> DiceResult<()> {
        check_face(n, self.sides)?;
        self.top = n;
        Ok(())
    }
}

pub(crate) fn check_face(value: u32, sides: u32) -> DiceResult<()> {
    if !(1..=sides).contains(&value) {
        return Err(DiceError::OutOfRange { value, sides });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn new_die_faces_one() {
        let die = Die::new(6).unwrap();
        assert_eq!(die.sides(), 6);
        assert_eq!(die.top(), 1);
    }

    #[test]
    fn zero_sided_die_rejected() {
        assert!(matches!(Die::new(0), Err(DiceError::InvalidArgument(_))));
    }

    #[test]
    fn roll_changes_top_eventually() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut die = Die::new(10_000).unwrap();
        let start = die.top();
        let changed = (0..5).any(|_| {
            die.roll(&mut rng);
            die.top() != start
        });
        assert!(changed);
    }

    #[test]
    fn roll_reaches_highest_face() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut die = Die::new(2).unwrap();
        let mut seen_two = false;
        for _ in 0..64 {
            die.roll(&mut rng);
            seen_two |= die.top() == 2;
        }
        assert!(seen_two);
    }

    #[test]
    fn set_valid_face() {
        let mut die = Die::new(6).unwrap();
        die.set(5).unwrap();
        assert_eq!(die.top(), 5);
        die.set(5).unwrap();
        assert_eq!(die.top(), 5);
    }

    #[test]
    fn set_out_of_range_leaves_top() {
        let mut die = Die::new(6).unwrap();
        die.set(3).unwrap();
        assert_eq!(
            die.set(7),
            Err(DiceError::OutOfRange { value: 7, sides: 6 })
        );
        assert_eq!(die.set(0), Err(DiceError::OutOfRange { value: 0, sides: 6 }));
        assert_eq!(die.top(), 3);
    }

    proptest! {
        #[test]
        fn rolls_stay_on_the_die(sides in 1u32..500, seed: u64) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut die = Die::new(sides).unwrap();
            for _ in 0..20 {
                die.roll(&mut rng);
                prop_assert!((1..=sides).contains(&die.top()));
            }
        }

        #[test]
        fn set_respects_bounds(sides in 1u32..100, n in 0u32..120) {
            let mut die = Die::new(sides).unwrap();
            let result = die.set(n);
            if (1..=sides).contains(&n) {
                prop_assert!(result.is_ok());
                prop_assert_eq!(die.top(), n);
            } else {
                prop_assert!(result.is_err());
                prop_assert_eq!(die.top(), 1);
            }
        }
    }
}
