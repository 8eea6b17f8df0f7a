use std::fmt::{Debug, Display};

use rand::Rng;

use crate::{error::RulesError, misc::TinyVec};

/// The unused dice of the active turn, in roll order.
///
/// A roll of two different values leaves two dice, a double leaves four
/// dice of the same value. Each move consumes the first die with the
/// value it used, so duplicates stay available until all are spent.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dice {
    remaining: TinyVec<u8, 4>,
}

impl Dice {
    /// The 21 distinct rolls of two dice.
    pub const ALL: [(u8, u8); 21] = [
        (1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (1, 6),
        (2, 2), (2, 3), (2, 4), (2, 5), (2, 6),
        (3, 3), (3, 4), (3, 5), (3, 6),
        (4, 4), (4, 5), (4, 6),
        (5, 5), (5, 6),
        (6, 6),
    ];

    /// No dice left.
    pub const fn none() -> Self {
        Dice { remaining: TinyVec::new() }
    }

    /// Dice granted by a roll of `die1` and `die2`. Panics if a value is
    /// outside 1..=6.
    pub fn from_roll(die1: u8, die2: u8) -> Self {
        assert!((1..=6).contains(&die1) && (1..=6).contains(&die2), "die values are 1..=6");
        let mut remaining = TinyVec::new();
        remaining.push(die1);
        remaining.push(die2);
        if die1 == die2 {
            remaining.push(die1);
            remaining.push(die2);
        }
        Dice { remaining }
    }

    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let die1 = rng.random_range(1..=6);
        let die2 = rng.random_range(1..=6);
        Dice::from_roll(die1, die2)
    }

    /// Arbitrary remaining dice, for positions part way through a turn.
    pub fn from_values(values: &[u8]) -> Result<Self, RulesError> {
        if values.len() > 4 {
            return Err(RulesError::TooManyDice(values.len()));
        }
        if let Some(&die) = values.iter().find(|die| !(1..=6).contains(*die)) {
            return Err(RulesError::InvalidDie(die));
        }
        Ok(Dice { remaining: values.iter().copied().collect() })
    }

    pub fn values(&self) -> &[u8] {
        &self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    /// Distinct values in first-seen order.
    pub fn unique_values(&self) -> TinyVec<u8, 4> {
        let mut unique = TinyVec::new();
        for &die in self.remaining.iter() {
            if !unique.contains(&die) {
                unique.push(die);
            }
        }
        unique
    }

    pub fn contains(&self, die: u8) -> bool {
        self.remaining.contains(&die)
    }

    pub fn highest(&self) -> Option<u8> {
        self.remaining.iter().copied().max()
    }

    /// Removes the first die showing `die`. Returns whether one was found.
    pub fn use_die(&mut self, die: u8) -> bool {
        match self.remaining.iter().position(|&d| d == die) {
            Some(index) => {
                self.remaining.remove(index);
                true
            }
            None => false,
        }
    }
}

impl Debug for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Dice{:?}", &*self.remaining)
    }
}

impl Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (i, die) in self.remaining.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", die)?;
        }
        Ok(())
    }
}
