//! Digit arithmetic behind the two-digit ×11 shortcut.
//!
//! For `a = 10·f + s`, `a × 11 = 100·f + 10·(f + s) + s`. When `f + s` reaches
//! 10 the tens of that sum carry into the hundreds place.

use serde::{Deserialize, Serialize};

/// Decomposition of a two-digit operand for the ×11 walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElevenSplit {
    pub first: u32,
    pub second: u32,
    /// `first + second`, before any carry.
    pub middle: u32,
}

impl ElevenSplit {
    pub fn of(a: u32) -> Self {
        let first = a / 10;
        let second = a % 10;
        ElevenSplit { first, second, middle: first + second }
    }

    /// A sum of exactly 10 already carries (55 → 605).
    pub fn needs_carry(self) -> bool {
        self.middle >= 10
    }

    /// Hundreds, tens and ones of the product, in that order.
    pub fn result_digits(self) -> (u32, u32, u32) {
        if self.needs_carry() {
            (self.first + 1, self.middle % 10, self.second)
        } else {
            (self.first, self.middle, self.second)
        }
    }

    /// The result digits written next to each other, e.g. `"528"`.
    pub fn result_literal(self) -> String {
        let (h, t, o) = self.result_digits();
        format!("{h}{t}{o}")
    }

    /// The result digits read back as a decimal number.
    pub fn recompose(self) -> u32 {
        let (h, t, o) = self.result_digits();
        h * 100 + t * 10 + o
    }
}

/// Whether `a` is a two-digit number whose digits sum below 10.
pub fn is_carry_free(a: u32) -> bool {
    (10..=99).contains(&a) && !ElevenSplit::of(a).needs_carry()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recomposition_matches_product_for_every_two_digit_number() {
        for a in 10..=99u32 {
            let split = ElevenSplit::of(a);
            assert_eq!(split.recompose(), a * 11, "a={a} split={split:?}");
            assert_eq!(split.result_literal(), (a * 11).to_string(), "a={a}");
        }
    }

    #[test]
    fn carry_branch_depends_only_on_digit_sum() {
        for a in 10..=99u32 {
            let split = ElevenSplit::of(a);
            assert_eq!(split.needs_carry(), (a / 10 + a % 10) >= 10, "a={a}");
        }
    }

    #[test]
    fn sum_of_ten_takes_the_carry_branch() {
        let split = ElevenSplit::of(55);
        assert_eq!(split.middle, 10);
        assert!(split.needs_carry());
        assert_eq!(split.result_digits(), (6, 0, 5));
        assert_eq!(split.recompose(), 605);
    }

    #[test]
    fn worked_examples() {
        let carry = ElevenSplit::of(48);
        assert_eq!((carry.first, carry.second, carry.middle), (4, 8, 12));
        assert_eq!(carry.result_digits(), (5, 2, 8));

        let plain = ElevenSplit::of(23);
        assert_eq!((plain.first, plain.second, plain.middle), (2, 3, 5));
        assert_eq!(plain.result_digits(), (2, 5, 3));
    }

    #[test]
    fn carry_free_filter() {
        assert!(is_carry_free(10));
        assert!(is_carry_free(45));
        assert!(is_carry_free(90));
        assert!(!is_carry_free(46));
        assert!(!is_carry_free(55));
        assert!(!is_carry_free(9));
        assert!(!is_carry_free(100));
    }
}
