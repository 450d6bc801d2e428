//! Clue calculation and representation
//!
//! Each guess position is scored on its own against the whole secret:
//! - Exact: same digit at the same position
//! - Present: digit occurs somewhere in the secret
//! - Absent: digit does not occur in the secret
//!
//! There is no peg accounting. A secret digit can back any number of Present
//! clues, so a guess of `1111` against `1234` reads Exact, Present, Present,
//! Present. Standard Mastermind would cap Present clues by the unmatched copies
//! of each digit; this game does not.

use super::{CODE_LENGTH, Code};

/// Feedback for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClueState {
    /// Right digit, right position
    Exact,
    /// Right digit, wrong position
    Present,
    /// Digit not in the secret
    Absent,
}

/// Feedback for a whole guess, one state per position in guess order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClueSet([ClueState; CODE_LENGTH]);

impl ClueSet {
    /// Every position exact
    pub const SOLVED: Self = Self([ClueState::Exact; CODE_LENGTH]);

    /// Create a clue set from raw states
    #[inline]
    #[must_use]
    pub const fn new(states: [ClueState; CODE_LENGTH]) -> Self {
        Self(states)
    }

    /// Calculate the clues when `guess` is played against `secret`
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{ClueSet, ClueState, Code};
    ///
    /// let secret = Code::parse("1234").unwrap();
    /// let guess = Code::parse("1243").unwrap();
    /// let clues = ClueSet::calculate(&guess, &secret);
    ///
    /// assert_eq!(clues.exact_count(), 2);
    /// assert_eq!(clues.present_count(), 2);
    /// assert_eq!(clues.states()[2], ClueState::Present);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, secret: &Code) -> Self {
        Self(std::array::from_fn(|i| {
            let digit = guess.digit_at(i);
            if digit == secret.digit_at(i) {
                ClueState::Exact
            } else if secret.contains(digit) {
                ClueState::Present
            } else {
                ClueState::Absent
            }
        }))
    }

    /// Get the states in guess position order
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[ClueState; CODE_LENGTH] {
        &self.0
    }

    /// Iterate over the states in guess position order
    pub fn iter(&self) -> impl Iterator<Item = ClueState> + '_ {
        self.0.iter().copied()
    }

    /// Count the exact clues
    #[must_use]
    pub fn exact_count(&self) -> usize {
        self.iter().filter(|&s| s == ClueState::Exact).count()
    }

    /// Count the present clues
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.iter().filter(|&s| s == ClueState::Present).count()
    }

    /// Check if every position is exact
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }
}

/// Score a guess against the secret
#[must_use]
pub fn score(guess: &Code, secret: &Code) -> ClueSet {
    ClueSet::calculate(guess, secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::ClueState::{Absent, Exact, Present};
    use proptest::prelude::*;

    fn code(text: &str) -> Code {
        Code::parse(text).unwrap()
    }

    fn any_code() -> impl Strategy<Value = Code> {
        prop::array::uniform4(1u8..=6).prop_map(|values| Code::from_values(values).unwrap())
    }

    #[test]
    fn swapped_pair_scores_present() {
        let clues = score(&code("1243"), &code("1234"));
        assert_eq!(clues.states(), &[Exact, Exact, Present, Present]);
    }

    #[test]
    fn missing_digit_scores_absent() {
        let clues = score(&code("1444"), &code("1123"));
        assert_eq!(clues.states(), &[Exact, Absent, Absent, Absent]);
    }

    #[test]
    fn all_same_digit_solved() {
        let clues = score(&code("2222"), &code("2222"));
        assert_eq!(clues, ClueSet::SOLVED);
        assert!(clues.is_solved());
    }

    #[test]
    fn nothing_in_common() {
        let clues = score(&code("5656"), &code("1234"));
        assert_eq!(clues.states(), &[Absent; 4]);
        assert_eq!(clues.exact_count(), 0);
        assert_eq!(clues.present_count(), 0);
    }

    #[test]
    fn single_secret_copy_backs_many_present_clues() {
        // Only one 1 in the secret, but every other 1 still reads Present
        let clues = score(&code("1111"), &code("1234"));
        assert_eq!(clues.states(), &[Exact, Present, Present, Present]);
    }

    #[test]
    fn exact_match_does_not_consume_digit() {
        // Position 0 is exact on 3; the other 3s still see it in the secret
        let clues = score(&code("3133"), &code("3456"));
        assert_eq!(clues.states(), &[Exact, Absent, Present, Present]);
    }

    #[test]
    fn order_follows_guess_positions() {
        let clues = score(&code("4321"), &code("1326"));
        assert_eq!(clues.states(), &[Absent, Exact, Exact, Present]);
        assert_eq!(clues.iter().collect::<Vec<_>>(), clues.states().to_vec());
    }

    #[test]
    fn scoring_is_not_symmetric() {
        let forward = score(&code("1111"), &code("1234"));
        let backward = score(&code("1234"), &code("1111"));
        assert_eq!(backward.states(), &[Exact, Absent, Absent, Absent]);
        assert_ne!(forward, backward);
    }

    proptest! {
        #[test]
        fn prop_code_against_itself_is_solved(secret in any_code()) {
            prop_assert!(score(&secret, &secret).is_solved());
        }

        #[test]
        fn prop_counts_cover_all_positions(guess in any_code(), secret in any_code()) {
            let clues = score(&guess, &secret);
            let absent = clues.iter().filter(|&s| s == Absent).count();
            prop_assert_eq!(clues.exact_count() + clues.present_count() + absent, CODE_LENGTH);
        }

        #[test]
        fn prop_solved_iff_codes_equal(guess in any_code(), secret in any_code()) {
            prop_assert_eq!(score(&guess, &secret).is_solved(), guess == secret);
        }

        #[test]
        fn prop_each_position_matches_membership(guess in any_code(), secret in any_code()) {
            let clues = score(&guess, &secret);
            for (i, state) in clues.iter().enumerate() {
                let digit = guess.digit_at(i);
                let expected = if digit == secret.digit_at(i) {
                    Exact
                } else if secret.contains(digit) {
                    Present
                } else {
                    Absent
                };
                prop_assert_eq!(state, expected);
            }
        }
    }
}
