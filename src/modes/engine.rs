//! Shared round loop
//!
//! Every mode plays the same skeleton: draw a word, present it, read the
//! answer, re-check the deadline, compare, report, update policy state.
//! The differences live entirely in the [`RoundPolicy`] implementations.

use super::policy::{Flow, RoundPolicy};
use crate::catalog::Catalog;

/// Seam between the round loop and the terminal
///
/// The real implementation is [`crate::console::Console`]; tests drive the
/// loop with scripted answers.
pub trait Surface {
    /// Show the round header and the word to spell (spoken where possible)
    fn present_word(&mut self, header: &str, word: &str);

    /// Read the player's attempt
    fn prompt_answer(&mut self) -> String;

    /// Report whether the attempt matched, with the expected word
    fn verdict(&mut self, correct: bool, word: &str);
}

/// Run one game session under `policy`, returning the final score
///
/// Answers are trimmed and lowercased before comparison; catalog words are
/// already lowercase. An answer that lands after the policy's deadline is
/// discarded without a verdict.
pub fn run_mode<P: RoundPolicy, S: Surface>(
    mut policy: P,
    catalog: &Catalog,
    surface: &mut S,
) -> u32 {
    let mut score = 0;

    while let Some(word) = policy.next_word(catalog) {
        surface.present_word(&policy.status_line(score), &word);

        let answer = surface.prompt_answer();
        if policy.expired_after_read() {
            break;
        }

        let correct = answer.trim().to_lowercase() == word;
        surface.verdict(correct, &word);

        if correct {
            score += 1;
            policy.on_correct();
        } else if policy.on_incorrect() == Flow::Stop {
            break;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Tier;
    use crate::modes::policy::{
        ChallengePolicy, ClassicPolicy, SurvivalPolicy, TimeAttackPolicy,
    };
    use std::time::Duration;

    fn fixture_catalog() -> Catalog {
        Catalog::new(
            &["apple", "banana"],
            &["mountain"],
            &["psychology"],
            &["incomprehensibilities"],
        )
    }

    /// Echoes the presented word back for the first `correct_rounds` rounds,
    /// then answers nonsense.
    struct ScriptedSurface {
        correct_rounds: usize,
        presented: Vec<String>,
        verdicts: Vec<bool>,
    }

    impl ScriptedSurface {
        fn correct_for(rounds: usize) -> Self {
            Self {
                correct_rounds: rounds,
                presented: Vec::new(),
                verdicts: Vec::new(),
            }
        }

        fn always_correct() -> Self {
            Self::correct_for(usize::MAX)
        }
    }

    impl Surface for ScriptedSurface {
        fn present_word(&mut self, _header: &str, word: &str) {
            self.presented.push(word.to_string());
        }

        fn prompt_answer(&mut self) -> String {
            let word = self.presented.last().cloned().unwrap_or_default();
            if self.presented.len() <= self.correct_rounds {
                // Answer sloppily to exercise trim + lowercase
                format!("  {}  ", word.to_uppercase())
            } else {
                "xyzzy".to_string()
            }
        }

        fn verdict(&mut self, correct: bool, _word: &str) {
            self.verdicts.push(correct);
        }
    }

    #[test]
    fn classic_all_correct_scores_the_whole_tier() {
        let catalog = fixture_catalog();
        let mut surface = ScriptedSurface::always_correct();
        let policy = ClassicPolicy::new(Tier::Easy, &catalog);

        let score = run_mode(policy, &catalog, &mut surface);

        assert_eq!(score, 2);
        assert_eq!(surface.presented.len(), 2);
        assert_eq!(surface.verdicts, vec![true, true]);
    }

    #[test]
    fn classic_first_wrong_answer_ends_with_zero() {
        let catalog = fixture_catalog();
        let mut surface = ScriptedSurface::correct_for(0);
        let policy = ClassicPolicy::new(Tier::Easy, &catalog);

        let score = run_mode(policy, &catalog, &mut surface);

        assert_eq!(score, 0);
        // No further words after the wrong answer
        assert_eq!(surface.presented.len(), 1);
    }

    #[test]
    fn classic_wrong_at_round_two_scores_one() {
        let catalog = fixture_catalog();
        let mut surface = ScriptedSurface::correct_for(1);
        let policy = ClassicPolicy::new(Tier::Easy, &catalog);

        let score = run_mode(policy, &catalog, &mut surface);

        assert_eq!(score, 1);
        assert_eq!(surface.presented.len(), 2);
        assert_eq!(surface.verdicts, vec![true, false]);
    }

    #[test]
    fn survival_three_wrong_answers_end_with_zero() {
        let catalog = fixture_catalog();
        let mut surface = ScriptedSurface::correct_for(0);
        let policy = SurvivalPolicy::new();

        let score = run_mode(policy, &catalog, &mut surface);

        assert_eq!(score, 0);
        assert_eq!(surface.presented.len(), 3);
        assert_eq!(surface.verdicts, vec![false, false, false]);
    }

    #[test]
    fn challenge_wrong_answer_keeps_prior_score() {
        let catalog = fixture_catalog();
        let mut surface = ScriptedSurface::correct_for(2);
        let policy = ChallengePolicy::new();

        let score = run_mode(policy, &catalog, &mut surface);

        assert_eq!(score, 2);
        // Level rose with each correct answer
        assert!(surface.presented[1].len() >= 5);
        assert!(surface.presented[2].len() >= 6);
    }

    #[test]
    fn challenge_exhaustion_ends_without_a_verdict() {
        // One four-letter word: the first correct answer raises the level
        // past every candidate.
        let catalog = Catalog::new(&["abcd"], &[], &[], &[]);
        let mut surface = ScriptedSurface::always_correct();
        let policy = ChallengePolicy::new();

        let score = run_mode(policy, &catalog, &mut surface);

        assert_eq!(score, 1);
        assert_eq!(surface.presented.len(), 1);
        // Exhaustion is not a wrong answer: the last verdict was the correct one
        assert_eq!(surface.verdicts, vec![true]);
    }

    #[test]
    fn time_attack_expired_before_start_plays_no_rounds() {
        let catalog = fixture_catalog();
        let mut surface = ScriptedSurface::always_correct();
        let policy = TimeAttackPolicy::new(Duration::ZERO);

        let score = run_mode(policy, &catalog, &mut surface);

        assert_eq!(score, 0);
        assert!(surface.presented.is_empty());
    }

    #[test]
    fn time_attack_answer_after_deadline_is_discarded() {
        /// Correct answers that always arrive too late
        struct SlowSurface {
            rounds: usize,
            verdicts: usize,
        }

        impl Surface for SlowSurface {
            fn present_word(&mut self, _header: &str, _word: &str) {
                self.rounds += 1;
            }

            fn prompt_answer(&mut self) -> String {
                std::thread::sleep(Duration::from_millis(30));
                "apple".to_string()
            }

            fn verdict(&mut self, _correct: bool, _word: &str) {
                self.verdicts += 1;
            }
        }

        let catalog = Catalog::new(&["apple"], &[], &[], &[]);
        let mut surface = SlowSurface {
            rounds: 0,
            verdicts: 0,
        };
        let policy = TimeAttackPolicy::new(Duration::from_millis(10));

        let score = run_mode(policy, &catalog, &mut surface);

        // The answer was correct but landed after the deadline
        assert_eq!(score, 0);
        assert_eq!(surface.rounds, 1);
        assert_eq!(surface.verdicts, 0);
    }
}
