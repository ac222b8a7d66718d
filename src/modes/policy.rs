//! Game mode policies
//!
//! Defines the `RoundPolicy` trait and the four concrete play policies.
//! Each policy owns its word source and continuation rule; the shared round
//! loop lives in [`super::engine`].

use std::fmt;
use std::time::{Duration, Instant};

use rand::seq::{IndexedRandom, SliceRandom};

use crate::catalog::{Catalog, Tier};

/// Default Time Attack session length
pub const DEFAULT_TIME_ATTACK: Duration = Duration::from_secs(30);

/// Lives at the start of a Survival session
pub const SURVIVAL_LIVES: u32 = 3;

/// Word-length threshold at the start of a Challenge session
pub const CHALLENGE_START_LEVEL: usize = 4;

/// One of the four play policies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Classic,
    TimeAttack,
    Survival,
    Challenge,
}

impl Mode {
    /// Human-readable mode name, also the label persisted in score records
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::TimeAttack => "Time Attack",
            Self::Survival => "Survival",
            Self::Challenge => "Challenge",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether the round loop keeps going after a wrong answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Word source, continuation rule, and transient state for one mode
pub trait RoundPolicy {
    /// The next word to present, or `None` when the mode is over before the
    /// round starts (word source exhausted, or the deadline already passed).
    fn next_word(&mut self, catalog: &Catalog) -> Option<String>;

    /// Header line shown above the word
    fn status_line(&self, score: u32) -> String;

    /// Deadline re-check after the blocking answer read
    ///
    /// A `true` result discards the answer without scoring, even if it was
    /// correct. Only Time Attack overrides this.
    fn expired_after_read(&self) -> bool {
        false
    }

    /// State update on a correct answer (score itself is kept by the driver)
    fn on_correct(&mut self) {}

    /// State update on a wrong answer; decides whether the loop continues
    fn on_incorrect(&mut self) -> Flow;
}

/// Classic: the selected tier's list, shuffled once, each word exactly once.
/// The first wrong answer ends the session.
pub struct ClassicPolicy {
    tier: Tier,
    words: Vec<&'static str>,
    next: usize,
}

impl ClassicPolicy {
    #[must_use]
    pub fn new(tier: Tier, catalog: &Catalog) -> Self {
        let mut words = catalog.get(tier).to_vec();
        words.shuffle(&mut rand::rng());
        Self {
            tier,
            words,
            next: 0,
        }
    }
}

impl RoundPolicy for ClassicPolicy {
    fn next_word(&mut self, _catalog: &Catalog) -> Option<String> {
        let word = self.words.get(self.next)?;
        self.next += 1;
        Some((*word).to_string())
    }

    fn status_line(&self, _score: u32) -> String {
        format!(
            "🐝 {} mode | Round {}/{} 🐝",
            self.tier,
            self.next,
            self.words.len()
        )
    }

    fn on_incorrect(&mut self) -> Flow {
        Flow::Stop
    }
}

/// Time Attack: uniform draws from the full vocabulary until a wall-clock
/// deadline. Wrong answers cost nothing; an answer read after the deadline
/// is discarded.
pub struct TimeAttackPolicy {
    deadline: Instant,
}

impl TimeAttackPolicy {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            deadline: Instant::now() + duration,
        }
    }

    fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }
}

impl RoundPolicy for TimeAttackPolicy {
    fn next_word(&mut self, catalog: &Catalog) -> Option<String> {
        if Instant::now() >= self.deadline {
            return None;
        }
        catalog
            .all_words()
            .choose(&mut rand::rng())
            .map(|w| (*w).to_string())
    }

    fn status_line(&self, score: u32) -> String {
        format!(
            "⏱ Time left: {}s | Score: {score}",
            self.remaining().as_secs()
        )
    }

    fn expired_after_read(&self) -> bool {
        Instant::now() >= self.deadline
    }

    fn on_incorrect(&mut self) -> Flow {
        Flow::Continue
    }
}

/// Survival: uniform draws from the full vocabulary, three lives, a wrong
/// answer costs one life.
pub struct SurvivalPolicy {
    lives: u32,
}

impl SurvivalPolicy {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lives: SURVIVAL_LIVES,
        }
    }
}

impl Default for SurvivalPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundPolicy for SurvivalPolicy {
    fn next_word(&mut self, catalog: &Catalog) -> Option<String> {
        if self.lives == 0 {
            return None;
        }
        catalog
            .all_words()
            .choose(&mut rand::rng())
            .map(|w| (*w).to_string())
    }

    fn status_line(&self, score: u32) -> String {
        format!("❤️ Lives: {} | Score: {score}", self.lives)
    }

    fn on_incorrect(&mut self) -> Flow {
        self.lives -= 1;
        if self.lives == 0 { Flow::Stop } else { Flow::Continue }
    }
}

/// Challenge: draws among words of length >= the current level. The level
/// starts at 4 and grows by one per correct answer; the session ends on the
/// first wrong answer, or quietly once no word is long enough.
pub struct ChallengePolicy {
    level: usize,
}

impl ChallengePolicy {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            level: CHALLENGE_START_LEVEL,
        }
    }

    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }
}

impl Default for ChallengePolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundPolicy for ChallengePolicy {
    fn next_word(&mut self, catalog: &Catalog) -> Option<String> {
        catalog
            .words_at_least(self.level)
            .choose(&mut rand::rng())
            .map(|w| (*w).to_string())
    }

    fn status_line(&self, score: u32) -> String {
        format!("🔥 Challenge level {} | Score: {score}", self.level)
    }

    fn on_correct(&mut self) {
        self.level += 1;
    }

    fn on_incorrect(&mut self) -> Flow {
        Flow::Stop
    }
}

/// Enum wrapper over the four policies
///
/// Allows runtime mode selection while keeping static dispatch inside.
pub enum ModeKind {
    Classic(ClassicPolicy),
    TimeAttack(TimeAttackPolicy),
    Survival(SurvivalPolicy),
    Challenge(ChallengePolicy),
}

impl ModeKind {
    /// Build the policy for a selected mode and tier
    ///
    /// Only Classic draws from the tier's own list; the other modes take
    /// the full vocabulary.
    #[must_use]
    pub fn for_mode(mode: Mode, tier: Tier, catalog: &Catalog, time_attack: Duration) -> Self {
        match mode {
            Mode::Classic => Self::Classic(ClassicPolicy::new(tier, catalog)),
            Mode::TimeAttack => Self::TimeAttack(TimeAttackPolicy::new(time_attack)),
            Mode::Survival => Self::Survival(SurvivalPolicy::new()),
            Mode::Challenge => Self::Challenge(ChallengePolicy::new()),
        }
    }
}

impl RoundPolicy for ModeKind {
    fn next_word(&mut self, catalog: &Catalog) -> Option<String> {
        match self {
            Self::Classic(p) => p.next_word(catalog),
            Self::TimeAttack(p) => p.next_word(catalog),
            Self::Survival(p) => p.next_word(catalog),
            Self::Challenge(p) => p.next_word(catalog),
        }
    }

    fn status_line(&self, score: u32) -> String {
        match self {
            Self::Classic(p) => p.status_line(score),
            Self::TimeAttack(p) => p.status_line(score),
            Self::Survival(p) => p.status_line(score),
            Self::Challenge(p) => p.status_line(score),
        }
    }

    fn expired_after_read(&self) -> bool {
        match self {
            Self::Classic(p) => p.expired_after_read(),
            Self::TimeAttack(p) => p.expired_after_read(),
            Self::Survival(p) => p.expired_after_read(),
            Self::Challenge(p) => p.expired_after_read(),
        }
    }

    fn on_correct(&mut self) {
        match self {
            Self::Classic(p) => p.on_correct(),
            Self::TimeAttack(p) => p.on_correct(),
            Self::Survival(p) => p.on_correct(),
            Self::Challenge(p) => p.on_correct(),
        }
    }

    fn on_incorrect(&mut self) -> Flow {
        match self {
            Self::Classic(p) => p.on_incorrect(),
            Self::TimeAttack(p) => p.on_incorrect(),
            Self::Survival(p) => p.on_incorrect(),
            Self::Challenge(p) => p.on_incorrect(),
        }
    }
}
