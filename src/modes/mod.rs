//! Game mode engine
//!
//! Four play policies (Classic, Time Attack, Survival, Challenge) over one
//! shared round loop.

mod engine;
mod policy;

pub use engine::{Surface, run_mode};
pub use policy::{
    CHALLENGE_START_LEVEL, ChallengePolicy, ClassicPolicy, DEFAULT_TIME_ATTACK, Flow, Mode,
    ModeKind, RoundPolicy, SURVIVAL_LIVES, SurvivalPolicy, TimeAttackPolicy,
};
