//! Spellbee
//!
//! A terminal spelling practice game: words of varying difficulty are shown
//! (and spoken, where the host can), answers are typed back, and results are
//! ranked in a persisted Top 10.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use spellbee::catalog::{Catalog, Tier};
//! use spellbee::console::{Console, Narrator};
//! use spellbee::modes::{ClassicPolicy, run_mode};
//!
//! let catalog = Catalog::embedded();
//! let mut console = Console::new(Narrator::detect());
//!
//! let policy = ClassicPolicy::new(Tier::Easy, &catalog);
//! let score = run_mode(policy, &catalog, &mut console);
//! println!("Final score: {score}");
//! ```

// Word catalog
pub mod catalog;

// Terminal presentation and speech
pub mod console;

// Game mode engine
pub mod modes;

// Score persistence and ranking
pub mod scores;

// Interactive session controller
pub mod session;
