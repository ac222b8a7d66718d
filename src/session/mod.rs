//! Interactive session controller
//!
//! Top-level menu loop: pick a mode and difficulty, play, record the result,
//! and show the ranking. Every menu is a closed numeric enumeration that
//! re-prompts on invalid input; the only way out is the quit entry.

use std::time::Duration;

use colored::Colorize;
use tracing::warn;

use crate::catalog::{Catalog, Tier};
use crate::console::Console;
use crate::modes::{Mode, ModeKind, run_mode};
use crate::scores::{ScoreRecord, ScoreStore};

/// Pause after an invalid menu selection
const INVALID_INPUT_PAUSE: Duration = Duration::from_secs(1);

/// How many records the ranking view shows
const RANKING_SIZE: usize = 10;

/// Outcome of the mode menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Play(Mode),
    Ranking,
    Quit,
}

fn parse_mode_choice(input: &str) -> Option<MenuChoice> {
    match input {
        "0" => Some(MenuChoice::Quit),
        "1" => Some(MenuChoice::Play(Mode::Classic)),
        "2" => Some(MenuChoice::Play(Mode::TimeAttack)),
        "3" => Some(MenuChoice::Play(Mode::Survival)),
        "4" => Some(MenuChoice::Play(Mode::Challenge)),
        "5" => Some(MenuChoice::Ranking),
        _ => None,
    }
}

fn parse_tier_choice(input: &str) -> Option<Tier> {
    match input {
        "1" => Some(Tier::Easy),
        "2" => Some(Tier::Medium),
        "3" => Some(Tier::Hard),
        "4" => Some(Tier::Extreme),
        _ => None,
    }
}

/// One player's interactive session
pub struct Session<'a> {
    catalog: &'a Catalog,
    console: Console,
    store: ScoreStore,
    time_attack: Duration,
}

impl<'a> Session<'a> {
    #[must_use]
    pub const fn new(
        catalog: &'a Catalog,
        console: Console,
        store: ScoreStore,
        time_attack: Duration,
    ) -> Self {
        Self {
            catalog,
            console,
            store,
            time_attack,
        }
    }

    /// Run the menu loop until the player quits
    pub fn run(&mut self) {
        loop {
            match self.mode_menu() {
                MenuChoice::Quit => {
                    self.console.clear_screen();
                    self.console.slow_print("👋 Thanks for playing. Goodbye!");
                    return;
                }
                MenuChoice::Ranking => self.show_ranking(),
                MenuChoice::Play(mode) => {
                    let tier = self.difficulty_menu();
                    let score = self.play(mode, tier);
                    self.record_result(mode, score);
                }
            }
        }
    }

    fn mode_menu(&self) -> MenuChoice {
        loop {
            self.console.banner();
            println!("🎮 Pick a game mode:\n");
            println!("[1] Classic");
            println!("[2] Time Attack");
            println!("[3] Survival");
            println!("[4] Challenge");
            println!("[5] Ranking");
            println!("[0] Quit\n");

            let input = self.console.read_line("👉 Choice: ");
            if let Some(choice) = parse_mode_choice(&input) {
                return choice;
            }
            println!("{}", "Invalid choice.".red());
            self.console.pause(INVALID_INPUT_PAUSE);
        }
    }

    /// Difficulty is asked for every mode, but only Classic's word draws are
    /// bounded by the chosen tier.
    fn difficulty_menu(&self) -> Tier {
        loop {
            self.console.banner();
            println!("Pick a difficulty:\n");
            for (i, tier) in Tier::ALL.iter().enumerate() {
                println!("[{}] {tier}", i + 1);
            }
            println!();

            let input = self.console.read_line("👉 Difficulty: ");
            if let Some(tier) = parse_tier_choice(&input) {
                return tier;
            }
            println!("{}", "Invalid choice, pick again.".red());
            self.console.pause(INVALID_INPUT_PAUSE);
        }
    }

    fn play(&mut self, mode: Mode, tier: Tier) -> u32 {
        let policy = ModeKind::for_mode(mode, tier, self.catalog, self.time_attack);
        run_mode(policy, self.catalog, &mut self.console)
    }

    fn record_result(&self, mode: Mode, score: u32) {
        self.console.banner();
        println!(
            "🎯 Final score: {}\n",
            score.to_string().bright_cyan().bold()
        );

        let name = self.console.read_line("Enter your name for the ranking: ");
        let name = if name.is_empty() {
            "Anonymous".to_string()
        } else {
            name
        };

        match self.store.append(ScoreRecord::new(name, mode.label(), score)) {
            Ok(()) => println!("{}", "✅ Score saved!".green()),
            Err(e) => {
                warn!("failed to save score to {}: {e}", self.store.path().display());
                println!("{}", "⚠️ Your score could not be saved.".yellow());
            }
        }

        self.console.wait_for_enter("\nPress Enter to continue...");
    }

    fn show_ranking(&self) {
        self.console.banner();

        let top = self.store.top_n(RANKING_SIZE);
        if top.is_empty() {
            println!("No scores recorded yet.");
        } else {
            println!("{}\n", "🏆 Top 10 🏆".bright_yellow().bold());
            for (i, record) in top.iter().enumerate() {
                println!(
                    "{:>2}. {} - {} - {} pts ({})",
                    i + 1,
                    record.name.bright_white().bold(),
                    record.mode,
                    record.score.to_string().bright_cyan(),
                    record.time.bright_black()
                );
            }
        }

        self.console.wait_for_enter("\nPress Enter to go back...");
    }
}
