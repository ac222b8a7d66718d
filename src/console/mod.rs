//! Terminal presentation layer
//!
//! Owns all stdout interaction: screen clearing, banners, prompts, pacing
//! pauses, and the optional spoken word. Also bridges the terminal to the
//! game-loop driver by implementing [`crate::modes::Surface`].

mod speech;

pub use speech::Narrator;

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use crossterm::{event, execute};

use crate::modes::Surface;

/// Pause between the round header and the word reveal
const HEADER_DELAY: Duration = Duration::from_secs(1);
/// How long the word stays on screen before it is cleared
const REVEAL_DELAY: Duration = Duration::from_secs(2);
/// Pause after the correct/wrong verdict
const VERDICT_DELAY: Duration = Duration::from_secs(1);
/// Per-character delay for [`Console::slow_print`]
const SLOW_PRINT_DELAY: Duration = Duration::from_millis(30);

/// Terminal front end with an injected speech capability
pub struct Console {
    narrator: Narrator,
}

impl Console {
    #[must_use]
    pub const fn new(narrator: Narrator) -> Self {
        Self { narrator }
    }

    /// Clear the screen and move the cursor home, best effort
    pub fn clear_screen(&self) {
        let _ = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
    }

    /// Clear the screen and print the game banner
    pub fn banner(&self) {
        self.clear_screen();
        let rule = "🐝================================================🐝";
        println!("{}", rule.bright_yellow());
        println!("{}", "         ✨ Ultimate Spelling Bee ✨".bold());
        println!("{}\n", rule.bright_yellow());
    }

    /// Print a prompt and read one line from stdin
    ///
    /// Returns the trimmed line. End-of-input and read errors come back as
    /// an empty string so callers always receive a usable value.
    #[must_use]
    pub fn read_line(&self, prompt: &str) -> String {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(_) => line.trim().to_string(),
            Err(_) => String::new(),
        }
    }

    /// Block until the player presses Enter
    pub fn wait_for_enter(&self, prompt: &str) {
        let _ = self.read_line(prompt);
    }

    /// Sleep for a pacing pause
    pub fn pause(&self, duration: Duration) {
        thread::sleep(duration);
    }

    /// Print a line one character at a time
    pub fn slow_print(&self, text: &str) {
        for ch in text.chars() {
            print!("{ch}");
            let _ = io::stdout().flush();
            thread::sleep(SLOW_PRINT_DELAY);
        }
        println!();
    }

    /// Drop any input typed ahead of the next prompt, best effort
    ///
    /// Stray keystrokes from a previous screen must not be consumed as the
    /// answer. Hosts without an event source simply skip this.
    pub fn discard_pending_input(&self) {
        while let Ok(true) = event::poll(Duration::ZERO) {
            if event::read().is_err() {
                break;
            }
        }
    }

    /// Speak a word through the narrator, best effort
    pub fn speak(&self, word: &str) {
        self.narrator.speak(word);
    }
}

/// The real terminal surface for game rounds: header, timed reveal, spoken
/// word, cleared screen, prompt, verdict.
impl Surface for Console {
    fn present_word(&mut self, header: &str, word: &str) {
        self.clear_screen();
        println!("{header}\n");
        self.pause(HEADER_DELAY);
        println!("Here comes the word... get ready!");
        self.pause(HEADER_DELAY);
        println!("{}", word.bright_yellow().bold());
        self.speak(word);
        self.pause(REVEAL_DELAY);
        self.clear_screen();
    }

    fn prompt_answer(&mut self) -> String {
        self.discard_pending_input();
        self.read_line("👉 Spell the word: ")
    }

    fn verdict(&mut self, correct: bool, word: &str) {
        if correct {
            println!("{}", "✅ Correct!".green().bold());
        } else {
            println!(
                "{} The answer was: {}",
                "❌ Wrong!".red().bold(),
                word.bright_yellow()
            );
        }
        self.pause(VERDICT_DELAY);
    }
}
