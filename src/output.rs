use std::io::{self, Write};

use colored::Colorize;
use colored::control::SHOULD_COLORIZE;

use crate::game::GameConfig;
use crate::guess::Hint;
use crate::secret::Secret;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Colored,
    Plain,
}

impl Palette {
    pub fn detect() -> Self {
        if SHOULD_COLORIZE.should_colorize() {
            Palette::Colored
        } else {
            Palette::Plain
        }
    }
}

enum Tint {
    Cyan,
    Yellow,
    Blue,
    Green,
    Red,
}

pub struct Console<W> {
    out: W,
    palette: Palette,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, palette: Palette) -> Self {
        Self { out, palette }
    }

    pub fn banner(&mut self, config: &GameConfig) -> io::Result<()> {
        if self.palette == Palette::Plain {
            // One-time notice, the game itself carries on uncolored.
            writeln!(
                self.out,
                "Terminal colors are unavailable; continuing in plain text."
            )?;
        }
        let line = format!(
            "I'm thinking of a number between {} and {}.",
            config.min, config.max
        );
        self.say(line, Tint::Cyan)
    }

    pub fn attempts_left(&mut self, attempts_left: u32) -> io::Result<()> {
        self.say(
            format!("You have {attempts_left} guesses left."),
            Tint::Yellow,
        )
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "Take a guess: ")?;
        self.out.flush()
    }

    pub fn hint(&mut self, hint: Hint) -> io::Result<()> {
        let line = match hint {
            Hint::TooLow => "Too low!",
            Hint::TooHigh => "Too high!",
            Hint::Correct => unreachable!("a correct guess ends the game"),
        };
        self.say(line.to_string(), Tint::Blue)
    }

    pub fn invalid_guess(&mut self) -> io::Result<()> {
        self.say(
            "Invalid input. Please enter an integer.".to_string(),
            Tint::Red,
        )
    }

    pub fn win(&mut self, secret: &Secret) -> io::Result<()> {
        self.say(
            format!("You got it! The answer was {}", secret.value()),
            Tint::Green,
        )
    }

    pub fn defeat(&mut self, secret: &Secret) -> io::Result<()> {
        self.say(
            format!("You ran out of guesses. The answer was {}", secret.value()),
            Tint::Red,
        )
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn say(&mut self, line: String, tint: Tint) -> io::Result<()> {
        let line = match self.palette {
            Palette::Plain => line,
            Palette::Colored => match tint {
                Tint::Cyan => line.as_str().cyan().to_string(),
                Tint::Yellow => line.as_str().yellow().to_string(),
                Tint::Blue => line.as_str().blue().to_string(),
                Tint::Green => line.as_str().green().to_string(),
                Tint::Red => line.as_str().red().to_string(),
            },
        };
        writeln!(self.out, "{line}")
    }
}
