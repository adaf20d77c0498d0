use std::io::{BufRead, Write};

use anyhow::{Result, bail};
use log::{info, warn};
use serde::Deserialize;

use crate::{
    guess::{Guess, Hint},
    output::Console,
    secret::Secret,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub min: i32,
    pub max: i32,
    pub attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min: 1,
            max: 100,
            attempts: 7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

pub struct Game<R, W> {
    config: GameConfig,
    secret: Secret,
    attempts_left: u32,
    outcome: Outcome,
    input: R,
    console: Console<W>,
}

impl<R: BufRead, W: Write> Game<R, W> {
    pub fn new(config: GameConfig, secret: Secret, input: R, console: Console<W>) -> Self {
        let attempts_left = config.attempts;
        Self {
            config,
            secret,
            attempts_left,
            outcome: Outcome::InProgress,
            input,
            console,
        }
    }

    pub fn run(&mut self) -> Result<Outcome> {
        self.console.banner(&self.config)?;

        while self.attempts_left > 0 && self.outcome == Outcome::InProgress {
            self.console.attempts_left(self.attempts_left)?;
            self.console.prompt()?;
            let line = self.read_line()?;

            let guess = match Guess::parse(&line) {
                Ok(guess) => guess,
                Err(err) => {
                    warn!("Rejected guess `{}`: {err}", line.trim());
                    self.console.invalid_guess()?;
                    // A failed parse costs nothing, the attempt stays.
                    continue;
                }
            };

            match guess.classify(&self.secret) {
                Hint::Correct => {
                    self.console.win(&self.secret)?;
                    self.outcome = Outcome::Won;
                }
                hint => {
                    self.console.hint(hint)?;
                    self.attempts_left -= 1;
                }
            }
        }

        if self.outcome == Outcome::InProgress {
            self.outcome = Outcome::Lost;
            self.console.defeat(&self.secret)?;
        }
        info!("Game over: {:?}", self.outcome);
        Ok(self.outcome)
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("standard input closed before the game ended");
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::output::Palette;

    fn played(secret: i32, lines: &str) -> (Outcome, u32, String) {
        let console = Console::new(Vec::new(), Palette::Plain);
        let mut game = Game::new(
            GameConfig::default(),
            Secret::new(secret),
            Cursor::new(lines.to_string()),
            console,
        );
        let outcome = game.run().unwrap();
        let attempts_left = game.attempts_left;
        let output = String::from_utf8(game.console.into_inner()).unwrap();
        (outcome, attempts_left, output)
    }

    #[test]
    fn finding_the_secret_wins_and_reveals_it() {
        let (outcome, _, output) = played(50, "30\n60\n50\n");
        assert_eq!(outcome, Outcome::Won);
        assert!(output.contains("You got it! The answer was 50"));
    }

    #[test]
    fn invalid_input_then_bracketing_guesses() {
        let (outcome, attempts_left, output) = played(50, "abc\n25\n75\n50\n");
        assert_eq!(outcome, Outcome::Won);
        assert_eq!(attempts_left, 5);

        let tail: Vec<&str> = output.lines().filter(|line| !line.starts_with("You have")).collect();
        assert_eq!(
            tail,
            vec![
                "I'm thinking of a number between 1 and 100.",
                "Take a guess: Invalid input. Please enter an integer.",
                "Take a guess: Too low!",
                "Take a guess: Too high!",
                "Take a guess: You got it! The answer was 50",
            ]
        );
    }

    #[test]
    fn seven_misses_lose_and_reveal_the_secret() {
        let (outcome, attempts_left, output) = played(10, "1\n2\n3\n4\n5\n6\n7\n");
        assert_eq!(outcome, Outcome::Lost);
        assert_eq!(attempts_left, 0);
        assert!(output.contains("You ran out of guesses. The answer was 10"));
    }

    #[test]
    fn invalid_lines_never_consume_attempts() {
        // Four unparsable lines, then exactly as many misses as the budget.
        let config = GameConfig {
            attempts: 2,
            ..GameConfig::default()
        };
        let console = Console::new(Vec::new(), Palette::Plain);
        let mut game = Game::new(
            config,
            Secret::new(99),
            Cursor::new("x\n\none hundred\n12.5\n1\n2\n".to_string()),
            console,
        );
        assert_eq!(game.run().unwrap(), Outcome::Lost);
        assert_eq!(game.attempts_left, 0);

        let output = String::from_utf8(game.console.into_inner()).unwrap();
        let rejections = output
            .matches("Invalid input. Please enter an integer.")
            .count();
        assert_eq!(rejections, 4);
    }

    #[test]
    fn attempt_count_is_announced_each_round() {
        let (_, _, output) = played(10, "1\n2\n3\n4\n5\n6\n7\n");
        for left in (1..=7).rev() {
            assert!(output.contains(&format!("You have {left} guesses left.")));
        }
    }

    #[test]
    fn closed_input_is_an_error_not_a_loop() {
        let console = Console::new(Vec::new(), Palette::Plain);
        let mut game = Game::new(
            GameConfig::default(),
            Secret::new(50),
            Cursor::new("30\n".to_string()),
            console,
        );
        assert!(game.run().is_err());
    }

    #[test]
    fn config_json_fills_missing_fields_with_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"attempts": 3}"#).unwrap();
        assert_eq!(config.min, 1);
        assert_eq!(config.max, 100);
        assert_eq!(config.attempts, 3);
    }
}
