use std::cmp::Ordering;
use std::num::ParseIntError;

use crate::secret::Secret;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess {
    value: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    TooLow,
    TooHigh,
    Correct,
}

impl Guess {
    pub fn parse(line: &str) -> Result<Self, ParseIntError> {
        let value = line.trim().parse()?;
        Ok(Self { value })
    }

    pub fn classify(&self, secret: &Secret) -> Hint {
        match self.value.cmp(&secret.value()) {
            Ordering::Less => Hint::TooLow,
            Ordering::Greater => Hint::TooHigh,
            Ordering::Equal => Hint::Correct,
        }
    }
}
