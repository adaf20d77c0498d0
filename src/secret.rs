use rand::{Rng, rngs::ThreadRng};

use crate::game::GameConfig;

#[derive(Debug)]
pub struct Secret {
    value: i32,
}

impl Secret {
    pub fn draw(rng: &mut ThreadRng, config: &GameConfig) -> Self {
        let value = rng.random_range(config.min..=config.max);
        Self { value }
    }

    pub fn new(value: i32) -> Self {
        Self { value }
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}
