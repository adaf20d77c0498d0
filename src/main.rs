mod game;
mod guess;
mod output;
mod secret;

use std::fs;
use std::io;

use anyhow::Result;
use log::{info, warn};

use crate::game::{Game, GameConfig};
use crate::output::{Console, Palette};
use crate::secret::Secret;

const CONFIG_PATH: &str = "guess-the-number.json";

fn load_config() -> GameConfig {
    let config = match fs::read_to_string(CONFIG_PATH) {
        Ok(raw) => match serde_json::from_str::<GameConfig>(&raw) {
            Ok(config) => {
                info!("Loaded game settings from `{CONFIG_PATH}`");
                config
            }
            Err(err) => {
                warn!("Ignoring malformed `{CONFIG_PATH}`: {err}");
                GameConfig::default()
            }
        },
        Err(_) => GameConfig::default(),
    };
    if config.min > config.max || config.attempts == 0 {
        warn!("Ignoring unplayable settings {config:?}");
        return GameConfig::default();
    }
    config
}

fn main() -> Result<()> {
    env_logger::init();

    let config = load_config();
    let mut rng = rand::rng();
    let secret = Secret::draw(&mut rng, &config);

    let console = Console::new(io::stdout(), Palette::detect());
    let stdin = io::stdin();
    let mut game = Game::new(config, secret, stdin.lock(), console);
    game.run()?;
    Ok(())
}
