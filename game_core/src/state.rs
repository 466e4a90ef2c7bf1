use crate::components::{Cell, Direction, Snake};
use crate::config::Config;
use crate::error::ConfigError;
use crate::resources::{GameRng, Score};
use crate::systems::place_food;

/// The mutable snapshot the tick rule works on
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    pub direction: Direction,
    pub score: Score,
    pub running: bool,
    pub paused: bool,
}

impl GameState {
    /// Fresh board: one segment on the start cell, standing still, food placed
    pub fn new(config: &Config, rng: &mut GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let snake = Snake::new(config.start_cell);
        let food = place_food(&snake, config, rng).ok_or(ConfigError::NoRoomForFood {
            tile_count: config.tile_count,
        })?;
        Ok(Self {
            snake,
            food,
            direction: Direction::Still,
            score: Score::new(),
            running: false,
            paused: false,
        })
    }

    /// Put snake, direction, score and food back to their starting values.
    /// Running/paused flags are left to the caller. On error nothing changes.
    pub fn reinitialize(&mut self, config: &Config, rng: &mut GameRng) -> Result<(), ConfigError> {
        let fresh = Self::new(config, rng)?;
        self.snake = fresh.snake;
        self.food = fresh.food;
        self.direction = fresh.direction;
        self.score = fresh.score;
        Ok(())
    }

    /// Ticks and key presses only apply while this is true
    pub fn is_active(&self) -> bool {
        self.running && !self.paused
    }
}
