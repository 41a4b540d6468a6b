use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::defaults::*;
use crate::error::ConfigError;
use super::types::WallCollisionMode;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub grid_size: usize,
    pub initial_speed_ms: u32,
    pub speed_increment_ms: u32,
    pub min_speed_ms: u32,
    pub score_per_food: u32,
    pub initial_snake_length: usize,
    pub wall_collision_mode: WallCollisionMode,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            initial_speed_ms: DEFAULT_INITIAL_SPEED_MS,
            speed_increment_ms: DEFAULT_SPEED_INCREMENT_MS,
            min_speed_ms: DEFAULT_MIN_SPEED_MS,
            score_per_food: DEFAULT_SCORE_PER_FOOD,
            initial_snake_length: DEFAULT_INITIAL_SNAKE_LENGTH,
            wall_collision_mode: DEFAULT_WALL_COLLISION_MODE,
        }
    }
}

impl EngineSettings {
    /// The head starts in the middle of the grid and the body trails left,
    /// so at most `grid_size / 2 + 1` segments fit.
    pub fn max_initial_snake_length(&self) -> usize {
        self.grid_size / 2 + 1
    }

    pub fn cell_count(&self) -> usize {
        self.grid_size.saturating_mul(self.grid_size)
    }
}

impl Validate for EngineSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall {
                grid_size: self.grid_size,
                min: MIN_GRID_SIZE,
            });
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge {
                grid_size: self.grid_size,
                max: MAX_GRID_SIZE,
            });
        }
        if self.min_speed_ms == 0 {
            return Err(ConfigError::ZeroMinSpeed);
        }
        if self.speed_increment_ms >= self.initial_speed_ms {
            return Err(ConfigError::SpeedIncrementTooLarge {
                increment_ms: self.speed_increment_ms,
                initial_speed_ms: self.initial_speed_ms,
            });
        }
        if self.min_speed_ms > self.initial_speed_ms {
            return Err(ConfigError::MinSpeedAboveInitial {
                min_speed_ms: self.min_speed_ms,
                initial_speed_ms: self.initial_speed_ms,
            });
        }
        if self.score_per_food == 0 {
            return Err(ConfigError::ZeroScorePerFood);
        }
        if self.score_per_food > MAX_SCORE_PER_FOOD {
            return Err(ConfigError::ScorePerFoodTooLarge {
                score_per_food: self.score_per_food,
                max: MAX_SCORE_PER_FOOD,
            });
        }
        let max_length = self.max_initial_snake_length();
        if self.initial_snake_length == 0 || self.initial_snake_length > max_length {
            return Err(ConfigError::InitialLengthOutOfRange {
                length: self.initial_snake_length,
                max: max_length,
            });
        }
        Ok(())
    }
}
