use crate::snake::WallCollisionMode;

pub const DEFAULT_GRID_SIZE: usize = 20;
pub const MIN_GRID_SIZE: usize = 2;
pub const MAX_GRID_SIZE: usize = 1000;

pub const DEFAULT_INITIAL_SPEED_MS: u32 = 150;
pub const DEFAULT_SPEED_INCREMENT_MS: u32 = 5;
pub const DEFAULT_MIN_SPEED_MS: u32 = 50;

/// Points awarded for every food cell eaten.
pub const DEFAULT_SCORE_PER_FOOD: u32 = 10;
pub const MAX_SCORE_PER_FOOD: u32 = 1_000_000;

pub const DEFAULT_INITIAL_SNAKE_LENGTH: usize = 1;
pub const DEFAULT_WALL_COLLISION_MODE: WallCollisionMode = WallCollisionMode::Death;

/// Random draws before food placement falls back to scanning free cells.
pub const FOOD_PLACEMENT_ATTEMPTS: usize = 100;
