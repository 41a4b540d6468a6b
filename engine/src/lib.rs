pub mod config;
pub mod defaults;
pub mod error;
pub mod high_score;
pub mod logger;
pub mod session_rng;
pub mod snake;

pub use error::ConfigError;
pub use high_score::{FileHighScoreStore, HighScoreRecord, HighScoreStore, MemoryHighScoreStore};
pub use session_rng::SessionRng;
pub use snake::{
    Direction, EndReason, EngineSettings, GameState, Point, Snake, SnakeEngine, Status,
    TickOutcome, WallCollisionMode,
};
