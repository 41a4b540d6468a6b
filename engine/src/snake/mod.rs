mod engine;
mod game_state;
mod settings;
mod snake;
mod types;

pub use engine::{SnakeEngine, TickOutcome};
pub use game_state::GameState;
pub use settings::EngineSettings;
pub use snake::Snake;
pub use types::{Direction, EndReason, Point, Status, WallCollisionMode};
