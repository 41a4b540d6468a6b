use super::snake::Snake;
use super::types::{Direction, EndReason, Point, Status};

/// Everything a renderer or persistence layer needs to know about the game
/// after an engine operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub snake: Snake,
    /// `None` only once the snake covers the whole grid.
    pub food: Option<Point>,
    /// Direction applied on the last tick.
    pub direction: Direction,
    /// Direction the next tick will apply.
    pub pending_direction: Direction,
    pub score: u32,
    pub high_score: u32,
    pub status: Status,
    pub speed_ms: u32,
    pub end_reason: Option<EndReason>,
    pub ticks: u64,
}

impl GameState {
    pub fn new(
        snake: Snake,
        food: Option<Point>,
        direction: Direction,
        high_score: u32,
        speed_ms: u32,
        status: Status,
    ) -> Self {
        Self {
            snake,
            food,
            direction,
            pending_direction: direction,
            score: 0,
            high_score,
            status,
            speed_ms,
            end_reason: None,
            ticks: 0,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.status == Status::GameOver
    }
}
