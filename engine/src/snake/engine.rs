use crate::config::Validate;
use crate::defaults::FOOD_PLACEMENT_ATTEMPTS;
use crate::error::ConfigError;
use crate::log;
use crate::session_rng::SessionRng;
use super::game_state::GameState;
use super::settings::EngineSettings;
use super::snake::Snake;
use super::types::{Direction, EndReason, Point, Status, WallCollisionMode};

const START_DIRECTION: Direction = Direction::Right;

/// Result of a single [`SnakeEngine::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The engine was not playing; nothing changed.
    Idle,
    Moved,
    Ate {
        score: u32,
        speed_ms: u32,
        new_high_score: bool,
    },
    /// The game just ended. `new_high_score` is set when `final_score` beat
    /// the best score known when this game began.
    GameOver {
        final_score: u32,
        reason: EndReason,
        new_high_score: bool,
    },
}

type HighScoreCallback = Box<dyn FnMut(u32) + Send>;

pub struct SnakeEngine {
    settings: EngineSettings,
    rng: SessionRng,
    state: GameState,
    best_before_game: u32,
    high_score_callback: Option<HighScoreCallback>,
}

impl SnakeEngine {
    pub fn new(
        settings: EngineSettings,
        mut rng: SessionRng,
        initial_high_score: u32,
    ) -> Result<Self, ConfigError> {
        settings.validate()?;

        let state = fresh_state(&settings, &mut rng, initial_high_score, Status::Idle);
        Ok(Self {
            settings,
            rng,
            state,
            best_before_game: initial_high_score,
            high_score_callback: None,
        })
    }

    /// Registers the hook that persists high scores. It fires every time a
    /// tick raises the high score.
    pub fn on_high_score(mut self, callback: impl FnMut(u32) + Send + 'static) -> Self {
        self.high_score_callback = Some(Box::new(callback));
        self
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn status(&self) -> Status {
        self.state.status
    }

    pub fn start(&mut self) {
        if self.state.status != Status::Idle {
            return;
        }
        self.new_game();
    }

    pub fn pause(&mut self) {
        if self.state.status == Status::Playing {
            self.state.status = Status::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state.status == Status::Paused {
            self.state.status = Status::Playing;
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.state.status {
            Status::Playing => self.pause(),
            Status::Paused => self.resume(),
            Status::Idle | Status::GameOver => {}
        }
    }

    /// Starts a new game from any status, keeping the high score.
    pub fn reset(&mut self) {
        self.new_game();
    }

    /// Buffers `direction` for the next tick. Returns whether it was accepted:
    /// only while playing, and never the reverse of the committed direction.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.state.status != Status::Playing || direction.is_opposite(&self.state.direction) {
            return false;
        }
        self.state.pending_direction = direction;
        true
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.state.status != Status::Playing {
            return TickOutcome::Idle;
        }

        self.state.direction = self.state.pending_direction;
        let head = self.state.snake.head();
        let grid_size = self.settings.grid_size;

        let next_head = match self.settings.wall_collision_mode {
            WallCollisionMode::Death => match head.step(self.state.direction, grid_size) {
                Some(next_head) => next_head,
                None => return self.end_game(EndReason::WallCollision),
            },
            WallCollisionMode::WrapAround => head.step_wrapping(self.state.direction, grid_size),
        };

        // The tail cell is free to enter: food never sits on the snake, so a
        // move onto the tail never grows and the tail leaves this tick.
        if self.state.snake.contains(&next_head) && next_head != self.state.snake.tail() {
            return self.end_game(EndReason::SelfCollision);
        }

        self.state.snake.push_head(next_head);
        self.state.ticks += 1;

        if self.state.food != Some(next_head) {
            self.state.snake.pop_tail();
            return TickOutcome::Moved;
        }

        self.state.score = self.state.score.saturating_add(self.settings.score_per_food);
        let new_high_score = self.state.score > self.state.high_score;
        if new_high_score {
            self.state.high_score = self.state.score;
            log!("New high score: {}", self.state.high_score);
            if let Some(callback) = self.high_score_callback.as_mut() {
                callback(self.state.high_score);
            }
        }
        self.state.speed_ms = self
            .state
            .speed_ms
            .saturating_sub(self.settings.speed_increment_ms)
            .max(self.settings.min_speed_ms);

        log!(
            "Ate food at ({}, {}). Score: {}, speed: {}ms",
            next_head.x,
            next_head.y,
            self.state.score,
            self.state.speed_ms
        );

        self.state.food = place_food(&mut self.rng, &self.state.snake, &self.settings);
        if self.state.food.is_none() {
            return self.end_game(EndReason::BoardFilled);
        }

        TickOutcome::Ate {
            score: self.state.score,
            speed_ms: self.state.speed_ms,
            new_high_score,
        }
    }

    fn new_game(&mut self) {
        self.best_before_game = self.state.high_score;
        self.state = fresh_state(
            &self.settings,
            &mut self.rng,
            self.state.high_score,
            Status::Playing,
        );
        log!(
            "New game on a {}x{} grid (seed {})",
            self.settings.grid_size,
            self.settings.grid_size,
            self.rng.seed()
        );
    }

    fn end_game(&mut self, reason: EndReason) -> TickOutcome {
        self.state.status = Status::GameOver;
        self.state.end_reason = Some(reason);
        log!("Game over ({:?}). Final score: {}", reason, self.state.score);

        TickOutcome::GameOver {
            final_score: self.state.score,
            reason,
            new_high_score: self.state.score > self.best_before_game,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, food: Option<Point>) {
        self.state.food = food;
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, segments: &[Point], direction: Direction) {
        self.state.snake = Snake::from_segments(segments.iter().copied());
        self.state.direction = direction;
        self.state.pending_direction = direction;
    }
}

fn fresh_state(
    settings: &EngineSettings,
    rng: &mut SessionRng,
    high_score: u32,
    status: Status,
) -> GameState {
    let center = settings.grid_size / 2;
    let snake = Snake::new(
        Point::new(center, center),
        START_DIRECTION,
        settings.initial_snake_length,
    );
    let food = place_food(rng, &snake, settings);

    GameState::new(
        snake,
        food,
        START_DIRECTION,
        high_score,
        settings.initial_speed_ms,
        status,
    )
}

/// Rejection-samples a free cell, then falls back to a uniform pick among
/// the remaining free cells. `None` only when the snake fills the grid.
fn place_food(rng: &mut SessionRng, snake: &Snake, settings: &EngineSettings) -> Option<Point> {
    let grid_size = settings.grid_size;
    if snake.len() >= settings.cell_count() {
        return None;
    }

    for _ in 0..FOOD_PLACEMENT_ATTEMPTS {
        let cell = random_cell(rng, grid_size);
        if !snake.contains(&cell) {
            return Some(cell);
        }
    }

    let free_cells: Vec<Point> = (0..grid_size)
        .flat_map(|y| (0..grid_size).map(move |x| Point::new(x, y)))
        .filter(|cell| !snake.contains(cell))
        .collect();

    if free_cells.is_empty() {
        return None;
    }
    Some(free_cells[rng.random_range(0..free_cells.len())])
}

fn random_cell(rng: &mut SessionRng, grid_size: usize) -> Point {
    Point::new(rng.random_range(0..grid_size), rng.random_range(0..grid_size))
}
