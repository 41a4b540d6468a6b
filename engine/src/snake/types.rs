use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// One grid step in `direction`, or `None` when that step leaves a
    /// `grid_size` square grid.
    pub fn step(&self, direction: Direction, grid_size: usize) -> Option<Point> {
        match direction {
            Direction::Up => self.y.checked_sub(1).map(|y| Point::new(self.x, y)),
            Direction::Down => (self.y + 1 < grid_size).then(|| Point::new(self.x, self.y + 1)),
            Direction::Left => self.x.checked_sub(1).map(|x| Point::new(x, self.y)),
            Direction::Right => (self.x + 1 < grid_size).then(|| Point::new(self.x + 1, self.y)),
        }
    }

    /// One grid step in `direction`, re-entering from the opposite edge.
    pub fn step_wrapping(&self, direction: Direction, grid_size: usize) -> Point {
        match direction {
            Direction::Up => Point::new(self.x, wrapping_dec(self.y, grid_size)),
            Direction::Down => Point::new(self.x, wrapping_inc(self.y, grid_size)),
            Direction::Left => Point::new(wrapping_dec(self.x, grid_size), self.y),
            Direction::Right => Point::new(wrapping_inc(self.x, grid_size), self.y),
        }
    }
}

fn wrapping_inc(value: usize, max: usize) -> usize {
    if value + 1 >= max { 0 } else { value + 1 }
}

fn wrapping_dec(value: usize, max: usize) -> usize {
    if value == 0 { max - 1 } else { value - 1 }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallCollisionMode {
    Death,
    WrapAround,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Idle,
    Playing,
    Paused,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    WallCollision,
    SelfCollision,
    /// The snake covers every cell, leaving nowhere to place food.
    BoardFilled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(&Direction::Down));
        assert!(Direction::Down.is_opposite(&Direction::Up));
        assert!(Direction::Left.is_opposite(&Direction::Right));
        assert!(Direction::Right.is_opposite(&Direction::Left));

        assert!(!Direction::Up.is_opposite(&Direction::Up));
        assert!(!Direction::Up.is_opposite(&Direction::Left));
        assert!(!Direction::Right.is_opposite(&Direction::Down));
    }

    #[test]
    fn test_step_inside_grid() {
        let p = Point::new(5, 5);
        assert_eq!(p.step(Direction::Up, 10), Some(Point::new(5, 4)));
        assert_eq!(p.step(Direction::Down, 10), Some(Point::new(5, 6)));
        assert_eq!(p.step(Direction::Left, 10), Some(Point::new(4, 5)));
        assert_eq!(p.step(Direction::Right, 10), Some(Point::new(6, 5)));
    }

    #[test]
    fn test_step_off_every_edge() {
        assert_eq!(Point::new(0, 3).step(Direction::Left, 4), None);
        assert_eq!(Point::new(3, 3).step(Direction::Right, 4), None);
        assert_eq!(Point::new(2, 0).step(Direction::Up, 4), None);
        assert_eq!(Point::new(2, 3).step(Direction::Down, 4), None);
    }

    #[test]
    fn test_step_wrapping_reenters_opposite_edge() {
        assert_eq!(Point::new(0, 3).step_wrapping(Direction::Left, 4), Point::new(3, 3));
        assert_eq!(Point::new(3, 3).step_wrapping(Direction::Right, 4), Point::new(0, 3));
        assert_eq!(Point::new(2, 0).step_wrapping(Direction::Up, 4), Point::new(2, 3));
        assert_eq!(Point::new(2, 3).step_wrapping(Direction::Down, 4), Point::new(2, 0));
        assert_eq!(Point::new(1, 1).step_wrapping(Direction::Right, 4), Point::new(2, 1));
    }
}
