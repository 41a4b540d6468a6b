use std::collections::{HashSet, VecDeque};

use super::types::{Direction, Point};

/// Snake body, head first. `body_set` mirrors `body` for constant-time
/// occupancy checks and must always hold exactly the same cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
}

impl Snake {
    /// Lays out `length` segments starting at `head` and trailing away from
    /// `direction`. The caller guarantees the trail stays on the grid.
    pub fn new(head: Point, direction: Direction, length: usize) -> Self {
        let mut body = VecDeque::with_capacity(length);
        let mut body_set = HashSet::with_capacity(length);

        let mut segment = head;
        for i in 0..length.max(1) {
            if i > 0 {
                segment = match direction.opposite() {
                    Direction::Up => Point::new(segment.x, segment.y - 1),
                    Direction::Down => Point::new(segment.x, segment.y + 1),
                    Direction::Left => Point::new(segment.x - 1, segment.y),
                    Direction::Right => Point::new(segment.x + 1, segment.y),
                };
            }
            body.push_back(segment);
            body_set.insert(segment);
        }

        Self { body, body_set }
    }

    pub fn from_segments(segments: impl IntoIterator<Item = Point>) -> Self {
        let body: VecDeque<Point> = segments.into_iter().collect();
        let body_set = body.iter().copied().collect();
        Self { body, body_set }
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn tail(&self) -> Point {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.body_set.contains(point)
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub(crate) fn push_head(&mut self, head: Point) {
        self.body.push_front(head);
        self.body_set.insert(head);
    }

    /// Drops the last segment. When the head has just moved onto the
    /// vacated tail cell, that cell stays occupied.
    pub(crate) fn pop_tail(&mut self) {
        if self.body.len() > 1
            && let Some(tail) = self.body.pop_back()
            && tail != self.head()
        {
            self.body_set.remove(&tail);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_segment_snake() {
        let snake = Snake::new(Point::new(10, 10), Direction::Right, 1);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), snake.tail());
        assert!(snake.contains(&Point::new(10, 10)));
    }

    #[test]
    fn test_body_trails_away_from_direction() {
        let snake = Snake::new(Point::new(10, 10), Direction::Right, 3);
        let segments: Vec<Point> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![Point::new(10, 10), Point::new(9, 10), Point::new(8, 10)]
        );

        let snake = Snake::new(Point::new(4, 4), Direction::Up, 2);
        assert_eq!(snake.tail(), Point::new(4, 5));
    }

    #[test]
    fn test_push_and_pop_keep_set_in_sync() {
        let mut snake = Snake::new(Point::new(5, 5), Direction::Right, 2);
        snake.push_head(Point::new(6, 5));
        snake.pop_tail();

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Point::new(6, 5));
        assert_eq!(snake.tail(), Point::new(5, 5));
        assert!(!snake.contains(&Point::new(4, 5)));
    }

    #[test]
    fn test_pop_never_empties_snake() {
        let mut snake = Snake::new(Point::new(1, 1), Direction::Left, 1);
        snake.pop_tail();
        assert_eq!(snake.len(), 1);
        assert!(!snake.is_empty());
    }

    #[test]
    fn test_head_on_vacated_tail_stays_occupied() {
        let mut snake = Snake::from_segments([
            Point::new(1, 1),
            Point::new(2, 1),
            Point::new(2, 2),
            Point::new(1, 2),
        ]);
        snake.push_head(Point::new(1, 2));
        snake.pop_tail();

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Point::new(1, 2));
        assert!(snake.contains(&Point::new(1, 2)));
    }
}
