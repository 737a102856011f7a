use std::collections::VecDeque;

use super::{
    direction::Direction,
    grid::{Grid, Position},
};

/// Why the agent's run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Head left the grid
    Wall,
    /// Head landed on another body segment
    SelfCollision,
}

/// The player-controlled snake
///
/// The body is ordered head first, tail last and is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    body: VecDeque<Position>,
    current_direction: Direction,
    pending_direction: Direction,
}

impl Agent {
    /// A single-cell agent at `head` moving in `direction`
    pub fn new(head: Position, direction: Direction) -> Self {
        Self {
            body: VecDeque::from([head]),
            current_direction: direction,
            pending_direction: direction,
        }
    }

    /// Build an agent from explicit segments, head first
    ///
    /// Returns `None` for an empty body.
    pub fn from_body<I>(segments: I, direction: Direction) -> Option<Self>
    where
        I: IntoIterator<Item = Position>,
    {
        let body: VecDeque<Position> = segments.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Self {
            body,
            current_direction: direction,
            pending_direction: direction,
        })
    }

    pub fn head(&self) -> Position {
        // body is non-empty by construction and `shrink` never removes the last cell
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub fn current_direction(&self) -> Direction {
        self.current_direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true for a live agent
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Queue a turn for the next `advance`
    ///
    /// A turn straight back onto the current heading is ignored.
    pub fn request_direction_change(&mut self, direction: Direction) {
        if !self.current_direction.is_opposite(direction) {
            self.pending_direction = direction;
        }
    }

    /// Push a new head one cell along the pending direction and return it
    ///
    /// The body always grows by one here; callers drop the tail with
    /// [`Agent::shrink`] unless the growth is kept.
    pub fn advance(&mut self) -> Position {
        self.current_direction = self.pending_direction;
        let new_head = self.head().moved_in_direction(self.current_direction);
        self.body.push_front(new_head);
        new_head
    }

    /// Remove the tail segment, keeping at least the head
    pub fn shrink(&mut self) {
        if self.body.len() > 1 {
            self.body.pop_back();
        }
    }

    /// Wall or self collision at the current head, if any
    pub fn check_collision(&self, grid: &Grid) -> Option<Collision> {
        let head = self.head();
        if !grid.in_bounds(head) {
            return Some(Collision::Wall);
        }
        if self.body.iter().skip(1).any(|&segment| segment == head) {
            return Some(Collision::SelfCollision);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_of(agent: &Agent) -> Vec<Position> {
        agent.body().iter().copied().collect()
    }

    #[test]
    fn test_agent_creation() {
        let agent = Agent::new(Position::new(5, 5), Direction::Right);
        assert_eq!(agent.len(), 1);
        assert_eq!(agent.head(), Position::new(5, 5));
        assert_eq!(agent.current_direction(), Direction::Right);
        assert_eq!(agent.pending_direction(), Direction::Right);
    }

    #[test]
    fn test_from_body_rejects_empty() {
        assert!(Agent::from_body(Vec::<Position>::new(), Direction::Up).is_none());
    }

    #[test]
    fn test_advance_grows_and_shrink_restores() {
        let mut agent = Agent::from_body(
            [Position::new(5, 5), Position::new(4, 5)],
            Direction::Right,
        )
        .unwrap();

        let head = agent.advance();
        assert_eq!(head, Position::new(6, 5));
        assert_eq!(agent.len(), 3);

        agent.shrink();
        assert_eq!(
            body_of(&agent),
            vec![Position::new(6, 5), Position::new(5, 5)]
        );
    }

    #[test]
    fn test_shrink_keeps_head() {
        let mut agent = Agent::new(Position::new(1, 1), Direction::Up);
        agent.shrink();
        assert_eq!(agent.len(), 1);
        assert_eq!(agent.head(), Position::new(1, 1));
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut agent = Agent::new(Position::new(5, 5), Direction::Right);
        agent.request_direction_change(Direction::Left);
        assert_eq!(agent.pending_direction(), Direction::Right);

        agent.request_direction_change(Direction::Up);
        assert_eq!(agent.pending_direction(), Direction::Up);
        agent.request_direction_change(Direction::Up);
        assert_eq!(agent.pending_direction(), Direction::Up);
    }

    #[test]
    fn test_reversal_checked_against_applied_direction() {
        // Up then Left between two ticks: Left is checked against Right, the
        // heading actually applied last tick, so it is dropped.
        let mut agent = Agent::new(Position::new(5, 5), Direction::Right);
        agent.request_direction_change(Direction::Up);
        agent.request_direction_change(Direction::Left);
        assert_eq!(agent.pending_direction(), Direction::Up);

        agent.advance();
        assert_eq!(agent.current_direction(), Direction::Up);
        assert_eq!(agent.head(), Position::new(5, 4));
    }

    #[test]
    fn test_wall_collision() {
        let grid = Grid::new(10, 10);
        let mut agent = Agent::new(Position::new(0, 3), Direction::Left);
        agent.advance();
        agent.shrink();
        assert_eq!(agent.head(), Position::new(-1, 3));
        assert_eq!(agent.check_collision(&grid), Some(Collision::Wall));
    }

    #[test]
    fn test_self_collision() {
        let grid = Grid::new(10, 10);
        let agent = Agent::from_body(
            [
                Position::new(2, 2),
                Position::new(3, 2),
                Position::new(3, 3),
                Position::new(2, 3),
                Position::new(2, 2),
            ],
            Direction::Up,
        )
        .unwrap();
        assert_eq!(
            agent.check_collision(&grid),
            Some(Collision::SelfCollision)
        );
    }

    #[test]
    fn test_no_collision_in_open_space() {
        let grid = Grid::new(10, 10);
        let agent = Agent::from_body(
            [Position::new(5, 5), Position::new(4, 5), Position::new(3, 5)],
            Direction::Right,
        )
        .unwrap();
        assert_eq!(agent.check_collision(&grid), None);
    }
}
