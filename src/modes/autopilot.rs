//! Greedy steering used when no player is at the keyboard

use crate::game::{Direction, Position, Session};

/// Pick the turn that brings the head closest to the target without an
/// immediate collision
///
/// Falls back to the current heading when every move is fatal.
pub fn next_direction(session: &Session) -> Direction {
    let agent = session.agent();
    let current = agent.current_direction();
    let target = session.target();

    Direction::ALL
        .into_iter()
        .filter(|&dir| !current.is_opposite(dir))
        .map(|dir| (dir, agent.head().moved_in_direction(dir)))
        .filter(|&(_, next)| is_safe(session, next))
        .min_by_key(|&(dir, next)| (manhattan(next, target), dir != current))
        .map(|(dir, _)| dir)
        .unwrap_or(current)
}

fn is_safe(session: &Session, next: Position) -> bool {
    if !session.grid().in_bounds(next) {
        return false;
    }
    let body = session.agent_body();
    // The tail moves out of the way unless this move eats the target
    let blocking = if next == session.target() {
        body.len()
    } else {
        body.len().saturating_sub(1)
    };
    !body.iter().take(blocking).any(|&segment| segment == next)
}

fn manhattan(a: Position, b: Position) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
