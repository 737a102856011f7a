use std::collections::{HashSet, VecDeque};

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info, warn};

use super::{
    agent::{Agent, Collision},
    config::GameConfig,
    direction::Direction,
    error::GameError,
    grid::{Grid, Position},
    target::place_target,
};

/// Coarse state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether the agent consumed the target this tick
    pub consumed_target: bool,
    /// Set when this tick ended the game
    pub collision: Option<Collision>,
}

/// One game: an agent, its target, the score and the phase
///
/// Owns its RNG so target placement is reproducible from the config seed.
#[derive(Debug)]
pub struct Session {
    grid: Grid,
    score_per_target: u32,
    agent: Agent,
    target: Position,
    score: u32,
    ticks: u64,
    phase: Phase,
    rng: StdRng,
}

impl Session {
    /// Start a new game from a validated configuration
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        let grid = config.grid();
        let agent = Agent::new(grid.center(), Direction::Right);
        let mut session = Self::build(config, agent, grid.center())?;
        session.target = session.next_target()?;

        info!(
            width = grid.width(),
            height = grid.height(),
            target_x = session.target.x,
            target_y = session.target.y,
            "Session started"
        );
        Ok(session)
    }

    /// Start from an explicit agent and target, for scripted scenarios
    ///
    /// Every segment must lie on the grid without repeats, and the target
    /// must be a free grid cell.
    pub fn with_state(
        config: &GameConfig,
        agent: Agent,
        target: Position,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let grid = config.grid();
        let mut seen = HashSet::with_capacity(agent.len());
        for &segment in agent.body() {
            if !grid.in_bounds(segment) {
                return Err(GameError::InvalidState(format!(
                    "segment ({}, {}) is outside the grid",
                    segment.x, segment.y
                )));
            }
            if !seen.insert(segment) {
                return Err(GameError::InvalidState(format!(
                    "segment ({}, {}) appears twice",
                    segment.x, segment.y
                )));
            }
        }
        if !grid.in_bounds(target) || seen.contains(&target) {
            return Err(GameError::InvalidState(format!(
                "target ({}, {}) is not a free cell",
                target.x, target.y
            )));
        }

        let session = Self::build(config, agent, target)?;
        debug!(
            length = session.agent.len(),
            target_x = target.x,
            target_y = target.y,
            "Session started from scripted state"
        );
        Ok(session)
    }

    fn build(config: &GameConfig, agent: Agent, target: Position) -> Result<Self, GameError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            grid: config.grid(),
            score_per_target: config.score_per_target,
            agent,
            target,
            score: 0,
            ticks: 0,
            phase: Phase::Playing,
            rng,
        })
    }

    /// Advance the simulation by one step
    ///
    /// Fails with [`GameError::GameOver`] once the game has ended; the
    /// driver should gate on [`Session::phase`].
    pub fn tick(&mut self) -> Result<TickOutcome, GameError> {
        if self.phase == Phase::GameOver {
            return Err(GameError::GameOver);
        }
        self.ticks += 1;

        let new_head = self.agent.advance();
        let consumed_target = new_head == self.target;

        if consumed_target {
            self.score = self.score.saturating_add(self.score_per_target);
            debug!(score = self.score, length = self.agent.len(), "Target consumed");
            match self.next_target() {
                Ok(target) => self.target = target,
                Err(err) => {
                    warn!(score = self.score, %err, "Grid exhausted, ending session");
                    self.phase = Phase::GameOver;
                    return Err(err);
                }
            }
        } else {
            self.agent.shrink();
        }

        let collision = self.agent.check_collision(&self.grid);
        if let Some(kind) = collision {
            self.phase = Phase::GameOver;
            info!(
                score = self.score,
                length = self.agent.len(),
                ticks = self.ticks,
                collision = ?kind,
                "Game over"
            );
        }

        Ok(TickOutcome {
            consumed_target,
            collision,
        })
    }

    /// Reset agent, target, score and phase to a fresh game
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.agent = Agent::new(self.grid.center(), Direction::Right);
        self.score = 0;
        self.ticks = 0;
        self.phase = Phase::Playing;
        self.target = self.next_target()?;
        info!(
            target_x = self.target.x,
            target_y = self.target.y,
            "Session restarted"
        );
        Ok(())
    }

    /// Queue a turn for the next tick; reversals are dropped by the agent
    pub fn request_direction(&mut self, direction: Direction) {
        self.agent.request_direction_change(direction);
    }

    pub fn agent_body(&self) -> &VecDeque<Position> {
        self.agent.body()
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// Current target cell
    ///
    /// After a tick fails with [`GameError::GridExhausted`] this is stale: it
    /// still names the cell the head just moved onto.
    pub fn target(&self) -> Position {
        self.target
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Ticks applied since the current game started
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    fn next_target(&mut self) -> Result<Position, GameError> {
        let occupied: HashSet<Position> = self.agent.body().iter().copied().collect();
        place_target(&occupied, &self.grid, &mut self.rng)
    }
}
