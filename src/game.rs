use std::collections::{HashSet, VecDeque};

use log::{debug, info};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::error::GameError;
use crate::grid::{Cell, Direction, Grid};

/// Starting snake, head first, heading right.
pub const SPAWN: [Cell; 3] = [Cell::new(5, 10), Cell::new(4, 10), Cell::new(3, 10)];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rules {
    pub grid: Grid,
    pub score_per_food: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OverReason {
    HitWall,
    HitSelf,
    /// The snake covers every cell, nowhere is left for food.
    BoardFull,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Paused,
    Over(OverReason),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing happened because the game is not running.
    Idle,
    Moved,
    Ate,
    Over(OverReason),
}

pub struct Game<R: Rng = SmallRng> {
    rules: Rules,
    snake: VecDeque<Cell>,
    direction: Direction,
    next_direction: Direction,
    food: Option<Cell>,
    score: u32,
    phase: Phase,
    rng: R,
}

impl Game<SmallRng> {
    pub fn new(rules: Rules, seed: u64) -> Self {
        Self::with_rng(rules, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// A fresh, not yet started game in the spawn layout.
    pub fn with_rng(rules: Rules, rng: R) -> Self {
        let mut game = Self {
            rules,
            snake: VecDeque::new(),
            direction: Direction::Right,
            next_direction: Direction::Right,
            food: None,
            score: 0,
            phase: Phase::NotStarted,
            rng,
        };
        game.reset();
        game
    }

    /// A running game with a given snake (head first) and food cell.
    pub fn with_layout(
        rules: Rules,
        snake: Vec<Cell>,
        direction: Direction,
        food: Cell,
        rng: R,
    ) -> Result<Self, GameError> {
        let Some(&head) = snake.first() else {
            return Err(GameError::EmptySnake);
        };
        let mut seen = HashSet::with_capacity(snake.len());
        let mut prev = head;
        for (i, &c) in snake.iter().enumerate() {
            if !rules.grid.contains(c) {
                return Err(GameError::OutOfBounds(c));
            }
            if !seen.insert(c) {
                return Err(GameError::Repeated(c));
            }
            if i > 0 && !prev.is_adjacent(c) {
                return Err(GameError::Disconnected(prev, c));
            }
            prev = c;
        }
        if !rules.grid.contains(food) || seen.contains(&food) {
            return Err(GameError::BadFood(food));
        }
        Ok(Self {
            rules,
            snake: snake.into(),
            direction,
            next_direction: direction,
            food: Some(food),
            score: 0,
            phase: Phase::Running,
            rng,
        })
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn snake(&self) -> &VecDeque<Cell> {
        &self.snake
    }

    pub fn head(&self) -> Cell {
        // never empty: every constructor seeds at least one segment
        self.snake[0]
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn next_direction(&self) -> Direction {
        self.next_direction
    }

    /// Running or paused: a start request is ignored and pause may toggle.
    pub fn in_progress(&self) -> bool {
        matches!(self.phase, Phase::Running | Phase::Paused)
    }

    /// Back to the spawn layout with a fresh food cell, not started.
    pub fn reset(&mut self) {
        self.snake = SPAWN.into_iter().collect();
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.score = 0;
        self.phase = Phase::NotStarted;
        self.place_food();
    }

    /// Returns `false` if a game is already in progress.
    pub fn start(&mut self) -> bool {
        if self.in_progress() {
            return false;
        }
        self.reset();
        self.phase = Phase::Running;
        info!("game started");
        true
    }

    /// Returns the phase after toggling, or `None` when there is nothing to pause.
    pub fn toggle_pause(&mut self) -> Option<Phase> {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            _ => return None,
        };
        debug!("pause toggled: {:?}", self.phase);
        Some(self.phase)
    }

    /// Queue a turn for the next tick. Reversing into the body is refused.
    pub fn steer(&mut self, dir: Direction) -> bool {
        if !self.in_progress() || dir == self.direction.opposite() {
            return false;
        }
        self.next_direction = dir;
        true
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Idle;
        }

        self.direction = self.next_direction;
        let new_head = self.head().step(self.direction);

        if !self.rules.grid.contains(new_head) {
            return self.finish(OverReason::HitWall);
        }

        let ate = self.food == Some(new_head);
        self.snake.push_front(new_head);
        if !ate {
            self.snake.pop_back();
        }

        // the cell the tail just left is free again
        if self.snake.iter().skip(1).any(|c| *c == new_head) {
            return self.finish(OverReason::HitSelf);
        }

        if !ate {
            return TickOutcome::Moved;
        }

        self.score += self.rules.score_per_food;
        debug!("food eaten at {:?}, score {}", new_head, self.score);
        if !self.place_food() {
            return self.finish(OverReason::BoardFull);
        }
        TickOutcome::Ate
    }

    fn finish(&mut self, reason: OverReason) -> TickOutcome {
        self.phase = Phase::Over(reason);
        info!("game over ({:?}), score {}", reason, self.score);
        TickOutcome::Over(reason)
    }

    /// Picks uniformly among the cells the snake does not cover.
    fn place_food(&mut self) -> bool {
        if self.snake.len() >= self.rules.grid.area() {
            self.food = None;
            return false;
        }
        let occupied: HashSet<Cell> = self.snake.iter().copied().collect();
        let free: Vec<Cell> = self.rules.grid.cells().filter(|c| !occupied.contains(c)).collect();
        if free.is_empty() {
            self.food = None;
            return false;
        }
        self.food = Some(free[self.rng.gen_range(0..free.len())]);
        true
    }
}
