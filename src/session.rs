use log::info;
use rand::Rng;
use rand::rngs::SmallRng;

use crate::clock::Clock;
use crate::config::{Difficulty, GameConfig, SpeedTable};
use crate::game::{Game, OverReason, Phase, TickOutcome};
use crate::input::Command;

/// Shown when a game ends; blocks every other control until dismissed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameOverNotice {
    pub score: u32,
    pub reason: OverReason,
}

impl GameOverNotice {
    pub fn message(&self) -> String {
        format!("Game over! Your score: {}", self.score)
    }
}

/// Ties the game to its clock and the player's controls.
pub struct Session<R: Rng = SmallRng> {
    game: Game<R>,
    clock: Clock,
    speeds: SpeedTable,
    difficulty: Difficulty,
    notice: Option<GameOverNotice>,
}

impl Session<SmallRng> {
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self::with_game(Game::new(config.rules(), seed), config.speeds, config.difficulty)
    }
}

impl<R: Rng> Session<R> {
    pub fn with_game(game: Game<R>, speeds: SpeedTable, difficulty: Difficulty) -> Self {
        Self {
            game,
            clock: Clock::new(speeds.interval(difficulty)),
            speeds,
            difficulty,
            notice: None,
        }
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn notice(&self) -> Option<&GameOverNotice> {
        self.notice.as_ref()
    }

    pub fn handle(&mut self, cmd: Command, now: f64) {
        if self.notice.is_some() {
            if matches!(cmd, Command::Dismiss | Command::Start) {
                self.notice = None;
            }
            return;
        }
        match cmd {
            Command::Start => {
                if self.game.start() {
                    self.clock.set_interval(self.speeds.interval(self.difficulty), now);
                    self.clock.start(now);
                }
            }
            Command::TogglePause => match self.game.toggle_pause() {
                Some(Phase::Paused) => self.clock.stop(),
                Some(Phase::Running) => self.clock.start(now),
                _ => {}
            },
            Command::Steer(dir) => {
                self.game.steer(dir);
            }
            Command::SetDifficulty(difficulty) => {
                if difficulty != self.difficulty {
                    info!("difficulty set to {difficulty}");
                }
                self.difficulty = difficulty;
                self.clock.set_interval(self.speeds.interval(difficulty), now);
            }
            Command::Dismiss => {}
        }
    }

    /// Advance the game if the clock says a tick is due.
    pub fn update(&mut self, now: f64) -> Option<TickOutcome> {
        if !self.clock.poll(now) {
            return None;
        }
        let outcome = self.game.tick();
        if let TickOutcome::Over(reason) = outcome {
            self.clock.stop();
            self.notice = Some(GameOverNotice { score: self.game.score(), reason });
        }
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Rules;
    use crate::grid::{Cell, Direction, Grid};
    use rand::SeedableRng;

    fn session() -> Session {
        Session::new(&GameConfig::default(), 11)
    }

    #[test]
    fn start_arms_the_clock_at_the_selected_speed() {
        let mut s = session();
        assert!(!s.clock().is_running());
        s.handle(Command::SetDifficulty(Difficulty::Hard), 0.0);
        s.handle(Command::Start, 0.0);
        assert!(s.clock().is_running());
        assert_eq!(s.clock().interval(), SpeedTable::default().interval(Difficulty::Hard));
        assert_eq!(s.update(0.05), None);
        assert!(s.update(0.1).is_some());
    }

    #[test]
    fn difficulty_change_keeps_the_game() {
        let mut s = session();
        s.handle(Command::Start, 0.0);
        s.update(0.25);
        let head = s.game().head();
        let score = s.game().score();
        s.handle(Command::SetDifficulty(Difficulty::Easy), 0.3);
        assert_eq!(s.game().head(), head);
        assert_eq!(s.game().score(), score);
        assert_eq!(s.game().phase(), Phase::Running);
        // interval restarts from the change
        assert_eq!(s.update(0.45), None);
        assert!(s.update(0.6).is_some());
    }

    #[test]
    fn pause_stops_the_clock() {
        let mut s = session();
        s.handle(Command::Start, 0.0);
        s.handle(Command::TogglePause, 0.1);
        assert!(!s.clock().is_running());
        assert_eq!(s.update(5.0), None);
        s.handle(Command::TogglePause, 5.0);
        assert!(s.clock().is_running());
        assert!(s.update(5.25).is_some());
    }

    #[test]
    fn pause_before_start_is_ignored() {
        let mut s = session();
        s.handle(Command::TogglePause, 0.0);
        assert_eq!(s.game().phase(), Phase::NotStarted);
        assert!(!s.clock().is_running());
    }

    #[test]
    fn game_over_raises_a_blocking_notice() {
        let rules = Rules { grid: Grid::new(20, 20), score_per_food: 10 };
        let game = Game::with_layout(
            rules,
            vec![Cell::new(19, 3), Cell::new(18, 3)],
            Direction::Right,
            Cell::new(0, 0),
            SmallRng::seed_from_u64(2),
        )
        .unwrap();
        let mut s = Session::with_game(game, SpeedTable::default(), Difficulty::Medium);
        s.clock.start(0.0);

        assert_eq!(s.update(0.25), Some(TickOutcome::Over(OverReason::HitWall)));
        assert!(!s.clock().is_running());
        let notice = *s.notice().unwrap();
        assert_eq!(notice.message(), "Game over! Your score: 0");

        // the notice swallows everything but an acknowledgement
        s.handle(Command::SetDifficulty(Difficulty::Hard), 1.0);
        assert_eq!(s.difficulty(), Difficulty::Medium);
        s.handle(Command::Start, 1.0);
        assert!(s.notice().is_none());
        assert!(!s.game().in_progress());

        s.handle(Command::Start, 2.0);
        assert_eq!(s.game().phase(), Phase::Running);
        assert_eq!(s.game().score(), 0);
    }
}
