//! Game clock and update loop
//!
//! The host calls [`Game::frame`] once per display frame with the frame
//! timestamp. A logic tick fires only when at least `speed` milliseconds have
//! passed since the previous tick; every frame is redrawn regardless. Time is
//! always passed in, never read, so the loop is fully deterministic.

use super::direction::Direction;
use super::food::FoodPlacer;
use super::state::{GameOver, GamePhase, GameState};
use super::tick::advance;
use crate::highscores::HighScore;
use crate::settings::Settings;

/// What happened during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame {
    /// A logic tick was committed
    pub ticked: bool,
    /// The tick ate food (score and speed changed)
    pub ate_food: bool,
    /// The round ended this frame
    pub game_over: Option<GameOver>,
    /// The host should request another frame
    pub reschedule: bool,
}

/// Engine state plus the timing and lifecycle around it
#[derive(Debug, Clone)]
pub struct Game {
    settings: Settings,
    state: GameState,
    placer: FoodPlacer,
    high_score: HighScore,
    /// Timestamp (ms) of the last committed tick
    last_tick: f64,
    /// The current board is a finished round
    finished: bool,
}

impl Game {
    pub fn new(settings: Settings, high_score: HighScore, seed: u64) -> Self {
        let settings = settings.validated();
        let mut placer = FoodPlacer::new(seed);
        let state = GameState::new(&settings, &mut placer);
        Self {
            settings,
            state,
            placer,
            high_score,
            last_tick: 0.0,
            finished: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn high_score(&self) -> HighScore {
        self.high_score
    }

    /// STOPPED → RUNNING. Starting over a finished round begins a new one.
    pub fn start(&mut self, now: f64) -> bool {
        if self.state.phase != GamePhase::Stopped {
            return false;
        }
        if self.finished {
            self.reset();
        }
        self.state.phase = GamePhase::Running;
        self.last_tick = now;
        log::info!("Game started (speed {} ms)", self.state.speed);
        true
    }

    /// RUNNING ↔ PAUSED. Resuming restarts the tick timer at `now` so time
    /// spent paused never counts toward the next tick.
    pub fn toggle_pause(&mut self, now: f64) -> bool {
        match self.state.phase {
            GamePhase::Running => {
                self.state.phase = GamePhase::Paused;
                log::info!("Paused");
            }
            GamePhase::Paused => {
                self.state.phase = GamePhase::Running;
                self.last_tick = now;
                log::info!("Resumed");
            }
            GamePhase::Stopped => return false,
        }
        true
    }

    /// Back to the initial state, STOPPED
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.settings, &mut self.placer);
        self.last_tick = 0.0;
        self.finished = false;
        log::info!("Game reset");
    }

    /// Queue a direction for the next tick; reversals are ignored
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        self.state.direction.request(direction)
    }

    /// Overwrite the tick delay from the speed control.
    ///
    /// Refused while running. The value is clamped to the configured band.
    /// Adjusting the speed after a game over prepares a fresh round so the
    /// new speed carries into it.
    pub fn set_speed(&mut self, value: i64) -> Option<u32> {
        if self.state.phase == GamePhase::Running {
            log::debug!("Speed change ignored while running");
            return None;
        }
        if self.finished {
            self.reset();
        }
        let speed = self.settings.speed_band().clamp(value);
        self.state.speed = speed;
        log::debug!("Speed set to {speed} ms");
        Some(speed)
    }

    /// Per-frame entry point
    pub fn frame(&mut self, now: f64) -> Frame {
        match self.state.phase {
            GamePhase::Stopped => Frame::default(),
            GamePhase::Paused => Frame {
                reschedule: true,
                ..Frame::default()
            },
            GamePhase::Running => self.run_frame(now),
        }
    }

    fn run_frame(&mut self, now: f64) -> Frame {
        if now - self.last_tick < self.state.speed as f64 {
            return Frame {
                reschedule: true,
                ..Frame::default()
            };
        }

        let result = advance(&mut self.state, &self.settings, &mut self.placer);
        self.last_tick = now;

        let Some(cause) = result.terminal else {
            return Frame {
                ticked: true,
                ate_food: result.ate_food,
                game_over: None,
                reschedule: true,
            };
        };

        self.state.phase = GamePhase::Stopped;
        self.finished = true;
        let score = self.state.score;
        let new_record = self.high_score.submit(score);
        log::info!(
            "Game over ({:?}): score {}, high score {}{}",
            cause,
            score,
            self.high_score.best,
            if new_record { " (new record)" } else { "" }
        );

        Frame {
            ticked: true,
            ate_food: result.ate_food,
            game_over: Some(GameOver {
                cause,
                score,
                high_score: self.high_score.best,
                new_record,
            }),
            reschedule: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Cell, Collision, DirectionArbiter, Snake};

    fn new_game() -> Game {
        Game::new(Settings::default(), HighScore::default(), 42)
    }

    /// Drive frames every 16 ms from `from` until the first tick
    fn run_until_tick(game: &mut Game, from: f64) -> (Frame, f64) {
        let mut now = from;
        loop {
            now += 16.0;
            let frame = game.frame(now);
            if frame.ticked {
                return (frame, now);
            }
            assert!(frame.reschedule);
        }
    }

    #[test]
    fn test_stopped_frame_ends_chain() {
        let mut game = new_game();
        let frame = game.frame(1000.0);
        assert_eq!(frame, Frame::default());
        assert!(!frame.reschedule);
    }

    #[test]
    fn test_tick_waits_for_threshold() {
        let mut game = new_game();
        game.state.food = Some(Cell::new(0, 0));
        assert!(game.start(0.0));
        assert!(!game.start(5.0));

        let frame = game.frame(149.0);
        assert!(!frame.ticked);
        assert!(frame.reschedule);

        let frame = game.frame(150.0);
        assert!(frame.ticked);
        assert_eq!(game.state().snake.head(), Cell::new(11, 10));

        // Baseline moved to 150
        assert!(!game.frame(299.0).ticked);
        assert!(game.frame(300.0).ticked);
        assert_eq!(game.state().snake.head(), Cell::new(12, 10));
    }

    #[test]
    fn test_one_tick_per_frame_after_stall() {
        let mut game = new_game();
        game.state.food = Some(Cell::new(0, 0));
        game.start(0.0);
        // A long stall still commits a single tick
        assert!(game.frame(1000.0).ticked);
        assert_eq!(game.state().snake.head(), Cell::new(11, 10));
        assert!(!game.frame(1016.0).ticked);
    }

    #[test]
    fn test_latest_direction_wins_at_tick() {
        let mut game = new_game();
        game.state.food = Some(Cell::new(0, 0));
        game.start(0.0);
        assert!(game.request_direction(Direction::Up));
        assert!(game.request_direction(Direction::Down));
        assert!(!game.request_direction(Direction::Left));
        game.frame(150.0);
        assert_eq!(game.state().direction.committed(), Direction::Down);
        assert_eq!(game.state().snake.head(), Cell::new(10, 11));
    }

    #[test]
    fn test_boundary_game_over() {
        let mut game = Game::new(Settings::default(), HighScore::new(100), 1);
        game.state.snake = Snake::new(Cell::new(19, 10), Direction::Right, 3);
        game.state.food = Some(Cell::new(0, 0));
        game.state.score = 40;
        game.start(0.0);

        let frame = game.frame(150.0);

        assert!(frame.ticked);
        assert!(!frame.reschedule);
        assert_eq!(
            frame.game_over,
            Some(GameOver {
                cause: Collision::Wall,
                score: 40,
                high_score: 100,
                new_record: false,
            })
        );
        assert_eq!(game.state().phase, GamePhase::Stopped);
        // Final board stays visible
        assert_eq!(game.state().snake.head(), Cell::new(19, 10));
        assert_eq!(game.frame(400.0), Frame::default());
    }

    #[test]
    fn test_game_over_records_high_score() {
        let mut game = Game::new(Settings::default(), HighScore::new(20), 1);
        game.state.snake = Snake::from_cells([
            Cell::new(10, 10),
            Cell::new(9, 10),
            Cell::new(9, 11),
            Cell::new(10, 11),
        ]);
        game.state.direction = DirectionArbiter::new(Direction::Up);
        game.state.food = Some(Cell::new(0, 0));
        game.state.score = 30;
        game.start(0.0);
        game.request_direction(Direction::Left);

        let over = game.frame(200.0).game_over.unwrap();

        assert_eq!(over.cause, Collision::SelfCollision);
        assert!(over.new_record);
        assert_eq!(over.high_score, 30);
        assert_eq!(game.high_score().best, 30);
    }

    #[test]
    fn test_eating_through_the_loop() {
        let mut game = new_game();
        game.state.food = Some(Cell::new(11, 10));
        game.start(0.0);

        let frame = game.frame(150.0);

        assert!(frame.ticked && frame.ate_food);
        assert_eq!(game.state().score, 10);
        assert_eq!(game.state().snake.len(), 4);
        assert_eq!(game.state().speed, 147);
        // Next tick uses the faster threshold
        assert!(!game.frame(296.0).ticked);
        assert!(game.frame(297.0).ticked);
    }

    #[test]
    fn test_no_tick_while_paused() {
        let mut game = new_game();
        game.state.food = Some(Cell::new(0, 0));
        game.start(0.0);
        assert!(game.toggle_pause(50.0));
        assert!(game.state().is_paused());

        for t in [200.0, 1_000.0, 60_000.0] {
            let frame = game.frame(t);
            assert!(!frame.ticked);
            assert!(frame.reschedule);
        }
        assert_eq!(game.state().snake.head(), Cell::new(10, 10));
    }

    #[test]
    fn test_resume_does_not_tick_immediately() {
        let mut game = new_game();
        game.state.food = Some(Cell::new(0, 0));
        game.start(0.0);
        game.toggle_pause(100.0);
        assert!(game.toggle_pause(10_000.0));
        assert_eq!(game.state().phase, GamePhase::Running);

        assert!(!game.frame(10_016.0).ticked);
        assert!(!game.frame(10_149.0).ticked);
        assert!(game.frame(10_150.0).ticked);
    }

    #[test]
    fn test_toggle_pause_needs_a_round() {
        let mut game = new_game();
        assert!(!game.toggle_pause(0.0));
        assert_eq!(game.state().phase, GamePhase::Stopped);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut game = new_game();
        game.start(0.0);
        game.request_direction(Direction::Down);
        let mut now = 0.0;
        for _ in 0..5 {
            now = run_until_tick(&mut game, now).1;
        }
        game.state.score = 50;
        game.request_direction(Direction::Left);

        game.reset();

        let state = game.state();
        assert_eq!(
            state.snake.segments().collect::<Vec<_>>(),
            vec![Cell::new(10, 10), Cell::new(9, 10), Cell::new(8, 10)]
        );
        assert_eq!(state.direction, DirectionArbiter::new(Direction::Right));
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, 150);
        assert_eq!(state.phase, GamePhase::Stopped);
        assert!(!state.snake.contains(state.food.unwrap()));
        assert!(!game.frame(now + 1_000.0).reschedule);
    }

    #[test]
    fn test_reset_from_pause_stops() {
        let mut game = new_game();
        game.start(0.0);
        game.toggle_pause(10.0);
        game.reset();
        assert_eq!(game.state().phase, GamePhase::Stopped);
        assert!(!game.frame(500.0).reschedule);
    }

    #[test]
    fn test_start_after_game_over_is_fresh_round() {
        let mut game = new_game();
        game.state.snake = Snake::new(Cell::new(19, 10), Direction::Right, 3);
        game.state.food = Some(Cell::new(0, 0));
        game.start(0.0);
        assert!(game.frame(150.0).game_over.is_some());

        assert!(game.start(1_000.0));
        assert_eq!(game.state().snake.head(), Cell::new(10, 10));
        assert_eq!(game.state().score, 0);
    }

    #[test]
    fn test_speed_control() {
        let mut game = new_game();
        assert_eq!(game.set_speed(100), Some(100));
        assert_eq!(game.set_speed(5), Some(70));
        assert_eq!(game.set_speed(500), Some(200));
        assert_eq!(game.state().speed, 200);

        game.start(0.0);
        assert_eq!(game.set_speed(120), None);
        assert_eq!(game.state().speed, 200);

        game.toggle_pause(10.0);
        assert_eq!(game.set_speed(120), Some(120));

        game.reset();
        assert_eq!(game.state().speed, 150);
    }

    #[test]
    fn test_speed_change_after_game_over_carries_into_next_round() {
        let mut game = new_game();
        game.state.snake = Snake::new(Cell::new(19, 10), Direction::Right, 3);
        game.start(0.0);
        assert!(game.frame(150.0).game_over.is_some());

        assert_eq!(game.set_speed(90), Some(90));
        assert!(game.start(1_000.0));
        assert_eq!(game.state().speed, 90);
        assert_eq!(game.state().snake.head(), Cell::new(10, 10));
    }
}
