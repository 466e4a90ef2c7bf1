use crate::fsm::{FsmState, GameAction, GameFsm, TransitionResult};
use crate::platform::{Platform, TimerHandle};
use crate::render::render;
use crate::systems::{handle_key_down, Key, Outcome};
use crate::{step, Config, ConfigError, Events, GameRng, GameState};
use log::{debug, error, info, trace};

/// One player's game: state, rules, and the single tick timer
pub struct Session {
    config: Config,
    state: GameState,
    fsm: GameFsm,
    rng: GameRng,
    events: Events,
    platform: Platform,
    timer: Option<TimerHandle>,
}

impl Session {
    /// Build an idle session and paint the starting board
    pub fn new(config: Config, mut rng: GameRng, platform: Platform) -> Result<Self, ConfigError> {
        let state = GameState::new(&config, &mut rng)?;
        Ok(Self::from_state(config, state, rng, platform))
    }

    /// Build an idle session around a board made with the same config
    pub fn from_state(config: Config, state: GameState, rng: GameRng, platform: Platform) -> Self {
        let mut session = Self {
            config,
            state,
            fsm: GameFsm::new(),
            rng,
            events: Events::new(),
            platform,
            timer: None,
        };
        session.platform.score.set_score(0);
        session.draw();
        session
    }

    /// Start a new game, or resume a paused one
    pub fn start(&mut self) -> TransitionResult {
        let result = self.fsm.transition(GameAction::Start);
        if !result.success() {
            trace!("start ignored in {:?}", result.from_state());
            return result;
        }

        if result.from_state() != FsmState::Paused {
            self.reinitialize();
        }
        self.state.running = true;
        self.state.paused = false;
        self.arm_timer();
        self.draw();

        debug!("{:?} -> {:?}", result.from_state(), result.to_state());
        result
    }

    /// Pause a running game or resume a paused one
    pub fn toggle_pause(&mut self) -> TransitionResult {
        let result = self.fsm.transition(GameAction::TogglePause);
        if !result.success() {
            trace!("pause ignored in {:?}", result.from_state());
            return result;
        }

        self.state.paused = result.to_state() == FsmState::Paused;
        debug!("{:?} -> {:?}", result.from_state(), result.to_state());
        result
    }

    /// Stop everything and put a fresh board up. Does not start a game.
    pub fn reset(&mut self) -> TransitionResult {
        let result = self.fsm.transition(GameAction::Reset);

        self.stop_timer();
        self.state.running = false;
        self.state.paused = false;
        self.reinitialize();
        self.draw();

        debug!("{:?} -> {:?}", result.from_state(), result.to_state());
        result
    }

    /// Dispatch a control action by value
    pub fn apply(&mut self, action: GameAction) -> TransitionResult {
        match action {
            GameAction::Start => self.start(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Reset => self.reset(),
            // Only the movement rule may end a game
            GameAction::GameOver => self.fsm.rejected(action),
        }
    }

    /// One timer fire: move, score, maybe end the game, then repaint
    pub fn tick(&mut self) -> Option<Outcome> {
        let outcome = step(&mut self.state, &self.config, &mut self.rng, &mut self.events);

        match outcome {
            Some(Outcome::Ate) => {
                self.platform.score.set_score(self.state.score.points);
            }
            Some(Outcome::GameOver(collision)) => {
                self.game_over();
                info!(
                    "Game over ({:?}), final score {}",
                    collision, self.state.score.points
                );
            }
            Some(Outcome::Continue) | None => {}
        }

        self.draw();
        outcome
    }

    /// Steer the snake. Ignored unless a game is running and not paused.
    pub fn key_down(&mut self, key: Key) -> bool {
        if !self.state.is_active() {
            return false;
        }
        handle_key_down(key, &mut self.state.direction)
    }

    /// Steer from a DOM key name, e.g. `"ArrowUp"` or `"w"`
    pub fn key_down_name(&mut self, name: &str) -> bool {
        match Key::from_name(name) {
            Some(key) => self.key_down(key),
            None => false,
        }
    }

    /// Steer from a legacy numeric key code
    pub fn key_down_code(&mut self, code: u32) -> bool {
        match Key::from_code(code) {
            Some(key) => self.key_down(key),
            None => false,
        }
    }

    /// Repaint without touching state
    pub fn draw(&mut self) {
        render(&self.state, &self.config, self.platform.surface.as_mut());
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn fsm_state(&self) -> FsmState {
        self.fsm.state()
    }

    pub fn score(&self) -> u32 {
        self.state.score.points
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn is_ticking(&self) -> bool {
        self.timer.is_some()
    }

    fn game_over(&mut self) {
        self.fsm.transition(GameAction::GameOver);
        self.state.running = false;
        self.state.paused = false;
        self.stop_timer();
    }

    fn reinitialize(&mut self) {
        if let Err(e) = self.state.reinitialize(&self.config, &mut self.rng) {
            error!("Cannot reinitialize board: {}", e);
        }
        self.events.clear();
        self.platform.score.set_score(0);
    }

    /// At most one timer is live: drop the old one before scheduling
    fn arm_timer(&mut self) {
        self.stop_timer();
        let handle = self
            .platform
            .scheduler
            .schedule(self.config.tick_interval_ms);
        self.timer = Some(handle);
    }

    fn stop_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.platform.scheduler.cancel(handle);
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.stop_timer();
    }
}
