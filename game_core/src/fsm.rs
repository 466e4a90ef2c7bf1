//! Session State Machine
//!
//! Decides which control actions are legal from each session state.

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmState {
    Idle,
    Running,
    Paused,
    Over,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    TogglePause,
    Reset,
    GameOver,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    success: bool,
    from_state: FsmState,
    to_state: FsmState,
    action: GameAction,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn from_state(&self) -> FsmState {
        self.from_state
    }

    pub fn to_state(&self) -> FsmState {
        self.to_state
    }

    pub fn action(&self) -> GameAction {
        self.action
    }
}

/// Session Finite State Machine
#[derive(Debug)]
pub struct GameFsm {
    state: FsmState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: FsmState::Idle,
        }
    }

    /// Get current state
    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            self.rejected(action)
        }
    }

    /// A failed transition that leaves the state where it is
    pub fn rejected(&self, action: GameAction) -> TransitionResult {
        TransitionResult {
            success: false,
            from_state: self.state,
            to_state: self.state,
            action,
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<FsmState> {
        match (self.state, action) {
            // Reset is accepted everywhere
            (_, GameAction::Reset) => Some(FsmState::Idle),

            // Fresh start
            (FsmState::Idle, GameAction::Start) => Some(FsmState::Running),
            (FsmState::Over, GameAction::Start) => Some(FsmState::Running),

            // From Running
            (FsmState::Running, GameAction::TogglePause) => Some(FsmState::Paused),
            (FsmState::Running, GameAction::GameOver) => Some(FsmState::Over),

            // From Paused: start doubles as resume
            (FsmState::Paused, GameAction::TogglePause) => Some(FsmState::Running),
            (FsmState::Paused, GameAction::Start) => Some(FsmState::Running),

            // No-ops: start while running, pause while stopped
            _ => None,
        }
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = GameFsm::new();
        assert_eq!(fsm.state(), FsmState::Idle);
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::Start);
        assert!(result.success());
        assert_eq!(result.from_state(), FsmState::Idle);
        assert_eq!(result.to_state(), FsmState::Running);
        assert_eq!(fsm.state(), FsmState::Running);
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::TogglePause);
        assert!(!result.success());
        assert_eq!(fsm.state(), FsmState::Idle);
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        assert!(!fsm.transition(GameAction::Start).success());
        assert_eq!(fsm.state(), FsmState::Running);
    }

    #[test]
    fn test_pause_resume_flow() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        fsm.transition(GameAction::TogglePause);
        assert_eq!(fsm.state(), FsmState::Paused);
        fsm.transition(GameAction::TogglePause);
        assert_eq!(fsm.state(), FsmState::Running);
        fsm.transition(GameAction::TogglePause);
        fsm.transition(GameAction::Start);
        assert_eq!(fsm.state(), FsmState::Running, "Start resumes a paused game");
    }

    #[test]
    fn test_game_over_flow() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        fsm.transition(GameAction::GameOver);
        assert_eq!(fsm.state(), FsmState::Over);
        let result = fsm.transition(GameAction::TogglePause);
        assert!(!result.success());
        assert_eq!(result.to_state(), FsmState::Over);
        fsm.transition(GameAction::Start);
        assert_eq!(fsm.state(), FsmState::Running);
    }

    #[test]
    fn test_reset_from_every_state() {
        let paths: [&[GameAction]; 4] = [
            &[],
            &[GameAction::Start],
            &[GameAction::Start, GameAction::TogglePause],
            &[GameAction::Start, GameAction::GameOver],
        ];
        for path in paths {
            let mut fsm = GameFsm::new();
            for action in path {
                fsm.transition(*action);
            }
            assert!(fsm.transition(GameAction::Reset).success());
            assert_eq!(fsm.state(), FsmState::Idle);
        }
    }

    #[test]
    fn test_game_over_only_from_running() {
        for path in [&[][..], &[GameAction::Start, GameAction::TogglePause][..]] {
            let mut fsm = GameFsm::new();
            for action in path {
                fsm.transition(*action);
            }
            let before = fsm.state();
            assert!(!fsm.transition(GameAction::GameOver).success());
            assert_eq!(fsm.state(), before);
        }
    }
}
