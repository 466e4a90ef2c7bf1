pub mod components;
pub mod config;
pub mod error;
pub mod fsm;
pub mod params;
pub mod platform;
pub mod render;
pub mod resources;
pub mod session;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use fsm::*;
pub use params::*;
pub use platform::*;
pub use render::*;
pub use resources::*;
pub use session::*;
pub use state::*;
pub use systems::*;

/// Run one deterministic Snake tick
pub fn step(
    state: &mut GameState,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) -> Option<Outcome> {
    // Clear events at start of tick
    events.clear();

    move_snake(state, config, rng, events)
}

/// Helper to build a running game with an explicit body, head first
pub fn create_running_state(
    config: &Config,
    rng: &mut GameRng,
    cells: &[Cell],
    direction: Direction,
) -> Option<GameState> {
    let mut state = GameState::new(config, rng).ok()?;
    state.snake = Snake::from_cells(cells.iter().copied())?;
    if state.snake.contains(state.food) {
        state.food = place_food(&state.snake, config, rng)?;
    }
    state.direction = direction;
    state.running = true;
    Some(state)
}
