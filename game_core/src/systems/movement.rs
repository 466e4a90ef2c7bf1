use crate::{place_food, Collision, Config, Events, GameRng, GameState};

/// Per-tick classification of what the snake did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Ate,
    GameOver(Collision),
}

/// Advance the snake one cell in its current direction.
///
/// Returns `None` while the game is stopped or paused. Self collision is
/// tested against the body before the tail moves, so stepping into the cell
/// the tail is leaving still ends the game. A snake with no direction yet
/// lands on its own head and ends the game the same way.
pub fn move_snake(
    state: &mut GameState,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) -> Option<Outcome> {
    if !state.is_active() {
        return None;
    }

    let head = state.snake.head() + state.direction.vector();

    if !config.in_bounds(head) {
        events.collision = Some(Collision::Wall);
        return Some(Outcome::GameOver(Collision::Wall));
    }

    if state.snake.contains(head) {
        events.collision = Some(Collision::SelfHit);
        return Some(Outcome::GameOver(Collision::SelfHit));
    }

    state.snake.push_head(head);

    if head == state.food {
        state.score.add(config.food_score);
        events.ate_food = true;

        // Board full: nowhere left to put food, keep the old cell
        if let Some(food) = place_food(&state.snake, config, rng) {
            state.food = food;
        }
        Some(Outcome::Ate)
    } else {
        state.snake.pop_tail();
        Some(Outcome::Continue)
    }
}
