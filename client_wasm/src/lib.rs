//! Browser client for Snake
//!
//! Mounts a `game_core::Session` on an HTML page: draws onto a 2D canvas,
//! writes the score into an element, ticks with `setInterval`, and listens
//! for arrow/WASD keys and the Start / Pause / Reset buttons.
//!
//! Only the key mapping helpers build outside wasm32.

pub mod input;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod logger;
#[cfg(target_arch = "wasm32")]
mod scheduler;
#[cfg(target_arch = "wasm32")]
mod surface;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use crate::app::{App, PageIds};
    use crate::logger;
    use log::LevelFilter;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    // Global client storage for WASM bindings
    thread_local! {
        static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
    }

    /// Clone the app out of the slot so no borrow is held while it runs
    fn with_app<R>(f: impl FnOnce(&App) -> R) -> Result<R, JsValue> {
        let app = APP
            .with(|slot| slot.borrow().clone())
            .ok_or_else(|| JsValue::from_str("Game not initialized"))?;
        Ok(f(&app))
    }

    #[wasm_bindgen(start)]
    pub fn main() {
        console_error_panic_hook::set_once();
        logger::init(LevelFilter::Info);
    }

    /// Mount the game on the given element ids. Re-mounting replaces the old game.
    #[wasm_bindgen]
    pub fn init_game(
        canvas_id: &str,
        score_id: &str,
        start_id: &str,
        pause_id: &str,
        reset_id: &str,
    ) -> Result<(), JsValue> {
        let app = App::mount(&PageIds {
            canvas: canvas_id,
            score: score_id,
            start: start_id,
            pause: pause_id,
            reset: reset_id,
        })?;
        let previous = APP.with(|slot| slot.borrow_mut().replace(app));
        drop(previous);
        Ok(())
    }

    /// Mount on `#gameCanvas`, `#score`, `#startBtn`, `#pauseBtn`, `#resetBtn`
    #[wasm_bindgen]
    pub fn init_default_game() -> Result<(), JsValue> {
        let app = App::mount(&PageIds::default())?;
        let previous = APP.with(|slot| slot.borrow_mut().replace(app));
        drop(previous);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn start_game() -> Result<(), JsValue> {
        with_app(|app| app.start())
    }

    #[wasm_bindgen]
    pub fn toggle_pause() -> Result<(), JsValue> {
        with_app(|app| app.toggle_pause())
    }

    #[wasm_bindgen]
    pub fn reset_game() -> Result<(), JsValue> {
        with_app(|app| app.reset())
    }

    /// Register `callback(score)` for game over; pass `undefined` to clear it
    #[wasm_bindgen]
    pub fn on_game_over(callback: Option<js_sys::Function>) -> Result<(), JsValue> {
        with_app(|app| app.set_game_over_listener(callback))
    }

    /// Current session state: "Idle", "Running", "Paused" or "Over"
    #[wasm_bindgen]
    pub fn game_state() -> Result<String, JsValue> {
        with_app(|app| app.fsm_state().map(|s| format!("{:?}", s)))?
            .ok_or_else(|| JsValue::from_str("Game busy"))
    }

    #[wasm_bindgen]
    pub fn score() -> Result<u32, JsValue> {
        with_app(|app| app.score())?.ok_or_else(|| JsValue::from_str("Game busy"))
    }

    /// "error", "warn", "info", "debug" or "trace"
    #[wasm_bindgen]
    pub fn set_log_level(level: &str) -> Result<(), JsValue> {
        let filter: LevelFilter = level
            .parse()
            .map_err(|_| JsValue::from_str(&format!("Unknown log level: {level}")))?;
        log::set_max_level(filter);
        Ok(())
    }
}
