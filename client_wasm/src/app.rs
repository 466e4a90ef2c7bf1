//! Browser wiring: one session, its timer callback, and the page controls

use crate::dom::{canvas_by_id, document, element_by_id, ElementScore};
use crate::input::key_from_event;
use crate::scheduler::IntervalScheduler;
use crate::surface::CanvasSurface;
use game_core::{Config, FsmState, GameRng, GameState, Outcome, Platform, Session};
use js_sys::Function;
use log::{error, info, warn};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, KeyboardEvent};

/// Element ids of the page the game is mounted on
pub struct PageIds<'a> {
    pub canvas: &'a str,
    pub score: &'a str,
    pub start: &'a str,
    pub pause: &'a str,
    pub reset: &'a str,
}

impl Default for PageIds<'static> {
    fn default() -> Self {
        Self {
            canvas: "gameCanvas",
            score: "score",
            start: "startBtn",
            pause: "pauseBtn",
            reset: "resetBtn",
        }
    }
}

struct Controls {
    start: HtmlElement,
    pause: HtmlElement,
    reset: HtmlElement,
}

pub struct App {
    session: RefCell<Session>,
    document: Document,
    controls: Controls,
    game_over_listener: RefCell<Option<Function>>,
    // Closures must outlive every registration that points at them
    _tick: Closure<dyn FnMut()>,
    on_key: Closure<dyn FnMut(KeyboardEvent)>,
    on_start: Closure<dyn FnMut()>,
    on_pause: Closure<dyn FnMut()>,
    on_reset: Closure<dyn FnMut()>,
}

impl App {
    /// Look up the page elements, build the session and hook up listeners
    pub fn mount(ids: &PageIds) -> Result<Rc<App>, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = document()?;

        let canvas = canvas_by_id(&document, ids.canvas)?;
        let config = Config::from_canvas(canvas.width(), canvas.height())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let tile_count = config.tile_count;
        let mut rng = GameRng::from_entropy();
        let state =
            GameState::new(&config, &mut rng).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let surface = CanvasSurface::new(canvas)?;
        let score = ElementScore::new(element_by_id(&document, ids.score)?);
        let controls = Controls {
            start: element_by_id(&document, ids.start)?,
            pause: element_by_id(&document, ids.pause)?,
            reset: element_by_id(&document, ids.reset)?,
        };

        let app = Rc::new_cyclic(|weak: &Weak<App>| {
            let tick = {
                let weak = weak.clone();
                Closure::<dyn FnMut()>::new(move || {
                    if let Some(app) = weak.upgrade() {
                        app.tick();
                    }
                })
            };
            let callback: Function = tick.as_ref().unchecked_ref::<Function>().clone();

            let platform = Platform {
                surface: Box::new(surface),
                score: Box::new(score),
                scheduler: Box::new(IntervalScheduler::new(window, callback)),
            };
            let session = Session::from_state(config, state, rng, platform);

            let on_key = {
                let weak = weak.clone();
                Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                    if let Some(app) = weak.upgrade() {
                        app.key_down(&event);
                    }
                })
            };

            App {
                session: RefCell::new(session),
                document,
                controls,
                game_over_listener: RefCell::new(None),
                _tick: tick,
                on_key,
                on_start: control(weak, App::start),
                on_pause: control(weak, App::toggle_pause),
                on_reset: control(weak, App::reset),
            }
        });

        app.attach()?;
        info!("Snake mounted on #{} with {}x{} tiles", ids.canvas, tile_count, tile_count);
        Ok(app)
    }

    pub fn start(&self) {
        if let Some(result) = self.with_session(|s| s.start()) {
            if result.success() {
                self.set_pause_label(false);
            }
        }
    }

    pub fn toggle_pause(&self) {
        if let Some(result) = self.with_session(|s| s.toggle_pause()) {
            if result.success() {
                self.set_pause_label(result.to_state() == FsmState::Paused);
            }
        }
    }

    pub fn reset(&self) {
        if self.with_session(|s| s.reset()).is_some() {
            self.set_pause_label(false);
        }
    }

    /// Register the JS function that receives the final score
    pub fn set_game_over_listener(&self, callback: Option<Function>) {
        *self.game_over_listener.borrow_mut() = callback;
    }

    pub fn fsm_state(&self) -> Option<FsmState> {
        self.with_session(|s| s.fsm_state())
    }

    pub fn score(&self) -> Option<u32> {
        self.with_session(|s| s.score())
    }

    fn tick(&self) {
        let outcome = self.with_session(|s| s.tick()).flatten();
        if let Some(Outcome::GameOver(_)) = outcome {
            self.notify_game_over();
        }
    }

    fn key_down(&self, event: &KeyboardEvent) {
        let Some(key) = key_from_event(event) else {
            return;
        };
        let active = self
            .with_session(|s| {
                let active = s.state().is_active();
                s.key_down(key);
                active
            })
            .unwrap_or(false);

        // Keep arrow keys from scrolling the page mid-game
        if active {
            event.prevent_default();
        }
    }

    /// Runs after the session borrow is released, so the listener may call back in
    fn notify_game_over(&self) {
        let score = self.score().unwrap_or(0);
        info!("Game Over! Your score: {}", score);

        let listener = self.game_over_listener.borrow().clone();
        if let Some(listener) = listener {
            if let Err(e) = listener.call1(&JsValue::NULL, &JsValue::from(score)) {
                error!("Game over listener failed: {:?}", e);
            }
        }
    }

    fn with_session<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        match self.session.try_borrow_mut() {
            Ok(mut session) => Some(f(&mut session)),
            Err(_) => {
                warn!("Session busy, event dropped");
                None
            }
        }
    }

    fn set_pause_label(&self, paused: bool) {
        let label = if paused { "Resume" } else { "Pause" };
        self.controls.pause.set_text_content(Some(label));
    }

    fn attach(&self) -> Result<(), JsValue> {
        self.document
            .add_event_listener_with_callback("keydown", self.on_key.as_ref().unchecked_ref())?;
        self.controls
            .start
            .add_event_listener_with_callback("click", self.on_start.as_ref().unchecked_ref())?;
        self.controls
            .pause
            .add_event_listener_with_callback("click", self.on_pause.as_ref().unchecked_ref())?;
        self.controls
            .reset
            .add_event_listener_with_callback("click", self.on_reset.as_ref().unchecked_ref())?;
        Ok(())
    }

    fn detach(&self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", self.on_key.as_ref().unchecked_ref());
        for (element, closure) in [
            (&self.controls.start, &self.on_start),
            (&self.controls.pause, &self.on_pause),
            (&self.controls.reset, &self.on_reset),
        ] {
            let _ = element
                .remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // The session's own Drop cancels the interval
        self.detach();
    }
}

fn control(weak: &Weak<App>, action: fn(&App)) -> Closure<dyn FnMut()> {
    let weak = weak.clone();
    Closure::<dyn FnMut()>::new(move || {
        if let Some(app) = weak.upgrade() {
            action(&app);
        }
    })
}
