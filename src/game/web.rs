//! Browser frontend.
//!
//! [`mount`] takes over a `<canvas>`: it starts one interval timer that
//! ticks and redraws, and attaches the mouse listeners. Everything is owned
//! by the returned [`GameLoopHandle`]; dropping or disposing it clears the
//! timer and removes the listeners, so nothing touches the session after
//! teardown.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, MouseEvent, Window};

use crate::game::config::LauncherConfig;
use crate::game::render::{CanvasRenderer, FrameRenderer};
use crate::game::session::{Session, SessionEvent};
use crate::input::{MouseButton, PointerEvent, PointerTracker, surface_to_playfield};

#[wasm_bindgen(start)]
pub fn wasm_init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("logger already installed"));
    }
}

/// Mount with the default config.
#[wasm_bindgen]
pub fn mount(canvas_id: &str, status_id: Option<String>) -> Result<GameLoopHandle, JsValue> {
    mount_game(canvas_id, status_id.as_deref(), LauncherConfig::default())
}

/// Mount with a JSON config (any subset of the fields).
#[wasm_bindgen]
pub fn mount_with_config(
    canvas_id: &str,
    status_id: Option<String>,
    config_json: &str,
) -> Result<GameLoopHandle, JsValue> {
    let config =
        LauncherConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    mount_game(canvas_id, status_id.as_deref(), config)
}

/// Session plus the per-frontend pointer state.
struct WebGame {
    session: Session,
    tracker: PointerTracker,
}

impl WebGame {
    fn pointer(&mut self, event: PointerEvent) {
        self.session.handle_pointer(event);
    }
}

type MouseClosure = Closure<dyn FnMut(MouseEvent)>;

/// Owns the timer and the listeners for one mounted game.
struct Mounted {
    game: Rc<RefCell<WebGame>>,
    window: Window,
    canvas: HtmlCanvasElement,
    interval_id: i32,
    _tick: Closure<dyn FnMut()>,
    listeners: Vec<(&'static str, MouseClosure)>,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.interval_id);
        for (kind, listener) in &self.listeners {
            if let Err(e) = self
                .canvas
                .remove_event_listener_with_callback(kind, listener.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove {kind} listener: {e:?}");
            }
        }
        log::info!("Game unmounted");
    }
}

/// JS-facing handle to a mounted game.
#[wasm_bindgen]
pub struct GameLoopHandle {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl GameLoopHandle {
    pub fn reset(&self) {
        if let Some(m) = &self.mounted {
            m.game.borrow_mut().session.reset();
        }
    }

    pub fn score(&self) -> u32 {
        self.read(|s| s.score())
    }

    pub fn remaining(&self) -> u32 {
        self.read(|s| s.remaining())
    }

    #[wasm_bindgen(js_name = isWon)]
    pub fn is_won(&self) -> bool {
        self.read(|s| s.is_won())
    }

    /// Current status line, empty while aiming or flying.
    pub fn status(&self) -> String {
        self.read(|s| s.status().to_string())
    }

    /// Stop the timer and detach listeners. Safe to call twice.
    pub fn dispose(&mut self) {
        self.mounted = None;
    }
}

impl GameLoopHandle {
    fn read<T: Default>(&self, f: impl FnOnce(&Session) -> T) -> T {
        self.mounted
            .as_ref()
            .map(|m| f(&m.game.borrow().session))
            .unwrap_or_default()
    }
}

fn mount_game(
    canvas_id: &str,
    status_id: Option<&str>,
    config: LauncherConfig,
) -> Result<GameLoopHandle, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element #{canvas_id}")))?
        .dyn_into()?;
    canvas.set_width(config.playfield.width as u32);
    canvas.set_height(config.playfield.height as u32);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()?;

    let status_el = status_id.and_then(|id| document.get_element_by_id(id));
    let playfield = config.playfield.size();
    let period_ms = (1000.0 / config.playfield.tick_hz).round().max(1.0) as i32;

    let game = Rc::new(RefCell::new(WebGame {
        session: Session::new(config),
        tracker: PointerTracker::new(),
    }));

    let tick = {
        let game = Rc::clone(&game);
        let mut renderer = CanvasRenderer::new(ctx);
        let mut shown_status = None;
        Closure::<dyn FnMut()>::new(move || {
            let mut game = game.borrow_mut();
            game.session.tick();
            for event in game.session.drain_events() {
                if event == SessionEvent::Won {
                    log::info!("Won with score {}", game.session.score());
                }
            }
            if let Err(e) = renderer.render(&game.session.frame()) {
                log::warn!("Canvas draw failed: {e:?}");
            }
            let status = game.session.status();
            if shown_status != Some(status) {
                update_status(status_el.as_ref(), status.text().unwrap_or(""));
                shown_status = Some(status);
            }
        })
    };

    let interval_id = window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        period_ms,
    )?;

    let mut listeners: Vec<(&'static str, MouseClosure)> = Vec::with_capacity(3);
    for kind in ["mousedown", "mousemove", "mouseup"] {
        let listener = mouse_listener(kind, Rc::clone(&game), canvas.clone(), playfield);
        canvas.add_event_listener_with_callback(kind, listener.as_ref().unchecked_ref())?;
        listeners.push((kind, listener));
    }

    log::info!("Game mounted on #{canvas_id}, tick every {period_ms} ms");

    Ok(GameLoopHandle {
        mounted: Some(Mounted {
            game,
            window,
            canvas,
            interval_id,
            _tick: tick,
            listeners,
        }),
    })
}

fn mouse_listener(
    kind: &'static str,
    game: Rc<RefCell<WebGame>>,
    canvas: HtmlCanvasElement,
    playfield: Vec2,
) -> MouseClosure {
    Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let rect = canvas.get_bounding_client_rect();
        let local = Vec2::new(
            (event.client_x() as f64 - rect.left()) as f32,
            (event.client_y() as f64 - rect.top()) as f32,
        );
        let surface = Vec2::new(rect.width() as f32, rect.height() as f32);
        let point = surface_to_playfield(local, surface, playfield);

        let mut game = game.borrow_mut();
        let moved = game.tracker.cursor_moved(point);
        let pointer = match kind {
            "mousemove" => Some(moved),
            "mousedown" => game
                .tracker
                .button(MouseButton::from_dom_index(event.button()), true),
            _ => game
                .tracker
                .button(MouseButton::from_dom_index(event.button()), false),
        };
        if let Some(pointer) = pointer {
            game.pointer(pointer);
        }
    })
}

fn update_status(element: Option<&Element>, text: &str) {
    if let Some(element) = element {
        element.set_text_content(Some(text));
    }
}
