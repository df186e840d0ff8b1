//! Fence Rider entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, KeyboardEvent};

    use fence_rider::platform::{FrameScheduler, LocalStorage, LoopHandle};
    use fence_rider::renderer::CanvasSurface;
    use fence_rider::{Hud, HudField, Panel, Session, Settings};

    /// DOM-backed HUD: text readouts plus the two overlay panels
    struct DomHud {
        score: Option<Element>,
        high_score: Option<Element>,
        final_score: Option<Element>,
        start_screen: Option<Element>,
        game_over: Option<Element>,
    }

    impl DomHud {
        fn new(document: &Document) -> Self {
            Self {
                score: document.get_element_by_id("score"),
                high_score: document.get_element_by_id("high-score"),
                final_score: document.get_element_by_id("final-score"),
                start_screen: document.get_element_by_id("start-screen"),
                game_over: document.get_element_by_id("game-over"),
            }
        }
    }

    impl Hud for DomHud {
        fn set_panel_visible(&mut self, panel: Panel, visible: bool) {
            let el = match panel {
                Panel::Start => &self.start_screen,
                Panel::GameOver => &self.game_over,
            };
            if let Some(el) = el {
                let classes = el.class_list();
                let _ = if visible {
                    classes.remove_1("hidden")
                } else {
                    classes.add_1("hidden")
                };
            }
        }

        fn set_text(&mut self, field: HudField, text: &str) {
            let el = match field {
                HudField::Score => &self.score,
                HudField::HighScore => &self.high_score,
                HudField::FinalScore => &self.final_score,
            };
            if let Some(el) = el {
                el.set_text_content(Some(text));
            }
        }
    }

    type FrameCallback = Closure<dyn FnMut(f64)>;

    /// requestAnimationFrame / cancelAnimationFrame
    struct AnimationFrameScheduler {
        callback: Rc<RefCell<Option<FrameCallback>>>,
    }

    impl FrameScheduler for AnimationFrameScheduler {
        fn request_frame(&mut self) -> LoopHandle {
            let Some(window) = web_sys::window() else {
                return LoopHandle(0);
            };
            let callback = self.callback.borrow();
            let Some(callback) = callback.as_ref() else {
                log::error!("Frame requested before the loop callback was installed");
                return LoopHandle(0);
            };
            match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                Ok(id) => LoopHandle(id),
                Err(e) => {
                    log::error!("requestAnimationFrame failed: {:?}", e);
                    LoopHandle(0)
                }
            }
        }

        fn cancel_frame(&mut self, handle: LoopHandle) {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(handle.0);
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        session: Session<LocalStorage, DomHud, AnimationFrameScheduler>,
        surface: CanvasSurface,
    }

    impl Game {
        fn step(&mut self) {
            self.session.step(&mut self.surface);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Fence Rider starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let mut settings = Settings::load(&LocalStorage);
        settings.tuning.viewport_width = canvas.width() as f32;
        settings.tuning.viewport_height = canvas.height() as f32;

        let callback_slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let scheduler = AnimationFrameScheduler {
            callback: callback_slot.clone(),
        };

        let seed = js_sys::Date::now() as u64;
        let session = Session::new(settings, seed, LocalStorage, DomHud::new(&document), scheduler);
        let game = Rc::new(RefCell::new(Game {
            session,
            surface: CanvasSurface::new(ctx),
        }));
        log::info!("Game initialized with seed: {}", seed);

        // Frame callback shared by every requestAnimationFrame call
        {
            let game = game.clone();
            *callback_slot.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |_time: f64| {
                game.borrow_mut().step();
            }));
        }

        setup_input_handlers(game.clone());
        setup_buttons(&document, game.clone());

        // Draw the rider frozen behind the start screen
        {
            let mut g = game.borrow_mut();
            let Game { session, surface } = &mut *g;
            session.render(surface);
        }

        log::info!("Fence Rider ready");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Keyboard: jump on Space/ArrowUp, hold F to hover
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.code().as_str() {
                    "Space" | "ArrowUp" => {
                        if g.session.is_playing() {
                            event.prevent_default();
                            g.session.jump();
                        }
                    }
                    "KeyF" => g.session.set_fly_mode(true),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.code() == "KeyF" {
                    game.borrow_mut().session.set_fly_mode(false);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse and touch both count as a jump press
        for event_name in ["mousedown", "touchstart"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().session.jump();
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        for id in ["start-btn", "restart-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    game.borrow_mut().session.start();
                });
                let _ = btn
                    .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            } else {
                log::warn!("Missing button #{}", id);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use fence_rider::platform::{ManualScheduler, MemoryStore};
    use fence_rider::renderer::RecordingSurface;
    use fence_rider::session::RecordingHud;
    use fence_rider::sim::GameState;
    use fence_rider::{GamePhase, Session, Settings};

    /// Runs longer than this are stopped so the demo terminates
    const MAX_FRAMES: u64 = 20_000;
    /// Jump when a fence is this many frames of travel away
    const LEAD_FRAMES: f32 = 8.0;

    /// Jump when the next fence is about to reach the rider
    fn autopilot_should_jump(state: &GameState) -> bool {
        let player = &state.player;
        let front = player.pos.x + player.width();
        state.obstacles.iter().any(|o| {
            let gap = o.x - front;
            gap > 0.0 && gap < state.speed * LEAD_FRAMES
        })
    }

    pub fn run(seed: u64, runs: u32) {
        let mut session = Session::new(
            Settings::default(),
            seed,
            MemoryStore::default(),
            RecordingHud::default(),
            ManualScheduler::new(),
        );
        let mut surface = RecordingSurface::new();

        for run in 1..=runs {
            session.start();
            while session.scheduler_mut().fire() {
                if autopilot_should_jump(session.state()) {
                    session.jump();
                }
                surface.clear_log();
                session.step(&mut surface);
                if session.state().time_ticks >= MAX_FRAMES {
                    session.end();
                }
            }
            debug_assert_eq!(session.phase(), GamePhase::GameOver);

            println!(
                "Run {}: score {} (best {}, {} draw calls in last frame)",
                run,
                session.hud().final_score,
                session.hud().high_score,
                surface.commands.len()
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Fence Rider (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - run with `trunk serve` for web version");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Seed: {}", seed);

    headless::run(seed, 3);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
