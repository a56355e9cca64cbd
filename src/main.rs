//! Grid Snake entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlButtonElement, HtmlCanvasElement, HtmlInputElement};

    use grid_snake::input::{Command, Controls};
    use grid_snake::renderer::CanvasRenderer;
    use grid_snake::sim::{Direction, Frame, Game, GamePhase, SpeedLabel};
    use grid_snake::{HighScore, Settings};

    /// Page state: the game plus everything it draws into
    struct App {
        game: Game,
        renderer: Option<CanvasRenderer>,
        document: Document,
        /// Pending requestAnimationFrame id
        raf_handle: Option<i32>,
    }

    impl App {
        fn render(&self) {
            if let Some(renderer) = &self.renderer {
                renderer.render(self.game.state());
            }
        }

        /// Sync score labels, button states and the speed control
        fn update_hud(&self) {
            let state = self.game.state();
            let doc = &self.document;

            if let Some(el) = doc.get_element_by_id("score") {
                el.set_text_content(Some(&state.score.to_string()));
            }
            if let Some(el) = doc.get_element_by_id("high-score") {
                el.set_text_content(Some(&self.game.high_score().best.to_string()));
            }

            let controls = Controls::for_state(state);
            for (id, enabled) in [
                ("start-btn", controls.start),
                ("pause-btn", controls.pause),
                ("reset-btn", controls.reset),
            ] {
                if let Some(btn) = button(doc, id) {
                    btn.set_disabled(!enabled);
                }
            }

            if let Some(slider) = slider(doc) {
                slider.set_disabled(!controls.speed);
                slider.set_value(&state.speed.to_string());
            }
            if let Some(el) = doc.get_element_by_id("speed-value") {
                el.set_text_content(Some(SpeedLabel::for_delay(state.speed).as_str()));
            }
        }
    }

    fn button(doc: &Document, id: &str) -> Option<HtmlButtonElement> {
        doc.get_element_by_id(id)?.dyn_into().ok()
    }

    fn slider(doc: &Document) -> Option<HtmlInputElement> {
        doc.get_element_by_id("speed-slider")?.dyn_into().ok()
    }

    /// Milliseconds on the same clock as requestAnimationFrame timestamps
    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    /// Optional JSON override in `<script id="snake-settings" type="application/json">`
    fn load_settings(doc: &Document) -> Settings {
        let json = doc
            .get_element_by_id("snake-settings")
            .and_then(|el| el.text_content());
        Settings::from_json_or_default(json.as_deref())
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
        }

        log::info!("Grid Snake starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document, cannot start");
            return;
        };

        let settings = load_settings(&document);
        let renderer = document
            .get_element_by_id("gameCanvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .and_then(|canvas| CanvasRenderer::new(&canvas, settings.geometry()));
        if renderer.is_none() {
            log::warn!("No drawable #gameCanvas, running without rendering");
        }

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(settings, HighScore::load(), seed);
        log::info!("Game initialized with seed: {}", seed);

        let app = Rc::new(RefCell::new(App {
            game,
            renderer,
            document: document.clone(),
            raf_handle: None,
        }));

        setup_keyboard(&document, app.clone());
        setup_buttons(&document, app.clone());
        setup_speed_control(&document, app.clone());

        {
            let app = app.borrow();
            app.render();
            app.update_hud();
        }

        log::info!("Grid Snake ready");
    }

    /// Apply a command, then keep the frame loop in step with the phase
    fn dispatch(app: &Rc<RefCell<App>>, command: Command) {
        let mut a = app.borrow_mut();
        command.apply(&mut a.game, now_ms());

        let stopped = a.game.state().phase == GamePhase::Stopped;
        match (stopped, a.raf_handle) {
            (true, Some(handle)) => {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(handle);
                }
                a.raf_handle = None;
            }
            (false, None) => {
                drop(a);
                request_animation_frame(app.clone());
                a = app.borrow_mut();
            }
            _ => {}
        }

        a.render();
        a.update_hud();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback_app = app.clone();
        let closure = Closure::once(move |time: f64| {
            game_loop(callback_app, time);
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(handle) => app.borrow_mut().raf_handle = Some(handle),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        let frame: Frame = {
            let mut a = app.borrow_mut();
            a.raf_handle = None;
            let frame = a.game.frame(time);
            a.render();
            if frame.ticked {
                a.update_hud();
            }
            frame
        };

        if let Some(over) = frame.game_over {
            let a = app.borrow();
            if over.new_record {
                a.game.high_score().save();
            }
            a.update_hud();
            drop(a);

            let message = format!(
                "Game over!\nScore: {}\nHigh score: {}",
                over.score, over.high_score
            );
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&message);
            }
        }

        if frame.reschedule {
            request_animation_frame(app);
        }
    }

    fn setup_keyboard(document: &Document, app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let in_progress = app.borrow().game.state().in_progress();
            if let Some(command) = Command::from_key(&event.key(), in_progress) {
                dispatch(&app, command);
            }
        });
        let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(document: &Document, app: Rc<RefCell<App>>) {
        let bindings = [
            ("start-btn", Command::Start),
            ("pause-btn", Command::TogglePause),
            ("reset-btn", Command::Reset),
            ("up-btn", Command::Turn(Direction::Up)),
            ("down-btn", Command::Turn(Direction::Down)),
            ("left-btn", Command::Turn(Direction::Left)),
            ("right-btn", Command::Turn(Direction::Right)),
        ];
        for (id, command) in bindings {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing control #{id}");
                continue;
            };
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                dispatch(&app, command);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_speed_control(document: &Document, app: Rc<RefCell<App>>) {
        let Some(input) = slider(document) else {
            log::warn!("Missing control #speed-slider");
            return;
        };
        let source = input.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Ok(value) = source.value().trim().parse::<i64>() else {
                return;
            };
            let mut a = app.borrow_mut();
            if a.game.set_speed(value).is_some() {
                a.render();
                a.update_hud();
            }
        });
        let _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Grid Snake (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    let settings =
        grid_snake::Settings::from_json_or_default(std::env::var("GRID_SNAKE_SETTINGS").ok().as_deref());
    autopilot::run(settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless demo: a greedy bot plays one round at 60 fps simulated time
#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use grid_snake::sim::{Direction, Game, GameState};
    use grid_snake::{HighScore, Settings};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const MAX_FRAMES: u32 = 200_000;

    /// Safe direction closest to the food, if any
    fn choose(state: &GameState, settings: &Settings) -> Option<Direction> {
        let grid = settings.grid();
        let head = state.snake.head();
        let committed = state.direction.committed();
        let target = state.food?;
        Direction::ALL
            .into_iter()
            .filter(|d| !committed.is_opposite(*d))
            .map(|d| (d, head.step(d)))
            .filter(|(_, cell)| grid.contains(*cell) && !state.snake.contains(*cell))
            .min_by_key(|(_, cell)| (cell.x - target.x).abs() + (cell.y - target.y).abs())
            .map(|(d, _)| d)
    }

    pub fn run(settings: Settings) {
        let mut game = Game::new(settings, HighScore::load(), 0x5EED);
        game.start(0.0);

        let mut now = 0.0;
        for _ in 0..MAX_FRAMES {
            now += FRAME_MS;
            if let Some(direction) = choose(game.state(), game.settings()) {
                game.request_direction(direction);
            }
            let frame = game.frame(now);
            if frame.ate_food {
                log::debug!(
                    "Ate food: score {}, length {}, speed {} ms",
                    game.state().score,
                    game.state().snake.len(),
                    game.state().speed
                );
            }
            if let Some(over) = frame.game_over {
                println!(
                    "Game over ({:?}) after {:.1}s: score {}, length {}",
                    over.cause,
                    now / 1000.0,
                    over.score,
                    game.state().snake.len()
                );
                if over.new_record {
                    game.high_score().save();
                }
                return;
            }
        }
        println!("Stopped after {MAX_FRAMES} frames: score {}", game.state().score);
    }
}
