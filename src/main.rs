//! Frogway entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use frogway::consts::*;
    use frogway::renderer::{scene, RenderState, Uniforms};
    use frogway::settings::Settings;
    use frogway::sim::{sky, tick, Difficulty, GameEvent, GamePhase, GameState, TickInput};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        render_state: Option<RenderState>,
        accumulator: f32,
        last_time: f64,
        input: TickInput,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            let settings = Settings::load();
            let mut state = GameState::new(seed, settings.difficulty);
            // Sit in the menu until a difficulty is picked
            state.phase = GamePhase::Menu;
            Self {
                state,
                settings,
                render_state: None,
                accumulator: 0.0,
                last_time: 0.0,
                input: TickInput::default(),
            }
        }

        /// Start (or restart) a run with a fresh seed
        fn start(&mut self, difficulty: Difficulty) {
            self.settings.difficulty = difficulty;
            self.settings.save();
            let seed = js_sys::Date::now() as u64;
            self.state = GameState::new(seed, difficulty);
            self.accumulator = 0.0;
            self.input = TickInput::default();
            log::info!("Game started: {} (seed {seed})", difficulty.as_str());
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input;
                let events = tick(&mut self.state, &input, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input.move_dir = None;

                for event in events {
                    self.handle_event(event);
                }
            }
        }

        fn handle_event(&mut self, event: GameEvent) {
            match event {
                GameEvent::HeroUnlocked => {
                    if let Some(btn) = document().get_element_by_id("hero-btn") {
                        let _ = btn.set_attribute("class", "");
                    }
                }
                GameEvent::ShieldSaved => log::info!("Shield absorbed a hit"),
                GameEvent::GameOver { score } => log::info!("Run ended with score {score}"),
                GameEvent::CoinCollected { .. } | GameEvent::PowerUpActivated { .. } => {}
            }
        }

        /// Render the current frame
        fn render(&mut self, time: f64) {
            let Some(ref mut render_state) = self.render_state else {
                return;
            };
            let anim_time = (time / 1000.0) as f32;
            let vertices = scene::build_frame(
                &self.state,
                self.settings.use_hero && self.state.hero_unlocked,
                anim_time,
            );
            let lighting = sky::lighting(self.state.sky_phase);
            let view_proj =
                scene::view_proj(&self.state, self.settings.camera, render_state.aspect());
            let uniforms = Uniforms::new(view_proj, &lighting);

            match render_state.render(&vertices, &uniforms, lighting.sky_color) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    render_state.resize(render_state.size.0, render_state.size.1);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let document = document();

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&self.state.score.to_string()));
            }

            // Start menu only shows before the first run
            if let Some(el) = document.get_element_by_id("start-menu") {
                let _ = el.set_attribute(
                    "class",
                    if self.state.phase == GamePhase::Menu {
                        ""
                    } else {
                        "hidden"
                    },
                );
            }

            if let Some(el) = document.get_element_by_id("game-over") {
                if self.state.phase == GamePhase::GameOver {
                    let _ = el.set_attribute("class", "");
                    if let Some(score_el) = document.get_element_by_id("final-score") {
                        score_el.set_text_content(Some(&self.state.score.to_string()));
                    }
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }

            // Power-up banner follows the sim-owned notification
            if let Some(el) = document.get_element_by_id("power-up-notice") {
                if let Some(n) = &self.state.notification {
                    el.set_text_content(Some(n.kind.banner_text()));
                    if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
                        let style = html.style();
                        let _ = style.set_property("color", n.kind.banner_color());
                        let _ = style.set_property("opacity", &format!("{:.2}", n.opacity()));
                    }
                } else {
                    el.set_text_content(None);
                }
            }
        }
    }

    fn document() -> web_sys::Document {
        web_sys::window()
            .expect("no window")
            .document()
            .expect("no document")
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Frogway starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_keyboard(game.clone());
        setup_menu_buttons(game.clone());
        setup_toggle_buttons(game.clone());

        request_animation_frame(game);

        log::info!("Frogway running!");
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        use frogway::sim::Direction;

        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let direction = match event.key().as_str() {
                "ArrowUp" | "w" | "W" => Some(Direction::Up),
                "ArrowDown" | "s" | "S" => Some(Direction::Down),
                "ArrowLeft" | "a" | "A" => Some(Direction::Left),
                "ArrowRight" | "d" | "D" => Some(Direction::Right),
                _ => None,
            };
            if let Some(direction) = direction {
                event.prevent_default();
                game.borrow_mut().input.move_dir = Some(direction);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_menu_buttons(game: Rc<RefCell<Game>>) {
        let document = document();

        for (id, difficulty) in [
            ("btn-easy", Difficulty::Easy),
            ("btn-normal", Difficulty::Normal),
            ("btn-hard", Difficulty::Hard),
        ] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    game.borrow_mut().start(difficulty);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        // Restart reuses the last difficulty
        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let difficulty = game.borrow().settings.difficulty;
                game.borrow_mut().start(difficulty);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_toggle_buttons(game: Rc<RefCell<Game>>) {
        let document = document();

        if let Some(btn) = document.get_element_by_id("camera-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                g.settings.camera = g.settings.camera.toggled();
                g.settings.save();
                log::info!("Camera: {}", g.settings.camera.as_str());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Hidden until the unlock event reveals it
        if let Some(btn) = document.get_element_by_id("hero-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                if g.state.hero_unlocked {
                    g.settings.use_hero = !g.settings.use_hero;
                    g.settings.save();
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render(time);
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Frogway (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    // Smoke-run a short session so the native binary does something useful
    use frogway::consts::SIM_DT;
    use frogway::sim::{tick, Difficulty, GameState, TickInput};

    let mut state = GameState::new(0xF406, Difficulty::Normal);
    let input = TickInput::default();
    for _ in 0..1200 {
        for event in tick(&mut state, &input, SIM_DT) {
            log::info!("event: {event:?}");
        }
    }
    println!(
        "Simulated 10s: phase {:?}, log at z={:.1}",
        state.phase, state.log.z
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
