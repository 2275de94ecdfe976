//! Pixel Dash entry point
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

    use pixel_dash::consts::*;
    use pixel_dash::renderer::{RenderState, frame_vertices};
    use pixel_dash::sim::{GamePhase, GameState, TickInput, tick};

    /// Held state of the four directional keys, polled once per substep
    #[derive(Debug, Clone, Copy, Default)]
    struct KeyState {
        left: bool,
        right: bool,
        up: bool,
        down: bool,
    }

    impl KeyState {
        /// Per-axis deltas from the opposed key pairs
        fn axes(&self) -> (i32, i32) {
            (
                self.right as i32 - self.left as i32,
                self.down as i32 - self.up as i32,
            )
        }

        /// Returns false if the key is not a directional key
        fn set(&mut self, key: &str, held: bool) -> bool {
            match key {
                "ArrowLeft" => self.left = held,
                "ArrowRight" => self.right = held,
                "ArrowUp" => self.up = held,
                "ArrowDown" => self.down = held,
                _ => return false,
            }
            true
        }
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        accumulator: f32,
        last_time: f64,
        keys: KeyState,
        // Track phase for transition logging
        last_phase: GamePhase,
        // Set by the quit command; stops the frame loop
        quit: bool,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                state: GameState::new(seed),
                render_state: None,
                accumulator: 0.0,
                last_time: 0.0,
                keys: KeyState::default(),
                last_phase: GamePhase::Playing,
                quit: false,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let (dx, dy) = self.keys.axes();
                let input = TickInput { dx, dy };
                tick(&mut self.state, &input);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }

            let current_phase = self.state.phase;
            if current_phase != self.last_phase {
                if current_phase == GamePhase::GameOver {
                    log::info!(
                        "Game over on tick {} (score {})",
                        self.state.time_ticks,
                        self.state.player.score
                    );
                }
                self.last_phase = current_phase;
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = frame_vertices(&self.state);
                match render_state.render(&vertices) {
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
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            // Update score
            if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.state.player.score.to_string()));
            }

            // Show/hide game over
            if let Some(el) = document.get_element_by_id("game-over") {
                if self.state.phase == GamePhase::GameOver {
                    let _ = el.set_attribute("class", "");
                    if let Some(score_el) = document.get_element_by_id("final-score") {
                        score_el.set_text_content(Some(&self.state.player.score.to_string()));
                    }
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }

        /// Reset to a fresh session
        fn restart(&mut self, seed: u64) {
            self.state = GameState::new(seed);
            self.accumulator = 0.0;
            self.keys = KeyState::default();
            self.last_phase = GamePhase::Playing;
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Pixel Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
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

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));

        log::info!("Game initialized with seed: {}", seed);

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

        // Set up input handlers
        setup_input_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Pixel Dash running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key press: directional keys latch on, R restarts, Q quits
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                if g.keys.set(&key, true) {
                    event.prevent_default();
                    return;
                }
                match key.as_str() {
                    "r" | "R" => {
                        if g.state.phase == GamePhase::GameOver {
                            let seed = js_sys::Date::now() as u64;
                            g.restart(seed);
                            log::info!("Game restarted with seed: {}", seed);
                        }
                    }
                    "q" | "Q" => {
                        g.quit = true;
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key release
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                game.borrow_mut().keys.set(&event.key(), false);
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.update_hud();

            if g.quit {
                // Browsers cannot end the process; park the loop instead
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    if let Some(el) = document.get_element_by_id("quit-notice") {
                        let _ = el.set_attribute("class", "");
                    }
                }
                log::info!("Session ended by player (score {})", g.state.player.score);
                return;
            }
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
    log::info!("Pixel Dash (native) starting...");
    log::info!("Native mode requires winit integration - run with `trunk serve` for web version");

    // Run tests
    println!("\nRunning collision tests...");
    test_cell_overlap();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn test_cell_overlap() {
    use glam::IVec2;
    use pixel_dash::consts::CELL_SIZE;
    use pixel_dash::sim::cells_overlap;

    let player = IVec2::new(400, 300);
    assert!(
        cells_overlap(player, IVec2::new(400 + CELL_SIZE - 1, 300)),
        "Adjacent-overlapping squares should collide"
    );
    assert!(
        !cells_overlap(player, IVec2::new(400 + CELL_SIZE, 300)),
        "Edge-touching squares should not collide"
    );
    println!("✓ Cell overlap tests passed!");
}
