//! Astro Hop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use astro_hop::consts::*;
    use astro_hop::geometry::vertex::colors;
    use astro_hop::geometry::{AsteroidMesh, AsteroidParams};
    use astro_hop::sim::{FixedStep, GameEvent, GameState, TickInput, tick};
    use astro_hop::{GameConfig, HighScores};

    /// Visible world height (playfield plus a margin above and below)
    const VIEW_HEIGHT: f32 = 7.0;

    fn css(c: [f32; 4]) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            (c[0] * 255.0) as u8,
            (c[1] * 255.0) as u8,
            (c[2] * 255.0) as u8,
            c[3]
        )
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        stepper: FixedStep,
        input: TickInput,
        last_time: f64,
        ctx: CanvasRenderingContext2d,
        size: (f32, f32),
        asteroid: AsteroidMesh,
        high_scores: HighScores,
    }

    impl Game {
        fn new(config: GameConfig, seed: u64, ctx: CanvasRenderingContext2d, size: (f32, f32)) -> Self {
            let asteroid = AsteroidMesh::generate(AsteroidParams::default());
            log::info!("Asteroid mesh: {} vertices", asteroid.vertex_count());
            Self {
                state: GameState::new(config, seed),
                stepper: FixedStep::new(),
                input: TickInput::default(),
                last_time: 0.0,
                ctx,
                size,
                asteroid,
                high_scores: HighScores::load(),
            }
        }

        /// Space / tap: jump while playing, restart after game over
        fn press(&mut self) {
            if self.state.is_over() {
                self.input.restart = true;
            } else {
                self.input.jump = true;
            }
        }

        /// Run simulation ticks and the spawn timer
        fn update(&mut self, dt: f32, frame_ms: f64) {
            // Same clamp the stepper applies, so a backgrounded tab resumes calmly
            self.state.elapse(frame_ms.min((MAX_FRAME_DT * 1000.0) as f64));

            let steps = self.stepper.advance(dt);
            for _ in 0..steps {
                tick(&mut self.state, &self.input);

                // Clear one-shot inputs after processing
                self.input.jump = false;
                self.input.restart = false;
            }

            for event in self.state.drain_events() {
                match event {
                    GameEvent::GameOver { score } => {
                        let timestamp = js_sys::Date::now();
                        if let Some(rank) =
                            self.high_scores.add_score(score, self.state.time_ticks, timestamp)
                        {
                            log::info!("New high score #{}: {}", rank, score);
                            self.high_scores.save();
                        }
                    }
                    GameEvent::Restarted { .. } => self.stepper.reset(),
                    _ => {}
                }
            }
        }

        fn to_screen(&self, x: f32, y: f32) -> (f64, f64) {
            let scale = self.size.1 / VIEW_HEIGHT;
            let sx = self.size.0 / 2.0 + x * scale;
            let sy = self.size.1 / 2.0 - y * scale;
            (sx as f64, sy as f64)
        }

        /// Render the current frame
        fn render(&self) {
            let ctx = &self.ctx;
            let (w, h) = self.size;
            let scale = (h / VIEW_HEIGHT) as f64;

            ctx.set_fill_style_str(&css(colors::BACKGROUND));
            ctx.fill_rect(0.0, 0.0, w as f64, h as f64);

            // Floor and ceiling
            ctx.set_fill_style_str(&css(colors::BOUNDARY));
            for y in [CEILING, FLOOR] {
                let (x0, sy) = self.to_screen(-5.0, y);
                ctx.fill_rect(x0, sy - 0.05 * scale, 10.0 * scale, 0.1 * scale);
            }

            // Asteroid pairs, projected onto the XY plane
            ctx.set_fill_style_str(&css(colors::ASTEROID));
            ctx.set_stroke_style_str(&css(colors::ASTEROID_RIM));
            let gap = self.state.config.obstacle_gap;
            for obstacle in self.state.field.iter() {
                let (top, bottom) = obstacle.barrier_centers(gap);
                for cy in [top, bottom] {
                    for [a, b, c] in self.asteroid.triangles() {
                        let pa = self.to_screen(obstacle.x + a.x, cy + a.y);
                        let pb = self.to_screen(obstacle.x + b.x, cy + b.y);
                        let pc = self.to_screen(obstacle.x + c.x, cy + c.y);
                        ctx.begin_path();
                        ctx.move_to(pa.0, pa.1);
                        ctx.line_to(pb.0, pb.1);
                        ctx.line_to(pc.0, pc.1);
                        ctx.close_path();
                        ctx.fill();
                        ctx.stroke();
                    }
                }
            }

            // Craft: body plus exhaust, nose pointing right
            let (cx, cy) = self.to_screen(CRAFT_X, self.state.craft.position());
            ctx.set_fill_style_str(&css(colors::CRAFT));
            ctx.fill_rect(cx - 0.4 * scale, cy - 0.15 * scale, 0.8 * scale, 0.3 * scale);
            ctx.set_fill_style_str(&css(colors::EXHAUST));
            ctx.fill_rect(cx - 0.6 * scale, cy - 0.1 * scale, 0.2 * scale, 0.2 * scale);
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.state.score.to_string()));
            }

            if let Some(el) = document.query_selector("#hud-best .hud-value").ok().flatten() {
                let best = self.high_scores.top_score().unwrap_or(0);
                el.set_text_content(Some(&best.to_string()));
            }

            if let Some(el) = document.get_element_by_id("game-over") {
                let class = if self.state.is_over() { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Astro Hop starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("context lookup failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let config = GameConfig::load();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(
            config,
            seed,
            ctx,
            (width as f32, height as f32),
        )));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone());
        request_animation_frame(game);

        log::info!("Astro Hop running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                match event.code().as_str() {
                    "Space" => {
                        event.prevent_default();
                        game.borrow_mut().press();
                    }
                    "KeyI" => {
                        let mut g = game.borrow_mut();
                        g.input.idle_mode = !g.input.idle_mode;
                        log::info!("Idle mode: {}", g.input.idle_mode);
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.prevent_default();
                game.borrow_mut().press();
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
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

            let frame_ms = if g.last_time > 0.0 {
                time - g.last_time
            } else {
                (SIM_DT * 1000.0) as f64
            };
            g.last_time = time;

            g.update((frame_ms / 1000.0) as f32, frame_ms);
            g.render();
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
    use astro_hop::GameConfig;

    env_logger::init();
    log::info!("Astro Hop (native) starting...");
    log::info!("Native mode runs a headless autopilot - run with `trunk serve` for the web version");

    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::load_from_path(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    let seconds: u32 = std::env::args()
        .nth(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(60);

    headless_run(config, seconds);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Fly the autopilot for `seconds` of simulated time at 60 fps
#[cfg(not(target_arch = "wasm32"))]
fn headless_run(config: astro_hop::GameConfig, seconds: u32) {
    use astro_hop::consts::SIM_DT;
    use astro_hop::geometry::{AsteroidMesh, AsteroidParams};
    use astro_hop::sim::{FixedStep, GameEvent, GameState, TickInput, tick};

    let mesh = AsteroidMesh::generate(AsteroidParams::default());
    log::info!(
        "Asteroid mesh: {} vertices, bounding radius {:.3}",
        mesh.vertex_count(),
        mesh.bounding_radius()
    );

    let mut state = GameState::new(config, 0x5eed);
    let mut stepper = FixedStep::new();
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    let frames = seconds * 60;
    for _ in 0..frames {
        state.elapse((SIM_DT * 1000.0) as f64);
        for _ in 0..stepper.advance(SIM_DT) {
            tick(&mut state, &input);
        }
        for event in state.drain_events() {
            if let GameEvent::Scored { id, score } = event {
                log::debug!("Obstacle {} passed, score {}", id, score);
            }
        }
        if state.is_over() {
            break;
        }
    }

    let snapshot = state.snapshot();
    match serde_json::to_string(&snapshot) {
        Ok(json) => log::info!("Final snapshot: {}", json),
        Err(e) => log::warn!("Could not serialize snapshot: {}", e),
    }
    println!(
        "✓ Autopilot finished: score {} after {} ticks ({})",
        snapshot.score,
        snapshot.tick,
        if snapshot.is_over { "crashed" } else { "alive" }
    );
}
