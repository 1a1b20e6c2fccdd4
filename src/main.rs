// src/main.rs
use nannou::prelude::*;
use rand::Rng;
use std::time::Instant;

use wirevis::{config::Config, draw::DrawParams, models::SceneSpec, views::Scene};

// Per-keypress nudge amounts for scene-wide transforms
const TRANSLATE_STEP: f32 = 20.0;
const SCALE_UP_STEP: f32 = 1.1;
const SCALE_DOWN_STEP: f32 = 0.9;

struct Model {
    // Core components:
    scene: Scene,
    params: DrawParams,

    // Animation state:
    dt_speed_factor: f32,
    spinning: bool,

    random: rand::rngs::ThreadRng,

    // FPS
    last_update: Instant,
    fps: f32,

    debug_flag: bool,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Load the scene description
    let scene_path = config.resolve_scene_path();
    let scene_spec = SceneSpec::load(&scene_path).expect("Failed to load scene file");

    // Create window
    app.new_window()
        .title("wirevis 0.2.1")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .unwrap();

    let params = DrawParams {
        stroke_weight: config.style.default_stroke_weight,
        ..Default::default()
    };
    let scene = scene_spec.build(&params);
    println!(
        "Loaded scene \"{}\" with {} shapes from {}",
        scene_spec.name,
        scene.len(),
        scene_path.display()
    );

    Model {
        scene,
        params,

        dt_speed_factor: config.speed.dt_speed_factor,
        spinning: true,

        random: rand::thread_rng(),

        // FPS
        last_update: Instant::now(),
        fps: 0.0,

        debug_flag: false,
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        // Pause/resume the dt-driven spin
        Key::Space => {
            model.spinning = !model.spinning;
        }

        // Scene-wide transforms
        Key::Left => model.scene.translate(vec2(-TRANSLATE_STEP, 0.0)),
        Key::Right => model.scene.translate(vec2(TRANSLATE_STEP, 0.0)),
        Key::Up => model.scene.translate(vec2(0.0, TRANSLATE_STEP)),
        Key::Down => model.scene.translate(vec2(0.0, -TRANSLATE_STEP)),
        Key::Equals => model.scene.scale(SCALE_UP_STEP),
        Key::Minus => model.scene.scale(SCALE_DOWN_STEP),

        // Style
        Key::C => model.scene.toggle_center_markers(),
        Key::I => {
            let color_hsl = hsl(
                model.random.gen_range(0.0..=1.0),
                model.random.gen_range(0.2..=1.0),
                0.6,
            );
            model.params.color = Rgb::from(color_hsl);
        }
        Key::W => {
            model.params.color = rgb(1.0, 1.0, 1.0);
        }

        Key::P => {
            model.debug_flag = !model.debug_flag;
        }
        Key::Q => {
            app.quit();
        }
        _ => (),
    }
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    let dt = duration.as_secs_f32();

    // FPS calculation
    if model.debug_flag {
        model.fps = 1.0 / dt;
    }

    if model.spinning {
        model.scene.update(dt * model.dt_speed_factor);
    }
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    model.scene.draw(&draw, &model.params);

    if model.debug_flag {
        // Draw (+,+) axes
        draw.line()
            .points(pt2(0.0, 0.0), pt2(50.0, 0.0))
            .color(RED)
            .stroke_weight(1.0);
        draw.line()
            .points(pt2(0.0, 0.0), pt2(0.0, 50.0))
            .color(BLUE)
            .stroke_weight(1.0);

        // Visualize FPS (Optional)
        draw.text(&format!("FPS: {:.1}", model.fps))
            .x_y(0.0, 300.0)
            .color(RED);
    }

    draw.to_frame(app, &frame).unwrap();
}
