use easel_app::headless_runner::run_scenario;
use easel_app::{App, Color, FontRegistry};
use easel_demo::{config, BALL_RADIUS, BALL_SPEED, FRAMERATE, WINDOW_HEIGHT, WINDOW_WIDTH};

fn demo_app() -> App<easel_demo::Ball> {
    App::new(config().with_fonts(FontRegistry::empty())).unwrap()
}

#[test]
fn window_matches_demo_constants() {
    let app = demo_app();
    assert_eq!(app.canvas().width(), WINDOW_WIDTH);
    assert_eq!(app.canvas().height(), WINDOW_HEIGHT);
    assert_eq!(app.canvas().framerate(), FRAMERATE);
    assert_eq!(app.canvas().framerate(), 100);
    assert_eq!(app.canvas().title(), "graphics window");
}

#[test]
fn holding_d_moves_right_until_the_edge() {
    let mut app = demo_app();
    app.key_press("d");

    let mut previous = app.state().x;
    for _ in 0..400 {
        app.tick();
        let x = app.state().x;
        if previous + BALL_RADIUS < WINDOW_WIDTH as f32 {
            assert_eq!(x, previous + BALL_SPEED);
        } else {
            assert_eq!(x, previous);
        }
        previous = x;
    }

    assert_eq!(app.state().x, WINDOW_WIDTH as f32 - BALL_RADIUS);
    assert_eq!(app.state().y, WINDOW_HEIGHT as f32 / 2.0);
}

#[test]
fn releasing_the_key_stops_the_ball() {
    let mut app = demo_app();
    app.key_press("s");
    for _ in 0..10 {
        app.tick();
    }
    app.key_release("s");
    app.tick();
    app.tick();
    assert_eq!(app.state().y, 400.0 + 10.0 * BALL_SPEED);
}

#[test]
fn frame_paints_ball_over_white_background() {
    let mut app = demo_app();
    app.tick();

    let canvas = app.canvas();
    let center = canvas.pixel(400, 400).unwrap();
    assert_eq!(center.to_rgba8(), Color::new(0.0, 0.3, 0.0, 1.0).to_rgba8());
    assert_eq!(canvas.pixel(10, 10), Some(Color::WHITE));
    // Between the dark disc and the black outline the white fill shows
    let ring = canvas.pixel(400, 400 - 19).unwrap();
    assert!(ring.r > 0.8 && ring.g > 0.8 && ring.b > 0.8, "ring {:?}", ring);
}

#[test]
fn scripted_session_moves_diagonally() {
    let mut app = demo_app();
    let report = run_scenario(
        &mut app,
        r#"{"steps": [
            {"type": "key_down", "key": "w"},
            {"type": "key_down", "key": "a"},
            {"type": "tick", "frames": 25},
            {"type": "key_up", "key": "w"},
            {"type": "tick", "frames": 5},
            {"type": "close"}
        ]}"#,
    )
    .unwrap();

    assert_eq!(report.frames_run, 30);
    assert_eq!(report.frames_presented, 30);
    assert_eq!(app.state().x, 400.0 - 30.0 * BALL_SPEED);
    assert_eq!(app.state().y, 400.0 - 25.0 * BALL_SPEED);
}
