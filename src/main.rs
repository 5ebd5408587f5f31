use macroquad::prelude::*;
use color_life::{
    FrameOutcome, GameState, MacroquadPresenter,
    config::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH},
};

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: WINDOW_WIDTH as i32,
        window_height: WINDOW_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut state = GameState::from_entropy();
    let mut presenter = MacroquadPresenter::new();

    // run_frame queues the drawing and sleeps; next_frame shows it
    while state.run_frame(&mut presenter) == FrameOutcome::Continue {
        next_frame().await;
    }
}
