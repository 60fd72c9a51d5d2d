use macroquad::prelude::*;

use snake_canvas::input::command_for_key;
use snake_canvas::{Command, GameConfig, Session};

mod logging;
mod render;
mod ui;

fn window_conf() -> Conf {
    // runs before the logger exists, so a bad config is reported from main
    let config = GameConfig::load_or_default();
    let (window_width, window_height) = render::window_size(config.canvas_width, config.canvas_height);
    Conf {
        window_title: "Snake".to_owned(),
        window_width,
        window_height,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    logging::init();

    let config = GameConfig::load_or_default();
    let seed = (macroquad::miniquad::date::now() * 1000.0) as u64;
    log::info!(
        "{}x{} board, {} difficulty, seed {seed}",
        config.grid().width,
        config.grid().height,
        config.difficulty
    );
    let mut session = Session::new(&config, seed);
    let cell = config.cell_size as f32;

    loop {
        let now = get_time();

        let keys: Vec<Command> = get_keys_pressed().into_iter().filter_map(command_for_key).collect();
        for cmd in keys {
            session.handle(cmd, now);
        }
        session.update(now);

        clear_background(render::BACKGROUND);
        let layout = render::Layout::new(session.game().rules().grid, cell);
        render::draw_board(session.game(), &layout);

        let mut clicks = ui::control_bar(&session, &layout);
        if let Some(notice) = session.notice() {
            if ui::game_over_modal(notice, &layout) {
                clicks.push(Command::Dismiss);
            }
        }
        for cmd in clicks {
            session.handle(cmd, now);
        }

        next_frame().await;
    }
}
