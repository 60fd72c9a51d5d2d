use ::rand::Rng;
use macroquad::prelude::*;

use snake_canvas::{Command, Difficulty, GameOverNotice, Phase, Session};

use crate::render::Layout;

const BUTTON_H: f32 = 28.0;
const GAP: f32 = 6.0;
const FONT: u16 = 16;

const IDLE: Color = Color::new(0.22, 0.24, 0.27, 1.0);
const HOVER: Color = Color::new(0.3, 0.33, 0.37, 1.0);
const SELECTED: Color = Color::new(0.153, 0.682, 0.376, 1.0);
const DISABLED: Color = Color::new(0.16, 0.17, 0.19, 1.0);
const BORDER: Color = Color::new(0.4, 0.42, 0.45, 1.0);
const SCORE: Color = Color::new(0.18, 0.8, 0.443, 1.0);

/// Immediate-mode button: draws itself and reports a left click.
fn button(rect: Rect, label: &str, enabled: bool, selected: bool) -> bool {
    let (mx, my) = mouse_position();
    let hovered = enabled && rect.contains(vec2(mx, my));
    let fill = if !enabled {
        DISABLED
    } else if selected {
        SELECTED
    } else if hovered {
        HOVER
    } else {
        IDLE
    };
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, fill);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, BORDER);

    let text_color = if enabled { WHITE } else { GRAY };
    let m = measure_text(label, None, FONT, 1.0);
    draw_text(
        label,
        rect.x + (rect.w - m.width) * 0.5,
        rect.y + (rect.h + m.offset_y) * 0.5,
        FONT as f32,
        text_color,
    );
    hovered && is_mouse_button_pressed(MouseButton::Left)
}

/// Start / pause buttons, the difficulty selector and the score.
/// Everything is disabled while the game-over notice is up.
pub fn control_bar<R: Rng>(session: &Session<R>, layout: &Layout) -> Vec<Command> {
    let mut commands = Vec::new();
    let blocked = session.notice().is_some();
    let game = session.game();
    let y = layout.bar.y + (layout.bar.h - BUTTON_H) * 0.5;
    let mut x = layout.bar.x;

    let start = Rect::new(x, y, 56.0, BUTTON_H);
    if button(start, "Start", !blocked && !game.in_progress(), false) {
        commands.push(Command::Start);
    }
    x += start.w + GAP;

    let pause_label = if game.phase() == Phase::Paused { "Resume" } else { "Pause" };
    let pause = Rect::new(x, y, 64.0, BUTTON_H);
    if button(pause, pause_label, !blocked && game.in_progress(), false) {
        commands.push(Command::TogglePause);
    }
    x += pause.w + GAP * 2.0;

    for difficulty in Difficulty::ALL {
        let r = Rect::new(x, y, 50.0, BUTTON_H);
        if button(r, difficulty.label(), !blocked, session.difficulty() == difficulty) {
            commands.push(Command::SetDifficulty(difficulty));
        }
        x += r.w + GAP;
    }

    let score = format!("Score: {}", game.score());
    let m = measure_text(&score, None, 18, 1.0);
    draw_text(
        &score,
        layout.bar.x + layout.bar.w - m.width,
        layout.bar.y + (layout.bar.h + m.offset_y) * 0.5,
        18.0,
        SCORE,
    );

    commands
}

/// Modal shown over the board; returns `true` once acknowledged.
pub fn game_over_modal(notice: &GameOverNotice, layout: &Layout) -> bool {
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), Color::new(0.0, 0.0, 0.0, 0.5));

    let b = layout.board;
    let w = (b.w - 40.0).min(280.0);
    let h = 110.0;
    let panel = Rect::new(b.x + (b.w - w) * 0.5, b.y + (b.h - h) * 0.5, w, h);
    draw_rectangle(panel.x, panel.y, panel.w, panel.h, Color::new(0.12, 0.13, 0.15, 1.0));
    draw_rectangle_lines(panel.x, panel.y, panel.w, panel.h, 2.0, BORDER);

    let message = notice.message();
    let m = measure_text(&message, None, 20, 1.0);
    draw_text(&message, panel.x + (panel.w - m.width) * 0.5, panel.y + 36.0, 20.0, WHITE);

    let ok = Rect::new(panel.x + (panel.w - 64.0) * 0.5, panel.y + panel.h - BUTTON_H - 14.0, 64.0, BUTTON_H);
    button(ok, "OK", true, false)
}
