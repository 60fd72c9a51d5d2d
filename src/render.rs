use ::rand::Rng;
use macroquad::prelude::*;

use snake_canvas::{Cell, Game, Grid, Phase};

pub const MARGIN: f32 = 8.0;
pub const BAR_HEIGHT: f32 = 44.0;

pub const BACKGROUND: Color = Color::new(0.08, 0.09, 0.1, 1.0);
const BOARD: Color = Color::new(0.13, 0.14, 0.16, 1.0);
const SNAKE_HEAD: Color = Color::new(0.18, 0.8, 0.443, 1.0); // #2ecc71
const SNAKE_BODY: Color = Color::new(0.153, 0.682, 0.376, 1.0); // #27ae60
const SNAKE_OUTLINE: Color = Color::new(0.129, 0.588, 0.325, 1.0); // #219653
const FOOD: Color = Color::new(0.906, 0.298, 0.235, 1.0); // #e74c3c
const HINT: Color = Color::new(0.85, 0.85, 0.85, 0.9);

/// Where the board and the control bar sit on screen this frame.
pub struct Layout {
    pub board: Rect,
    pub bar: Rect,
    pub cell: f32,
}

impl Layout {
    /// Centres a board of `cell`-sized squares with the control bar below it.
    pub fn new(grid: Grid, cell: f32) -> Self {
        let board_w = grid.width as f32 * cell;
        let board_h = grid.height as f32 * cell;
        let off_x = ((screen_width() - board_w) * 0.5).max(MARGIN);
        let off_y = ((screen_height() - board_h - BAR_HEIGHT) * 0.5).max(MARGIN);
        Self {
            board: Rect::new(off_x, off_y, board_w, board_h),
            bar: Rect::new(off_x, off_y + board_h, board_w, BAR_HEIGHT),
            cell,
        }
    }

    fn cell_rect(&self, c: Cell) -> Rect {
        Rect::new(
            self.board.x + c.x as f32 * self.cell,
            self.board.y + c.y as f32 * self.cell,
            self.cell,
            self.cell,
        )
    }
}

pub fn window_size(canvas_width: u32, canvas_height: u32) -> (i32, i32) {
    let w = canvas_width as f32 + 2.0 * MARGIN;
    let h = canvas_height as f32 + BAR_HEIGHT + 2.0 * MARGIN;
    (w as i32, h as i32)
}

pub fn draw_board<R: Rng>(game: &Game<R>, layout: &Layout) {
    let b = layout.board;
    draw_rectangle(b.x, b.y, b.w, b.h, BOARD);

    for (i, c) in game.snake().iter().enumerate() {
        let r = layout.cell_rect(*c);
        let fill = if i == 0 { SNAKE_HEAD } else { SNAKE_BODY };
        draw_rectangle(r.x, r.y, r.w, r.h, fill);
        draw_rectangle_lines(r.x, r.y, r.w, r.h, 1.0, SNAKE_OUTLINE);
    }

    if let Some(food) = game.food() {
        let r = layout.cell_rect(food);
        let half = layout.cell * 0.5;
        draw_circle(r.x + half, r.y + half, half, FOOD);
    }

    let hint = match game.phase() {
        Phase::NotStarted => Some("Press Start or Enter"),
        Phase::Paused => Some("Paused"),
        _ => None,
    };
    if let Some(text) = hint {
        let m = measure_text(text, None, 24, 1.0);
        draw_text(text, b.x + (b.w - m.width) * 0.5, b.y + b.h * 0.5, 24.0, HINT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_fits_board_bar_and_margins() {
        assert_eq!(window_size(400, 400), (416, 460));
        assert_eq!(window_size(200, 300), (216, 360));
    }
}
