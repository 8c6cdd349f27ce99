//! Board rendering for the tic-tac-toe GUI

use crate::{Board, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the 3x3 grid
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Grid drawing area (inside the margin)
    grid_rect: Rect,
    hover_preview: bool,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            grid_rect: Rect::NOTHING,
            hover_preview: true,
        }
    }
}

impl BoardView {
    pub fn new(hover_preview: bool) -> Self {
        Self {
            hover_preview,
            ..Self::default()
        }
    }

    /// Render the board and return the clicked cell index if any
    ///
    /// `next` is `None` once the game is over; clicks are still reported so
    /// the game state decides what to ignore.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        highlighted: &[bool; TOTAL_CELLS],
        next: Option<Mark>,
    ) -> Option<usize> {
        let available_size = ui.available_size();
        let board_size = (available_size.x.min(available_size.y) - 20.0).clamp(120.0, MAX_BOARD_SIZE);

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());

        painter.rect_filled(response.rect, CornerRadius::same(6), BOARD_BG);
        self.layout(response.rect);

        self.draw_highlights(&painter, highlighted);
        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        let hovered = response
            .hover_pos()
            .and_then(|p| self.screen_to_board(p));

        if self.hover_preview {
            if let (Some(pos), Some(mark)) = (hovered, next) {
                if board.get_pos(pos).is_none() {
                    self.draw_mark(&painter, pos, mark, hover_preview(mark_color(mark)));
                }
            }
        }

        if response.clicked() {
            hovered.map(Pos::to_index)
        } else {
            None
        }
    }

    /// Recompute grid geometry for the allocated board rect
    fn layout(&mut self, rect: Rect) {
        self.grid_rect = rect.shrink(BOARD_MARGIN);
        self.cell_size = self.grid_rect.width() / BOARD_SIZE as f32;
    }

    /// Draw the two inner vertical and horizontal lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let min = self.grid_rect.min;
        let extent = self.grid_rect.width();

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            painter.line_segment(
                [min + Vec2::new(offset, 0.0), min + Vec2::new(offset, extent)],
                stroke,
            );

            // Horizontal line
            painter.line_segment(
                [min + Vec2::new(0.0, offset), min + Vec2::new(extent, offset)],
                stroke,
            );
        }
    }

    /// Tint the cells of the winning line
    fn draw_highlights(&self, painter: &Painter, highlighted: &[bool; TOTAL_CELLS]) {
        for (idx, &on) in highlighted.iter().enumerate() {
            if !on {
                continue;
            }
            let rect = self.cell_rect(Pos::from_index(idx)).shrink(GRID_LINE_WIDTH);
            painter.rect_filled(rect, CornerRadius::same(4), CELL_WIN_BG);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for (idx, cell) in board.cells().iter().enumerate() {
            if let Some(mark) = cell {
                self.draw_mark(painter, Pos::from_index(idx), *mark, mark_color(*mark));
            }
        }
    }

    /// Draw X as two strokes, O as a ring
    fn draw_mark(&self, painter: &Painter, pos: Pos, mark: Mark, color: Color32) {
        let center = self.board_to_screen(pos);
        let half = self.cell_size * MARK_SIZE_RATIO;
        let stroke = Stroke::new(self.cell_size * MARK_STROKE_RATIO, color);

        match mark {
            Mark::X => {
                painter.line_segment(
                    [center + Vec2::new(-half, -half), center + Vec2::new(half, half)],
                    stroke,
                );
                painter.line_segment(
                    [center + Vec2::new(half, -half), center + Vec2::new(-half, half)],
                    stroke,
                );
            }
            Mark::O => {
                painter.circle_stroke(center, half, stroke);
            }
        }
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.grid_rect.min
            + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        if !self.grid_rect.contains(screen_pos) || self.cell_size <= 0.0 {
            return None;
        }
        let relative = screen_pos - self.grid_rect.min;

        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to the screen coordinates of the cell center
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}

pub fn mark_color(mark: Mark) -> Color32 {
    match mark {
        Mark::X => MARK_X,
        Mark::O => MARK_O,
    }
}
