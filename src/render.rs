use crate::data::ScoreMatrix;

// Palette lifted from the reference figure.
pub const FIGURE_BG: egui::Color32 = egui::Color32::from_rgb(0xF0, 0xF2, 0xF5);
pub const HIGHLIGHT_EDGE: egui::Color32 = egui::Color32::from_rgb(0xF7, 0x93, 0x1E);
pub const HIGHLIGHT_FILL: egui::Color32 = egui::Color32::from_rgb(0xFD, 0xE0, 0xC2);
pub const CAPTION_BLUE: egui::Color32 = egui::Color32::from_rgb(0x00, 0x72, 0xBC);
pub const ROW_IDX_TINT: egui::Color32 = egui::Color32::from_rgb(0xD0, 0xE0, 0xF0);
pub const COL_IDX_TINT: egui::Color32 = egui::Color32::from_rgb(0xFD, 0xE0, 0xC2);
pub const RESULT_TINT: egui::Color32 = egui::Color32::from_rgb(0xE0, 0xE0, 0xE0);

const CELL_BORDER: egui::Color32 = egui::Color32::from_rgb(0xCC, 0xCC, 0xCC);
const VALUE_GRAY: egui::Color32 = egui::Color32::from_rgb(0x80, 0x80, 0x80);
const LABEL_DARK: egui::Color32 = egui::Color32::from_rgb(0x30, 0x30, 0x30);
pub const ARROW_GRAY: egui::Color32 = egui::Color32::from_rgb(0x88, 0x88, 0x88);

/// Screen-space cell grid for one panel. Maps (row, col) to cell rects and
/// exposes per-row anchor points on the outer edges for the connecting arrows.
#[derive(Clone, Copy)]
pub struct Grid {
    rect: egui::Rect,
    rows: usize,
    cols: usize,
}

impl Grid {
    pub fn new(rect: egui::Rect, rows: usize, cols: usize) -> Self {
        Self { rect, rows, cols }
    }

    pub fn rect(&self) -> egui::Rect {
        self.rect
    }

    pub fn cell(&self, r: usize, c: usize) -> egui::Rect {
        let w = self.rect.width() / self.cols as f32;
        let h = self.rect.height() / self.rows as f32;
        egui::Rect::from_min_size(
            egui::pos2(
                self.rect.left() + c as f32 * w,
                self.rect.top() + r as f32 * h,
            ),
            egui::vec2(w, h),
        )
    }

    pub fn row_left(&self, r: usize) -> egui::Pos2 {
        egui::pos2(self.rect.left(), self.cell(r, 0).center().y)
    }

    pub fn row_right(&self, r: usize) -> egui::Pos2 {
        egui::pos2(self.rect.right(), self.cell(r, 0).center().y)
    }
}

pub fn draw_arrow(painter: &egui::Painter, start: egui::Pos2, end: egui::Pos2, color: egui::Color32) {
    let vec = end - start;
    let len = vec.length();
    if len < 1.0 {
        return;
    }

    // Main shaft
    painter.line_segment([start, end], egui::Stroke::new(2.0, color));

    // Arrow head (triangle)
    let head_len = (len * 0.15).clamp(5.0, 15.0);
    let dir = vec / len;
    let perp = egui::vec2(-dir.y, dir.x) * (head_len * 0.4);

    let tip = end;
    let base = end - dir * head_len;

    painter.add(egui::Shape::convex_polygon(
        vec![tip, base + perp, base - perp],
        color,
        egui::Stroke::NONE,
    ));
}

/// Titled 3x4 score grid with "Cls" column headers and "Data" row labels.
/// `highlight` marks a single cell with the sweep style.
pub fn draw_matrix_panel(
    painter: &egui::Painter,
    grid: &Grid,
    scores: &ScoreMatrix,
    title: &str,
    highlight: Option<(usize, usize)>,
) {
    draw_title(painter, grid, title);

    for c in 0..grid.cols {
        let x = grid.cell(0, c).center().x;
        painter.text(
            egui::pos2(x, grid.rect.top() - 4.0),
            egui::Align2::CENTER_BOTTOM,
            format!("Cls {}", c),
            egui::FontId::proportional(12.0),
            LABEL_DARK,
        );
    }
    for r in 0..grid.rows {
        painter.text(
            egui::pos2(grid.rect.left() - 8.0, grid.cell(r, 0).center().y),
            egui::Align2::RIGHT_CENTER,
            format!("Data {}", r),
            egui::FontId::proportional(12.0),
            LABEL_DARK,
        );
    }

    for r in 0..grid.rows {
        for c in 0..grid.cols {
            let cell = grid.cell(r, c);
            painter.rect(
                cell,
                0.0,
                egui::Color32::WHITE,
                egui::Stroke::new(1.0, CELL_BORDER),
            );
            painter.text(
                cell.center(),
                egui::Align2::CENTER_CENTER,
                format!("{:.1}", scores[(r, c)]),
                egui::FontId::proportional(18.0),
                VALUE_GRAY,
            );
        }
    }

    if let Some((r, c)) = highlight {
        draw_highlight(painter, grid.cell(r, c), scores[(r, c)]);
    }
}

/// Titled single-column box with a translucent tint, separators between rows
/// and centered values. `highlight_row` marks one row with the sweep style.
pub fn draw_vector_panel(
    painter: &egui::Painter,
    grid: &Grid,
    values: &[String],
    title: &str,
    tint: egui::Color32,
    highlight_row: Option<usize>,
) {
    draw_title(painter, grid, title);

    painter.rect(
        grid.rect,
        0.0,
        tint.gamma_multiply(0.3),
        egui::Stroke::new(2.0, egui::Color32::GRAY),
    );
    for r in 1..grid.rows {
        let cell = grid.cell(r, 0);
        painter.line_segment(
            [cell.left_top(), cell.right_top()],
            egui::Stroke::new(1.0, egui::Color32::GRAY.gamma_multiply(0.5)),
        );
    }

    if let Some(r) = highlight_row {
        painter.rect(
            grid.cell(r, 0),
            0.0,
            HIGHLIGHT_FILL.gamma_multiply(0.7),
            egui::Stroke::new(3.0, HIGHLIGHT_EDGE),
        );
    }

    for (r, txt) in values.iter().enumerate() {
        painter.text(
            grid.cell(r, 0).center(),
            egui::Align2::CENTER_CENTER,
            txt,
            egui::FontId::proportional(18.0),
            VALUE_GRAY,
        );
    }
}

fn draw_title(painter: &egui::Painter, grid: &Grid, title: &str) {
    painter.text(
        egui::pos2(grid.rect.center().x, grid.rect.top() - 22.0),
        egui::Align2::CENTER_BOTTOM,
        title,
        egui::FontId::proportional(15.0),
        LABEL_DARK,
    );
}

fn draw_highlight(painter: &egui::Painter, cell: egui::Rect, value: f32) {
    painter.rect(
        cell,
        0.0,
        HIGHLIGHT_FILL.gamma_multiply(0.7),
        egui::Stroke::new(3.0, HIGHLIGHT_EDGE),
    );
    // Repaint the value on top so the fill does not wash it out.
    painter.text(
        cell.center(),
        egui::Align2::CENTER_CENTER,
        format!("{:.1}", value),
        egui::FontId::proportional(18.0),
        LABEL_DARK,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(
            egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(400.0, 300.0)),
            3,
            4,
        )
    }

    #[test]
    fn cells_tile_the_grid_rect() {
        let g = grid();
        assert_eq!(g.cell(0, 0).min, g.rect().min);
        let last = g.cell(2, 3);
        assert!((last.max.x - g.rect().max.x).abs() < 1e-3);
        assert!((last.max.y - g.rect().max.y).abs() < 1e-3);
        assert!((g.cell(0, 0).width() - 100.0).abs() < 1e-3);
        assert!((g.cell(0, 0).height() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn row_anchors_sit_on_the_edges_in_order() {
        let g = grid();
        for r in 0..3 {
            assert_eq!(g.row_left(r).x, g.rect().left());
            assert_eq!(g.row_right(r).x, g.rect().right());
            assert_eq!(g.row_left(r).y, g.cell(r, 0).center().y);
        }
        assert!(g.row_left(0).y < g.row_left(1).y);
        assert!(g.row_left(1).y < g.row_left(2).y);
    }
}
