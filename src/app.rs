use eframe::egui;

use crate::data::{
    gather, row_indices, score_matrix, target_columns, ScoreMatrix, ValueVector, BATCH_SIZE,
    NUM_CLASSES,
};
use crate::render::{
    draw_arrow, draw_matrix_panel, draw_vector_panel, Grid, ARROW_GRAY, CAPTION_BLUE,
    COL_IDX_TINT, RESULT_TINT, ROW_IDX_TINT,
};

/// Seconds between highlight steps (the reference animation interval).
const STEP_INTERVAL: f32 = 1.2;
/// One highlight step per data row, plus two rest steps showing the result.
const CYCLE_LEN: usize = BATCH_SIZE + 2;
/// Cap on a single frame delta so a stalled window skips at most a fraction
/// of one step instead of fast-forwarding the sweep.
const MAX_FRAME_DT: f32 = 0.25;

const TITLE_STRIP: f32 = 56.0;
const CAPTION_STRIP: f32 = 72.0;
const ROW_LABEL_W: f32 = 56.0;

pub struct GatherApp {
    scores: ScoreMatrix,
    rows: [usize; BATCH_SIZE],
    targets: [usize; BATCH_SIZE],
    extracted: ValueVector,

    // Animation state
    step: usize,
    elapsed: f32,
    paused: bool,
}

impl Default for GatherApp {
    fn default() -> Self {
        let scores = score_matrix();
        let targets = target_columns();
        let extracted = gather(&scores, &targets);
        Self {
            scores,
            rows: row_indices(),
            targets,
            extracted,
            step: 0,
            elapsed: 0.0,
            paused: false,
        }
    }
}

impl GatherApp {
    /// Accumulate frame time and advance the highlight cycle. Frozen while
    /// paused; long frames may advance more than one step.
    fn advance(&mut self, dt: f32) {
        if self.paused {
            return;
        }
        self.elapsed += dt;
        while self.elapsed >= STEP_INTERVAL {
            self.elapsed -= STEP_INTERVAL;
            self.step = (self.step + 1) % CYCLE_LEN;
        }
    }

    fn toggle_paused(&mut self) {
        self.paused = !self.paused;
        log::debug!("animation {}", if self.paused { "paused" } else { "resumed" });
    }

    /// The data row currently swept, or `None` during the rest steps.
    fn active_row(&self) -> Option<usize> {
        (self.step < BATCH_SIZE).then_some(self.step)
    }

    fn caption(&self) -> String {
        match self.active_row() {
            Some(r) => format!(
                "Step {}:  Row={}, Col={}  -->  Extract {:.1}",
                r + 1,
                self.rows[r],
                self.targets[r],
                self.extracted[r]
            ),
            None => format!("Result Extracted: {}", self.extracted_label()),
        }
    }

    fn extracted_label(&self) -> String {
        let vals: Vec<String> = self.extracted.iter().map(|v| format!("{:.1}", v)).collect();
        format!("[{}]", vals.join(", "))
    }

    /// Panel slots left to right: score matrix, row indices, target columns,
    /// extracted result. Width ratios 4 : 1.5 : 1.5 : 1.5, shared row band.
    fn layout(rect: egui::Rect) -> [egui::Rect; 4] {
        let content = rect.shrink2(egui::vec2(28.0, 0.0));
        let grid_top = content.top() + TITLE_STRIP;
        let grid_bottom = content.bottom() - CAPTION_STRIP;
        let cell_h = ((grid_bottom - grid_top) / BATCH_SIZE as f32).clamp(24.0, 96.0);
        let grid_h = cell_h * BATCH_SIZE as f32;

        let ratios = [4.0_f32, 1.5, 1.5, 1.5];
        let gap = content.width() * 0.045;
        let unit = (content.width() - ROW_LABEL_W - gap * 3.0) / ratios.iter().sum::<f32>();

        let mut x = content.left() + ROW_LABEL_W;
        let mut slots = [egui::Rect::NOTHING; 4];
        for (i, slot) in slots.iter_mut().enumerate() {
            let w = unit * ratios[i];
            // Vector boxes are capped and centered in their slot.
            let box_w = if i == 0 { w } else { w.min(110.0) };
            *slot = egui::Rect::from_min_size(
                egui::pos2(x + (w - box_w) * 0.5, grid_top),
                egui::vec2(box_w, grid_h),
            );
            x += w + gap;
        }
        slots
    }

    fn index_labels(indices: &[usize; BATCH_SIZE]) -> Vec<String> {
        indices.iter().map(|i| i.to_string()).collect()
    }

    fn value_labels(values: &ValueVector) -> Vec<String> {
        values.iter().map(|v| format!("{:.1}", v)).collect()
    }
}

impl eframe::App for GatherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dt = ctx.input(|i| i.unstable_dt).min(MAX_FRAME_DT);
        self.advance(dt);

        egui::CentralPanel::default().show(ctx, |ui| {
            let (rect, resp) = ui.allocate_exact_size(ui.available_size(), egui::Sense::click());
            if resp.clicked() {
                self.toggle_paused();
            }

            let painter = ui.painter_at(rect);
            let [matrix_r, rows_r, cols_r, result_r] = Self::layout(rect);
            let matrix = Grid::new(matrix_r, BATCH_SIZE, NUM_CLASSES);
            let rows_g = Grid::new(rows_r, BATCH_SIZE, 1);
            let cols_g = Grid::new(cols_r, BATCH_SIZE, 1);
            let result_g = Grid::new(result_r, BATCH_SIZE, 1);

            let active = self.active_row();
            draw_matrix_panel(
                &painter,
                &matrix,
                &self.scores,
                "y (Output Matrix)",
                active.map(|r| (r, self.targets[r])),
            );
            draw_vector_panel(
                &painter,
                &rows_g,
                &Self::index_labels(&self.rows),
                "Row Idx\n(arange)",
                ROW_IDX_TINT,
                active,
            );
            draw_vector_panel(
                &painter,
                &cols_g,
                &Self::index_labels(&self.targets),
                "Col Idx\n(Target)",
                COL_IDX_TINT,
                active,
            );
            draw_vector_panel(
                &painter,
                &result_g,
                &Self::value_labels(&self.extracted),
                "Result\n(Extracted)",
                RESULT_TINT,
                active,
            );

            // Per-row arrows: Col Idx -> Row Idx -> matrix, and Col Idx -> Result.
            for r in 0..BATCH_SIZE {
                draw_arrow(&painter, cols_g.row_left(r), rows_g.row_right(r), ARROW_GRAY);
                draw_arrow(&painter, rows_g.row_left(r), matrix.row_right(r), ARROW_GRAY);
                draw_arrow(&painter, cols_g.row_right(r), result_g.row_left(r), ARROW_GRAY);
            }

            painter.text(
                egui::pos2(rect.center().x, rect.bottom() - 32.0),
                egui::Align2::CENTER_CENTER,
                self.caption(),
                egui::FontId::proportional(19.0),
                CAPTION_BLUE,
            );
            painter.text(
                egui::pos2(rect.left() + 12.0, rect.bottom() - 8.0),
                egui::Align2::LEFT_BOTTOM,
                "Click to Pause/Resume",
                egui::FontId::proportional(12.0),
                egui::Color32::GRAY,
            );
        });

        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_advances_and_wraps() {
        let mut app = GatherApp::default();
        assert_eq!(app.step, 0);

        app.advance(STEP_INTERVAL);
        assert_eq!(app.step, 1);

        for _ in 0..CYCLE_LEN - 1 {
            app.advance(STEP_INTERVAL);
        }
        assert_eq!(app.step, 0);
    }

    #[test]
    fn long_frames_advance_multiple_steps() {
        let mut app = GatherApp::default();
        app.advance(STEP_INTERVAL * 2.0 + 0.1);
        assert_eq!(app.step, 2);
    }

    #[test]
    fn pause_freezes_the_cycle() {
        let mut app = GatherApp::default();
        app.toggle_paused();
        app.advance(10.0 * STEP_INTERVAL);
        assert_eq!(app.step, 0);

        app.toggle_paused();
        app.advance(STEP_INTERVAL);
        assert_eq!(app.step, 1);
    }

    #[test]
    fn active_row_tracks_sweep_then_clears() {
        let mut app = GatherApp::default();
        let mut seen = Vec::new();
        for _ in 0..CYCLE_LEN {
            seen.push(app.active_row());
            app.advance(STEP_INTERVAL);
        }
        assert_eq!(seen, vec![Some(0), Some(1), Some(2), None, None]);
    }

    #[test]
    fn sweep_caption_names_row_col_and_value() {
        let app = GatherApp::default();
        let caption = app.caption();
        assert!(caption.contains("Step 1"));
        assert!(caption.contains("Row=0"));
        assert!(caption.contains("Col=2"));
        assert!(caption.contains("0.6"));
    }

    #[test]
    fn rest_caption_shows_the_extracted_vector() {
        let mut app = GatherApp::default();
        app.step = BATCH_SIZE;
        assert_eq!(app.caption(), "Result Extracted: [0.6, 0.8, 0.3]");
    }

    #[test]
    fn layout_produces_four_ordered_slots() {
        let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1280.0, 620.0));
        let slots = GatherApp::layout(rect);
        for pair in slots.windows(2) {
            assert!(pair[0].right() < pair[1].left());
        }
        // All panels share the same row band so the arrows run level.
        for slot in &slots[1..] {
            assert_eq!(slot.top(), slots[0].top());
            assert_eq!(slot.bottom(), slots[0].bottom());
        }
    }
}
