// app.rs - Thin egui view over the simulation engine

use eframe::egui;
use egui::{Color32, Pos2, Rect, Sense, Stroke, Vec2};
use life_engine::{EngineConfig, PATTERNS, Simulation, Snapshot};
use std::time::Duration;
use tokio::sync::watch;

const CELL_SIZE: f32 = 13.0;
const CELL_SPACING: f32 = 0.5;

pub struct LifeApp {
    sim: Simulation,
    snapshots: watch::Receiver<Snapshot>,
    tick_interval: Duration,
    live_color: Color32,
    dead_color: Color32,
    selected_pattern: usize,
    // Last cell toggled by the current drag, so painting over a cell
    // flips it once per pass.
    last_painted: Option<(usize, usize)>,
    // The run loop lives on this runtime's worker threads.
    _runtime: tokio::runtime::Runtime,
}

impl LifeApp {
    pub fn new() -> Self {
        let runtime = tokio::runtime::Runtime::new().expect("failed to start tokio runtime");
        let config = EngineConfig::default();
        let sim = {
            let _guard = runtime.enter();
            Simulation::new(config)
        };
        let snapshots = sim.subscribe();
        Self {
            sim,
            snapshots,
            tick_interval: config.tick_interval,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
            last_painted: None,
            _runtime: runtime,
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui, snapshot: &Snapshot) {
        ui.horizontal(|ui| {
            let button_text = if snapshot.running { "⏸ Stop" } else { "▶ Start" };
            if ui.button(button_text).clicked() {
                self.sim.set_running(!snapshot.running);
            }

            if ui.button("⏹ Clear").clicked() {
                self.sim.clear();
            }

            if ui.button("🎲 Random").clicked() {
                self.sim.randomize();
            }

            ui.separator();

            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("Apply Pattern").clicked() {
                self.sim.apply_pattern(&PATTERNS[self.selected_pattern]);
            }

            ui.separator();

            ui.label(format!("Generation: {}", snapshot.generation));
        });

        ui.horizontal(|ui| {
            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);
        });
    }

    fn grid_area(&mut self, ui: &mut egui::Ui, snapshot: &Snapshot) {
        let rows = snapshot.grid.rows();
        let cols = snapshot.grid.cols();
        let pitch = CELL_SIZE + CELL_SPACING;
        let total_size = Vec2::new(
            pitch * cols as f32 - CELL_SPACING,
            pitch * rows as f32 - CELL_SPACING,
        );

        let (response, painter) = ui.allocate_painter(total_size, Sense::click_and_drag());
        let origin = response.rect.min;

        painter.rect_filled(Rect::from_min_size(origin, total_size), 0.0, Color32::BLACK);

        for row in 0..rows {
            for col in 0..cols {
                let min = Pos2::new(
                    origin.x + col as f32 * pitch,
                    origin.y + row as f32 * pitch,
                );
                let rect = Rect::from_min_size(min, Vec2::splat(CELL_SIZE));
                let color = if snapshot.grid.get(row, col) {
                    self.live_color
                } else {
                    self.dead_color
                };
                painter.rect_filled(rect, 1.0, color);
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
            }
        }

        // Click toggles one cell; dragging paints, toggling each cell once
        // as the pointer passes over it.
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some((row, col)) = cell_at(pos, origin, rows, cols) {
                    self.toggle(row, col);
                }
            }
            self.last_painted = None;
        } else if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some((row, col)) = cell_at(pos, origin, rows, cols) {
                    if self.last_painted != Some((row, col)) {
                        self.toggle(row, col);
                        self.last_painted = Some((row, col));
                    }
                }
            }
        }
        if response.drag_released() {
            self.last_painted = None;
        }
    }

    fn toggle(&self, row: usize, col: usize) {
        if let Err(err) = self.sim.toggle_cell(row, col) {
            log::error!("toggle rejected: {err}");
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let snapshot = self.snapshots.borrow_and_update().clone();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            self.controls(ui, &snapshot);
            ui.separator();

            ui.label("Click or drag on the grid to toggle cells. Start runs the simulation.");
            ui.separator();

            self.grid_area(ui, &snapshot);
            ui.separator();

            let total = snapshot.grid.rows() * snapshot.grid.cols();
            let live = snapshot.grid.live_count();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {live}"));
                ui.label(format!("Dead cells: {}", total - live));
                ui.label(format!(
                    "Population: {:.1}%",
                    live as f32 / total as f32 * 100.0
                ));
            });
        });

        // The run loop publishes from another thread; poll for its
        // snapshots at the tick cadence while running.
        if snapshot.running {
            ctx.request_repaint_after(self.tick_interval / 2);
        }
    }
}

fn cell_at(pos: Pos2, origin: Pos2, rows: usize, cols: usize) -> Option<(usize, usize)> {
    let pitch = CELL_SIZE + CELL_SPACING;
    let rel = pos - origin;
    if rel.x < 0.0 || rel.y < 0.0 {
        return None;
    }
    let col = (rel.x / pitch) as usize;
    let row = (rel.y / pitch) as usize;
    (row < rows && col < cols).then_some((row, col))
}
