use crate::comparison::{rank_algorithms, Comparison, Winner};
use crate::ui::state::AppState;

pub struct MainPanel;

impl MainPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &AppState) {
        ui.heading(format!("{} {}", state.active_direction().arrow(), state.active_metric));
        ui.separator();

        // Comparison card, then the full ranking
        match state.comparison() {
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label("No results yet. Open a results file to compare algorithms.");
                });
            }
            Some(Err(e)) => {
                ui.colored_label(egui::Color32::YELLOW, format!("⚠ {}", e));
                ui.separator();
                Self::show_ranking(ui, state);
            }
            Some(Ok(comparison)) => {
                Self::show_comparison(ui, state, &comparison);
                ui.separator();
                Self::show_ranking(ui, state);
            }
        }
    }

    fn show_comparison(ui: &mut egui::Ui, state: &AppState, comparison: &Comparison) {
        let display = &state.config.display;

        ui.group(|ui| {
            egui::Grid::new("comparison_grid")
                .striped(true)
                .show(ui, |ui| {
                    // Header
                    ui.label("");
                    ui.strong(format!("Base: {}", comparison.base_algo));
                    ui.strong(format!("Compare: {}", comparison.compare_algo));
                    ui.end_row();

                    // Summary rows
                    ui.label("Mean");
                    ui.label(display.format_value(comparison.base.mean));
                    ui.label(display.format_value(comparison.compare.mean));
                    ui.end_row();

                    ui.label("Min");
                    ui.label(display.format_value(comparison.base.min));
                    ui.label(display.format_value(comparison.compare.min));
                    ui.end_row();

                    ui.label("Max");
                    ui.label(display.format_value(comparison.base.max));
                    ui.label(display.format_value(comparison.compare.max));
                    ui.end_row();

                    ui.label("Runs");
                    ui.label(comparison.base.count.to_string());
                    ui.label(comparison.compare.count.to_string());
                    ui.end_row();
                });

            ui.add_space(5.0);

            // Delta and verdict
            let change = match comparison.percent_change {
                Some(pct) => format!("{:+.2}%", pct),
                None => "n/a".to_string(),
            };
            ui.label(format!("Delta: {} ({})", display.format_value(comparison.delta), change));

            match (comparison.winner, comparison.winner_name()) {
                (Winner::Tie, _) | (_, None) => {
                    ui.label("Result: tie");
                }
                (_, Some(name)) => {
                    ui.colored_label(egui::Color32::GREEN, format!("Better: {}", name));
                }
            }
        });
    }

    fn show_ranking(ui: &mut egui::Ui, state: &AppState) {
        let Some(dataset) = &state.dataset else {
            return;
        };

        let ranked = rank_algorithms(dataset, &state.active_metric, state.active_direction());
        if ranked.is_empty() {
            ui.label(format!("No algorithm reports '{}'", state.active_metric));
            return;
        }

        let display = &state.config.display;
        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("ranking_table")
                .striped(true)
                .show(ui, |ui| {
                    // Header
                    ui.label("Rank");
                    ui.label("Algorithm");
                    ui.label("Mean");
                    ui.label("Runs");
                    ui.end_row();

                    // Rows, base and compare in bold
                    for (idx, (algorithm, summary)) in ranked.iter().enumerate() {
                        let highlighted =
                            *algorithm == state.base_algo || *algorithm == state.compare_algo;
                        ui.label(format!("{}", idx + 1));
                        if highlighted {
                            ui.strong(algorithm);
                        } else {
                            ui.label(algorithm);
                        }
                        ui.label(display.format_value(summary.mean));
                        ui.label(format!("{}", summary.count));
                        ui.end_row();
                    }
                });
        });
    }
}
