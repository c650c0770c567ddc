use crate::application::session::PatientSession;
use crate::domain::clinical::assessment::RiskLabel;
use crate::domain::clinical::features::{
    ChestPainType, ExerciseAngina, FeatureRecord, StSlope, Thalassemia,
};
use crate::domain::ml::feature_registry::{FEATURE_NAMES, record_to_vector};
use chrono::Utc;
use eframe::egui;

impl eframe::App for PatientSession {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // --- 0. Theme Configuration ---
        let mut visuals = egui::Visuals::dark();
        visuals.window_fill = egui::Color32::from_rgb(10, 15, 20);
        visuals.panel_fill = egui::Color32::from_rgb(10, 15, 20);
        ctx.set_visuals(visuals);

        // --- 1. Process pending log lines ---
        self.drain_logs();

        let model_available = self.service.is_available();

        // --- 2. Top Status Bar ---
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🫀 CardioRisk");
                ui.separator();
                ui.label(format!("Time (UTC): {}", Utc::now().format("%H:%M:%S")));
                ui.separator();
                ui.label(self.service.predictor_name());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if model_available {
                        ui.label(
                            egui::RichText::new("● MODEL READY")
                                .color(egui::Color32::GREEN)
                                .small(),
                        );
                    } else {
                        ui.label(
                            egui::RichText::new("● MODEL UNAVAILABLE")
                                .color(egui::Color32::RED)
                                .small(),
                        );
                    }
                });
            });
        });

        // --- 3. Bottom Panel: System Logs ---
        egui::TopBottomPanel::bottom("log_panel")
            .default_height(120.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.label(egui::RichText::new("System Logs").strong());
                egui::ScrollArea::vertical()
                    .auto_shrink([false, true])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for msg in &self.log_history {
                            let color = if msg.contains("ERROR") {
                                egui::Color32::from_rgb(255, 80, 80)
                            } else if msg.contains("WARN") {
                                egui::Color32::from_rgb(255, 255, 100)
                            } else {
                                egui::Color32::from_gray(180)
                            };
                            ui.label(egui::RichText::new(msg).color(color).small());
                        }
                    });
            });

        // --- 4. Left Sidebar: Patient Data Input ---
        egui::SidePanel::left("input_panel")
            .default_width(340.0)
            .min_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.heading("Patient Data Input");
                ui.separator();
                ui.add_space(10.0);

                ui.spacing_mut().slider_width = 180.0;
                ui.add(egui::Slider::new(&mut self.form.age, 20..=80).text("Age"));
                ui.add_space(6.0);
                ui.add(
                    egui::Slider::new(&mut self.form.thalach, 60..=220)
                        .text("Max Heart Rate (Thalach)"),
                );
                ui.add_space(6.0);
                ui.add(
                    egui::Slider::new(&mut self.form.oldpeak, 0.0..=6.2)
                        .text("ST Depression (Oldpeak)"),
                );

                ui.add_space(14.0);
                ui.separator();
                ui.add_space(10.0);

                egui::ComboBox::from_label("Chest Pain Type (CP)")
                    .selected_text(self.form.cp.label())
                    .show_ui(ui, |ui| {
                        for option in ChestPainType::ALL {
                            ui.selectable_value(&mut self.form.cp, option, option.label());
                        }
                    });
                ui.add_space(6.0);

                egui::ComboBox::from_label("Exercise Induced Angina (Exang)")
                    .selected_text(self.form.exang.label())
                    .show_ui(ui, |ui| {
                        for option in ExerciseAngina::ALL {
                            ui.selectable_value(&mut self.form.exang, option, option.label());
                        }
                    });
                ui.add_space(6.0);

                egui::ComboBox::from_label("Slope of Peak Exercise ST Segment")
                    .selected_text(self.form.slope.label())
                    .show_ui(ui, |ui| {
                        for option in StSlope::ALL {
                            ui.selectable_value(&mut self.form.slope, option, option.label());
                        }
                    });
                ui.add_space(6.0);

                egui::ComboBox::from_label("Number of Major Vessels (Ca)")
                    .selected_text(self.form.ca.to_string())
                    .show_ui(ui, |ui| {
                        for n in 0..=FeatureRecord::CA_MAX {
                            ui.selectable_value(&mut self.form.ca, n, n.to_string());
                        }
                    });
                ui.add_space(6.0);

                egui::ComboBox::from_label("Thalassemia (Thal)")
                    .selected_text(self.form.thal.label())
                    .show_ui(ui, |ui| {
                        for option in Thalassemia::ALL {
                            ui.selectable_value(&mut self.form.thal, option, option.label());
                        }
                    });

                ui.add_space(20.0);
                ui.separator();
                ui.add_space(10.0);

                // Prediction runs only on this explicit action, never on
                // input change.
                if ui
                    .add_enabled(model_available, egui::Button::new("Predict"))
                    .clicked()
                {
                    self.run_prediction();
                }

                if !model_available {
                    ui.add_space(8.0);
                    ui.colored_label(
                        egui::Color32::YELLOW,
                        "Model could not be loaded. Prediction is unavailable.",
                    );
                }
            });

        // --- 5. Central Panel: Record & Result ---
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Patient's Input Data");
            ui.add_space(10.0);

            let record = self.form.collect();
            let encoded = record_to_vector(&record);
            let selections = [
                record.age.to_string(),
                record.thalach.to_string(),
                format!("{:.1}", record.oldpeak),
                record.cp.label().to_string(),
                record.exang.label().to_string(),
                record.slope.label().to_string(),
                record.ca.to_string(),
                record.thal.label().to_string(),
            ];

            egui::Grid::new("record_grid")
                .striped(true)
                .min_col_width(100.0)
                .spacing([20.0, 8.0])
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("FEATURE").strong());
                    ui.label(egui::RichText::new("SELECTION").strong());
                    ui.label(egui::RichText::new("ENCODED").strong());
                    ui.end_row();

                    for ((name, selection), value) in
                        FEATURE_NAMES.iter().zip(&selections).zip(&encoded)
                    {
                        ui.label(egui::RichText::new(*name).color(egui::Color32::GOLD));
                        ui.label(selection);
                        ui.label(format!("{}", value));
                        ui.end_row();
                    }
                });

            ui.add_space(20.0);
            ui.separator();
            ui.add_space(10.0);

            match &self.last_outcome {
                None => {
                    if model_available {
                        ui.label("Press Predict to assess heart disease risk.");
                    }
                }
                Some(Ok(assessment)) => {
                    ui.heading("Prediction Result");
                    ui.add_space(8.0);

                    let (headline, color) = match assessment.label {
                        RiskLabel::HighRisk => (
                            "High Risk: the model predicts the presence of heart disease.",
                            egui::Color32::from_rgb(255, 80, 80),
                        ),
                        RiskLabel::LowRisk => (
                            "Low Risk: the model predicts no evidence of heart disease.",
                            egui::Color32::GREEN,
                        ),
                    };

                    ui.label(egui::RichText::new(headline).strong().size(18.0).color(color));
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        ui.label("Probability of heart disease:");
                        ui.label(
                            egui::RichText::new(assessment.display_probability())
                                .strong()
                                .size(18.0)
                                .color(egui::Color32::WHITE),
                        );
                    });
                }
                Some(Err(e)) => {
                    ui.colored_label(
                        egui::Color32::from_rgb(255, 80, 80),
                        format!("An error occurred during prediction: {}", e),
                    );
                }
            }
        });

        // Force frequent repaints to ensure responsive logs
        ctx.request_repaint();
    }
}
