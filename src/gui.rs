//! eframe front-end wiring the widgets to the controller
//!
//! The window mirrors the classic layout: interval and click-count fields,
//! a double-click checkbox, the position picker, hotkey settings and one
//! start/stop button. All clicking happens off-thread; this file only reads
//! and flips state.

use eframe::egui;
use std::sync::{mpsc, Arc};
use tracing::info;

use crate::capture::{CursorPosition, PositionCapture};
use crate::config::{ClickConfig, FieldWarning};
use crate::controller::{Phase, ToggleController};
use crate::hotkey::{key_label, Hotkey, Modifiers, SELECTABLE_KEYS};
use crate::hotkey_listener::{current_binding, SharedHotkey, ToggleRequested};
use crate::injector::ClickBackend;

const WARNING_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 60, 50);

pub struct ClickerApp {
    interval_text: String,
    clicks_text: String,
    double_click: bool,
    interval_warning: Option<FieldWarning>,
    clicks_warning: Option<FieldWarning>,

    position_text: String,
    position_warning: bool,
    capture: PositionCapture,

    controller: ToggleController,

    binding: SharedHotkey,
    toggle_rx: mpsc::Receiver<ToggleRequested>,

    // Unsaved hotkey settings being edited
    edit_modifiers: Modifiers,
    edit_key: rdev::Key,
}

impl ClickerApp {
    pub fn new(
        backend: Arc<dyn ClickBackend>,
        binding: SharedHotkey,
        toggle_rx: mpsc::Receiver<ToggleRequested>,
    ) -> Self {
        let current = current_binding(&binding);
        Self {
            interval_text: String::new(),
            clicks_text: String::new(),
            double_click: false,
            interval_warning: None,
            clicks_warning: None,

            position_text: String::new(),
            position_warning: false,
            capture: PositionCapture::default(),

            controller: ToggleController::new(backend),

            binding,
            toggle_rx,

            edit_modifiers: current.modifiers,
            edit_key: current.key,
        }
    }

    /// Single toggle path for the button and the hotkey event.
    ///
    /// A config is frozen from the current field text on every press; field
    /// warnings are refreshed only when the press actually starts a run.
    fn toggle_clicking(&mut self) {
        let parsed =
            ClickConfig::from_fields(&self.interval_text, &self.clicks_text, self.double_click);
        if self.controller.toggle(parsed.config) == Phase::Clicking {
            self.interval_warning = parsed.interval_warning;
            self.clicks_warning = parsed.clicks_warning;
        }
    }

    /// Forward queued hotkey events into the toggle path.
    fn drain_toggle_events(&mut self) {
        while let Ok(event) = self.toggle_rx.try_recv() {
            info!("Toggle hotkey (latency: {:?})", event.timestamp.elapsed());
            self.toggle_clicking();
        }
    }

    fn set_position_from_text(&mut self) {
        match CursorPosition::parse(&self.position_text) {
            Some(position) => {
                self.capture.set(position);
                self.position_warning = false;
            }
            None => self.position_warning = true,
        }
    }

    fn hotkey_settings(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.checkbox(&mut self.edit_modifiers.ctrl, "Ctrl");
            ui.checkbox(&mut self.edit_modifiers.shift, "Shift");
            ui.checkbox(&mut self.edit_modifiers.alt, "Alt");

            egui::ComboBox::from_id_source("hotkey_main_key")
                .selected_text(key_label(self.edit_key))
                .show_ui(ui, |ui| {
                    for key in SELECTABLE_KEYS {
                        ui.selectable_value(&mut self.edit_key, key, key_label(key));
                    }
                });
        });

        let preview = Hotkey {
            modifiers: self.edit_modifiers,
            key: self.edit_key,
        };
        ui.label(format!("Preview: {preview}"));

        ui.horizontal(|ui| {
            if ui.button("Save").clicked() {
                if let Ok(mut binding) = self.binding.lock() {
                    *binding = preview;
                }
                info!("Toggle hotkey rebound to {}", preview);
            }
            if ui.button("Reset").clicked() {
                let stock = Hotkey::default();
                self.edit_modifiers = stock.modifiers;
                self.edit_key = stock.key;
                if let Ok(mut binding) = self.binding.lock() {
                    *binding = stock;
                }
            }
        });
    }
}

impl eframe::App for ClickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Repaint continuously so hotkey toggles show up without focus.
        ctx.request_repaint();

        self.drain_toggle_events();

        // While armed, a press anywhere in the window records its position.
        let pressed_at = ctx.input(|i| {
            if i.pointer.primary_pressed() {
                i.pointer.interact_pos()
            } else {
                None
            }
        });
        if let Some(pos) = pressed_at {
            self.capture.record(pos.x.round() as i32, pos.y.round() as i32);
        }

        let clicking = self.controller.is_clicking();
        let current = current_binding(&self.binding);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Auto Clicker");
            ui.add_space(10.0);

            ui.label("Interval (ms):");
            ui.text_edit_singleline(&mut self.interval_text);
            if let Some(warning) = self.interval_warning {
                ui.colored_label(WARNING_COLOR, warning.to_string());
            }
            ui.add_space(10.0);

            ui.label("Number of Clicks (0 for 'Never stop'):");
            ui.text_edit_singleline(&mut self.clicks_text);
            if let Some(warning) = self.clicks_warning {
                ui.colored_label(WARNING_COLOR, warning.to_string());
            }
            ui.add_space(10.0);

            // The run's config is frozen, so the checkbox is locked while
            // clicking and handed back on stop.
            ui.add_enabled(
                !clicking,
                egui::Checkbox::new(&mut self.double_click, "Double Click"),
            );
            ui.add_space(10.0);

            ui.label(self.capture.label());
            ui.horizontal(|ui| {
                let pick_label = if self.capture.is_active() {
                    "Click to Set Position"
                } else {
                    "Set Position"
                };
                if ui.button(pick_label).clicked() {
                    self.capture.toggle();
                }

                ui.add(
                    egui::TextEdit::singleline(&mut self.position_text)
                        .hint_text("x,y")
                        .desired_width(80.0),
                );
                if ui.button("Set").clicked() {
                    self.set_position_from_text();
                }
                if ui.button("Clear").clicked() {
                    self.capture.clear();
                    self.position_text.clear();
                    self.position_warning = false;
                }
            });
            if self.position_warning {
                ui.colored_label(WARNING_COLOR, "Invalid position! Use x,y.");
            }
            ui.add_space(10.0);

            egui::CollapsingHeader::new("Hotkey Settings").show(ui, |ui| {
                self.hotkey_settings(ui);
            });
            ui.add_space(10.0);

            ui.label(format!("Press {current} to start/stop clicking..."));
            let toggle_label = if clicking {
                "Clicking...".to_string()
            } else {
                format!("Start/Stop ({current})")
            };
            if ui.button(toggle_label).clicked() {
                self.toggle_clicking();
            }
        });
    }
}
