//! Main GUI application

use crate::render;
use eframe::egui;
use odom_telemetry::{Channel, KeySnapshot, RunState, Session, TeleopKey, UiCommand};

/// Main application struct
pub struct ViewerApp {
    session: Session,
    show_keys: bool,
}

impl ViewerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, session: Session, show_keys: bool) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self { session, show_keys }
    }

    /// Sample the teleop keys for this frame
    fn poll_keys(ctx: &egui::Context) -> KeySnapshot {
        ctx.input(|i| KeySnapshot::from_fn(|key| i.key_down(egui_key(key))))
    }

    /// Stop/Resume buttons
    fn render_playback_controls(&self, ctx: &egui::Context, commands: &mut Vec<UiCommand>) {
        egui::Window::new("Buttons")
            .default_pos([10.0, 10.0])
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("⏹ Stop").clicked() {
                        commands.push(UiCommand::Pause);
                    }
                    if ui.button("▶ Resume").clicked() {
                        commands.push(UiCommand::Resume);
                    }
                });

                let state = match self.session.run_state() {
                    RunState::Running => "🟢 Running",
                    RunState::Paused => "⏸ Paused",
                };
                ui.label(format!("{} | t = {:.1}s", state, self.session.time()));
                ui.label(format!("Samples: {}", self.session.store().len()));
            });
    }

    /// Panel toggles
    fn render_control_panel(&self, ctx: &egui::Context, commands: &mut Vec<UiCommand>) {
        egui::Window::new("Control Panel")
            .default_pos([10.0, 120.0])
            .resizable(false)
            .show(ctx, |ui| {
                if ui
                    .selectable_label(self.session.velocity_panel_open(), "📈 Velocity")
                    .clicked()
                {
                    commands.push(UiCommand::ToggleVelocityPanel);
                }
                if ui
                    .selectable_label(self.session.heading_panel_open(), "🧭 Angle (odom)")
                    .clicked()
                {
                    commands.push(UiCommand::ToggleHeadingPanel);
                }
            });
    }

    /// Velocity chart plus the channel selector
    fn render_velocity(&self, ctx: &egui::Context, commands: &mut Vec<UiCommand>) {
        egui::Window::new("Values")
            .default_pos([10.0, 220.0])
            .resizable(false)
            .show(ctx, |ui| {
                for channel in Channel::PLOTTED {
                    if ui
                        .selectable_label(self.session.is_channel_visible(channel), channel.name())
                        .clicked()
                    {
                        commands.push(UiCommand::ToggleChannel(channel));
                    }
                }
            });

        let frame = self.session.chart_frame();
        egui::Window::new("Velocity Plot")
            .default_pos([220.0, 10.0])
            .default_size([1040.0, 760.0])
            .show(ctx, |ui| {
                render::chart(ui, frame);
            });
    }

    /// Heading indicator window with its close control
    fn render_heading(&self, ctx: &egui::Context, commands: &mut Vec<UiCommand>) {
        let Some(frame) = self.session.heading_frame() else {
            return;
        };

        let mut open = true;
        egui::Window::new("Yaw Plot")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .default_pos([10.0, 420.0])
            .show(ctx, |ui| {
                render::heading(ui, &frame);
            });

        if !open {
            commands.push(UiCommand::CloseHeadingPanel);
        } else if ctx.input(|i| i.viewport().close_requested()) {
            // Host window is going away with the heading still open
            commands.push(UiCommand::HeadingContainerClosed);
        }
    }

    /// Held-key debug readout
    fn render_keys(&self, ctx: &egui::Context) {
        let keys = self.session.keys();
        egui::Window::new("Keyboard Inputs")
            .default_pos([10.0, 760.0])
            .resizable(false)
            .show(ctx, |ui| {
                for key in TeleopKey::ALL {
                    let state = if keys.is_down(key) { "Pressed" } else { "Released" };
                    ui.label(format!("{}: {}", key, state));
                }
            });
    }
}

fn egui_key(key: TeleopKey) -> egui::Key {
    match key {
        TeleopKey::W => egui::Key::W,
        TeleopKey::S => egui::Key::S,
        TeleopKey::X => egui::Key::X,
        TeleopKey::A => egui::Key::A,
        TeleopKey::D => egui::Key::D,
        TeleopKey::Z => egui::Key::Z,
        TeleopKey::C => egui::Key::C,
        TeleopKey::Q => egui::Key::Q,
        TeleopKey::E => egui::Key::E,
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Input, then playback
        let keys = Self::poll_keys(ctx);
        self.session.run_frame(keys);

        if self.session.run_state() == RunState::Running {
            ctx.request_repaint();
        }

        // Render UI, collecting commands for after the borrows end
        let mut commands = Vec::new();
        self.render_playback_controls(ctx, &mut commands);
        self.render_control_panel(ctx, &mut commands);
        if self.session.velocity_panel_open() {
            self.render_velocity(ctx, &mut commands);
        }
        self.render_heading(ctx, &mut commands);
        if self.show_keys {
            self.render_keys(ctx);
        }

        for command in commands {
            self.session.apply(command);
        }
    }
}
