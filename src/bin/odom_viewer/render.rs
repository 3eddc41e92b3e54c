//! Submits view primitives to egui

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoints};
use odom_telemetry::{ChartFrame, FilledRect, HeadingFrame, Point, Rgba, Segment};

pub fn color(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.0, c.1, c.2, c.3)
}

fn to_screen(origin: egui::Pos2, p: Point) -> egui::Pos2 {
    origin + egui::vec2(p.x, p.y)
}

fn paint_rect(painter: &egui::Painter, origin: egui::Pos2, rect: &FilledRect) {
    let screen = egui::Rect::from_min_max(to_screen(origin, rect.min), to_screen(origin, rect.max));
    painter.rect_filled(screen, 0.0, color(rect.color));
}

fn paint_segment(painter: &egui::Painter, origin: egui::Pos2, seg: &Segment) {
    painter.line_segment(
        [to_screen(origin, seg.from), to_screen(origin, seg.to)],
        egui::Stroke::new(seg.width, color(seg.color)),
    );
}

/// Draw the velocity chart
pub fn chart(ui: &mut egui::Ui, frame: ChartFrame) {
    let plot = Plot::new("velocity_plot")
        .x_axis_label("Time (s)")
        .y_axis_label("Value")
        .legend(Legend::default());

    plot.show(ui, |plot_ui| {
        if let Some(bounds) = frame.bounds {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [bounds.x.0, bounds.y.0],
                [bounds.x.1, bounds.y.1],
            ));
        }

        for line in frame.lines {
            plot_ui.line(
                Line::new(PlotPoints::new(line.points))
                    .name(line.channel.name())
                    .color(color(line.color))
                    .width(1.5),
            );
        }
    });
}

/// Draw the heading canvas at the cursor
pub fn heading(ui: &mut egui::Ui, frame: &HeadingFrame) {
    let size = egui::vec2(frame.background.width(), frame.background.height());
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let origin = response.rect.min;

    paint_rect(&painter, origin, &frame.background);
    for seg in frame.segments() {
        paint_segment(&painter, origin, &seg);
    }
}
