//! Vector canvas: paints draw commands and turns clicks into taps

use egui::{Color32, Pos2, Stroke, Ui};
use kurbo::Point;

use crate::geometry::Viewport;
use crate::render::{ColorRole, DrawCommand};
use crate::state::AppState;

/// Side of the square canvas, points
pub const CANVAS_SIZE: f32 = 450.0;

fn role_color(role: ColorRole, dark: bool) -> Color32 {
    match role {
        ColorRole::GridAxis => Color32::from_rgb(77, 77, 77),
        ColorRole::GridMinor => {
            if dark {
                Color32::from_gray(60)
            } else {
                Color32::from_gray(200)
            }
        }
        ColorRole::VectorNormal => {
            if dark {
                Color32::from_gray(230)
            } else {
                Color32::BLACK
            }
        }
        ColorRole::VectorPrimary => Color32::from_rgb(40, 110, 255),
        ColorRole::VectorSecondary => Color32::from_rgb(230, 50, 50),
        ColorRole::Label => Color32::from_rgb(90, 150, 255),
    }
}

fn to_pos(origin: Pos2, p: Point) -> Pos2 {
    origin + egui::vec2(p.x as f32, p.y as f32)
}

/// Paint the active plane and apply a click, if any
pub fn show(ui: &mut Ui, state: &mut AppState) {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(CANVAS_SIZE, CANVAS_SIZE), egui::Sense::click());
    let viewport = Viewport::new(rect.width() as f64, rect.height() as f64);

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let local = pos - rect.min;
            let point = Point::new(local.x as f64, local.y as f64);
            match state.pick(point, viewport) {
                Some(id) => {
                    let ctx = ui.ctx().clone();
                    // Sampled when the tap is applied, not when the click started
                    let compare = move || ctx.input(|i| i.modifiers.command);
                    state.handle_tap(&id, &compare);
                }
                None => tracing::debug!("Click at ({:.0}, {:.0}) hit no vector", point.x, point.y),
            }
        }
    }

    let dark = ui.visuals().dark_mode;
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);
    painter.rect_stroke(
        rect,
        0.0,
        Stroke::new(1.0, role_color(ColorRole::GridAxis, dark)),
        egui::StrokeKind::Inside,
    );

    let font = egui::FontId::proportional(14.0);
    for command in state.render(viewport) {
        match command {
            DrawCommand::Line {
                from,
                to,
                stroke_weight,
                color_role,
            } => {
                painter.line_segment(
                    [to_pos(rect.min, from), to_pos(rect.min, to)],
                    Stroke::new(stroke_weight, role_color(color_role, dark)),
                );
            }
            DrawCommand::Label {
                text,
                position,
                color_role,
            } => {
                painter.text(
                    to_pos(rect.min, position),
                    egui::Align2::CENTER_CENTER,
                    text,
                    font.clone(),
                    role_color(color_role, dark),
                );
            }
        }
    }
}
