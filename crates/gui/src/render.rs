//! Grid renderer: turns the current plane state into draw commands.
//!
//! Output is recomputed every frame and is independent of any UI toolkit; the
//! binary maps [`DrawCommand`]s onto an egui painter.

use kurbo::{Point, Vec2};
use serde::Serialize;
use shared::{Plane, Vector, VectorId};

use crate::geometry::{compute_arrowhead, grid_lines, pick_nearest, project_to_screen, ScreenSegment, Viewport};
use crate::state::selection::SelectionState;
use crate::state::settings::AppSettings;
use crate::state::store::VectorStore;

/// Semantic colour of a draw command; the shell picks the actual colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    GridMinor,
    GridAxis,
    VectorNormal,
    VectorPrimary,
    VectorSecondary,
    Label,
}

/// One primitive for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
        stroke_weight: f32,
        color_role: ColorRole,
    },
    Label {
        text: String,
        position: Point,
        color_role: ColorRole,
    },
}

impl DrawCommand {
    pub fn color_role(&self) -> ColorRole {
        match self {
            DrawCommand::Line { color_role, .. } | DrawCommand::Label { color_role, .. } => *color_role,
        }
    }
}

/// Colour role of a vector under the current selection
pub fn vector_role(vector: &Vector, selection: &SelectionState) -> ColorRole {
    if selection.is_primary(&vector.id) {
        ColorRole::VectorPrimary
    } else if selection.is_secondary(&vector.id) {
        ColorRole::VectorSecondary
    } else {
        ColorRole::VectorNormal
    }
}

/// Screen segment of every vector in `store`, in store order
pub fn vector_segments<'a>(
    viewport: Viewport,
    store: &'a VectorStore,
    settings: &AppSettings,
) -> Vec<(&'a Vector, ScreenSegment)> {
    store
        .all()
        .iter()
        .map(|v| (v, project_to_screen(&v.components, viewport, settings.grid.units_visible)))
        .collect()
}

/// Grid lines, then each vector's shaft, arrowhead wings and label.
///
/// A degenerate viewport yields no commands.
pub fn render(
    viewport: Viewport,
    store: &VectorStore,
    selection: &SelectionState,
    settings: &AppSettings,
) -> Vec<DrawCommand> {
    if viewport.is_degenerate() {
        return Vec::new();
    }

    let mut commands: Vec<DrawCommand> = grid_lines(viewport, settings.grid.units_visible, settings.grid.half_range)
        .into_iter()
        .map(|line| {
            let (stroke_weight, color_role) = if line.is_axis {
                (settings.grid.axis_stroke, ColorRole::GridAxis)
            } else {
                (settings.grid.minor_stroke, ColorRole::GridMinor)
            };
            DrawCommand::Line {
                from: line.from,
                to: line.to,
                stroke_weight,
                color_role,
            }
        })
        .collect();

    let draw_heads = store.plane() == Plane::Planar || settings.arrows.draw_heads_3d;
    let label_offset = Vec2::new(settings.labels.offset[0], settings.labels.offset[1]);

    for (vector, segment) in vector_segments(viewport, store, settings) {
        let color_role = vector_role(vector, selection);
        let stroke_weight = settings.arrows.stroke;

        commands.push(DrawCommand::Line {
            from: segment.start,
            to: segment.end,
            stroke_weight,
            color_role,
        });

        if draw_heads && !segment.is_degenerate() {
            let (wing1, wing2) = compute_arrowhead(
                segment.start,
                segment.end,
                settings.arrows.head_length,
                settings.arrows.head_half_angle(),
            );
            for wing in [wing1, wing2] {
                commands.push(DrawCommand::Line {
                    from: segment.end,
                    to: wing,
                    stroke_weight,
                    color_role,
                });
            }
        }

        if vector.is_unit_vector {
            if let Some(name) = &vector.name {
                commands.push(DrawCommand::Label {
                    text: name.clone(),
                    position: segment.end + label_offset,
                    color_role: ColorRole::Label,
                });
            }
        }
    }

    commands
}

/// Id of the selectable vector whose arrow lies nearest to `point`, within
/// the picking tolerance.
///
/// Unit vectors are never picked. On a tie the vector drawn last (topmost)
/// wins.
pub fn pick_vector(
    point: Point,
    viewport: Viewport,
    store: &VectorStore,
    settings: &AppSettings,
) -> Option<VectorId> {
    if viewport.is_degenerate() {
        return None;
    }
    let segments = vector_segments(viewport, store, settings);
    pick_nearest(
        point,
        segments
            .iter()
            .rev()
            .filter(|(v, _)| !v.is_unit_vector)
            .map(|(v, seg)| (&v.id, seg)),
        settings.picking.tolerance_px,
    )
    .cloned()
}
