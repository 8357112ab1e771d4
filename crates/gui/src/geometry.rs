//! Screen-space geometry for the vector grid.
//!
//! Everything here is pure: vector components go in, screen points come out.
//! Screen coordinates have their origin at the top-left corner of the canvas
//! with y growing downwards, so the j axis is inverted on the way out.

use glam::{DMat3, DVec3};
use kurbo::{Line, ParamCurveNearest, Point, Vec2};
use shared::Components;

/// Grid units spanning the full width (and height) of the canvas
pub const UNITS_VISIBLE_PER_AXIS: f64 = 16.0;
/// Length of each arrowhead wing in screen units
pub const ARROW_HEAD_LENGTH: f64 = 10.0;
/// Angle between the shaft and each arrowhead wing (30 degrees)
pub const ARROW_HEAD_HALF_ANGLE: f64 = std::f64::consts::FRAC_PI_6;
/// Grid lines are drawn for offsets `-GRID_HALF_RANGE..=GRID_HALF_RANGE`
pub const GRID_HALF_RANGE: i32 = 7;

/// Size of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }

    /// Midpoint of the surface; every vector starts here
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Screen size of one grid unit along each axis
    pub fn unit(&self, units_visible: f64) -> Vec2 {
        Vec2::new(self.width / units_visible, self.height / units_visible)
    }

    /// True when nothing can be drawn (zero, negative or NaN extent)
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// A vector mapped onto the screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSegment {
    pub start: Point,
    pub end: Point,
}

impl ScreenSegment {
    pub fn line(&self) -> Line {
        Line::new(self.start, self.end)
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// Orientation of a grid line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAxis {
    Horizontal,
    Vertical,
}

/// One line of the background grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub from: Point,
    pub to: Point,
    pub orientation: GridAxis,
    /// Integer offset from the origin in grid units
    pub offset: i32,
    /// The line through the origin
    pub is_axis: bool,
}

/// Map a vector onto a segment starting at the viewport midpoint.
///
/// `units_visible` grid units span the viewport's width and height. Spatial
/// components are flattened with [`project_to_2d`] first.
pub fn project_to_screen(
    components: &Components,
    viewport: Viewport,
    units_visible: f64,
) -> ScreenSegment {
    let (i, j) = project_to_2d(components).ij();
    let start = viewport.center();
    let unit = viewport.unit(units_visible);
    let end = Point::new(start.x + i * unit.x, start.y - j * unit.y);
    ScreenSegment { start, end }
}

/// Inverse of [`project_to_screen`] for an end point.
///
/// Returns `None` for a degenerate viewport or a non-positive unit count.
pub fn screen_to_components(point: Point, viewport: Viewport, units_visible: f64) -> Option<Components> {
    if viewport.is_degenerate() || !(units_visible > 0.0) {
        return None;
    }
    let center = viewport.center();
    let unit = viewport.unit(units_visible);
    Some(Components::planar(
        (point.x - center.x) / unit.x,
        (center.y - point.y) / unit.y,
    ))
}

/// Wing points of an arrowhead at `end`.
///
/// A zero-length segment has no direction; it is treated as pointing along +x
/// (angle 0), so both wings sit behind `end` on the left.
pub fn compute_arrowhead(
    start: Point,
    end: Point,
    head_length: f64,
    half_angle: f64,
) -> (Point, Point) {
    let angle = if start == end {
        0.0
    } else {
        (end.y - start.y).atan2(end.x - start.x)
    };

    let wing = |a: f64| Point::new(end.x - head_length * a.cos(), end.y - head_length * a.sin());
    (wing(angle + half_angle), wing(angle - half_angle))
}

/// Flatten 3D components onto the i/j plane.
///
/// This is a fixed linear map that keeps i and j and drops k; it is not a
/// camera projection. Planar components pass through unchanged.
pub fn project_to_2d(components: &Components) -> Components {
    match *components {
        Components::Planar { .. } => *components,
        Components::Spatial { i, j, k } => {
            let flatten = DMat3::from_cols(DVec3::X, DVec3::Y, DVec3::ZERO);
            let projected = flatten * DVec3::new(i, j, k);
            Components::planar(projected.x, projected.y)
        }
    }
}

/// Horizontal then vertical grid lines for every offset in
/// `-half_range..=half_range`.
pub fn grid_lines(viewport: Viewport, units_visible: f64, half_range: i32) -> Vec<GridLine> {
    let half_range = half_range.max(0);
    let center = viewport.center();
    let unit = viewport.unit(units_visible);
    let mut lines = Vec::with_capacity(2 * (2 * half_range as usize + 1));

    for offset in -half_range..=half_range {
        let y = center.y - offset as f64 * unit.y;
        lines.push(GridLine {
            from: Point::new(0.0, y),
            to: Point::new(viewport.width, y),
            orientation: GridAxis::Horizontal,
            offset,
            is_axis: offset == 0,
        });
    }

    for offset in -half_range..=half_range {
        let x = center.x - offset as f64 * unit.x;
        lines.push(GridLine {
            from: Point::new(x, 0.0),
            to: Point::new(x, viewport.height),
            orientation: GridAxis::Vertical,
            offset,
            is_axis: offset == 0,
        });
    }

    lines
}

/// Shortest distance from `point` to the segment
pub fn distance_to_segment(point: Point, segment: &ScreenSegment) -> f64 {
    if segment.is_degenerate() {
        return point.distance(segment.start);
    }
    segment.line().nearest(point, 1e-9).distance_sq.sqrt()
}

/// Pick the candidate whose segment lies closest to `point`, within `tolerance`
pub fn pick_nearest<'a, T, I>(point: Point, candidates: I, tolerance: f64) -> Option<T>
where
    I: IntoIterator<Item = (T, &'a ScreenSegment)>,
{
    candidates
        .into_iter()
        .map(|(item, segment)| (item, distance_to_segment(point, segment)))
        .filter(|(_, distance)| *distance <= tolerance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(item, _)| item)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_project_to_screen_starts_at_center() {
        let vp = Viewport::new(450.0, 300.0);
        let seg = project_to_screen(&Components::planar(2.0, 3.0), vp, UNITS_VISIBLE_PER_AXIS);
        assert_eq!(seg.start, Point::new(225.0, 150.0));
    }

    #[test]
    fn test_project_to_screen_scales_and_inverts_j() {
        let vp = Viewport::square(160.0);
        let seg = project_to_screen(&Components::planar(2.0, 3.0), vp, 16.0);
        // one unit = 10px
        assert!(approx(seg.end.x, 80.0 + 20.0));
        assert!(approx(seg.end.y, 80.0 - 30.0));

        let down = project_to_screen(&Components::planar(1.0, -4.0), vp, 16.0);
        assert!(down.end.y > down.start.y);
    }

    #[test]
    fn test_project_then_inverse_recovers_components() {
        let vp = Viewport::new(450.0, 317.0);
        for &(i, j) in &[(2.0, 3.0), (1.0, -4.0), (-7.5, 0.25), (0.0, 0.0), (123.0, -98.5)] {
            let seg = project_to_screen(&Components::planar(i, j), vp, UNITS_VISIBLE_PER_AXIS);
            let back = screen_to_components(seg.end, vp, UNITS_VISIBLE_PER_AXIS).unwrap();
            let (bi, bj) = back.ij();
            assert!((bi - i).abs() < 1e-9, "i: {bi} vs {i}");
            assert!((bj - j).abs() < 1e-9, "j: {bj} vs {j}");
        }
    }

    #[test]
    fn test_screen_to_components_degenerate_viewport() {
        assert!(screen_to_components(Point::ZERO, Viewport::new(0.0, 10.0), 16.0).is_none());
        assert!(screen_to_components(Point::ZERO, Viewport::square(10.0), 0.0).is_none());
    }

    #[test]
    fn test_arrowhead_along_positive_x() {
        let (w1, w2) = compute_arrowhead(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            ARROW_HEAD_LENGTH,
            ARROW_HEAD_HALF_ANGLE,
        );
        // symmetric about the x axis
        assert!(approx(w1.x, w2.x));
        assert!(approx(w1.y, -w2.y));
        // behind the tip, 30 degrees off the reversed direction
        let expected_x = 10.0 - 10.0 * (30.0_f64).to_radians().cos();
        let expected_y = 10.0 * (30.0_f64).to_radians().sin();
        assert!(approx(w1.x, expected_x));
        assert!(approx(w1.y.abs(), expected_y));

        let back = Vec2::new(-1.0, 0.0);
        for w in [w1, w2] {
            let v = w - Point::new(10.0, 0.0);
            let cos = v.dot(back) / v.hypot();
            assert!(approx(cos, (30.0_f64).to_radians().cos()));
            assert!(approx(v.hypot(), ARROW_HEAD_LENGTH));
        }
    }

    #[test]
    fn test_arrowhead_zero_length_points_along_x() {
        let p = Point::new(5.0, 5.0);
        let (w1, w2) = compute_arrowhead(p, p, 10.0, ARROW_HEAD_HALF_ANGLE);
        let (e1, e2) = compute_arrowhead(Point::new(-5.0, 5.0), p, 10.0, ARROW_HEAD_HALF_ANGLE);
        assert!(approx(w1.x, e1.x) && approx(w1.y, e1.y));
        assert!(approx(w2.x, e2.x) && approx(w2.y, e2.y));
        assert!(w1.x < p.x && w2.x < p.x);
    }

    #[test]
    fn test_arrowhead_wings_are_head_length_from_tip() {
        let end = Point::new(-3.0, 12.0);
        let (w1, w2) = compute_arrowhead(Point::new(4.0, 1.0), end, 7.5, 0.4);
        assert!(approx(w1.distance(end), 7.5));
        assert!(approx(w2.distance(end), 7.5));
    }

    #[test]
    fn test_project_to_2d_drops_k() {
        let flat = project_to_2d(&Components::spatial(2.0, -3.0, 9.0));
        assert_eq!(flat, Components::planar(2.0, -3.0));
        let planar = Components::planar(1.0, 1.0);
        assert_eq!(project_to_2d(&planar), planar);
    }

    #[test]
    fn test_spatial_projects_like_its_ij() {
        let vp = Viewport::square(450.0);
        let a = project_to_screen(&Components::spatial(2.0, 3.0, 5.0), vp, 16.0);
        let b = project_to_screen(&Components::planar(2.0, 3.0), vp, 16.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_grid_lines_default_count_and_axis() {
        let vp = Viewport::square(450.0);
        let lines = grid_lines(vp, UNITS_VISIBLE_PER_AXIS, GRID_HALF_RANGE);
        assert_eq!(lines.len(), 30);
        assert_eq!(lines.iter().filter(|l| l.is_axis).count(), 2);
        assert_eq!(
            lines.iter().filter(|l| l.orientation == GridAxis::Horizontal).count(),
            15
        );

        let h_axis = lines
            .iter()
            .find(|l| l.is_axis && l.orientation == GridAxis::Horizontal)
            .unwrap();
        assert!(approx(h_axis.from.y, 225.0));
        assert!(approx(h_axis.to.x, 450.0));
    }

    #[test]
    fn test_grid_line_positions() {
        let vp = Viewport::square(160.0);
        let lines = grid_lines(vp, 16.0, 7);
        let h_plus_one = lines
            .iter()
            .find(|l| l.orientation == GridAxis::Horizontal && l.offset == 1)
            .unwrap();
        assert!(approx(h_plus_one.from.y, 70.0));
        let v_plus_one = lines
            .iter()
            .find(|l| l.orientation == GridAxis::Vertical && l.offset == 1)
            .unwrap();
        assert!(approx(v_plus_one.from.x, 70.0));
        assert!(approx(v_plus_one.to.y, 160.0));
    }

    #[test]
    fn test_grid_lines_negative_range_is_axis_only() {
        let lines = grid_lines(Viewport::square(100.0), 16.0, -3);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.is_axis));
    }

    #[test]
    fn test_distance_to_segment() {
        let seg = ScreenSegment {
            start: Point::new(0.0, 0.0),
            end: Point::new(10.0, 0.0),
        };
        assert!(approx(distance_to_segment(Point::new(5.0, 3.0), &seg), 3.0));
        assert!(approx(distance_to_segment(Point::new(13.0, 4.0), &seg), 5.0));
        assert!(approx(distance_to_segment(Point::new(-3.0, 0.0), &seg), 3.0));
    }

    #[test]
    fn test_distance_to_degenerate_segment() {
        let p = Point::new(1.0, 1.0);
        let seg = ScreenSegment { start: p, end: p };
        assert!(approx(distance_to_segment(Point::new(4.0, 5.0), &seg), 5.0));
    }

    #[test]
    fn test_pick_nearest_within_tolerance() {
        let a = ScreenSegment {
            start: Point::new(0.0, 0.0),
            end: Point::new(10.0, 0.0),
        };
        let b = ScreenSegment {
            start: Point::new(0.0, 0.0),
            end: Point::new(0.0, 10.0),
        };
        let candidates = vec![("a", &a), ("b", &b)];
        assert_eq!(pick_nearest(Point::new(6.0, 1.0), candidates.clone(), 3.0), Some("a"));
        assert_eq!(pick_nearest(Point::new(1.0, 7.0), candidates.clone(), 3.0), Some("b"));
        assert_eq!(pick_nearest(Point::new(8.0, 8.0), candidates, 3.0), None);
    }
}
