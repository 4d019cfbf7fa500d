// src/intersection.rs

//! Screen-space clipping of projected faces against the surface rectangle.
//!
//! This is not frustum clipping. Each off-screen vertex is replaced by the
//! point where the segment to an on-screen neighbour crosses the screen
//! boundary. It holds up while a face leaves the screen through one boundary
//! run at a time; a face can come out wrong when its off-screen run spans a
//! corner, and a face with no on-screen vertex is dropped even if it covers
//! the whole screen.

use crate::geometry::{Offscreen, Point2, ProjectedPoint};

/// The visible rectangle `[0, width] x [0, height]` in device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenRect {
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point2 {
        Point2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn corners(&self) -> [Point2; 4] {
        [
            Point2::new(0.0, 0.0),
            Point2::new(self.width, 0.0),
            Point2::new(self.width, self.height),
            Point2::new(0.0, self.height),
        ]
    }

    /// The four sides as directed segments, corner to corner: top, right, bottom, left.
    pub fn edges(&self) -> [(Point2, Point2); 4] {
        let [a, b, c, d] = self.corners();
        [(a, b), (b, c), (c, d), (d, a)]
    }

    /// Closed-interval containment; a point exactly on the border is on screen.
    /// A non-finite point is off every side.
    pub fn classify(&self, point: Point2) -> Offscreen {
        if !(point.x.is_finite() && point.y.is_finite()) {
            return Offscreen::LEFT | Offscreen::RIGHT | Offscreen::TOP | Offscreen::BOTTOM;
        }
        let mut flags = Offscreen::empty();
        if point.x < 0.0 {
            flags |= Offscreen::LEFT;
        } else if point.x > self.width {
            flags |= Offscreen::RIGHT;
        }
        if point.y < 0.0 {
            flags |= Offscreen::TOP;
        } else if point.y > self.height {
            flags |= Offscreen::BOTTOM;
        }
        flags
    }
}

/// Where segment `p -> r` crosses boundary segment `c -> d`, as the fraction
/// `alpha` along `p -> r`.
///
/// Only strict interior crossings count: touching either segment at an
/// endpoint, or running parallel to it, yields `None`.
pub fn crossing_of_lines(c: Point2, d: Point2, p: Point2, r: Point2) -> Option<f64> {
    let edge = d.sub(&c);
    let segment = r.sub(&p);
    let to_edge = c.sub(&p);

    let a = edge.cross(&to_edge);
    let b = edge.cross(&segment);
    let c = segment.cross(&to_edge);

    if b == 0.0 {
        return None;
    }

    let alpha = a / b;
    let beta = c / b;

    // A NaN fraction must fail this test.
    if !(alpha > 0.0 && alpha < 1.0 && beta > 0.0 && beta < 1.0) {
        return None;
    }
    Some(alpha)
}

/// How off-screen vertices pick the on-screen neighbour(s) they are clipped against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClipMode {
    /// One neighbour per off-screen vertex: the previous one if it is on
    /// screen, otherwise the next one.
    #[default]
    SingleNeighbor,
    /// Every on-screen neighbour contributes its crossing, previous first.
    /// Closes polygons along the boundary where `SingleNeighbor` cuts a corner.
    BothNeighbors,
}

#[derive(Debug)]
pub struct ScreenClipper {
    screen: ScreenRect,
    mode: ClipMode,
}

impl ScreenClipper {
    pub fn new(screen: ScreenRect, mode: ClipMode) -> Self {
        Self { screen, mode }
    }

    /// Appends every crossing of `off -> reference` with the screen border.
    fn push_boundary_crossings(&self, off: Point2, reference: Point2, output: &mut Vec<Point2>) {
        for (c, d) in self.screen.edges() {
            if let Some(alpha) = crossing_of_lines(c, d, off, reference) {
                output.push(off.lerp(&reference, alpha));
            }
        }
    }

    /// Builds the device-space polygon for one projected face.
    ///
    /// Returns `None` when no vertex is on screen. Otherwise the result keeps
    /// the input winding and always has at least three points; a degenerate
    /// result is padded by repeating its first point.
    pub fn clip_polygon(&self, projected: &[ProjectedPoint]) -> Option<Vec<Point2>> {
        if !projected.iter().any(ProjectedPoint::is_on_screen) {
            return None;
        }

        let count = projected.len();
        let mut output = Vec::with_capacity(count + 2);

        for (i, vertex) in projected.iter().enumerate() {
            if vertex.is_on_screen() {
                output.push(vertex.position);
                continue;
            }

            let previous = &projected[(i + count - 1) % count];
            let next = &projected[(i + 1) % count];

            match self.mode {
                ClipMode::SingleNeighbor => {
                    let reference = if previous.is_on_screen() {
                        Some(previous)
                    } else if next.is_on_screen() {
                        Some(next)
                    } else {
                        None
                    };
                    if let Some(reference) = reference {
                        self.push_boundary_crossings(vertex.position, reference.position, &mut output);
                    }
                }
                ClipMode::BothNeighbors => {
                    if previous.is_on_screen() {
                        self.push_boundary_crossings(vertex.position, previous.position, &mut output);
                    }
                    if next.is_on_screen() && count > 2 {
                        self.push_boundary_crossings(vertex.position, next.position, &mut output);
                    }
                }
            }
        }

        // At least one vertex was on screen, so there is a first point.
        let first = output[0];
        while output.len() < 3 {
            output.push(first);
        }
        Some(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn screen() -> ScreenRect {
        ScreenRect::new(100.0, 100.0)
    }

    fn projected(screen: &ScreenRect, x: f64, y: f64) -> ProjectedPoint {
        let position = Point2::new(x, y);
        ProjectedPoint {
            position,
            offscreen: screen.classify(position),
            depth: 1.0,
        }
    }

    #[test]
    fn classify_flags_each_side() {
        let s = screen();
        assert_eq!(s.classify(Point2::new(50.0, 50.0)), Offscreen::empty());
        assert_eq!(s.classify(Point2::new(0.0, 100.0)), Offscreen::empty());
        assert_eq!(s.classify(Point2::new(-1.0, 50.0)), Offscreen::LEFT);
        assert_eq!(s.classify(Point2::new(101.0, 50.0)), Offscreen::RIGHT);
        assert_eq!(s.classify(Point2::new(50.0, -1.0)), Offscreen::TOP);
        assert_eq!(
            s.classify(Point2::new(101.0, 101.0)),
            Offscreen::RIGHT | Offscreen::BOTTOM
        );
    }

    #[test]
    fn crossing_of_left_edge_lands_on_x_zero() {
        let (c, d) = screen().edges()[3];
        let p = Point2::new(-30.0, 10.0);
        let r = Point2::new(70.0, 60.0);

        let alpha = crossing_of_lines(c, d, p, r).unwrap();
        assert_abs_diff_eq!(alpha, 0.3, epsilon = 1e-12);

        let hit = p.lerp(&r, alpha);
        assert_abs_diff_eq!(hit.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(hit.y, 25.0, epsilon = 1e-6);
    }

    #[test]
    fn parallel_and_endpoint_crossings_are_rejected() {
        let (c, d) = screen().edges()[0];
        // Parallel to the top edge.
        assert_eq!(
            crossing_of_lines(c, d, Point2::new(-10.0, -5.0), Point2::new(50.0, -5.0)),
            None
        );
        // Ends exactly on the top edge.
        assert_eq!(
            crossing_of_lines(c, d, Point2::new(50.0, -10.0), Point2::new(50.0, 0.0)),
            None
        );
        // Crosses the edge's line outside the edge itself.
        assert_eq!(
            crossing_of_lines(c, d, Point2::new(150.0, -10.0), Point2::new(150.0, 10.0)),
            None
        );
    }

    #[test]
    fn fully_visible_polygon_passes_through() {
        let s = screen();
        let input = [
            projected(&s, 10.0, 10.0),
            projected(&s, 90.0, 10.0),
            projected(&s, 90.0, 90.0),
            projected(&s, 10.0, 90.0),
        ];
        let clipped = ScreenClipper::new(s, ClipMode::SingleNeighbor)
            .clip_polygon(&input)
            .unwrap();
        let expected: Vec<Point2> = input.iter().map(|p| p.position).collect();
        assert_eq!(clipped, expected);
    }

    #[test]
    fn no_visible_vertex_skips_the_face() {
        let s = screen();
        // Covers the whole screen, but every corner is outside it.
        let input = [
            projected(&s, -10.0, -10.0),
            projected(&s, 110.0, -10.0),
            projected(&s, 110.0, 110.0),
            projected(&s, -10.0, 110.0),
        ];
        assert!(ScreenClipper::new(s, ClipMode::SingleNeighbor)
            .clip_polygon(&input)
            .is_none());
    }

    #[test]
    fn single_neighbor_prefers_previous_vertex() {
        let s = screen();
        let input = [
            projected(&s, 50.0, 50.0),
            projected(&s, -50.0, 50.0),
            projected(&s, 50.0, 90.0),
        ];
        let clipped = ScreenClipper::new(s, ClipMode::SingleNeighbor)
            .clip_polygon(&input)
            .unwrap();
        assert_eq!(clipped.len(), 3);
        assert_eq!(clipped[0], Point2::new(50.0, 50.0));
        assert_abs_diff_eq!(clipped[1].x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(clipped[1].y, 50.0, epsilon = 1e-9);
        assert_eq!(clipped[2], Point2::new(50.0, 90.0));
    }

    #[test]
    fn single_neighbor_falls_back_to_next_vertex() {
        let s = screen();
        let input = [
            projected(&s, -50.0, 50.0),
            projected(&s, 50.0, 50.0),
            projected(&s, 150.0, 50.0),
        ];
        let clipped = ScreenClipper::new(s, ClipMode::SingleNeighbor)
            .clip_polygon(&input)
            .unwrap();
        // Vertex 0 has no on-screen previous (vertex 2), so it uses vertex 1.
        // Vertex 2 uses its previous, vertex 1.
        assert_eq!(clipped.len(), 3);
        assert_abs_diff_eq!(clipped[0].x, 0.0, epsilon = 1e-9);
        assert_eq!(clipped[1], Point2::new(50.0, 50.0));
        assert_abs_diff_eq!(clipped[2].x, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn both_neighbors_closes_along_the_boundary() {
        let s = screen();
        let input = [
            projected(&s, 50.0, 50.0),
            projected(&s, -50.0, 50.0),
            projected(&s, 50.0, 90.0),
        ];
        let clipped = ScreenClipper::new(s, ClipMode::BothNeighbors)
            .clip_polygon(&input)
            .unwrap();
        assert_eq!(clipped.len(), 4);
        assert_abs_diff_eq!(clipped[1].x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(clipped[1].y, 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(clipped[2].x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(clipped[2].y, 70.0, epsilon = 1e-9);
        for p in &clipped {
            assert!((-1e-9..=100.0 + 1e-9).contains(&p.x), "{p:?} is off screen");
            assert!((-1e-9..=100.0 + 1e-9).contains(&p.y), "{p:?} is off screen");
        }
    }

    #[test]
    fn degenerate_output_is_padded_with_first_point() {
        let s = screen();
        // The off-screen neighbours only touch the screen at a corner, which
        // is not a strict crossing, so only the visible vertex survives.
        let input = [
            projected(&s, 50.0, 50.0),
            projected(&s, 300.0, 300.0),
            projected(&s, -300.0, -300.0),
        ];
        let clipped = ScreenClipper::new(s, ClipMode::SingleNeighbor)
            .clip_polygon(&input)
            .unwrap();
        assert_eq!(clipped.len(), 3);
        assert!(clipped.iter().all(|p| *p == clipped[0]));
    }

    #[test]
    fn non_finite_points_never_cross_or_survive() {
        let s = screen();
        let inside = Point2::new(50.0, 50.0);
        for (c, d) in s.edges() {
            assert_eq!(crossing_of_lines(c, d, Point2::new(f64::NAN, f64::NAN), inside), None);
            assert_eq!(
                crossing_of_lines(c, d, Point2::new(f64::NEG_INFINITY, 20.0), inside),
                None
            );
        }
        assert_eq!(
            s.classify(Point2::new(f64::NAN, 50.0)),
            Offscreen::LEFT | Offscreen::RIGHT | Offscreen::TOP | Offscreen::BOTTOM
        );

        let input = [
            projected(&s, 10.0, 10.0),
            projected(&s, f64::NAN, f64::NAN),
            projected(&s, 90.0, 10.0),
            projected(&s, 90.0, 90.0),
        ];
        for mode in [ClipMode::SingleNeighbor, ClipMode::BothNeighbors] {
            let clipped = ScreenClipper::new(s, mode).clip_polygon(&input).unwrap();
            assert_eq!(clipped.len(), 3);
            assert!(clipped.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        }
    }
}
