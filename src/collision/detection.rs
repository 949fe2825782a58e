use crate::math::vec2::Vec2;
use crate::objects::body::Body;
use crate::shapes::Shape;
use log::trace;
use rand::Rng;

/// Minimum translation found by a SAT query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatResult {
    /// Overlap along `axis`. Zero for shapes that merely touch.
    pub penetration: f64,
    /// Unit axis pointing the way the first shape has to move to separate.
    pub axis: Vec2,
    /// World-space vertex standing in for the contact.
    pub contact_vertex: Vec2,
}

/// Pseudo-random unit vector; the axis for two circles sharing a center.
fn random_axis() -> Vec2 {
    let angle = rand::thread_rng().gen_range(0.0..std::f64::consts::TAU);
    Vec2::new(angle.cos(), angle.sin())
}

/// Candidate axes contributed by `shape` when tested against `other`.
fn push_shape_axes(shape: &Shape, other: &Shape, axes: &mut Vec<Vec2>) {
    match shape {
        Shape::Circle(c) => axes.push((other.closest_vertex_to(c.pos) - c.pos).unit()),
        Shape::Line(l) => axes.push(l.dir.normal()),
        Shape::Rectangle(r) => {
            axes.push(r.dir.normal());
            axes.push(r.dir);
        }
        Shape::Triangle(t) => axes.extend(t.edges().iter().map(|e| e.normal())),
    }
}

/// All candidate separating axes, shape 1's before shape 2's.
fn find_axes(s1: &Shape, s2: &Shape) -> Vec<Vec2> {
    if let (Shape::Circle(c1), Shape::Circle(c2)) = (s1, s2) {
        let between = c2.pos - c1.pos;
        if between.magnitude() > 0.0 {
            return vec![between.unit()];
        }
        trace!("coincident circle centers at {:?}, using a random axis", c1.pos);
        return vec![random_axis()];
    }
    let mut axes = Vec::with_capacity(s1.axis_count() + s2.axis_count());
    push_shape_axes(s1, s2, &mut axes);
    push_shape_axes(s2, s1, &mut axes);
    axes
}

/// Separating Axis Theorem on two convex components.
///
/// Returns `None` as soon as one axis separates the shapes. Otherwise the
/// axis of least overlap (first one on ties) becomes the minimum translation
/// vector. A raw overlap of zero is not a separation: a line has no extent
/// along its own normal, and its depth only shows up through the
/// nested-interval adjustment below.
pub fn sat(s1: &Shape, s2: &Shape) -> Option<SatResult> {
    let axes = find_axes(s1, s2);
    let first_shape_axes = s1.axis_count();

    let mut min_overlap = f64::INFINITY;
    let mut smallest_axis = Vec2::ZERO;
    let mut vertex_from_second = true;

    for (i, &candidate) in axes.iter().enumerate() {
        let proj1 = s1.project(candidate);
        let proj2 = s2.project(candidate);

        let mut overlap = proj1.max.min(proj2.max) - proj1.min.max(proj2.min);
        if overlap < 0.0 {
            return None;
        }

        // One interval nested in the other: the raw overlap says nothing about
        // how far the inner shape has to travel, so measure to the nearer end.
        let mut axis = candidate;
        if proj1.nests_with(&proj2) {
            let mins = (proj1.min - proj2.min).abs();
            let maxs = (proj1.max - proj2.max).abs();
            if mins < maxs {
                overlap += mins;
            } else {
                overlap += maxs;
                axis = -axis;
            }
        }

        if overlap < min_overlap {
            min_overlap = overlap;
            if i < first_shape_axes {
                vertex_from_second = true;
                smallest_axis = if proj1.max > proj2.max { -axis } else { axis };
            } else {
                vertex_from_second = false;
                smallest_axis = if proj1.max < proj2.max { -axis } else { axis };
            }
        }
    }

    if !min_overlap.is_finite() {
        return None;
    }

    let vertex_owner = if vertex_from_second { s2 } else { s1 };
    let contact_vertex = vertex_owner.project(smallest_axis).min_vertex;
    if vertex_from_second {
        smallest_axis = -smallest_axis;
    }

    Some(SatResult {
        penetration: min_overlap,
        axis: smallest_axis,
        contact_vertex,
    })
}

/// Tests every component pair of two bodies and keeps the deepest overlap.
///
/// Only strictly positive penetrations count, so bodies that merely touch do
/// not collide. Layers are not consulted here.
pub fn collide(a: &Body, b: &Body) -> Option<SatResult> {
    let mut best: Option<SatResult> = None;
    for s1 in &a.comp {
        for s2 in &b.comp {
            if let Some(result) = sat(s1, s2) {
                let deepest = best.map_or(0.0, |b| b.penetration);
                if result.penetration > deepest {
                    best = Some(result);
                }
            }
        }
    }
    best
}
