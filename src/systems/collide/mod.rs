//! Narrow phase: box versus box separating axis test.
//!
//! Only the four face normals of the two boxes are candidate axes. The axis
//! of least penetration picks a reference face; the most anti-parallel edge of
//! the other box (the incident edge) is clipped against the side planes of the
//! reference face, and clipped points below the reference face become
//! contacts.
//!
//! Separation convention: `separation > 0` means the boxes are apart along
//! the axis, so a contact always carries `separation <= 0`. The contact
//! normal points from the first body towards the second.

mod clip;
pub mod feature;

use crate::core::math::{Mat22, Vec2};
use crate::domain::body::Body;
use crate::systems::arbiter::{Contact, MAX_CONTACTS};

use clip::{clip_segment_to_line, compute_incident_edge, ClipVertex};
use feature::EdgeNumber;

pub use feature::FeatureId;

/// A face axis is only preferred over the current best when it beats it by
/// this fraction of the current separation...
const RELATIVE_TOL: f32 = 0.95;
/// ...plus this fraction of the box half extent along the axis. Keeps the
/// choice stable for nearly parallel faces so contact ids do not thrash.
const ABSOLUTE_TOL: f32 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    FaceAX,
    FaceAY,
    FaceBX,
    FaceBY,
}

/// Test `body_a` against `body_b`, writing up to two contacts.
///
/// Returns the number of contacts written; `0` means the boxes are
/// separated (or only touch along a degenerate sliver).
pub fn collide(contacts: &mut [Contact; MAX_CONTACTS], body_a: &Body, body_b: &Body) -> usize {
    // Setup
    let h_a = body_a.half_width();
    let h_b = body_b.half_width();

    let pos_a = body_a.position;
    let pos_b = body_b.position;

    let rot_a = Mat22::from_angle(body_a.rotation);
    let rot_b = Mat22::from_angle(body_b.rotation);

    let rot_at = rot_a.transpose();
    let rot_bt = rot_b.transpose();

    let dp = pos_b - pos_a;
    let d_a = rot_at * dp;
    let d_b = rot_bt * dp;

    let c = rot_at * rot_b;
    let abs_c = c.abs();
    let abs_ct = abs_c.transpose();

    // Box A faces
    let face_a = d_a.abs() - h_a - abs_c * h_b;
    if face_a.x > 0.0 || face_a.y > 0.0 {
        return 0;
    }

    // Box B faces
    let face_b = d_b.abs() - abs_ct * h_a - h_b;
    if face_b.x > 0.0 || face_b.y > 0.0 {
        return 0;
    }

    // Find best axis
    let mut axis = Axis::FaceAX;
    let mut separation = face_a.x;
    let mut normal = if d_a.x > 0.0 { rot_a.col1 } else { -rot_a.col1 };

    if face_a.y > RELATIVE_TOL * separation + ABSOLUTE_TOL * h_a.y {
        axis = Axis::FaceAY;
        separation = face_a.y;
        normal = if d_a.y > 0.0 { rot_a.col2 } else { -rot_a.col2 };
    }

    if face_b.x > RELATIVE_TOL * separation + ABSOLUTE_TOL * h_b.x {
        axis = Axis::FaceBX;
        separation = face_b.x;
        normal = if d_b.x > 0.0 { rot_b.col1 } else { -rot_b.col1 };
    }

    if face_b.y > RELATIVE_TOL * separation + ABSOLUTE_TOL * h_b.y {
        axis = Axis::FaceBY;
        normal = if d_b.y > 0.0 { rot_b.col2 } else { -rot_b.col2 };
    }

    // Setup clipping plane data based on the separating axis
    let reference = match axis {
        Axis::FaceAX => ReferenceFace::new(normal, pos_a, rot_a.col2, h_a.x, h_a.y, EdgeNumber::Edge3, EdgeNumber::Edge1),
        Axis::FaceAY => ReferenceFace::new(normal, pos_a, rot_a.col1, h_a.y, h_a.x, EdgeNumber::Edge2, EdgeNumber::Edge4),
        Axis::FaceBX => ReferenceFace::new(-normal, pos_b, rot_b.col2, h_b.x, h_b.y, EdgeNumber::Edge3, EdgeNumber::Edge1),
        Axis::FaceBY => ReferenceFace::new(-normal, pos_b, rot_b.col1, h_b.y, h_b.x, EdgeNumber::Edge2, EdgeNumber::Edge4),
    };

    let incident_edge = match axis {
        Axis::FaceAX | Axis::FaceAY => compute_incident_edge(h_b, pos_b, rot_b, reference.front_normal),
        Axis::FaceBX | Axis::FaceBY => compute_incident_edge(h_a, pos_a, rot_a, reference.front_normal),
    };

    // Clip to the box side 1
    let mut clip_points1 = [ClipVertex::default(); 2];
    let np = clip_segment_to_line(
        &mut clip_points1,
        &incident_edge,
        -reference.side_normal,
        reference.neg_side,
        reference.neg_edge,
    );
    if np < 2 {
        return 0;
    }

    // Clip to the box side 2
    let mut clip_points2 = [ClipVertex::default(); 2];
    let np = clip_segment_to_line(
        &mut clip_points2,
        &clip_points1,
        reference.side_normal,
        reference.pos_side,
        reference.pos_edge,
    );
    if np < 2 {
        return 0;
    }

    // Keep points behind the reference face, projected onto it.
    let flip = matches!(axis, Axis::FaceBX | Axis::FaceBY);
    let mut num_contacts = 0;
    for clip_point in clip_points2.iter() {
        let separation = reference.front_normal.dot(clip_point.v) - reference.front;
        if separation <= 0.0 {
            let mut feature = clip_point.fp;
            if flip {
                feature.flip();
            }
            contacts[num_contacts] = Contact::new(
                clip_point.v - separation * reference.front_normal,
                normal,
                separation,
                feature,
            );
            num_contacts += 1;
        }
    }

    num_contacts
}

/// Clip planes of the chosen reference face, in world space.
struct ReferenceFace {
    front_normal: Vec2,
    side_normal: Vec2,
    /// Offset of the reference face plane along `front_normal`
    front: f32,
    neg_side: f32,
    pos_side: f32,
    neg_edge: EdgeNumber,
    pos_edge: EdgeNumber,
}

impl ReferenceFace {
    fn new(
        front_normal: Vec2,
        center: Vec2,
        side_normal: Vec2,
        front_extent: f32,
        side_extent: f32,
        neg_edge: EdgeNumber,
        pos_edge: EdgeNumber,
    ) -> Self {
        let side = center.dot(side_normal);
        Self {
            front_normal,
            side_normal,
            front: center.dot(front_normal) + front_extent,
            neg_side: -side + side_extent,
            pos_side: side + side_extent,
            neg_edge,
            pos_edge,
        }
    }
}
