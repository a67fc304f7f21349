use crate::core::math::{sign, Mat22, Vec2};

use super::feature::{EdgeNumber, FeatureId};

#[derive(Clone, Copy, Debug, Default)]
pub(super) struct ClipVertex {
    pub v: Vec2,
    pub fp: FeatureId,
}

/// Clip segment `v_in` against the half plane `dot(normal, p) <= offset`.
///
/// Returns the number of vertices written to `v_out`. A vertex created by
/// the clip inherits the feature id of the vertex it replaces, with the
/// reference half pointing at `clip_edge`.
pub(super) fn clip_segment_to_line(
    v_out: &mut [ClipVertex; 2],
    v_in: &[ClipVertex; 2],
    normal: Vec2,
    offset: f32,
    clip_edge: EdgeNumber,
) -> usize {
    let mut num_out = 0;

    let distance0 = normal.dot(v_in[0].v) - offset;
    let distance1 = normal.dot(v_in[1].v) - offset;

    if distance0 <= 0.0 {
        v_out[num_out] = v_in[0];
        num_out += 1;
    }
    if distance1 <= 0.0 {
        v_out[num_out] = v_in[1];
        num_out += 1;
    }

    // Endpoints on opposite sides: add the intersection point.
    if distance0 * distance1 < 0.0 {
        let interp = distance0 / (distance0 - distance1);
        let v = v_in[0].v + interp * (v_in[1].v - v_in[0].v);
        let fp = if distance0 > 0.0 {
            let mut fp = v_in[0].fp;
            fp.in_edge1 = clip_edge;
            fp.in_edge2 = EdgeNumber::NoEdge;
            fp
        } else {
            let mut fp = v_in[1].fp;
            fp.out_edge1 = clip_edge;
            fp.out_edge2 = EdgeNumber::NoEdge;
            fp
        };
        v_out[num_out] = ClipVertex { v, fp };
        num_out += 1;
    }

    num_out
}

/// World-space edge of the incident box most anti-parallel to `normal`.
pub(super) fn compute_incident_edge(h: Vec2, pos: Vec2, rot: Mat22, normal: Vec2) -> [ClipVertex; 2] {
    use EdgeNumber::*;

    // The normal is from the reference box; bring it into the incident box frame and flip it.
    let n = -(rot.transpose() * normal);
    let n_abs = n.abs();

    let corners = if n_abs.x > n_abs.y {
        if sign(n.x) > 0.0 {
            [
                (Vec2::new(h.x, -h.y), Edge3, Edge4),
                (Vec2::new(h.x, h.y), Edge4, Edge1),
            ]
        } else {
            [
                (Vec2::new(-h.x, h.y), Edge1, Edge2),
                (Vec2::new(-h.x, -h.y), Edge2, Edge3),
            ]
        }
    } else if sign(n.y) > 0.0 {
        [
            (Vec2::new(h.x, h.y), Edge4, Edge1),
            (Vec2::new(-h.x, h.y), Edge1, Edge2),
        ]
    } else {
        [
            (Vec2::new(-h.x, -h.y), Edge2, Edge3),
            (Vec2::new(h.x, -h.y), Edge3, Edge4),
        ]
    };

    corners.map(|(local, in_edge2, out_edge2)| ClipVertex {
        v: pos + rot * local,
        fp: FeatureId { in_edge2, out_edge2, ..FeatureId::default() },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(x: f32, y: f32) -> ClipVertex {
        ClipVertex { v: Vec2::new(x, y), fp: FeatureId::default() }
    }

    #[test]
    fn segment_inside_is_kept_whole() {
        let mut out = [ClipVertex::default(); 2];
        let input = [vertex(-1.0, 0.0), vertex(1.0, 0.0)];
        let n = clip_segment_to_line(&mut out, &input, Vec2::new(1.0, 0.0), 2.0, EdgeNumber::Edge1);
        assert_eq!(n, 2);
        assert_eq!(out[0].v, Vec2::new(-1.0, 0.0));
        assert_eq!(out[1].v, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn crossing_segment_is_cut_and_tagged() {
        let mut out = [ClipVertex::default(); 2];
        let input = [vertex(-1.0, 0.0), vertex(3.0, 0.0)];
        let n = clip_segment_to_line(&mut out, &input, Vec2::new(1.0, 0.0), 1.0, EdgeNumber::Edge4);
        assert_eq!(n, 2);
        assert_eq!(out[1].v, Vec2::new(1.0, 0.0));
        assert_eq!(out[1].fp.out_edge1, EdgeNumber::Edge4);
        assert_eq!(out[1].fp.out_edge2, EdgeNumber::NoEdge);
    }

    #[test]
    fn segment_outside_is_dropped() {
        let mut out = [ClipVertex::default(); 2];
        let input = [vertex(2.0, 0.0), vertex(3.0, 0.0)];
        let n = clip_segment_to_line(&mut out, &input, Vec2::new(1.0, 0.0), 1.0, EdgeNumber::Edge1);
        assert_eq!(n, 0);
    }

    #[test]
    fn incident_edge_faces_the_reference_normal() {
        // Reference normal points up, so the incident box offers its bottom edge.
        let edge = compute_incident_edge(
            Vec2::new(0.5, 0.5),
            Vec2::new(0.0, 2.0),
            Mat22::identity(),
            Vec2::new(0.0, 1.0),
        );
        assert_eq!(edge[0].v, Vec2::new(-0.5, 1.5));
        assert_eq!(edge[1].v, Vec2::new(0.5, 1.5));
        assert_eq!(edge[0].fp.in_edge2, EdgeNumber::Edge2);
        assert_eq!(edge[1].fp.out_edge2, EdgeNumber::Edge4);
    }
}
