//! Cross-section profile rings for ribbon extrusion.
//!
//! Rings live in plane-local coordinates: x along the plane's side
//! axis, y along its normal. Ring size must be divisible by 4 (the
//! rectangle generators emit one edge per quarter).

use std::f32::consts::PI;

use glam::Vec2;

use super::plane::PeptidePlane;
use crate::options::CartoonOptions;
use crate::protein::SecondaryStructure;

/// A cross-section ring tagged with the structure type it represents.
#[derive(Debug, Clone)]
pub(crate) struct Profile {
    /// Structure type this ring renders.
    pub kind: SecondaryStructure,
    /// Ring offsets in the plane's (side, normal) axes.
    pub points: Vec<Vec2>,
}

/// Elliptical tube ring. Starts at a π/4 phase so quad seams sit off
/// the principal axes.
pub(crate) fn ellipse_profile(n: usize, w: f32, h: f32) -> Vec<Vec2> {
    (0..n)
        .map(|i| {
            let t = i as f32 / n as f32;
            let a = t * 2.0 * PI + PI / 4.0;
            Vec2::new(a.cos() * w / 2.0, a.sin() * h / 2.0)
        })
        .collect()
}

/// Axis-aligned rectangle ring, n/4 points per edge.
pub(crate) fn rectangle_profile(n: usize, w: f32, h: f32) -> Vec<Vec2> {
    let hw = w / 2.0;
    let hh = h / 2.0;
    let segments = [
        [Vec2::new(hw, hh), Vec2::new(-hw, hh)],
        [Vec2::new(-hw, hh), Vec2::new(-hw, -hh)],
        [Vec2::new(-hw, -hh), Vec2::new(hw, -hh)],
        [Vec2::new(hw, -hh), Vec2::new(hw, hh)],
    ];
    let m = n / 4;
    let mut points = Vec::with_capacity(n);
    for segment in &segments {
        for i in 0..m {
            let t = i as f32 / m as f32;
            points.push(segment[0].lerp(segment[1], t));
        }
    }
    points
}

/// Rectangle ring with semicircular caps on the short edges, for the
/// helix ribbon.
pub(crate) fn rounded_rectangle_profile(n: usize, w: f32, h: f32) -> Vec<Vec2> {
    let r = h / 2.0;
    let hw = w / 2.0 - r;
    let hh = h / 2.0;
    let m = n / 4;
    let mut points = Vec::with_capacity(n);
    // Top edge
    for i in 0..m {
        let t = i as f32 / m as f32;
        points.push(Vec2::new(hw, hh).lerp(Vec2::new(-hw, hh), t));
    }
    // Left cap
    for i in 0..m {
        let t = i as f32 / m as f32;
        let a = PI / 2.0 + PI * t;
        points.push(Vec2::new(-hw + a.cos() * r, a.sin() * r));
    }
    // Bottom edge
    for i in 0..m {
        let t = i as f32 / m as f32;
        points.push(Vec2::new(-hw, -hh).lerp(Vec2::new(hw, -hh), t));
    }
    // Right cap
    for i in 0..m {
        let t = i as f32 / m as f32;
        let a = 3.0 * PI / 2.0 + PI * t;
        points.push(Vec2::new(hw + a.cos() * r, a.sin() * r));
    }
    points
}

/// Translate a ring in place.
pub(crate) fn translate_profile(points: &mut [Vec2], dx: f32, dy: f32) {
    for p in points {
        *p += Vec2::new(dx, dy);
    }
}

/// Zero-size ring used to collapse the mesh to a point cap.
pub(crate) fn point_profile(n: usize, kind: SecondaryStructure) -> Profile {
    Profile { kind, points: ellipse_profile(n, 0.0, 0.0) }
}

/// Resolve the begin/end rings for the segment between `pp1` and `pp2`.
///
/// Shape choice follows the resolved transition of `pp1`: helix ribbon
/// (offset to the flipped side of each plane), strand arrow shaft or
/// arrowhead base, or coil tube — collapsing to zero-size rings where a
/// tube meets a strand so the shapes morph instead of clipping.
pub(crate) fn segment_profiles(
    pp1: &PeptidePlane<'_>,
    pp2: &PeptidePlane<'_>,
    n: usize,
    opts: &CartoonOptions,
) -> (Profile, Profile) {
    let type0 = pp1.residue1.structure;
    let (type1, type2) = pp1.transition();

    let offset1 =
        if pp1.flipped { -opts.ribbon_offset } else { opts.ribbon_offset };
    let offset2 =
        if pp2.flipped { -opts.ribbon_offset } else { opts.ribbon_offset };

    let points1 = match type1 {
        SecondaryStructure::AlphaHelix => {
            let mut points = if matches!(
                type0,
                SecondaryStructure::Strand | SecondaryStructure::Bridge
            ) {
                rounded_rectangle_profile(n, 0.0, 0.0)
            } else {
                rounded_rectangle_profile(
                    n,
                    opts.ribbon_width,
                    opts.ribbon_height,
                )
            };
            translate_profile(&mut points, 0.0, offset1);
            points
        }
        SecondaryStructure::Strand => {
            if type2 == SecondaryStructure::Strand {
                rectangle_profile(n, opts.arrow_width, opts.arrow_height)
            } else {
                rectangle_profile(n, opts.arrow_head_width, opts.arrow_height)
            }
        }
        _ => {
            if type0 == SecondaryStructure::Strand {
                ellipse_profile(n, 0.0, 0.0)
            } else {
                ellipse_profile(n, opts.tube_size, opts.tube_size)
            }
        }
    };

    let points2 = if type1 == SecondaryStructure::Strand
        && type2 != SecondaryStructure::Strand
    {
        // The arrow tip: the next segment's tube grows back out of it.
        rectangle_profile(n, 0.0, opts.arrow_height)
    } else {
        match type2 {
            SecondaryStructure::AlphaHelix => {
                let mut points = rounded_rectangle_profile(
                    n,
                    opts.ribbon_width,
                    opts.ribbon_height,
                );
                translate_profile(&mut points, 0.0, offset2);
                points
            }
            SecondaryStructure::Strand => {
                rectangle_profile(n, opts.arrow_width, opts.arrow_height)
            }
            _ => ellipse_profile(n, opts.tube_size, opts.tube_size),
        }
    };

    (
        Profile { kind: type1, points: points1 },
        Profile { kind: type2, points: points2 },
    )
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::protein::{AminoAcid, Atom, Residue};

    #[test]
    fn rings_have_requested_size() {
        assert_eq!(ellipse_profile(16, 1.0, 1.0).len(), 16);
        assert_eq!(rectangle_profile(16, 2.0, 0.5).len(), 16);
        assert_eq!(rounded_rectangle_profile(16, 2.0, 0.125).len(), 16);
    }

    #[test]
    fn zero_size_rings_collapse_to_origin() {
        for p in ellipse_profile(16, 0.0, 0.0) {
            assert_eq!(p, Vec2::ZERO);
        }
        for p in rectangle_profile(16, 0.0, 0.0) {
            assert_eq!(p, Vec2::ZERO);
        }
    }

    #[test]
    fn ellipse_lies_on_the_ellipse() {
        let w = 0.75;
        let h = 0.75;
        for p in ellipse_profile(32, w, h) {
            let r = (p.x / (w / 2.0)).powi(2) + (p.y / (h / 2.0)).powi(2);
            assert!((r - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn rectangle_stays_within_half_extents() {
        let points = rectangle_profile(16, 2.0, 0.5);
        for p in &points {
            assert!(p.x.abs() <= 1.0 + 1e-6);
            assert!(p.y.abs() <= 0.25 + 1e-6);
        }
        // Corners are present.
        assert!(points.contains(&Vec2::new(1.0, 0.25)));
        assert!(points.contains(&Vec2::new(-1.0, 0.25)));
    }

    #[test]
    fn translate_shifts_every_point() {
        let mut points = rectangle_profile(8, 1.0, 1.0);
        let before = points.clone();
        translate_profile(&mut points, 0.5, -1.0);
        for (p, q) in points.iter().zip(&before) {
            assert_eq!(*p, *q + Vec2::new(0.5, -1.0));
        }
    }

    fn residue(structure: SecondaryStructure) -> Residue {
        Residue {
            kind: AminoAcid::Ala,
            structure,
            phi: 0.0,
            psi: 0.0,
            solvent_area: 0.0,
            atoms: vec![
                Atom {
                    position: Vec3::ZERO,
                    element: "C".to_owned(),
                    serial: 1,
                    name: "CA".to_owned(),
                },
                Atom {
                    position: Vec3::Y,
                    element: "O".to_owned(),
                    serial: 2,
                    name: "O".to_owned(),
                },
            ],
        }
    }

    fn plane<'a>(
        r1: &'a Residue,
        r2: &'a Residue,
        r3: &'a Residue,
        flipped: bool,
    ) -> PeptidePlane<'a> {
        PeptidePlane {
            residue1: r1,
            residue2: r2,
            residue3: r3,
            position: Vec3::ZERO,
            normal: Vec3::Z,
            forward: Vec3::X,
            side: Vec3::Y,
            flipped,
        }
    }

    #[test]
    fn helix_ribbon_offset_follows_flip_state() {
        let opts = CartoonOptions::default();
        let h = residue(SecondaryStructure::AlphaHelix);

        let up = plane(&h, &h, &h, false);
        let (begin, _) = segment_profiles(&up, &up, 16, &opts);
        let mean_y = begin.points.iter().map(|p| p.y).sum::<f32>()
            / begin.points.len() as f32;
        assert!((mean_y - opts.ribbon_offset).abs() < 1e-4);

        let down = plane(&h, &h, &h, true);
        let (begin, _) = segment_profiles(&down, &down, 16, &opts);
        let mean_y = begin.points.iter().map(|p| p.y).sum::<f32>()
            / begin.points.len() as f32;
        assert!((mean_y + opts.ribbon_offset).abs() < 1e-4);
    }

    #[test]
    fn continuing_strand_uses_shaft_terminal_uses_arrowhead() {
        let opts = CartoonOptions::default();
        let s = residue(SecondaryStructure::Strand);
        let c = residue(SecondaryStructure::Coil);

        // Strand continuing: shaft width.
        let continuing = plane(&s, &s, &s, false);
        let (begin, _) = segment_profiles(&continuing, &continuing, 16, &opts);
        assert_eq!(begin.kind, SecondaryStructure::Strand);
        let max_x =
            begin.points.iter().map(|p| p.x.abs()).fold(0.0_f32, f32::max);
        assert!((max_x - opts.arrow_width / 2.0).abs() < 1e-5);

        // Strand terminating: wider arrowhead base, zero-width end ring.
        let exiting = plane(&s, &s, &c, false);
        let (begin, end) = segment_profiles(&exiting, &exiting, 16, &opts);
        let max_x =
            begin.points.iter().map(|p| p.x.abs()).fold(0.0_f32, f32::max);
        assert!((max_x - opts.arrow_head_width / 2.0).abs() < 1e-5);
        let end_width =
            end.points.iter().map(|p| p.x.abs()).fold(0.0_f32, f32::max);
        assert_eq!(end_width, 0.0, "arrow tip ring must have zero width");
    }

    #[test]
    fn coil_next_to_strand_collapses_to_zero_ring() {
        let opts = CartoonOptions::default();
        let s = residue(SecondaryStructure::Strand);
        let c = residue(SecondaryStructure::Coil);

        // Previous residue is strand, current is coil: zero begin ring.
        let p = plane(&s, &c, &c, false);
        let (begin, end) = segment_profiles(&p, &p, 16, &opts);
        assert!(begin.points.iter().all(|q| *q == Vec2::ZERO));
        // The end ring is an ordinary tube.
        let max = end.points.iter().map(|q| q.length()).fold(0.0_f32, f32::max);
        assert!((max - opts.tube_size / 2.0).abs() < 1e-5);
    }
}
