//! Per-segment mesh construction between adjacent peptide planes.

use glam::Vec3;

use super::plane::PeptidePlane;
use super::profile::{point_profile, segment_profiles, Profile};
use super::spline::spline_for_planes;
use crate::mesh::{triangulate_quad, Mesh};
use crate::options::CartoonOptions;
use crate::protein::SecondaryStructure;
use crate::util::easing::Easing;

/// Linear blend that reproduces `a` at t = 0 and `b` at t = 1 exactly,
/// so collapsed cap rings yield exactly coincident quad corners.
fn mix(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a * (1.0 - t) + b * t
}

/// Easing curve for a segment, from the raw begin type and the resolved
/// transition of the interior plane. Chain ends always taper to their
/// point caps with circular curves.
fn select_easing(
    index: usize,
    count: usize,
    type0: SecondaryStructure,
    type1: SecondaryStructure,
    type2: SecondaryStructure,
) -> Easing {
    let strand = SecondaryStructure::Strand;
    let mut ease = Easing::Linear;
    if !(type0 == strand && type2 != strand) {
        ease = Easing::QuadInOut;
    }
    if type0 == strand && type1 != strand {
        ease = Easing::CircOut;
    }
    if index == 0 {
        ease = Easing::CircOut;
    } else if index == count - 1 {
        ease = Easing::CircIn;
    }
    ease
}

/// Build the mesh for segment `index` of `count` from four consecutive
/// plane frames.
///
/// Each ring point traces two offset spline curves (begin and end
/// profile); quad strips between adjacent ring indices are blended with
/// the segment's easing curve and triangulated, skipping degenerate
/// quads from collapsed rings.
pub(crate) fn build_segment(
    index: usize,
    count: usize,
    pp1: &PeptidePlane<'_>,
    pp2: &PeptidePlane<'_>,
    pp3: &PeptidePlane<'_>,
    pp4: &PeptidePlane<'_>,
    opts: &CartoonOptions,
) -> Mesh {
    let detail = opts.profile_detail;
    let steps = opts.spline_steps;

    let type0 = pp2.residue1.structure;
    let (type1, type2) = pp2.transition();

    let (mut profile1, mut profile2) =
        segment_profiles(pp1, pp2, detail, opts);
    let ease = select_easing(index, count, type0, type1, type2);

    // Chain ends collapse to a point cap.
    if index == 0 {
        profile1 = point_profile(detail, profile1.kind);
    } else if index == count - 1 {
        profile2 = point_profile(detail, profile2.kind);
    }

    log::trace!(
        "segment {index}/{count}: {:?} -> {:?}",
        profile1.kind,
        profile2.kind
    );

    let curves = |profile: &Profile| -> Vec<Vec<Vec3>> {
        profile
            .points
            .iter()
            .map(|p| spline_for_planes(pp1, pp2, pp3, pp4, steps, p.x, p.y))
            .collect()
    };
    let splines1 = curves(&profile1);
    let splines2 = curves(&profile2);

    let mut triangles = Vec::with_capacity(detail * steps * 2);

    for i in 0..steps {
        let t0 = ease.evaluate(i as f32 / steps as f32);
        let t1 = ease.evaluate((i + 1) as f32 / steps as f32);

        if i == 0
            && type1 == SecondaryStructure::Strand
            && type2 != SecondaryStructure::Strand
        {
            // Fan the first ring into the flat back face of the arrowhead.
            let p00 = splines1[0][i];
            let p10 = splines1[detail / 4][i];
            let p11 = splines1[detail / 2][i];
            let p01 = splines1[3 * detail / 4][i];
            triangulate_quad(&mut triangles, p00, p01, p11, p10);
        }

        for j in 0..detail {
            let k = (j + 1) % detail;
            let p100 = splines1[j][i];
            let p101 = splines1[j][i + 1];
            let p110 = splines1[k][i];
            let p111 = splines1[k][i + 1];
            let p200 = splines2[j][i];
            let p201 = splines2[j][i + 1];
            let p210 = splines2[k][i];
            let p211 = splines2[k][i + 1];
            let p00 = mix(p100, p200, t0);
            let p01 = mix(p101, p201, t1);
            let p10 = mix(p110, p210, t0);
            let p11 = mix(p111, p211, t1);
            triangulate_quad(&mut triangles, p10, p11, p01, p00);
        }
    }

    Mesh { triangles, lines: Vec::new() }
}
