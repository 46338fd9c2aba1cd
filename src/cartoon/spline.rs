//! Uniform cubic B-spline evaluation by forward differencing.
//!
//! The curve is the smoothing (non-interpolating) uniform cubic
//! B-spline: control points influence but are not all touched exactly.
//! The coefficient matrix S·B·G is computed once per control-point
//! quadruple; every subsequent sample is produced in constant time by
//! accumulating the matrix's difference rows instead of re-evaluating
//! the t⁰..t³ powers per sample.

use glam::{Mat4, Vec3, Vec4};

use super::plane::PeptidePlane;

/// Build a matrix from row vectors (glam is column-major).
fn mat4_from_rows(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Mat4 {
    Mat4::from_cols(r0, r1, r2, r3).transpose()
}

/// Basis matrix of the uniform cubic B-spline, scaled by 1/6.
fn basis_matrix() -> Mat4 {
    mat4_from_rows(
        Vec4::new(-1.0, 3.0, -3.0, 1.0),
        Vec4::new(3.0, -6.0, 3.0, 0.0),
        Vec4::new(-3.0, 0.0, 3.0, 0.0),
        Vec4::new(1.0, 4.0, 1.0, 0.0),
    ) * (1.0 / 6.0)
}

/// Step matrix folding the 1/steps parameter increment into the
/// polynomial rows, so row additions advance the parameter by one step.
fn step_matrix(steps: usize) -> Mat4 {
    let n1 = steps as f32;
    let n2 = n1 * n1;
    let n3 = n2 * n1;
    mat4_from_rows(
        Vec4::new(6.0 / n3, 0.0, 0.0, 0.0),
        Vec4::new(6.0 / n3, 2.0 / n2, 0.0, 0.0),
        Vec4::new(1.0 / n3, 1.0 / n2, 1.0 / n1, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    )
}

fn coefficient_matrix(
    g1: Vec3,
    g2: Vec3,
    g3: Vec3,
    g4: Vec3,
    steps: usize,
) -> Mat4 {
    let geometry = mat4_from_rows(
        g1.extend(1.0),
        g2.extend(1.0),
        g3.extend(1.0),
        g4.extend(1.0),
    );
    step_matrix(steps) * basis_matrix() * geometry
}

/// Stepped spline coefficients in homogeneous form. `value` is the
/// current sample row; the delta rows are the running finite
/// differences.
struct ForwardDifferences {
    value: Vec4,
    delta1: Vec4,
    delta2: Vec4,
    delta3: Vec4,
}

impl ForwardDifferences {
    fn new(m: &Mat4) -> Self {
        Self {
            value: m.row(3),
            delta1: m.row(2),
            delta2: m.row(1),
            delta3: m.row(0),
        }
    }

    /// Current sample after the homogeneous divide.
    fn sample(&self) -> Vec3 {
        self.value.truncate() / self.value.w
    }

    /// Advance one parameter step by adding the running deltas.
    fn advance(&mut self) {
        self.value += self.delta1;
        self.delta1 += self.delta2;
        self.delta2 += self.delta3;
    }
}

/// Sample the spline through four control points at `steps + 1`
/// parameter values covering [0, 1].
pub(crate) fn spline(
    g1: Vec3,
    g2: Vec3,
    g3: Vec3,
    g4: Vec3,
    steps: usize,
) -> Vec<Vec3> {
    let matrix = coefficient_matrix(g1, g2, g3, g4, steps);
    let mut fd = ForwardDifferences::new(&matrix);
    let mut samples = Vec::with_capacity(steps + 1);
    samples.push(fd.sample());
    for _ in 0..steps {
        fd.advance();
        samples.push(fd.sample());
    }
    samples
}

/// Spline through four plane frames with a 2D profile offset `(u, v)`
/// applied in each plane's (side, normal) axes, so each ring vertex
/// traces its own offset curve.
pub(crate) fn spline_for_planes(
    p1: &PeptidePlane<'_>,
    p2: &PeptidePlane<'_>,
    p3: &PeptidePlane<'_>,
    p4: &PeptidePlane<'_>,
    steps: usize,
    u: f32,
    v: f32,
) -> Vec<Vec3> {
    let g1 = p1.position + p1.side * u + p1.normal * v;
    let g2 = p2.position + p2.side * u + p2.normal * v;
    let g3 = p3.position + p3.side * u + p3.normal * v;
    let g4 = p4.position + p4.side * u + p4.normal * v;
    spline(g1, g2, g3, g4, steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Direct polynomial evaluation of the same uniform B-spline basis.
    fn direct(g1: Vec3, g2: Vec3, g3: Vec3, g4: Vec3, t: f32) -> Vec3 {
        let b0 = (1.0 - t).powi(3) / 6.0;
        let b1 = (3.0 * t.powi(3) - 6.0 * t.powi(2) + 4.0) / 6.0;
        let b2 = (-3.0 * t.powi(3) + 3.0 * t.powi(2) + 3.0 * t + 1.0) / 6.0;
        let b3 = t.powi(3) / 6.0;
        g1 * b0 + g2 * b1 + g3 * b2 + g4 * b3
    }

    #[test]
    fn incremental_matches_direct_evaluation() {
        let g1 = Vec3::new(0.0, 0.0, 0.0);
        let g2 = Vec3::new(1.0, 2.0, -1.0);
        let g3 = Vec3::new(2.0, -1.0, 0.5);
        let g4 = Vec3::new(3.0, 0.5, 1.5);
        let steps = 32;

        let samples = spline(g1, g2, g3, g4, steps);
        assert_eq!(samples.len(), steps + 1);

        for (k, sample) in samples.iter().enumerate() {
            let t = k as f32 / steps as f32;
            let expected = direct(g1, g2, g3, g4, t);
            assert!(
                (*sample - expected).length() < 1e-3,
                "step {k}: incremental {sample:?} vs direct {expected:?}",
            );
        }
    }

    #[test]
    fn first_sample_is_the_basis_average() {
        let g1 = Vec3::new(-1.0, 0.0, 0.0);
        let g2 = Vec3::new(0.0, 6.0, 0.0);
        let g3 = Vec3::new(1.0, 0.0, 0.0);
        let g4 = Vec3::new(9.0, 9.0, 9.0);
        let samples = spline(g1, g2, g3, g4, 8);
        let expected = (g1 + g2 * 4.0 + g3) / 6.0;
        assert!((samples[0] - expected).length() < 1e-5);
    }

    #[test]
    fn collinear_control_points_stay_collinear() {
        let samples = spline(
            Vec3::ZERO,
            Vec3::X,
            Vec3::X * 2.0,
            Vec3::X * 3.0,
            16,
        );
        for s in &samples {
            assert!(s.y.abs() < 1e-5 && s.z.abs() < 1e-5, "sample {s:?}");
        }
        // Samples advance monotonically along the line.
        for pair in samples.windows(2) {
            assert!(pair[1].x > pair[0].x);
        }
    }

    #[test]
    fn identical_offset_curves_are_identical() {
        use crate::protein::{AminoAcid, Atom, Residue, SecondaryStructure};

        let residue = Residue {
            kind: AminoAcid::Ala,
            structure: SecondaryStructure::Coil,
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
        };
        let shifted = {
            let mut r = residue.clone();
            r.atoms[0].position = Vec3::new(1.0, 0.0, 0.0);
            r.atoms[1].position = Vec3::new(1.0, 1.0, 0.0);
            r
        };
        let p1 = PeptidePlane::new(0, &residue, &shifted, &residue).unwrap();
        let a = spline_for_planes(&p1, &p1, &p1, &p1, 4, 0.25, -0.5);
        let b = spline_for_planes(&p1, &p1, &p1, &p1, 4, 0.25, -0.5);
        assert_eq!(a, b, "same offsets through same frames must be bitwise equal");
    }
}
