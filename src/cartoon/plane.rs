//! Peptide-plane frames and orientation consistency.

use glam::Vec3;

use crate::error::RibbonError;
use crate::protein::{Residue, SecondaryStructure};

/// Oriented local frame anchored to a 3-residue backbone window, the
/// rail along which ribbon cross-sections are extruded.
///
/// `{forward, side, normal}` form a right-handed orthonormal basis built
/// from CA(i)→CA(i+1) and CA(i)→O(i). Planes borrow their residues and
/// become read-only once the chain-wide orientation fold has run.
#[derive(Debug, Clone, Copy)]
pub struct PeptidePlane<'a> {
    /// First residue of the window.
    pub residue1: &'a Residue,
    /// Second residue of the window.
    pub residue2: &'a Residue,
    /// Third residue of the window.
    pub residue3: &'a Residue,
    /// Midpoint of the two anchoring α-carbons.
    pub position: Vec3,
    /// Frame normal.
    pub normal: Vec3,
    /// Chain direction (CA1 → CA2).
    pub forward: Vec3,
    /// In-plane side axis.
    pub side: Vec3,
    /// Whether the orientation fold mirrored this frame.
    pub flipped: bool,
}

impl<'a> PeptidePlane<'a> {
    /// Build the frame for one 3-residue window.
    ///
    /// `window_start` is the chain index of `r1`, used for error
    /// reporting. Fails when `r1.CA`, `r2.CA`, or `r1.O` is absent
    /// (incomplete or non-standard residues).
    pub fn new(
        window_start: usize,
        r1: &'a Residue,
        r2: &'a Residue,
        r3: &'a Residue,
    ) -> Result<Self, RibbonError> {
        let ca1 = backbone_atom(r1, window_start, "CA")?;
        let ca2 = backbone_atom(r2, window_start + 1, "CA")?;
        let o1 = backbone_atom(r1, window_start, "O")?;

        let forward = (ca2 - ca1).normalize();
        let side_raw = (o1 - ca1).normalize();
        let normal = forward.cross(side_raw).normalize();
        let side = normal.cross(forward).normalize();
        let position = (ca1 + ca2) / 2.0;

        Ok(Self {
            residue1: r1,
            residue2: r2,
            residue3: r3,
            position,
            normal,
            forward,
            side,
            flipped: false,
        })
    }

    /// Mirror this frame when its side axis disagrees with the previous
    /// plane's corrected side axis, removing 180° twists between
    /// adjacent frames.
    #[must_use]
    pub fn oriented(mut self, prev_side: Vec3) -> Self {
        if self.side.dot(prev_side) < 0.0 {
            self.side = -self.side;
            self.normal = -self.normal;
            self.flipped = !self.flipped;
        }
        self
    }

    /// Effective (begin, end) structure types for profile smoothing.
    ///
    /// A center residue that outranks a neighbor while the other flank
    /// matches its rank takes the outranked neighbor's type on that
    /// flank, so the cross-section changes gradually instead of jumping
    /// at the boundary.
    #[must_use]
    pub fn transition(&self) -> (SecondaryStructure, SecondaryStructure) {
        let t1 = self.residue1.structure;
        let t2 = self.residue2.structure;
        let t3 = self.residue3.structure;

        let mut begin = t2;
        let mut end = t2;
        if t2.priority() > t1.priority() && t2.priority() == t3.priority() {
            begin = t1;
        }
        if t2.priority() > t3.priority() && t1.priority() == t2.priority() {
            end = t3;
        }
        (begin, end)
    }
}

fn backbone_atom(
    residue: &Residue,
    index: usize,
    name: &'static str,
) -> Result<Vec3, RibbonError> {
    residue
        .atom(name)
        .map(|a| a.position)
        .ok_or(RibbonError::MissingBackboneAtom { residue: index, atom: name })
}

/// Left-to-right orientation fold over a freshly built plane list.
///
/// Strictly sequential: each plane's corrected orientation depends on
/// the previous plane's corrected side axis, so this runs once, single
/// threaded, before any segment work.
#[must_use]
pub fn orient_planes(planes: Vec<PeptidePlane<'_>>) -> Vec<PeptidePlane<'_>> {
    let mut oriented = Vec::with_capacity(planes.len());
    let mut prev_side = Vec3::ZERO;
    for plane in planes {
        let plane = plane.oriented(prev_side);
        prev_side = plane.side;
        oriented.push(plane);
    }
    oriented
}
