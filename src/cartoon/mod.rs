//! Cartoon ribbon generation pipeline.
//!
//! Residue chain → peptide planes → orientation fold → per-segment
//! extrusion → ordered mesh list, one mesh per interior residue.
//!
//! Plane construction and the orientation fold are sequential; the
//! segment builds only read the finalized planes and fan out across the
//! rayon worker pool.

pub mod plane;
pub(crate) mod profile;
pub(crate) mod segment;
pub(crate) mod spline;

use std::time::Instant;

use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::error::RibbonError;
use crate::mesh::Mesh;
use crate::options::CartoonOptions;
use crate::protein::{Residue, StructureSource};
use plane::{orient_planes, PeptidePlane};

/// Minimum chain length producing at least one segment window.
pub const MIN_RESIDUES: usize = 6;

/// Build the ordered cartoon mesh list for one residue chain.
///
/// A chain of `N` residues yields `N - 2` peptide planes and `N - 5`
/// segment meshes (2 residues lost to plane windowing, 3 more to
/// segment windowing). The whole chain either succeeds or fails with a
/// typed error — residues are never silently dropped.
pub fn build_chain_mesh(
    residues: &[Residue],
    opts: &CartoonOptions,
) -> Result<Vec<Mesh>, RibbonError> {
    if residues.len() < MIN_RESIDUES {
        return Err(RibbonError::InsufficientResidues {
            got: residues.len(),
            needed: MIN_RESIDUES,
        });
    }

    let start = Instant::now();

    let mut planes = Vec::with_capacity(residues.len() - 2);
    for (i, window) in residues.windows(3).enumerate() {
        planes.push(PeptidePlane::new(
            i,
            &window[0],
            &window[1],
            &window[2],
        )?);
    }
    let planes = orient_planes(planes);

    let count = planes.len() - 3;
    let meshes: Vec<Mesh> = (0..count)
        .into_par_iter()
        .map(|i| {
            segment::build_segment(
                i,
                count,
                &planes[i],
                &planes[i + 1],
                &planes[i + 2],
                &planes[i + 3],
                opts,
            )
        })
        .collect();

    let expected = residues.len() - 5;
    if meshes.len() != expected {
        return Err(RibbonError::MeshCountMismatch {
            expected,
            got: meshes.len(),
        });
    }

    log::debug!(
        "chain: {} residues, {} planes, {} segment meshes in {:.2?}",
        residues.len(),
        planes.len(),
        meshes.len(),
        start.elapsed()
    );

    Ok(meshes)
}

/// Run the full pipeline from a structure-assignment oracle.
///
/// Returns the residue chain alongside the meshes so the consumer can
/// style each segment by structure type. An oracle failure aborts the
/// whole chain — there is no partial cartoon.
pub fn build_from_source(
    source: &dyn StructureSource,
    opts: &CartoonOptions,
) -> Result<(Vec<Residue>, Vec<Mesh>), RibbonError> {
    let residues =
        source.assign().ok_or(RibbonError::StructureAssignmentFailed)?;
    let meshes = build_chain_mesh(&residues, opts)?;
    Ok((residues, meshes))
}
