//! Crate-level error types.

use std::fmt;

/// Errors produced by the ribbonkit crate.
///
/// Chain-build errors are terminal: a chain either fully succeeds or the
/// caller receives one of these and decides whether to skip the chain.
#[derive(Debug)]
pub enum RibbonError {
    /// A residue window lacks a backbone atom needed for a peptide plane.
    MissingBackboneAtom {
        /// Chain index of the residue missing the atom.
        residue: usize,
        /// Role label of the missing atom ("CA" or "O").
        atom: &'static str,
    },
    /// Chain too short to produce a single plane/segment window.
    InsufficientResidues {
        /// Number of residues supplied.
        got: usize,
        /// Minimum chain length for one segment mesh.
        needed: usize,
    },
    /// The secondary-structure oracle produced no assignment.
    StructureAssignmentFailed,
    /// Segment count diverged from the windowing contract (logic defect,
    /// not a data defect).
    MeshCountMismatch {
        /// Expected mesh count (`residues - 5`).
        expected: usize,
        /// Mesh count actually produced.
        got: usize,
    },
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for RibbonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBackboneAtom { residue, atom } => {
                write!(f, "residue {residue} is missing backbone atom {atom}")
            }
            Self::InsufficientResidues { got, needed } => {
                write!(
                    f,
                    "chain has {got} residues, need at least {needed} for a \
                     cartoon segment"
                )
            }
            Self::StructureAssignmentFailed => {
                write!(f, "secondary-structure assignment returned no result")
            }
            Self::MeshCountMismatch { expected, got } => {
                write!(
                    f,
                    "segment mesh count {got} does not match expected \
                     {expected}"
                )
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for RibbonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RibbonError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
