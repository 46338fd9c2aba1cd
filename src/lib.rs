// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Cartoon ribbon mesh generation for protein structures.
//!
//! ribbonkit converts a residue chain with secondary-structure labels
//! into the classic helix/sheet/coil cartoon representation: oriented
//! peptide-plane frames along the backbone, per-transition cross-section
//! profiles, spline-based extrusion, and triangulation into renderable
//! meshes.
//!
//! # Key entry points
//!
//! - [`cartoon::build_chain_mesh`] — residue chain to ordered mesh list
//! - [`cartoon::build_from_source`] — full pipeline from a
//!   [`protein::StructureSource`] oracle
//! - [`options::CartoonOptions`] — geometry tuning with TOML presets
//!
//! # Pipeline
//!
//! Plane construction and the orientation-consistency fold are strictly
//! sequential; once the planes are finalized the per-segment extrusions
//! are independent and fan out across a rayon worker pool. A chain
//! either builds completely or returns a typed [`error::RibbonError`] —
//! residues are never silently dropped.

pub mod cartoon;
pub mod error;
pub mod mesh;
pub mod options;
pub mod protein;
pub mod util;
