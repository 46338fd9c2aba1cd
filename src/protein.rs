//! Protein chain data model: atoms, residues, and secondary structure.
//!
//! Residues are produced once by an external structure source (PDB
//! reader plus STRIDE/DSSP-style assignment) and are immutable
//! afterward; the cartoon pipeline only borrows them.

use glam::Vec3;

/// A single atom with its position and PDB-style metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Cartesian position in angstroms.
    pub position: Vec3,
    /// Element symbol ("C", "N", "O", ...).
    pub element: String,
    /// Atom serial number from the source structure.
    pub serial: i32,
    /// Role label within the residue ("N", "CA", "C", "O", ...).
    pub name: String,
}

/// The twenty standard amino acids plus an unknown fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AminoAcid {
    /// Alanine.
    Ala,
    /// Arginine.
    Arg,
    /// Asparagine.
    Asn,
    /// Aspartate.
    Asp,
    /// Cysteine.
    Cys,
    /// Glutamine.
    Gln,
    /// Glutamate.
    Glu,
    /// Glycine.
    Gly,
    /// Histidine.
    His,
    /// Isoleucine.
    Ile,
    /// Leucine.
    Leu,
    /// Lysine.
    Lys,
    /// Methionine.
    Met,
    /// Phenylalanine.
    Phe,
    /// Proline.
    Pro,
    /// Serine.
    Ser,
    /// Threonine.
    Thr,
    /// Tryptophan.
    Trp,
    /// Tyrosine.
    Tyr,
    /// Valine.
    Val,
    /// Unrecognized or non-standard residue.
    Unknown,
}

impl AminoAcid {
    /// Parse a three-letter residue code (case-insensitive).
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_uppercase().as_str() {
            "ALA" => Self::Ala,
            "ARG" => Self::Arg,
            "ASN" => Self::Asn,
            "ASP" => Self::Asp,
            "CYS" => Self::Cys,
            "GLN" => Self::Gln,
            "GLU" => Self::Glu,
            "GLY" => Self::Gly,
            "HIS" => Self::His,
            "ILE" => Self::Ile,
            "LEU" => Self::Leu,
            "LYS" => Self::Lys,
            "MET" => Self::Met,
            "PHE" => Self::Phe,
            "PRO" => Self::Pro,
            "SER" => Self::Ser,
            "THR" => Self::Thr,
            "TRP" => Self::Trp,
            "TYR" => Self::Tyr,
            "VAL" => Self::Val,
            _ => Self::Unknown,
        }
    }

    /// Three-letter residue code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ala => "ALA",
            Self::Arg => "ARG",
            Self::Asn => "ASN",
            Self::Asp => "ASP",
            Self::Cys => "CYS",
            Self::Gln => "GLN",
            Self::Glu => "GLU",
            Self::Gly => "GLY",
            Self::His => "HIS",
            Self::Ile => "ILE",
            Self::Leu => "LEU",
            Self::Lys => "LYS",
            Self::Met => "MET",
            Self::Phe => "PHE",
            Self::Pro => "PRO",
            Self::Ser => "SER",
            Self::Thr => "THR",
            Self::Trp => "TRP",
            Self::Tyr => "TYR",
            Self::Val => "VAL",
            Self::Unknown => "UNK",
        }
    }
}

/// Secondary-structure classification for a single residue.
///
/// Carries only the domain concern (class + smoothing priority); colors
/// and materials belong to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecondaryStructure {
    /// α-helix (STRIDE/DSSP code `H`).
    AlphaHelix,
    /// 3₁₀-helix (code `G`).
    Helix310,
    /// π-helix (code `I`).
    PiHelix,
    /// Extended β-strand (code `E`).
    Strand,
    /// Isolated β-bridge (code `B`).
    Bridge,
    /// Hydrogen-bonded turn (code `T` and the numbered turn subtypes).
    Turn,
    /// Coil / loop (code `C`).
    Coil,
    /// Any other assignment (bends, gamma turns).
    Other,
}

impl SecondaryStructure {
    /// Map a STRIDE/DSSP one-letter code to a structure class.
    #[must_use]
    pub const fn from_code(code: char) -> Self {
        match code {
            'H' => Self::AlphaHelix,
            'G' => Self::Helix310,
            'I' => Self::PiHelix,
            'E' => Self::Strand,
            'B' | 'b' => Self::Bridge,
            'T' | '1'..='8' => Self::Turn,
            'C' => Self::Coil,
            _ => Self::Other,
        }
    }

    /// Ordinal priority used for transition smoothing.
    ///
    /// Coil/turn rank below helices, which rank below strands/bridges;
    /// anything else ranks last.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Coil | Self::Turn => 1,
            Self::AlphaHelix | Self::Helix310 | Self::PiHelix => 2,
            Self::Strand | Self::Bridge => 3,
            Self::Other => 4,
        }
    }
}

/// One residue of a protein chain, as produced by a structure source.
///
/// Immutable once built; peptide planes borrow residues and never
/// mutate them.
#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    /// Amino acid kind.
    pub kind: AminoAcid,
    /// Assigned secondary structure.
    pub structure: SecondaryStructure,
    /// Backbone dihedral φ in degrees.
    pub phi: f32,
    /// Backbone dihedral ψ in degrees.
    pub psi: f32,
    /// Solvent-accessible surface area in Å².
    pub solvent_area: f32,
    /// Atoms belonging to this residue.
    pub atoms: Vec<Atom>,
}

impl Residue {
    /// Find the first atom with the given role label.
    #[must_use]
    pub fn atom(&self, name: &str) -> Option<&Atom> {
        self.atoms.iter().find(|a| a.name == name)
    }
}

/// Secondary-structure assignment oracle (STRIDE, DSSP, ...).
///
/// The cartoon pipeline treats assignment as opaque and fallible: a
/// `None` result aborts the whole chain build — there is no partial
/// cartoon without structure labels.
pub trait StructureSource {
    /// Produce the ordered residue chain with structure labels,
    /// dihedrals, and solvent areas populated.
    fn assign(&self) -> Option<Vec<Residue>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amino_acid_code_round_trip() {
        for code in ["ALA", "GLY", "TRP", "VAL"] {
            assert_eq!(AminoAcid::from_code(code).code(), code);
        }
        assert_eq!(AminoAcid::from_code("ala"), AminoAcid::Ala);
        assert_eq!(AminoAcid::from_code("XYZ"), AminoAcid::Unknown);
    }

    #[test]
    fn structure_codes_map_to_classes() {
        assert_eq!(
            SecondaryStructure::from_code('H'),
            SecondaryStructure::AlphaHelix
        );
        assert_eq!(
            SecondaryStructure::from_code('G'),
            SecondaryStructure::Helix310
        );
        assert_eq!(
            SecondaryStructure::from_code('E'),
            SecondaryStructure::Strand
        );
        assert_eq!(SecondaryStructure::from_code('4'), SecondaryStructure::Turn);
        assert_eq!(
            SecondaryStructure::from_code('@'),
            SecondaryStructure::Other
        );
    }

    #[test]
    fn priorities_order_coil_helix_strand_other() {
        assert_eq!(SecondaryStructure::Coil.priority(), 1);
        assert_eq!(SecondaryStructure::Turn.priority(), 1);
        assert_eq!(SecondaryStructure::AlphaHelix.priority(), 2);
        assert_eq!(SecondaryStructure::PiHelix.priority(), 2);
        assert_eq!(SecondaryStructure::Strand.priority(), 3);
        assert_eq!(SecondaryStructure::Bridge.priority(), 3);
        assert_eq!(SecondaryStructure::Other.priority(), 4);
    }

    #[test]
    fn atom_lookup_by_role_label() {
        let residue = Residue {
            kind: AminoAcid::Gly,
            structure: SecondaryStructure::Coil,
            phi: -60.0,
            psi: -45.0,
            solvent_area: 12.0,
            atoms: vec![
                Atom {
                    position: Vec3::ZERO,
                    element: "N".to_owned(),
                    serial: 1,
                    name: "N".to_owned(),
                },
                Atom {
                    position: Vec3::X,
                    element: "C".to_owned(),
                    serial: 2,
                    name: "CA".to_owned(),
                },
            ],
        };
        assert_eq!(residue.atom("CA").map(|a| a.serial), Some(2));
        assert!(residue.atom("O").is_none());
    }
}
