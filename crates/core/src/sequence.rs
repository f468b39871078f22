//! Alphabets nucléiques et validation de séquences
//!
//! Frontière avec la bibliothèque d'acides nucléiques: seule la validation
//! d'alphabet (ADN/ARN) et la génération d'ARN aléatoire sont exposées ici.

use crate::error::{ReplicationError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Base ARN standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RnaBase {
    A, // Adénine
    U, // Uracile
    G, // Guanine
    C, // Cytosine
}

impl RnaBase {
    /// Convertit un caractère en base ARN (insensible à la casse)
    pub fn from_char(c: char) -> Result<Self> {
        match c.to_ascii_uppercase() {
            'A' => Ok(RnaBase::A),
            'U' => Ok(RnaBase::U),
            'G' => Ok(RnaBase::G),
            'C' => Ok(RnaBase::C),
            _ => Err(ReplicationError::InvalidRnaBase(c)),
        }
    }

    /// Convertit une base en caractère
    pub fn as_char(self) -> char {
        match self {
            RnaBase::A => 'A',
            RnaBase::U => 'U',
            RnaBase::G => 'G',
            RnaBase::C => 'C',
        }
    }

    /// Base complémentaire (appariement Watson-Crick)
    pub fn complement(self) -> Self {
        match self {
            RnaBase::A => RnaBase::U,
            RnaBase::U => RnaBase::A,
            RnaBase::G => RnaBase::C,
            RnaBase::C => RnaBase::G,
        }
    }

    /// Les quatre bases, dans l'ordre canonique
    pub const ALL: [RnaBase; 4] = [RnaBase::A, RnaBase::U, RnaBase::G, RnaBase::C];
}

impl fmt::Display for RnaBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for RnaBase {
    type Error = ReplicationError;

    fn try_from(c: char) -> Result<Self> {
        RnaBase::from_char(c)
    }
}

/// Base ADN standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DnaBase {
    A, // Adénine
    C, // Cytosine
    G, // Guanine
    T, // Thymine
}

impl DnaBase {
    /// Convertit un caractère en base ADN (insensible à la casse)
    pub fn from_char(c: char) -> Result<Self> {
        match c.to_ascii_uppercase() {
            'A' => Ok(DnaBase::A),
            'C' => Ok(DnaBase::C),
            'G' => Ok(DnaBase::G),
            'T' => Ok(DnaBase::T),
            _ => Err(ReplicationError::InvalidDnaBase(c)),
        }
    }

    /// Convertit une base en caractère
    pub fn as_char(self) -> char {
        match self {
            DnaBase::A => 'A',
            DnaBase::C => 'C',
            DnaBase::G => 'G',
            DnaBase::T => 'T',
        }
    }

    /// Base complémentaire sur le brin opposé
    pub fn complement(self) -> Self {
        match self {
            DnaBase::A => DnaBase::T,
            DnaBase::T => DnaBase::A,
            DnaBase::G => DnaBase::C,
            DnaBase::C => DnaBase::G,
        }
    }
}

impl fmt::Display for DnaBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for DnaBase {
    type Error = ReplicationError;

    fn try_from(c: char) -> Result<Self> {
        DnaBase::from_char(c)
    }
}

/// Valide une séquence ARN et retourne sa forme normalisée (majuscules)
pub fn validate_rna(sequence: &str) -> Result<String> {
    if sequence.is_empty() {
        return Err(ReplicationError::EmptySequence);
    }

    sequence
        .chars()
        .map(|c| RnaBase::from_char(c).map(RnaBase::as_char))
        .collect()
}

/// Valide une séquence ADN et retourne sa forme normalisée (majuscules)
pub fn validate_dna(sequence: &str) -> Result<String> {
    if sequence.is_empty() {
        return Err(ReplicationError::EmptySequence);
    }

    sequence
        .chars()
        .map(|c| DnaBase::from_char(c).map(DnaBase::as_char))
        .collect()
}

/// Génère une séquence ARN uniformément aléatoire de longueur `len`
pub fn random_rna<R: Rng>(len: usize, rng: &mut R) -> String {
    (0..len)
        .map(|_| RnaBase::ALL[rng.gen_range(0..4)].as_char())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_rna_base_conversion() {
        assert_eq!(RnaBase::from_char('a').unwrap(), RnaBase::A);
        assert_eq!(RnaBase::from_char('U').unwrap(), RnaBase::U);
        assert!(RnaBase::from_char('T').is_err());
    }

    #[test]
    fn test_rna_complement() {
        assert_eq!(RnaBase::A.complement(), RnaBase::U);
        assert_eq!(RnaBase::G.complement(), RnaBase::C);
    }

    #[test]
    fn test_dna_base_conversion() {
        assert_eq!(DnaBase::from_char('t').unwrap(), DnaBase::T);
        assert!(DnaBase::from_char('U').is_err());
    }

    #[test]
    fn test_validate_rna_normalizes() {
        assert_eq!(validate_rna("augc").unwrap(), "AUGC");
        assert!(matches!(
            validate_rna("AUGT"),
            Err(ReplicationError::InvalidRnaBase('T'))
        ));
        assert!(matches!(validate_rna(""), Err(ReplicationError::EmptySequence)));
    }

    #[test]
    fn test_validate_dna() {
        assert_eq!(validate_dna("acgt").unwrap(), "ACGT");
        assert!(validate_dna("ACGU").is_err());
    }

    #[test]
    fn test_random_rna_is_valid_and_reproducible() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let seq = random_rna(8, &mut rng);
        assert_eq!(seq.len(), 8);
        assert!(validate_rna(&seq).is_ok());

        let mut rng2 = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(seq, random_rna(8, &mut rng2));
    }
}
