//! Amorces ARN

use crate::organism::{PRIMER_LENGTH_MAX, PRIMER_LENGTH_MIN};
use helix_core::{random_rna, validate_rna, ReplicationError, Result};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Amorce ARN ancrant un fragment d'Okazaki
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RnaPrimer {
    sequence: String,
    position: usize,
    removed: bool,
}

impl RnaPrimer {
    /// Crée une amorce validée
    ///
    /// Deux échecs distincts: longueur hors [3, 10]
    /// (`PrimerLengthOutOfRange`) et alphabet non ARN (`InvalidRnaBase`).
    /// La séquence est normalisée en majuscules.
    pub fn new(sequence: impl Into<String>, position: usize) -> Result<Self> {
        let sequence = sequence.into();
        let len = sequence.chars().count();
        if !(PRIMER_LENGTH_MIN..=PRIMER_LENGTH_MAX).contains(&len) {
            return Err(ReplicationError::PrimerLengthOutOfRange {
                len,
                min: PRIMER_LENGTH_MIN,
                max: PRIMER_LENGTH_MAX,
            });
        }

        let sequence = validate_rna(&sequence)?;

        Ok(Self {
            sequence,
            position,
            removed: false,
        })
    }

    /// Génère une amorce aléatoire de `length` nt
    ///
    /// Seule source de contenu d'amorce quand aucune séquence externe n'est
    /// fournie; le RNG seedé garantit la reproductibilité des tests.
    pub fn generate_random(length: usize, position: usize, rng: &mut ChaCha8Rng) -> Result<Self> {
        if !(PRIMER_LENGTH_MIN..=PRIMER_LENGTH_MAX).contains(&length) {
            return Err(ReplicationError::PrimerLengthOutOfRange {
                len: length,
                min: PRIMER_LENGTH_MIN,
                max: PRIMER_LENGTH_MAX,
            });
        }

        Ok(Self {
            sequence: random_rna(length, rng),
            position,
            removed: false,
        })
    }

    /// Séquence de l'amorce (majuscules)
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Position d'ancrage sur le brin
    pub fn position(&self) -> usize {
        self.position
    }

    /// Longueur de l'amorce (nt)
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    /// Toujours faux: une amorce valide a au moins 3 nt
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// L'amorce a-t-elle été excisée
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Marque l'amorce comme excisée (simple setter, non gardé)
    pub fn mark_removed(&mut self) {
        self.removed = true;
    }
}
