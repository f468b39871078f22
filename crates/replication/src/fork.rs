//! Fourche de réplication

use crate::organism::OrganismProfile;
use helix_core::{ReplicationError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Point d'ouverture de la double hélice
///
/// Invariant: 0 ≤ position ≤ dna_length en permanence. Seuls `advance` et
/// `safe_advance` mutent la position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplicationFork {
    position: usize,
    dna_length: usize,
    organism: Arc<OrganismProfile>,
}

impl ReplicationFork {
    /// Crée une fourche validée
    ///
    /// Échecs distincts: brin vide, position au-delà du brin, vitesse de
    /// polymérase invalide dans le profil.
    pub fn new(position: usize, dna_length: usize, organism: Arc<OrganismProfile>) -> Result<Self> {
        if dna_length == 0 {
            return Err(ReplicationError::EmptyDna);
        }
        if position > dna_length {
            return Err(ReplicationError::PositionBeyondLength {
                position,
                length: dna_length,
            });
        }
        if !organism.polymerase_speed.is_finite() || organism.polymerase_speed <= 0.0 {
            return Err(ReplicationError::InvalidPolymeraseSpeed(
                organism.polymerase_speed,
            ));
        }

        Ok(Self {
            position,
            dna_length,
            organism,
        })
    }

    /// Position courante (nt)
    pub fn position(&self) -> usize {
        self.position
    }

    /// Longueur totale du brin (nt)
    pub fn dna_length(&self) -> usize {
        self.dna_length
    }

    /// Profil de l'organisme répliqué
    pub fn organism(&self) -> &OrganismProfile {
        &self.organism
    }

    /// Distance restante jusqu'à la fin du brin (nt)
    pub fn remaining(&self) -> usize {
        self.dna_length - self.position
    }

    /// Avance la fourche de `base_pairs` nt
    ///
    /// Dépasser la fin du brin est une violation d'invariant et panique;
    /// utiliser `safe_advance` pour la variante qui borne.
    pub fn advance(&mut self, base_pairs: usize) {
        assert!(
            base_pairs <= self.remaining(),
            "avancée de {} nt au-delà du brin ({} restants)",
            base_pairs,
            self.remaining()
        );
        self.position += base_pairs;
    }

    /// Avance en bornant à la distance restante; retourne l'avancée réelle
    pub fn safe_advance(&mut self, base_pairs: usize) -> usize {
        let actual = base_pairs.min(self.remaining());
        self.position += actual;
        actual
    }

    /// Pourcentage de complétion [0, 100]
    pub fn completion_percentage(&self) -> f64 {
        // Garde-fou: la construction interdit dna_length == 0
        if self.dna_length == 0 {
            return 100.0;
        }
        self.position as f64 / self.dna_length as f64 * 100.0
    }

    /// La fourche peut-elle encore avancer
    pub fn can_advance(&self) -> bool {
        self.position < self.dna_length
    }

    /// La fourche a-t-elle atteint la fin du brin
    pub fn is_complete(&self) -> bool {
        self.position >= self.dna_length
    }
}
