//! Profils biologiques des organismes

use helix_core::{ReplicationError, Result};
use serde::{Deserialize, Serialize};

/// Longueur minimale d'une amorce ARN (contrainte biologique)
pub const PRIMER_LENGTH_MIN: usize = 3;

/// Longueur maximale d'une amorce ARN (contrainte biologique)
pub const PRIMER_LENGTH_MAX: usize = 10;

/// Type d'organisme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrganismKind {
    /// Procaryote (réplication rapide, grands fragments d'Okazaki)
    Prokaryotic,
    /// Eucaryote (réplication lente, fragments courts, nucléosomes)
    Eukaryotic,
}

/// Paramètres biologiques statiques d'un organisme
///
/// Immuable une fois construit; partagé en lecture seule par tous les
/// composants d'une même simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganismProfile {
    /// Vitesse de la polymérase de référence (bp/s)
    pub polymerase_speed: f64,

    /// Plage de taille des fragments d'Okazaki [min, max] (nt)
    pub fragment_size_range: (usize, usize),

    /// Plage de longueur des amorces ARN [min, max] (nt)
    pub primer_length_range: (usize, usize),

    /// Présence de nucléosomes sur le brin
    pub has_nucleosomes: bool,

    /// Type d'organisme
    pub kind: OrganismKind,
}

impl OrganismProfile {
    /// Crée un profil validé
    pub fn new(
        polymerase_speed: f64,
        fragment_size_range: (usize, usize),
        primer_length_range: (usize, usize),
        has_nucleosomes: bool,
        kind: OrganismKind,
    ) -> Result<Self> {
        if !polymerase_speed.is_finite() || polymerase_speed <= 0.0 {
            return Err(ReplicationError::InvalidPolymeraseSpeed(polymerase_speed));
        }

        let (fmin, fmax) = fragment_size_range;
        if fmin == 0 || fmin > fmax {
            return Err(ReplicationError::InvalidRange {
                what: "taille de fragment".to_string(),
                min: fmin,
                max: fmax,
            });
        }

        let (pmin, pmax) = primer_length_range;
        if pmin < PRIMER_LENGTH_MIN || pmax > PRIMER_LENGTH_MAX || pmin > pmax {
            return Err(ReplicationError::InvalidRange {
                what: "longueur d'amorce".to_string(),
                min: pmin,
                max: pmax,
            });
        }

        Ok(Self {
            polymerase_speed,
            fragment_size_range,
            primer_length_range,
            has_nucleosomes,
            kind,
        })
    }

    /// Profil E. coli: réplication rapide, grands fragments
    pub fn e_coli() -> Self {
        Self {
            polymerase_speed: 1000.0,
            fragment_size_range: (1000, 2000),
            primer_length_range: (PRIMER_LENGTH_MIN, PRIMER_LENGTH_MAX),
            has_nucleosomes: false,
            kind: OrganismKind::Prokaryotic,
        }
    }

    /// Profil humain: réplication lente, fragments courts, chromatine
    pub fn human() -> Self {
        Self {
            polymerase_speed: 50.0,
            fragment_size_range: (100, 200),
            primer_length_range: (PRIMER_LENGTH_MIN, PRIMER_LENGTH_MAX),
            has_nucleosomes: true,
            kind: OrganismKind::Eukaryotic,
        }
    }
}

impl Default for OrganismProfile {
    fn default() -> Self {
        Self::e_coli()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_e_coli_profile() {
        let org = OrganismProfile::e_coli();
        assert_eq!(org.polymerase_speed, 1000.0);
        assert_eq!(org.fragment_size_range, (1000, 2000));
        assert_eq!(org.kind, OrganismKind::Prokaryotic);
        assert!(!org.has_nucleosomes);
    }

    #[test]
    fn test_human_profile() {
        let org = OrganismProfile::human();
        assert_eq!(org.kind, OrganismKind::Eukaryotic);
        assert!(org.has_nucleosomes);
    }

    #[test]
    fn test_invalid_speed() {
        let result = OrganismProfile::new(0.0, (100, 200), (3, 10), false, OrganismKind::Prokaryotic);
        assert!(matches!(result, Err(ReplicationError::InvalidPolymeraseSpeed(_))));

        let result =
            OrganismProfile::new(f64::NAN, (100, 200), (3, 10), false, OrganismKind::Prokaryotic);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_fragment_range() {
        let result =
            OrganismProfile::new(100.0, (200, 100), (3, 10), false, OrganismKind::Prokaryotic);
        assert!(matches!(result, Err(ReplicationError::InvalidRange { .. })));
    }

    #[test]
    fn test_primer_range_is_biologically_bounded() {
        // En dessous de 3 nt une amorce ne s'hybride pas
        let result =
            OrganismProfile::new(100.0, (100, 200), (2, 10), false, OrganismKind::Prokaryotic);
        assert!(result.is_err());

        // Au-dessus de 10 nt ce n'est plus une amorce
        let result =
            OrganismProfile::new(100.0, (100, 200), (3, 11), false, OrganismKind::Prokaryotic);
        assert!(result.is_err());
    }
}
