//! Enzymes de la machinerie de réplication
//!
//! Les cinq types d'enzymes partagent le même état (position, activité) et se
//! distinguent par leur étiquette; le comportement spécifique est dispatché
//! par `match` sur l'étiquette. Appeler une action de domaine sur le mauvais
//! type d'enzyme est une erreur de programmation et provoque un panic.

use crate::event::{EventType, ReplicationEvent, Strand};
use crate::fragment::FragmentId;
use crate::organism::{OrganismProfile, PRIMER_LENGTH_MAX, PRIMER_LENGTH_MIN};
use helix_core::{ReplicationError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Variante de l'ADN polymérase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolymeraseVariant {
    /// Pol I: excision des amorces, lente
    PolI,
    /// Pol II: réparation
    PolII,
    /// Pol III: réplicase principale
    PolIII,
}

/// Type d'enzyme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnzymeKind {
    /// Hélicase: ouvre la double hélice
    Helicase,
    /// Primase: synthétise les amorces ARN
    Primase,
    /// ADN polymérase (avec sa variante)
    Polymerase(PolymeraseVariant),
    /// ADN ligase: joint les fragments
    Ligase,
    /// Exonucléase: excise les amorces
    Exonuclease,
}

impl EnzymeKind {
    /// Multiplicateur de vitesse par rapport à la polymérase de référence
    pub fn speed_factor(self) -> f64 {
        match self {
            EnzymeKind::Helicase => 1.0,
            EnzymeKind::Primase => 0.10,
            EnzymeKind::Polymerase(PolymeraseVariant::PolI) => 0.05,
            EnzymeKind::Polymerase(PolymeraseVariant::PolII) => 0.04,
            EnzymeKind::Polymerase(PolymeraseVariant::PolIII) => 1.0,
            EnzymeKind::Ligase => 2.0,
            EnzymeKind::Exonuclease => 0.10,
        }
    }
}

impl fmt::Display for EnzymeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnzymeKind::Helicase => write!(f, "hélicase"),
            EnzymeKind::Primase => write!(f, "primase"),
            EnzymeKind::Polymerase(PolymeraseVariant::PolI) => write!(f, "polymérase I"),
            EnzymeKind::Polymerase(PolymeraseVariant::PolII) => write!(f, "polymérase II"),
            EnzymeKind::Polymerase(PolymeraseVariant::PolIII) => write!(f, "polymérase III"),
            EnzymeKind::Ligase => write!(f, "ligase"),
            EnzymeKind::Exonuclease => write!(f, "exonucléase"),
        }
    }
}

/// Enzyme positionnée sur le brin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enzyme {
    /// Type d'enzyme
    pub kind: EnzymeKind,

    /// Position courante (nt)
    pub position: usize,

    /// Enzyme active
    pub active: bool,
}

impl Enzyme {
    /// Crée une enzyme validée contre le profil de l'organisme
    ///
    /// La vitesse dérivée doit être calculable: un profil à vitesse nulle ou
    /// non finie est rejeté ici, ce qui rend l'assemblage du réplisome
    /// fail-fast.
    pub fn new(kind: EnzymeKind, organism: &OrganismProfile) -> Result<Self> {
        if !organism.polymerase_speed.is_finite() || organism.polymerase_speed <= 0.0 {
            return Err(ReplicationError::InvalidPolymeraseSpeed(
                organism.polymerase_speed,
            ));
        }

        Ok(Self {
            kind,
            position: 0,
            active: true,
        })
    }

    /// Vitesse de l'enzyme pour cet organisme (bp/s)
    pub fn speed(&self, organism: &OrganismProfile) -> f64 {
        organism.polymerase_speed * self.kind.speed_factor()
    }

    /// Précondition d'opération à une position donnée
    ///
    /// Placeholder pour un futur gating biologique (nucléosomes, collisions).
    pub fn can_operate(&self, _position: usize) -> bool {
        self.active
    }

    /// Avance l'enzyme de `distance` nt
    pub fn advance(&mut self, distance: usize) {
        self.position += distance;
    }

    /// Téléporte l'enzyme à la position `position`
    pub fn move_to(&mut self, position: usize) {
        self.position = position;
    }

    fn require_kind(&self, expected: &str, ok: bool) {
        assert!(ok, "action de {expected} demandée sur une {}", self.kind);
    }

    /// Ouvre la double hélice sur `base_pairs` nt
    ///
    /// L'hélicase agit sur les deux brins mais l'événement n'est journalisé
    /// qu'une fois, côté brin directeur.
    pub fn unwind(&mut self, base_pairs: usize) -> ReplicationEvent {
        self.require_kind("hélicase", self.kind == EnzymeKind::Helicase);
        self.advance(base_pairs);
        ReplicationEvent::new(EventType::Unwind, self.position, self.kind, Strand::Leading)
            .with_base_pairs(base_pairs as i64)
    }

    /// Synthétise une amorce ARN de `length` nt (sans déplacement)
    pub fn synthesize_primer(&mut self, length: usize, strand: Strand) -> Result<ReplicationEvent> {
        self.require_kind("primase", self.kind == EnzymeKind::Primase);
        if !(PRIMER_LENGTH_MIN..=PRIMER_LENGTH_MAX).contains(&length) {
            return Err(ReplicationError::PrimerLengthOutOfRange {
                len: length,
                min: PRIMER_LENGTH_MIN,
                max: PRIMER_LENGTH_MAX,
            });
        }

        Ok(
            ReplicationEvent::new(EventType::PrimerSynthesis, self.position, self.kind, strand)
                .with_base_pairs(length as i64),
        )
    }

    /// Synthétise `base_pairs` nt d'ADN et avance d'autant
    pub fn synthesize(&mut self, base_pairs: usize, strand: Strand) -> ReplicationEvent {
        let variant = match self.kind {
            EnzymeKind::Polymerase(v) => v,
            other => panic!("synthèse d'ADN demandée sur une {other}"),
        };
        assert!(base_pairs > 0, "synthèse d'ADN de longueur nulle");

        self.advance(base_pairs);
        ReplicationEvent::new(EventType::DnaSynthesis, self.position, self.kind, strand)
            .with_base_pairs(base_pairs as i64)
            .with_metadata("variante", format!("{variant:?}"))
            .with_metadata("fin", self.position.to_string())
    }

    /// Relit le brin à la position courante (sans déplacement)
    pub fn proofread(&self, strand: Strand) -> ReplicationEvent {
        self.require_kind("polymérase", matches!(self.kind, EnzymeKind::Polymerase(_)));
        ReplicationEvent::new(EventType::Proofreading, self.position, self.kind, strand)
    }

    /// Joint le fragment `fragment_id` au précédent (sans déplacement)
    pub fn ligate(&self, fragment_id: FragmentId) -> ReplicationEvent {
        self.require_kind("ligase", self.kind == EnzymeKind::Ligase);
        ReplicationEvent::new(EventType::Ligation, self.position, self.kind, Strand::Lagging)
            .with_fragment(fragment_id)
    }

    /// Excise une amorce de `length` nt (sans déplacement)
    pub fn remove_primer(&self, length: usize, fragment_id: FragmentId) -> ReplicationEvent {
        self.require_kind("exonucléase", self.kind == EnzymeKind::Exonuclease);
        ReplicationEvent::new(EventType::PrimerRemoval, self.position, self.kind, Strand::Lagging)
            .with_fragment(fragment_id)
            .with_base_pairs(-(length as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org() -> OrganismProfile {
        OrganismProfile::e_coli()
    }

    #[test]
    fn test_speed_factors() {
        let organism = org();
        let helicase = Enzyme::new(EnzymeKind::Helicase, &organism).unwrap();
        let pol3 = Enzyme::new(
            EnzymeKind::Polymerase(PolymeraseVariant::PolIII),
            &organism,
        )
        .unwrap();
        let pol1 = Enzyme::new(EnzymeKind::Polymerase(PolymeraseVariant::PolI), &organism).unwrap();
        let ligase = Enzyme::new(EnzymeKind::Ligase, &organism).unwrap();
        let primase = Enzyme::new(EnzymeKind::Primase, &organism).unwrap();
        let exo = Enzyme::new(EnzymeKind::Exonuclease, &organism).unwrap();

        assert_eq!(helicase.speed(&organism), pol3.speed(&organism));
        assert_eq!(ligase.speed(&organism), 2.0 * pol3.speed(&organism));
        assert_eq!(primase.speed(&organism), exo.speed(&organism));
        assert_eq!(primase.speed(&organism), 0.10 * pol3.speed(&organism));
        assert_eq!(pol1.speed(&organism), 50.0);
    }

    #[test]
    fn test_construction_rejects_invalid_speed() {
        let mut organism = org();
        organism.polymerase_speed = 0.0;
        assert!(matches!(
            Enzyme::new(EnzymeKind::Helicase, &organism),
            Err(ReplicationError::InvalidPolymeraseSpeed(_))
        ));
    }

    #[test]
    fn test_unwind_advances() {
        let organism = org();
        let mut helicase = Enzyme::new(EnzymeKind::Helicase, &organism).unwrap();
        let event = helicase.unwind(500);

        assert_eq!(helicase.position, 500);
        assert_eq!(event.event_type, EventType::Unwind);
        assert_eq!(event.strand, Strand::Leading);
        assert_eq!(event.base_pairs, Some(500));
    }

    #[test]
    fn test_primer_synthesis_is_stationary_and_bounded() {
        let organism = org();
        let mut primase = Enzyme::new(EnzymeKind::Primase, &organism).unwrap();
        primase.move_to(100);

        let event = primase.synthesize_primer(7, Strand::Lagging).unwrap();
        assert_eq!(primase.position, 100);
        assert_eq!(event.base_pairs, Some(7));

        assert!(primase.synthesize_primer(2, Strand::Lagging).is_err());
        assert!(primase.synthesize_primer(11, Strand::Lagging).is_err());
    }

    #[test]
    fn test_synthesize_carries_variant_and_end() {
        let organism = org();
        let mut pol = Enzyme::new(
            EnzymeKind::Polymerase(PolymeraseVariant::PolIII),
            &organism,
        )
        .unwrap();

        let event = pol.synthesize(250, Strand::Leading);
        assert_eq!(pol.position, 250);
        assert_eq!(event.metadata.get("variante").unwrap(), "PolIII");
        assert_eq!(event.metadata.get("fin").unwrap(), "250");
    }

    #[test]
    fn test_remove_primer_is_negative() {
        let organism = org();
        let exo = Enzyme::new(EnzymeKind::Exonuclease, &organism).unwrap();
        let event = exo.remove_primer(5, FragmentId::new(1));

        assert_eq!(event.base_pairs, Some(-5));
        assert_eq!(event.strand, Strand::Lagging);
        assert_eq!(event.fragment_id, Some(FragmentId::new(1)));
    }

    #[test]
    #[should_panic]
    fn test_wrong_kind_panics() {
        let organism = org();
        let mut ligase = Enzyme::new(EnzymeKind::Ligase, &organism).unwrap();
        ligase.unwind(10);
    }

    #[test]
    #[should_panic]
    fn test_zero_synthesis_panics() {
        let organism = org();
        let mut pol = Enzyme::new(
            EnzymeKind::Polymerase(PolymeraseVariant::PolIII),
            &organism,
        )
        .unwrap();
        pol.synthesize(0, Strand::Leading);
    }
}
