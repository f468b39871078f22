//! Types d'erreurs pour la bibliothèque de réplication

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReplicationError {
    #[error("Base ARN invalide: {0}")]
    InvalidRnaBase(char),

    #[error("Base ADN invalide: {0}")]
    InvalidDnaBase(char),

    #[error("Séquence nucléique vide")]
    EmptySequence,

    #[error("Longueur d'amorce hors plage: {len} pas dans [{min}, {max}]")]
    PrimerLengthOutOfRange { len: usize, min: usize, max: usize },

    #[error("Plage invalide pour {what}: [{min}, {max}]")]
    InvalidRange { what: String, min: usize, max: usize },

    #[error("Vitesse de polymérase invalide: {0} (doit être > 0)")]
    InvalidPolymeraseSpeed(f64),

    #[error("Longueur d'ADN nulle: rien à répliquer")]
    EmptyDna,

    #[error("Position de fourche hors du brin: {position} > {length}")]
    PositionBeyondLength { position: usize, length: usize },

    #[error("Bornes de fragment invalides: fin {end} <= début {start}")]
    InvalidFragmentBounds { start: usize, end: usize },

    #[error("Erreur IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erreur de sérialisation: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReplicationError>;
