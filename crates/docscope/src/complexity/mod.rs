//! Complexity scoring and documentation recommendation.
//!
//! Project attributes flow through the factor scorer and the per-area scorer for the four
//! primary areas, then into the overall aggregate and the six derived secondary areas, and
//! finally into a sorted list of documentation recommendations.

pub mod attributes;
pub mod catalog;
pub mod domain;
pub mod profile;
mod recommendation;
pub mod report;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use attributes::{
    Attribute, Clarity, CostSensitivity, Observation, ProjectAttributes, RequirementLevel,
    ResourceConstraint, TimeConstraint,
};
pub use catalog::{
    CatalogDocument, CatalogError, KnowledgeAreaRubric, LevelBounds, RubricCatalog, RubricFactor,
    ScoringCriteria,
};
pub use domain::{ComplexityBand, ComplexityThresholds, DocumentType, KnowledgeArea, Priority};
pub use profile::{
    ComplexityFactor, DocumentationRecommendation, KnowledgeAreaComplexity, PrimaryAreas,
    ProjectComplexityProfile, SecondaryAreas,
};
pub use recommendation::synthesize;
pub use report::{AreaBreakdownEntry, PriorityCount, ProfileSummary};
pub use scoring::{ComplexityEngine, PrimaryWeights};

/// Errors raised while scoring. Missing attributes are never errors.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("unknown knowledge area '{0}'")]
    UnknownArea(String),
    #[error("no rubric available for knowledge area {0}")]
    NoRubric(KnowledgeArea),
    #[error("factor '{factor}' has no criteria for level {level}")]
    MissingLevel { factor: String, level: u8 },
    #[error("invalid primary weights: {0}")]
    InvalidWeights(String),
}
