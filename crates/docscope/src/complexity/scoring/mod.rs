mod aggregate;
mod area;
mod factor;
mod secondary;

pub use aggregate::{aggregate, reporting_weight, PrimaryWeights};
pub use area::score_area;
pub use factor::{score_factor, FactorScore};
pub use secondary::{
    derive_secondary, stakeholder_count_multiplier, stakeholder_diversity_multiplier,
    vendor_count_multiplier, ContextMultiplier,
};

use super::attributes::ProjectAttributes;
use super::catalog::RubricCatalog;
use super::domain::KnowledgeArea;
use super::profile::{KnowledgeAreaComplexity, PrimaryAreas, ProjectComplexityProfile};
use super::recommendation::synthesize;
use super::ScoringError;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::debug;

const UNIDENTIFIED_PROJECT: &str = "unidentified-project";

/// Stateless engine that applies the rubric catalog to project attributes.
///
/// Cloning is cheap; the catalog is shared read-only between clones and threads.
#[derive(Debug, Clone)]
pub struct ComplexityEngine {
    catalog: Arc<RubricCatalog>,
    weights: PrimaryWeights,
}

impl ComplexityEngine {
    pub fn new(catalog: Arc<RubricCatalog>) -> Self {
        Self::with_weights(catalog, PrimaryWeights::default())
    }

    pub fn with_weights(catalog: Arc<RubricCatalog>, weights: PrimaryWeights) -> Self {
        Self { catalog, weights }
    }

    pub fn catalog(&self) -> &RubricCatalog {
        &self.catalog
    }

    pub fn weights(&self) -> &PrimaryWeights {
        &self.weights
    }

    /// Score a single primary area. Secondary areas have no rubric and are rejected.
    pub fn score_area(
        &self,
        area: KnowledgeArea,
        attributes: &ProjectAttributes,
    ) -> Result<KnowledgeAreaComplexity, ScoringError> {
        let rubric = self.catalog.rubric(area)?;
        score_area(rubric, attributes)
    }

    pub fn score_area_by_tag(
        &self,
        tag: &str,
        attributes: &ProjectAttributes,
    ) -> Result<KnowledgeAreaComplexity, ScoringError> {
        let area: KnowledgeArea = tag.parse()?;
        self.score_area(area, attributes)
    }

    pub fn analyze(
        &self,
        attributes: &ProjectAttributes,
    ) -> Result<ProjectComplexityProfile, ScoringError> {
        let primary = PrimaryAreas {
            resources: self.score_area(KnowledgeArea::Resources, attributes)?,
            costs: self.score_area(KnowledgeArea::Costs, attributes)?,
            quality: self.score_area(KnowledgeArea::Quality, attributes)?,
            scope: self.score_area(KnowledgeArea::Scope, attributes)?,
        };

        let overall_complexity = aggregate(&primary, &self.weights);
        let secondary = derive_secondary(&primary, attributes, &self.catalog)?;
        let recommendations = synthesize(&primary, &secondary);

        let project_id = attributes
            .project_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .unwrap_or(UNIDENTIFIED_PROJECT)
            .to_string();

        debug!(
            project = %project_id,
            overall = overall_complexity,
            recommendations = recommendations.len(),
            "project analyzed"
        );

        Ok(ProjectComplexityProfile {
            project_id,
            project_name: attributes.project_name.clone(),
            catalog_version: self.catalog.version().to_string(),
            primary,
            secondary,
            overall_complexity,
            recommendations,
        })
    }

    /// Analyze many projects in parallel. Results keep the input order.
    pub fn analyze_batch(
        &self,
        projects: &[ProjectAttributes],
    ) -> Vec<Result<ProjectComplexityProfile, ScoringError>> {
        projects
            .par_iter()
            .map(|attributes| self.analyze(attributes))
            .collect()
    }
}
