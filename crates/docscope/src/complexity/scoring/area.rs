use super::factor::{score_factor, FactorScore};
use crate::complexity::attributes::{Observation, ProjectAttributes};
use crate::complexity::catalog::{KnowledgeAreaRubric, RubricFactor, MAX_LEVEL, MIN_LEVEL};
use crate::complexity::domain::KnowledgeArea;
use crate::complexity::profile::{ComplexityFactor, KnowledgeAreaComplexity};
use crate::complexity::ScoringError;
use std::collections::BTreeSet;
use tracing::debug;

/// Score one primary area against its rubric.
///
/// The area score is the weighted sum of factor levels. Secondary triggers are collected only
/// from factors whose own level reaches the rubric's `high` threshold; a high aggregate made of
/// middling factors triggers nothing.
pub fn score_area(
    rubric: &KnowledgeAreaRubric,
    attributes: &ProjectAttributes,
) -> Result<KnowledgeAreaComplexity, ScoringError> {
    let thresholds = rubric.thresholds;
    let mut factors = Vec::with_capacity(rubric.factors.len());
    let mut weighted_total = 0.0;
    let mut triggered = BTreeSet::new();

    for factor in &rubric.factors {
        let score = score_factor(factor, attributes)?;
        let level = f64::from(score.level);
        weighted_total += level * factor.weight;

        if level >= thresholds.high {
            triggered.extend(score.criteria.secondary_triggers.iter().copied());
        }

        factors.push(ComplexityFactor {
            name: factor.name.clone(),
            weight: factor.weight,
            score: level,
            description: describe(factor, &score),
        });
    }

    let complexity_score = weighted_total.clamp(f64::from(MIN_LEVEL), f64::from(MAX_LEVEL));
    let documentation_required = complexity_score >= thresholds.minimal;
    let triggered_areas: Vec<KnowledgeArea> = triggered.into_iter().collect();

    debug!(
        area = %rubric.area,
        score = complexity_score,
        documentation_required,
        triggered = triggered_areas.len(),
        "scored primary area"
    );

    Ok(KnowledgeAreaComplexity {
        area: rubric.area,
        complexity_score,
        band: thresholds.band(complexity_score),
        factors,
        documentation_required,
        documentation_threshold: thresholds.minimal,
        triggered_areas,
        triggered_by: Vec::new(),
    })
}

fn describe(factor: &RubricFactor, score: &FactorScore<'_>) -> String {
    let observed = match score.observation {
        Some(Observation::Quantity(value)) => {
            format!("{} = {}", factor.attribute.field(), format_quantity(value))
        }
        Some(Observation::Level(_)) => format!("{} reported", factor.attribute.field()),
        None => {
            return format!(
                "{} not provided; defaulted to level {}: {}",
                factor.attribute.field(),
                score.level,
                score.criteria.description
            )
        }
    };

    format!(
        "{observed} -> level {}: {}",
        score.level, score.criteria.description
    )
}

fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complexity::attributes::{Clarity, RequirementLevel, ResourceConstraint};
    use crate::complexity::catalog::RubricCatalog;
    use crate::complexity::domain::ComplexityBand;

    fn rubric(area: KnowledgeArea) -> KnowledgeAreaRubric {
        RubricCatalog::standard()
            .expect("standard catalog is valid")
            .rubric(area)
            .cloned()
            .expect("primary rubric")
    }

    #[test]
    fn empty_project_scores_minimum_without_documentation() {
        let outcome = score_area(&rubric(KnowledgeArea::Resources), &ProjectAttributes::default())
            .expect("area scores");

        assert!((outcome.complexity_score - 1.0).abs() < 1e-9);
        assert!(!outcome.documentation_required);
        assert!(outcome.triggered_areas.is_empty());
        assert_eq!(outcome.band, ComplexityBand::Negligible);
        assert_eq!(outcome.factors.len(), 5);
        assert!(outcome
            .factors
            .iter()
            .all(|factor| factor.description.contains("not provided")));
    }

    #[test]
    fn area_score_is_weighted_sum_of_levels() {
        // team 20 -> 4 (0.30), skills 5 -> 3 (0.20), tight -> 4 (0.20),
        // 1 site -> 1, 1 dependency -> 2
        let attributes = ProjectAttributes {
            team_size: Some(20),
            skill_count: Some(5),
            resource_constraint: Some(ResourceConstraint::Tight),
            location_count: Some(1),
            external_dependency_count: Some(1),
            ..ProjectAttributes::default()
        };

        let outcome =
            score_area(&rubric(KnowledgeArea::Resources), &attributes).expect("area scores");

        let expected = 4.0 * 0.30 + 3.0 * 0.20 + 4.0 * 0.20 + 1.0 * 0.15 + 2.0 * 0.15;
        assert!((outcome.complexity_score - expected).abs() < 1e-9);
        assert!(outcome.documentation_required);
        assert_eq!(
            outcome.triggered_areas,
            vec![KnowledgeArea::Schedule, KnowledgeArea::Communication]
        );
    }

    #[test]
    fn only_high_level_factors_propagate_triggers() {
        // Every factor sits at level 3: the aggregate clears `moderate` but no factor reaches
        // `high`, so no secondary area is triggered.
        let attributes = ProjectAttributes {
            deliverable_count: Some(5),
            scope_definition: Some(Clarity::Partial),
            inclusion_criteria_count: Some(4),
            exclusion_criteria_count: Some(4),
            scope_boundaries: Some(Clarity::Partial),
            change_management: Some(RequirementLevel::Standard),
            ..ProjectAttributes::default()
        };

        let outcome = score_area(&rubric(KnowledgeArea::Scope), &attributes).expect("area scores");

        assert!((outcome.complexity_score - 3.0).abs() < 1e-9);
        assert!(outcome.documentation_required);
        assert!(outcome.triggered_areas.is_empty());
    }

    #[test]
    fn single_high_factor_triggers_even_when_area_needs_no_documentation() {
        // Triggers follow individual factor levels, not the aggregate: one factor at level 5
        // fires its triggers although the area as a whole stays below `minimal`.
        let attributes = ProjectAttributes {
            external_dependency_count: Some(11),
            ..ProjectAttributes::default()
        };

        let outcome =
            score_area(&rubric(KnowledgeArea::Resources), &attributes).expect("area scores");

        assert!((outcome.complexity_score - 1.6).abs() < 1e-9);
        assert!(!outcome.documentation_required);
        assert_eq!(
            outcome.triggered_areas,
            vec![
                KnowledgeArea::Integration,
                KnowledgeArea::Risk,
                KnowledgeArea::Procurement
            ]
        );
    }
}
