use crate::complexity::attributes::ProjectAttributes;
use crate::complexity::catalog::{RubricCatalog, MAX_LEVEL, MIN_LEVEL};
use crate::complexity::domain::KnowledgeArea;
use crate::complexity::profile::{
    ComplexityFactor, KnowledgeAreaComplexity, PrimaryAreas, SecondaryAreas,
};
use crate::complexity::ScoringError;
use tracing::debug;

const INTEGRATION_COEFFICIENT: f64 = 0.8;
const SCHEDULE_COEFFICIENT: f64 = 0.9;
const COMMUNICATION_COEFFICIENT: f64 = 0.8;
const RISK_COEFFICIENT: f64 = 0.9;
const PROCUREMENT_COEFFICIENT: f64 = 0.85;
const STAKEHOLDER_COEFFICIENT: f64 = 0.8;

/// Contextual multiplier applied on top of a secondary area's base score.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMultiplier {
    pub label: String,
    pub value: f64,
}

impl ContextMultiplier {
    fn neutral() -> Self {
        Self {
            label: "no contextual adjustment".to_string(),
            value: 1.0,
        }
    }
}

pub fn stakeholder_count_multiplier(count: Option<u32>) -> ContextMultiplier {
    let count = count.unwrap_or(0);
    let value = if count > 10 {
        1.3
    } else if count > 5 {
        1.1
    } else {
        1.0
    };
    ContextMultiplier {
        label: format!("{count} stakeholders"),
        value,
    }
}

pub fn vendor_count_multiplier(count: Option<u32>) -> ContextMultiplier {
    let count = count.unwrap_or(0);
    let value = if count > 5 {
        1.3
    } else if count > 2 {
        1.1
    } else {
        1.0
    };
    ContextMultiplier {
        label: format!("{count} vendors"),
        value,
    }
}

pub fn stakeholder_diversity_multiplier(distinct_types: usize) -> ContextMultiplier {
    let value = if distinct_types > 5 {
        1.2
    } else if distinct_types > 3 {
        1.1
    } else {
        1.0
    };
    ContextMultiplier {
        label: format!("{distinct_types} stakeholder types"),
        value,
    }
}

/// Derive all six secondary areas from the primary scores and project context.
pub fn derive_secondary(
    primary: &PrimaryAreas,
    attributes: &ProjectAttributes,
    catalog: &RubricCatalog,
) -> Result<SecondaryAreas, ScoringError> {
    let resources = primary.resources.complexity_score;
    let costs = primary.costs.complexity_score;
    let quality = primary.quality.complexity_score;
    let scope = primary.scope.complexity_score;

    let time = attributes.time_constraint_or_default();

    let integration = derive(
        KnowledgeArea::Integration,
        integration_drivers(primary),
        INTEGRATION_COEFFICIENT,
        ContextMultiplier::neutral(),
        primary,
        catalog,
    )?;
    let schedule = derive(
        KnowledgeArea::Schedule,
        vec![(&primary.resources, 1.0)],
        SCHEDULE_COEFFICIENT,
        ContextMultiplier {
            label: format!("{} time constraint", time.label()),
            value: time.multiplier(),
        },
        primary,
        catalog,
    )?;
    let communication = derive(
        KnowledgeArea::Communication,
        vec![(&primary.resources, 1.0)],
        COMMUNICATION_COEFFICIENT,
        stakeholder_count_multiplier(attributes.stakeholder_count),
        primary,
        catalog,
    )?;
    let risk = derive(
        KnowledgeArea::Risk,
        vec![
            (&primary.costs, 1.0 / 3.0),
            (&primary.quality, 1.0 / 3.0),
            (&primary.scope, 1.0 / 3.0),
        ],
        RISK_COEFFICIENT,
        ContextMultiplier::neutral(),
        primary,
        catalog,
    )?;
    let procurement = derive(
        KnowledgeArea::Procurement,
        vec![(&primary.costs, 1.0)],
        PROCUREMENT_COEFFICIENT,
        vendor_count_multiplier(attributes.vendor_count),
        primary,
        catalog,
    )?;
    let stakeholder = derive(
        KnowledgeArea::Stakeholder,
        vec![(&primary.scope, 1.0)],
        STAKEHOLDER_COEFFICIENT,
        stakeholder_diversity_multiplier(attributes.distinct_stakeholder_types()),
        primary,
        catalog,
    )?;

    debug!(
        resources,
        costs,
        quality,
        scope,
        integration = integration.complexity_score,
        risk = risk.complexity_score,
        "derived secondary areas"
    );

    Ok(SecondaryAreas {
        integration,
        schedule,
        communication,
        risk,
        procurement,
        stakeholder,
    })
}

/// Integration follows the highest primary score; the first area in canonical order wins ties.
fn integration_drivers(primary: &PrimaryAreas) -> Vec<(&KnowledgeAreaComplexity, f64)> {
    let highest = primary
        .iter()
        .fold(None::<&KnowledgeAreaComplexity>, |best, record| match best {
            Some(best) if best.complexity_score >= record.complexity_score => Some(best),
            _ => Some(record),
        });

    primary
        .iter()
        .map(|record| {
            let selected = highest.is_some_and(|best| best.area == record.area);
            (record, if selected { 1.0 } else { 0.0 })
        })
        .collect()
}

fn derive(
    area: KnowledgeArea,
    drivers: Vec<(&KnowledgeAreaComplexity, f64)>,
    coefficient: f64,
    multiplier: ContextMultiplier,
    primary: &PrimaryAreas,
    catalog: &RubricCatalog,
) -> Result<KnowledgeAreaComplexity, ScoringError> {
    let thresholds = catalog.thresholds(area)?;

    let base: f64 = drivers
        .iter()
        .map(|(record, share)| record.complexity_score * share)
        .sum();
    let raw = base * coefficient * multiplier.value;
    let complexity_score = raw.clamp(f64::from(MIN_LEVEL), f64::from(MAX_LEVEL));

    let triggered_by: Vec<KnowledgeArea> = primary
        .iter()
        .filter(|record| record.triggered_areas.contains(&area))
        .map(|record| record.area)
        .collect();

    let documentation_threshold =
        if catalog.triggered_secondary_at_minimal() && !triggered_by.is_empty() {
            thresholds.minimal
        } else {
            thresholds.moderate
        };

    let factors = drivers
        .iter()
        .map(|(record, share)| ComplexityFactor {
            name: format!("{} complexity", record.area.label()),
            weight: *share,
            score: record.complexity_score,
            description: format!(
                "base {base:.2} x {coefficient} x {:.2} ({}) = {raw:.2}",
                multiplier.value, multiplier.label
            ),
        })
        .collect();

    Ok(KnowledgeAreaComplexity {
        area,
        complexity_score,
        band: thresholds.band(complexity_score),
        factors,
        documentation_required: complexity_score >= documentation_threshold,
        documentation_threshold,
        triggered_areas: Vec::new(),
        triggered_by,
    })
}
