use crate::complexity::catalog::{MAX_LEVEL, MIN_LEVEL};
use crate::complexity::domain::KnowledgeArea;
use crate::complexity::profile::PrimaryAreas;
use crate::complexity::ScoringError;
use serde::Serialize;

/// Weights applied to the primary areas when computing overall complexity.
///
/// The defaults sum to 0.70; the aggregate divides by the sum actually configured, so any
/// non-negative set with a positive total keeps the result inside 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrimaryWeights {
    resources: f64,
    costs: f64,
    quality: f64,
    scope: f64,
}

impl PrimaryWeights {
    pub fn new(resources: f64, costs: f64, quality: f64, scope: f64) -> Result<Self, ScoringError> {
        let weights = [resources, costs, quality, scope];
        if let Some(weight) = weights
            .iter()
            .find(|weight| !weight.is_finite() || **weight < 0.0)
        {
            return Err(ScoringError::InvalidWeights(format!(
                "weight {weight} must be a finite, non-negative number"
            )));
        }
        if weights.iter().sum::<f64>() <= 0.0 {
            return Err(ScoringError::InvalidWeights(
                "at least one primary weight must be positive".to_string(),
            ));
        }

        Ok(Self {
            resources,
            costs,
            quality,
            scope,
        })
    }

    pub fn weight(&self, area: KnowledgeArea) -> f64 {
        match area {
            KnowledgeArea::Resources => self.resources,
            KnowledgeArea::Costs => self.costs,
            KnowledgeArea::Quality => self.quality,
            KnowledgeArea::Scope => self.scope,
            _ => 0.0,
        }
    }

    pub fn total(&self) -> f64 {
        self.resources + self.costs + self.quality + self.scope
    }
}

impl Default for PrimaryWeights {
    fn default() -> Self {
        Self {
            resources: 0.25,
            costs: 0.20,
            quality: 0.15,
            scope: 0.10,
        }
    }
}

const SECONDARY_REPORTING_WEIGHT: f64 = 0.05;

/// Share of the reporting breakdown attributed to an area. Primary areas report the weight the
/// aggregate was computed with; secondary areas never enter the aggregate and share the 0.30
/// left over by the default primary weights.
pub fn reporting_weight(area: KnowledgeArea, weights: &PrimaryWeights) -> f64 {
    if area.is_primary() {
        weights.weight(area)
    } else {
        SECONDARY_REPORTING_WEIGHT
    }
}

/// Weighted mean of the primary area scores, normalized by the weights in use.
pub fn aggregate(primary: &PrimaryAreas, weights: &PrimaryWeights) -> f64 {
    let (weighted, total) = primary
        .iter()
        .map(|record| (record.complexity_score, weights.weight(record.area)))
        .filter(|(_, weight)| *weight > 0.0)
        .fold((0.0, 0.0), |(score, weight_sum), (value, weight)| {
            (score + value * weight, weight_sum + weight)
        });

    if total <= 0.0 {
        return f64::from(MIN_LEVEL);
    }

    (weighted / total).clamp(f64::from(MIN_LEVEL), f64::from(MAX_LEVEL))
}
