use crate::complexity::attributes::{Observation, ProjectAttributes};
use crate::complexity::catalog::{LevelBounds, RubricFactor, ScoringCriteria, MAX_LEVEL, MIN_LEVEL};
use crate::complexity::ScoringError;
use tracing::debug;

/// Level a factor resolved to for one project, with the criteria it matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorScore<'a> {
    pub level: u8,
    pub criteria: &'a ScoringCriteria,
    /// `None` when the attribute was missing or unusable and the level was defaulted.
    pub observation: Option<Observation>,
}

pub fn score_factor<'a>(
    factor: &'a RubricFactor,
    attributes: &ProjectAttributes,
) -> Result<FactorScore<'a>, ScoringError> {
    let observation = attributes
        .observe(factor.attribute)
        .filter(|observation| usable(factor, *observation));

    let level = match observation {
        Some(observation) => resolve_level(factor.bounds, observation),
        None => {
            debug!(
                factor = %factor.name,
                attribute = factor.attribute.field(),
                "attribute missing or unusable; defaulting to lowest level"
            );
            MIN_LEVEL
        }
    };

    let criteria = factor
        .criteria(level)
        .ok_or_else(|| ScoringError::MissingLevel {
            factor: factor.name.clone(),
            level,
        })?;

    Ok(FactorScore {
        level,
        criteria,
        observation,
    })
}

fn usable(factor: &RubricFactor, observation: Observation) -> bool {
    match (factor.bounds, observation) {
        (LevelBounds::UpperBounds { .. }, Observation::Quantity(value)) => {
            if value.is_finite() && value >= 0.0 {
                true
            } else {
                debug!(factor = %factor.name, value, "malformed quantity ignored");
                false
            }
        }
        (LevelBounds::Ordinal, Observation::Level(_)) => true,
        _ => {
            debug!(factor = %factor.name, ?observation, "observation does not fit factor bounds");
            false
        }
    }
}

fn resolve_level(bounds: LevelBounds, observation: Observation) -> u8 {
    match (bounds, observation) {
        (LevelBounds::UpperBounds { bounds }, Observation::Quantity(value)) => bounds
            .iter()
            .position(|upper| value <= *upper)
            .map(|index| index as u8 + MIN_LEVEL)
            .unwrap_or(MAX_LEVEL),
        (_, Observation::Level(level)) => level.clamp(MIN_LEVEL, MAX_LEVEL),
        (LevelBounds::Ordinal, Observation::Quantity(_)) => MIN_LEVEL,
    }
}
