//! Versioned rubric catalog: one weighted rubric per primary knowledge area plus the
//! documentation thresholds of the derived secondary areas.

mod standard;

use super::attributes::Attribute;
use super::domain::{ComplexityThresholds, KnowledgeArea};
use super::ScoringError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{Read, Write};
use tracing::info;

pub const LEVEL_COUNT: usize = 5;
pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 5;

const WEIGHT_EPSILON: f64 = 1e-6;

/// One ordinal level of a rubric factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringCriteria {
    pub level: u8,
    pub description: String,
    #[serde(default)]
    pub indicators: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    /// Whether an area scored at this level reaches the rubric's `minimal` cutoff. Checked
    /// against the rubric thresholds when the catalog loads.
    pub documentation_required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_triggers: Vec<KnowledgeArea>,
}

/// How an observed attribute value resolves to a level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LevelBounds {
    /// Inclusive upper bounds for levels 1 through 4; anything above the last bound is level 5.
    UpperBounds { bounds: [f64; 4] },
    /// The attribute already reports its level.
    Ordinal,
}

/// Weighted dimension of a knowledge area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RubricFactor {
    pub name: String,
    pub weight: f64,
    pub attribute: Attribute,
    pub bounds: LevelBounds,
    pub levels: Vec<ScoringCriteria>,
}

impl RubricFactor {
    pub fn criteria(&self, level: u8) -> Option<&ScoringCriteria> {
        level
            .checked_sub(1)
            .and_then(|index| self.levels.get(usize::from(index)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeAreaRubric {
    pub area: KnowledgeArea,
    pub factors: Vec<RubricFactor>,
    pub thresholds: ComplexityThresholds,
}

/// Serialized form of a catalog. Only becomes a [`RubricCatalog`] after validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub version: String,
    pub rubrics: Vec<KnowledgeAreaRubric>,
    pub secondary_thresholds: BTreeMap<KnowledgeArea, ComplexityThresholds>,
    /// Let a secondary area triggered by a high-level primary factor require documentation from
    /// its `minimal` cutoff instead of `moderate`. Off unless the catalog opts in.
    #[serde(default)]
    pub triggered_secondary_at_minimal: bool,
}

/// Validated, immutable rubric catalog shared by every analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct RubricCatalog {
    version: String,
    rubrics: Vec<KnowledgeAreaRubric>,
    secondary_thresholds: BTreeMap<KnowledgeArea, ComplexityThresholds>,
    triggered_secondary_at_minimal: bool,
}

impl RubricCatalog {
    /// Built-in catalog shipped with the engine.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::from_document(standard::standard_document())
    }

    pub fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        validate(&document)?;

        let CatalogDocument {
            version,
            mut rubrics,
            secondary_thresholds,
            triggered_secondary_at_minimal,
        } = document;
        rubrics.sort_by_key(|rubric| rubric.area);

        info!(%version, rubrics = rubrics.len(), "rubric catalog loaded");

        Ok(Self {
            version,
            rubrics,
            secondary_thresholds,
            triggered_secondary_at_minimal,
        })
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        Self::from_document(document)
    }

    pub fn to_writer_pretty<W: Write>(&self, writer: W) -> Result<(), CatalogError> {
        serde_json::to_writer_pretty(writer, &self.to_document())?;
        Ok(())
    }

    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            version: self.version.clone(),
            rubrics: self.rubrics.clone(),
            secondary_thresholds: self.secondary_thresholds.clone(),
            triggered_secondary_at_minimal: self.triggered_secondary_at_minimal,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn triggered_secondary_at_minimal(&self) -> bool {
        self.triggered_secondary_at_minimal
    }

    /// Rubrics in primary-area order.
    pub fn rubrics(&self) -> &[KnowledgeAreaRubric] {
        &self.rubrics
    }

    pub fn rubric(&self, area: KnowledgeArea) -> Result<&KnowledgeAreaRubric, ScoringError> {
        self.rubrics
            .iter()
            .find(|rubric| rubric.area == area)
            .ok_or(ScoringError::NoRubric(area))
    }

    pub fn thresholds(&self, area: KnowledgeArea) -> Result<ComplexityThresholds, ScoringError> {
        if area.is_primary() {
            return self.rubric(area).map(|rubric| rubric.thresholds);
        }
        self.secondary_thresholds
            .get(&area)
            .copied()
            .ok_or(ScoringError::NoRubric(area))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("rubric catalog could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("rubric catalog version is empty")]
    MissingVersion,
    #[error("no rubric defined for primary area {0}")]
    MissingRubric(KnowledgeArea),
    #[error("rubric for {0} is defined more than once")]
    DuplicateRubric(KnowledgeArea),
    #[error("{0} is a derived area and cannot carry a rubric")]
    SecondaryRubric(KnowledgeArea),
    #[error("rubric for {0} has no factors")]
    EmptyRubric(KnowledgeArea),
    #[error("factor '{factor}' in {area} has weight {weight} outside 0.0..=1.0")]
    WeightOutOfRange {
        area: KnowledgeArea,
        factor: String,
        weight: f64,
    },
    #[error("factor weights for {area} sum to {total:.4}, expected 1.0")]
    WeightSum { area: KnowledgeArea, total: f64 },
    #[error("factor '{factor}' in {area} defines {found} levels, expected 5")]
    LevelCount {
        area: KnowledgeArea,
        factor: String,
        found: usize,
    },
    #[error("factor '{factor}' in {area} lists level {found} in position {expected}")]
    LevelOrder {
        area: KnowledgeArea,
        factor: String,
        expected: u8,
        found: u8,
    },
    #[error("factor '{factor}' in {area} has level bounds that are not ascending")]
    UnorderedBounds { area: KnowledgeArea, factor: String },
    #[error("factor '{factor}' in {area} uses bounds that do not fit attribute {attribute:?}")]
    MismatchedBounds {
        area: KnowledgeArea,
        factor: String,
        attribute: Attribute,
    },
    #[error("factor '{factor}' in {area} triggers primary area {trigger}")]
    InvalidTrigger {
        area: KnowledgeArea,
        factor: String,
        trigger: KnowledgeArea,
    },
    #[error("factor '{factor}' in {area} marks level {level} against the wrong cutoff")]
    DocumentationFlag {
        area: KnowledgeArea,
        factor: String,
        level: u8,
    },
    #[error("thresholds for {0} must be ascending and within 1.0..=5.0")]
    InvalidThresholds(KnowledgeArea),
    #[error("no documentation thresholds defined for secondary area {0}")]
    MissingThresholds(KnowledgeArea),
}

fn validate(document: &CatalogDocument) -> Result<(), CatalogError> {
    if document.version.trim().is_empty() {
        return Err(CatalogError::MissingVersion);
    }

    for rubric in &document.rubrics {
        if !rubric.area.is_primary() {
            return Err(CatalogError::SecondaryRubric(rubric.area));
        }
        let declared = document
            .rubrics
            .iter()
            .filter(|other| other.area == rubric.area)
            .count();
        if declared > 1 {
            return Err(CatalogError::DuplicateRubric(rubric.area));
        }
        validate_rubric(rubric)?;
    }

    for area in KnowledgeArea::primary() {
        if !document.rubrics.iter().any(|rubric| rubric.area == area) {
            return Err(CatalogError::MissingRubric(area));
        }
    }

    for area in KnowledgeArea::secondary() {
        let thresholds = document
            .secondary_thresholds
            .get(&area)
            .ok_or(CatalogError::MissingThresholds(area))?;
        validate_thresholds(area, thresholds)?;
    }

    Ok(())
}

fn validate_rubric(rubric: &KnowledgeAreaRubric) -> Result<(), CatalogError> {
    let area = rubric.area;
    if rubric.factors.is_empty() {
        return Err(CatalogError::EmptyRubric(area));
    }
    validate_thresholds(area, &rubric.thresholds)?;

    let mut total = 0.0;
    for factor in &rubric.factors {
        if !(0.0..=1.0).contains(&factor.weight) {
            return Err(CatalogError::WeightOutOfRange {
                area,
                factor: factor.name.clone(),
                weight: factor.weight,
            });
        }
        total += factor.weight;
        validate_factor(area, &rubric.thresholds, factor)?;
    }

    if (total - 1.0).abs() > WEIGHT_EPSILON {
        return Err(CatalogError::WeightSum { area, total });
    }
    Ok(())
}

fn validate_factor(
    area: KnowledgeArea,
    thresholds: &ComplexityThresholds,
    factor: &RubricFactor,
) -> Result<(), CatalogError> {
    if factor.levels.len() != LEVEL_COUNT {
        return Err(CatalogError::LevelCount {
            area,
            factor: factor.name.clone(),
            found: factor.levels.len(),
        });
    }

    for (expected, criteria) in (MIN_LEVEL..=MAX_LEVEL).zip(&factor.levels) {
        if criteria.level != expected {
            return Err(CatalogError::LevelOrder {
                area,
                factor: factor.name.clone(),
                expected,
                found: criteria.level,
            });
        }
        if criteria.documentation_required != (f64::from(expected) >= thresholds.minimal) {
            return Err(CatalogError::DocumentationFlag {
                area,
                factor: factor.name.clone(),
                level: expected,
            });
        }
        if let Some(trigger) = criteria
            .secondary_triggers
            .iter()
            .find(|trigger| trigger.is_primary())
        {
            return Err(CatalogError::InvalidTrigger {
                area,
                factor: factor.name.clone(),
                trigger: *trigger,
            });
        }
    }

    match factor.bounds {
        LevelBounds::Ordinal if !factor.attribute.is_ordinal() => {
            Err(CatalogError::MismatchedBounds {
                area,
                factor: factor.name.clone(),
                attribute: factor.attribute,
            })
        }
        LevelBounds::UpperBounds { .. } if factor.attribute.is_ordinal() => {
            Err(CatalogError::MismatchedBounds {
                area,
                factor: factor.name.clone(),
                attribute: factor.attribute,
            })
        }
        LevelBounds::UpperBounds { bounds } => {
            let ascending = bounds.iter().all(|bound| bound.is_finite())
                && bounds.windows(2).all(|pair| pair[0] < pair[1]);
            if ascending {
                Ok(())
            } else {
                Err(CatalogError::UnorderedBounds {
                    area,
                    factor: factor.name.clone(),
                })
            }
        }
        LevelBounds::Ordinal => Ok(()),
    }
}

fn validate_thresholds(
    area: KnowledgeArea,
    thresholds: &ComplexityThresholds,
) -> Result<(), CatalogError> {
    let cutoffs = thresholds.as_array();
    let in_range = cutoffs
        .iter()
        .all(|cutoff| (f64::from(MIN_LEVEL)..=f64::from(MAX_LEVEL)).contains(cutoff));
    let ascending = cutoffs.windows(2).all(|pair| pair[0] <= pair[1]);
    if in_range && ascending {
        Ok(())
    } else {
        Err(CatalogError::InvalidThresholds(area))
    }
}
