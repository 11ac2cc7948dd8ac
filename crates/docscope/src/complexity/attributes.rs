//! Typed project attributes consumed by the scoring pipeline.
//!
//! Every field is optional. A missing attribute is never an error: the factor that reads it
//! resolves to level 1 (lowest complexity) and the gap is logged at debug level. Numeric values
//! that cannot describe a real project (negative or non-finite amounts) are treated the same way.
//!
//! Decoding is per attribute: a value of the wrong type, an unknown category or a count that
//! does not fit is dropped to `None` and logged, and the rest of the project is kept.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use tracing::debug;

/// Project attributes supplied by the surrounding system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct ProjectAttributes {
    pub project_id: Option<String>,
    pub project_name: Option<String>,

    // Resources
    pub team_size: Option<u32>,
    pub skill_count: Option<u32>,
    pub resource_constraint: Option<ResourceConstraint>,
    pub location_count: Option<u32>,
    pub external_dependency_count: Option<u32>,

    // Costs
    pub budget: Option<f64>,
    pub funding_source_count: Option<u32>,
    pub cost_sensitivity: Option<CostSensitivity>,
    pub financial_reporting: Option<RequirementLevel>,

    // Quality
    pub regulatory_requirement_count: Option<u32>,
    pub quality_standard_count: Option<u32>,
    pub precision_requirement: Option<RequirementLevel>,
    pub testing_requirement: Option<RequirementLevel>,
    pub quality_assurance: Option<RequirementLevel>,

    // Scope
    pub deliverable_count: Option<u32>,
    pub scope_definition: Option<Clarity>,
    pub inclusion_criteria_count: Option<u32>,
    pub exclusion_criteria_count: Option<u32>,
    pub scope_boundaries: Option<Clarity>,
    pub change_management: Option<RequirementLevel>,

    // Secondary derivation context
    pub time_constraint: Option<TimeConstraint>,
    pub stakeholder_count: Option<u32>,
    pub stakeholder_types: Vec<String>,
    pub vendor_count: Option<u32>,
}

impl From<Map<String, Value>> for ProjectAttributes {
    fn from(mut fields: Map<String, Value>) -> Self {
        let fields = &mut fields;
        ProjectAttributes {
            project_id: text(fields, "project_id"),
            project_name: text(fields, "project_name"),
            team_size: lenient(fields, "team_size"),
            skill_count: lenient(fields, "skill_count"),
            resource_constraint: lenient(fields, "resource_constraint"),
            location_count: lenient(fields, "location_count"),
            external_dependency_count: lenient(fields, "external_dependency_count"),
            budget: lenient(fields, "budget"),
            funding_source_count: lenient(fields, "funding_source_count"),
            cost_sensitivity: lenient(fields, "cost_sensitivity"),
            financial_reporting: lenient(fields, "financial_reporting"),
            regulatory_requirement_count: lenient(fields, "regulatory_requirement_count"),
            quality_standard_count: lenient(fields, "quality_standard_count"),
            precision_requirement: lenient(fields, "precision_requirement"),
            testing_requirement: lenient(fields, "testing_requirement"),
            quality_assurance: lenient(fields, "quality_assurance"),
            deliverable_count: lenient(fields, "deliverable_count"),
            scope_definition: lenient(fields, "scope_definition"),
            inclusion_criteria_count: lenient(fields, "inclusion_criteria_count"),
            exclusion_criteria_count: lenient(fields, "exclusion_criteria_count"),
            scope_boundaries: lenient(fields, "scope_boundaries"),
            change_management: lenient(fields, "change_management"),
            time_constraint: lenient(fields, "time_constraint"),
            stakeholder_count: lenient(fields, "stakeholder_count"),
            stakeholder_types: string_list(fields, "stakeholder_types"),
            vendor_count: lenient(fields, "vendor_count"),
        }
    }
}

/// Decode one attribute, dropping values that do not fit its type.
fn lenient<T: DeserializeOwned>(
    fields: &mut Map<String, Value>,
    field: &'static str,
) -> Option<T> {
    let value = fields.remove(field).filter(|value| !value.is_null())?;
    match serde_json::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            debug!(field, error = %err, "malformed attribute ignored");
            None
        }
    }
}

/// Identifiers may arrive as numbers from spreadsheet exports.
fn text(fields: &mut Map<String, Value>, field: &'static str) -> Option<String> {
    match fields.remove(field)? {
        Value::String(value) => Some(value),
        Value::Number(value) => Some(value.to_string()),
        Value::Null => None,
        other => {
            debug!(field, value = %other, "malformed attribute ignored");
            None
        }
    }
}

fn string_list(fields: &mut Map<String, Value>, field: &'static str) -> Vec<String> {
    match fields.remove(field) {
        Some(Value::Array(entries)) => entries
            .into_iter()
            .filter_map(|entry| match entry {
                Value::String(value) => Some(value),
                other => {
                    debug!(field, value = %other, "malformed list entry ignored");
                    None
                }
            })
            .collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            debug!(field, value = %other, "malformed attribute ignored");
            Vec::new()
        }
    }
}

impl ProjectAttributes {
    /// Read the raw observation backing `attribute`, if the project supplied it.
    pub fn observe(&self, attribute: Attribute) -> Option<Observation> {
        match attribute {
            Attribute::TeamSize => self.team_size.map(Observation::count),
            Attribute::SkillCount => self.skill_count.map(Observation::count),
            Attribute::ResourceConstraint => self
                .resource_constraint
                .map(|value| Observation::Level(value.level())),
            Attribute::LocationCount => self.location_count.map(Observation::count),
            Attribute::ExternalDependencies => {
                self.external_dependency_count.map(Observation::count)
            }
            Attribute::Budget => self.budget.map(Observation::Quantity),
            Attribute::FundingSources => self.funding_source_count.map(Observation::count),
            Attribute::CostSensitivity => self
                .cost_sensitivity
                .map(|value| Observation::Level(value.level())),
            Attribute::FinancialReporting => self.financial_reporting.map(Observation::requirement),
            Attribute::RegulatoryRequirements => {
                self.regulatory_requirement_count.map(Observation::count)
            }
            Attribute::QualityStandards => self.quality_standard_count.map(Observation::count),
            Attribute::PrecisionRequirements => {
                self.precision_requirement.map(Observation::requirement)
            }
            Attribute::TestingRequirements => {
                self.testing_requirement.map(Observation::requirement)
            }
            Attribute::QualityAssurance => self.quality_assurance.map(Observation::requirement),
            Attribute::Deliverables => self.deliverable_count.map(Observation::count),
            Attribute::ScopeCriteria => {
                match (self.inclusion_criteria_count, self.exclusion_criteria_count) {
                    (None, None) => None,
                    (inclusion, exclusion) => Some(Observation::count(
                        inclusion.unwrap_or(0).saturating_add(exclusion.unwrap_or(0)),
                    )),
                }
            }
            Attribute::ScopeDefinitionClarity => self
                .scope_definition
                .map(|value| Observation::Level(value.level())),
            Attribute::ScopeBoundaryClarity => self
                .scope_boundaries
                .map(|value| Observation::Level(value.level())),
            Attribute::ChangeManagement => self.change_management.map(Observation::requirement),
        }
    }

    /// Stakeholder types after trimming, case folding, and de-duplication.
    pub fn distinct_stakeholder_types(&self) -> usize {
        self.stakeholder_types
            .iter()
            .map(|kind| kind.trim().to_ascii_lowercase())
            .filter(|kind| !kind.is_empty())
            .collect::<BTreeSet<_>>()
            .len()
    }

    pub fn time_constraint_or_default(&self) -> TimeConstraint {
        self.time_constraint.unwrap_or_default()
    }
}

/// Attribute a rubric factor measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    TeamSize,
    SkillCount,
    ResourceConstraint,
    LocationCount,
    ExternalDependencies,
    Budget,
    FundingSources,
    CostSensitivity,
    FinancialReporting,
    RegulatoryRequirements,
    QualityStandards,
    PrecisionRequirements,
    TestingRequirements,
    QualityAssurance,
    Deliverables,
    /// Inclusion plus exclusion criteria.
    ScopeCriteria,
    ScopeDefinitionClarity,
    ScopeBoundaryClarity,
    ChangeManagement,
}

impl Attribute {
    /// Categorical attributes report a level directly instead of a quantity.
    pub const fn is_ordinal(self) -> bool {
        matches!(
            self,
            Self::ResourceConstraint
                | Self::CostSensitivity
                | Self::FinancialReporting
                | Self::PrecisionRequirements
                | Self::TestingRequirements
                | Self::QualityAssurance
                | Self::ScopeDefinitionClarity
                | Self::ScopeBoundaryClarity
                | Self::ChangeManagement
        )
    }

    pub const fn field(self) -> &'static str {
        match self {
            Self::TeamSize => "team_size",
            Self::SkillCount => "skill_count",
            Self::ResourceConstraint => "resource_constraint",
            Self::LocationCount => "location_count",
            Self::ExternalDependencies => "external_dependency_count",
            Self::Budget => "budget",
            Self::FundingSources => "funding_source_count",
            Self::CostSensitivity => "cost_sensitivity",
            Self::FinancialReporting => "financial_reporting",
            Self::RegulatoryRequirements => "regulatory_requirement_count",
            Self::QualityStandards => "quality_standard_count",
            Self::PrecisionRequirements => "precision_requirement",
            Self::TestingRequirements => "testing_requirement",
            Self::QualityAssurance => "quality_assurance",
            Self::Deliverables => "deliverable_count",
            Self::ScopeCriteria => "inclusion_criteria_count+exclusion_criteria_count",
            Self::ScopeDefinitionClarity => "scope_definition",
            Self::ScopeBoundaryClarity => "scope_boundaries",
            Self::ChangeManagement => "change_management",
        }
    }
}

/// Raw value read from the project for one attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Observation {
    /// Count or amount compared against level bounds.
    Quantity(f64),
    /// Categorical value already expressed as a level (1..=5).
    Level(u8),
}

impl Observation {
    fn count(value: u32) -> Self {
        Self::Quantity(f64::from(value))
    }

    fn requirement(value: RequirementLevel) -> Self {
        Self::Level(value.level())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostSensitivity {
    Low,
    Medium,
    High,
}

impl CostSensitivity {
    pub const fn level(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 3,
            Self::High => 5,
        }
    }
}

/// Rigor expected for a reporting, testing, or control process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementLevel {
    None,
    Basic,
    Standard,
    Enhanced,
    Rigorous,
}

impl RequirementLevel {
    pub const fn level(self) -> u8 {
        match self {
            Self::None => 1,
            Self::Basic => 2,
            Self::Standard => 3,
            Self::Enhanced => 4,
            Self::Rigorous => 5,
        }
    }
}

/// How well something is defined. Less clarity means more complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Clarity {
    Clear,
    MostlyClear,
    Partial,
    Vague,
    Undefined,
}

impl Clarity {
    pub const fn level(self) -> u8 {
        match self {
            Self::Clear => 1,
            Self::MostlyClear => 2,
            Self::Partial => 3,
            Self::Vague => 4,
            Self::Undefined => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceConstraint {
    Unconstrained,
    Light,
    Moderate,
    Tight,
    Severe,
}

impl ResourceConstraint {
    pub const fn level(self) -> u8 {
        match self {
            Self::Unconstrained => 1,
            Self::Light => 2,
            Self::Moderate => 3,
            Self::Tight => 4,
            Self::Severe => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeConstraint {
    #[default]
    Standard,
    Tight,
    Critical,
}

impl TimeConstraint {
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Standard => 1.0,
            Self::Tight => 1.1,
            Self::Critical => 1.2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Tight => "tight",
            Self::Critical => "critical",
        }
    }
}
