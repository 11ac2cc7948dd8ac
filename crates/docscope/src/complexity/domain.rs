use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ScoringError;

/// Knowledge areas used to structure complexity scoring.
///
/// Declaration order is the canonical evaluation order; recommendation ties are broken by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgeArea {
    Resources,
    Costs,
    Quality,
    Scope,
    Integration,
    Schedule,
    Communication,
    Risk,
    Procurement,
    Stakeholder,
}

impl KnowledgeArea {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::Resources,
            Self::Costs,
            Self::Quality,
            Self::Scope,
            Self::Integration,
            Self::Schedule,
            Self::Communication,
            Self::Risk,
            Self::Procurement,
            Self::Stakeholder,
        ]
    }

    pub const fn primary() -> [Self; 4] {
        [Self::Resources, Self::Costs, Self::Quality, Self::Scope]
    }

    pub const fn secondary() -> [Self; 6] {
        [
            Self::Integration,
            Self::Schedule,
            Self::Communication,
            Self::Risk,
            Self::Procurement,
            Self::Stakeholder,
        ]
    }

    pub const fn is_primary(self) -> bool {
        matches!(
            self,
            Self::Resources | Self::Costs | Self::Quality | Self::Scope
        )
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Resources => "Resources",
            Self::Costs => "Costs",
            Self::Quality => "Quality",
            Self::Scope => "Scope",
            Self::Integration => "Integration",
            Self::Schedule => "Schedule",
            Self::Communication => "Communication",
            Self::Risk => "Risk",
            Self::Procurement => "Procurement",
            Self::Stakeholder => "Stakeholder",
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Resources => "resources",
            Self::Costs => "costs",
            Self::Quality => "quality",
            Self::Scope => "scope",
            Self::Integration => "integration",
            Self::Schedule => "schedule",
            Self::Communication => "communication",
            Self::Risk => "risk",
            Self::Procurement => "procurement",
            Self::Stakeholder => "stakeholder",
        }
    }

    /// Primary areas whose scores feed a secondary area's derivation.
    ///
    /// Primary areas drive themselves and report an empty slice.
    pub const fn drivers(self) -> &'static [KnowledgeArea] {
        match self {
            Self::Resources | Self::Costs | Self::Quality | Self::Scope => &[],
            Self::Integration => &[Self::Resources, Self::Costs, Self::Quality, Self::Scope],
            Self::Schedule | Self::Communication => &[Self::Resources],
            Self::Risk => &[Self::Costs, Self::Quality, Self::Scope],
            Self::Procurement => &[Self::Costs],
            Self::Stakeholder => &[Self::Scope],
        }
    }

    /// Static document set required when this area needs documentation.
    pub fn documents(self) -> &'static [DocumentType] {
        use DocumentType::*;
        match self {
            Self::Resources => &[ResourceManagementPlan, ResponsibilityMatrix],
            Self::Costs => &[CostManagementPlan, Budget],
            Self::Quality => &[QualityManagementPlan, QualityMetrics],
            Self::Scope => &[ScopeManagementPlan, ScopeStatement, Wbs],
            Self::Integration => &[ProjectCharter, ProjectManagementPlan],
            Self::Schedule => &[ScheduleManagementPlan, ProjectSchedule],
            Self::Communication => &[CommunicationManagementPlan],
            Self::Risk => &[RiskManagementPlan, RiskRegister],
            Self::Procurement => &[ProcurementManagementPlan, ProcurementStatementOfWork],
            Self::Stakeholder => &[StakeholderRegister, StakeholderEngagementPlan],
        }
    }
}

impl fmt::Display for KnowledgeArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for KnowledgeArea {
    type Err = ScoringError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|area| area.tag() == normalized)
            .ok_or_else(|| ScoringError::UnknownArea(value.to_string()))
    }
}

/// Documentation artifacts the engine can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    ResourceManagementPlan,
    ResponsibilityMatrix,
    CostManagementPlan,
    Budget,
    QualityManagementPlan,
    QualityMetrics,
    ScopeManagementPlan,
    ScopeStatement,
    Wbs,
    ProjectCharter,
    ProjectManagementPlan,
    ScheduleManagementPlan,
    ProjectSchedule,
    CommunicationManagementPlan,
    RiskManagementPlan,
    RiskRegister,
    ProcurementManagementPlan,
    ProcurementStatementOfWork,
    StakeholderRegister,
    StakeholderEngagementPlan,
}

impl DocumentType {
    pub const fn slug(self) -> &'static str {
        match self {
            Self::ResourceManagementPlan => "resource-management-plan",
            Self::ResponsibilityMatrix => "responsibility-matrix",
            Self::CostManagementPlan => "cost-management-plan",
            Self::Budget => "budget",
            Self::QualityManagementPlan => "quality-management-plan",
            Self::QualityMetrics => "quality-metrics",
            Self::ScopeManagementPlan => "scope-management-plan",
            Self::ScopeStatement => "scope-statement",
            Self::Wbs => "wbs",
            Self::ProjectCharter => "project-charter",
            Self::ProjectManagementPlan => "project-management-plan",
            Self::ScheduleManagementPlan => "schedule-management-plan",
            Self::ProjectSchedule => "project-schedule",
            Self::CommunicationManagementPlan => "communication-management-plan",
            Self::RiskManagementPlan => "risk-management-plan",
            Self::RiskRegister => "risk-register",
            Self::ProcurementManagementPlan => "procurement-management-plan",
            Self::ProcurementStatementOfWork => "procurement-statement-of-work",
            Self::StakeholderRegister => "stakeholder-register",
            Self::StakeholderEngagementPlan => "stakeholder-engagement-plan",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ResourceManagementPlan => "Resource Management Plan",
            Self::ResponsibilityMatrix => "Responsibility Assignment Matrix",
            Self::CostManagementPlan => "Cost Management Plan",
            Self::Budget => "Budget",
            Self::QualityManagementPlan => "Quality Management Plan",
            Self::QualityMetrics => "Quality Metrics",
            Self::ScopeManagementPlan => "Scope Management Plan",
            Self::ScopeStatement => "Scope Statement",
            Self::Wbs => "Work Breakdown Structure",
            Self::ProjectCharter => "Project Charter",
            Self::ProjectManagementPlan => "Project Management Plan",
            Self::ScheduleManagementPlan => "Schedule Management Plan",
            Self::ProjectSchedule => "Project Schedule",
            Self::CommunicationManagementPlan => "Communication Management Plan",
            Self::RiskManagementPlan => "Risk Management Plan",
            Self::RiskRegister => "Risk Register",
            Self::ProcurementManagementPlan => "Procurement Management Plan",
            Self::ProcurementStatementOfWork => "Procurement Statement of Work",
            Self::StakeholderRegister => "Stakeholder Register",
            Self::StakeholderEngagementPlan => "Stakeholder Engagement Plan",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn ordered() -> [Self; 4] {
        [Self::Critical, Self::High, Self::Medium, Self::Low]
    }

    /// Sort weight; larger sorts first.
    pub const fn weight(self) -> u8 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    pub fn from_score(score: f64) -> Self {
        if score >= 4.5 {
            Self::Critical
        } else if score >= 3.5 {
            Self::High
        } else if score >= 2.5 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Ascending cutoffs used to classify an area's complexity score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexityThresholds {
    pub minimal: f64,
    pub moderate: f64,
    pub high: f64,
    pub critical: f64,
}

impl ComplexityThresholds {
    pub const fn new(minimal: f64, moderate: f64, high: f64, critical: f64) -> Self {
        Self {
            minimal,
            moderate,
            high,
            critical,
        }
    }

    pub(crate) fn as_array(&self) -> [f64; 4] {
        [self.minimal, self.moderate, self.high, self.critical]
    }

    pub fn band(&self, score: f64) -> ComplexityBand {
        if score >= self.critical {
            ComplexityBand::Critical
        } else if score >= self.high {
            ComplexityBand::High
        } else if score >= self.moderate {
            ComplexityBand::Moderate
        } else if score >= self.minimal {
            ComplexityBand::Minimal
        } else {
            ComplexityBand::Negligible
        }
    }
}

impl Default for ComplexityThresholds {
    fn default() -> Self {
        Self::new(2.0, 2.5, 3.5, 4.5)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityBand {
    Negligible,
    Minimal,
    Moderate,
    High,
    Critical,
}

impl ComplexityBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Negligible => "Negligible",
            Self::Minimal => "Minimal",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_area_tags_case_insensitively() {
        assert_eq!(
            " Procurement ".parse::<KnowledgeArea>().expect("known tag"),
            KnowledgeArea::Procurement
        );
        match "finance".parse::<KnowledgeArea>() {
            Err(ScoringError::UnknownArea(tag)) => assert_eq!(tag, "finance"),
            other => panic!("expected unknown area error, got {other:?}"),
        }
    }

    #[test]
    fn every_area_maps_to_documents() {
        for area in KnowledgeArea::ordered() {
            assert!(!area.documents().is_empty(), "{area} has no documents");
        }
        assert!(KnowledgeArea::Costs
            .documents()
            .contains(&DocumentType::Budget));
        assert!(KnowledgeArea::Risk
            .documents()
            .contains(&DocumentType::RiskRegister));
    }

    #[test]
    fn only_secondary_areas_have_drivers() {
        for area in KnowledgeArea::primary() {
            assert!(area.drivers().is_empty());
        }
        for area in KnowledgeArea::secondary() {
            assert!(!area.drivers().is_empty());
            assert!(area.drivers().iter().all(|driver| driver.is_primary()));
        }
    }

    #[test]
    fn priority_cutoffs_follow_score() {
        assert_eq!(Priority::from_score(5.0), Priority::Critical);
        assert_eq!(Priority::from_score(4.5), Priority::Critical);
        assert_eq!(Priority::from_score(4.49), Priority::High);
        assert_eq!(Priority::from_score(3.5), Priority::High);
        assert_eq!(Priority::from_score(2.5), Priority::Medium);
        assert_eq!(Priority::from_score(2.49), Priority::Low);
    }

    #[test]
    fn document_slugs_match_serialized_tags() {
        let json = serde_json::to_string(&DocumentType::ProcurementStatementOfWork)
            .expect("serializes");
        assert_eq!(json, "\"procurement-statement-of-work\"");
        let json = serde_json::to_string(&DocumentType::Wbs).expect("serializes");
        assert_eq!(json, format!("\"{}\"", DocumentType::Wbs.slug()));
    }

    #[test]
    fn thresholds_classify_bands() {
        let thresholds = ComplexityThresholds::default();
        assert_eq!(thresholds.band(1.0), ComplexityBand::Negligible);
        assert_eq!(thresholds.band(2.0), ComplexityBand::Minimal);
        assert_eq!(thresholds.band(3.0), ComplexityBand::Moderate);
        assert_eq!(thresholds.band(4.0), ComplexityBand::High);
        assert_eq!(thresholds.band(4.8), ComplexityBand::Critical);
    }
}
