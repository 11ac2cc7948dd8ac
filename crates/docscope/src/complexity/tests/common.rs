use crate::complexity::attributes::{
    Clarity, CostSensitivity, ProjectAttributes, RequirementLevel, ResourceConstraint,
    TimeConstraint,
};
use crate::complexity::catalog::RubricCatalog;
use crate::complexity::domain::{ComplexityThresholds, KnowledgeArea};
use crate::complexity::profile::{KnowledgeAreaComplexity, PrimaryAreas, SecondaryAreas};
use crate::complexity::ComplexityEngine;
use std::sync::Arc;

pub(crate) fn standard_catalog() -> RubricCatalog {
    RubricCatalog::standard().expect("standard catalog is valid")
}

pub(crate) fn engine() -> ComplexityEngine {
    ComplexityEngine::new(Arc::new(standard_catalog()))
}

pub(crate) fn area_record(
    area: KnowledgeArea,
    score: f64,
    documentation_required: bool,
) -> KnowledgeAreaComplexity {
    let thresholds = ComplexityThresholds::default();
    KnowledgeAreaComplexity {
        area,
        complexity_score: score,
        band: thresholds.band(score),
        factors: Vec::new(),
        documentation_required,
        documentation_threshold: if area.is_primary() {
            thresholds.minimal
        } else {
            thresholds.moderate
        },
        triggered_areas: Vec::new(),
        triggered_by: Vec::new(),
    }
}

pub(crate) fn primary_with_scores(
    resources: f64,
    costs: f64,
    quality: f64,
    scope: f64,
) -> PrimaryAreas {
    let minimal = ComplexityThresholds::default().minimal;
    PrimaryAreas {
        resources: area_record(KnowledgeArea::Resources, resources, resources >= minimal),
        costs: area_record(KnowledgeArea::Costs, costs, costs >= minimal),
        quality: area_record(KnowledgeArea::Quality, quality, quality >= minimal),
        scope: area_record(KnowledgeArea::Scope, scope, scope >= minimal),
    }
}

/// Scores in canonical secondary order.
pub(crate) fn secondary_with_scores(scores: [f64; 6]) -> SecondaryAreas {
    let moderate = ComplexityThresholds::default().moderate;
    let [integration, schedule, communication, risk, procurement, stakeholder] = scores;
    SecondaryAreas {
        integration: area_record(KnowledgeArea::Integration, integration, integration >= moderate),
        schedule: area_record(KnowledgeArea::Schedule, schedule, schedule >= moderate),
        communication: area_record(
            KnowledgeArea::Communication,
            communication,
            communication >= moderate,
        ),
        risk: area_record(KnowledgeArea::Risk, risk, risk >= moderate),
        procurement: area_record(KnowledgeArea::Procurement, procurement, procurement >= moderate),
        stakeholder: area_record(KnowledgeArea::Stakeholder, stakeholder, stakeholder >= moderate),
    }
}

/// Large regulated program: 30 people, $6M, 3 regulatory frameworks, 12 deliverables.
pub(crate) fn demanding_project() -> ProjectAttributes {
    ProjectAttributes {
        project_id: Some("prj-erp-rollout".to_string()),
        project_name: Some("ERP rollout".to_string()),
        team_size: Some(30),
        skill_count: Some(12),
        resource_constraint: Some(ResourceConstraint::Severe),
        location_count: Some(8),
        external_dependency_count: Some(11),
        budget: Some(6_000_000.0),
        funding_source_count: Some(6),
        cost_sensitivity: Some(CostSensitivity::High),
        financial_reporting: Some(RequirementLevel::Rigorous),
        regulatory_requirement_count: Some(3),
        quality_standard_count: Some(5),
        precision_requirement: Some(RequirementLevel::Rigorous),
        testing_requirement: Some(RequirementLevel::Rigorous),
        quality_assurance: Some(RequirementLevel::Rigorous),
        deliverable_count: Some(12),
        scope_definition: Some(Clarity::Vague),
        inclusion_criteria_count: Some(15),
        exclusion_criteria_count: Some(10),
        scope_boundaries: Some(Clarity::Vague),
        change_management: Some(RequirementLevel::Rigorous),
        time_constraint: Some(TimeConstraint::Critical),
        stakeholder_count: Some(14),
        stakeholder_types: ["sponsor", "regulator", "vendor", "end user", "auditor", "union"]
            .iter()
            .map(|kind| kind.to_string())
            .collect(),
        vendor_count: Some(6),
    }
}

/// Two-person internal effort with a $10K budget and a single deliverable.
pub(crate) fn small_project() -> ProjectAttributes {
    ProjectAttributes {
        project_id: Some("prj-report-refresh".to_string()),
        team_size: Some(2),
        budget: Some(10_000.0),
        regulatory_requirement_count: Some(0),
        deliverable_count: Some(1),
        ..ProjectAttributes::default()
    }
}
