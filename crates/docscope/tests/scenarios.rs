//! End-to-end scoring scenarios exercised through the public engine facade.
//!
//! Each scenario builds a project the way an analyst would submit it and checks the resulting
//! profile without reaching into the scoring internals.

mod common {
    use docscope::complexity::{
        Clarity, ComplexityEngine, CostSensitivity, ProjectAttributes, RequirementLevel,
        ResourceConstraint, RubricCatalog, TimeConstraint,
    };
    use std::sync::Arc;

    pub(super) fn engine() -> ComplexityEngine {
        let catalog = RubricCatalog::standard().expect("standard catalog is valid");
        ComplexityEngine::new(Arc::new(catalog))
    }

    /// Regulated multi-site rollout: team 30, $6M, 3 regulatory frameworks, 12 deliverables.
    pub(super) fn regulated_rollout() -> ProjectAttributes {
        ProjectAttributes {
            project_id: Some("prj-clinical-platform".to_string()),
            project_name: Some("Clinical platform rollout".to_string()),
            team_size: Some(30),
            skill_count: Some(9),
            resource_constraint: Some(ResourceConstraint::Tight),
            location_count: Some(5),
            external_dependency_count: Some(8),
            budget: Some(6_000_000.0),
            funding_source_count: Some(4),
            cost_sensitivity: Some(CostSensitivity::High),
            financial_reporting: Some(RequirementLevel::Enhanced),
            regulatory_requirement_count: Some(3),
            quality_standard_count: Some(3),
            precision_requirement: Some(RequirementLevel::Rigorous),
            testing_requirement: Some(RequirementLevel::Rigorous),
            quality_assurance: Some(RequirementLevel::Enhanced),
            deliverable_count: Some(12),
            scope_definition: Some(Clarity::Partial),
            inclusion_criteria_count: Some(8),
            exclusion_criteria_count: Some(6),
            scope_boundaries: Some(Clarity::Vague),
            change_management: Some(RequirementLevel::Enhanced),
            time_constraint: Some(TimeConstraint::Tight),
            stakeholder_count: Some(12),
            stakeholder_types: vec![
                "sponsor".to_string(),
                "regulator".to_string(),
                "clinician".to_string(),
                "patient".to_string(),
            ],
            vendor_count: Some(4),
        }
    }

    /// Two-person internal report refresh with a $10K budget.
    pub(super) fn report_refresh() -> ProjectAttributes {
        ProjectAttributes {
            project_id: Some("prj-report-refresh".to_string()),
            team_size: Some(2),
            budget: Some(10_000.0),
            regulatory_requirement_count: Some(0),
            deliverable_count: Some(1),
            ..ProjectAttributes::default()
        }
    }
}

use common::{engine, regulated_rollout, report_refresh};
use docscope::complexity::{
    DocumentType, KnowledgeArea, KnowledgeAreaComplexity, Priority, ProjectAttributes,
};

fn factor_level(record: &KnowledgeAreaComplexity, name: &str) -> f64 {
    record
        .factors
        .iter()
        .find(|factor| factor.name == name)
        .map(|factor| factor.score)
        .unwrap_or_else(|| panic!("factor '{name}' missing from {}", record.area))
}

#[test]
fn regulated_rollout_is_highly_complex() {
    let profile = engine().analyze(&regulated_rollout()).expect("profile");

    assert_eq!(factor_level(&profile.primary.resources, "Team Size"), 5.0);
    assert_eq!(factor_level(&profile.primary.costs, "Budget Size"), 5.0);
    assert!(
        profile.overall_complexity > 4.0,
        "overall complexity was {}",
        profile.overall_complexity
    );
    for record in profile.primary.iter() {
        assert!(record.documentation_required, "{} should need documents", record.area);
    }
}

#[test]
fn regulated_rollout_recommends_core_and_secondary_documents() {
    let profile = engine().analyze(&regulated_rollout()).expect("profile");

    for document in [
        DocumentType::ResourceManagementPlan,
        DocumentType::CostManagementPlan,
        DocumentType::Budget,
    ] {
        assert!(profile.recommends(document), "{document} not recommended");
    }

    for document in [
        DocumentType::ProcurementManagementPlan,
        DocumentType::RiskManagementPlan,
        DocumentType::RiskRegister,
    ] {
        let priority = profile
            .priority_of(document)
            .unwrap_or_else(|| panic!("{document} not recommended"));
        assert!(
            matches!(priority, Priority::High | Priority::Critical),
            "{document} recommended at {priority:?}"
        );
    }
}

#[test]
fn report_refresh_needs_no_documentation() {
    let profile = engine().analyze(&report_refresh()).expect("profile");

    for record in profile.primary.iter() {
        assert_eq!(record.complexity_score, 1.0, "{} scored above 1", record.area);
        assert!(!record.documentation_required);
    }
    assert!((profile.overall_complexity - 1.0).abs() < 1e-9);
    assert!(profile.recommendations.is_empty());
}

#[test]
fn missing_budget_defaults_to_lowest_level() {
    let attributes = ProjectAttributes {
        budget: None,
        ..regulated_rollout()
    };

    let costs = engine()
        .score_area(KnowledgeArea::Costs, &attributes)
        .expect("missing budget is not an error");

    assert_eq!(factor_level(&costs, "Budget Size"), 1.0);
    let budget = costs
        .factors
        .iter()
        .find(|factor| factor.name == "Budget Size")
        .expect("budget factor");
    assert!(budget.description.contains("not provided"));
}

#[test]
fn repeated_analysis_serializes_identically() {
    let project = regulated_rollout();

    let first = serde_json::to_string(&engine().analyze(&project).expect("first profile"))
        .expect("serialize first");
    let second = serde_json::to_string(&engine().analyze(&project).expect("second profile"))
        .expect("serialize second");

    assert_eq!(first, second);
}

#[test]
fn batch_analysis_matches_single_analysis() {
    let engine = engine();
    let projects = vec![regulated_rollout(), report_refresh(), ProjectAttributes::default()];

    let batch = engine.analyze_batch(&projects);

    assert_eq!(batch.len(), projects.len());
    for (project, result) in projects.iter().zip(batch) {
        let expected = engine.analyze(project).expect("single profile");
        assert_eq!(result.expect("batch profile"), expected);
    }
}
