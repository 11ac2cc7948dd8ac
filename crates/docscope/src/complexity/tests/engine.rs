use super::common::*;
use crate::complexity::attributes::ProjectAttributes;
use crate::complexity::domain::KnowledgeArea;
use crate::complexity::scoring::PrimaryWeights;
use crate::complexity::{ComplexityEngine, ComplexityFactor, ScoringError};
use std::sync::Arc;

#[test]
fn scores_primary_area_by_tag() {
    let engine = engine();
    let record = engine
        .score_area_by_tag("Costs", &demanding_project())
        .expect("costs is a known primary area");

    assert_eq!(record.area, KnowledgeArea::Costs);
    assert!((record.complexity_score - 5.0).abs() < 1e-9);
}

#[test]
fn unknown_area_tag_fails_fast() {
    let engine = engine();
    match engine.score_area_by_tag("marketing", &ProjectAttributes::default()) {
        Err(ScoringError::UnknownArea(tag)) => assert_eq!(tag, "marketing"),
        other => panic!("expected unknown area error, got {other:?}"),
    }
}

#[test]
fn secondary_area_cannot_be_scored_directly() {
    let engine = engine();
    match engine.score_area(KnowledgeArea::Risk, &demanding_project()) {
        Err(ScoringError::NoRubric(area)) => assert_eq!(area, KnowledgeArea::Risk),
        other => panic!("expected missing rubric error, got {other:?}"),
    }
}

#[test]
fn profile_carries_identifiers_and_catalog_version() {
    let engine = engine();
    let profile = engine.analyze(&demanding_project()).expect("profile");

    assert_eq!(profile.project_id, "prj-erp-rollout");
    assert_eq!(profile.project_name.as_deref(), Some("ERP rollout"));
    assert_eq!(profile.catalog_version, engine.catalog().version());
}

#[test]
fn blank_project_id_falls_back_to_placeholder() {
    let attributes = ProjectAttributes {
        project_id: Some("   ".to_string()),
        ..ProjectAttributes::default()
    };
    let profile = engine().analyze(&attributes).expect("profile");
    assert_eq!(profile.project_id, "unidentified-project");
}

#[test]
fn injected_weights_change_the_overall_score() {
    let catalog = Arc::new(standard_catalog());
    let attributes = ProjectAttributes {
        team_size: Some(30),
        skill_count: Some(12),
        ..ProjectAttributes::default()
    };

    let balanced = ComplexityEngine::new(catalog.clone())
        .analyze(&attributes)
        .expect("profile");
    let resources_only = ComplexityEngine::with_weights(
        catalog,
        PrimaryWeights::new(1.0, 0.0, 0.0, 0.0).expect("valid weights"),
    )
    .analyze(&attributes)
    .expect("profile");

    assert!(
        (resources_only.overall_complexity - resources_only.primary.resources.complexity_score)
            .abs()
            < 1e-9
    );
    assert!(resources_only.overall_complexity > balanced.overall_complexity);
}

#[test]
fn batch_preserves_input_order() {
    let engine = engine();
    let projects = vec![small_project(), demanding_project(), small_project()];

    let profiles: Vec<_> = engine
        .analyze_batch(&projects)
        .into_iter()
        .map(|result| result.expect("profile"))
        .collect();

    assert_eq!(profiles.len(), 3);
    assert_eq!(profiles[0].project_id, "prj-report-refresh");
    assert_eq!(profiles[1].project_id, "prj-erp-rollout");
    assert_eq!(profiles[2], profiles[0]);
    assert_eq!(
        profiles[1],
        engine.analyze(&demanding_project()).expect("profile")
    );
}

#[test]
fn primary_triggers_flow_into_secondary_records() {
    let profile = engine().analyze(&demanding_project()).expect("profile");

    assert!(profile
        .primary
        .resources
        .triggered_areas
        .contains(&KnowledgeArea::Procurement));
    assert!(profile
        .secondary
        .procurement
        .triggered_by
        .contains(&KnowledgeArea::Resources));
    for record in profile.primary.iter() {
        assert!(record.triggered_by.is_empty());
    }
}

#[test]
fn malformed_attribute_only_defaults_its_factor() {
    let attributes: ProjectAttributes =
        serde_json::from_str(r#"{ "team_size": -3, "budget": 6000000 }"#)
            .expect("project decodes despite a bad team size");

    let profile = engine().analyze(&attributes).expect("profile");

    let level = |factors: &[ComplexityFactor], name: &str| {
        factors
            .iter()
            .find(|factor| factor.name == name)
            .map(|factor| factor.score)
    };
    assert_eq!(level(&profile.primary.resources.factors, "Team Size"), Some(1.0));
    assert_eq!(level(&profile.primary.costs.factors, "Budget Size"), Some(5.0));
}
