use super::domain::{KnowledgeArea, Priority};
use super::profile::{
    DocumentationRecommendation, KnowledgeAreaComplexity, PrimaryAreas, SecondaryAreas,
};

/// Build the recommendation list for every area that requires documentation.
///
/// Areas are visited primary first, then secondary, each in declaration order, and one
/// recommendation is emitted per document type. The final sort is stable, so equal priorities
/// keep that visiting order.
pub fn synthesize(
    primary: &PrimaryAreas,
    secondary: &SecondaryAreas,
) -> Vec<DocumentationRecommendation> {
    let mut recommendations: Vec<DocumentationRecommendation> = primary
        .iter()
        .chain(secondary.iter())
        .filter(|record| record.documentation_required)
        .flat_map(recommend_area)
        .collect();

    recommendations.sort_by(|left, right| right.priority.weight().cmp(&left.priority.weight()));
    recommendations
}

fn recommend_area(record: &KnowledgeAreaComplexity) -> Vec<DocumentationRecommendation> {
    let priority = Priority::from_score(record.complexity_score);
    let complexity_trigger = trigger_description(record);

    record
        .area
        .documents()
        .iter()
        .map(|document| DocumentationRecommendation {
            area: record.area,
            document_types: vec![*document],
            priority,
            reason: format!(
                "{} complexity scored {:.2} ({}); a {} is required at {} priority",
                record.area.label(),
                record.complexity_score,
                record.band.label().to_ascii_lowercase(),
                document.label(),
                priority.label().to_ascii_lowercase()
            ),
            complexity_trigger: complexity_trigger.clone(),
        })
        .collect()
}

fn trigger_description(record: &KnowledgeAreaComplexity) -> String {
    let area = record.area;
    let mut description = format!(
        "{} score {:.2} >= documentation threshold {:.2}",
        area, record.complexity_score, record.documentation_threshold
    );

    if !area.is_primary() {
        description.push_str(&format!("; derived from {}", join_areas(area.drivers())));
    }
    if !record.triggered_by.is_empty() {
        description.push_str(&format!(
            "; triggered by high-level factors in {}",
            join_areas(&record.triggered_by)
        ));
    }
    description
}

fn join_areas(areas: &[KnowledgeArea]) -> String {
    areas
        .iter()
        .map(|area| area.tag())
        .collect::<Vec<_>>()
        .join(", ")
}
