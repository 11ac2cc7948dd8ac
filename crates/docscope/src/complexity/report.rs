use super::domain::{ComplexityBand, DocumentType, KnowledgeArea, Priority};
use super::profile::ProjectComplexityProfile;
use super::scoring::{reporting_weight, PrimaryWeights};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AreaBreakdownEntry {
    pub area: KnowledgeArea,
    pub area_label: &'static str,
    pub primary: bool,
    pub score: f64,
    pub band: ComplexityBand,
    pub band_label: &'static str,
    pub reporting_weight: f64,
    pub documentation_required: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PriorityCount {
    pub priority: Priority,
    pub priority_label: &'static str,
    pub count: usize,
}

/// Flattened view of a profile for dashboards and text rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub project_id: String,
    pub overall_complexity: f64,
    pub highest_area: KnowledgeArea,
    pub areas: Vec<AreaBreakdownEntry>,
    pub priority_counts: Vec<PriorityCount>,
    pub documents: Vec<DocumentType>,
}

impl ProjectComplexityProfile {
    /// Summarize the profile. Pass the weights the profile was aggregated with so the breakdown
    /// agrees with `overall_complexity`.
    pub fn summary(&self, weights: &PrimaryWeights) -> ProfileSummary {
        let areas: Vec<AreaBreakdownEntry> = self
            .areas()
            .map(|record| AreaBreakdownEntry {
                area: record.area,
                area_label: record.area.label(),
                primary: record.area.is_primary(),
                score: record.complexity_score,
                band: record.band,
                band_label: record.band.label(),
                reporting_weight: reporting_weight(record.area, weights),
                documentation_required: record.documentation_required,
            })
            .collect();

        let highest_area = areas
            .iter()
            .fold(None::<&AreaBreakdownEntry>, |best, entry| match best {
                Some(best) if best.score >= entry.score => Some(best),
                _ => Some(entry),
            })
            .map(|entry| entry.area)
            .unwrap_or(KnowledgeArea::Resources);

        let priority_counts = Priority::ordered()
            .into_iter()
            .map(|priority| PriorityCount {
                priority,
                priority_label: priority.label(),
                count: self
                    .recommendations
                    .iter()
                    .filter(|recommendation| recommendation.priority == priority)
                    .count(),
            })
            .collect();

        ProfileSummary {
            project_id: self.project_id.clone(),
            overall_complexity: self.overall_complexity,
            highest_area,
            areas,
            priority_counts,
            documents: self.required_documents(),
        }
    }
}
