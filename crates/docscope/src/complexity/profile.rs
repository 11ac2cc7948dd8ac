use super::domain::{ComplexityBand, DocumentType, KnowledgeArea, Priority};
use serde::{Deserialize, Serialize};

/// Resolved contribution of one factor (or one driving primary area) to an area score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityFactor {
    pub name: String,
    pub weight: f64,
    pub score: f64,
    pub description: String,
}

/// Complexity of one knowledge area for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeAreaComplexity {
    pub area: KnowledgeArea,
    pub complexity_score: f64,
    pub band: ComplexityBand,
    pub factors: Vec<ComplexityFactor>,
    pub documentation_required: bool,
    /// Cutoff the score was compared against to decide `documentation_required`.
    pub documentation_threshold: f64,
    /// Secondary areas triggered by high-level factors of this (primary) area.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggered_areas: Vec<KnowledgeArea>,
    /// Primary areas whose high-level factors triggered this (secondary) area.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggered_by: Vec<KnowledgeArea>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryAreas {
    pub resources: KnowledgeAreaComplexity,
    pub costs: KnowledgeAreaComplexity,
    pub quality: KnowledgeAreaComplexity,
    pub scope: KnowledgeAreaComplexity,
}

impl PrimaryAreas {
    /// Records in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &KnowledgeAreaComplexity> {
        [&self.resources, &self.costs, &self.quality, &self.scope].into_iter()
    }

    pub fn get(&self, area: KnowledgeArea) -> Option<&KnowledgeAreaComplexity> {
        match area {
            KnowledgeArea::Resources => Some(&self.resources),
            KnowledgeArea::Costs => Some(&self.costs),
            KnowledgeArea::Quality => Some(&self.quality),
            KnowledgeArea::Scope => Some(&self.scope),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryAreas {
    pub integration: KnowledgeAreaComplexity,
    pub schedule: KnowledgeAreaComplexity,
    pub communication: KnowledgeAreaComplexity,
    pub risk: KnowledgeAreaComplexity,
    pub procurement: KnowledgeAreaComplexity,
    pub stakeholder: KnowledgeAreaComplexity,
}

impl SecondaryAreas {
    /// Records in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &KnowledgeAreaComplexity> {
        [
            &self.integration,
            &self.schedule,
            &self.communication,
            &self.risk,
            &self.procurement,
            &self.stakeholder,
        ]
        .into_iter()
    }

    pub fn get(&self, area: KnowledgeArea) -> Option<&KnowledgeAreaComplexity> {
        match area {
            KnowledgeArea::Integration => Some(&self.integration),
            KnowledgeArea::Schedule => Some(&self.schedule),
            KnowledgeArea::Communication => Some(&self.communication),
            KnowledgeArea::Risk => Some(&self.risk),
            KnowledgeArea::Procurement => Some(&self.procurement),
            KnowledgeArea::Stakeholder => Some(&self.stakeholder),
            _ => None,
        }
    }
}

/// One recommended artifact and why it is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentationRecommendation {
    pub area: KnowledgeArea,
    pub document_types: Vec<DocumentType>,
    pub priority: Priority,
    pub reason: String,
    pub complexity_trigger: String,
}

/// Complete analysis result for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectComplexityProfile {
    pub project_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    pub catalog_version: String,
    pub primary: PrimaryAreas,
    pub secondary: SecondaryAreas,
    pub overall_complexity: f64,
    pub recommendations: Vec<DocumentationRecommendation>,
}

impl ProjectComplexityProfile {
    /// All ten area records, primary first, in declaration order.
    pub fn areas(&self) -> impl Iterator<Item = &KnowledgeAreaComplexity> {
        self.primary.iter().chain(self.secondary.iter())
    }

    pub fn area(&self, area: KnowledgeArea) -> &KnowledgeAreaComplexity {
        match area {
            KnowledgeArea::Resources => &self.primary.resources,
            KnowledgeArea::Costs => &self.primary.costs,
            KnowledgeArea::Quality => &self.primary.quality,
            KnowledgeArea::Scope => &self.primary.scope,
            KnowledgeArea::Integration => &self.secondary.integration,
            KnowledgeArea::Schedule => &self.secondary.schedule,
            KnowledgeArea::Communication => &self.secondary.communication,
            KnowledgeArea::Risk => &self.secondary.risk,
            KnowledgeArea::Procurement => &self.secondary.procurement,
            KnowledgeArea::Stakeholder => &self.secondary.stakeholder,
        }
    }

    /// Distinct recommended documents in recommendation order.
    pub fn required_documents(&self) -> Vec<DocumentType> {
        let mut documents = Vec::new();
        for recommendation in &self.recommendations {
            for document in &recommendation.document_types {
                if !documents.contains(document) {
                    documents.push(*document);
                }
            }
        }
        documents
    }

    pub fn recommends(&self, document: DocumentType) -> bool {
        self.recommendations
            .iter()
            .any(|recommendation| recommendation.document_types.contains(&document))
    }

    pub fn priority_of(&self, document: DocumentType) -> Option<Priority> {
        self.recommendations
            .iter()
            .find(|recommendation| recommendation.document_types.contains(&document))
            .map(|recommendation| recommendation.priority)
    }
}
