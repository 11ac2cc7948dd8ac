use super::{CatalogDocument, KnowledgeAreaRubric, LevelBounds, RubricFactor, ScoringCriteria};
use crate::complexity::attributes::Attribute;
use crate::complexity::domain::{ComplexityThresholds, KnowledgeArea};
use std::collections::BTreeMap;

use crate::complexity::domain::KnowledgeArea::{
    Communication, Integration, Procurement, Risk, Schedule, Stakeholder,
};

pub(crate) const STANDARD_VERSION: &str = "2024.1";

pub(crate) fn standard_document() -> CatalogDocument {
    CatalogDocument {
        version: STANDARD_VERSION.to_string(),
        rubrics: vec![
            resources_rubric(),
            costs_rubric(),
            quality_rubric(),
            scope_rubric(),
        ],
        secondary_thresholds: KnowledgeArea::secondary()
            .into_iter()
            .map(|area| (area, ComplexityThresholds::default()))
            .collect::<BTreeMap<_, _>>(),
        triggered_secondary_at_minimal: false,
    }
}

fn criteria(
    level: u8,
    description: &str,
    indicators: &[&str],
    examples: &[&str],
    triggers: &[KnowledgeArea],
) -> ScoringCriteria {
    ScoringCriteria {
        level,
        description: description.to_string(),
        indicators: indicators.iter().map(|item| item.to_string()).collect(),
        examples: examples.iter().map(|item| item.to_string()).collect(),
        documentation_required: f64::from(level) >= ComplexityThresholds::default().minimal,
        secondary_triggers: triggers.to_vec(),
    }
}

fn bounded(
    name: &str,
    weight: f64,
    attribute: Attribute,
    bounds: [f64; 4],
    levels: [ScoringCriteria; 5],
) -> RubricFactor {
    RubricFactor {
        name: name.to_string(),
        weight,
        attribute,
        bounds: LevelBounds::UpperBounds { bounds },
        levels: levels.into(),
    }
}

fn ordinal(
    name: &str,
    weight: f64,
    attribute: Attribute,
    levels: [ScoringCriteria; 5],
) -> RubricFactor {
    RubricFactor {
        name: name.to_string(),
        weight,
        attribute,
        bounds: LevelBounds::Ordinal,
        levels: levels.into(),
    }
}

#[rustfmt::skip]
fn resources_rubric() -> KnowledgeAreaRubric {
    KnowledgeAreaRubric {
        area: KnowledgeArea::Resources,
        thresholds: ComplexityThresholds::default(),
        factors: vec![
            bounded(
                "Team Size",
                0.30,
                Attribute::TeamSize,
                [3.0, 8.0, 15.0, 25.0],
                [
                    criteria(1, "Individual or pair effort", &["1-3 people", "no formal roles"], &["Solo analyst updating a report"], &[]),
                    criteria(2, "Small co-ordinated team", &["4-8 people", "single team lead"], &["Squad delivering a departmental tool"], &[]),
                    criteria(3, "Mid-sized team with sub-roles", &["9-15 people", "role specialisation"], &["Cross-functional product team"], &[]),
                    criteria(4, "Large team needing explicit structure", &["16-25 people", "multiple leads"], &["Two squads sharing one release"], &[Communication]),
                    criteria(5, "Program-scale workforce", &["more than 25 people", "layered management"], &["Enterprise ERP rollout team"], &[Communication, Stakeholder, Integration]),
                ],
            ),
            bounded(
                "Skill Diversity",
                0.20,
                Attribute::SkillCount,
                [2.0, 4.0, 7.0, 10.0],
                [
                    criteria(1, "Homogeneous skill set", &["one or two disciplines"], &["Spreadsheet automation by analysts"], &[]),
                    criteria(2, "Few complementary skills", &["3-4 disciplines"], &["Web form with designer and developer"], &[]),
                    criteria(3, "Multi-disciplinary team", &["5-7 disciplines", "hand-offs between specialists"], &["Mobile app with backend and QA"], &[]),
                    criteria(4, "Broad specialist mix", &["8-10 disciplines", "scarce expertise"], &["Data platform with ML and security specialists"], &[Integration]),
                    criteria(5, "Highly specialised, hard-to-source skills", &["more than 10 disciplines", "external experts"], &["Medical device with clinical and regulatory experts"], &[Integration, Procurement]),
                ],
            ),
            ordinal(
                "Resource Availability",
                0.20,
                Attribute::ResourceConstraint,
                [
                    criteria(1, "Resources fully dedicated", &["no competing commitments"], &["Dedicated project team"], &[]),
                    criteria(2, "Minor sharing with other work", &["occasional conflicts"], &["Team shared with light support duty"], &[]),
                    criteria(3, "Regular contention for people", &["part-time allocations", "planned trade-offs"], &["Staff split across two projects"], &[]),
                    criteria(4, "Tight allocation limits delivery", &["frequent reprioritisation"], &["Key engineer at 30% allocation"], &[Schedule]),
                    criteria(5, "Severely constrained capacity", &["critical roles unfilled", "borrowed staff"], &["Launch depending on contractors not yet hired"], &[Schedule, Risk]),
                ],
            ),
            bounded(
                "Geographic Distribution",
                0.15,
                Attribute::LocationCount,
                [1.0, 2.0, 4.0, 7.0],
                [
                    criteria(1, "Single location", &["co-located team"], &["One office floor"], &[]),
                    criteria(2, "Two locations", &["shared working hours"], &["Head office plus one branch"], &[]),
                    criteria(3, "Several sites", &["3-4 locations", "some time-zone offset"], &["Regional offices in one country"], &[]),
                    criteria(4, "Widely distributed", &["5-7 locations", "limited overlap"], &["Teams across two continents"], &[Communication]),
                    criteria(5, "Globally dispersed", &["more than 7 locations", "follow-the-sun"], &["Global rollout with local teams"], &[Communication, Schedule]),
                ],
            ),
            bounded(
                "External Dependencies",
                0.15,
                Attribute::ExternalDependencies,
                [0.0, 2.0, 5.0, 10.0],
                [
                    criteria(1, "Self-contained", &["no external parties"], &["Internal tooling change"], &[]),
                    criteria(2, "Few external inputs", &["1-2 dependencies"], &["Single SaaS integration"], &[]),
                    criteria(3, "Several dependencies", &["3-5 dependencies", "contracted deliverables"], &["Agency plus two vendors"], &[]),
                    criteria(4, "Heavy reliance on outside parties", &["6-10 dependencies"], &["Partner-built components on the critical path"], &[Procurement, Risk]),
                    criteria(5, "Dense dependency web", &["more than 10 dependencies", "chained suppliers"], &["Consortium delivery"], &[Procurement, Risk, Integration]),
                ],
            ),
        ],
    }
}

#[rustfmt::skip]
fn costs_rubric() -> KnowledgeAreaRubric {
    KnowledgeAreaRubric {
        area: KnowledgeArea::Costs,
        thresholds: ComplexityThresholds::default(),
        factors: vec![
            bounded(
                "Budget Size",
                0.35,
                Attribute::Budget,
                [50_000.0, 250_000.0, 1_000_000.0, 5_000_000.0],
                [
                    criteria(1, "Small discretionary spend", &["up to $50K"], &["Team tooling purchase"], &[]),
                    criteria(2, "Modest project budget", &["$50K-$250K"], &["Departmental application"], &[]),
                    criteria(3, "Significant investment", &["$250K-$1M", "steering approval"], &["Customer portal rebuild"], &[]),
                    criteria(4, "Major capital project", &["$1M-$5M", "board visibility"], &["Core system replacement"], &[Risk, Procurement]),
                    criteria(5, "Strategic investment", &["more than $5M", "multi-year funding"], &["Enterprise transformation program"], &[Risk, Procurement, Stakeholder]),
                ],
            ),
            bounded(
                "Funding Complexity",
                0.25,
                Attribute::FundingSources,
                [1.0, 2.0, 3.0, 5.0],
                [
                    criteria(1, "Single funding source", &["one cost centre"], &["Operational budget line"], &[]),
                    criteria(2, "Two funding sources", &["shared cost split"], &["IT and business co-funding"], &[]),
                    criteria(3, "Three funding sources", &["allocation rules"], &["Three departments sharing cost"], &[]),
                    criteria(4, "Multiple funders", &["4-5 sources", "separate approvals"], &["Grant plus internal capital"], &[Stakeholder]),
                    criteria(5, "Complex funding structure", &["more than 5 sources", "conditional tranches"], &["Public-private partnership"], &[Stakeholder, Communication]),
                ],
            ),
            ordinal(
                "Cost Sensitivity",
                0.20,
                Attribute::CostSensitivity,
                [
                    criteria(1, "Flexible budget", &["overruns tolerated"], &["Innovation sandbox"], &[]),
                    criteria(2, "Some tolerance", &["minor variance acceptable"], &["Internal improvement"], &[]),
                    criteria(3, "Budget closely watched", &["variance reported monthly"], &["Fixed-price client engagement"], &[]),
                    criteria(4, "Little room for variance", &["contingency small"], &["Cost-capped public contract"], &[Risk]),
                    criteria(5, "No tolerance for overrun", &["hard cap", "penalties"], &["Fixed grant with clawback"], &[Risk]),
                ],
            ),
            ordinal(
                "Financial Reporting",
                0.20,
                Attribute::FinancialReporting,
                [
                    criteria(1, "No formal reporting", &["informal tracking"], &["Team-level spend"], &[]),
                    criteria(2, "Basic reporting", &["quarterly summary"], &["Cost centre report"], &[]),
                    criteria(3, "Standard reporting", &["monthly actuals vs plan"], &["PMO financial dashboard"], &[]),
                    criteria(4, "Enhanced reporting", &["earned value", "audit trail"], &["Capital project reporting"], &[Communication]),
                    criteria(5, "Rigorous external reporting", &["statutory or funder audits"], &["Grant compliance reporting"], &[Communication, Stakeholder]),
                ],
            ),
        ],
    }
}

#[rustfmt::skip]
fn quality_rubric() -> KnowledgeAreaRubric {
    KnowledgeAreaRubric {
        area: KnowledgeArea::Quality,
        thresholds: ComplexityThresholds::default(),
        factors: vec![
            bounded(
                "Regulatory Requirements",
                0.30,
                Attribute::RegulatoryRequirements,
                [0.0, 1.0, 2.0, 4.0],
                [
                    criteria(1, "Unregulated", &["no regulatory framework"], &["Internal reporting tool"], &[]),
                    criteria(2, "Single light framework", &["one framework"], &["GDPR-aware marketing site"], &[]),
                    criteria(3, "Two frameworks", &["evidence of compliance required"], &["Payments feature under PCI and GDPR"], &[]),
                    criteria(4, "Several frameworks", &["3-4 frameworks", "formal audits"], &["Health data platform"], &[Risk, Stakeholder]),
                    criteria(5, "Heavily regulated", &["more than 4 frameworks", "regulator sign-off"], &["Banking core system"], &[Risk, Stakeholder, Procurement]),
                ],
            ),
            bounded(
                "Quality Standards",
                0.20,
                Attribute::QualityStandards,
                [0.0, 1.0, 2.0, 4.0],
                [
                    criteria(1, "No formal standard", &["team conventions only"], &["Prototype"], &[]),
                    criteria(2, "One standard", &["single style or process standard"], &["Accessibility guideline"], &[]),
                    criteria(3, "Two standards", &["certification evidence"], &["ISO 9001 plus WCAG"], &[]),
                    criteria(4, "Several standards", &["3-4 standards"], &["Safety and security certifications"], &[Integration]),
                    criteria(5, "Extensive standards regime", &["more than 4 standards"], &["Aerospace software"], &[Integration, Risk]),
                ],
            ),
            ordinal(
                "Precision Requirements",
                0.20,
                Attribute::PrecisionRequirements,
                [
                    criteria(1, "Approximate results acceptable", &["best effort"], &["Exploratory analysis"], &[]),
                    criteria(2, "Basic accuracy", &["spot checks"], &["Internal dashboard"], &[]),
                    criteria(3, "Defined accuracy targets", &["documented tolerances"], &["Billing calculations"], &[]),
                    criteria(4, "High precision", &["tight tolerances", "reconciliation"], &["Financial settlement"], &[Risk]),
                    criteria(5, "Zero-defect tolerance", &["safety or legal impact"], &["Dosage calculation"], &[Risk, Schedule]),
                ],
            ),
            ordinal(
                "Testing Requirements",
                0.15,
                Attribute::TestingRequirements,
                [
                    criteria(1, "Ad-hoc testing", &["developer checks"], &["Internal script"], &[]),
                    criteria(2, "Basic testing", &["smoke tests"], &["Small web app"], &[]),
                    criteria(3, "Structured testing", &["test plan", "regression suite"], &["Customer-facing release"], &[]),
                    criteria(4, "Comprehensive testing", &["performance and security testing"], &["Payment gateway"], &[Schedule]),
                    criteria(5, "Certification-grade testing", &["independent verification"], &["Regulated medical software"], &[Schedule, Risk]),
                ],
            ),
            ordinal(
                "Quality Assurance Process",
                0.15,
                Attribute::QualityAssurance,
                [
                    criteria(1, "No QA process", &["no reviews"], &["Personal tooling"], &[]),
                    criteria(2, "Peer review", &["informal sign-off"], &["Team project"], &[]),
                    criteria(3, "Defined QA process", &["quality gates"], &["PMO-governed project"], &[]),
                    criteria(4, "Independent QA", &["separate QA function"], &["Outsourced delivery with QA oversight"], &[Integration]),
                    criteria(5, "Audited QA system", &["external audits", "quality records"], &["Regulated manufacturing system"], &[Integration, Communication]),
                ],
            ),
        ],
    }
}

#[rustfmt::skip]
fn scope_rubric() -> KnowledgeAreaRubric {
    KnowledgeAreaRubric {
        area: KnowledgeArea::Scope,
        thresholds: ComplexityThresholds::default(),
        factors: vec![
            bounded(
                "Deliverable Count",
                0.30,
                Attribute::Deliverables,
                [1.0, 3.0, 6.0, 10.0],
                [
                    criteria(1, "Single deliverable", &["one output"], &["One report"], &[]),
                    criteria(2, "Few deliverables", &["2-3 outputs"], &["App plus user guide"], &[]),
                    criteria(3, "Several deliverables", &["4-6 outputs"], &["Product release with training"], &[]),
                    criteria(4, "Many deliverables", &["7-10 outputs", "interdependent"], &["Multi-module platform"], &[Schedule, Integration]),
                    criteria(5, "Extensive deliverable set", &["more than 10 outputs"], &["Program with several product lines"], &[Schedule, Integration, Procurement]),
                ],
            ),
            ordinal(
                "Scope Definition Clarity",
                0.20,
                Attribute::ScopeDefinitionClarity,
                [
                    criteria(1, "Scope fully defined", &["signed-off requirements"], &["Like-for-like upgrade"], &[]),
                    criteria(2, "Scope mostly clear", &["minor open points"], &["Enhancement with known backlog"], &[]),
                    criteria(3, "Scope partially defined", &["key requirements pending"], &["New feature in discovery"], &[]),
                    criteria(4, "Scope vague", &["conflicting expectations"], &["Strategic initiative without brief"], &[Risk, Stakeholder]),
                    criteria(5, "Scope undefined", &["problem statement only"], &["Innovation program"], &[Risk, Stakeholder, Communication]),
                ],
            ),
            bounded(
                "Inclusion and Exclusion Criteria",
                0.15,
                Attribute::ScopeCriteria,
                [2.0, 5.0, 10.0, 20.0],
                [
                    criteria(1, "Trivial boundaries", &["up to 2 criteria"], &["Single-purpose tool"], &[]),
                    criteria(2, "Simple boundaries", &["3-5 criteria"], &["Departmental project"], &[]),
                    criteria(3, "Moderate boundary rules", &["6-10 criteria"], &["Multi-team product"], &[]),
                    criteria(4, "Many boundary rules", &["11-20 criteria"], &["Shared platform"], &[Stakeholder]),
                    criteria(5, "Intricate boundary rules", &["more than 20 criteria"], &["Enterprise program"], &[Stakeholder, Communication]),
                ],
            ),
            ordinal(
                "Scope Boundaries",
                0.15,
                Attribute::ScopeBoundaryClarity,
                [
                    criteria(1, "Clear boundaries", &["interfaces agreed"], &["Isolated system"], &[]),
                    criteria(2, "Mostly clear boundaries", &["few grey areas"], &["Bounded integration"], &[]),
                    criteria(3, "Partially clear boundaries", &["overlap with other initiatives"], &["Shared data migration"], &[]),
                    criteria(4, "Blurred boundaries", &["ownership disputes"], &["Joint venture deliverable"], &[Integration]),
                    criteria(5, "Undefined boundaries", &["no agreed edges"], &["Organisation-wide change"], &[Integration, Risk]),
                ],
            ),
            ordinal(
                "Change Management",
                0.20,
                Attribute::ChangeManagement,
                [
                    criteria(1, "No change control", &["changes absorbed informally"], &["Internal prototype"], &[]),
                    criteria(2, "Lightweight change control", &["backlog grooming"], &["Agile team product"], &[]),
                    criteria(3, "Formal change requests", &["impact assessment"], &["Contracted delivery"], &[]),
                    criteria(4, "Change board", &["multi-party approval"], &["Program with several sponsors"], &[Integration, Communication]),
                    criteria(5, "Rigorous change governance", &["contractual change orders", "audit trail"], &["Government contract"], &[Integration, Communication, Stakeholder]),
                ],
            ),
        ],
    }
}
