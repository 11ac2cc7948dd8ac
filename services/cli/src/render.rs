use chrono::NaiveDate;
use docscope::complexity::{PrimaryWeights, Priority, ProjectComplexityProfile, ScoringError};

pub(crate) fn render_profile(
    profile: &ProjectComplexityProfile,
    weights: &PrimaryWeights,
    as_of: NaiveDate,
) {
    let summary = profile.summary(weights);

    println!("Documentation complexity report");
    match &profile.project_name {
        Some(name) => println!("Project: {} ({})", name, profile.project_id),
        None => println!("Project: {}", profile.project_id),
    }
    println!(
        "Evaluated {} against rubric catalog {}",
        as_of, profile.catalog_version
    );
    println!(
        "Overall complexity: {:.2} (highest area: {})",
        summary.overall_complexity,
        summary.highest_area.label()
    );

    println!("\nKnowledge areas");
    for entry in &summary.areas {
        let marker = if entry.documentation_required {
            "documentation required"
        } else {
            "no documentation required"
        };
        println!(
            "- {}{}: {:.2} [{}] weight {:.2}, {}",
            entry.area_label,
            if entry.primary { "" } else { " (derived)" },
            entry.score,
            entry.band_label,
            entry.reporting_weight,
            marker
        );
    }

    for record in profile.primary.iter() {
        println!("\n{} factors", record.area.label());
        for factor in &record.factors {
            println!(
                "  - {} (weight {:.2}): level {:.0}. {}",
                factor.name, factor.weight, factor.score, factor.description
            );
        }
        if !record.triggered_areas.is_empty() {
            let triggered: Vec<&str> = record
                .triggered_areas
                .iter()
                .map(|area| area.label())
                .collect();
            println!("  Triggers: {}", triggered.join(", "));
        }
    }

    if profile.recommendations.is_empty() {
        println!("\nNo documentation recommended.");
        return;
    }

    println!("\nRecommended documents");
    for recommendation in &profile.recommendations {
        for document in &recommendation.document_types {
            println!(
                "- [{}] {} ({})",
                recommendation.priority.label(),
                document.label(),
                recommendation.area.label()
            );
        }
        println!("    {}", recommendation.reason);
        println!("    Trigger: {}", recommendation.complexity_trigger);
    }

    let counts: Vec<String> = summary
        .priority_counts
        .iter()
        .filter(|entry| entry.count > 0)
        .map(|entry| format!("{} {}", entry.count, entry.priority_label.to_ascii_lowercase()))
        .collect();
    println!("\nTotals: {}", counts.join(" | "));
}

pub(crate) fn render_batch(results: &[Result<ProjectComplexityProfile, ScoringError>]) {
    for (index, result) in results.iter().enumerate() {
        match result {
            Ok(profile) => {
                let critical = profile
                    .recommendations
                    .iter()
                    .filter(|recommendation| recommendation.priority == Priority::Critical)
                    .count();
                println!(
                    "{}: overall {:.2} | {} documents ({} critical)",
                    profile.project_id,
                    profile.overall_complexity,
                    profile.recommendations.len(),
                    critical
                );
            }
            Err(err) => println!("row {}: scoring failed: {}", index + 1, err),
        }
    }
}
