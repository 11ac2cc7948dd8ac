use chrono::NaiveDate;
use docscope::complexity::{ComplexityEngine, RubricCatalog};
use docscope::config::ScoringConfig;
use docscope::error::AppError;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Resolve the catalog: an explicit path wins over the configured one, else the built-in set.
pub(crate) fn load_catalog(
    explicit: Option<&Path>,
    config: &ScoringConfig,
) -> Result<RubricCatalog, AppError> {
    match explicit.or(config.rubric_path.as_deref()) {
        Some(path) => {
            info!(path = %path.display(), "loading rubric catalog");
            let reader = BufReader::new(File::open(path)?);
            Ok(RubricCatalog::from_reader(reader)?)
        }
        None => Ok(RubricCatalog::standard()?),
    }
}

pub(crate) fn build_engine(
    explicit: Option<&Path>,
    config: &ScoringConfig,
) -> Result<ComplexityEngine, AppError> {
    let catalog = load_catalog(explicit, config)?;
    Ok(ComplexityEngine::with_weights(
        Arc::new(catalog),
        config.weights,
    ))
}

pub(crate) fn export_catalog(output: Option<&Path>) -> Result<(), AppError> {
    let catalog = RubricCatalog::standard()?;
    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            catalog.to_writer_pretty(&mut writer)?;
            writer.flush()?;
            info!(path = %path.display(), version = catalog.version(), "rubric catalog exported");
        }
        None => {
            let mut stdout = io::stdout().lock();
            catalog.to_writer_pretty(&mut stdout)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use docscope::complexity::PrimaryWeights;
    use std::path::PathBuf;

    fn scoring_config(rubric_path: Option<PathBuf>) -> ScoringConfig {
        ScoringConfig {
            weights: PrimaryWeights::default(),
            rubric_path,
        }
    }

    #[test]
    fn parses_iso_dates() {
        let date = parse_date(" 2025-03-14 ").expect("valid date");
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid"));
        assert!(parse_date("14/03/2025").is_err());
    }

    #[test]
    fn falls_back_to_standard_catalog() {
        let catalog = load_catalog(None, &scoring_config(None)).expect("standard catalog");
        assert_eq!(
            catalog,
            RubricCatalog::standard().expect("standard catalog")
        );
    }

    #[test]
    fn explicit_path_wins_over_configured_path() {
        let exported = std::env::temp_dir().join(format!(
            "docscope-rubrics-{}.json",
            std::process::id()
        ));
        export_catalog(Some(&exported)).expect("export catalog");

        let config = scoring_config(Some(PathBuf::from("/nonexistent/rubrics.json")));
        let catalog = load_catalog(Some(&exported), &config).expect("explicit catalog loads");
        assert_eq!(catalog.version(), RubricCatalog::standard().expect("standard").version());

        let err = load_catalog(None, &config).expect_err("configured path is missing");
        assert!(matches!(err, AppError::Io(_)));

        std::fs::remove_file(exported).ok();
    }
}
