use crate::domain::model::{BusinessModel, ExportFormat, ReportBundle};
use crate::utils::error::{ReportError, Result};

pub const PRESENTATION_FILE: &str = "business_model.txt";
pub const JSON_FILE: &str = "business_model.json";
pub const PROJECTIONS_CSV_FILE: &str = "financial_projections.csv";
pub const REVENUE_CSV_FILE: &str = "revenue_streams.csv";

pub fn financial_projections_csv(model: &BusinessModel) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["year", "revenue", "expenses", "profit"])?;

    for p in &model.financial_projections {
        writer.write_record([
            p.year.to_string(),
            format!("{:.2}", p.revenue),
            format!("{:.2}", p.expenses),
            format!("{:.2}", p.profit()),
        ])?;
    }

    into_string(writer)
}

pub fn revenue_streams_csv(model: &BusinessModel) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["description", "amount"])?;

    for line in &model.revenue_streams_detailed {
        writer.write_record([line.description.clone(), format!("{:.2}", line.amount)])?;
    }

    into_string(writer)
}

fn into_string(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::IoError(e.into_error()))?;
    csv_text(bytes)
}

fn csv_text(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| ReportError::ExportError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

pub fn bundle_json(bundle: &ReportBundle) -> Result<String> {
    Ok(serde_json::to_string_pretty(bundle)?)
}

/// Renders every requested format into (file name, bytes) pairs.
pub fn render_artifacts(
    bundle: &ReportBundle,
    presentation: &str,
    formats: &[ExportFormat],
) -> Result<Vec<(String, Vec<u8>)>> {
    let mut artifacts = Vec::new();

    for format in formats {
        match format {
            ExportFormat::Txt => {
                artifacts.push((PRESENTATION_FILE.to_string(), presentation.as_bytes().to_vec()));
            }
            ExportFormat::Json => {
                artifacts.push((JSON_FILE.to_string(), bundle_json(bundle)?.into_bytes()));
            }
            ExportFormat::Csv => {
                artifacts.push((
                    PROJECTIONS_CSV_FILE.to_string(),
                    financial_projections_csv(&bundle.model)?.into_bytes(),
                ));
                artifacts.push((
                    REVENUE_CSV_FILE.to_string(),
                    revenue_streams_csv(&bundle.model)?.into_bytes(),
                ));
            }
        }
    }

    tracing::debug!("Rendered {} export artifacts", artifacts.len());
    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generator::reference_business_model;
    use crate::domain::model::{BusinessInputs, GenerationMode};
    use chrono::Utc;

    fn bundle() -> ReportBundle {
        ReportBundle {
            generated_at: Utc::now(),
            mode: GenerationMode::Faithful,
            inputs: BusinessInputs::default(),
            model: reference_business_model(false, true),
        }
    }

    #[test]
    fn test_financial_projections_csv() {
        let csv = financial_projections_csv(&reference_business_model(false, false)).unwrap();
        assert_eq!(
            csv,
            "year,revenue,expenses,profit\n\
             2023,1500000.00,1000000.00,500000.00\n\
             2024,2000000.00,1200000.00,800000.00\n"
        );
    }

    #[test]
    fn test_revenue_streams_csv_quotes_nothing_for_plain_text() {
        let csv = revenue_streams_csv(&reference_business_model(false, false)).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "description,amount");
        assert_eq!(lines[1], "Product sales,1000000.00");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_revenue_streams_csv_quotes_commas() {
        let mut model = reference_business_model(false, false);
        model.revenue_streams_detailed[0].description = "Sales, online".to_string();
        let csv = revenue_streams_csv(&model).unwrap();
        assert!(csv.contains("\"Sales, online\",1000000.00"));
    }

    #[test]
    fn test_invalid_utf8_csv_is_export_error() {
        let err = csv_text(vec![b'a', 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, ReportError::ExportError { .. }));
        assert_eq!(err.category(), crate::utils::error::ErrorCategory::Export);
    }

    #[test]
    fn test_bundle_json_contains_model_and_mode() {
        let json = bundle_json(&bundle()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["mode"], "faithful");
        assert_eq!(value["model"]["grant_requested"], true);
        assert_eq!(value["model"]["legal_structure"], "LLC");
        assert_eq!(value["model"]["value_propositions"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_render_artifacts_by_format() {
        let b = bundle();
        assert!(render_artifacts(&b, "text", &[]).unwrap().is_empty());

        let artifacts =
            render_artifacts(&b, "text", &[ExportFormat::Txt, ExportFormat::Csv]).unwrap();
        let names: Vec<&str> = artifacts.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec![PRESENTATION_FILE, PROJECTIONS_CSV_FILE, REVENUE_CSV_FILE]);
        assert_eq!(artifacts[0].1, b"text".to_vec());
    }
}
