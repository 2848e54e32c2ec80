use crate::core::letters::{generate_grant_application, generate_loan_application};
use crate::domain::model::BusinessModel;
use std::fmt;
use std::io::{self, Write};

pub const PRESENTATION_HEADER: &str = "=== Business Model Presentation ===";
pub const LOAN_HEADING: &str = "=== Loan Application ===";
pub const GRANT_HEADING: &str = "=== Grant Application ===";
pub const END_MARKER: &str = "=== End of Presentation ===";

/// Display adapter that lays out a [`BusinessModel`] as the plain-text presentation.
pub struct Presentation<'a>(pub &'a BusinessModel);

fn list(f: &mut fmt::Formatter<'_>, title: &str, items: &[String]) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}:", title)?;
    for item in items {
        writeln!(f, "- {}", item)?;
    }
    Ok(())
}

fn scalar(f: &mut fmt::Formatter<'_>, title: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}: {}", title, value)
}

impl fmt::Display for Presentation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let model = self.0;

        writeln!(f, "{}", PRESENTATION_HEADER)?;
        writeln!(f, "Value Propositions:")?;
        for item in &model.value_propositions {
            writeln!(f, "- {}", item)?;
        }
        list(f, "Customer Segments", &model.customer_segments)?;
        list(f, "Channels", &model.channels)?;
        list(f, "Revenue Streams", &model.revenue_streams)?;
        list(f, "Key Activities", &model.key_activities)?;
        list(f, "Key Resources", &model.key_resources)?;
        list(f, "Key Partners", &model.key_partners)?;
        list(f, "Cost Structure", &model.cost_structure)?;
        list(f, "Customer Relationships", &model.customer_relationships)?;

        writeln!(f)?;
        writeln!(f, "Revenue Streams (Detailed):")?;
        for line in &model.revenue_streams_detailed {
            writeln!(f, "- {}: ${:.2}", line.description, line.amount)?;
        }

        scalar(f, "Target Market Size", model.target_market_size)?;
        scalar(f, "Market Growth Rate", model.market_growth_rate)?;
        list(f, "Competitive Landscape", &model.competitive_landscape)?;
        list(f, "Competitive Advantage", &model.competitive_advantage)?;
        list(f, "Marketing Strategy", &model.marketing_strategy)?;
        list(f, "Sales Strategy", &model.sales_strategy)?;
        list(f, "Team", &model.team)?;
        scalar(f, "Legal Structure", &model.legal_structure)?;
        list(f, "Regulatory Compliance", &model.regulatory_compliance)?;

        writeln!(f)?;
        writeln!(f, "Financial Projections:")?;
        for p in &model.financial_projections {
            writeln!(
                f,
                "- Year {}: Revenue ${:.2}, Expenses ${:.2}",
                p.year, p.revenue, p.expenses
            )?;
        }

        list(f, "Risk Assessment", &model.risk_assessment)?;
        scalar(f, "Exit Strategy", &model.exit_strategy)?;

        writeln!(f)?;
        writeln!(f, "Milestones:")?;
        for m in &model.milestones {
            writeln!(
                f,
                "- Timeframe: {} months, Description: {}",
                m.time_frame, m.description
            )?;
        }

        list(f, "Social Impact", &model.social_impact)?;

        if model.loan_requested {
            writeln!(f)?;
            writeln!(f, "{}", LOAN_HEADING)?;
            writeln!(f, "{}", generate_loan_application(model))?;
        }

        if model.grant_requested {
            writeln!(f)?;
            writeln!(f, "{}", GRANT_HEADING)?;
            writeln!(f, "{}", generate_grant_application(model))?;
        }

        writeln!(f)?;
        writeln!(f, "{}", END_MARKER)
    }
}

pub fn render_presentation(model: &BusinessModel) -> String {
    Presentation(model).to_string()
}

pub fn write_presentation<W: Write>(model: &BusinessModel, out: &mut W) -> io::Result<()> {
    write!(out, "{}", Presentation(model))?;
    out.flush()
}

/// Writes the presentation, and any requested application letters, to stdout.
pub fn print_business_model_and_applications(model: &BusinessModel) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_presentation(model, &mut handle)
}
