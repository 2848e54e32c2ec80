//! Business model generation.
//!
//! [`generate_detailed_business_model`] reproduces the form application's
//! behaviour: every section is fixed example content and only the two
//! funding flags are taken from the form. [`generate_input_driven_business_model`]
//! is the corrected variant where the form values shape the plan.

use crate::domain::model::{
    BusinessInputs, BusinessModel, FinancialProjection, GenerationMode, Milestone, RevenueLine,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn revenue(description: &str, amount: f64) -> RevenueLine {
    RevenueLine {
        description: description.to_string(),
        amount,
    }
}

fn projection(year: i32, revenue: f64, expenses: f64) -> FinancialProjection {
    FinancialProjection {
        year,
        revenue,
        expenses,
    }
}

fn milestone(time_frame: i32, description: &str) -> Milestone {
    Milestone {
        time_frame,
        description: description.to_string(),
    }
}

/// The example business plan every generated model is built from.
pub fn reference_business_model(loan_requested: bool, grant_requested: bool) -> BusinessModel {
    BusinessModel {
        value_propositions: strings(&[
            "Cutting-edge technology integration",
            "Unmatched customer service",
            "Sustainability and eco-friendliness",
            "Affordable luxury",
        ]),
        customer_segments: strings(&[
            "Tech-savvy professionals",
            "Environmental enthusiasts",
            "Luxury seekers on a budget",
            "Small to mid-sized enterprises",
        ]),
        channels: strings(&[
            "E-commerce platform",
            "Mobile app",
            "Retail partnerships",
            "Direct sales team",
        ]),
        revenue_streams: strings(&[
            "Product sales",
            "Subscription-based services",
            "Premium support packages",
            "Affiliate marketing",
        ]),
        key_activities: strings(&[
            "Continuous research and development",
            "Strategic marketing campaigns",
            "Customer support and engagement",
            "Supply chain optimization",
        ]),
        key_resources: strings(&[
            "Innovative tech team",
            "Extensive customer database",
            "Strong brand presence",
            "Robust supply chain",
        ]),
        key_partners: strings(&[
            "Leading tech suppliers",
            "Marketing agencies",
            "Logistics providers",
            "Environmental organizations",
        ]),
        cost_structure: strings(&[
            "Research and development expenses",
            "Marketing and advertising costs",
            "Manufacturing and distribution expenses",
            "Operational overheads",
        ]),
        customer_relationships: strings(&[
            "Dedicated account managers",
            "Loyalty programs",
            "Personalized customer engagement",
            "Community building initiatives",
        ]),
        revenue_streams_detailed: vec![
            revenue("Product sales", 1_000_000.00),
            revenue("Subscription-based services", 500_000.00),
            revenue("Premium support packages", 250_000.00),
            revenue("Affiliate marketing", 150_000.00),
        ],
        loan_requested,
        grant_requested,
        target_market_size: 100_000,
        market_growth_rate: 0.15,
        competitive_landscape: strings(&["Company A", "Company B", "Company C"]),
        competitive_advantage: strings(&[
            "Superior technology",
            "Strong brand reputation",
            "Excellent customer service",
        ]),
        marketing_strategy: strings(&[
            "Social media marketing",
            "Search engine optimization (SEO)",
            "Content marketing",
        ]),
        sales_strategy: strings(&["Direct sales", "Partner channels", "Online sales"]),
        team: strings(&[
            "CEO - John Doe",
            "CTO - Jane Smith",
            "Marketing Manager - Robert Jones",
        ]),
        legal_structure: "LLC".to_string(),
        regulatory_compliance: strings(&["Business license", "Environmental permits"]),
        financial_projections: vec![
            projection(2023, 1_500_000.00, 1_000_000.00),
            projection(2024, 2_000_000.00, 1_200_000.00),
        ],
        risk_assessment: strings(&["Competition", "Economic downturn"]),
        exit_strategy: "Sale of the business".to_string(),
        milestones: vec![
            milestone(6, "Product launch"),
            milestone(12, "Achieve profitability"),
        ],
        social_impact: strings(&["Creating jobs", "Reducing environmental impact"]),
    }
}

/// Goal, income, investment and timeframe are accepted but not read.
pub fn generate_detailed_business_model(inputs: &BusinessInputs) -> BusinessModel {
    tracing::debug!(
        goal = %inputs.business_goal,
        time_frame = inputs.time_frame,
        "Generating business model from reference plan"
    );
    reference_business_model(inputs.loan_requested, inputs.grant_requested)
}

pub fn generate_input_driven_business_model(inputs: &BusinessInputs) -> BusinessModel {
    let mut model = reference_business_model(inputs.loan_requested, inputs.grant_requested);

    let goal = inputs.business_goal.trim();
    if !goal.is_empty() {
        model.value_propositions.insert(0, goal.to_string());
    }

    let first_year = model
        .financial_projections
        .first()
        .map(|p| p.year)
        .unwrap_or(2023);
    let second_year_revenue = inputs.desired_income * (1.0 + model.market_growth_rate);
    model.financial_projections = vec![
        projection(first_year, inputs.desired_income, inputs.investment_amount),
        projection(first_year + 1, second_year_revenue, inputs.investment_amount),
    ];

    model.milestones.push(Milestone {
        time_frame: inputs.time_frame,
        description: format!("Reach desired income of ${:.2}", inputs.desired_income),
    });
    // sort_by_key 是穩定排序，同月份保留原順序
    model.milestones.sort_by_key(|m| m.time_frame);

    tracing::debug!(
        value_propositions = model.value_propositions.len(),
        milestones = model.milestones.len(),
        "Generated input-driven business model"
    );
    model
}

pub fn generate_business_model(inputs: &BusinessInputs, mode: GenerationMode) -> BusinessModel {
    match mode {
        GenerationMode::Faithful => generate_detailed_business_model(inputs),
        GenerationMode::InputDriven => generate_input_driven_business_model(inputs),
    }
}
