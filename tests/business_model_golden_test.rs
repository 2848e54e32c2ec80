use business_model_generator::domain::model::{FinancialProjection, Milestone, RevenueLine};
use business_model_generator::{
    generate_detailed_business_model, generate_grant_application, generate_loan_application,
    render_presentation, BusinessInputs, BusinessModel,
};

fn s(items: &[&str]) -> Vec<String> {
    items.iter().map(|i| i.to_string()).collect()
}

/// 獨立寫出的參考資料，用來比對產生器的輸出
fn golden(loan_requested: bool, grant_requested: bool) -> BusinessModel {
    BusinessModel {
        value_propositions: s(&[
            "Cutting-edge technology integration",
            "Unmatched customer service",
            "Sustainability and eco-friendliness",
            "Affordable luxury",
        ]),
        customer_segments: s(&[
            "Tech-savvy professionals",
            "Environmental enthusiasts",
            "Luxury seekers on a budget",
            "Small to mid-sized enterprises",
        ]),
        channels: s(&["E-commerce platform", "Mobile app", "Retail partnerships", "Direct sales team"]),
        revenue_streams: s(&[
            "Product sales",
            "Subscription-based services",
            "Premium support packages",
            "Affiliate marketing",
        ]),
        key_activities: s(&[
            "Continuous research and development",
            "Strategic marketing campaigns",
            "Customer support and engagement",
            "Supply chain optimization",
        ]),
        key_resources: s(&[
            "Innovative tech team",
            "Extensive customer database",
            "Strong brand presence",
            "Robust supply chain",
        ]),
        key_partners: s(&[
            "Leading tech suppliers",
            "Marketing agencies",
            "Logistics providers",
            "Environmental organizations",
        ]),
        cost_structure: s(&[
            "Research and development expenses",
            "Marketing and advertising costs",
            "Manufacturing and distribution expenses",
            "Operational overheads",
        ]),
        customer_relationships: s(&[
            "Dedicated account managers",
            "Loyalty programs",
            "Personalized customer engagement",
            "Community building initiatives",
        ]),
        revenue_streams_detailed: vec![
            RevenueLine { description: "Product sales".into(), amount: 1000000.0 },
            RevenueLine { description: "Subscription-based services".into(), amount: 500000.0 },
            RevenueLine { description: "Premium support packages".into(), amount: 250000.0 },
            RevenueLine { description: "Affiliate marketing".into(), amount: 150000.0 },
        ],
        loan_requested,
        grant_requested,
        target_market_size: 100000,
        market_growth_rate: 0.15,
        competitive_landscape: s(&["Company A", "Company B", "Company C"]),
        competitive_advantage: s(&[
            "Superior technology",
            "Strong brand reputation",
            "Excellent customer service",
        ]),
        marketing_strategy: s(&[
            "Social media marketing",
            "Search engine optimization (SEO)",
            "Content marketing",
        ]),
        sales_strategy: s(&["Direct sales", "Partner channels", "Online sales"]),
        team: s(&["CEO - John Doe", "CTO - Jane Smith", "Marketing Manager - Robert Jones"]),
        legal_structure: "LLC".into(),
        regulatory_compliance: s(&["Business license", "Environmental permits"]),
        financial_projections: vec![
            FinancialProjection { year: 2023, revenue: 1500000.0, expenses: 1000000.0 },
            FinancialProjection { year: 2024, revenue: 2000000.0, expenses: 1200000.0 },
        ],
        risk_assessment: s(&["Competition", "Economic downturn"]),
        exit_strategy: "Sale of the business".into(),
        milestones: vec![
            Milestone { time_frame: 6, description: "Product launch".into() },
            Milestone { time_frame: 12, description: "Achieve profitability".into() },
        ],
        social_impact: s(&["Creating jobs", "Reducing environmental impact"]),
    }
}

fn form(goal: &str, income: f64, investment: f64, grant: bool, loan: bool, months: i32) -> BusinessInputs {
    BusinessInputs {
        business_goal: goal.to_string(),
        desired_income: income,
        investment_amount: investment,
        grant_requested: grant,
        loan_requested: loan,
        time_frame: months,
    }
}

#[test]
fn test_generated_model_matches_golden_for_any_inputs() {
    let cases = [
        form("", 0.0, 0.0, false, false, 0),
        form("Expand", 50000.0, 20000.0, true, false, 6),
        form("Open café ☕", 1e9, 0.01, false, true, 12),
        // 超出步進器範圍的值照樣接受
        form("Anything", -500.0, -1.0, true, true, 400),
    ];

    for inputs in cases {
        let model = generate_detailed_business_model(&inputs);
        assert_eq!(model.loan_requested, inputs.loan_requested);
        assert_eq!(model.grant_requested, inputs.grant_requested);
        assert_eq!(model, golden(inputs.loan_requested, inputs.grant_requested));
    }
}

#[test]
fn test_expand_scenario_end_to_end() {
    let model = generate_detailed_business_model(&form("Expand", 50000.0, 20000.0, true, false, 6));

    assert_eq!(model.value_propositions.len(), 4);
    assert!(!model.loan_requested);
    assert!(model.grant_requested);

    let text = render_presentation(&model);
    assert!(text.contains("=== Grant Application ==="));
    assert!(text.contains("Grant Application for "));
    assert!(!text.contains("Loan Application"));
    assert!(text.starts_with("=== Business Model Presentation ===\n"));
    assert!(text.ends_with("=== End of Presentation ===\n"));
}

#[test]
fn test_generation_is_idempotent() {
    let inputs = form("Expand", 50000.0, 20000.0, true, true, 3);
    let first = generate_detailed_business_model(&inputs);
    let second = generate_detailed_business_model(&inputs);
    assert_eq!(first, second);
    assert_eq!(render_presentation(&first), render_presentation(&second));
}

#[test]
fn test_letter_headers_contain_joined_value_propositions() {
    let mut model = golden(true, true);
    let joined = model.value_propositions.join(", ");
    let loan = generate_loan_application(&model);
    let grant = generate_grant_application(&model);
    assert_eq!(loan.lines().next().unwrap(), format!("Loan Application for {}:", joined));
    assert_eq!(grant.lines().next().unwrap(), format!("Grant Application for {}:", joined));

    model.value_propositions = s(&["Only one"]);
    assert!(generate_loan_application(&model)
        .lines()
        .next()
        .unwrap()
        .contains("Only one"));
}

#[test]
fn test_million_renders_with_two_decimals() {
    let text = render_presentation(&golden(false, false));
    assert!(text.contains("$1000000.00"));
    assert!(!text.contains("$1000000.0,"));
}

#[test]
fn test_full_presentation_tail() {
    let text = render_presentation(&golden(false, false));
    let expected_tail = "\
Milestones:
- Timeframe: 6 months, Description: Product launch
- Timeframe: 12 months, Description: Achieve profitability

Social Impact:
- Creating jobs
- Reducing environmental impact

=== End of Presentation ===
";
    assert!(text.ends_with(expected_tail), "unexpected tail:\n{}", text);
}
