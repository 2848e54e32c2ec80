use crate::domain::model::BusinessModel;

const LOAN_BODY: &str = "To Whom It May Concern,\n\
\n\
I am writing to request a business loan to support the expansion and development of our innovative solutions. \
Our business focuses on cutting-edge technology integration, unmatched customer service, sustainability and eco-friendliness, and affordable luxury. \
We cater to tech-savvy professionals, environmental enthusiasts, luxury seekers on a budget, and small to mid-sized enterprises.\n\
\n\
Our key activities include continuous research and development, strategic marketing campaigns, customer support and engagement, and supply chain optimization. \
We have a strong brand presence and a robust supply chain, supported by our innovative tech team and extensive customer database.\n\
\n\
We are confident that with the additional financial support, we can achieve significant growth and continue to provide exceptional value to our customers.\n\
\n\
Sincerely,\n\
[Your Name]";

const GRANT_BODY: &str = "To Whom It May Concern,\n\
\n\
I am writing to apply for a grant to further our efforts in integrating cutting-edge technology, providing unmatched customer service, promoting sustainability and eco-friendliness, and offering affordable luxury. \
Our target market includes tech-savvy professionals, environmental enthusiasts, luxury seekers on a budget, and small to mid-sized enterprises.\n\
\n\
Our key activities involve continuous research and development, strategic marketing campaigns, customer support and engagement, and supply chain optimization. \
We have established strong partnerships with leading tech suppliers, marketing agencies, logistics providers, and environmental organizations.\n\
\n\
This grant will enable us to advance our initiatives and create a lasting impact on our community and the environment.\n\
\n\
Sincerely,\n\
[Your Name]";

fn letter(kind: &str, model: &BusinessModel, body: &str) -> String {
    format!(
        "{} Application for {}:\n\n{}",
        kind,
        model.value_propositions.join(", "),
        body
    )
}

/// Only the header line depends on the model.
pub fn generate_loan_application(model: &BusinessModel) -> String {
    letter("Loan", model, LOAN_BODY)
}

pub fn generate_grant_application(model: &BusinessModel) -> String {
    letter("Grant", model, GRANT_BODY)
}
