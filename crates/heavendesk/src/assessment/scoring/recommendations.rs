use super::super::catalog::Section;
use super::super::domain::SectionScore;

/// "Owner homework" lines for a section.
pub fn templates_for(key: &str) -> &'static [&'static str] {
    let Some(section) = Section::from_key(key) else {
        return &[];
    };

    match section {
        Section::FrontDesk => &[
            "Write down your top 10 most common front desk questions and draft one clear answer for each. Keep it by every phone.",
        ],
        Section::BenefitsHr => &[
            "Create a single, easy-to-find document or page where employees can see PTO rules, benefits contacts, and key dates.",
        ],
        Section::Sales => &[
            "Pick one main lead channel (website or phone) and create a simple 3-touch follow-up rule you can stick to for 30 days.",
        ],
        Section::Marketing => &[
            "Choose one social channel and commit to 2 posts per week answering real questions your customers already ask.",
        ],
        Section::Support => &[
            "List your most common customer complaints and add a short 'what happens next' script your team can read from.",
        ],
        Section::HrHiring => &[
            "Document the 5–7 steps of your hiring/onboarding process in a checklist and use it for every new hire.",
        ],
        Section::LeadCapture => &[
            "Add a single, clear call-to-action on your website (Book a Call / Request Info) instead of multiple scattered links.",
        ],
        Section::TechStack => &[
            "Pick one manual task you repeat every day and test whether any of your current tools can automate part of it.",
        ],
    }
}

/// Lowest-scoring sections first. The sort is stable, so ties keep report order.
pub fn weakest_sections(sections: &[SectionScore], count: usize) -> Vec<&SectionScore> {
    let mut ranked: Vec<&SectionScore> = sections.iter().collect();
    ranked.sort_by_key(|section| section.score);
    ranked.truncate(count);
    ranked
}

pub(crate) fn build_recommendations(weakest: &[&SectionScore], cap: usize) -> Vec<String> {
    let mut recommendations: Vec<String> = Vec::new();
    for section in weakest {
        for template in templates_for(&section.key) {
            if recommendations.len() == cap {
                return recommendations;
            }
            if !recommendations.iter().any(|existing| existing == template) {
                recommendations.push((*template).to_string());
            }
        }
    }
    recommendations
}

pub(crate) fn build_quick_wins(weakest: &[&SectionScore]) -> Vec<String> {
    weakest
        .iter()
        .map(|section| {
            format!(
                "Heaven can immediately remove busywork in **{}** by automating repetitive questions, routing, and follow-ups.",
                section.label
            )
        })
        .collect()
}
