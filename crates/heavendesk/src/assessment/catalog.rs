use serde::{Deserialize, Serialize};

/// Canonical quiz sections, in the order they are presented and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    FrontDesk,
    BenefitsHr,
    Sales,
    Marketing,
    Support,
    HrHiring,
    LeadCapture,
    TechStack,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::FrontDesk,
        Section::BenefitsHr,
        Section::Sales,
        Section::Marketing,
        Section::Support,
        Section::HrHiring,
        Section::LeadCapture,
        Section::TechStack,
    ];

    /// Wire key used in answer payloads and stored records.
    pub const fn key(self) -> &'static str {
        match self {
            Self::FrontDesk => "frontDesk",
            Self::BenefitsHr => "benefitsHr",
            Self::Sales => "sales",
            Self::Marketing => "marketing",
            Self::Support => "support",
            Self::HrHiring => "hrHiring",
            Self::LeadCapture => "leadCapture",
            Self::TechStack => "techStack",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FrontDesk => "Front Desk & Communication Load",
            Self::BenefitsHr => "Benefits, HR & Employee Support Load",
            Self::Sales => "Sales, Leads & Website Funnel",
            Self::Marketing => "Marketing, Social Media & Presence",
            Self::Support => "Support, Communication & Customer Experience",
            Self::HrHiring => "HR, Hiring & Employee Support",
            Self::LeadCapture => "Lead Capture & Sales Process",
            Self::TechStack => "Tech Stack, Systems & Workflow",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.key() == key)
    }

    pub const fn position(self) -> usize {
        self as usize
    }

    pub fn definition(self) -> &'static SectionDefinition {
        &CATALOG[self.position()]
    }
}

/// A single multiple-choice question. Option `i` records response code `i`.
#[derive(Debug, Serialize)]
pub struct QuestionDefinition {
    pub id: &'static str,
    pub text: &'static str,
    pub options: [&'static str; 4],
}

#[derive(Debug, Serialize)]
pub struct SectionDefinition {
    #[serde(skip)]
    pub section: Section,
    pub key: &'static str,
    pub label: &'static str,
    pub eyebrow: &'static str,
    pub questions: &'static [QuestionDefinition],
}

pub fn total_questions() -> usize {
    CATALOG.iter().map(|section| section.questions.len()).sum()
}

pub static CATALOG: [SectionDefinition; 8] = [
    SectionDefinition {
        section: Section::FrontDesk,
        key: Section::FrontDesk.key(),
        label: Section::FrontDesk.label(),
        eyebrow: "Section 1 of 8",
        questions: &[
            QuestionDefinition {
                id: "c1_1",
                text: "How would you describe your current daily communication load (calls, emails, texts, walk-ins)?",
                options: [
                    "Nearly constant. We’re overwhelmed most days.",
                    "Busy, but manageable as long as nothing unexpected happens.",
                    "Moderate; we get waves but nothing too crazy.",
                    "Light; we don’t deal with many incoming questions.",
                ],
            },
            QuestionDefinition {
                id: "c1_2",
                text: "What happens when your front desk or point-person is unavailable?",
                options: [
                    "Things pile up quickly, leading to delays or mistakes.",
                    "Other team members scramble to help, but it disrupts their work.",
                    "We manage okay, but follow-up sometimes slips through the cracks.",
                    "We have solid backup coverage and minimal disruption.",
                ],
            },
            QuestionDefinition {
                id: "c1_3",
                text: "How often does your team answer the same questions repeatedly?",
                options: [
                    "All day, every day. It’s nonstop.",
                    "Multiple times a day, usually the same core topics.",
                    "A few times a day—annoying, but manageable.",
                    "Rarely; our customers/employees are pretty self-sufficient.",
                ],
            },
            QuestionDefinition {
                id: "c1_4",
                text: "How disruptive are incoming calls/messages to your team’s workflow?",
                options: [
                    "Extremely. One interruption derails the whole day.",
                    "Significant. It slows down other important tasks.",
                    "Mild. We bounce back quickly.",
                    "Not disruptive. Our team is built for it.",
                ],
            },
            QuestionDefinition {
                id: "c1_5",
                text: "How confident are you that every call or question is handled correctly and consistently?",
                options: [
                    "Not confident at all — lots of inconsistency.",
                    "Somewhat confident — depends who answers.",
                    "Mostly confident — only occasional slips.",
                    "Very confident — everything is handled consistently.",
                ],
            },
            QuestionDefinition {
                id: "c1_6",
                text: "If a new customer or employee contacts you right now, what’s their experience like?",
                options: [
                    "Hit or miss — depends who picks up and how busy we are.",
                    "Usually decent, but long waits or missed calls happen.",
                    "Generally smooth, but could be more polished.",
                    "Excellent — responsive, clear, and consistent.",
                ],
            },
        ],
    },
    SectionDefinition {
        section: Section::BenefitsHr,
        key: Section::BenefitsHr.key(),
        label: Section::BenefitsHr.label(),
        eyebrow: "Section 2 of 8",
        questions: &[
            QuestionDefinition {
                id: "c2_1",
                text: "How often do employees reach out with HR or benefits questions?",
                options: [
                    "Constantly — every day, often the same questions.",
                    "Frequently — several times a week.",
                    "Occasionally — a few times a month.",
                    "Rarely — we rarely get HR/benefits questions.",
                ],
            },
            QuestionDefinition {
                id: "c2_2",
                text: "When employees ask HR questions, how prepared is your team to answer correctly?",
                options: [
                    "We’re often unsure and have to look it up.",
                    "We know some answers, but not consistently.",
                    "Mostly confident but occasionally double-check.",
                    "Fully confident — everything is documented and clear.",
                ],
            },
            QuestionDefinition {
                id: "c2_3",
                text: "How much time does your team spend onboarding new employees or contractors?",
                options: [
                    "It takes hours and disrupts our day.",
                    "It takes time, but we power through it.",
                    "It’s not bad — mostly straightforward.",
                    "Very efficient — nearly everything is automated.",
                ],
            },
            QuestionDefinition {
                id: "c2_4",
                text: "How structured is your process for employee follow-up, reminders, forms, and deadlines?",
                options: [
                    "Chaos — lots of forgotten tasks or missing documents.",
                    "Semi-structured but still manual and error-prone.",
                    "Mostly organized — we keep things on track.",
                    "Fully structured — automated reminders and tracking.",
                ],
            },
            QuestionDefinition {
                id: "c2_5",
                text: "If an employee has an urgent issue (benefits, leave, payroll), what happens?",
                options: [
                    "Everything stops — we drop what we’re doing.",
                    "We handle it, but it throws off the day.",
                    "We resolve it smoothly, most of the time.",
                    "There’s a clean protocol with zero disruption.",
                ],
            },
            QuestionDefinition {
                id: "c2_6",
                text: "How confident are you that every employee gets consistent, accurate information?",
                options: [
                    "Not confident — depends who answers and how busy we are.",
                    "Somewhat confident — we try but it’s not perfect.",
                    "Mostly confident — only minor inconsistencies.",
                    "Very confident — everything is clear, accurate, and repeated the same way.",
                ],
            },
        ],
    },
    SectionDefinition {
        section: Section::Sales,
        key: Section::Sales.key(),
        label: Section::Sales.label(),
        eyebrow: "Section 3 of 8",
        questions: &[
            QuestionDefinition {
                id: "c3_1",
                text: "How quickly do you respond to new leads (website, forms, calls, messages)?",
                options: [
                    "Hours or next day — sometimes longer.",
                    "Within 1–2 hours.",
                    "Within 15–30 minutes.",
                    "Immediately — near instant.",
                ],
            },
            QuestionDefinition {
                id: "c3_2",
                text: "How often do leads fall through the cracks because nobody follows up consistently?",
                options: [
                    "All the time — it’s a major issue.",
                    "Sometimes — not proud of it.",
                    "Rarely — we follow up pretty well.",
                    "Never — clear system in place.",
                ],
            },
            QuestionDefinition {
                id: "c3_3",
                text: "What best describes your sales follow-up process?",
                options: [
                    "No process — it’s random depending on who’s free.",
                    "We try to follow up, but it’s inconsistent.",
                    "We have a semi-structured follow-up system.",
                    "Fully structured, scheduled, and documented follow-up.",
                ],
            },
            QuestionDefinition {
                id: "c3_4",
                text: "How easy is it for someone to schedule an appointment or call on your website?",
                options: [
                    "Difficult — unclear or manual.",
                    "Possible but still manual or slow.",
                    "Decent — mostly straightforward.",
                    "Instant — automated scheduling.",
                ],
            },
            QuestionDefinition {
                id: "c3_5",
                text: "How many sales channels do you use right now? (Website, Google, social, ads, DM, SMS, phone, email)",
                options: [
                    "Only 1–2 channels.",
                    "3–4 channels.",
                    "5–6 channels.",
                    "7+ channels.",
                ],
            },
            QuestionDefinition {
                id: "c3_6",
                text: "How confident are you that your website captures every potential lead?",
                options: [
                    "Not confident — lots of missed opportunities.",
                    "Somewhat confident — but could be better.",
                    "Mostly confident.",
                    "Very confident — optimized funnel and forms.",
                ],
            },
        ],
    },
    SectionDefinition {
        section: Section::Marketing,
        key: Section::Marketing.key(),
        label: Section::Marketing.label(),
        eyebrow: "Section 4 of 8",
        questions: &[
            QuestionDefinition {
                id: "c4_1",
                text: "How consistently does your business post on social media?",
                options: [
                    "Almost never.",
                    "A few times a month.",
                    "Weekly.",
                    "Daily or near-daily.",
                ],
            },
            QuestionDefinition {
                id: "c4_2",
                text: "Do you currently create content (videos, photos, graphics) in-house or outsource it?",
                options: [
                    "We don’t create content at all.",
                    "We create some content manually.",
                    "We outsource or hire freelancers.",
                    "We produce consistent content with a clear system.",
                ],
            },
            QuestionDefinition {
                id: "c4_3",
                text: "How well does your brand show up on Google (search results, maps, reviews)?",
                options: [
                    "Poor visibility.",
                    "Some visibility.",
                    "Good visibility.",
                    "Strong presence — we’re easily found and reviewed.",
                ],
            },
            QuestionDefinition {
                id: "c4_4",
                text: "How do you manage customer reviews and reputation?",
                options: [
                    "We don’t.",
                    "We see them but rarely respond.",
                    "We respond sometimes.",
                    "We actively manage + request reviews.",
                ],
            },
            QuestionDefinition {
                id: "c4_5",
                text: "How strong is your email or SMS marketing system?",
                options: [
                    "No email or SMS marketing.",
                    "Weak — inconsistent.",
                    "Decent occasional campaigns.",
                    "Strong automated campaigns.",
                ],
            },
            QuestionDefinition {
                id: "c4_6",
                text: "How confident are you in your overall digital presence?",
                options: [
                    "Not confident.",
                    "Somewhat confident.",
                    "Mostly confident.",
                    "Very confident.",
                ],
            },
        ],
    },
    SectionDefinition {
        section: Section::Support,
        key: Section::Support.key(),
        label: Section::Support.label(),
        eyebrow: "Section 5 of 8",
        questions: &[
            QuestionDefinition {
                id: "c5_1",
                text: "How quickly do customers typically receive a response?",
                options: [
                    "Hours or next day.",
                    "30–60 minutes.",
                    "Within 10–20 minutes.",
                    "Instantly (automated or staffed).",
                ],
            },
            QuestionDefinition {
                id: "c5_2",
                text: "How often do customers call or message asking the same repeating questions?",
                options: [
                    "Constantly.",
                    "Several times a day.",
                    "Occasionally.",
                    "Rarely — we already have systems.",
                ],
            },
            QuestionDefinition {
                id: "c5_3",
                text: "How easy is it for customers to find answers without calling you?",
                options: [
                    "Very difficult.",
                    "Somewhat difficult.",
                    "Usually easy.",
                    "Extremely easy and intentional.",
                ],
            },
            QuestionDefinition {
                id: "c5_4",
                text: "How do you currently handle after-hours inquiries?",
                options: [
                    "We miss them.",
                    "We answer the next day.",
                    "A staff member sometimes checks.",
                    "Fully covered (automated/chat/outsourced).",
                ],
            },
            QuestionDefinition {
                id: "c5_5",
                text: "Do customers regularly complain about delays, confusion, or missed messages?",
                options: ["Yes, often.", "Sometimes.", "Rarely.", "Almost never."],
            },
            QuestionDefinition {
                id: "c5_6",
                text: "How confident are you in your overall customer experience?",
                options: [
                    "Not confident.",
                    "Somewhat confident.",
                    "Mostly confident.",
                    "Very confident.",
                ],
            },
        ],
    },
    SectionDefinition {
        section: Section::HrHiring,
        key: Section::HrHiring.key(),
        label: Section::HrHiring.label(),
        eyebrow: "Section 6 of 8",
        questions: &[
            QuestionDefinition {
                id: "c6_1",
                text: "How often do employees ask HR or management the same recurring questions?",
                options: [
                    "All the time.",
                    "A few times per week.",
                    "Occasionally.",
                    "Rarely — we have clear systems.",
                ],
            },
            QuestionDefinition {
                id: "c6_2",
                text: "How do employees currently access HR information (policies, PTO, handbooks, benefits)?",
                options: [
                    "They have to ask someone.",
                    "We share PDFs or email them.",
                    "We have a shared folder.",
                    "We have a self-service system.",
                ],
            },
            QuestionDefinition {
                id: "c6_3",
                text: "How organized is your hiring and onboarding process?",
                options: [
                    "Very messy — hard to track.",
                    "Somewhat organized, but inconsistent.",
                    "Mostly clear.",
                    "Fully documented and automated.",
                ],
            },
            QuestionDefinition {
                id: "c6_4",
                text: "How do you handle PTO, time-off requests, or schedule changes?",
                options: [
                    "Verbal/text messages — chaotic.",
                    "Someone manually keeps track.",
                    "A basic system.",
                    "A streamlined automated process.",
                ],
            },
            QuestionDefinition {
                id: "c6_5",
                text: "When employees have questions about benefits, who handles them?",
                options: [
                    "Management or HR (causes interruptions).",
                    "Someone on the admin team.",
                    "We redirect to our broker/TPA.",
                    "Already automated/self-service.",
                ],
            },
            QuestionDefinition {
                id: "c6_6",
                text: "How confident are you that employees receive accurate, consistent HR information?",
                options: [
                    "Not confident.",
                    "Somewhat confident.",
                    "Mostly confident.",
                    "Very confident.",
                ],
            },
        ],
    },
    SectionDefinition {
        section: Section::LeadCapture,
        key: Section::LeadCapture.key(),
        label: Section::LeadCapture.label(),
        eyebrow: "Section 7 of 8",
        questions: &[
            QuestionDefinition {
                id: "c7_1",
                text: "How do you currently capture new leads from your website?",
                options: [
                    "We don’t have a clear system / leads get lost.",
                    "Manual: forms go to email.",
                    "Basic CRM or spreadsheet.",
                    "Fully automated pipelines.",
                ],
            },
            QuestionDefinition {
                id: "c7_2",
                text: "How quickly does your business typically respond to new leads?",
                options: [
                    "Hours to days.",
                    "A few hours.",
                    "Within 1 hour.",
                    "Automatically or instantly.",
                ],
            },
            QuestionDefinition {
                id: "c7_3",
                text: "What happens when someone calls about services or pricing?",
                options: [
                    "They often hit voicemail or wait on hold.",
                    "Someone answers when possible.",
                    "We have some routing.",
                    "Fully handled with scripts or automation.",
                ],
            },
            QuestionDefinition {
                id: "c7_4",
                text: "How is your follow-up or nurturing process handled?",
                options: [
                    "We don’t consistently follow up.",
                    "Manual texts/emails.",
                    "Some automation.",
                    "Fully automated sequences.",
                ],
            },
            QuestionDefinition {
                id: "c7_5",
                text: "How well do you track where leads are coming from (ads, social, referrals, etc.)?",
                options: [
                    "We don’t track it.",
                    "Sometimes.",
                    "Most sources.",
                    "Fully tracked and labeled.",
                ],
            },
            QuestionDefinition {
                id: "c7_6",
                text: "How often do you lose leads because no one followed up fast enough?",
                options: [
                    "Constantly.",
                    "Sometimes.",
                    "Rare.",
                    "Never — we have a great system.",
                ],
            },
        ],
    },
    SectionDefinition {
        section: Section::TechStack,
        key: Section::TechStack.key(),
        label: Section::TechStack.label(),
        eyebrow: "Section 8 of 8",
        questions: &[
            QuestionDefinition {
                id: "c8_1",
                text: "How many different systems does your team use daily?",
                options: [
                    "6+ tools (chaos).",
                    "4–5 tools.",
                    "2–3 tools.",
                    "Mostly one main platform.",
                ],
            },
            QuestionDefinition {
                id: "c8_2",
                text: "Do your systems integrate with each other?",
                options: [
                    "Nothing connects — everything is manual.",
                    "A few things connect.",
                    "Most tools sync in some way.",
                    "Fully integrated workflows.",
                ],
            },
            QuestionDefinition {
                id: "c8_3",
                text: "How often do you repeat the same task across multiple systems (copy/paste)?",
                options: ["Constantly.", "Daily.", "Sometimes.", "Rarely or never."],
            },
            QuestionDefinition {
                id: "c8_4",
                text: "How do you currently store documents, policies, SOPs, or HR/Benefits files?",
                options: [
                    "Scattered everywhere (email, desktops, paper, etc.).",
                    "Basic shared folder.",
                    "Organized system.",
                    "Structured repository with permissions.",
                ],
            },
            QuestionDefinition {
                id: "c8_5",
                text: "How do you track operational metrics (calls, time, tasks, errors)?",
                options: [
                    "No tracking.",
                    "Manual spreadsheets.",
                    "Basic software.",
                    "Full dashboards and reporting.",
                ],
            },
            QuestionDefinition {
                id: "c8_6",
                text: "How confident are you in your current tech stack’s ability to scale?",
                options: [
                    "It’s holding us back.",
                    "It’s okay, but we’ll outgrow it.",
                    "It’s solid.",
                    "Fully scalable and optimized.",
                ],
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_follows_section_order() {
        for (index, definition) in CATALOG.iter().enumerate() {
            assert_eq!(definition.section.position(), index);
            assert_eq!(definition.key, definition.section.key());
            assert_eq!(definition.eyebrow, format!("Section {} of 8", index + 1));
        }
    }

    #[test]
    fn every_section_has_six_questions() {
        assert!(CATALOG.iter().all(|section| section.questions.len() == 6));
        assert_eq!(total_questions(), 48);
    }

    #[test]
    fn keys_round_trip_through_lookup() {
        for section in Section::ALL {
            assert_eq!(Section::from_key(section.key()), Some(section));
        }
        assert_eq!(Section::from_key("frontdesk"), None);
    }
}
