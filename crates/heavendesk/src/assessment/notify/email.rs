use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::super::repository::{Audience, Notice};
use super::super::scoring::weakest_sections;

pub const OPERATOR_SUBJECT: &str = "New HeavenDesk.ai Assessment Completed";
pub const VISITOR_SUBJECT: &str = "Your HeavenDesk.ai Assessment Results";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

pub fn render(notice: &Notice, booking_url: &str) -> RenderedEmail {
    match notice.audience {
        Audience::Operator => render_operator(notice),
        Audience::Visitor => render_visitor(notice, booking_url),
    }
}

fn or_none(value: Option<&str>) -> String {
    encode_text(value.unwrap_or("(none)")).into_owned()
}

pub fn render_operator(notice: &Notice) -> RenderedEmail {
    let lead = &notice.lead;
    let payload = serde_json::to_string_pretty(&notice.payload).unwrap_or_default();

    let mut html = String::new();
    html.push_str("<h2>New Assessment Completed</h2>\n");
    let _ = writeln!(html, "<p><strong>Name:</strong> {}</p>", or_none(lead.name.as_deref()));
    let _ = writeln!(html, "<p><strong>Email:</strong> {}</p>", or_none(lead.email()));
    let _ = writeln!(
        html,
        "<p><strong>Company:</strong> {}</p>",
        or_none(lead.company.as_deref())
    );
    let _ = writeln!(
        html,
        "<p><strong>Overall Score:</strong> {} ({})</p>",
        notice.report.overall_score,
        encode_text(&notice.report.tier)
    );
    let _ = writeln!(
        html,
        "<p><a href=\"{}\">View Results</a></p>",
        encode_double_quoted_attribute(&notice.result_url)
    );
    html.push_str("<hr/>\n<pre style=\"font-family:monospace;font-size:13px\">\n");
    html.push_str(&encode_text(&payload));
    html.push_str("\n</pre>\n");

    RenderedEmail {
        subject: OPERATOR_SUBJECT.to_string(),
        html,
    }
}

pub fn render_visitor(notice: &Notice, booking_url: &str) -> RenderedEmail {
    let report = &notice.report;

    let mut html = String::new();
    html.push_str(
        "<div style=\"font-family:system-ui;background:#0f172a;padding:24px;color:white;\">\n",
    );
    html.push_str("<h1>Your Results Are Ready</h1>\n");
    html.push_str("<p>Thank you for completing the assessment!</p>\n");
    html.push_str("<p>Your overall automation score:</p>\n");
    let _ = writeln!(
        html,
        "<h2>{}/100 &mdash; {}</h2>",
        report.overall_score,
        encode_text(&report.tier)
    );

    if !report.quick_wins.is_empty() {
        html.push_str("<p>Where automation helps first:</p>\n<ul>\n");
        // One quick win is written per weakest section.
        for section in weakest_sections(&report.sections, report.quick_wins.len()) {
            let _ = writeln!(
                html,
                "<li>{} ({})</li>",
                encode_text(&section.label),
                section.score
            );
        }
        html.push_str("</ul>\n");
    }

    html.push_str("<p>You can review your full breakdown here:</p>\n");
    let _ = writeln!(
        html,
        "<p><a href=\"{}\" style=\"background:linear-gradient(135deg,#22d3ee,#f97316);padding:12px 20px;border-radius:16px;color:black;font-weight:600;text-decoration:none;\">View My Results</a></p>",
        encode_double_quoted_attribute(&notice.result_url)
    );
    html.push_str(
        "<p style=\"margin-top:20px;\">Ready to translate this into real automation for your firm?<br/>Schedule a short call:</p>\n",
    );
    let _ = writeln!(
        html,
        "<p><a href=\"{}\" style=\"color:#38bdf8;text-decoration:underline;\">Schedule a Call</a></p>",
        encode_double_quoted_attribute(booking_url)
    );
    html.push_str("</div>\n");

    RenderedEmail {
        subject: VISITOR_SUBJECT.to_string(),
        html,
    }
}
