//! Renders a completed evaluation into the report document dispatched to the
//! hiring team: a candidate header block, a per-competency score table with
//! qualitative tiers, and the narrative split into paragraphs.

use crate::domain::Evaluation;

use super::scoring::OVERALL_KEY;

/// Five-tier qualitative label for a 1-10 score.
pub fn performance_tier(score: u8) -> &'static str {
    if score >= 9 {
        "Exceptional"
    } else if score >= 8 {
        "Excellent"
    } else if score >= 7 {
        "Good"
    } else if score >= 6 {
        "Satisfactory"
    } else if score >= 4 {
        "Needs Improvement"
    } else {
        "Poor"
    }
}

pub fn render_report(evaluation: &Evaluation) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<body>\n");
    html.push_str("<h1>Interview Assessment Report</h1>\n");

    html.push_str("<table>\n");
    header_row(&mut html, "Candidate", &evaluation.candidate_name);
    header_row(&mut html, "Position", &evaluation.position);
    header_row(
        &mut html,
        "Experience Level",
        evaluation.experience_level.as_str(),
    );
    header_row(
        &mut html,
        "Interview Date",
        &evaluation.started_at.format("%Y-%m-%d %H:%M:%S").to_string(),
    );
    header_row(
        &mut html,
        "Duration",
        &format!("{:.1} minutes", evaluation.duration_minutes()),
    );
    header_row(
        &mut html,
        "Questions Completed",
        &evaluation.questions_completed.to_string(),
    );
    header_row(
        &mut html,
        "Recommendation",
        evaluation.recommendation.as_str(),
    );
    html.push_str("</table>\n");

    html.push_str("<h2>Performance Assessment</h2>\n<table>\n");
    html.push_str("<tr><th>Competency</th><th>Score (1-10)</th><th>Performance Level</th></tr>\n");
    for (competency, score) in &evaluation.scores {
        if competency == OVERALL_KEY {
            continue;
        }
        score_row(&mut html, &display_name(competency), *score);
    }
    if let Some(overall) = evaluation.scores.get(OVERALL_KEY) {
        score_row(&mut html, "OVERALL SCORE", *overall);
    }
    html.push_str("</table>\n");

    html.push_str("<h2>Detailed Analysis</h2>\n");
    for paragraph in evaluation.narrative.split("\n\n") {
        let paragraph = paragraph.trim();
        if !paragraph.is_empty() {
            html.push_str("<p>");
            html.push_str(&escape(paragraph));
            html.push_str("</p>\n");
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn header_row(html: &mut String, label: &str, value: &str) {
    html.push_str("<tr><th>");
    html.push_str(label);
    html.push_str("</th><td>");
    html.push_str(&escape(value));
    html.push_str("</td></tr>\n");
}

fn score_row(html: &mut String, competency: &str, score: u8) {
    html.push_str("<tr><td>");
    html.push_str(&escape(competency));
    html.push_str("</td><td>");
    html.push_str(&score.to_string());
    html.push_str("</td><td>");
    html.push_str(performance_tier(score));
    html.push_str("</td></tr>\n");
}

/// "technical_skills" -> "Technical Skills".
fn display_name(competency: &str) -> String {
    competency
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
