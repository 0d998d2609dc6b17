//! Human-readable terminal rendering.

use colored::Colorize;

use crate::catalog::RoleDescriptor;
use crate::engine::AnalysisReport;

pub fn render_report(report: &AnalysisReport) {
    println!(
        "{} {}",
        "Overall match:".bold(),
        format!("{}/10", report.overall_score).cyan().bold()
    );
    if report.degraded {
        println!("{}", "(degraded: some scores are neutral placeholders)".yellow());
    }
    println!();

    render_skill_line("Skills found", &report.skills_found);
    render_skill_line("Required skills", &report.required_skills);
    println!("{} {}", "Matched:".bold(), join_or_dash(&report.matched).green());
    println!("{} {}", "Gaps:".bold(), join_or_dash(&report.gaps).red());

    if !report.relevant_projects.is_empty() {
        println!();
        println!("{}", "Relevant projects".bold());
        for project in &report.relevant_projects {
            println!("  - {}", project.snippet);
        }
    }

    if !report.recommended_jobs.is_empty() {
        println!();
        println!("{}", "Recommended roles".bold());
        for job in &report.recommended_jobs {
            println!("  - {} ({}%)", job.role, job.score);
        }
    }

    if !report.resume_suggestions.is_empty() {
        println!();
        println!("{}", "Suggestions".bold());
        for suggestion in &report.resume_suggestions {
            println!("  - {suggestion}");
        }
    }
}

pub fn render_skills(skills: &[String]) {
    if skills.is_empty() {
        println!("{}", "skill catalog is empty".yellow());
        return;
    }
    for skill in skills {
        println!("{skill}");
    }
}

pub fn render_roles(roles: &[RoleDescriptor], cached: usize) {
    if roles.is_empty() {
        println!("{}", "role catalog is empty".yellow());
        return;
    }
    println!("{} roles ({} with cached embeddings)", roles.len(), cached);
    for role in roles {
        println!("{}  {}", role.id.bold(), role.description.dimmed());
    }
}

fn render_skill_line(label: &str, skills: &[String]) {
    println!("{} {}", format!("{label}:").bold(), join_or_dash(skills));
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
