//! CLI output formatting

use crate::core::{JobReport, PipelineConfig, PipelineSeed};
use console::Emoji;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static SKIP: Emoji<'_, '_> = Emoji("⏭️  ", "- ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "!");
pub static BRIDGE: Emoji<'_, '_> = Emoji("🔗 ", "> ");

/// Format one job line
pub fn format_job_report(report: &JobReport) -> String {
    let icon = if !report.included {
        SKIP
    } else if report.errors.is_empty() {
        CHECK
    } else {
        CROSS
    };

    let kind = if report.bridge {
        format!("{}{}", BRIDGE, style("bridge").magenta())
    } else {
        style("build").cyan().to_string()
    };

    let status = if report.included {
        style("included").green()
    } else {
        style("excluded").dim()
    };

    let mut line = format!(
        "{} {} {} [{}] {}",
        icon,
        style(&report.stage).dim(),
        style(&report.name).bold(),
        kind,
        status
    );

    for error in &report.errors {
        line.push_str(&format!("\n    {} {}", WARN, style(error).red()));
    }

    line
}

/// Format the seeding summary
pub fn format_seed_summary(seed: &PipelineSeed) -> String {
    let report = seed.report();
    let included = report.iter().filter(|r| r.included).count();
    let bridges = report.iter().filter(|r| r.included && r.bridge).count();
    let errors = seed.errors().len();

    format!(
        "{} {} for {} ({}): {}/{} jobs included, {} bridges, {} errors",
        INFO,
        style("Seeded pipeline").bold(),
        style(&seed.context().git_ref).cyan(),
        seed.context().source,
        style(included).green(),
        report.len(),
        style(bridges).magenta(),
        if errors == 0 {
            style(errors).green()
        } else {
            style(errors).red()
        }
    )
}

/// Format a validated configuration overview
pub fn format_config_overview(config: &PipelineConfig) -> String {
    let mut out = String::new();

    if let Some(name) = &config.name {
        out.push_str(&format!("  Name: {}\n", style(name).bold()));
    }
    out.push_str(&format!("  Stages: {}\n", style(config.stages.len()).cyan()));
    out.push_str(&format!("  Jobs: {}\n", style(config.job_count()).cyan()));
    out.push_str(&format!(
        "  Needs limit: {}",
        style(config.settings().needs_limit().max()).cyan()
    ));

    out
}
