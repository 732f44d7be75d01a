use anyhow::{Context, Result};
use pipeline_seed::cli::commands::{SeedCommand, ValidateCommand};
use pipeline_seed::cli::output::*;
use pipeline_seed::cli::{Cli, Command};
use pipeline_seed::core::{PipelineConfig, PipelineSeed};
use tracing::{debug, error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    match &cli.command {
        Command::Seed(cmd) => seed_pipeline(cmd)?,
        Command::Validate(cmd) => validate_pipeline(cmd)?,
    }

    Ok(())
}

fn seed_pipeline(cmd: &SeedCommand) -> Result<()> {
    let config = PipelineConfig::from_file(&cmd.file)
        .with_context(|| format!("Failed to load pipeline records from {}", cmd.file))?;

    let context = cmd.context();
    let settings = cmd.settings(config.settings());
    info!(
        git_ref = %context.git_ref,
        tag = context.tag,
        source = %context.source,
        needs_limit = settings.needs_limit().max(),
        "seeding pipeline"
    );

    let seed = PipelineSeed::new(context, &config, &settings);

    for stage in seed.stages() {
        for job in stage.jobs() {
            debug!(
                stage = stage.name(),
                job = job.name(),
                included = job.is_included(),
                bridge = job.is_bridge(),
                "job seeded"
            );

            if cmd.resources && job.is_included() {
                job.to_resource();
            }
        }
    }

    let errors = seed.errors();
    for message in &errors {
        warn!("{}", message);
    }

    if cmd.json {
        let data = serde_json::json!({
            "context": seed.context(),
            "settings": settings,
            "jobs": seed.report(),
            "errors": errors,
        });
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else {
        for report in seed.report() {
            println!("{}", format_job_report(&report));
        }
        println!("\n{}", format_seed_summary(&seed));
    }

    if cmd.strict && seed.has_errors() {
        error!(count = errors.len(), "pipeline has seeding errors");
        std::process::exit(1);
    }

    Ok(())
}

fn validate_pipeline(cmd: &ValidateCommand) -> Result<()> {
    println!("{} Validating pipeline records...", INFO);

    match PipelineConfig::from_file(&cmd.file) {
        Ok(config) => {
            println!("{} Pipeline records are valid!", CHECK);
            println!("{}", format_config_overview(&config));

            if cmd.json {
                let json = serde_json::to_string_pretty(&config)?;
                println!("\n{}", json);
            }
            Ok(())
        }
        Err(e) => {
            println!("{} Validation failed:", CROSS);
            println!("  {}", style(e).red());
            std::process::exit(1);
        }
    }
}
