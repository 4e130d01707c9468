use clap::Parser;
use survey_seeder::cli::Cli;
use survey_seeder::config::Settings;
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;

    info!(
        "Seeding {} from {}",
        settings.endpoint,
        settings.schema_path.display()
    );

    let summary = survey_seeder::run(&settings)?;

    info!(
        "Sent {} of {} responses over {} days ({} failed, {} skipped)",
        summary.succeeded, summary.cycles, summary.days, summary.failed, summary.skipped
    );

    Ok(())
}
