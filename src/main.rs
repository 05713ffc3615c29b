use anyhow::Result;
use clap::Parser;
use mealplanner::cli::Commands;

/// mealplanner - Weekly dinner planning
#[derive(Parser)]
#[command(name = "mealplanner")]
#[command(about = "Plan the week's dinners, keep a recipe book and build the grocery list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mealplanner::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealplanner::observability::init_observability(
        &config.observability.log_level,
        config.observability.is_json(),
    )?;

    let mut state = mealplanner::cli::open(&config).await?;
    let output = match mealplanner::cli::execute(&mut state, cli.command).await {
        Ok(output) => output,
        Err(err) => {
            match err.downcast_ref::<mealplanner_shared::Error>() {
                Some(e) if e.is_user() => tracing::debug!(error = %e, "command rejected"),
                _ => tracing::error!(error = %err, "command failed"),
            }

            return Err(err);
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
