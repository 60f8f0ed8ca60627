use clap::Parser;
use crash_tool::cli::{Cli, Commands};
use crash_tool::config::Config;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Missing config file means built-in defaults
    let config = if Path::new(&cli.config).exists() {
        Config::load(&cli.config).unwrap_or_else(|e| {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            Config::default()
        })
    } else {
        Config::default()
    };

    crash_tool::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Analyze(args) => {
            tracing::debug!("Running analysis");
            args.execute(&config)?;
        }
        Commands::Schedule(args) => {
            tracing::debug!("Generating schedules");
            args.execute(&config)?;
        }
        Commands::Config => {
            println!("Current configuration ({}):", cli.config);
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
