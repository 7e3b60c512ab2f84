use anyhow::bail;
use clap::{Parser, Subcommand};
use skycast_core::{Config, WeatherService};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Current weather for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, e.g. "London".
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => show(&city).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    config.api_key = inquire::Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .prompt()?;

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show(city: &str) -> anyhow::Result<()> {
    let config = Config::load()?;
    let service = WeatherService::new(&config)?;

    match service.fetch(city).await {
        Ok(reading) => {
            if let Some(location) = &reading.location {
                println!("{location}");
            }
            println!("{}  {}", reading.display_temperature(), reading.icon().emoji());
            println!("{}", reading.description);
            if let Some(observed_at) = reading.observed_at {
                println!("Observed at {}", observed_at.format("%Y-%m-%d %H:%M UTC"));
            }
            Ok(())
        }
        Err(err) => {
            let state = err.state();
            bail!("{}\n{}", state.title, state.message);
        }
    }
}
