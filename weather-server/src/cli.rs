use std::net::SocketAddr;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::Password;
use weather_core::{Config, ProviderId, RequestProxy};
use weather_server::{ServerConfig, serve, server::DEFAULT_BIND_ADDRESS};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Weather dashboard backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server.
    Serve {
        /// Address to listen on.
        #[arg(long, env = "WEATHER_PROXY_BIND", default_value = DEFAULT_BIND_ADDRESS)]
        bind: SocketAddr,
    },

    /// Store an API key for a provider in the config file.
    Configure {
        /// Provider short name: "weatherapi" or "pexels".
        provider: String,
    },

    /// Print the raw forecast document for a city.
    Forecast {
        city: String,

        /// Number of forecast days.
        #[arg(long, default_value_t = 1)]
        days: u32,

        /// Fetch the seven-day forecast, ignoring --days.
        #[arg(long)]
        week: bool,
    },

    /// Print the background image URL for a city.
    Background {
        city: String,

        /// Current condition, e.g. "Light rain".
        #[arg(long)]
        condition: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Serve { bind } => {
                let config = Config::load()?;
                serve(ServerConfig { bind_address: bind }, &config).await?;
            }
            Command::Configure { provider } => {
                let id = ProviderId::try_from(provider.as_str())?;
                let api_key = Password::new(&format!("API key for {id}:"))
                    .without_confirmation()
                    .prompt()
                    .context("Failed to read API key")?;

                let mut config = Config::load_file()?;
                config.upsert_provider_api_key(id, api_key.trim().to_string());
                config.save()?;

                println!("Saved {id} key to {}", Config::config_file_path()?.display());
            }
            Command::Forecast { city, days, week } => {
                let proxy = RequestProxy::from_config(&Config::load()?)?;
                let result = if week {
                    proxy.get_weekly_forecast(&city).await?
                } else {
                    proxy.get_forecast(&city, days).await?
                };

                println!("{}", serde_json::to_string_pretty(&result)?);
            }
            Command::Background { city, condition } => {
                let proxy = RequestProxy::from_config(&Config::load()?)?;
                let result = proxy.get_background(&city, condition.as_deref()).await?;

                println!("{}", result.image_url);
            }
        }

        Ok(())
    }
}
