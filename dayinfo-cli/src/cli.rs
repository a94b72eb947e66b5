use anyhow::{Context, Result, ensure};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use dayinfo_core::{
    City, Config, DayInfoClient, DayInfoResponse, RequestLifecycleController, RequestOutcome,
    decide_astro, decide_events, decide_score, decide_weather,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "dayinfo", version, about = "Birthday day-info CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the day-info cards for a birth date and city.
    Show {
        /// Birth date, YYYY-MM-DD. Prompted for interactively if omitted.
        #[arg(long)]
        date: Option<String>,

        /// City name, e.g. "Kyiv". Prompted for interactively if omitted.
        #[arg(long)]
        city: Option<String>,
    },

    /// Store the API base URL in the config file.
    Configure {
        /// Base URL of the day-info service.
        api_base: Option<String>,
    },

    /// Probe the day-info service's health endpoint.
    Health,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Show { date, city } => show(date, city).await,
            Command::Configure { api_base } => configure(api_base),
            Command::Health => health().await,
        }
    }
}

async fn show(date: Option<String>, city: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let client = DayInfoClient::from_config(&config);
    let mut controller = RequestLifecycleController::new(Box::new(client));

    let date = match date {
        Some(date) => date,
        None => prompt_date()?,
    };
    let city = match city {
        Some(city) => city,
        None => prompt_city()?,
    };

    match controller.submit(&date, &city).await {
        Ok(outcome) => print_outcome(outcome),
        Err(err) => println!("{}", err.user_message()),
    }

    Ok(())
}

fn prompt_date() -> Result<String> {
    let date: NaiveDate = inquire::DateSelect::new("Дата народження:")
        .prompt()
        .context("Failed to read the birth date")?;

    Ok(date.format("%Y-%m-%d").to_string())
}

fn prompt_city() -> Result<String> {
    let city = inquire::Select::new("Місто:", City::all().to_vec())
        .prompt()
        .context("Failed to read the city")?;

    Ok(city.to_string())
}

fn print_outcome(outcome: &RequestOutcome) {
    match outcome {
        RequestOutcome::Success(data) => print_cards(data),
        RequestOutcome::Failure { message, .. } => println!("{message}"),
        // A resolved submission never leaves these behind.
        RequestOutcome::Idle | RequestOutcome::Loading => {}
    }
}

fn print_cards(data: &DayInfoResponse) {
    print_card("Погода в цей день", decide_weather(&data.weather).lines());
    print_card("Небо", decide_astro(&data.astro).lines());
    print_card("Події у світі", decide_events(&data.world_events).lines());
    print_card("Індекс незвичності", decide_score(&data.fun_score).lines());
}

fn print_card(title: &str, lines: Vec<String>) {
    println!("\n{title}");
    for line in lines {
        println!("  {line}");
    }
}

fn configure(api_base: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    let api_base = match api_base {
        Some(api_base) => api_base,
        None => inquire::Text::new("API base URL:")
            .with_default(&config.resolve_api_base())
            .prompt()
            .context("Failed to read the API base URL")?,
    };

    let api_base = api_base.trim().trim_end_matches('/').to_string();
    ensure!(
        api_base.starts_with("http://") || api_base.starts_with("https://"),
        "API base must start with http:// or https://"
    );

    config.set_api_base(api_base);
    config.save()?;
    println!("Saved config to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn health() -> Result<()> {
    let config = Config::load()?;
    let client = DayInfoClient::from_config(&config);

    match client.health().await {
        Ok(()) => println!("ok"),
        Err(err) => println!("unhealthy: {err}"),
    }

    Ok(())
}
