use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Parser;

use skycast_core::{
    Config, Styles,
    report::{self, Report},
    source::{ForecastSource, WeatherApiClient},
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Colorized hourly weather forecast")]
pub struct Cli {
    /// Location to look up, passed verbatim to the weather API.
    #[arg(short = 'l', long, default_value = "Gainesville")]
    pub location: String,

    /// Forecast day index: 0 = today, 1 = tomorrow, 2 = day after.
    #[arg(short = 'd', long, default_value_t = 0)]
    pub day: usize,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = Config::load()?;
        let api_key = config.resolved_api_key()?;
        let client = WeatherApiClient::new(api_key)?;

        let report = self.build_report(&client, Utc::now()).await?;
        print_report(&report);

        Ok(())
    }

    /// Fetch and render; split from `run` so tests can inject a source and a
    /// fixed clock.
    async fn build_report(
        &self,
        source: &dyn ForecastSource,
        now: DateTime<Utc>,
    ) -> Result<Report> {
        let response = source.fetch_forecast(&self.location).await?;
        let styles = Styles::ansi();
        let report = report::render(&response, self.day, now, &styles)?;

        Ok(report)
    }
}

fn print_report(report: &Report) {
    println!("{}", report.header);
    println!("{}", report.date_line);

    if report.tz_fallback {
        eprintln!("⚠️ Warning: could not resolve the location timezone, using UTC.");
    }

    for line in &report.hour_lines {
        println!("{line}");
    }
}
