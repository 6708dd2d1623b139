use chrono::NaiveDateTime;

use crate::domain::entities::Lang;
use crate::domain::timezone::TimeZoneLabel;
use crate::helpers::date::parse_naive;

/// The configuration parameters for the application.
#[derive(clap::Parser, Clone, Debug)]
#[command(version, about = "Pick candidate interview slots across timezones")]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Clone, Debug)]
pub enum Command {
    /// Serve the schedule API backed by an in-memory store.
    Serve(ServeConfig),
    /// Open a schedule dialog for one candidate and submit the picked slots.
    Pick(PickConfig),
}

#[derive(clap::Args, Clone, Debug)]
pub struct ServeConfig {
    /// The PORT number for the server address.
    #[clap(long, env, default_value_t = 8080)]
    pub port: u16,
}

#[derive(clap::Args, Clone, Debug)]
pub struct PickConfig {
    /// Base URL of the schedule API.
    #[clap(long, env, default_value = "http://localhost:8080")]
    pub api_url: String,

    #[clap(long)]
    pub candidate_id: u32,

    #[clap(long)]
    pub position_id: u32,

    /// Display timezone; slots are read in this zone.
    #[clap(long, value_parser = parse_timezone)]
    pub timezone: Option<TimeZoneLabel>,

    /// Slot to pick, e.g. `2024-03-01T10:00`. Repeat for several slots.
    #[clap(long = "slot", value_parser = parse_slot)]
    pub slots: Vec<NaiveDateTime>,

    /// Replace the stored slots instead of adding to them.
    #[clap(long)]
    pub replace: bool,

    #[clap(long, default_value = "en", value_parser = parse_lang)]
    pub lang: Lang,

    /// Milliseconds the success state stays up before the dialog closes.
    #[clap(long, env, default_value_t = 1000)]
    pub close_delay_ms: u64,

    /// Show the normalized slots without submitting.
    #[clap(long)]
    pub dry_run: bool,
}

fn parse_timezone(value: &str) -> Result<TimeZoneLabel, String> {
    TimeZoneLabel::try_from(value).map_err(|err| err.to_string())
}

fn parse_slot(value: &str) -> Result<NaiveDateTime, String> {
    parse_naive(value).ok_or_else(|| format!("invalid slot: {}", value))
}

fn parse_lang(value: &str) -> Result<Lang, String> {
    Lang::try_from(value.to_string()).map_err(|_| format!("unsupported language: {}", value))
}
