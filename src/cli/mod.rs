//! Command-line interface for one-off description generation.

use chrono::{DateTime, Utc};
use clap::Parser;

use crate::config::AfiszConfig;
use crate::error::Result;
use crate::event::{AgeCategory, EventCategory, EventDraft};
use crate::generate::Generator;

/// Generate a Polish marketing description for a culture event.
#[derive(Debug, Parser)]
#[command(name = "afisz", version, about)]
pub struct Cli {
    /// Event title (max 100 characters).
    #[arg(long)]
    pub title: String,

    /// City, district, address, or informal place description (max 50 characters).
    #[arg(long)]
    pub city: String,

    /// Event date and time, RFC 3339 (e.g. 2026-12-01T19:00:00Z).
    #[arg(long)]
    pub date: DateTime<Utc>,

    /// Event category (koncerty, teatr, wystawy, warsztaty, festiwale, kino, literatura, inne).
    #[arg(long)]
    pub category: EventCategory,

    /// Age group (dzieci, mlodziez, dorosli, seniorzy, wszyscy).
    #[arg(long)]
    pub age: AgeCategory,

    /// Key facts to work into the description (max 200 characters).
    #[arg(long)]
    pub info: String,
}

/// Validate the draft and run one generation against the configured gateway.
pub async fn run(cli: Cli) -> Result<()> {
    let config = AfiszConfig::from_env()?;
    let generator = Generator::new(config)?;

    let draft = EventDraft {
        title: cli.title,
        city: cli.city,
        event_date: cli.date,
        category: cli.category,
        age_category: cli.age,
        key_information: cli.info,
    };
    draft.validate()?;

    let result = generator.generate(&draft).await?;

    tracing::info!(model = %result.model_version, "description generated");
    println!("{}", result.description);

    Ok(())
}
