//! Afisz — AI-generated Polish marketing descriptions for culture events.
//!
//! Users describe an event (title, location, date, category, age group,
//! key facts); Afisz asks a chat-completion gateway for a bounded-length
//! Polish description under a strict structured-output contract, retries
//! transient failures with exponential backoff, and re-validates the
//! response locally before handing it back.
//!
//! # Quick Start
//!
//! ```no_run
//! use afisz::prelude::*;
//! use chrono::{TimeZone, Utc};
//!
//! # async fn example() -> afisz::error::Result<()> {
//! let generator = Generator::new(AfiszConfig::from_env()?)?;
//!
//! let draft = EventDraft {
//!     title: "Koncert Chopina".into(),
//!     city: "Warszawa".into(),
//!     event_date: Utc.with_ymd_and_hms(2026, 12, 1, 19, 0, 0).unwrap(),
//!     category: EventCategory::Koncerty,
//!     age_category: AgeCategory::Dorosli,
//!     key_information: "Wieczór muzyki klasycznej".into(),
//! };
//! draft.validate()?;
//!
//! let result = generator.generate(&draft).await?;
//! println!("{}", result.description);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod event;
pub mod generate;
pub mod prelude;
pub mod prompt;

#[cfg(feature = "cli")]
pub mod cli;
