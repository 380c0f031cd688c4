//! Event draft types and inbound validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{AfiszError, Result};

/// Hard ceiling on a generated description, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 500;
/// Form-field limits, in characters (the text is Polish, so bytes won't do).
pub const MAX_TITLE_CHARS: usize = 100;
pub const MAX_CITY_CHARS: usize = 50;
pub const MAX_KEY_INFORMATION_CHARS: usize = 200;

/// A user-submitted event draft, the input to description generation.
///
/// Constructed per call and discarded; nothing here is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventDraft {
    pub title: String,
    /// City, district, address, or an informal place description.
    pub city: String,
    pub event_date: DateTime<Utc>,
    pub category: EventCategory,
    pub age_category: AgeCategory,
    pub key_information: String,
}

/// Event category, matching the submission form's closed list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EventCategory {
    Koncerty,
    Teatr,
    Wystawy,
    Warsztaty,
    Festiwale,
    Kino,
    Literatura,
    Inne,
}

/// Target age group for the event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AgeCategory {
    Dzieci,
    Mlodziez,
    Dorosli,
    Seniorzy,
    Wszyscy,
}

impl EventDraft {
    /// Validate form-level constraints before generation.
    ///
    /// [`crate::generate::Generator::generate`] assumes its input already
    /// passed this check; the handler calling it is responsible for running
    /// it, the way the original route validated request bodies.
    pub fn validate(&self) -> Result<()> {
        require_text("title", &self.title, MAX_TITLE_CHARS)?;
        require_text("city", &self.city, MAX_CITY_CHARS)?;
        require_text(
            "key_information",
            &self.key_information,
            MAX_KEY_INFORMATION_CHARS,
        )?;

        if self.event_date < Utc::now() {
            return Err(AfiszError::InvalidDraft(
                "event_date must not be in the past".into(),
            ));
        }

        Ok(())
    }
}

fn require_text(field: &str, value: &str, max_chars: usize) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AfiszError::InvalidDraft(format!("{field} must not be empty")));
    }
    let len = value.chars().count();
    if len > max_chars {
        return Err(AfiszError::InvalidDraft(format!(
            "{field} has {len} characters (limit {max_chars})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn future_draft() -> EventDraft {
        EventDraft {
            title: "Koncert Chopina".into(),
            city: "Warszawa".into(),
            event_date: Utc::now() + Duration::days(30),
            category: EventCategory::Koncerty,
            age_category: AgeCategory::Dorosli,
            key_information: "Wieczór muzyki klasycznej".into(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        future_draft().validate().unwrap();
    }

    #[test]
    fn overlong_title_is_rejected() {
        let mut draft = future_draft();
        draft.title = "x".repeat(101);
        let err = draft.validate().unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn overlong_city_is_rejected() {
        let mut draft = future_draft();
        draft.city = "y".repeat(51);
        assert!(draft.validate().is_err());
    }

    #[test]
    fn limits_count_characters_not_bytes() {
        let mut draft = future_draft();
        // 100 two-byte characters: at the limit, not past it.
        draft.title = "ł".repeat(100);
        draft.validate().unwrap();
    }

    #[test]
    fn blank_key_information_is_rejected() {
        let mut draft = future_draft();
        draft.key_information = "   ".into();
        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains("key_information"));
    }

    #[test]
    fn past_date_is_rejected() {
        let mut draft = future_draft();
        draft.event_date = Utc::now() - Duration::days(1);
        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains("past"));
    }

    #[test]
    fn categories_parse_from_form_values() {
        assert_eq!("koncerty".parse::<EventCategory>().unwrap(), EventCategory::Koncerty);
        assert_eq!("dorosli".parse::<AgeCategory>().unwrap(), AgeCategory::Dorosli);
        assert!("opera".parse::<EventCategory>().is_err());
    }

    #[test]
    fn categories_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&EventCategory::Wystawy).unwrap(),
            "\"wystawy\""
        );
        assert_eq!(AgeCategory::Mlodziez.to_string(), "mlodziez");
    }
}
