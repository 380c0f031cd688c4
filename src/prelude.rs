//! Convenience re-exports for common use.

pub use crate::client::retry::RetryPolicy;
pub use crate::config::AfiszConfig;
pub use crate::error::{AfiszError, Result};
pub use crate::event::{AgeCategory, EventCategory, EventDraft};
pub use crate::generate::{EventDescription, Generator};
