use crate::datetime::parse_datetime;
use chrono::{DateTime, TimeZone};

/// Derived validity status of a code. Never stored, recomputed per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeStatus {
    Unknown,
    Expired,
    Active,
}

impl CodeStatus {
    /// Classify against `now`: unknown without a readable `end`, expired
    /// strictly after `end`, active otherwise. No grace period.
    #[must_use]
    pub fn classify<Tz: TimeZone>(end: Option<&str>, now: &DateTime<Tz>) -> Self {
        match end.and_then(|raw| parse_datetime(raw, &now.timezone())) {
            None => Self::Unknown,
            Some(end) if *now > end => Self::Expired,
            Some(_) => Self::Active,
        }
    }

    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Unknown => "status.unknown",
            Self::Expired => "status.expired",
            Self::Active => "status.active",
        }
    }

    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Unknown => "status-unknown",
            Self::Expired => "status-expired",
            Self::Active => "status-active",
        }
    }
}
