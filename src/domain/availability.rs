//! Tri-state availability results.

use std::fmt;

/// Whether an item can currently be delivered to the destination.
///
/// `Unknown` means the check could not complete (network failure, access
/// denial, unparseable response). It is never evidence of non-availability:
/// an unknown item is neither announced nor recorded as available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Availability {
    Available,
    Unavailable,
    #[default]
    Unknown,
}

impl Availability {
    #[must_use]
    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => Self::Available,
            Some(false) => Self::Unavailable,
            None => Self::Unknown,
        }
    }

    #[must_use]
    pub fn is_available(self) -> bool {
        self == Self::Available
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Available => "available",
            Self::Unavailable => "unavailable",
            Self::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Outcome of one availability check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvailabilityResult {
    pub availability: Availability,
    /// Cash-on-delivery eligibility; `None` when not reported.
    pub cod_eligible: Option<bool>,
}

impl AvailabilityResult {
    #[must_use]
    pub fn new(availability: Availability, cod_eligible: Option<bool>) -> Self {
        Self {
            availability,
            cod_eligible,
        }
    }

    /// Result for a check that could not be completed.
    #[must_use]
    pub fn unknown() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn available(cod_eligible: Option<bool>) -> Self {
        Self::new(Availability::Available, cod_eligible)
    }

    #[must_use]
    pub fn unavailable() -> Self {
        Self::new(Availability::Unavailable, None)
    }
}
