//! The delivery destination used for availability checks.

use std::fmt;

/// A delivery code (postal code, region code, ...).
///
/// The code is sensitive: `Display` and `Debug` render it masked. Use
/// [`Destination::expose`] only where the raw value has to go on the wire.
#[derive(Clone, PartialEq, Eq)]
pub struct Destination(String);

impl Destination {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_string())
    }

    /// The raw code.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// First and last character kept, everything between replaced by `*`.
    #[must_use]
    pub fn masked(&self) -> String {
        mask(&self.0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Mask a sensitive string for display.
#[must_use]
pub fn mask(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    match chars.len() {
        0 => String::new(),
        1 | 2 => "*".repeat(chars.len()),
        n => {
            let mut masked = String::with_capacity(n);
            masked.push(chars[0]);
            masked.extend(std::iter::repeat('*').take(n - 2));
            masked.push(chars[n - 1]);
            masked
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Destination").field(&self.masked()).finish()
    }
}
