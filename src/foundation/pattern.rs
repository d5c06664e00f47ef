//! Patterns matched against an element's string form.

use crate::foundation::error::Result;
use core::fmt;
use core::str::FromStr;
use regex::Regex;

/// A compiled pattern tested against the `Display` form of an element.
///
/// Matching is an unanchored search, so `"ab"` matches `"cab"`.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compiles a regular expression.
    pub fn new(source: &str) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(source)?,
        })
    }

    /// Builds a pattern matching `text` literally.
    pub fn literal(text: &str) -> Result<Self> {
        Self::new(&regex::escape(text))
    }

    /// Returns the pattern source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Tests a string directly.
    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Tests the string form of `item`.
    pub fn matches<T: fmt::Display + ?Sized>(&self, item: &T) -> bool {
        self.regex.is_match(&item.to_string())
    }
}

impl FromStr for Pattern {
    type Err = crate::foundation::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.regex.as_str())
    }
}
