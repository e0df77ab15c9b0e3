//! Side enum naming the two entry lists.

use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// One of the two entry lists of a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Pros.
    Supporting,
    /// Cons.
    Opposing,
}

impl Side {
    /// Returns both sides, supporting first.
    pub fn all() -> &'static [Side] {
        &[Side::Supporting, Side::Opposing]
    }

    /// Returns the short label used in the terminal front end.
    pub fn short_name(&self) -> &'static str {
        match self {
            Side::Supporting => "pro",
            Side::Opposing => "con",
        }
    }

    /// Returns the plural heading for the list.
    pub fn display_name(&self) -> &'static str {
        match self {
            Side::Supporting => "Pros",
            Side::Opposing => "Cons",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Side {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pro" | "pros" | "supporting" | "for" => Ok(Side::Supporting),
            "con" | "cons" | "opposing" | "against" => Ok(Side::Opposing),
            other => Err(ValidationError::invalid_format(
                "side",
                format!("expected 'pro' or 'con', got '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_names() {
        assert_eq!("pro".parse::<Side>().unwrap(), Side::Supporting);
        assert_eq!("Cons".parse::<Side>().unwrap(), Side::Opposing);
        assert_eq!("supporting".parse::<Side>().unwrap(), Side::Supporting);
        assert_eq!(" against ".parse::<Side>().unwrap(), Side::Opposing);
    }

    #[test]
    fn rejects_unknown_side() {
        assert!("maybe".parse::<Side>().is_err());
    }

    #[test]
    fn displays_plural_heading() {
        assert_eq!(Side::Supporting.to_string(), "Pros");
        assert_eq!(Side::Opposing.to_string(), "Cons");
    }
}
