//! Endpoint identifiers understood by a response service

use std::fmt;

/// Which simulated backend call is being made
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Profile,
    Connection,
    Recommendation,
    Goal,
    /// Anything else; answered with the echo fallback
    Other(String),
}

impl Endpoint {
    /// The four endpoints with dedicated payloads
    pub const KNOWN: [Endpoint; 4] = [
        Endpoint::Profile,
        Endpoint::Connection,
        Endpoint::Recommendation,
        Endpoint::Goal,
    ];

    /// Parse an endpoint name
    ///
    /// Accepts the short names and the longer route-style aliases
    /// (`onboarding`, `bank-connection`, `portfolio-generation`, `goal-setting`).
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "profile" | "onboarding" => Self::Profile,
            "connection" | "bank-connection" | "bank_connection" => Self::Connection,
            "recommendation" | "portfolio" | "portfolio-generation" => Self::Recommendation,
            "goal" | "goals" | "goal-setting" => Self::Goal,
            _ => Self::Other(s.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Profile => "profile",
            Self::Connection => "connection",
            Self::Recommendation => "recommendation",
            Self::Goal => "goal",
            Self::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(Endpoint::parse("onboarding"), Endpoint::Profile);
        assert_eq!(Endpoint::parse("bank-connection"), Endpoint::Connection);
        assert_eq!(Endpoint::parse("portfolio-generation"), Endpoint::Recommendation);
        assert_eq!(Endpoint::parse("Goal-Setting"), Endpoint::Goal);
    }

    #[test]
    fn test_known_names_round_trip() {
        for endpoint in Endpoint::KNOWN {
            assert_eq!(Endpoint::parse(endpoint.as_str()), endpoint);
            assert!(endpoint.is_known());
        }
    }

    #[test]
    fn test_unknown_endpoint() {
        let endpoint = Endpoint::parse(" newsletter ");
        assert_eq!(endpoint, Endpoint::Other("newsletter".into()));
        assert_eq!(endpoint.to_string(), "newsletter");
        assert!(!endpoint.is_known());
    }
}
