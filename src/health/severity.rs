// src/health/severity.rs
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Health verdict reported by an endpoint, or reached by a check cycle.
///
/// Ordered by ascending concern: `Ok < Warning < Error < ConnectionProblem`.
/// The order comes from [`Severity::rank`], not from declaration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// No error reported.
    #[default]
    Ok,
    /// Something needs to be looked at.
    Warning,
    /// Must be looked at immediately.
    Error,
    /// The reporting server could not be reached or said something we
    /// could not understand.
    ConnectionProblem,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Ok,
        Severity::Warning,
        Severity::Error,
        Severity::ConnectionProblem,
    ];

    pub fn rank(self) -> u8 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
            Severity::ConnectionProblem => 3,
        }
    }

    /// Maps the `state` string of an endpoint response.
    ///
    /// Anything outside the lexicon is as bad as no answer at all.
    pub fn from_state(state: &str) -> Self {
        match state {
            "Ok" => Severity::Ok,
            "Warning" => Severity::Warning,
            "Error" => Severity::Error,
            _ => Severity::ConnectionProblem,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Ok => "Ok",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::ConnectionProblem => "ConnectionProblem",
        }
    }

    /// The more severe of the two.
    pub fn worst(self, other: Severity) -> Severity {
        std::cmp::max(self, other)
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_order() {
        assert!(Severity::Ok < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::ConnectionProblem);

        for (i, a) in Severity::ALL.iter().enumerate() {
            for (j, b) in Severity::ALL.iter().enumerate() {
                assert_eq!(a.cmp(b), i.cmp(&j), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_worst_is_commutative() {
        for a in Severity::ALL {
            for b in Severity::ALL {
                assert_eq!(a.worst(b), b.worst(a));
                assert!(a.worst(b) >= a && a.worst(b) >= b);
            }
        }
    }

    #[test]
    fn test_state_lexicon() {
        assert_eq!(Severity::from_state("Ok"), Severity::Ok);
        assert_eq!(Severity::from_state("Warning"), Severity::Warning);
        assert_eq!(Severity::from_state("Error"), Severity::Error);
        assert_eq!(Severity::from_state("ok"), Severity::ConnectionProblem);
        assert_eq!(Severity::from_state(""), Severity::ConnectionProblem);
        assert_eq!(Severity::from_state("Critical"), Severity::ConnectionProblem);
    }

    #[test]
    fn test_default_is_ok() {
        assert_eq!(Severity::default(), Severity::Ok);
    }

    #[test]
    fn test_serializes_as_name() {
        let json = serde_json::to_string(&Severity::ConnectionProblem).unwrap();
        assert_eq!(json, "\"ConnectionProblem\"");
    }
}
