//! How a multi-crate move treats the order of the relocated block

use std::fmt;
use std::str::FromStr;

/// Move policy, fixed for a whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MovePolicy {
    /// Crates are moved one at a time; the block arrives reversed
    #[default]
    SingleCrateAtATime,
    /// The block is lifted at once and keeps its order
    BulkPreserveOrder,
}

impl MovePolicy {
    pub const ALL: [MovePolicy; 2] = [MovePolicy::SingleCrateAtATime, MovePolicy::BulkPreserveOrder];

    /// Short name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            MovePolicy::SingleCrateAtATime => "single",
            MovePolicy::BulkPreserveOrder => "bulk",
        }
    }
}

impl fmt::Display for MovePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MovePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" | "9000" => Ok(MovePolicy::SingleCrateAtATime),
            "bulk" | "9001" => Ok(MovePolicy::BulkPreserveOrder),
            other => Err(format!(
                "unknown move policy '{}', expected 'single' (9000) or 'bulk' (9001)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_names_round_trip() {
        for policy in MovePolicy::ALL {
            assert_eq!(policy.name().parse::<MovePolicy>(), Ok(policy));
        }
        assert_eq!("9001".parse::<MovePolicy>(), Ok(MovePolicy::BulkPreserveOrder));
        assert_eq!("Single".parse::<MovePolicy>(), Ok(MovePolicy::SingleCrateAtATime));
        assert!("crane".parse::<MovePolicy>().is_err());
    }
}
