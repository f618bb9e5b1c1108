//! Strategy selection.

use std::fmt;

use crate::types::StrategyRef;

/// Which strategies of a vault to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrategyCondition {
    /// Every strategy.
    #[default]
    All,
    /// Only strategies in the withdrawal queue.
    InQueue,
    /// Only strategies outside the withdrawal queue.
    NotInQueue,
}

impl StrategyCondition {
    /// Parse a caller-supplied condition.
    ///
    /// Only the exact spellings `inQueue` and `notInQueue` narrow the
    /// selection. Anything else, including a missing value, selects
    /// [`StrategyCondition::All`].
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        match raw {
            Some("inQueue") => Self::InQueue,
            Some("notInQueue") => Self::NotInQueue,
            _ => Self::All,
        }
    }

    /// Whether a strategy passes this condition.
    pub fn matches(&self, strategy: &StrategyRef) -> bool {
        match self {
            Self::All => true,
            Self::InQueue => strategy.in_queue,
            Self::NotInQueue => !strategy.in_queue,
        }
    }

    /// Select matching strategies, keeping their original order.
    pub fn apply<'a>(&self, strategies: &'a [StrategyRef]) -> Vec<&'a StrategyRef> {
        strategies.iter().filter(|s| self.matches(s)).collect()
    }

    /// The query parameter spelling of this condition.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::InQueue => "inQueue",
            Self::NotInQueue => "notInQueue",
        }
    }
}

impl fmt::Display for StrategyCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for StrategyCondition {
    fn from(raw: &str) -> Self {
        Self::parse_lenient(Some(raw))
    }
}
