use pk_core::Points;
use pk_core::Score;
use std::cmp::Ordering;

/// Direction in which round points move a player's total.
///
/// - `Add` — penalty points accumulate, lower totals are better
/// - `Subtract` — points are deducted from zero, higher totals are better
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Sign {
    #[default]
    Add,
    Subtract,
}

impl Sign {
    /// Applies one round's points to a running total.
    pub fn apply(&self, total: Score, points: Points) -> Score {
        match self {
            Self::Add => total.saturating_add(Score::from(points)),
            Self::Subtract => total.saturating_sub(Score::from(points)),
        }
    }
    /// Orders two totals so that the better one sorts first.
    pub fn rank(&self, a: Score, b: Score) -> Ordering {
        match self {
            Self::Add => a.cmp(&b),
            Self::Subtract => b.cmp(&a),
        }
    }
}

impl TryFrom<&str> for Sign {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "add" | "+" => Ok(Self::Add),
            "subtract" | "sub" | "-" => Ok(Self::Subtract),
            _ => Err(anyhow::anyhow!("invalid sign {:?}, expected add or subtract", s)),
        }
    }
}

impl std::str::FromStr for Sign {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Subtract => write!(f, "subtract"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_accumulates() {
        assert_eq!(Sign::Add.apply(10, 5), 15);
    }

    #[test]
    fn subtract_goes_negative() {
        assert_eq!(Sign::Subtract.apply(0, 25), -25);
        assert_eq!(Sign::Subtract.apply(-25, 5), -30);
    }

    #[test]
    fn apply_saturates() {
        assert_eq!(Sign::Add.apply(Score::MAX, 1), Score::MAX);
        assert_eq!(Sign::Subtract.apply(Score::MIN, 1), Score::MIN);
    }

    #[test]
    fn rank_prefers_smaller_penalty() {
        assert_eq!(Sign::Add.rank(5, 20), Ordering::Less);
        assert_eq!(Sign::Subtract.rank(-5, -20), Ordering::Less);
    }

    #[test]
    fn parse() {
        assert_eq!(Sign::try_from("Add").unwrap(), Sign::Add);
        assert_eq!("subtract".parse::<Sign>().unwrap(), Sign::Subtract);
        assert_eq!(Sign::try_from("-").unwrap(), Sign::Subtract);
        assert!(Sign::try_from("multiply").is_err());
        assert_eq!(Sign::Subtract.to_string(), "subtract");
    }
}
