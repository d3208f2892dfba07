use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

pub const MAX_SCORE_MIN: i32 = 1;
pub const MAX_SCORE_MAX: i32 = 10;

/// Maximum score awardable for a question, 1 to 10 points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaxScore(i32);

impl MaxScore {
    pub fn new(raw: i32) -> AppResult<Self> {
        if !(MAX_SCORE_MIN..=MAX_SCORE_MAX).contains(&raw) {
            return Err(AppError::DomainValidation(format!(
                "Max score must be between {} and {}",
                MAX_SCORE_MIN, MAX_SCORE_MAX
            )));
        }
        Ok(Self(raw))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for MaxScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_accepted() {
        assert_eq!(MaxScore::new(1).unwrap().value(), 1);
        assert_eq!(MaxScore::new(10).unwrap().value(), 10);
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(MaxScore::new(0).is_err());
        assert!(MaxScore::new(11).is_err());
    }
}
