use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

pub const DIFFICULTY_MIN: i32 = 1;
pub const DIFFICULTY_MAX: i32 = 5;

/// Question difficulty on a 1 (easiest) to 5 (hardest) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DifficultyLevel(i32);

impl DifficultyLevel {
    pub fn new(raw: i32) -> AppResult<Self> {
        if !(DIFFICULTY_MIN..=DIFFICULTY_MAX).contains(&raw) {
            return Err(AppError::DomainValidation(format!(
                "Difficulty level must be between {} and {}",
                DIFFICULTY_MIN, DIFFICULTY_MAX
            )));
        }
        Ok(Self(raw))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_accepted() {
        assert_eq!(DifficultyLevel::new(1).unwrap().value(), 1);
        assert_eq!(DifficultyLevel::new(5).unwrap().value(), 5);
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(matches!(
            DifficultyLevel::new(0),
            Err(AppError::DomainValidation(_))
        ));
        assert!(DifficultyLevel::new(6).is_err());
        assert!(DifficultyLevel::new(-1).is_err());
    }
}
