use serde::{Deserialize, Serialize};

/// Difficulty tier derived solely from a recipe's cook time in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// 20 minutes or less is Easy, 45 or less is Medium, anything longer is
    /// Hard. Both boundaries are inclusive of the lower tier.
    pub fn from_minutes(minutes: i64) -> Self {
        if minutes <= 20 {
            Difficulty::Easy
        } else if minutes <= 45 {
            Difficulty::Medium
        } else {
            Difficulty::Hard
        }
    }
}
