mod challenge;
mod user_challenge;

pub use challenge::{Challenge, ChallengeDifficulty};
pub use user_challenge::{UserChallenge, UserChallengeStatus};
