mod challenge_service;

pub use challenge_service::ChallengeService;
