pub mod challenge_dto;

pub use challenge_dto::{
    ChallengeDetailDto, ChallengeMembershipDto, ChallengeResponseDto, CreateChallengeDto,
    MyChallengeDto, SubmitChallengeDto,
};
