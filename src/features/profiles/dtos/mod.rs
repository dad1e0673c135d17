pub mod profile_dto;

pub use profile_dto::{ProfileResponseDto, ProfileStatsDto, UpsertProfileDto};
