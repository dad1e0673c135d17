pub mod assessment_dto;

pub use assessment_dto::{AnalyzeRequestDto, AnalyzeResponseDto, AssessmentResponseDto};
