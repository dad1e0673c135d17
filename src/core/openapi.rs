use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::assessments::{
    dtos as assessments_dtos, handlers as assessments_handlers, models as assessments_models,
};
use crate::features::challenges::{
    dtos as challenges_dtos, handlers as challenges_handlers, models as challenges_models,
};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::media::{
    dtos as media_dtos, handlers as media_handlers, models as media_models,
};
use crate::features::profiles::{dtos as profiles_dtos, handlers as profiles_handlers};
use crate::shared::scoring::ScoreBand;
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Profiles
        profiles_handlers::get_profile,
        profiles_handlers::upsert_profile,
        profiles_handlers::get_profile_stats,
        // Media
        media_handlers::upload_media,
        media_handlers::list_media,
        media_handlers::get_media,
        media_handlers::delete_media,
        media_handlers::list_media_assessments,
        // Assessments
        assessments_handlers::analyze,
        assessments_handlers::list_assessments,
        assessments_handlers::get_assessment,
        // Challenges
        challenges_handlers::list_challenges,
        challenges_handlers::my_challenges,
        challenges_handlers::get_challenge,
        challenges_handlers::join_challenge,
        challenges_handlers::submit_challenge,
        // Challenges (admin)
        challenges_handlers::create_challenge,
        challenges_handlers::list_all_challenges,
        challenges_handlers::delete_challenge,
        // Dashboard
        dashboard_handlers::get_stats,
        dashboard_handlers::get_activity,
        dashboard_handlers::get_insights,
    ),
    components(
        schemas(
            // Shared
            Meta,
            ScoreBand,
            // Profiles
            profiles_dtos::UpsertProfileDto,
            profiles_dtos::ProfileResponseDto,
            profiles_dtos::ProfileStatsDto,
            ApiResponse<profiles_dtos::ProfileResponseDto>,
            ApiResponse<profiles_dtos::ProfileStatsDto>,
            // Media
            media_models::MediaType,
            media_dtos::UploadMediaDto,
            media_dtos::MediaUploadedDto,
            media_dtos::MediaResponseDto,
            ApiResponse<media_dtos::MediaUploadedDto>,
            ApiResponse<media_dtos::MediaResponseDto>,
            ApiResponse<Vec<media_dtos::MediaResponseDto>>,
            // Assessments
            assessments_models::AnalysisResults,
            assessments_models::CategoryAnalysis,
            assessments_models::PerformanceAnalysis,
            assessments_models::KeyPoint,
            assessments_models::PerformanceMetric,
            assessments_models::MetricTrend,
            assessments_dtos::AnalyzeRequestDto,
            assessments_dtos::AnalyzeResponseDto,
            assessments_dtos::AssessmentResponseDto,
            ApiResponse<assessments_dtos::AssessmentResponseDto>,
            ApiResponse<Vec<assessments_dtos::AssessmentResponseDto>>,
            // Challenges
            challenges_models::ChallengeDifficulty,
            challenges_models::UserChallengeStatus,
            challenges_dtos::CreateChallengeDto,
            challenges_dtos::SubmitChallengeDto,
            challenges_dtos::ChallengeResponseDto,
            challenges_dtos::ChallengeDetailDto,
            challenges_dtos::ChallengeMembershipDto,
            challenges_dtos::MyChallengeDto,
            ApiResponse<challenges_dtos::ChallengeResponseDto>,
            ApiResponse<Vec<challenges_dtos::ChallengeResponseDto>>,
            ApiResponse<challenges_dtos::ChallengeDetailDto>,
            ApiResponse<challenges_dtos::ChallengeMembershipDto>,
            ApiResponse<Vec<challenges_dtos::MyChallengeDto>>,
            // Dashboard
            dashboard_dtos::ActivityType,
            dashboard_dtos::DashboardStatsDto,
            dashboard_dtos::ActivityItemDto,
            dashboard_dtos::InsightsDto,
            ApiResponse<dashboard_dtos::DashboardStatsDto>,
            ApiResponse<Vec<dashboard_dtos::ActivityItemDto>>,
            ApiResponse<dashboard_dtos::InsightsDto>,
        )
    ),
    tags(
        (name = "profiles", description = "Athlete profile management"),
        (name = "media", description = "Training video and image uploads"),
        (name = "assessments", description = "AI movement analysis"),
        (name = "challenges", description = "Challenges and memberships"),
        (name = "dashboard", description = "Per-athlete dashboard aggregates"),
        (name = "admin", description = "Challenge authoring (admin only)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "SportsHub API",
        version = "0.1.0",
        description = "API documentation for SportsHub",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to the OpenAPI document
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
