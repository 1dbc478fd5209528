use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::flash::Flash;

/// Response DTO for the home page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HomeResponseDto {
    /// Notice left by the previous request; returned once
    pub flash: Option<Flash>,
}

/// Response DTO for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardResponseDto {
    pub title: String,
}
