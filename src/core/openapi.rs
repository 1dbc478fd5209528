use utoipa::{Modify, OpenApi};

use crate::features::contact::{dtos as contact_dtos, handlers as contact_handlers};
use crate::features::pages::{dtos as pages_dtos, handlers as pages_handlers};
use crate::features::registration::{dtos as registration_dtos, handlers as registration_handlers};
use crate::shared::flash::{Flash, FlashLevel};
use crate::shared::types::{ApiResponse, Meta};
use crate::shared::validation::FieldErrors;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Contact (public)
        contact_handlers::submit_contact,
        // Registration (public)
        registration_handlers::register,
        // Pages (public)
        pages_handlers::home,
        pages_handlers::dashboard,
    ),
    components(
        schemas(
            // Shared
            Meta,
            FieldErrors,
            Flash,
            FlashLevel,
            // Contact
            contact_dtos::ContactRequestDto,
            // Registration
            registration_dtos::RegisterRequestDto,
            // Pages
            pages_dtos::HomeResponseDto,
            pages_dtos::DashboardResponseDto,
            ApiResponse<pages_dtos::HomeResponseDto>,
            ApiResponse<pages_dtos::DashboardResponseDto>,
        )
    ),
    tags(
        (name = "contact", description = "Contact form submissions"),
        (name = "registration", description = "User sign-up"),
        (name = "pages", description = "Redirect targets")
    ),
    info(
        title = "Portal API",
        version = "0.1.0",
        description = "Contact form and user registration",
    )
)]
pub struct ApiDoc;

/// Overrides the OpenAPI info block from configuration
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
