//! Contact Service - validation only, nothing is stored or mailed

use validator::Validate;

use crate::core::error::Result;
use crate::features::contact::dtos::ContactRequestDto;
use crate::shared::constants::CONTACT_SUCCESS_MESSAGE;
use crate::shared::flash::Flash;

/// Service accepting contact form messages
#[derive(Debug, Default)]
pub struct ContactService;

impl ContactService {
    pub fn new() -> Self {
        Self
    }

    /// Validate a submission and produce the notice to show next
    pub fn submit(&self, dto: ContactRequestDto) -> Result<Flash> {
        dto.validate()?;

        let email = dto.email.trim();
        let domain = email.rsplit_once('@').map(|(_, d)| d).unwrap_or_default();
        tracing::info!(
            "Contact message accepted: email_domain={}, message_length={}",
            domain,
            dto.message.trim().chars().count()
        );

        Ok(Flash::success(CONTACT_SUCCESS_MESSAGE))
    }
}
