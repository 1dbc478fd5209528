/// Maximum length of an email address (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum length of the local part of an email address
pub const MAX_EMAIL_LOCAL_PART_LENGTH: usize = 64;

// =============================================================================
// REDIRECT TARGETS
// =============================================================================

/// Where a successful contact submission lands
pub const HOME_PATH: &str = "/";

/// Where a successful registration lands
pub const DASHBOARD_PATH: &str = "/dashboard";

// =============================================================================
// FLASH
// =============================================================================

/// Cookie carrying the one-time flash notice
pub const FLASH_COOKIE: &str = "flash";

/// Lifetime of an unread flash cookie, in seconds
pub const FLASH_MAX_AGE_SECS: u64 = 300;

/// Flash notice shown after a contact submission
pub const CONTACT_SUCCESS_MESSAGE: &str = "Message sent!";

/// Top-level message on a failed validation response
pub const VALIDATION_FAILED_MESSAGE: &str = "The given data was invalid.";
