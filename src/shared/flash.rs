//! One-time flash notices carried in a cookie.
//!
//! A handler returns a [`Flash`] as part of its response to set the notice.
//! The next page render extracts it with [`IncomingFlash`] and returns
//! [`ClearFlash`] so the notice is shown exactly once.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap, HeaderValue},
    response::{IntoResponseParts, ResponseParts},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::{FLASH_COOKIE, FLASH_MAX_AGE_SECS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Info => "info",
            FlashLevel::Warning => "warning",
            FlashLevel::Error => "error",
        }
    }
}

impl fmt::Display for FlashLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlashLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(FlashLevel::Success),
            "info" => Ok(FlashLevel::Info),
            "warning" => Ok(FlashLevel::Warning),
            "error" => Ok(FlashLevel::Error),
            other => Err(format!("Unknown flash level: {}", other)),
        }
    }
}

/// A notice for the next rendered response only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    fn encode(&self) -> String {
        urlencoding::encode(&format!("{}:{}", self.level, self.message)).into_owned()
    }

    fn decode(raw: &str) -> Option<Self> {
        let decoded = urlencoding::decode(raw).ok()?;
        let (level, message) = decoded.split_once(':')?;
        Some(Self {
            level: level.parse().ok()?,
            message: message.to_string(),
        })
    }

    fn set_cookie(&self) -> String {
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            FLASH_COOKIE,
            self.encode(),
            FLASH_MAX_AGE_SECS
        )
    }

    /// Reads the flash cookie out of request headers, ignoring malformed values
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == FLASH_COOKIE)
            .and_then(|(_, raw)| Self::decode(raw))
    }
}

impl IntoResponseParts for Flash {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        // Percent-encoding keeps the value within visible ASCII
        if let Ok(value) = HeaderValue::from_str(&self.set_cookie()) {
            res.headers_mut().append(header::SET_COOKIE, value);
        }
        Ok(res)
    }
}

/// Expires the flash cookie once it has been read
#[derive(Debug, Clone, Copy)]
pub struct ClearFlash;

impl IntoResponseParts for ClearFlash {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        let cookie = format!(
            "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
            FLASH_COOKIE
        );
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            res.headers_mut().append(header::SET_COOKIE, value);
        }
        Ok(res)
    }
}

/// The flash notice sent by the client, if any
#[derive(Debug, Clone)]
pub struct IncomingFlash(pub Option<Flash>);

impl<S> FromRequestParts<S> for IncomingFlash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(Flash::from_headers(&parts.headers)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_cookie(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn test_cookie_value_is_percent_encoded() {
        let cookie = Flash::success("Message sent!").set_cookie();
        assert!(cookie.starts_with("flash=success%3AMessage%20sent%21;"));
        assert!(cookie.contains("Max-Age=300"));
        assert!(cookie.contains("HttpOnly"));
    }

    #[test]
    fn test_reads_flash_among_other_cookies() {
        let encoded = Flash::success("Message sent!").encode();
        let headers = headers_with_cookie(&format!("theme=dark; flash={}; lang=en", encoded));

        let flash = Flash::from_headers(&headers).unwrap();
        assert_eq!(flash.level, FlashLevel::Success);
        assert_eq!(flash.message, "Message sent!");
    }

    #[test]
    fn test_message_may_contain_colons() {
        let original = Flash {
            level: FlashLevel::Info,
            message: "Note: see you at 10:30".to_string(),
        };
        let headers = headers_with_cookie(&format!("flash={}", original.encode()));
        assert_eq!(Flash::from_headers(&headers), Some(original));
    }

    #[test]
    fn test_malformed_flash_is_ignored() {
        assert_eq!(Flash::from_headers(&HeaderMap::new()), None);
        assert_eq!(Flash::from_headers(&headers_with_cookie("flash=")), None);
        assert_eq!(
            Flash::from_headers(&headers_with_cookie("flash=shout%3Ahello")),
            None
        );
        assert_eq!(Flash::from_headers(&headers_with_cookie("other=1")), None);
    }

    #[test]
    fn test_level_round_trips_through_str() {
        for level in [
            FlashLevel::Success,
            FlashLevel::Info,
            FlashLevel::Warning,
            FlashLevel::Error,
        ] {
            assert_eq!(level.as_str().parse::<FlashLevel>(), Ok(level));
        }
        assert!("loud".parse::<FlashLevel>().is_err());
    }
}
