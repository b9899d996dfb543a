use std::collections::HashMap;
use std::convert::Infallible;

use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Query, Request},
    http::{header, request::Parts, HeaderMap, Uri},
    response::{IntoResponse, Response},
    Json,
};
use cookie::Cookie;
use serde::de::DeserializeOwned;

use crate::core::error::AppError;
use crate::features::i18n::Locale;
use crate::shared::constants::UNKNOWN_CLIENT_IP;

/// Cookie holding the visitor's persisted language choice
pub const LANGUAGE_COOKIE: &str = "language";

/// Custom JSON extractor that provides consistent error responses
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection(rejection)),
        }
    }
}

pub struct AppJsonRejection(JsonRejection);

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        let message = match self.0 {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err),
            JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
            JsonRejection::MissingJsonContentType(err) => {
                format!("Missing JSON content type: {}", err)
            }
            _ => "Failed to parse JSON body".to_string(),
        };

        AppError::BadRequest(message).into_response()
    }
}

/// Submitter origin as reported by the proxy in front of the service.
///
/// Stored alongside submissions for spam bookkeeping only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub String);

impl ClientIp {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let ip = ["x-forwarded-for", "x-real-ip"]
            .iter()
            .filter_map(|name| headers.get(*name))
            .filter_map(|value| value.to_str().ok())
            .map(str::trim)
            .find(|value| !value.is_empty())
            .unwrap_or(UNKNOWN_CLIENT_IP);

        ClientIp(ip.to_string())
    }
}

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(ClientIp::from_headers(&parts.headers))
    }
}

/// Locale requested by the caller: `lang` query parameter first, then the
/// `language` cookie. Unsupported values count as no preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreferredLocale(pub Option<Locale>);

impl PreferredLocale {
    pub fn from_request(uri: &Uri, headers: &HeaderMap) -> Self {
        let from_query = Query::<HashMap<String, String>>::try_from_uri(uri)
            .ok()
            .and_then(|Query(params)| params.get("lang").and_then(|v| v.parse().ok()));

        let from_cookie = || {
            headers
                .get_all(header::COOKIE)
                .iter()
                .filter_map(|value| value.to_str().ok())
                .flat_map(|cookies| Cookie::split_parse(cookies))
                .filter_map(|cookie| cookie.ok())
                .find(|cookie| cookie.name() == LANGUAGE_COOKIE)
                .and_then(|cookie| cookie.value_trimmed().parse().ok())
        };

        PreferredLocale(from_query.or_else(from_cookie))
    }
}

impl<S> FromRequestParts<S> for PreferredLocale
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(PreferredLocale::from_request(&parts.uri, &parts.headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_client_ip_prefers_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("203.0.113.7"));
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.1"));
        assert_eq!(ClientIp::from_headers(&headers).0, "203.0.113.7");
    }

    #[test]
    fn test_client_ip_falls_back_to_real_ip() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static(""));
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.1"));
        assert_eq!(ClientIp::from_headers(&headers).0, "198.51.100.1");
    }

    #[test]
    fn test_client_ip_defaults_to_unknown() {
        assert_eq!(ClientIp::from_headers(&HeaderMap::new()).0, "unknown");
    }

    #[test]
    fn test_preferred_locale_query_wins_over_cookie() {
        let uri: Uri = "/api/i18n/translate?key=a&lang=vi".parse().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("language=en"));
        assert_eq!(
            PreferredLocale::from_request(&uri, &headers),
            PreferredLocale(Some(Locale::Vi))
        );
    }

    #[test]
    fn test_preferred_locale_reads_cookie() {
        let uri: Uri = "/api/i18n/translate?key=a".parse().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; language=vi"),
        );
        assert_eq!(
            PreferredLocale::from_request(&uri, &headers),
            PreferredLocale(Some(Locale::Vi))
        );
    }

    #[test]
    fn test_preferred_locale_reads_quoted_cookie() {
        let uri: Uri = "/api/i18n/translate?key=a".parse().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("language=\"vi\""));
        assert_eq!(
            PreferredLocale::from_request(&uri, &headers),
            PreferredLocale(Some(Locale::Vi))
        );
    }

    #[test]
    fn test_preferred_locale_skips_malformed_cookies() {
        let uri: Uri = "/api/i18n/translate?key=a".parse().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("=oops; language=vi"));
        assert_eq!(
            PreferredLocale::from_request(&uri, &headers),
            PreferredLocale(Some(Locale::Vi))
        );
    }

    #[test]
    fn test_preferred_locale_ignores_unsupported_values() {
        let uri: Uri = "/api/i18n/translate?key=a&lang=fr".parse().unwrap();
        assert_eq!(
            PreferredLocale::from_request(&uri, &HeaderMap::new()),
            PreferredLocale(None)
        );
    }
}
