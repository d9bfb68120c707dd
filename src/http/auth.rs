use base64::Engine as _;
use reqwest::RequestBuilder;

use crate::model::AuthScheme;

/// Value of the `Authorization` header for a test case, if one applies.
///
/// Bearer tokens travel in the user column. Basic requires both user and
/// password and encodes `user:password` as standard base64.
#[must_use]
pub fn authorization_value(scheme: AuthScheme, user: &str, password: &str) -> Option<String> {
    match scheme {
        AuthScheme::Bearer if !user.is_empty() => Some(format!("Bearer {}", user)),
        AuthScheme::Basic if !user.is_empty() && !password.is_empty() => {
            let token = format!("{}:{}", user, password);
            let encoded = base64::engine::general_purpose::STANDARD.encode(token.as_bytes());
            Some(format!("Basic {}", encoded))
        }
        AuthScheme::Bearer | AuthScheme::Basic | AuthScheme::None => None,
    }
}

pub(super) fn apply_auth_header(
    builder: RequestBuilder,
    scheme: AuthScheme,
    user: &str,
    password: &str,
) -> RequestBuilder {
    match authorization_value(scheme, user, password) {
        Some(value) => builder.header("Authorization", value),
        None => builder,
    }
}
