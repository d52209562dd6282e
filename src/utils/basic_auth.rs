use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Builds the value of an `Authorization` header for HTTP basic auth.
///
/// The credentials are joined as `username:password` and base64 encoded with
/// the standard alphabet, e.g. `("u", "p")` becomes `Basic dTpw`.
pub fn basic_auth_encoding(username: &str, password: &str) -> String {
    let user_password = format!("{username}:{password}");
    format!("Basic {}", STANDARD.encode(user_password.as_bytes()))
}
