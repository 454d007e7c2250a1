use base64::Engine as _;
use chrono::{DateTime, Utc};

use crate::error::AuthError;

/// Decode the JWT `exp` claim without signature validation.
///
/// Only used to show when the stored access credential expires; the backend
/// remains the authority and signals expiry with a 401.
///
/// # Errors
///
/// Returns `AuthError::Other` if the JWT format is invalid or the `exp` claim
/// is missing or cannot be parsed.
pub fn decode_expiry(jwt: &str) -> Result<DateTime<Utc>, AuthError> {
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::Other("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .map_err(|e| AuthError::Other(format!("base64 decode failed: {e}")))?;
    let value: serde_json::Value = serde_json::from_slice(&payload)
        .map_err(|e| AuthError::Other(format!("JSON parse failed: {e}")))?;
    let exp = value["exp"]
        .as_i64()
        .ok_or_else(|| AuthError::Other("missing exp claim".into()))?;
    DateTime::from_timestamp(exp, 0).ok_or_else(|| AuthError::Other("invalid exp timestamp".into()))
}

#[cfg(test)]
pub(crate) fn make_jwt_with_exp(exp: i64) -> String {
    let header = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#);
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .encode(format!(r#"{{"user_id":1,"token_type":"access","exp":{exp}}}"#));
    let signature = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode("fake_sig");
    format!("{header}.{payload}.{signature}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_expiry_valid_jwt() {
        let future_exp = Utc::now().timestamp() + 3600;
        let dt = decode_expiry(&make_jwt_with_exp(future_exp)).unwrap();
        assert_eq!(dt.timestamp(), future_exp);
    }

    #[test]
    fn decode_expiry_expired_jwt() {
        let past_exp = Utc::now().timestamp() - 3600;
        let dt = decode_expiry(&make_jwt_with_exp(past_exp)).unwrap();
        assert!(dt < Utc::now());
    }

    #[test]
    fn decode_expiry_invalid_format() {
        let err = decode_expiry("not-a-jwt").unwrap_err();
        assert!(err.to_string().contains("invalid JWT format"));
    }

    #[test]
    fn decode_expiry_missing_exp_claim() {
        let header = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#);
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"user_id":1}"#);
        let jwt = format!("{header}.{payload}.sig");
        let err = decode_expiry(&jwt).unwrap_err();
        assert!(err.to_string().contains("missing exp claim"));
    }

    #[test]
    fn decode_expiry_bad_base64() {
        let err = decode_expiry("header.!!!invalid!!!.signature").unwrap_err();
        assert!(err.to_string().contains("base64 decode failed"));
    }
}
