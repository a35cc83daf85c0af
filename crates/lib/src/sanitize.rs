//! Redaction of secrets from error messages and logs.
//!
//! RPC endpoints frequently carry credentials (basic auth or an `api-key` query
//! parameter) and secret keys travel as JSON byte arrays, so both can end up in
//! a transport or parse error. Everything that leaves the library as a
//! [`VerifierError`](crate::error::VerifierError) message goes through here.

use regex::Regex;
use std::sync::LazyLock;

static URL_WITH_CREDENTIALS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-z][a-z0-9+.-]*://[^:@\s/]+:[^@\s]+@[^\s]+")
        .expect("Failed to create url regex pattern")
});

static API_KEY_PARAM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(api[-_]?key|token)=[^&\s]+").expect("Failed to create api key regex pattern")
});

// 16+ comma separated small integers: the shape of a serialized secret key
static BYTE_ARRAY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\s*(?:\d{1,3}\s*,\s*){15,}\d{1,3}\s*\]")
        .expect("Failed to create byte array regex pattern")
});

static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:0x)?[0-9a-fA-F]{32,}").expect("Failed to create hex regex pattern")
});

pub fn sanitize_message(message: &str) -> String {
    let mut result = URL_WITH_CREDENTIALS_PATTERN.replace_all(message, "[REDACTED_URL]").to_string();
    result = API_KEY_PARAM_PATTERN.replace_all(&result, "$1=[REDACTED]").to_string();
    result = BYTE_ARRAY_PATTERN.replace_all(&result, "[REDACTED_BYTES]").to_string();
    result = HEX_PATTERN.replace_all(&result, "[REDACTED_HEX]").to_string();
    result
}

/// Formats an error for inclusion in a [`VerifierError`](crate::error::VerifierError).
///
/// Redacts unless the `unsafe-debug` feature is enabled.
#[macro_export]
macro_rules! sanitize_error {
    ($error:expr) => {{
        #[cfg(feature = "unsafe-debug")]
        {
            format!("{}", $error)
        }
        #[cfg(not(feature = "unsafe-debug"))]
        {
            $crate::sanitize::sanitize_message(&format!("{}", $error))
        }
    }};
}
