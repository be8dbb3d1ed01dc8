// Error domains and sentinel codes
// Shared identifiers other Rexxar components compare against

/// Namespace tag for HTTP-related errors.
pub const HTTP_ERROR_DOMAIN: &str = "rexxar.http";

/// User-info key under which the URL related to an error is stored.
pub const ERROR_USER_INFO_URL_KEY: &str = "rexxar.error.url";

/// Sentinel code for an HTTP "not found" response within
/// [`HTTP_ERROR_DOMAIN`]. Equal to the conventional HTTP status value.
pub const HTTP_RESPONSE_ERROR_NOT_FOUND: i64 = 404;
