/// Linkin Crypto Library
///
/// Session handling for the admin surface:
/// - `session`: the unsigned base64(JSON) token the browser scripts read back
/// - `credentials`: password hashing and verification
/// - `secure`: HS256-signed claims, the replacement for the unsigned token

pub mod credentials;
pub mod secure;
pub mod session;
