//! Well-known shared state keys written by earlier nodes in a tree.

/// The username collected for the current attempt.
pub const USERNAME: &str = "username";

/// The realm the attempt authenticates against.
pub const REALM: &str = "realm";

/// The authentication level reached so far.
pub const AUTH_LEVEL: &str = "authLevel";
