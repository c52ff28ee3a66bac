//! Caller authentication for protected cell endpoints.
//!
//! Access tokens are RS256 JWTs issued by an external OIDC provider. Signing
//! keys come from the provider's JWKS endpoint and are cached for
//! `JWKS_CACHE_TTL` seconds.

mod jwks;
mod validator;

pub mod model;

pub use jwks::JwksClient;
pub use validator::JwtValidator;
