//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default scheme used when building absolute links
pub const DEFAULT_PUBLIC_SCHEME: &str = "http";

/// Default authority used when the request carries no Host header
pub const DEFAULT_PUBLIC_HOST: &str = "localhost:8080";

/// Prefix every API route is mounted under
pub const API_PREFIX: &str = "/api";

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// PAGINATION
// =============================================================================

/// Page number used when the query omits one
pub const DEFAULT_PAGE_NUMBER: u32 = 1;

/// Page size used when the query omits one
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page a client may request
pub const MAX_PAGE_SIZE: u32 = 20;

/// Reported in place of real totals; stores do not expose a count yet
pub const PLACEHOLDER_TOTAL: u64 = 1;

// =============================================================================
// HTTP
// =============================================================================

/// Header carrying the serialized pagination metadata
pub const PAGINATION_HEADER: &str = "x-pagination";

/// Methods advertised on the user collection
pub const COLLECTION_METHODS: &[&str] = &["POST", "GET", "OPTIONS"];

// =============================================================================
// USER FIELDS
// =============================================================================

/// Wire names of the user representation
pub mod fields {
    pub const ID: &str = "id";
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const LOGIN: &str = "login";
}
