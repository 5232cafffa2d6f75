//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (local SQLite file, created on first use)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://telemetra.db?mode=rwc";

// =============================================================================
// HTTP
// =============================================================================

/// Status message returned by the root endpoint
pub const ROOT_MESSAGE: &str = "Telemetr-a-orchestrator funcionando 🚀";

/// Path of the generated OpenAPI document
pub const OPENAPI_PATH: &str = "/openapi.json";
