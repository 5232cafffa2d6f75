use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message-only response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Telemetr-a-orchestrator funcionando 🚀")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
