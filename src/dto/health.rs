use serde::Serialize;
use utoipa::ToSchema;

const HEALTHY: &str = "ok";
const DEGRADED: &str = "degraded";

/// Body of `GET /healthcheck`.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `ok` while the store answers, `degraded` once it stops.
    #[schema(example = "ok")]
    pub status: &'static str,
}

impl HealthResponse {
    /// The store answered its ping.
    pub fn ok() -> Self {
        Self { status: HEALTHY }
    }

    /// The store ping failed; game routes will answer 500.
    pub fn degraded() -> Self {
        Self { status: DEGRADED }
    }
}
