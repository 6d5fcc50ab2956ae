/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Match, team, and event mutations.
pub mod match_service;
/// Server-Sent Events broadcasting service.
pub mod sse_service;
/// Theme management operations.
pub mod theme_service;
/// Match clock control operations.
pub mod timer_service;
