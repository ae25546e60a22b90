//! OpenAPI document for the HTTP surface.

use utoipa::OpenApi;

use super::handlers::{system, webhook};

/// Generated OpenAPI 3 description of every endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "webhook-recorder",
        description = "Records GitHub push, pull request and merge webhooks"
    ),
    paths(
        webhook::receive_webhook,
        webhook::list_events,
        webhook::list_records,
        system::health_handler,
    ),
    tags(
        (name = "Webhook", description = "GitHub webhook ingestion and activity feed"),
        (name = "System", description = "Service status"),
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/swagger-ui`, serving the document at
/// `/api-docs/openapi.json`.
#[cfg(feature = "swagger-ui")]
#[must_use]
pub fn swagger_ui() -> utoipa_swagger_ui::SwaggerUi {
    utoipa_swagger_ui::SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_webhook_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/webhook/receiver"));
        assert!(doc.paths.paths.contains_key("/webhook/"));
        assert!(doc.paths.paths.contains_key("/webhook/records"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
