//! OpenAPI document and interactive documentation pages.
//!
//! - `/openapi.json`: the generated OpenAPI 3 document
//! - `/docs`: Swagger UI
//! - `/redoc`: ReDoc

use axum::{response::Html, routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{self, HealthResponse};
use crate::error::ErrorBody;

/// Path of the generated OpenAPI document.
pub const OPENAPI_URL: &str = "/openapi.json";
/// Swagger UI mount point.
pub const SWAGGER_URL: &str = "/docs";
/// ReDoc mount point.
pub const REDOC_URL: &str = "/redoc";

/// OpenAPI description of the service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wuloye AI Service",
        description = "Microservice for AI/ML features",
        version = "0.1.0"
    ),
    paths(handlers::health),
    components(schemas(HealthResponse, ErrorBody)),
    tags((name = "Health", description = "Service liveness"))
)]
pub struct ApiDoc;

/// Render the ReDoc page for the document served at [`OPENAPI_URL`].
pub fn redoc_html(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>{title} - ReDoc</title>
    <meta charset="utf-8"/>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>body {{ margin: 0; padding: 0; }}</style>
  </head>
  <body>
    <redoc spec-url="{spec_url}"></redoc>
    <script src="https://cdn.jsdelivr.net/npm/redoc@2/bundles/redoc.standalone.js"></script>
  </body>
</html>
"#,
        title = title,
        spec_url = OPENAPI_URL,
    )
}

async fn redoc() -> Html<String> {
    Html(redoc_html(&ApiDoc::openapi().info.title))
}

/// Routes serving the OpenAPI document, Swagger UI and ReDoc.
pub fn docs_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .merge(SwaggerUi::new(SWAGGER_URL).url(OPENAPI_URL, ApiDoc::openapi()))
        .route(REDOC_URL, get(redoc))
}
