use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth::model::AuthenticatedUser;
use crate::features::cells::{dtos as cells_dtos, handlers as cells_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Cells
        cells_handlers::list_cells,
        cells_handlers::create_cell,
        cells_handlers::update_cell,
        cells_handlers::delete_cell,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            AuthenticatedUser,
            // Cells
            cells_dtos::CreateCellDto,
            cells_dtos::UpdateCellDto,
            cells_dtos::CellResponseDto,
            ApiResponse<cells_dtos::CellResponseDto>,
            ApiResponse<Vec<cells_dtos::CellResponseDto>>,
        )
    ),
    tags(
        (name = "cells", description = "Cell site records"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Cells API",
        version = "0.1.0",
        description = "API documentation for the cell registry",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_documents_cell_routes() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/api/cells"));
        assert!(paths.contains_key("/api/cells/{cell_id}"));
    }

    #[test]
    fn test_info_modifier_overrides_title() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Site Registry".to_string(),
            version: "2.0.0".to_string(),
            description: "custom".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Site Registry");
        assert_eq!(doc.info.version, "2.0.0");
        assert_eq!(doc.info.description.as_deref(), Some("custom"));
    }
}
