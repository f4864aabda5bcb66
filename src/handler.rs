//! The route that serves the generated Swagger document.

use crate::config::SwaggerConfig;
use crate::document_assembler::DocumentAssembler;
use crate::environment::ServerEnvironment;
use crate::registry::RouteRegistry;
use log::{debug, warn};
use serde_json::{json, Value};

/// Handle returned by [`RouteRegistry::add_swagger`].
///
/// Every call to [`SwaggerRoute::respond`] regenerates the document from the registry as it
/// is at that moment; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwaggerRoute {
    reserved_path: String,
}

impl SwaggerRoute {
    /// Creates a handle serving the document from `reserved_path`
    pub fn new(reserved_path: impl Into<String>) -> Self {
        Self {
            reserved_path: reserved_path.into(),
        }
    }

    /// Path the document is served from, excluded from its own output
    pub fn reserved_path(&self) -> &str {
        &self.reserved_path
    }

    /// Produce the response body for a `GET` on the reserved path.
    ///
    /// A missing configuration is reported in the body as `{"error": "..."}` rather than as
    /// a failure.
    pub fn respond(
        &self,
        registry: &RouteRegistry,
        config: Option<&SwaggerConfig>,
        environment: &ServerEnvironment,
    ) -> Value {
        debug!("Serving Swagger document at {}", self.reserved_path);
        let assembler = DocumentAssembler::new(config, environment, &self.reserved_path);
        match assembler.assemble(registry.routes()) {
            Ok(doc) => doc.into_value(),
            Err(err) => {
                warn!("{}", err);
                json!({ "error": err.to_string() })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{EndpointDescriptor, EndpointKey, RouteOptions};
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;
    use serde_json::Map;

    fn environment() -> ServerEnvironment {
        ServerEnvironment::new("http://localhost:3000/", "api/").unwrap()
    }

    fn item_endpoints() -> IndexMap<EndpointKey, EndpointDescriptor> {
        let mut endpoints = IndexMap::new();
        endpoints.insert(
            EndpointKey::Get,
            EndpointDescriptor::documented(json!({ "summary": "Get item" })),
        );
        endpoints
    }

    #[test]
    fn test_respond_without_config() {
        let mut registry = RouteRegistry::new();
        let swagger = registry.add_swagger("swagger.json");

        let body = swagger.respond(&registry, None, &environment());

        assert_eq!(
            body,
            json!({ "error": "Swagger configuration not given for Restivus." })
        );
        assert!(body.get("paths").is_none());
    }

    #[test]
    fn test_respond_without_meta() {
        let mut registry = RouteRegistry::new();
        let swagger = registry.add_swagger("swagger.json");
        let config = SwaggerConfig::default();

        let body = swagger.respond(&registry, Some(&config), &environment());

        assert_eq!(
            body,
            json!({ "error": "Swagger configuration not given for Restivus." })
        );
    }

    #[test]
    fn test_respond_excludes_itself() {
        let mut registry = RouteRegistry::new();
        registry.add_route("items/:id", RouteOptions::default(), item_endpoints());
        let swagger = registry.add_swagger("/swagger.json");
        let config = SwaggerConfig::with_meta(Map::new());

        let body = swagger.respond(&registry, Some(&config), &environment());

        assert_eq!(
            body,
            json!({
                "host": "localhost:3000",
                "basePath": "/api",
                "schemes": ["http"],
                "paths": { "/items/{id}": { "get": { "summary": "Get item" } } }
            })
        );
    }

    #[test]
    fn test_respond_sees_routes_added_later() {
        let mut registry = RouteRegistry::new();
        let swagger = registry.add_swagger("swagger.json");
        let config = SwaggerConfig::with_meta(Map::new());
        let env = environment();

        let before = swagger.respond(&registry, Some(&config), &env);
        registry.add_route("items/:id", RouteOptions::default(), item_endpoints());
        let after = swagger.respond(&registry, Some(&config), &env);

        assert_eq!(before["paths"], json!({}));
        assert!(after["paths"]["/items/{id}"].is_object());
    }

    #[test]
    fn test_respond_keeps_declared_method_order() {
        let mut registry = RouteRegistry::new();
        let mut endpoints = IndexMap::new();
        endpoints.insert(
            EndpointKey::Delete,
            EndpointDescriptor::documented(json!({ "summary": "Delete item" })),
        );
        endpoints.insert(
            EndpointKey::Get,
            EndpointDescriptor::documented(json!({ "summary": "Get item" })),
        );
        registry.add_route("items/:id", RouteOptions::default(), endpoints);
        let swagger = registry.add_swagger("swagger.json");
        let config = SwaggerConfig::with_meta(Map::new());

        let body = swagger.respond(&registry, Some(&config), &environment());

        let methods: Vec<_> = body["paths"]["/items/{id}"]
            .as_object()
            .map(|ops| ops.keys().cloned().collect())
            .unwrap_or_default();
        assert_eq!(methods, vec!["delete", "get"]);
    }
}
