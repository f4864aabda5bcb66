//! In-process model of the route registry a Swagger document is derived from.
//!
//! The registry is an ordered list of [`RouteDescriptor`]s. Each route carries a URL template
//! using `:name` tokens for path parameters, a set of route-level options, and one
//! [`EndpointDescriptor`] per HTTP method it answers.
//!
//! Registration order is significant: when two routes translate to the same Swagger path key,
//! the one registered later wins.
//!
//! # Example
//!
//! ```
//! use swagger_from_registry::registry::{EndpointDescriptor, EndpointKey, RouteOptions, RouteRegistry};
//! use serde_json::json;
//! use indexmap::IndexMap;
//!
//! let mut registry = RouteRegistry::new();
//! let mut endpoints = IndexMap::new();
//! endpoints.insert(
//!     EndpointKey::Get,
//!     EndpointDescriptor::documented(json!({ "summary": "Get item" })),
//! );
//! registry.add_route("items/:id", RouteOptions::default(), endpoints);
//! assert_eq!(registry.len(), 1);
//! ```

use crate::error::Result;
use crate::handler::SwaggerRoute;
use crate::serializer::read_from_file;
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Keys allowed in a route's endpoint map.
///
/// All keys except [`EndpointKey::Options`] name an HTTP operation. `options` configures the
/// endpoint set itself and never becomes a Swagger operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointKey {
    /// HTTP GET method
    Get,
    /// HTTP POST method
    Post,
    /// HTTP PUT method
    Put,
    /// HTTP PATCH method
    Patch,
    /// HTTP DELETE method
    Delete,
    /// Reserved control key, not an operation
    Options,
}

impl EndpointKey {
    /// Lowercase key as it appears in the registry and in Swagger path items
    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointKey::Get => "get",
            EndpointKey::Post => "post",
            EndpointKey::Put => "put",
            EndpointKey::Patch => "patch",
            EndpointKey::Delete => "delete",
            EndpointKey::Options => "options",
        }
    }

    /// Whether the key becomes a Swagger operation; `options` never does
    pub fn is_operation(&self) -> bool {
        !matches!(self, EndpointKey::Options)
    }
}

/// Per-method metadata registered on a route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    /// Swagger operation object, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swagger: Option<Value>,
    /// Any other endpoint fields (handler names, roles, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EndpointDescriptor {
    /// Create an endpoint carrying a Swagger operation object
    pub fn documented(swagger: Value) -> Self {
        Self {
            swagger: Some(swagger),
            extra: Map::new(),
        }
    }

    /// Create an endpoint without any Swagger metadata
    pub fn undocumented() -> Self {
        Self::default()
    }
}

/// Route-level options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteOptions {
    /// Hidden routes never appear in the generated document
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub hidden: bool,
    #[serde(
        rename = "authRequired",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub auth_required: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A registered URL pattern with its options and per-method endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// URL template, e.g. `items/:id`
    pub path: String,
    #[serde(default)]
    pub options: RouteOptions,
    /// Endpoints in the order they were declared
    #[serde(default)]
    pub endpoints: IndexMap<EndpointKey, EndpointDescriptor>,
}

impl RouteDescriptor {
    /// Create a route with default options and no endpoints
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            options: RouteOptions::default(),
            endpoints: IndexMap::new(),
        }
    }

    /// Builder-style helper adding one endpoint.
    ///
    /// Endpoints keep their insertion order; re-adding a key replaces it in place.
    pub fn with_endpoint(mut self, key: EndpointKey, endpoint: EndpointDescriptor) -> Self {
        self.endpoints.insert(key, endpoint);
        self
    }

    /// Builder-style helper marking the route hidden
    pub fn hidden(mut self) -> Self {
        self.options.hidden = true;
        self
    }
}

/// Ordered collection of registered routes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteRegistry {
    routes: Vec<RouteDescriptor>,
}

impl RouteRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already ordered list of routes without touching their paths
    pub fn from_routes(routes: Vec<RouteDescriptor>) -> Self {
        Self { routes }
    }

    /// Load a registry from a file holding a list of route descriptors.
    ///
    /// # Arguments
    ///
    /// * `path` - A `.yaml`/`.yml` file, or JSON under any other extension
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold a list of routes.
    pub fn from_path(path: &Path) -> Result<Self> {
        read_from_file(path)
    }

    /// Register a route.
    ///
    /// A single leading `/` is stripped from `path`, so `/items/:id` and `items/:id` register
    /// the same route.
    ///
    /// # Arguments
    ///
    /// * `path` - URL template using `:name` tokens
    /// * `options` - Route-level options such as `hidden`
    /// * `endpoints` - Per-method endpoints, in declaration order
    pub fn add_route(
        &mut self,
        path: &str,
        options: RouteOptions,
        endpoints: IndexMap<EndpointKey, EndpointDescriptor>,
    ) {
        let path = normalize_path(path);
        debug!("Registering route: {}", path);
        self.routes.push(RouteDescriptor {
            path,
            options,
            endpoints,
        });
    }

    /// Register the route that serves the Swagger document itself.
    ///
    /// The route needs no authentication and exposes a single undocumented `get` endpoint.
    ///
    /// # Returns
    ///
    /// A [`SwaggerRoute`] whose reserved path is `swagger_path` without its leading `/`.
    pub fn add_swagger(&mut self, swagger_path: &str) -> SwaggerRoute {
        let options = RouteOptions {
            auth_required: Some(false),
            ..RouteOptions::default()
        };
        let mut endpoints = IndexMap::new();
        endpoints.insert(EndpointKey::Get, EndpointDescriptor::undocumented());
        self.add_route(swagger_path, options, endpoints);
        SwaggerRoute::new(normalize_path(swagger_path))
    }

    /// Append all routes of another registry, keeping their order
    pub fn extend(&mut self, other: RouteRegistry) {
        self.routes.extend(other.routes);
    }

    /// Registered routes, in registration order
    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// Number of registered routes
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the registry has no routes
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

fn normalize_path(path: &str) -> String {
    path.strip_prefix('/').unwrap_or(path).to_string()
}

/// Interpret a loosely typed flag the way a dynamic config would: `false`, `0`, `""` and `null`
/// are false, everything else is true.
fn deserialize_truthy<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}
