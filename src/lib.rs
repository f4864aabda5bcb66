//! Swagger From Registry - Swagger 2.0 documents derived from a live route registry.
//!
//! Given the routes registered on an HTTP service (paths, methods and per-method metadata)
//! and a static configuration block (API metadata, security definitions, model definitions),
//! this library assembles a single Swagger 2.0 document. Assembly is a pure, synchronous
//! transform that is repeated on every request, so the document always reflects the registry
//! as it currently is.
//!
//! # Architecture
//!
//! 1. [`path_translator`] - Rewrites `:name` route templates into `{name}` path keys
//! 2. [`endpoint_projector`] - Turns a route's endpoints into Swagger operation objects
//! 3. [`route_filter`] - Decides which routes are documented at all
//! 4. [`document_assembler`] - Combines routes and static configuration into the document
//!
//! Around the core:
//!
//! - [`registry`] - The ordered route registry the document is derived from
//! - [`config`] - The static Swagger configuration
//! - [`environment`] - Root URL and API path used when `meta` names no host
//! - [`handler`] - The route serving the document
//! - [`scanner`], [`serializer`], [`cli`] - File loading, output and the command line tool
//!
//! # Example Usage
//!
//! ```
//! use swagger_from_registry::{
//!     config::SwaggerConfig,
//!     environment::ServerEnvironment,
//!     registry::{EndpointDescriptor, EndpointKey, RouteOptions, RouteRegistry},
//! };
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
//! let swagger = registry.add_swagger("swagger.json");
//!
//! let meta = json!({ "info": { "title": "Items" } });
//! let config = SwaggerConfig::with_meta(meta.as_object().cloned().unwrap_or_default());
//! let environment = ServerEnvironment::new("https://example.com/", "api/").unwrap();
//!
//! let doc = swagger.respond(&registry, Some(&config), &environment);
//! assert_eq!(doc["basePath"], "/api");
//! assert_eq!(doc["paths"]["/items/{id}"]["get"]["summary"], "Get item");
//! ```

pub mod cli;
pub mod config;
pub mod document_assembler;
pub mod endpoint_projector;
pub mod environment;
pub mod error;
pub mod handler;
pub mod path_translator;
pub mod registry;
pub mod route_filter;
pub mod scanner;
pub mod serializer;
