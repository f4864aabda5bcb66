use crate::config::SwaggerConfig;
use crate::endpoint_projector::project;
use crate::environment::ServerEnvironment;
use crate::error::{Error, Result};
use crate::path_translator::translate;
use crate::registry::RouteDescriptor;
use crate::route_filter::is_included;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Meta keys whose presence disables auto-detection of the whole block
const AUTO_DETECT_KEYS: [&str; 3] = ["host", "basePath", "schemes"];

/// Assembles a Swagger 2.0 document from registered routes and static configuration.
pub struct DocumentAssembler<'a> {
    /// Static configuration, `None` when none was supplied
    config: Option<&'a SwaggerConfig>,
    /// Fallback source for `host`, `basePath` and `schemes`
    environment: &'a ServerEnvironment,
    /// Path the document itself is served from
    reserved_path: &'a str,
}

/// A generated Swagger document.
///
/// Top-level keys keep the order they were inserted in: the configured meta fields first,
/// then the auto-detected block, `securityDefinitions`, `paths` and `definitions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SwaggerDocument(Map<String, Value>);

impl SwaggerDocument {
    /// The `paths` map, keyed by Swagger path
    pub fn paths(&self) -> Option<&Map<String, Value>> {
        self.0.get("paths").and_then(Value::as_object)
    }

    /// Top-level entry such as `host` or `info`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the document has the top-level `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Borrow the whole document, in output key order
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the document into the JSON object served to clients
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl<'a> DocumentAssembler<'a> {
    /// Creates a new assembler.
    ///
    /// # Arguments
    ///
    /// * `config` - Static configuration; `None` makes every assembly fail
    /// * `environment` - Source of `host`, `basePath` and `schemes` when `meta` has no `host`
    /// * `reserved_path` - Route path serving the document, left out of `paths`
    pub fn new(
        config: Option<&'a SwaggerConfig>,
        environment: &'a ServerEnvironment,
        reserved_path: &'a str,
    ) -> Self {
        Self {
            config,
            environment,
            reserved_path,
        }
    }

    /// Build the document from `routes`, processed in order.
    ///
    /// When several routes translate to the same path key the last one wins. Paths declared
    /// in `meta.paths` are added afterwards but never replace a route-derived path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConfiguration`] when there is no config or it has no `meta`.
    pub fn assemble(&self, routes: &[RouteDescriptor]) -> Result<SwaggerDocument> {
        let config = self.config.ok_or(Error::MissingConfiguration)?;
        let meta = config.meta.as_ref().ok_or(Error::MissingConfiguration)?;

        debug!("Assembling Swagger document from {} routes", routes.len());
        let mut doc = meta.clone();

        if !AUTO_DETECT_KEYS.iter().any(|key| meta.contains_key(*key)) {
            debug!("No host, basePath or schemes in meta, using serving environment");
            doc.extend(self.environment.auto_detected());
        }

        let paths = self.route_paths(routes);

        if let Some(security_definitions) = &config.security_definitions {
            doc.insert(
                "securityDefinitions".to_string(),
                security_definitions.clone(),
            );
        }

        doc.insert("paths".to_string(), Value::Object(paths));

        if let Some(definitions) = &config.definitions {
            doc.insert("definitions".to_string(), definitions.clone());
        }

        if let Some(extra_paths) = meta.get("paths").and_then(Value::as_object) {
            if let Some(Value::Object(paths)) = doc.get_mut("paths") {
                merge_meta_paths(paths, extra_paths);
            }
        }

        Ok(SwaggerDocument(doc))
    }

    /// Translate every included route into a path item, last route winning per key
    fn route_paths(&self, routes: &[RouteDescriptor]) -> Map<String, Value> {
        let mut paths = Map::new();

        for route in routes {
            if !is_included(route, self.reserved_path) {
                debug!("Skipping route: {}", route.path);
                continue;
            }

            let key = translate(&route.path);
            let operations = project(route);
            debug!("Adding path {} with {} operations", key, operations.len());

            if paths.insert(key.clone(), Value::Object(operations)).is_some() {
                debug!("Path {} redefined by a later route", key);
            }
        }

        paths
    }
}

/// Add manually declared paths that no route produced
fn merge_meta_paths(paths: &mut Map<String, Value>, extra_paths: &Map<String, Value>) {
    for (key, path_item) in extra_paths {
        if paths.contains_key(key) {
            debug!("Meta path {} already defined by a route, skipping", key);
            continue;
        }
        paths.insert(key.clone(), path_item.clone());
    }
}

/// Convenience wrapper around [`DocumentAssembler::assemble`]
pub fn assemble(
    routes: &[RouteDescriptor],
    config: Option<&SwaggerConfig>,
    reserved_path: &str,
    environment: &ServerEnvironment,
) -> Result<SwaggerDocument> {
    DocumentAssembler::new(config, environment, reserved_path).assemble(routes)
}
