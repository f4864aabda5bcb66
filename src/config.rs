use crate::error::Result;
use crate::serializer::read_from_file;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Static Swagger configuration supplied alongside the route registry.
///
/// `meta` holds the top-level document fields (`info`, `host`, `basePath`, `schemes`, ...)
/// and may carry a `paths` map of manually declared paths. `securityDefinitions` and
/// `definitions` are copied into the document verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwaggerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
    #[serde(
        rename = "securityDefinitions",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub security_definitions: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definitions: Option<Value>,
}

impl SwaggerConfig {
    /// Create a config with only a `meta` block
    pub fn with_meta(meta: Map<String, Value>) -> Self {
        Self {
            meta: Some(meta),
            ..Self::default()
        }
    }

    /// Load from a `.yaml`/`.yml` file, or a JSON file under any other extension
    pub fn from_path(path: &Path) -> Result<Self> {
        read_from_file(path)
    }
}
