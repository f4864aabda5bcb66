use crate::registry::RouteDescriptor;
use log::debug;
use serde_json::{Map, Value};

/// Build the Swagger path item for one route.
///
/// Maps each operation key of the route to its `swagger` metadata, in the order the
/// endpoints were declared. The reserved `options` key is dropped, and endpoints without
/// `swagger` metadata are silently omitted.
pub fn project(route: &RouteDescriptor) -> Map<String, Value> {
    let mut operations = Map::new();

    for (key, endpoint) in route.endpoints.iter().filter(|(key, _)| key.is_operation()) {
        match &endpoint.swagger {
            Some(swagger) => {
                operations.insert(key.as_str().to_string(), swagger.clone());
            }
            None => debug!("Undocumented operation: {} {}", key.as_str(), route.path),
        }
    }

    operations
}
