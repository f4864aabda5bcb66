use crate::registry::RouteDescriptor;

/// Paths of the authentication routes, never documented.
const AUTH_PATHS: [&str; 2] = ["login", "logout"];

/// Any path containing this substring is excluded, including e.g. `userstats`.
const USERS_MARKER: &str = "users";

/// Decide whether a route contributes to the Swagger document.
///
/// A route is left out when it is the document route itself (`reserved_path`), one of the
/// `login`/`logout` routes, marked hidden, or when its path contains `users` anywhere.
pub fn is_included(route: &RouteDescriptor, reserved_path: &str) -> bool {
    route.path != reserved_path
        && !AUTH_PATHS.contains(&route.path.as_str())
        && !route.options.hidden
        && !route.path.contains(USERS_MARKER)
}
