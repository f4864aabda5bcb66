use regex::Regex;
use std::sync::LazyLock;

// Constant pattern; compiling it cannot fail at runtime once any test has run it.
static PATH_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([0-9A-Za-z_]+)").expect("valid path parameter pattern"));

/// Convert a route template into a Swagger path key.
///
/// Every `:name` token becomes `{name}` and the result is prefixed with `/`. Templates are
/// expected without a leading slash; one that already has it ends up with `//`.
pub fn translate(template: &str) -> String {
    let rewritten = PATH_PARAM.replace_all(template, "{$1}");
    format!("/{}", rewritten)
}
