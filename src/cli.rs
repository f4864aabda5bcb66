use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::config::SwaggerConfig;
use crate::environment::ServerEnvironment;
use crate::registry::RouteRegistry;
use crate::scanner::RouteFileScanner;
use crate::serializer::{serialize_json, serialize_yaml, write_to_file};

/// Swagger From Registry - Generate a Swagger 2.0 document from registered HTTP routes
#[derive(Parser, Debug)]
#[command(name = "swagger-from-registry")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Route registry: a JSON/YAML file, or a directory of them
    #[arg(short = 'r', long = "routes", value_name = "PATH")]
    pub routes_path: PathBuf,

    /// Swagger configuration file (meta, securityDefinitions, definitions)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Externally visible root URL of the service
    #[arg(
        long = "root-url",
        env = "SWAGGER_ROOT_URL",
        default_value = "http://localhost:3000/"
    )]
    pub root_url: String,

    /// API path prefix the routes are served under
    #[arg(long = "api-path", env = "SWAGGER_API_PATH", default_value = "api/")]
    pub api_path: String,

    /// Path the Swagger document itself is served from
    #[arg(long = "swagger-path", default_value = "swagger.json")]
    pub swagger_path: String,

    /// Output format (yaml or json)
    #[arg(short = 'f', long = "format", value_enum, default_value = "json")]
    pub output_format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// YAML format
    Yaml,
    /// JSON format
    Json,
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    if !args.routes_path.exists() {
        anyhow::bail!("Routes path does not exist: {}", args.routes_path.display());
    }

    if let Some(ref config) = args.config_path {
        if !config.is_file() {
            anyhow::bail!("Config path is not a file: {}", config.display());
        }
    }

    info!("Routes: {}", args.routes_path.display());
    match args.config_path {
        Some(ref config) => info!("Config: {}", config.display()),
        None => info!("Config: none"),
    }
    info!("Root URL: {}", args.root_url);
    info!("Output format: {:?}", args.output_format);
    if let Some(ref output) = args.output_path {
        info!("Output file: {}", output.display());
    } else {
        info!("Output: stdout");
    }

    Ok(args)
}

/// Build the registry from a single file or every route file under a directory
pub fn load_registry(path: &Path) -> Result<RouteRegistry> {
    if path.is_file() {
        return RouteRegistry::from_path(path)
            .with_context(|| format!("Failed to load routes from {}", path.display()));
    }

    let scan_result = RouteFileScanner::new(path.to_path_buf()).scan()?;
    info!("Found {} route files", scan_result.route_files.len());

    let mut registry = RouteRegistry::new();
    for file in &scan_result.route_files {
        let routes = RouteRegistry::from_path(file)
            .with_context(|| format!("Failed to load routes from {}", file.display()))?;
        debug!("Loaded {} routes from {}", routes.len(), file.display());
        registry.extend(routes);
    }

    Ok(registry)
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    info!("Starting Swagger document generation...");

    // Step 1: Load the route registry
    let mut registry = load_registry(&args.routes_path)?;
    info!("Loaded {} routes", registry.len());
    if registry.is_empty() {
        log::warn!("No routes found");
    }

    // Step 2: Load the static configuration
    let config = match &args.config_path {
        Some(path) => Some(
            SwaggerConfig::from_path(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
        ),
        None => None,
    };

    // Step 3: Register the document route and serve one request
    let environment = ServerEnvironment::new(&args.root_url, &args.api_path)
        .with_context(|| format!("Invalid root URL: {}", args.root_url))?;
    let swagger = registry.add_swagger(&args.swagger_path);
    let document = swagger.respond(&registry, config.as_ref(), &environment);

    // Step 4: Serialize to requested format
    info!("Serializing to {:?} format...", args.output_format);
    let content = match args.output_format {
        OutputFormat::Yaml => serialize_yaml(&document)?,
        OutputFormat::Json => serialize_json(&document)?,
    };

    // Step 5: Output to file or stdout
    if let Some(output_path) = &args.output_path {
        info!("Writing output to: {}", output_path.display());
        write_to_file(&content, output_path)?;
    } else {
        println!("{}", content);
    }

    let path_count = document
        .get("paths")
        .and_then(|paths| paths.as_object())
        .map_or(0, |paths| paths.len());
    info!("Generation complete!");
    info!("  - Routes registered: {}", registry.len());
    info!("  - Paths documented: {}", path_count);

    Ok(())
}
