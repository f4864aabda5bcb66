//! Swagger From Registry - Command-line tool for generating Swagger documents.
//!
//! Loads a route registry and a static Swagger configuration, then prints the document the
//! registry's Swagger route would serve.
//!
//! # Usage
//!
//! ```bash
//! swagger-from-registry [OPTIONS] --routes <PATH>
//! ```
//!
//! # Examples
//!
//! Generate JSON documentation:
//! ```bash
//! swagger-from-registry --routes routes/ --config swagger.yaml -o swagger.json
//! ```
//!
//! Generate YAML documentation with an explicit root URL:
//! ```bash
//! swagger-from-registry -r routes.yaml -c swagger.yaml --root-url https://api.example.com/ -f yaml
//! ```

use anyhow::Result;
use clap::Parser;
use log::info;
use swagger_from_registry::cli;

fn main() -> Result<()> {
    let args = cli::CliArgs::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("Swagger From Registry starting...");

    let args = cli::parse_args_from_parsed(args)?;
    cli::run(args)?;

    info!("Swagger document generation completed successfully");

    Ok(())
}
