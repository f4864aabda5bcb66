use anyhow::Result;
use log::warn;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Extensions of files that may hold route descriptors
const ROUTE_FILE_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// Scanner for directories of route definition files.
///
/// The `RouteFileScanner` recursively walks a directory to find every JSON or YAML file. It
/// skips hidden directories (those starting with `.`) and `target`.
///
/// Files are returned sorted by path, so the registry assembled from them always has the same
/// order, and therefore the same winner when two routes share a path.
///
/// # Example
///
/// ```no_run
/// use swagger_from_registry::scanner::RouteFileScanner;
/// use std::path::PathBuf;
///
/// let scanner = RouteFileScanner::new(PathBuf::from("./routes"));
/// let result = scanner.scan().unwrap();
/// println!("Found {} route files", result.route_files.len());
/// ```
pub struct RouteFileScanner {
    root_path: PathBuf,
}

/// Result of directory scanning operation.
pub struct ScanResult {
    /// Paths of all discovered route files, sorted
    pub route_files: Vec<PathBuf>,
    /// Warning messages for any issues encountered (e.g., inaccessible directories)
    pub warnings: Vec<String>,
}

impl RouteFileScanner {
    /// Creates a new scanner for the given root directory.
    ///
    /// # Arguments
    ///
    /// * `root_path` - Directory searched recursively for `.json`, `.yaml` and `.yml` files
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path }
    }

    /// Scans the directory tree and collects all route files.
    ///
    /// Entries that cannot be accessed are logged and recorded as warnings, and scanning
    /// continues.
    ///
    /// # Errors
    ///
    /// Returns an error if the root path is not a directory.
    pub fn scan(&self) -> Result<ScanResult> {
        if !self.root_path.is_dir() {
            anyhow::bail!("Not a directory: {}", self.root_path.display());
        }

        let mut route_files = Vec::new();
        let mut warnings = Vec::new();

        for entry in WalkDir::new(&self.root_path)
            .into_iter()
            .filter_entry(|e| {
                // Don't filter the root directory itself
                if e.path() == self.root_path {
                    return true;
                }

                let file_name = e.file_name().to_string_lossy();
                let is_hidden = file_name.starts_with('.');
                let is_target = file_name == "target";

                !is_hidden && !is_target
            })
        {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    let is_route_file = path
                        .extension()
                        .and_then(|s| s.to_str())
                        .is_some_and(|ext| ROUTE_FILE_EXTENSIONS.contains(&ext));

                    if path.is_file() && is_route_file {
                        route_files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    let warning = format!("Failed to access path: {}", e);
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }

        route_files.sort();

        Ok(ScanResult {
            route_files,
            warnings,
        })
    }
}
