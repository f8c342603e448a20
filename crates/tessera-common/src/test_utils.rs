//! Test utilities and shared fixtures for the tessera workspace.

use std::fs;
use std::path::Path;
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(any(test, feature = "tempfile"))]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `(relative path, content)` pairs below `root`, creating parent directories.
pub fn write_translations(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create translation directory");
        }
        fs::write(&path, content).expect("Failed to write translation file");
    }
}

/// Translation fixtures shared by the i18n and cli test suites.
pub mod fixtures {
    /// English page translations.
    pub const EN_HOME: &str = "\
home-title = Your files
upload = Upload
    .tooltip = Upload a new file
welcome = Welcome, {$name}!
";

    /// English setup page translations.
    pub const EN_SETUP: &str = "\
setup-title = Set up your instance
";

    /// French page translations.
    pub const FR_HOME: &str = "\
home-title = Vos fichiers
upload = Téléverser
    .tooltip = Téléverser un nouveau fichier
welcome = Bienvenue, {$name} !
";

    /// A document the Fluent parser rejects.
    pub const BROKEN: &str = "\
this is not = { fluent
";
}
