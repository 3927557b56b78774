//! Bundled asset and device-router module path resolution.
//!
//! The hardware window loads a page and a preload bundle that ship with
//! the separately packaged device-router module, and the router itself
//! is constructed with the module's root path. Where that module lives
//! depends on the build: packaged builds place it one directory above
//! the app root, development builds use the copy in the local module
//! cache.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Environment;

/// Filesystem layout of the hardware window's bundled assets.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetLayout {
    /// Root of the device-router module, handed to the router on
    /// construction.
    pub root_app_path: PathBuf,
    /// Preload bundle injected into the hardware window's content.
    pub preload_bundle: PathBuf,
    /// `file://` URL of the hardware page.
    pub page_url: String,
}

impl AssetLayout {
    /// Resolve the layout for the given application root.
    ///
    /// The preload bundle and the hardware page always load from the
    /// module cache copy; only the router root differs between
    /// production and development.
    pub fn resolve(app_path: &Path, environment: Environment) -> Self {
        let module_root = app_path.join("modules").join("device-router").join("app");

        let root_app_path = match environment {
            Environment::Production => app_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| app_path.to_path_buf()),
            Environment::Development => module_root.clone(),
        };

        let preload_bundle = module_root
            .join("src")
            .join("preload")
            .join("preload.bundle.js");
        let page = module_root.join("src").join("views").join("index.html");
        let page_url = format!("file://{}", page.display());

        debug!(
            event = "shell.assets.layout_resolved",
            environment = ?environment,
            root_app_path = %root_app_path.display(),
            page_url = %page_url
        );

        Self {
            root_app_path,
            preload_bundle,
            page_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_router_root_is_above_app_root() {
        let layout = AssetLayout::resolve(Path::new("/opt/blockdesk/app"), Environment::Production);
        assert_eq!(layout.root_app_path, PathBuf::from("/opt/blockdesk"));
    }

    #[test]
    fn test_development_router_root_is_module_cache() {
        let layout = AssetLayout::resolve(Path::new("/src/blockdesk"), Environment::Development);
        assert_eq!(
            layout.root_app_path,
            PathBuf::from("/src/blockdesk/modules/device-router/app")
        );
    }

    #[test]
    fn test_preload_and_page_always_come_from_module_cache() {
        for environment in [Environment::Production, Environment::Development] {
            let layout = AssetLayout::resolve(Path::new("/opt/blockdesk/app"), environment);
            assert_eq!(
                layout.preload_bundle,
                PathBuf::from(
                    "/opt/blockdesk/app/modules/device-router/app/src/preload/preload.bundle.js"
                )
            );
            assert_eq!(
                layout.page_url,
                "file:///opt/blockdesk/app/modules/device-router/app/src/views/index.html"
            );
        }
    }

    #[test]
    fn test_production_falls_back_to_app_root_at_fs_root() {
        let layout = AssetLayout::resolve(Path::new("/"), Environment::Production);
        assert_eq!(layout.root_app_path, PathBuf::from("/"));
    }
}
