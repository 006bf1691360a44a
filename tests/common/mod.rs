#![allow(dead_code)]

pub mod handler_store {
    use brrtdispatch::registry::{HandlerDefinition, HandlerRegistry};
    use brrtdispatch::route::RouteBinding;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    pub const NAMESPACE: &str = "app::controllers::";

    /// Temporary workspace with a `controllers/` store and a cache path beside it.
    pub struct Workspace {
        pub dir: TempDir,
        pub store: PathBuf,
        pub cache: PathBuf,
    }

    impl Workspace {
        pub fn new(handler_files: &[&str]) -> Self {
            let dir = tempfile::tempdir().unwrap();
            let store = dir.path().join("controllers");
            std::fs::create_dir(&store).unwrap();
            for name in handler_files {
                add_handler_file(&store, name);
            }
            let cache = dir.path().join("routes.json");
            Self { dir, store, cache }
        }
    }

    pub fn add_handler_file(store: &Path, name: &str) {
        std::fs::write(store.join(format!("{name}.rs")), "// handler\n").unwrap();
    }

    /// `Greeter` with `hello` bound to `GET /hello`.
    pub fn greeter_registry() -> HandlerRegistry {
        let mut registry = HandlerRegistry::new();
        registry.register(
            HandlerDefinition::new(format!("{NAMESPACE}Greeter"))
                .operation("hello", [RouteBinding::get("/hello")]),
        );
        registry
    }

    /// Handler file stems in the order the filesystem lists them.
    pub fn listing_order(store: &Path) -> Vec<String> {
        std::fs::read_dir(store)
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("rs"))
            .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect()
    }
}
