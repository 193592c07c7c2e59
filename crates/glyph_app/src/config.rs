/// Static app metadata (spec §6 "Platform lifecycle": "App metadata: name
/// `Glyph`, version `1.0.0`, app dir `Glyph`").
pub const APP_NAME: &str = "Glyph";
pub const APP_VERSION: &str = "1.0.0";
pub const APP_DIR: &str = "Glyph";

/// The glyph table's resource path (spec §6 "Asset format").
pub const DEFAULT_ASSET_PATH: &str =
    "${internal}/resource.bfs::BarlowSemiCondensed-Regular-1000.json";

/// Startup configuration, following the builder pattern used for the
/// engine's original app entry point.
#[derive(Clone)]
pub struct AppConfig {
    pub asset_path: String,
    pub initial_id: i32,
    pub initial_steps: i32,
    pub initial_thresh: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            asset_path: DEFAULT_ASSET_PATH.to_string(),
            initial_id: 'g' as i32,
            initial_steps: 4,
            initial_thresh: 0,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset_path(mut self, path: &str) -> Self {
        self.asset_path = path.to_string();
        self
    }

    pub fn with_initial_id(mut self, id: i32) -> Self {
        self.initial_id = id;
        self
    }

    pub fn with_initial_steps(mut self, steps: i32) -> Self {
        self.initial_steps = steps;
        self
    }

    pub fn with_initial_thresh(mut self, thresh: i32) -> Self {
        self.initial_thresh = thresh;
        self
    }
}
