use crate::error::ResourceError;

/// Asset retrieval, abstracted so `EngineState::create` doesn't know whether
/// a resource path resolves to a packaged file, a network fetch, or an
/// in-memory fixture (spec §6 "Asset format", §5 "asset load happens once
/// during `onCreate`").
pub trait AssetStore {
    /// Read the structured-text blob at `path` as UTF-8 text.
    fn load(&self, path: &str) -> Result<String, ResourceError>;
}
