/// Resource acquisition failures outside of ingest parsing itself (spec §7
/// `ResourceError`).
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("asset not found at resource path `{path}`")]
    MissingAsset { path: String },

    #[error("failed to allocate asset blob for `{path}`")]
    AllocationFailed { path: String },
}

/// Everything that can prevent the engine from being constructed (spec §7
/// "Ingest errors abort the entire table load and cause `onCreate` to
/// fail").
#[derive(Debug, thiserror::Error)]
pub enum CreateError {
    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Ingest(#[from] glyph_loader::IngestError),

    #[error("polygon builder refused to build the default fallback polygon")]
    DefaultPolygonBuildFailed,
}
