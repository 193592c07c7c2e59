/// Failure modes of a single [`crate::Tessellator::build`] call (spec §7
/// `BuildError`).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BuildError {
    /// The polygon builder refused a vertex emission (spec §5 "Scoped
    /// acquisition", §6 "point(...) -> ok").
    #[error("polygon builder rejected vertex emission at contour point index {index}")]
    VertexRejected { index: usize },

    /// The polygon builder refused to finalize the accumulated vertices.
    #[error("polygon builder rejected build()")]
    BuildRejected,
}
