/// A lightweight, serializable snapshot of the paging state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. Use it to carry the
/// committed position across view re-creation (e.g. a rotation that rebuilds the scroll view)
/// without coupling the pager to any UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagingState {
    /// Main-axis offset of the last committed (snapped) position.
    pub current_offset: f32,
}
