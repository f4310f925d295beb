//! Marker trait for UI state.

/// UI state is a self-contained value: everything a view needs to render.
/// `Default` is the state at session start.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
