//! Marker trait for intents.

/// An intent is either a user action (an edit, a button press) or a
/// system event (a request completing) that a reducer folds into state.
pub trait Intent: Send + 'static {}
