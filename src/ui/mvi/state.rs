/// Marker trait for feature states.
///
/// States are plain values: cloneable, comparable for change detection,
/// default-constructible for startup, and sendable across threads.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
