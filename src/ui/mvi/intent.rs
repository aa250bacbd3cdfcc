/// Marker trait for feature intents.
///
/// An intent describes something that happened (a key press, a fetch
/// outcome), never how state should change. That mapping belongs to the
/// reducer.
pub trait Intent: Send + 'static {}
