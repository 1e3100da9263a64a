/// beacon payloads and collector bodies.
pub mod event;
/// env driven settings.
pub mod settings;
