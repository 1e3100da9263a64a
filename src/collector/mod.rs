/// collector startup.
pub mod handlers;
/// health check route.
pub mod health_server;
/// postgres event store.
pub mod postgres;
/// collector routes.
pub mod server;
/// event persistence.
pub mod store;
