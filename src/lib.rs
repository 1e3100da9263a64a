extern crate chrono;
extern crate scraper;
extern crate tokio;

extern crate log;
extern crate reqwest;
#[macro_use]
extern crate lazy_static;
extern crate serde;

// internal packages.
pub mod collector;
pub mod hooks;
pub mod interface;
pub mod packages;
pub use collector::handlers::collector_start;
pub use packages::beacon;
