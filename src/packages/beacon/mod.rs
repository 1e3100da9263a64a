#![warn(missing_docs)]

//! Page beacon that reports a page view to a tracking endpoint
//!
//! A beacon reads the url, referrer and user agent of a page along
//! with the `data-domain` of its script tag and posts them once as
//! JSON. The request is fire-and-forget: nothing is retried and no
//! failure reaches the page.
//!
//! # How to use the beacon
//!
//! - **Inline** is the default snippet and sends as soon as it is
//!   installed on a page.
//! - **OnLoad** waits for the page load signal before reading the page.
//!   - [`install`] attaches the beacon to a page.
//!
//! [`install`]: sender/struct.Beacon.html#method.install

/// Configuration structure for `Beacon`.
pub mod configuration;
/// Page state a beacon reads.
pub mod context;
/// Page load signal.
pub mod lifecycle;
/// The beacon sender.
pub mod sender;
/// Application utils.
pub mod utils;
