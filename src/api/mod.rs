//! HTTP side of the console: the authenticated client and one backend per
//! endpoint family, each behind a trait the containers depend on.

pub mod auth;
pub mod client;
pub mod envelope;
pub mod notifications;
pub mod resources;

pub use auth::{AuthApi, RestAuth};
pub use client::{ApiClient, Auth};
pub use envelope::{Envelope, MessageEnvelope};
pub use notifications::{NotificationApi, RestNotifications};
pub use resources::{ResourceApi, RestResource};
