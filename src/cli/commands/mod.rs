pub mod auth;
pub mod notify;
pub mod resource;
pub mod route;
