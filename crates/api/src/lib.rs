//! `wicket-api` — HTTP surface for the permission-gated API.

pub mod app;
pub mod authz;
pub mod context;
pub mod middleware;
