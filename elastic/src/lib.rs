mod client;
mod elastic_url;
pub mod query;
pub mod response;

pub(crate) use elastic_url::*;

pub use client::*;
