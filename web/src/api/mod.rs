//! HTTP clients for the complaint dataset and the bookmark/comment store.
//! Server-side only; the browser reaches these through server functions.

pub mod bookmarks_repository;
pub mod client;
pub mod comments_repository;
pub mod error;
pub mod open_data;

pub use client::{backend, init_clients, open_data, BackendClient};
pub use error::{ApiError, ApiResult};
pub use open_data::OpenDataClient;
