//! User-directory library modules.

pub mod api;
pub mod doc;
pub mod domain;
pub mod persistence;

pub use doc::ApiDoc;
