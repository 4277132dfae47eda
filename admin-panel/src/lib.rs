//! Admin-panel library modules.

pub mod api;
pub mod doc;

pub use doc::ApiDoc;
