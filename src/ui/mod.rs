//! The single-page catalog UI: view state plus the server-rendered page.

pub mod page;
pub mod view;

pub use page::render_page;
pub use view::{LoadStatus, ProductDraft, ViewState};

/// Base URL the page uses to reach the API, fixed at build time.
pub const API_BASE: &str = match option_env!("CATALOG_API_BASE") {
    Some(base) => base,
    None => "api",
};

/// Where the API must also be mounted for the bundled page to reach it.
///
/// A relative or root-relative base resolves against this service, so the
/// API is served again under that prefix. Absolute URLs point elsewhere and
/// need no extra mount.
pub fn api_mount_path(base: &str) -> Option<String> {
    if base.contains("://") || base.starts_with("//") {
        return None;
    }
    let trimmed = base.trim_start_matches("./").trim_matches('/');
    if trimmed.is_empty() || trimmed == "." {
        None
    } else {
        Some(format!("/{}", trimmed))
    }
}
