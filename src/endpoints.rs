//! The URIs of the routes served by the dashboard.

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The page showing the balance summary and the transaction list.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The data-dependent part of the dashboard, requested by the page once it has loaded.
pub const DASHBOARD_CONTENT: &str = "/dashboard/content";
/// The route for static files.
pub const STATIC: &str = "/static";
