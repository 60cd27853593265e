//! Environment variables read while resolving a [`SiteConfiguration`][crate::SiteConfiguration].

/// Site URL, overriding [`DEFAULT_URL`][crate::DEFAULT_URL]
pub const URL: &str = "URL";
pub const ALGOLIA_APP_ID: &str = "ALGOLIA_APP_ID";
pub const ALGOLIA_SEARCH_API_KEY: &str = "ALGOLIA_SEARCH_API_KEY";
pub const ALGOLIA_SITE_ID: &str = "ALGOLIA_SITE_ID";

/// Every variable consulted, in field order
pub const ALL: &[&str] = &[URL, ALGOLIA_APP_ID, ALGOLIA_SEARCH_API_KEY, ALGOLIA_SITE_ID];
