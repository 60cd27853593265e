use std::fmt;

use super::*;

pub const DEFAULT_URL: &str = "http://localhost:8080";

/// Site-wide settings handed to the page templates.
///
/// Literal fields are fixed for the site; `url` and the search credentials
/// come from the environment (see [`SiteConfiguration::from_vars`]).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct SiteConfiguration {
    /// Shown in the sidebar and in the page title
    pub title: String,
    /// Base for absolute URLs
    pub url: String,
    /// Sidebar profile image
    pub image: String,
    pub image_alt: String,
    /// Shown in the sidebar and used in JSON-LD
    pub author: String,
    pub description: String,
    /// Used for social sharing when a page sets no `image` of its own
    pub open_graph_default_image: String,
    #[serde(rename = "socialGitHub", skip_serializing_if = "Option::is_none")]
    pub social_github: Option<String>,
    #[serde(rename = "socialLinkedIn", skip_serializing_if = "Option::is_none")]
    pub social_linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_twitter: Option<String>,
    #[serde(rename = "socialYouTube", skip_serializing_if = "Option::is_none")]
    pub social_youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_analytics: Option<String>,
    pub algolia_search: AlgoliaSearch,
}

impl Default for SiteConfiguration {
    fn default() -> Self {
        Self {
            title: "Vitaliy Hrechko".to_owned(),
            url: DEFAULT_URL.to_owned(),
            image: "/assets/images/sidebar_profile.png".to_owned(),
            image_alt: "Vitaliy Hretchko".to_owned(),
            author: "Vitaliy Hretchko".to_owned(),
            description: "My diary on development (Just want to clarify things for myself)"
                .to_owned(),
            open_graph_default_image: "/assets/images/sidebar_profile.png".to_owned(),
            social_github: Some("grechman2".to_owned()),
            social_linkedin: Some("vitaliy-grechko-30b68258".to_owned()),
            social_twitter: None,
            social_youtube: None,
            google_analytics: None,
            algolia_search: AlgoliaSearch::default(),
        }
    }
}

impl SiteConfiguration {
    /// Resolve the environment-sourced fields through `lookup`.
    ///
    /// `lookup` returns `None` for unset variables. An empty `URL` falls back
    /// to [`DEFAULT_URL`]; empty search credentials are kept as-is.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(vars::URL)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_URL.to_owned());
        let algolia_search = AlgoliaSearch {
            app_id: lookup(vars::ALGOLIA_APP_ID),
            search_api_key: lookup(vars::ALGOLIA_SEARCH_API_KEY),
            site_id: lookup(vars::ALGOLIA_SITE_ID),
            ..Default::default()
        };

        Self {
            url,
            algolia_search,
            ..Default::default()
        }
    }
}

impl fmt::Display for SiteConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{}", converted.trim_end())
    }
}
