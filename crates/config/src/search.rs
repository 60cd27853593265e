/// Algolia-powered search box settings.
///
/// The credentials are read from the build environment and are passed through
/// to the templates untouched.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct AlgoliaSearch {
    /// Shows the search bar in the UI
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    /// Deployed branch
    pub branch: String,
}

impl AlgoliaSearch {
    /// Names of the credential variables that are unset.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        [
            (crate::vars::ALGOLIA_APP_ID, &self.app_id),
            (crate::vars::ALGOLIA_SEARCH_API_KEY, &self.search_api_key),
            (crate::vars::ALGOLIA_SITE_ID, &self.site_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name)
        .collect()
    }
}

impl Default for AlgoliaSearch {
    fn default() -> Self {
        Self {
            enabled: true,
            app_id: None,
            search_api_key: None,
            site_id: None,
            branch: "main".to_owned(),
        }
    }
}
