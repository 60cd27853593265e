use siteconfig_config::SiteConfiguration;

use crate::Env;
use crate::Result;
use crate::Status;

/// Variables the provider reads, in field order
pub const CONSUMED_VARS: &[&str] = siteconfig_config::vars::ALL;

/// Resolve the configuration for the current directory.
///
/// See [`load_from_cwd`].
pub fn load() -> Result<SiteConfiguration> {
    let cwd = std::env::current_dir()
        .map_err(|e| Status::new("Failed to read current directory").with_source(e))?;
    load_from_cwd(cwd)
}

/// Resolve the configuration from the process environment, backed by the
/// nearest `.env` at or above `cwd`.
///
/// A missing `.env` is fine; a malformed one is an error.
pub fn load_from_cwd<P: Into<std::path::PathBuf>>(cwd: P) -> Result<SiteConfiguration> {
    let env = Env::from_cwd(cwd)?;
    Ok(resolve(&env))
}

pub fn resolve(env: &Env) -> SiteConfiguration {
    SiteConfiguration::from_vars(|name| env.var(name))
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::EnvFile;

    #[test]
    fn resolve_defaults() {
        let env = Env::from_vars(Vec::<(String, String)>::new());
        let actual = resolve(&env);
        assert_eq!(actual, SiteConfiguration::default());
        assert_eq!(actual.url, "http://localhost:8080");
        assert_eq!(actual.algolia_search.app_id, None);
    }

    #[test]
    fn resolve_env_file_values() {
        let env = Env::from_vars([("ALGOLIA_SITE_ID", "site-1")]).with_env_file(
            EnvFile::from_file("tests/fixtures/env/.env").unwrap(),
        );
        let actual = resolve(&env);
        assert_eq!(actual.url, "https://fixture.example.com");
        assert_eq!(actual.algolia_search.app_id.as_deref(), Some("FIXTUREAPP"));
        assert_eq!(
            actual.algolia_search.search_api_key.as_deref(),
            Some("fixture search key")
        );
        assert_eq!(actual.algolia_search.site_id.as_deref(), Some("site-1"));
        assert_eq!(actual.title, SiteConfiguration::default().title);
    }

    #[test]
    fn resolve_empty_url_ignores_env_file() {
        let env = Env::from_vars([("URL", "")]).with_env_file(
            EnvFile::from_file("tests/fixtures/env/.env").unwrap(),
        );
        let actual = resolve(&env);
        assert_eq!(actual.url, "http://localhost:8080");
    }

    #[test]
    fn load_from_cwd_is_idempotent() {
        let first = load_from_cwd("tests/fixtures/env/child").unwrap();
        let second = load_from_cwd("tests/fixtures/env/child").unwrap();
        assert_eq!(first, second);
        assert!(first.algolia_search.enabled);
        assert_eq!(first.algolia_search.branch, "main");
    }

    #[test]
    fn load_from_cwd_without_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let actual = load_from_cwd(dir.path()).unwrap();
        assert!(!actual.url.is_empty());
        assert_eq!(actual.title, "Vitaliy Hrechko");
    }

    #[test]
    fn load_from_cwd_invalid_env_file() {
        let result = load_from_cwd("tests/fixtures/invalid");
        assert!(result.is_err());
    }

    #[test]
    fn consumed_vars() {
        assert_eq!(
            CONSUMED_VARS,
            &["URL", "ALGOLIA_APP_ID", "ALGOLIA_SEARCH_API_KEY", "ALGOLIA_SITE_ID"]
        );
    }
}
