use std::collections::BTreeMap;
use std::fmt;
use std::path;

use crate::EnvFile;
use crate::Result;

/// Read-only view of the build environment.
///
/// Variables come from the process (or an explicit set, see
/// [`Env::from_vars`]) with an optional [`EnvFile`] layered underneath. A
/// variable that is present, even if empty, shadows the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Env {
    vars: Option<BTreeMap<String, String>>,
    file: Option<EnvFile>,
}

impl Env {
    /// Variables from the running process.
    pub fn from_process() -> Self {
        Self {
            vars: None,
            file: None,
        }
    }

    /// Variables from an explicit set, ignoring the process.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
            file: None,
        }
    }

    /// The process environment plus the `.env` found from `cwd`, if any.
    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<Self> {
        let env = Self::from_process();
        let env = match EnvFile::from_cwd(cwd)? {
            Some(file) => env.with_env_file(file),
            None => env,
        };
        Ok(env)
    }

    pub fn with_env_file(mut self, file: EnvFile) -> Self {
        self.file = Some(file);
        self
    }

    pub fn env_file(&self) -> Option<&EnvFile> {
        self.file.as_ref()
    }

    pub fn var(&self, name: &str) -> Option<String> {
        let value = match self.lookup(name) {
            Lookup::Found(value) => Some(value),
            Lookup::Unusable => None,
            Lookup::Missing => self.file.as_ref().and_then(|f| f.get(name)).map(str::to_owned),
        };
        log::trace!("{}: {}", name, if value.is_some() { "set" } else { "unset" });
        value
    }

    /// Where `name` would be resolved from.
    pub fn origin(&self, name: &str) -> Origin<'_> {
        match self.lookup(name) {
            Lookup::Found(_) | Lookup::Unusable => Origin::Process,
            Lookup::Missing => match &self.file {
                Some(file) if file.get(name).is_some() => Origin::EnvFile(file.path()),
                _ => Origin::Unset,
            },
        }
    }

    fn lookup(&self, name: &str) -> Lookup {
        match &self.vars {
            Some(vars) => match vars.get(name) {
                Some(value) => Lookup::Found(value.clone()),
                None => Lookup::Missing,
            },
            None => match std::env::var(name) {
                Ok(value) => Lookup::Found(value),
                Err(std::env::VarError::NotPresent) => Lookup::Missing,
                Err(std::env::VarError::NotUnicode(_)) => {
                    log::warn!("Ignoring `{name}`, its value is not valid UTF-8");
                    Lookup::Unusable
                }
            },
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::from_process()
    }
}

enum Lookup {
    Found(String),
    // Present but not representable
    Unusable,
    Missing,
}

/// Source of a variable's value
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Origin<'e> {
    Process,
    EnvFile(&'e path::Path),
    Unset,
}

impl fmt::Display for Origin<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Process => write!(f, "process"),
            Self::EnvFile(path) => write!(f, "env file `{}`", path.display()),
            Self::Unset => write!(f, "unset"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_file() -> EnvFile {
        EnvFile::new(
            "site/.env",
            [("URL", "https://file.example.com"), ("ALGOLIA_APP_ID", "FILEAPP")],
        )
    }

    #[test]
    fn from_vars_returns_set_values() {
        let env = Env::from_vars([("URL", "https://example.com")]);
        assert_eq!(env.var("URL").as_deref(), Some("https://example.com"));
        assert_eq!(env.var("ALGOLIA_APP_ID"), None);
    }

    #[test]
    fn env_file_fills_unset_vars() {
        let env = Env::from_vars([("URL", "https://example.com")]).with_env_file(fixture_file());
        assert_eq!(env.var("URL").as_deref(), Some("https://example.com"));
        assert_eq!(env.var("ALGOLIA_APP_ID").as_deref(), Some("FILEAPP"));
    }

    #[test]
    fn empty_var_shadows_env_file() {
        let env = Env::from_vars([("URL", "")]).with_env_file(fixture_file());
        assert_eq!(env.var("URL").as_deref(), Some(""));
    }

    #[test]
    fn origin_reports_source() {
        let env = Env::from_vars([("URL", "https://example.com")]).with_env_file(fixture_file());
        assert_eq!(env.origin("URL"), Origin::Process);
        assert_eq!(
            env.origin("ALGOLIA_APP_ID"),
            Origin::EnvFile(path::Path::new("site/.env"))
        );
        assert_eq!(env.origin("ALGOLIA_SITE_ID"), Origin::Unset);
    }

    #[test]
    fn origin_display() {
        assert_eq!(Origin::Process.to_string(), "process");
        assert_eq!(
            Origin::EnvFile(path::Path::new("site/.env")).to_string(),
            "env file `site/.env`"
        );
        assert_eq!(Origin::Unset.to_string(), "unset");
    }

    #[test]
    fn from_process_reads_cargo_manifest_dir() {
        let env = Env::from_process();
        assert!(env.var("CARGO_MANIFEST_DIR").is_some());
        assert_eq!(env.origin("CARGO_MANIFEST_DIR"), Origin::Process);
    }

    #[test]
    fn from_cwd_layers_discovered_file() {
        let env = Env::from_cwd("tests/fixtures/env/child").unwrap();
        let file = env.env_file().unwrap();
        let expected = dunce::canonicalize("tests/fixtures/env/.env").unwrap();
        assert_eq!(file.path(), expected);
    }

    #[test]
    #[cfg(unix)]
    fn non_unicode_var_is_unset_and_shadows_env_file() {
        use std::os::unix::ffi::OsStrExt as _;

        let name = "SITECONFIG_TEST_NON_UNICODE";
        // SAFETY: no other test reads or writes this variable
        unsafe {
            std::env::set_var(name, std::ffi::OsStr::from_bytes(b"bad\xff\xfe"));
        }
        let env =
            Env::from_process().with_env_file(EnvFile::new("site/.env", [(name, "from-file")]));
        assert_eq!(env.var(name), None);
        assert_eq!(env.origin(name), Origin::Process);
    }
}
