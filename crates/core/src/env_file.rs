use std::collections::BTreeMap;
use std::path;

use crate::Result;
use crate::Status;

pub const ENV_FILE_NAME: &str = ".env";

/// Key/value pairs read from a `.env` file.
///
/// Later definitions of a key replace earlier ones. `$NAME` and `${NAME}` in
/// unquoted or double-quoted values are substituted when the file is read,
/// from the process environment and then from earlier lines of the file.
/// Single-quoted values are taken literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFile {
    path: path::PathBuf,
    vars: BTreeMap<String, String>,
}

impl EnvFile {
    pub fn new<P, I, K, V>(path: P, vars: I) -> Self
    where
        P: Into<path::PathBuf>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            path: path.into(),
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<Self> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<Self> {
        let iter = dotenvy::from_path_iter(&path).map_err(|e| {
            Status::new("Failed to read environment file")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        let mut vars = BTreeMap::new();
        for item in iter {
            let (key, value) = item.map_err(|e| {
                Status::new("Failed to parse environment file")
                    .with_source(e)
                    .context_with(|c| c.insert("Path", path.display().to_string()))
            })?;
            log::trace!("{}: defines `{}`", path.display(), key);
            vars.insert(key, value);
        }

        Ok(Self { path, vars })
    }

    /// Look for a `.env` in `cwd` or any of its parents.
    ///
    /// Not finding one is not an error.
    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<Option<Self>> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<Option<Self>> {
        // Walk real ancestors, not the lexical components of `cwd`
        let cwd = dunce::canonicalize(&cwd).map_err(|e| {
            Status::new("Failed to resolve directory")
                .with_source(e)
                .context_with(|c| c.insert("Path", cwd.display().to_string()))
        })?;
        match find_project_file(&cwd, ENV_FILE_NAME) {
            Some(path) => {
                log::debug!("Using environment file `{}`", path.display());
                Self::from_file(path).map(Some)
            }
            None => {
                log::debug!(
                    "No {} file found from `{}`, using the process environment only.",
                    ENV_FILE_NAME,
                    cwd.display()
                );
                Ok(None)
            }
        }
    }

    pub fn path(&self) -> &path::Path {
        &self.path
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.vars.keys().map(String::as_str)
    }
}

fn find_project_file(dir: &path::Path, name: &str) -> Option<path::PathBuf> {
    dir.ancestors()
        .map(|dir| dir.join(name))
        .find(|file_path| file_path.is_file())
}
