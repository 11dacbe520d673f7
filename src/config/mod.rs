use anyhow::Result;
use std::{
    env, fmt, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "alas-tools.toml";

const ENV_NAME_API_BASE_URL: &str = "ALAS_API_BASE_URL";
const ENV_NAME_API_USER: &str = "ALAS_API_USER";
const ENV_NAME_API_PASSWORD: &str = "ALAS_API_PASSWORD";

const DEV_API_USER: &str = "dev_user";
const DEV_API_PASSWORD: &str = "dev_password";

/// Load an optional `.env` file.
///
/// A variable that is unset or empty in the process environment
/// takes the value from the file.
pub fn load_dotenv() {
    match dotenvy::dotenv_iter() {
        Ok(entries) => {
            for (key, value) in dotenv_updates(entries, |name| env::var(name).ok()) {
                env::set_var(key, value);
            }
        }
        Err(err) if err.not_found() => {}
        Err(err) => log::warn!("Unable to load .env file: {err}"),
    }
}

fn dotenv_updates<I, F>(entries: I, lookup_env: F) -> Vec<(String, String)>
where
    I: IntoIterator<Item = dotenvy::Result<(String, String)>>,
    F: Fn(&str) -> Option<String>,
{
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Ok((key, value)) => lookup_env(&key)
                .map_or(true, |current| current.is_empty())
                .then_some((key, value)),
            Err(err) => {
                log::warn!("Skipping invalid .env entry: {err}");
                None
            }
        })
        .collect()
}

pub struct Config {
    pub api: Api,
    pub output: Output,
    pub ui: Ui,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::debug!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        Ok(Self::from_raw(raw_config, |name| env::var(name).ok()))
    }

    fn from_raw<F>(from: raw::Config, lookup_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw::Config { api, output, ui } = from;

        let raw::Api { base_url } = api.unwrap_or_default();
        let base_url = lookup_env(ENV_NAME_API_BASE_URL)
            .filter(|url| !url.is_empty())
            .unwrap_or(base_url);
        let api = Api {
            base_url,
            credentials: Credentials::from_env(&lookup_env),
        };

        let raw::Output { dir } = output.unwrap_or_default();
        let output = Output { dir };

        let raw::Ui { color } = ui.unwrap_or_default();
        let ui = Ui { color };

        Self { api, output, ui }
    }
}

pub struct Api {
    pub base_url: String,
    pub credentials: Credentials,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    fn from_env<F>(lookup_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup_env(name).filter(|v| !v.is_empty());
        let username = non_empty(ENV_NAME_API_USER).unwrap_or_else(|| {
            log::warn!("{ENV_NAME_API_USER} is not set, using a development placeholder");
            DEV_API_USER.to_string()
        });
        let password = non_empty(ENV_NAME_API_PASSWORD).unwrap_or_else(|| {
            log::warn!("{ENV_NAME_API_PASSWORD} is not set, using a development placeholder");
            DEV_API_PASSWORD.to_string()
        });
        Self { username, password }
    }

    pub fn uses_placeholders(&self) -> bool {
        self.username == DEV_API_USER || self.password == DEV_API_PASSWORD
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

pub struct Output {
    /// File system directory for the exported files.
    pub dir: PathBuf,
}

pub struct Ui {
    pub color: bool,
}
