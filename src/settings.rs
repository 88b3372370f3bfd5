use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use gethostname::gethostname;
use std::path::Path;

use super::Result;
use crate::slack::input::non_empty;

pub const DEFAULT_BASE_URL: &str = "https://hooks.slack.com/services/";

pub const ENV_PREFIX: &str = "SLACK";
pub const ENV_HOOK_PATH: &str = "SLACK_HOOK_PATH";
pub const ENV_USERNAME: &str = "SLACK_USERNAME";
pub const ENV_ICON: &str = "SLACK_ICON";
pub const ENV_CHANNEL: &str = "SLACK_CHANNEL";

lazy_static! {
    /// Settings read once from the process environment.
    pub static ref DEFAULT_SETTINGS: Settings = Settings::assure_new();
}

/// Fallback values consulted by a `Notification` when it was not given its own.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub hook_path: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default = "default_server_name")]
    pub server_name: String,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            base_url: default_base_url(),
            hook_path: None,
            username: None,
            icon: None,
            channel: None,
            server_name: default_server_name(),
        }
    }
}

impl Settings {
    /// Reads `SLACK_*` variables from the environment.
    pub fn try_new() -> Result<Settings> {
        let settings = Settings::builder()?
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize::<Settings>()?;
        Ok(settings)
    }

    /// Reads a settings file, with `SLACK_*` variables taking precedence over it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Settings> {
        let settings = Settings::builder()?
            .add_source(File::from(path.as_ref()))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize::<Settings>()?;
        Ok(settings)
    }

    pub fn assure_new() -> Settings {
        match Settings::try_new() {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "Unable to read Slack settings from the environment, using defaults");
                Settings::default()
            }
        }
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>> {
        let builder = Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("server_name", default_server_name())?;
        Ok(builder)
    }

    pub fn hook_path(&self) -> Option<&str> {
        non_empty(&self.hook_path)
    }

    pub fn username(&self) -> Option<&str> {
        non_empty(&self.username)
    }

    pub fn icon(&self) -> Option<&str> {
        non_empty(&self.icon)
    }

    pub fn channel(&self) -> Option<&str> {
        non_empty(&self.channel)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}

/// The machine's host name; `SLACK_SERVER_NAME` overrides it.
fn default_server_name() -> String {
    gethostname()
        .into_string()
        .ok()
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| "localhost".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn default_points_at_slack() {
        let settings = Settings::default();
        assert_eq!(settings.base_url, "https://hooks.slack.com/services/");
        assert_eq!(settings.hook_path(), None);
        assert!(!settings.server_name.is_empty());
    }

    #[test]
    fn server_name_is_the_host_name() {
        let host = gethostname().into_string().unwrap();
        if !host.is_empty() {
            assert_eq!(Settings::default().server_name, host);
        }
    }

    #[test]
    fn empty_values_count_as_unset() {
        let settings = Settings {
            username: Some(String::new()),
            channel: Some("#general".to_owned()),
            ..Settings::default()
        };
        assert_eq!(settings.username(), None);
        assert_eq!(settings.channel(), Some("#general"));
    }

    #[test]
    fn reads_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slack.toml");
        fs::write(
            &path,
            "base_url = \"http://127.0.0.1:9/\"\nserver_name = \"ci-runner\"\n",
        ).unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.server_name, "ci-runner");
        if ::std::env::var("SLACK_BASE_URL").is_err() {
            assert_eq!(settings.base_url, "http://127.0.0.1:9/");
        }
    }

    #[test]
    fn missing_settings_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Settings::from_file(dir.path().join("absent.toml")).is_err());
    }
}
