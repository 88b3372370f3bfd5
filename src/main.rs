extern crate slack_notifications;
extern crate tracing;
extern crate tracing_subscriber;

use std::env::args;
use std::fs::read_to_string;
use std::process::exit;

use slack_notifications::slack::input::toml_document;
use slack_notifications::{Notification, Result, Settings, DEFAULT_SETTINGS};
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if args().len() < 2 {
        eprintln!("usage: slack-notify <message.toml> [settings-file]");
        exit(2);
    }

    if let Err(e) = run() {
        error!("{}", e);
        for cause in e.iter().skip(1) {
            error!("caused by: {}", cause);
        }
        exit(1);
    }
}

fn run() -> Result<()> {
    let message = args().nth(1).unwrap_or_default();
    let settings = match args().nth(2) {
        Some(path) => Settings::from_file(path)?,
        None => DEFAULT_SETTINGS.clone(),
    };

    let document = toml_document(&read_to_string(&message)?)?;
    Notification::with_settings(settings)
        .configure(&document)
        .send()
}
