//! The top-level message and its delivery.
//!
//! ```no_run
//! use slack_notifications::slack::{Attachment, Notification};
//!
//! Notification::new()
//!     .to_hook("T00000000/B00000000/XXXXXXXXXXXXXXXXXXXXXXXX")
//!     .with_username("Newt Scamander")
//!     .with_icon("unicorn_face")
//!     .to_channel("#mythical_beasts")
//!     .with_title("Testing Slack Notification")
//!     .with_text("Just checking to make sure the notification goes through")
//!     .add_attachment(Attachment::new().with_fallback("Unicorns").with_footer(Some("Footer Text"), None))
//!     .send()
//!     .unwrap();
//! ```

use super::attachment::{Attachment, AttachmentPayload};
use super::input::{
    flag, json_document, list, non_empty, owned, push_valid, string, toml_document, ConfigMap, Entry,
    FromConfig,
};
use crate::settings::{Settings, DEFAULT_SETTINGS};
use crate::transport::{HttpTransport, Transport};
use crate::{ErrorKind, Result};

pub const DEFAULT_TITLE: &str = "Slack Channel Notification";

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    settings: Settings,
    hook_path: Option<String>,
    username: Option<String>,
    channel: Option<String>,
    icon: Option<String>,
    title: String,
    text: String,
    unfurl_links: bool,
    unfurl_media: bool,
    attachments: Vec<Attachment>,
}

#[derive(Debug, Serialize)]
pub struct NotificationPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<&'a str>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<&'a str>,
    pub unfurl_links: bool,
    pub unfurl_media: bool,
    pub attachments: Vec<AttachmentPayload<'a>>,
}

impl Default for Notification {
    fn default() -> Notification {
        Notification::new()
    }
}

impl Notification {
    /// Falls back to the `SLACK_*` environment for anything left unset.
    pub fn new() -> Notification {
        Notification::with_settings(DEFAULT_SETTINGS.clone())
    }

    pub fn with_settings(settings: Settings) -> Notification {
        Notification {
            settings,
            hook_path: None,
            username: None,
            channel: None,
            icon: None,
            title: String::new(),
            text: String::new(),
            unfurl_links: false,
            unfurl_media: false,
            attachments: Vec::new(),
        }
    }

    pub fn from_toml(document: &str) -> Result<Notification> {
        Ok(Notification::new().configure(&toml_document(document)?))
    }

    pub fn from_json(document: &str) -> Result<Notification> {
        Ok(Notification::new().configure(&json_document(document)?))
    }

    /// Applies every recognised key of `map`. Keys that are missing leave
    /// the current value alone.
    pub fn configure(mut self, map: &ConfigMap) -> Notification {
        if let Some(hook_path) = string(map, "hook_path") {
            self = self.to_hook(hook_path.as_str());
        }
        if let Some(username) = string(map, "username") {
            self = self.with_username(username.as_str());
        }
        if let Some(channel) = string(map, "channel") {
            self = self.to_channel(channel.as_str());
        }
        if let Some(icon) = string(map, "icon") {
            self = self.with_icon(&icon);
        }
        if let Some(title) = string(map, "title") {
            self = self.with_title(title);
        }
        if let Some(text) = string(map, "text") {
            self = self.with_text(text);
        }
        if let Some(unfurl) = flag(map, "unfurl_links") {
            self = self.unfurl_links(unfurl);
        }
        if let Some(unfurl) = flag(map, "unfurl_media") {
            self = self.unfurl_media(unfurl);
        }
        if let Some(attachments) = list(map, "attachments") {
            self = self.with_attachments(attachments.iter().cloned());
        }
        self
    }

    /// Secret path appended to the webhook base URL.
    pub fn to_hook<'a, S: Into<Option<&'a str>>>(mut self, hook_path: S) -> Notification {
        self.hook_path = owned(hook_path);
        self
    }

    pub fn with_username<'a, S: Into<Option<&'a str>>>(mut self, username: S) -> Notification {
        self.username = owned(username);
        self
    }

    pub fn to_channel<'a, S: Into<Option<&'a str>>>(mut self, channel: S) -> Notification {
        self.channel = owned(channel);
        self
    }

    /// Stores the emoji name wrapped in colons: `unicorn` and `:unicorn:`
    /// both become `:unicorn:`.
    pub fn with_icon(mut self, name: &str) -> Notification {
        self.icon = Some(format!(":{}:", name).replace("::", ":"));
        self
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_ref().map(String::as_str)
    }

    pub fn with_title<S: Into<String>>(mut self, title: S) -> Notification {
        self.title = title.into();
        self
    }

    pub fn with_text<S: Into<String>>(mut self, text: S) -> Notification {
        self.text = text.into();
        self
    }

    pub fn unfurl_links(mut self, unfurl: bool) -> Notification {
        self.unfurl_links = unfurl;
        self
    }

    pub fn unfurl_media(mut self, unfurl: bool) -> Notification {
        self.unfurl_media = unfurl;
        self
    }

    /// Appends each valid attachment. Existing attachments are kept.
    pub fn with_attachments<I, E>(mut self, attachments: I) -> Notification
    where
        I: IntoIterator<Item = E>,
        E: Into<Entry<Attachment>>,
    {
        for attachment in attachments {
            self = self.add_attachment(attachment);
        }
        self
    }

    pub fn add_attachment<E: Into<Entry<Attachment>>>(mut self, attachment: E) -> Notification {
        let mut attachments = Some(self.attachments);
        push_valid(&mut attachments, attachment);
        self.attachments = attachments.unwrap_or_default();
        self
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    pub fn payload(&self) -> NotificationPayload {
        let mut text = String::new();
        if !self.title.is_empty() {
            text.push_str(&format!("*{}* ", self.title));
        }
        text.push_str(&self.text);

        NotificationPayload {
            username: non_empty(&self.username).or_else(|| self.settings.username()),
            channel: non_empty(&self.channel).or_else(|| self.settings.channel()),
            text,
            icon_emoji: non_empty(&self.icon).or_else(|| self.settings.icon()),
            unfurl_links: self.unfurl_links,
            unfurl_media: self.unfurl_media,
            attachments: self.attachments.iter().map(Attachment::payload).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(::serde_json::to_string(&self.payload())?)
    }

    /// Full webhook URL, or `MissingHookPath` when no hook path is known.
    pub fn hook_url(&self) -> Result<String> {
        match non_empty(&self.hook_path).or_else(|| self.settings.hook_path()) {
            Some(hook_path) => Ok(format!("{}{}", self.settings.base_url, hook_path)),
            None => bail!(ErrorKind::MissingHookPath),
        }
    }

    /// Posts the message over HTTPS.
    ///
    /// Only a missing hook path (or a payload that fails to serialize) is
    /// returned as an error. Delivery is best effort: connection failures
    /// and any reply other than `ok` are logged and then dropped, so
    /// `Ok(())` does not mean Slack accepted the message.
    pub fn send(&self) -> Result<()> {
        self.send_with(&HttpTransport::new())
    }

    /// [`send`](#method.send) through a caller supplied transport.
    pub fn send_with<T: Transport + ?Sized>(&self, transport: &T) -> Result<()> {
        let url = self.hook_url()?;
        let body = self.to_json()?;
        debug!(bytes = body.len(), attachments = self.attachments.len(), "Posting Slack notification");

        let delivered = transport.post_json(&url, body).and_then(|response| {
            if response == "ok" {
                Ok(())
            } else {
                Err(ErrorKind::Delivery(response).into())
            }
        });

        if let Err(e) = delivered {
            let title = if self.title.is_empty() {
                DEFAULT_TITLE
            } else {
                self.title.as_str()
            };
            error!(
                "{}: Unable to contact slack channel. {} on {}",
                title, e, self.settings.server_name
            );
        }
        Ok(())
    }

    /// `"<title>: <text> on <host>"`, dropping whichever half is empty.
    pub fn log_line(&self) -> String {
        let summary = match (self.title.is_empty(), self.text.is_empty()) {
            (false, false) => format!("{}: {}", self.title, self.text),
            (false, true) => self.title.clone(),
            (true, _) => self.text.clone(),
        };
        format!("{} on {}", summary, self.settings.server_name)
    }

    pub fn log(&self) -> &Notification {
        error!("{}", self.log_line());
        self
    }
}

impl FromConfig for Notification {
    fn from_config(map: &ConfigMap) -> Notification {
        Notification::new().configure(map)
    }
}
