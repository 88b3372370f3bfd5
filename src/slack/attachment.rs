use chrono::{DateTime, Utc};

use super::action::{Action, ActionPayload};
use super::field::{Field, FieldPayload};
use super::input::{flag, list, owned, push_valid, string, ConfigMap, Entry, FromConfig};

pub const DEFAULT_COLOR: &str = "#666666";

/// A rich-content block of a message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attachment {
    fallback: Option<String>,
    color: Option<String>,
    text: Option<String>,
    pretext: Option<String>,
    author_name: Option<String>,
    author_link: Option<String>,
    author_icon: Option<String>,
    title: Option<String>,
    title_link: Option<String>,
    fields: Option<Vec<Field>>,
    actions: Option<Vec<Action>>,
    image_url: Option<String>,
    thumb_url: Option<String>,
    footer: Option<String>,
    footer_icon: Option<String>,
    timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct AttachmentPayload<'a> {
    pub fallback: Option<&'a str>,
    pub color: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretext: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_link: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_icon: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_link: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldPayload<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<ActionPayload<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_icon: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<i64>,
}

typed_entry!(Attachment);

impl Attachment {
    pub fn new() -> Attachment {
        Attachment::default()
    }

    /// Plain-text summary for clients that cannot render attachments.
    pub fn with_fallback<'a, S: Into<Option<&'a str>>>(mut self, fallback: S) -> Attachment {
        self.fallback = owned(fallback);
        self
    }

    /// An unset or empty color renders as [`DEFAULT_COLOR`].
    pub fn with_color<'a, S: Into<Option<&'a str>>>(mut self, color: S) -> Attachment {
        self.color = owned(color);
        self
    }

    pub fn with_text<'a, S: Into<Option<&'a str>>>(mut self, text: S) -> Attachment {
        self.text = owned(text);
        self
    }

    pub fn with_pretext<'a, S: Into<Option<&'a str>>>(mut self, pretext: S) -> Attachment {
        self.pretext = owned(pretext);
        self
    }

    /// Replaces the whole author block. Link and icon are only rendered
    /// while a name is present.
    pub fn with_author<'a, N, L, I>(mut self, name: N, link: L, icon: I) -> Attachment
    where
        N: Into<Option<&'a str>>,
        L: Into<Option<&'a str>>,
        I: Into<Option<&'a str>>,
    {
        self.author_name = owned(name);
        self.author_link = owned(link);
        self.author_icon = owned(icon);
        self
    }

    /// Replaces the title block. The link is only rendered with a title.
    pub fn with_title<'a, T, L>(mut self, title: T, link: L) -> Attachment
    where
        T: Into<Option<&'a str>>,
        L: Into<Option<&'a str>>,
    {
        self.title = owned(title);
        self.title_link = owned(link);
        self
    }

    /// Replaces every field. Entries that are neither a `Field` nor a
    /// non-empty map are skipped.
    pub fn with_fields<I, E>(mut self, fields: I) -> Attachment
    where
        I: IntoIterator<Item = E>,
        E: Into<Entry<Field>>,
    {
        self.fields = None;
        for field in fields {
            push_valid(&mut self.fields, field);
        }
        self
    }

    pub fn add_field<E: Into<Entry<Field>>>(mut self, field: E) -> Attachment {
        push_valid(&mut self.fields, field);
        self
    }

    pub fn with_actions<I, E>(mut self, actions: I) -> Attachment
    where
        I: IntoIterator<Item = E>,
        E: Into<Entry<Action>>,
    {
        self.actions = None;
        for action in actions {
            push_valid(&mut self.actions, action);
        }
        self
    }

    pub fn add_action<E: Into<Entry<Action>>>(mut self, action: E) -> Attachment {
        push_valid(&mut self.actions, action);
        self
    }

    pub fn with_image_url<'a, S: Into<Option<&'a str>>>(mut self, image_url: S) -> Attachment {
        self.image_url = owned(image_url);
        self
    }

    pub fn with_thumb_url<'a, S: Into<Option<&'a str>>>(mut self, thumb_url: S) -> Attachment {
        self.thumb_url = owned(thumb_url);
        self
    }

    /// `None` keeps the current value of that slot and `Some("")` clears it,
    /// so the footer and its icon can be set in separate calls.
    pub fn with_footer<'a, F, I>(mut self, footer: F, icon: I) -> Attachment
    where
        F: Into<Option<&'a str>>,
        I: Into<Option<&'a str>>,
    {
        if let Some(footer) = footer.into() {
            self.footer = Some(footer.to_owned()).filter(|f| !f.is_empty());
        }
        if let Some(icon) = icon.into() {
            self.footer_icon = Some(icon.to_owned()).filter(|i| !i.is_empty());
        }
        self
    }

    pub fn with_timestamp(mut self, timestamp: bool) -> Attachment {
        self.timestamp = if timestamp { Some(Utc::now()) } else { None };
        self
    }

    /// When the timestamp was requested, if it was.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Dependent keys (`author_link`, `title_link`, `footer_icon`, ...) are
    /// only present together with their parent. `ts` is stamped with the
    /// time of this call, not the time it was requested.
    pub fn payload(&self) -> AttachmentPayload {
        let author_name = as_str(&self.author_name);
        let title = as_str(&self.title);
        let footer = as_str(&self.footer);

        AttachmentPayload {
            fallback: as_str(&self.fallback),
            color: as_str(&self.color)
                .filter(|c| !c.is_empty())
                .unwrap_or(DEFAULT_COLOR),
            pretext: as_str(&self.pretext),
            text: as_str(&self.text),
            author_name,
            author_link: author_name.and(as_str(&self.author_link)),
            author_icon: author_name.and(as_str(&self.author_icon)),
            title,
            title_link: title.and(as_str(&self.title_link)),
            fields: self
                .fields
                .as_ref()
                .map(|fields| fields.iter().map(Field::payload).collect()),
            actions: self
                .actions
                .as_ref()
                .map(|actions| actions.iter().map(Action::payload).collect()),
            image_url: as_str(&self.image_url),
            thumb_url: as_str(&self.thumb_url),
            footer,
            footer_icon: footer.and(as_str(&self.footer_icon)),
            ts: self.timestamp.map(|_| Utc::now().timestamp()),
        }
    }
}

impl FromConfig for Attachment {
    fn from_config(map: &ConfigMap) -> Attachment {
        let fields = list(map, "fields").cloned().unwrap_or_default();
        let actions = list(map, "actions").cloned().unwrap_or_default();

        Attachment::new()
            .with_fallback(string(map, "fallback").as_deref())
            .with_color(string(map, "color").as_deref().unwrap_or(DEFAULT_COLOR))
            .with_text(string(map, "text").as_deref())
            .with_pretext(string(map, "pretext").as_deref())
            .with_author(
                string(map, "author_name").as_deref(),
                string(map, "author_link").as_deref(),
                string(map, "author_icon").as_deref(),
            )
            .with_title(
                string(map, "title").as_deref(),
                string(map, "title_link").as_deref(),
            )
            .with_fields(fields)
            .with_actions(actions)
            .with_image_url(string(map, "image_url").as_deref())
            .with_thumb_url(string(map, "thumb_url").as_deref())
            .with_footer(
                string(map, "footer").as_deref(),
                string(map, "footer_icon").as_deref(),
            )
            .with_timestamp(flag(map, "timestamp").unwrap_or(false))
    }
}

fn as_str(value: &Option<String>) -> Option<&str> {
    value.as_ref().map(String::as_str)
}
