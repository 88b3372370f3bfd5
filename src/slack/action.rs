use std::fmt;

use super::input::{owned, string, ConfigMap, FromConfig};

pub const DEFAULT_ACTION_TYPE: &str = "button";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStyle {
    Primary,
    Danger,
}

impl fmt::Display for ActionStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            ActionStyle::Primary => "primary",
            ActionStyle::Danger => "danger",
        })
    }
}

fn parse_style(style: &str) -> Option<ActionStyle> {
    match style {
        "primary" => Some(ActionStyle::Primary),
        "danger" => Some(ActionStyle::Danger),
        _ => None,
    }
}

/// A button attached to a message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Action {
    action_type: Option<String>,
    text: Option<String>,
    url: Option<String>,
    value: Option<String>,
    style: Option<ActionStyle>,
}

#[derive(Debug, Serialize)]
pub struct ActionPayload<'a> {
    #[serde(rename = "type")]
    pub action_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ActionStyle>,
}

typed_entry!(Action);

impl Action {
    pub fn new() -> Action {
        Action::default()
    }

    /// An unset or empty type falls back to `button`.
    pub fn with_type<'a, S: Into<Option<&'a str>>>(mut self, action_type: S) -> Action {
        let action_type = action_type.into().filter(|t| !t.is_empty());
        self.action_type = Some(action_type.unwrap_or(DEFAULT_ACTION_TYPE).to_owned());
        self
    }

    pub fn with_text<'a, S: Into<Option<&'a str>>>(mut self, text: S) -> Action {
        self.text = owned(text);
        self
    }

    pub fn with_url<'a, S: Into<Option<&'a str>>>(mut self, url: S) -> Action {
        self.url = owned(url);
        self
    }

    pub fn with_value<'a, S: Into<Option<&'a str>>>(mut self, value: S) -> Action {
        self.value = owned(value);
        self
    }

    /// Only `primary` and `danger` are kept; anything else clears the style.
    pub fn with_style<'a, S: Into<Option<&'a str>>>(mut self, style: S) -> Action {
        self.style = style.into().and_then(parse_style);
        self
    }

    pub fn with_action_style(mut self, style: ActionStyle) -> Action {
        self.style = Some(style);
        self
    }

    pub fn payload(&self) -> ActionPayload {
        ActionPayload {
            action_type: self
                .action_type
                .as_ref()
                .map(String::as_str)
                .filter(|t| !t.is_empty())
                .unwrap_or(DEFAULT_ACTION_TYPE),
            text: self.text.as_ref().map(String::as_str),
            url: self.url.as_ref().map(String::as_str),
            value: self.value.as_ref().map(String::as_str),
            style: self.style,
        }
    }
}

impl FromConfig for Action {
    fn from_config(map: &ConfigMap) -> Action {
        Action::new()
            .with_type(string(map, "type").as_deref())
            .with_text(string(map, "text").as_deref())
            .with_url(string(map, "url").as_deref())
            .with_value(string(map, "value").as_deref())
            .with_style(string(map, "style").as_deref())
    }
}
