use super::input::{flag, owned, string, ConfigMap, FromConfig};

/// A title/value pair rendered in the attachment's field table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Field {
    title: Option<String>,
    value: Option<String>,
    short: bool,
}

#[derive(Debug, Serialize)]
pub struct FieldPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<&'a str>,
    pub short: bool,
}

typed_entry!(Field);

impl Field {
    pub fn new() -> Field {
        Field::default()
    }

    pub fn with_title<'a, S: Into<Option<&'a str>>>(mut self, title: S) -> Field {
        self.title = owned(title);
        self
    }

    pub fn with_value<'a, S: Into<Option<&'a str>>>(mut self, value: S) -> Field {
        self.value = owned(value);
        self
    }

    /// Whether the field is narrow enough to sit beside another one.
    pub fn short(mut self, short: bool) -> Field {
        self.short = short;
        self
    }

    pub fn payload(&self) -> FieldPayload {
        FieldPayload {
            title: self.title.as_ref().map(String::as_str),
            value: self.value.as_ref().map(String::as_str),
            short: self.short,
        }
    }
}

impl FromConfig for Field {
    fn from_config(map: &ConfigMap) -> Field {
        Field::new()
            .with_title(string(map, "title").as_deref())
            .with_value(string(map, "value").as_deref())
            .short(flag(map, "short").unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_is_always_emitted() {
        let payload = serde_json::to_value(Field::new().payload()).unwrap();
        assert_eq!(payload, json!({ "short": false }));
    }

    #[test]
    fn builder_sets_every_key() {
        let field = Field::new()
            .with_title("Mythical Animal")
            .with_value("Dragon")
            .short(true);
        assert_eq!(
            serde_json::to_value(field.payload()).unwrap(),
            json!({ "title": "Mythical Animal", "value": "Dragon", "short": true })
        );
    }

    #[test]
    fn title_and_value_can_be_cleared() {
        let field = Field::new()
            .with_title("Mythical Animal")
            .with_value("Dragon")
            .with_value(None);
        assert_eq!(
            serde_json::to_value(field.payload()).unwrap(),
            json!({ "title": "Mythical Animal", "short": false })
        );
    }

    #[test]
    fn from_config_coerces_short() {
        let map = json!({ "title": "Mythical Animal", "value": "Unicorn", "short": 1, "color": "red" });
        let field = Field::from_config(map.as_object().unwrap());
        assert_eq!(
            field,
            Field::new()
                .with_title("Mythical Animal")
                .with_value("Unicorn")
                .short(true)
        );
    }
}
