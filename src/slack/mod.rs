//! Builders for Slack incoming-webhook messages.

#[macro_use]
pub mod input;
pub mod action;
pub mod attachment;
pub mod field;
pub mod notification;

pub use self::action::{Action, ActionPayload, ActionStyle, DEFAULT_ACTION_TYPE};
pub use self::attachment::{Attachment, AttachmentPayload, DEFAULT_COLOR};
pub use self::field::{Field, FieldPayload};
pub use self::input::{ConfigMap, Entry, FromConfig};
pub use self::notification::{Notification, NotificationPayload, DEFAULT_TITLE};
