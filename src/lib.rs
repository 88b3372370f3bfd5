extern crate chrono;
extern crate config;
#[macro_use]
extern crate error_chain;
extern crate gethostname;
#[macro_use]
extern crate lazy_static;
extern crate reqwest;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[cfg_attr(test, macro_use)]
extern crate serde_json;
extern crate toml;
#[macro_use]
extern crate tracing;

pub mod error;
pub use error::{Error, ErrorKind, Result};

pub mod settings;
pub use settings::{Settings, DEFAULT_SETTINGS};

pub mod transport;
pub use transport::{HttpTransport, Transport};

pub mod slack;
pub use slack::{Action, ActionStyle, Attachment, Entry, Field, Notification};
