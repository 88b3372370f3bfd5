error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Config(::config::ConfigError);
        Json(::serde_json::error::Error);
        Toml(::toml::de::Error);
        Request(::reqwest::Error);
    }
    errors {
        MissingHookPath {
            description("hook path not set")
            display(
                "The Slack hook path is not set. Set {} in the environment or call `to_hook`",
                crate::settings::ENV_HOOK_PATH
            )
        }
        Delivery(response: String) {
            description("delivery failed")
            display("Slack responded with {:?}", response)
        }
        InvalidMessage(reason: String) {
            description("invalid message document")
            display("Invalid message document: {}", reason)
        }
    }
}
