extern crate mockito;
extern crate slack_notifications;

use mockito::{Matcher, Server};
use slack_notifications::{ErrorKind, HttpTransport, Notification, Settings};
use std::time::Duration;

const HOOK_PATH: &str = "T00000000/B00000000/XXXXXXXXXXXXXXXXXXXXXXXX";

fn notification(server: &Server) -> Notification {
    let settings = Settings {
        base_url: format!("{}/", server.url()),
        ..Settings::default()
    };
    Notification::with_settings(settings)
        .with_username("Newt Scamander")
        .with_icon("unicorn_face")
        .to_channel("#mythical_beasts")
        .with_title("Testing Slack Notification")
        .with_text("Just checking to make sure the notification goes through")
}

#[test]
fn posts_json_to_the_hook() {
    let mut server = Server::new();
    let notification = notification(&server).to_hook(HOOK_PATH);
    let body = notification.to_json().unwrap();

    let mock = server
        .mock("POST", format!("/{}", HOOK_PATH).as_str())
        .match_header("content-type", "application/json")
        .match_header("content-length", body.len().to_string().as_str())
        .match_body(Matcher::JsonString(body.clone()))
        .with_status(200)
        .with_body("ok")
        .create();

    notification.send().unwrap();
    mock.assert();
}

#[test]
fn timeout_transport_delivers() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", format!("/{}", HOOK_PATH).as_str())
        .match_header("content-type", "application/json")
        .with_body("ok")
        .create();

    let transport = HttpTransport::with_timeout(Duration::from_secs(5)).unwrap();
    notification(&server)
        .to_hook(HOOK_PATH)
        .send_with(&transport)
        .unwrap();
    mock.assert();
}

#[test]
fn rejected_delivery_is_not_an_error() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", format!("/{}", HOOK_PATH).as_str())
        .with_status(400)
        .with_body("invalid_payload")
        .create();

    assert!(notification(&server).to_hook(HOOK_PATH).send().is_ok());
    mock.assert();
}

#[test]
fn unreachable_hook_is_not_an_error() {
    let settings = Settings {
        base_url: "http://127.0.0.1:9/".to_owned(),
        ..Settings::default()
    };
    let notification = Notification::with_settings(settings).to_hook(HOOK_PATH);
    assert!(notification.send().is_ok());
}

#[test]
fn missing_hook_path_is_reported() {
    let mut server = Server::new();
    let mock = server.mock("POST", Matcher::Any).expect(0).create();

    let err = notification(&server).send().unwrap_err();
    match *err.kind() {
        ErrorKind::MissingHookPath => {}
        ref other => panic!("unexpected error: {}", other),
    }
    mock.assert();
}
