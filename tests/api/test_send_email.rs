use std::net::TcpListener;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use claim::{assert_err, assert_ok};
use serde_json::json;
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, ResponseTemplate};
use zepto_mailer::domain::{Address, Email, Envelope, Header};
use zepto_mailer::{Transport, TransportError};

use crate::helpers::{spawn_app, API_KEY};

fn accepted(request_id: &str) -> ResponseTemplate {
    ResponseTemplate::new(202).set_body_json(json!({
        "Data": { "message": { "request_id": request_id } }
    }))
}

fn hello_email() -> Email {
    Email::new()
        .subject("Hello!")
        .to(Address::named("saif.gmati@symfony.com", "Saif Eddin").unwrap())
        .from(Address::named("fabpot@symfony.com", "Fabien").unwrap())
        .text("Hello There!")
        .html("<div>Hello There!</div>")
}

#[tokio::test]
async fn test_send_returns_the_request_id_of_an_accepted_email() {
    let app = spawn_app().await;

    Mock::given(path("/v1.1/email"))
        .and(method("POST"))
        .and(header("Authorization", format!("Zoho-enczapikey {}", API_KEY).as_str()))
        .and(header("Accept", "application/json"))
        .respond_with(accepted("foobar"))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let email = hello_email()
        .attach("content", "Hello There!", "text/plain")
        .embed("base64EncodedImage", "my_inline_image", "image/jpeg");

    let sent = assert_ok!(app.transport.send(&email, None).await);
    assert_eq!(sent.message_id(), "foobar");

    let body = app.last_request_body().await;
    assert_eq!(body["from"]["address"], "fabpot@symfony.com");
    assert_eq!(body["to"][0]["email_address"]["name"], "Saif Eddin");
    assert_eq!(body["to"][0]["email_address"]["address"], "saif.gmati@symfony.com");
    assert_eq!(body["subject"], "Hello!");
    assert_eq!(body["textbody"], "Hello There!");
    assert_eq!(body["htmlbody"], "<div>Hello There!</div>");
    assert_eq!(
        body["attachments"],
        json!([{
            "name": "Hello There!",
            "content": STANDARD.encode("content"),
            "mime_type": "text/plain",
        }])
    );
    assert_eq!(
        body["inline_images"],
        json!([{
            "name": "my_inline_image",
            "content": STANDARD.encode("base64EncodedImage"),
            "mime_type": "image/jpeg",
            "cid": "my_inline_image",
        }])
    );
    assert_eq!(body["track_clicks"], false);
    assert_eq!(body["track_opens"], false);
}

#[tokio::test]
async fn test_explicit_envelope_is_authoritative() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(accepted("foobar"))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let envelope = Envelope::new(
        Address::parse("bounces@symfony.com").unwrap(),
        vec![Address::parse("archive@symfony.com").unwrap()],
    )
    .unwrap();

    let sent = assert_ok!(app.transport.send(&hello_email(), Some(&envelope)).await);
    assert_eq!(sent.envelope(), &envelope);

    let body = app.last_request_body().await;
    assert_eq!(body["from"], json!({ "address": "bounces@symfony.com" }));
    assert_eq!(body["to"], json!([{ "email_address": { "address": "archive@symfony.com" } }]));
}

#[tokio::test]
async fn test_generated_headers_are_not_forwarded() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(accepted("foobar"))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let mut email = hello_email()
        .header(Header::tag("category-one"))
        .header(Header::metadata("Color", "blue"));
    email.headers_mut().add_text("Message-ID", "<abc@symfony.com>");
    email.headers_mut().add_text("X-Mailer", "Symfony Mailer");

    assert_ok!(app.transport.send(&email, None).await);

    let body = app.last_request_body().await;
    assert_eq!(
        body["mime_headers"],
        json!({ "X-Tag": "category-one", "X-Metadata-Color": "blue" })
    );
}

#[tokio::test]
async fn test_send_fails_with_the_raw_body_of_a_non_json_error() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let error = assert_err!(app.transport.send(&hello_email(), None).await);
    let message = error.to_string();

    assert!(message.contains("server error"), "{}", message);
    assert!(message.contains("500"), "{}", message);
    assert_eq!(error.status(), Some(500));
}

#[tokio::test]
async fn test_send_fails_with_the_code_and_detail_of_a_json_error() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": "X", "details": [{ "message": "bad address" }] }
        })))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let error = assert_err!(app.transport.send(&hello_email(), None).await);

    assert!(matches!(
        error,
        TransportError::Rejected { status: 400, ref code, ref detail }
            if code == "X" && detail == "bad address"
    ));
}

#[tokio::test]
async fn test_send_fails_when_the_accepted_body_has_no_request_id() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({ "message": "OK" })))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let error = assert_err!(app.transport.send(&hello_email(), None).await);
    assert!(matches!(error, TransportError::UnexpectedResponse { .. }));
}

#[tokio::test]
async fn test_send_fails_when_the_server_is_unreachable() {
    let mut app = spawn_app().await;

    // Grab a free port and release it so that nothing listens there
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let address = listener.local_addr().unwrap();
    drop(listener);
    app.transport.set_host(Some(format!("{}/v1.1/email", address)));

    let error = assert_err!(app.transport.send(&hello_email(), None).await);

    assert!(matches!(error, TransportError::Unreachable(_)));
    assert_eq!(error.to_string(), "Could not reach the remote ZeptoMail server.");
}
