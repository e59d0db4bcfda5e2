//! Composer flow against a scripted transport.

use async_trait::async_trait;
use memodrop::client::{MemoHttpRequest, TransportError, TransportResponse};
use memodrop::storage::MemoryStore;
use memodrop::{
    Language, MemoComposer, MemoError, MemoService, SendStatus, Settings, SettingsManager, TagMode,
    Transport,
};
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

/// Replies with a fixed result, optionally waiting for `release` first.
struct ScriptedTransport {
    reply: Result<TransportResponse, TransportError>,
    gated: bool,
    release: Notify,
    seen: Mutex<Vec<MemoHttpRequest>>,
}

impl ScriptedTransport {
    fn new(reply: Result<TransportResponse, TransportError>, gated: bool) -> Arc<Self> {
        Arc::new(Self {
            reply,
            gated,
            release: Notify::new(),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn status(status: u16) -> Arc<Self> {
        Self::new(Ok(response(status)), false)
    }

    fn gated(status: u16) -> Arc<Self> {
        Self::new(Ok(response(status)), true)
    }

    fn failing(detail: &str) -> Arc<Self> {
        Self::new(Err(TransportError(detail.to_string())), false)
    }

    fn calls(&self) -> usize {
        self.seen.lock().len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(
        &self,
        request: &MemoHttpRequest,
    ) -> Result<TransportResponse, TransportError> {
        self.seen.lock().push(request.clone());
        if self.gated {
            self.release.notified().await;
        }
        self.reply.clone()
    }
}

fn response(status: u16) -> TransportResponse {
    TransportResponse {
        status: Some(status),
        body: br#"{"id":7,"content":"ignored"}"#.to_vec(),
    }
}

fn configured() -> Settings {
    Settings {
        server_url: "https://memos.example.com/".to_string(),
        access_token: "abc".to_string(),
        ..Settings::default()
    }
}

fn composer(settings: Settings, transport: Arc<ScriptedTransport>) -> MemoComposer {
    let manager = SettingsManager::open(Box::new(MemoryStore::with_settings(settings))).unwrap();
    MemoComposer::new(Arc::new(manager), MemoService::new(transport))
}

#[tokio::test]
async fn tagged_memo_reaches_the_endpoint() {
    let transport = ScriptedTransport::status(200);
    let composer = composer(
        Settings {
            tags_enabled: true,
            tag_mode: TagMode::Append,
            tags: vec!["work".to_string(), "idea".to_string()],
            ..configured()
        },
        Arc::clone(&transport),
    );
    composer.set_content("Buy milk");
    assert_eq!(composer.final_content(), "Buy milk\n\n#work #idea");

    let status = composer.send_memo().await;

    assert_eq!(status, SendStatus::Sent);
    let seen = transport.seen.lock();
    assert_eq!(seen.len(), 1);
    let request = &seen[0];
    assert_eq!(request.method, reqwest::Method::POST);
    assert_eq!(request.url.as_str(), "https://memos.example.com/api/v1/memos");
    assert_eq!(request.header("Authorization"), Some("Bearer abc"));
    assert_eq!(request.header("Content-Type"), Some("application/json"));
    assert_eq!(request.body_text(), r##"{"content":"Buy milk\n\n#work #idea"}"##);
}

#[tokio::test]
async fn success_clears_content() {
    let composer = composer(configured(), ScriptedTransport::status(201));
    composer.set_content("note");

    assert_eq!(composer.send_memo().await, SendStatus::Sent);

    let state = composer.state();
    assert_eq!(state.content, "");
    assert!(state.show_success);
    assert!(!state.is_loading);
    assert_eq!(state.error, None);
}

#[tokio::test(start_paused = true)]
async fn success_flag_resets_after_two_seconds() {
    let composer = composer(configured(), ScriptedTransport::status(200));
    composer.set_content("note");
    composer.send_memo().await;

    tokio::time::sleep(Duration::from_millis(1_900)).await;
    assert!(composer.show_success());

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(!composer.show_success());
}

#[tokio::test(start_paused = true)]
async fn stale_timer_leaves_newer_success_alone() {
    let composer = composer(configured(), ScriptedTransport::status(200));

    composer.set_content("first");
    composer.send_memo().await;
    tokio::time::sleep(Duration::from_millis(1_500)).await;

    composer.set_content("second");
    composer.send_memo().await;
    tokio::time::sleep(Duration::from_millis(1_000)).await;
    assert!(composer.show_success(), "first timer must not clear the second success");

    tokio::time::sleep(Duration::from_millis(1_100)).await;
    assert!(!composer.show_success());
}

#[tokio::test(start_paused = true)]
async fn custom_success_display_is_honored() {
    let composer = composer(configured(), ScriptedTransport::status(200))
        .with_success_display(Duration::from_millis(500));
    composer.set_content("note");
    composer.send_memo().await;

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert!(composer.show_success());

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(!composer.show_success());
}

#[tokio::test]
async fn failure_keeps_content_and_reports_kind() {
    let composer = composer(
        Settings {
            language: Language::French,
            ..configured()
        },
        ScriptedTransport::status(401),
    );
    composer.set_content("keep me");

    let status = composer.send_memo().await;

    assert_eq!(status, SendStatus::Failed(MemoError::Unauthorized));
    assert_eq!(composer.content(), "keep me");
    assert!(!composer.show_success());
    assert!(!composer.is_loading());
    assert_eq!(
        composer.error_message().as_deref(),
        Some("Non autorisé. Vérifiez votre jeton d'accès.")
    );

    composer.clear_error();
    assert_eq!(composer.error(), None);
    assert!(composer.can_send());
}

#[tokio::test]
async fn server_and_network_failures_are_distinguished() {
    let composer_500 = composer(configured(), ScriptedTransport::status(500));
    composer_500.set_content("a");
    assert_eq!(
        composer_500.send_memo().await,
        SendStatus::Failed(MemoError::Server(500))
    );

    let offline = composer(configured(), ScriptedTransport::failing("connection refused"));
    offline.set_content("b");
    assert_eq!(
        offline.send_memo().await,
        SendStatus::Failed(MemoError::Network("connection refused".to_string()))
    );
    assert_eq!(offline.content(), "b");
}

#[tokio::test]
async fn skipped_send_keeps_previous_error() {
    let transport = ScriptedTransport::status(403);
    let composer = composer(configured(), transport);
    composer.set_content("x");
    composer.send_memo().await;
    assert_eq!(composer.error(), Some(MemoError::Unauthorized));

    composer.set_content("   ");
    assert_eq!(composer.send_memo().await, SendStatus::Skipped);
    assert_eq!(composer.error(), Some(MemoError::Unauthorized));
}

#[tokio::test]
async fn unconfigured_settings_fail_without_network() {
    let transport = ScriptedTransport::status(200);
    let composer = composer(
        Settings {
            access_token: String::new(),
            ..configured()
        },
        Arc::clone(&transport),
    );
    composer.set_content("x");

    assert_eq!(
        composer.send_memo().await,
        SendStatus::Failed(MemoError::MissingConfiguration)
    );
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn blank_content_is_skipped() {
    let transport = ScriptedTransport::status(200);
    let composer = composer(configured(), Arc::clone(&transport));
    composer.set_content(" \n ");

    assert_eq!(composer.send_memo().await, SendStatus::Skipped);
    assert_eq!(transport.calls(), 0);
    assert!(!composer.is_loading());
}

#[tokio::test]
async fn second_send_while_in_flight_is_skipped() {
    let transport = ScriptedTransport::gated(200);
    let composer = composer(configured(), Arc::clone(&transport));
    composer.set_content("once");

    let first = composer.send_memo();
    let second = async {
        tokio::task::yield_now().await;
        assert!(composer.is_loading());
        assert!(!composer.can_send());
        let status = composer.send_memo().await;
        transport.release.notify_one();
        status
    };
    let (first, second) = tokio::join!(first, second);

    assert_eq!(first, SendStatus::Sent);
    assert_eq!(second, SendStatus::Skipped);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn abandoned_send_clears_busy_flag() {
    let transport = ScriptedTransport::gated(200);
    let composer = composer(configured(), Arc::clone(&transport));
    composer.set_content("stuck");

    let result = tokio::time::timeout(Duration::from_secs(5), composer.send_memo()).await;

    assert!(result.is_err());
    assert!(!composer.is_loading());
    assert_eq!(composer.content(), "stuck");
    assert!(composer.can_send());
}
