//! Command handlers.
//!
//! Handlers write to the [`Console`] they are given instead of the process streams, so
//! they run unchanged under test.

use super::args::{Command, ConfigCommand, SendArgs, TagsCommand};
use crate::app::{MemoComposer, SendStatus};
use crate::client::{MemoService, ReqwestTransport};
use crate::domain::error::Result;
use crate::settings::SettingsManager;
use crate::ui::{status_message, Banner, ComposerViewModel, SettingsView, StatusMessage};
use std::io::{Read, Write};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

/// Streams a command reads from and writes to.
pub struct Console<'a> {
    pub stdin: &'a mut dyn Read,
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}

/// Whether a command did what was asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => Self::SUCCESS,
            Outcome::Failure => Self::FAILURE,
        }
    }
}

/// Runs `command` against `settings`, building the HTTP transport when needed.
///
/// # Errors
///
/// Returns an error if reading input, writing output, persisting settings or
/// creating the HTTP client fails. Submission failures are reported as
/// [`Outcome::Failure`] instead.
pub async fn execute(
    command: Command,
    settings: Arc<SettingsManager>,
    settings_path: &Path,
    console: &mut Console<'_>,
) -> Result<Outcome> {
    match command {
        Command::Send(args) => {
            let transport = ReqwestTransport::new(settings.request_timeout())?;
            let service = MemoService::new(Arc::new(transport));
            let composer = MemoComposer::new(Arc::clone(&settings), service);
            send(&args, &composer, &settings, console).await
        }
        Command::Config(command) => config(command, &settings, settings_path, console.out),
        Command::Tags(command) => tags(command, &settings, console.out),
    }
}

/// Composes and sends one memo, or previews it with `--dry-run`.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub async fn send(
    args: &SendArgs,
    composer: &MemoComposer,
    settings: &SettingsManager,
    console: &mut Console<'_>,
) -> Result<Outcome> {
    let language = settings.language();
    composer.set_content(read_text(&args.text, console.stdin)?);

    if args.dry_run {
        let endpoint = settings
            .endpoint_url()
            .map_or_else(|| "(invalid or unset)".to_string(), |url| url.to_string());
        writeln!(console.out, "POST {endpoint}")?;
        writeln!(console.out)?;
        writeln!(console.out, "{}", composer.final_content())?;
        return Ok(Outcome::Success);
    }

    let status = composer.send_memo().await;
    let view = ComposerViewModel::compute(&composer.state(), language);

    match (status, view.banner) {
        (SendStatus::Sent, banner) => {
            let text = banner.map_or_else(
                || status_message(StatusMessage::Sent, language).to_string(),
                |banner| banner.text().to_string(),
            );
            writeln!(console.out, "{text}")?;
            Ok(Outcome::Success)
        }
        (SendStatus::Failed(error), banner) => {
            let text = match banner {
                Some(Banner::Error(text)) => text,
                _ => crate::ui::error_message(&error, language),
            };
            writeln!(console.err, "{text}")?;
            if error.is_configuration_problem() {
                writeln!(console.err, "{}", status_message(StatusMessage::NotConfigured, language))?;
            }
            Ok(Outcome::Failure)
        }
        (SendStatus::Skipped, _) => {
            writeln!(console.err, "{}", status_message(StatusMessage::NothingToSend, language))?;
            Ok(Outcome::Failure)
        }
    }
}

/// Memo text from the arguments, or all of `stdin` when there are none.
///
/// Trailing line breaks from piped input are dropped.
fn read_text(words: &[String], stdin: &mut dyn Read) -> Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }

    let mut text = String::new();
    stdin.read_to_string(&mut text)?;
    Ok(text.trim_end_matches(['\n', '\r']).to_string())
}

fn config(
    command: ConfigCommand,
    settings: &SettingsManager,
    settings_path: &Path,
    out: &mut dyn Write,
) -> Result<Outcome> {
    match command {
        ConfigCommand::Show => {
            writeln!(out, "# {}", settings_path.display())?;
            writeln!(out, "{}", SettingsView::compute(&settings.snapshot()).render())?;
        }
        ConfigCommand::SetServer { url } => {
            settings.set_server_url(&url)?;
            match settings.endpoint_url() {
                Some(endpoint) => writeln!(out, "server set, memos go to {endpoint}")?,
                None => writeln!(out, "server set, but `{}` is not a valid URL", url.trim())?,
            }
        }
        ConfigCommand::SetToken { token } => {
            settings.set_access_token(&token)?;
            writeln!(out, "access token set ({})", settings.snapshot().masked_token())?;
        }
        ConfigCommand::SetTimeout { secs } => {
            settings.set_request_timeout_secs(secs)?;
            writeln!(out, "request timeout set to {secs}s")?;
        }
        ConfigCommand::SetLanguage { language } => {
            settings.set_language(language)?;
            writeln!(out, "language set to {}", language.display_name())?;
        }
        ConfigCommand::SetTraceLevel { level } => {
            settings.set_trace_level(level.as_deref())?;
            match settings.snapshot().trace_level {
                Some(level) => writeln!(out, "trace level set to {level}")?,
                None => writeln!(out, "trace level reset to default")?,
            }
        }
    }
    Ok(Outcome::Success)
}

fn tags(command: TagsCommand, settings: &SettingsManager, out: &mut dyn Write) -> Result<Outcome> {
    match command {
        TagsCommand::List => {
            let snapshot = settings.snapshot();
            let state = if snapshot.tags_enabled { "enabled" } else { "disabled" };
            writeln!(out, "tags {state}, mode {}", snapshot.tag_mode)?;
            for tag in &snapshot.tags {
                writeln!(out, "#{tag}")?;
            }
        }
        TagsCommand::Add { tags } => {
            for tag in &tags {
                if settings.add_tag(tag)? {
                    writeln!(out, "added #{}", tag.trim())?;
                } else {
                    writeln!(out, "skipped `{tag}` (empty or already present)")?;
                }
            }
        }
        TagsCommand::Remove { tags } => {
            for tag in &tags {
                if settings.remove_tag(tag)? {
                    writeln!(out, "removed #{tag}")?;
                } else {
                    writeln!(out, "no tag `{tag}`")?;
                }
            }
        }
        TagsCommand::Enable => {
            settings.set_tags_enabled(true)?;
            writeln!(out, "tags enabled")?;
        }
        TagsCommand::Disable => {
            settings.set_tags_enabled(false)?;
            writeln!(out, "tags disabled")?;
        }
        TagsCommand::Mode { mode } => {
            settings.set_tag_mode(mode)?;
            writeln!(out, "tag mode set to {mode}")?;
        }
    }
    Ok(Outcome::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{MemoHttpRequest, Transport, TransportError, TransportResponse};
    use crate::domain::{Language, Settings, TagMode};
    use crate::storage::MemoryStore;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;

    struct Recorder {
        status: u16,
        seen: Mutex<Vec<MemoHttpRequest>>,
    }

    #[async_trait]
    impl Transport for Recorder {
        async fn execute(
            &self,
            request: &MemoHttpRequest,
        ) -> std::result::Result<TransportResponse, TransportError> {
            self.seen.lock().push(request.clone());
            Ok(TransportResponse {
                status: Some(self.status),
                body: Vec::new(),
            })
        }
    }

    fn manager(settings: Settings) -> Arc<SettingsManager> {
        Arc::new(SettingsManager::open(Box::new(MemoryStore::with_settings(settings))).unwrap())
    }

    fn configured() -> Settings {
        Settings {
            server_url: "https://memos.example.com/".to_string(),
            access_token: "tok".to_string(),
            tags_enabled: true,
            tags: vec!["work".to_string()],
            ..Settings::default()
        }
    }

    struct Captured {
        out: Vec<u8>,
        err: Vec<u8>,
    }

    async fn run_send(
        args: SendArgs,
        stdin: &str,
        settings: &Arc<SettingsManager>,
        transport: Arc<Recorder>,
    ) -> (Outcome, Captured) {
        let composer = MemoComposer::new(Arc::clone(settings), MemoService::new(transport));
        let mut input = stdin.as_bytes();
        let mut captured = Captured {
            out: Vec::new(),
            err: Vec::new(),
        };
        let mut console = Console {
            stdin: &mut input,
            out: &mut captured.out,
            err: &mut captured.err,
        };
        let outcome = send(&args, &composer, settings, &mut console).await.unwrap();
        (outcome, captured)
    }

    fn recorder(status: u16) -> Arc<Recorder> {
        Arc::new(Recorder {
            status,
            seen: Mutex::new(Vec::new()),
        })
    }

    #[tokio::test]
    async fn send_joins_words_and_applies_tags() {
        let settings = manager(configured());
        let transport = recorder(200);
        let args = SendArgs {
            text: vec!["Buy".to_string(), "milk".to_string()],
            dry_run: false,
        };

        let (outcome, captured) = run_send(args, "", &settings, Arc::clone(&transport)).await;

        assert_eq!(outcome, Outcome::Success);
        assert_eq!(String::from_utf8(captured.out).unwrap(), "Memo sent!\n");
        let seen = transport.seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].body_text(), r##"{"content":"Buy milk\n\n#work"}"##);
    }

    #[tokio::test]
    async fn send_reads_stdin_when_no_words() {
        let settings = manager(configured());
        let transport = recorder(200);
        let args = SendArgs {
            text: Vec::new(),
            dry_run: false,
        };

        let (outcome, _) = run_send(args, "from a pipe\n", &settings, Arc::clone(&transport)).await;

        assert_eq!(outcome, Outcome::Success);
        assert_eq!(
            transport.seen.lock()[0].body_text(),
            r##"{"content":"from a pipe\n\n#work"}"##
        );
    }

    #[tokio::test]
    async fn send_failure_is_localized_on_stderr() {
        let settings = manager(Settings {
            language: Language::German,
            ..configured()
        });
        let args = SendArgs {
            text: vec!["hi".to_string()],
            dry_run: false,
        };

        let (outcome, captured) = run_send(args, "", &settings, recorder(500)).await;

        assert_eq!(outcome, Outcome::Failure);
        assert!(captured.out.is_empty());
        assert_eq!(
            String::from_utf8(captured.err).unwrap(),
            "Serverfehler (Status 500).\n"
        );
    }

    #[tokio::test]
    async fn send_without_configuration_adds_hint() {
        let settings = manager(Settings::default());
        let transport = recorder(200);
        let args = SendArgs {
            text: vec!["hi".to_string()],
            dry_run: false,
        };

        let (outcome, captured) = run_send(args, "", &settings, Arc::clone(&transport)).await;

        assert_eq!(outcome, Outcome::Failure);
        assert!(transport.seen.lock().is_empty());
        let err = String::from_utf8(captured.err).unwrap();
        assert!(err.contains("Invalid server URL"), "{err}");
        assert!(err.contains("Not configured"), "{err}");
    }

    #[tokio::test]
    async fn blank_input_is_skipped() {
        let settings = manager(configured());
        let transport = recorder(200);
        let args = SendArgs {
            text: Vec::new(),
            dry_run: false,
        };

        let (outcome, captured) = run_send(args, "  \n", &settings, Arc::clone(&transport)).await;

        assert_eq!(outcome, Outcome::Failure);
        assert!(transport.seen.lock().is_empty());
        assert_eq!(String::from_utf8(captured.err).unwrap(), "Nothing to send.\n");
    }

    #[tokio::test]
    async fn dry_run_previews_without_sending() {
        let settings = manager(Settings {
            tag_mode: TagMode::Prepend,
            ..configured()
        });
        let transport = recorder(200);
        let args = SendArgs {
            text: vec!["call".to_string(), "mom".to_string()],
            dry_run: true,
        };

        let (outcome, captured) = run_send(args, "", &settings, Arc::clone(&transport)).await;

        assert_eq!(outcome, Outcome::Success);
        assert!(transport.seen.lock().is_empty());
        assert_eq!(
            String::from_utf8(captured.out).unwrap(),
            "POST https://memos.example.com/api/v1/memos\n\n#work\n\ncall mom\n"
        );
    }

    #[test]
    fn tag_commands_update_settings() {
        let settings = manager(Settings::default());
        let mut out = Vec::new();

        tags(
            TagsCommand::Add {
                tags: vec!["work".to_string(), " idea ".to_string(), "work".to_string()],
            },
            &settings,
            &mut out,
        )
        .unwrap();
        tags(TagsCommand::Enable, &settings, &mut out).unwrap();
        tags(
            TagsCommand::Remove {
                tags: vec!["work".to_string(), "missing".to_string()],
            },
            &settings,
            &mut out,
        )
        .unwrap();
        tags(TagsCommand::List, &settings, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "added #work\n\
             added #idea\n\
             skipped `work` (empty or already present)\n\
             tags enabled\n\
             removed #work\n\
             no tag `missing`\n\
             tags enabled, mode append\n\
             #idea\n"
        );
    }

    #[test]
    fn config_show_masks_token() {
        let settings = manager(Settings {
            access_token: "memos_pat_1234567890".to_string(),
            ..configured()
        });
        let mut out = Vec::new();

        config(ConfigCommand::Show, &settings, Path::new("/cfg/config.toml"), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("# /cfg/config.toml\n"));
        assert!(!text.contains("memos_pat_1234567890"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let settings = manager(Settings::default());
        let mut out = Vec::new();

        let result = config(
            ConfigCommand::SetTimeout { secs: 0 },
            &settings,
            Path::new("config.toml"),
            &mut out,
        );

        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
