use anyhow::{Context, Result};
use std::process::Stdio;
use tokio::process::Command;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Request to open an external link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRequest {
    /// Human-readable name shown in toasts ("Resume", "GitHub")
    pub label: String,
    pub url: String,
}

/// Outcome of a link request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkResponse {
    Opened { label: String },
    Failed { label: String, error: String },
}

/// Run `open_command url` and wait for the opener to exit
///
/// `open_command` may carry arguments ("firefox --new-tab"); the url is
/// appended last. Openers like `xdg-open` return as soon as the browser
/// has been asked, so waiting is short.
pub async fn open_url(open_command: &str, url: &str) -> Result<()> {
    let mut parts = open_command.split_whitespace();
    let program = parts.next().context("open_command is empty")?;

    let status = Command::new(program)
        .args(parts)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .with_context(|| format!("failed to run '{}'", program))?;

    if !status.success() {
        anyhow::bail!("'{}' exited with {}", program, status);
    }
    Ok(())
}

/// Spawn the link opener service
///
/// Every request is handled in its own task so a slow opener never delays
/// the next one. Responses come back in completion order.
pub fn spawn_link_service(
    open_command: String,
) -> (
    mpsc::UnboundedSender<LinkRequest>,
    mpsc::UnboundedReceiver<LinkResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<LinkRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<LinkResponse>();

    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            debug!(label = %request.label, url = %request.url, "opening link");
            let command = open_command.clone();
            let response_tx = response_tx.clone();

            tokio::spawn(async move {
                let response = match open_url(&command, &request.url).await {
                    Ok(()) => {
                        info!(label = %request.label, "link opened");
                        LinkResponse::Opened { label: request.label }
                    }
                    Err(e) => {
                        warn!(label = %request.label, error = %format!("{:#}", e), "link failed");
                        LinkResponse::Failed {
                            label: request.label,
                            error: format!("{:#}", e),
                        }
                    }
                };
                // Receiver is gone only when the app is shutting down
                let _ = response_tx.send(response);
            });
        }
    });

    (request_tx, response_rx)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn request(label: &str) -> LinkRequest {
        LinkRequest {
            label: label.to_string(),
            url: "https://example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_successful_opener_reports_opened() {
        let (tx, mut rx) = spawn_link_service("true".to_string());
        tx.send(request("Site")).unwrap();
        assert_eq!(
            rx.recv().await,
            Some(LinkResponse::Opened { label: "Site".to_string() })
        );
    }

    #[tokio::test]
    async fn test_failing_opener_reports_failure() {
        let (tx, mut rx) = spawn_link_service("false".to_string());
        tx.send(request("Site")).unwrap();
        match rx.recv().await {
            Some(LinkResponse::Failed { label, error }) => {
                assert_eq!(label, "Site");
                assert!(error.contains("exited with"), "{}", error);
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_program_is_error() {
        let err = open_url("definitely-not-a-real-opener-binary", "https://example.com")
            .await
            .unwrap_err();
        assert!(format!("{:#}", err).contains("failed to run"));
    }

    #[tokio::test]
    async fn test_empty_command_is_error() {
        assert!(open_url("   ", "https://example.com").await.is_err());
    }
}
