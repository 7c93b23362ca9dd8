use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;
use tokio::time::timeout;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("Scraper did not finish within {0:?}")]
    Timeout(Duration),
    #[error("Scraper process failed: {0}")]
    ProcessFailed(String),
}

/// Port for the external quote source, so the cache can be driven by a
/// fake in tests instead of a real subprocess.
#[async_trait]
pub trait QuoteFetcher: Send + Sync {
    async fn fetch_raw(&self) -> Result<String, ScraperError>;
}

/// Runs the configured scraper command and captures its stdout verbatim.
/// The subprocess gets no stdin and is killed if the timeout expires.
pub struct ScraperFetcher {
    command: String,
    args: Vec<String>,
    timeout: Duration,
}

impl ScraperFetcher {
    pub fn new(command: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        ScraperFetcher {
            command: command.into(),
            args,
            timeout,
        }
    }
}

#[async_trait]
impl QuoteFetcher for ScraperFetcher {
    async fn fetch_raw(&self) -> Result<String, ScraperError> {
        let mut cmd = Command::new(&self.command);

        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            // dropping the output future on timeout kills and reaps the child
            .kill_on_drop(true);

        let output = match timeout(self.timeout, cmd.output()).await {
            Ok(res) => res.map_err(|e| ScraperError::ProcessFailed(e.to_string()))?,
            Err(_) => return Err(ScraperError::Timeout(self.timeout)),
        };

        if !output.status.success() {
            return Err(ScraperError::ProcessFailed(format!(
                "exit status {}",
                output.status
            )));
        }

        String::from_utf8(output.stdout).map_err(|e| ScraperError::ProcessFailed(e.to_string()))
    }
}
