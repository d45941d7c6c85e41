//! Optional LM summarization for the search response node.
//!
//! The functional path works without any model: the response node falls back
//! to serialized listings when no summarizer is configured or the command
//! fails. The command contract matches the usual LM CLI shape: prompt on
//! stdin, summary on stdout.
use anyhow::{anyhow, Context, Result};
use std::io::Write;
use std::process::{Command, Stdio};
use std::time::Instant;

use crate::state::Listing;

/// Injected summarization capability.
pub trait Summarizer {
    fn summarize(&self, query: &str, listings: &[Listing]) -> Result<String>;
}

/// Summarizer that shells out to a configured command.
pub struct CommandSummarizer {
    argv: Vec<String>,
}

impl CommandSummarizer {
    pub fn from_command(command: &str) -> Result<Self> {
        let argv = shell_words::split(command)
            .with_context(|| format!("parse summarizer command: {command}"))?;
        if argv.is_empty() {
            return Err(anyhow!("summarizer command is empty"));
        }
        Ok(CommandSummarizer { argv })
    }
}

impl Summarizer for CommandSummarizer {
    fn summarize(&self, query: &str, listings: &[Listing]) -> Result<String> {
        let prompt = build_prompt(query, listings)?;
        let start = Instant::now();
        let mut child = Command::new(&self.argv[0])
            .args(&self.argv[1..])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("spawn summarizer command: {}", self.argv[0]))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(prompt.as_bytes())
                .context("write summarizer prompt")?;
        }
        let output = child.wait_with_output().context("wait for summarizer")?;

        tracing::info!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            prompt_bytes = prompt.len(),
            response_bytes = output.stdout.len(),
            "summarizer invoke complete"
        );

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!(
                "summarizer command failed with status {}: {}",
                output.status,
                stderr.trim()
            ));
        }
        let text =
            String::from_utf8(output.stdout).context("decode summarizer stdout as UTF-8")?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(anyhow!("summarizer produced no output"));
        }
        Ok(trimmed.to_string())
    }
}

fn build_prompt(query: &str, listings: &[Listing]) -> Result<String> {
    let payload =
        serde_json::to_string_pretty(listings).context("serialize listings for prompt")?;
    Ok(format!(
        "Summarize these data listings for the user in a short paragraph.\n\
         Query: {query}\n\nListings JSON:\n{payload}\n"
    ))
}

#[cfg(test)]
mod tests {
    use super::{CommandSummarizer, Summarizer};

    #[test]
    fn from_command_rejects_empty_and_unparseable_input() {
        assert!(CommandSummarizer::from_command("").is_err());
        assert!(CommandSummarizer::from_command("sh -c 'unterminated").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn summarize_returns_trimmed_stdout() {
        let summarizer =
            CommandSummarizer::from_command("sh -c 'cat >/dev/null; echo two listings found'")
                .expect("parse command");
        let summary = summarizer.summarize("sales", &[]).expect("run summarizer");
        assert_eq!(summary, "two listings found");
    }

    #[cfg(unix)]
    #[test]
    fn summarize_surfaces_command_failure() {
        let summarizer = CommandSummarizer::from_command("sh -c 'cat >/dev/null; exit 3'")
            .expect("parse command");
        let err = summarizer
            .summarize("sales", &[])
            .expect_err("command exits nonzero");
        assert!(err.to_string().contains("summarizer command failed"));
    }
}
