use std::process::Stdio;

use anyhow::Context;
use tokio::{io::AsyncWriteExt, process::Command};

pub const DEFAULT_FORMATTER_COMMAND: &str = "google-java-format -";

/// Whole-unit pretty printer. An error leaves the caller with the unformatted text.
#[allow(async_fn_in_trait)]
pub trait SourceFormatter {
  async fn format(&self, source: &str) -> anyhow::Result<String>;
}

/// Runs a formatter program that reads the unit on stdin and writes the formatted unit to stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalFormatter {
  program: String,
  args: Vec<String>,
}

impl ExternalFormatter {
  /// Splits a command line on whitespace; no shell quoting is interpreted.
  pub fn parse(command: &str) -> Option<Self> {
    let mut parts = command.split_whitespace().map(String::from);
    let program = parts.next()?;
    Some(Self {
      program,
      args: parts.collect(),
    })
  }

  pub fn command_line(&self) -> String {
    std::iter::once(self.program.as_str())
      .chain(self.args.iter().map(String::as_str))
      .collect::<Vec<_>>()
      .join(" ")
  }
}

impl SourceFormatter for ExternalFormatter {
  async fn format(&self, source: &str) -> anyhow::Result<String> {
    let mut child = Command::new(&self.program)
      .args(&self.args)
      .stdin(Stdio::piped())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped())
      .kill_on_drop(true)
      .spawn()
      .with_context(|| format!("failed to start '{}'", self.program))?;

    let mut stdin = child.stdin.take().context("formatter stdin is not piped")?;
    let input = source.to_string();
    let writer = tokio::spawn(async move {
      stdin.write_all(input.as_bytes()).await?;
      stdin.shutdown().await
    });

    let output = child.wait_with_output().await?;
    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      anyhow::bail!("'{}' exited with {}: {}", self.program, output.status, stderr.trim());
    }
    writer.await??;

    let stdout = String::from_utf8(output.stdout)?;
    if stdout.trim().is_empty() {
      anyhow::bail!("'{}' produced no output", self.program);
    }
    Ok(stdout)
  }
}
