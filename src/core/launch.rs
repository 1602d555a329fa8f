//! Building and dispatching emulator commands.
//!
//! A ROM is bound to a command only when it is selected: the system's
//! template gets the escaped ROM path substituted for its `%s` placeholder
//! and the result is handed to a [`Runner`]. Launching never propagates an
//! error; the caller gets a [`LaunchOutcome`] to report.

use std::{
  io,
  process::{
    Command,
    Stdio,
  },
};

use super::escape::escape;

/// Placeholder replaced by the escaped ROM path.
pub const PLACEHOLDER: &str = "%s";

/// Substitute the escaped `system_dir/rom` path into `template`.
///
/// Only the first `%s` is substituted; later ones are kept verbatim. `%%`
/// yields a literal `%`. A template without a placeholder is returned
/// unchanged.
pub fn build_command(
  template: &str,
  system_dir: &str,
  rom: &str,
) -> String
{
  let path = escape(&format!("{}/{}", system_dir, rom));
  let mut out = String::with_capacity(template.len() + path.len());
  let mut substituted = false;
  let mut extra = 0usize;
  let mut chars = template.chars().peekable();
  while let Some(ch) = chars.next()
  {
    if ch != '%'
    {
      out.push(ch);
      continue;
    }
    match chars.peek()
    {
      Some('%') =>
      {
        chars.next();
        out.push('%');
      }
      Some('s') =>
      {
        chars.next();
        if substituted
        {
          extra += 1;
          out.push_str(PLACEHOLDER);
        }
        else
        {
          substituted = true;
          out.push_str(&path);
        }
      }
      _ => out.push('%'),
    }
  }
  if !substituted
  {
    crate::trace::log(format!("[launch] template has no placeholder: {}", template));
  }
  if extra > 0
  {
    crate::trace::log(format!(
      "[launch] template has {} extra placeholder(s): {}",
      extra, template
    ));
  }
  out
}

/// A ROM bound to its system's command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launch
{
  pub system:  String,
  pub rom:     String,
  pub command: String,
}

/// Result of one launch attempt.
#[derive(Debug)]
pub enum LaunchOutcome
{
  /// The child ran to completion; `true` when it exited successfully.
  Exited(bool),
  /// The child could not be started.
  Failed(io::Error),
}

impl LaunchOutcome
{
  pub fn is_success(&self) -> bool
  {
    matches!(self, LaunchOutcome::Exited(true))
  }
}

/// Runs a fully built shell command and waits for it.
pub trait Runner
{
  /// Execute `command` synchronously with output discarded. `Ok(success)`
  /// when the process ran; `Err` when it could not be spawned.
  fn run(
    &mut self,
    command: &str,
  ) -> io::Result<bool>;
}

/// Runs commands through the platform shell with stdout/stderr discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

impl Runner for ShellRunner
{
  fn run(
    &mut self,
    command: &str,
  ) -> io::Result<bool>
  {
    #[cfg(windows)]
    let mut cmd = {
      let mut c = Command::new("cmd");
      c.arg("/C").arg(command);
      c
    };
    #[cfg(not(windows))]
    let mut cmd = {
      let mut c = Command::new("sh");
      c.arg("-c").arg(command);
      c
    };
    let status =
      cmd.stdout(Stdio::null()).stderr(Stdio::null()).status()?;
    Ok(status.success())
  }
}

/// Dispatch `job` through `runner`, blocking until the child exits.
pub fn launch(
  runner: &mut dyn Runner,
  job: &Launch,
) -> LaunchOutcome
{
  crate::trace::log(format!("[launch] calling process {}", job.command));
  match runner.run(&job.command)
  {
    Ok(ok) =>
    {
      crate::trace::log(format!("[launch] finished success={}", ok));
      LaunchOutcome::Exited(ok)
    }
    Err(e) =>
    {
      crate::trace::log(format!("[launch] error: {}", e));
      LaunchOutcome::Failed(e)
    }
  }
}
