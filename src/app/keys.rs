//! Key map utilities and helpers on `App`.

use std::time::{
  Duration,
  Instant,
};

use crate::{
  app::App,
  keymap::Resolution,
};

impl App
{
  pub fn pending_keys(&self) -> &str
  {
    &self.keys.pending
  }

  pub(crate) fn clear_pending_keys(&mut self)
  {
    self.keys.pending.clear();
    self.keys.last_at = None;
  }

  /// Append `token` to the pending sequence and resolve it. A stale prefix
  /// (older than the configured timeout) is dropped first. The pending
  /// buffer is cleared unless the result is [`Resolution::Pending`].
  pub(crate) fn feed_key_token(
    &mut self,
    token: &str,
  ) -> Resolution
  {
    let now = Instant::now();
    let timeout = self.config.keys.sequence_timeout_ms;
    if timeout > 0
      && let Some(last) = self.keys.last_at
      && now.duration_since(last) > Duration::from_millis(timeout)
    {
      self.keys.pending.clear();
    }
    self.keys.last_at = Some(now);
    let had_prefix = !self.keys.pending.is_empty();
    self.keys.pending.push_str(token);

    let mut res = self.keys.map.resolve(&self.keys.pending);
    if res == Resolution::None && had_prefix
    {
      // Broken sequence: retry the last key on its own
      self.keys.pending = token.to_string();
      res = self.keys.map.resolve(token);
    }
    if res != Resolution::Pending
    {
      self.clear_pending_keys();
    }
    res
  }
}
