use super::KeyMapping;

fn map(
  sequence: &str,
  action: &str,
  description: &str,
) -> KeyMapping
{
  KeyMapping {
    sequence:    sequence.into(),
    action:      action.into(),
    description: Some(description.into()),
  }
}

/// Built-in keymaps, applied before the user config. The letters follow a
/// gamepad-style layout: `a` launches, `b` backs out, `i` (select) cycles
/// systems and `o` (start) opens the menu.
pub fn default_keymaps() -> Vec<KeyMapping>
{
  vec![
    map("a", "launch", "Launch selected ROM"),
    map("b", "back", "Close overlay"),
    map("i", "system:next", "Next system"),
    map("o", "menu", "Open menu"),
    map("r", "reload", "Rescan all systems"),
    map("q", "quit", "Quit retroboi"),
    map("m", "messages", "Toggle messages"),
    map("n", "page:next", "Next page"),
    map("p", "page:prev", "Previous page"),
    map("j", "nav:down", "Move down"),
    map("k", "nav:up", "Move up"),
    map("gg", "nav:top", "Go to first ROM on page"),
    map("G", "nav:bottom", "Go to last ROM on page"),
  ]
}
