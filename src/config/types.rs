use std::path::PathBuf;

use crate::core::systems::SYSTEM_CONFIG_FILE;

#[derive(Debug, Clone)]
/// Key-handling configuration (currently only sequence timeout).
pub struct KeysConfig
{
  pub sequence_timeout_ms: u64,
}

impl Default for KeysConfig
{
  fn default() -> Self
  {
    Self { sequence_timeout_ms: 1000 }
  }
}

#[derive(Debug, Clone)]
/// Top-level configuration composed from Lua input.
pub struct Config
{
  /// Root holding one directory per system.
  pub rom_dir:       Option<PathBuf>,
  /// File name looked up inside each system directory.
  pub system_config: String,
  pub log_file:      Option<PathBuf>,
  pub keys:          KeysConfig,
  pub ui:            UiConfig,
  pub menu:          MenuConfig,
}

impl Default for Config
{
  fn default() -> Self
  {
    Self {
      rom_dir:       None,
      system_config: SYSTEM_CONFIG_FILE.to_string(),
      log_file:      None,
      keys:          KeysConfig::default(),
      ui:            UiConfig::default(),
      menu:          MenuConfig::default(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single key mapping supplied by `retroboi.mapkey` or the built-ins.
pub struct KeyMapping
{
  pub sequence:    String,
  pub action:      String,
  pub description: Option<String>,
}

#[derive(Debug, Clone)]
/// User interface configuration block replicated from Lua.
pub struct UiConfig
{
  /// Rows taken by header, borders and footer; the rest holds ROMs.
  pub chrome_rows: u16,
  /// Header text; `{system}`, `{index}`, `{count}`, `{page}`, `{pages}`,
  /// `{user}` and `{host}` are expanded.
  pub header:      Option<String>,
  pub theme:       Option<UiTheme>,
}

impl Default for UiConfig
{
  fn default() -> Self
  {
    Self { chrome_rows: 4, header: None, theme: None }
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Theme colours for the UI. Fields are optional and fall back to defaults.
pub struct UiTheme
{
  pub pane_bg:          Option<String>,
  pub border_fg:        Option<String>,
  pub item_fg:          Option<String>,
  pub selected_item_fg: Option<String>,
  pub selected_item_bg: Option<String>,
  pub title_fg:         Option<String>,
  pub title_bg:         Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Shell commands behind the Shutdown/Reboot menu entries.
pub struct MenuConfig
{
  pub shutdown: Option<String>,
  pub reboot:   Option<String>,
}
