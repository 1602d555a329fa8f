//! Core application state, used both by the TUI and integration tests.
//!
//! The [`App`] struct owns the discovered systems, the ROM list of the active
//! system with its page state, overlays and the recent message log. The
//! binary owns an instance of `App`; tests build their own over a temporary
//! ROM tree and drive it through key events or actions.

use std::{
  io,
  path::{
    Path,
    PathBuf,
  },
};

use ratatui::widgets::ListState;

use crate::{
  config::{
    Config,
    KeyMapping,
  },
  core::{
    launch::{
      Launch,
      Runner,
      ShellRunner,
    },
    navigation::Navigator,
    pagination::PageState,
  },
  keymap::KeyMap,
};

mod keys;
mod launch;
mod nav;
mod overlays_api;

pub use overlays_api::MenuEntry;

/// Terminal rows assumed before the first draw reports the real size.
pub const DEFAULT_VIEWPORT_ROWS: u16 = 24;

const MAX_MESSAGES: usize = 200;

#[derive(Debug, Clone, Default)]
pub struct MenuState
{
  pub selected: usize,
}

#[derive(Debug, Clone)]
pub struct NoticeState
{
  pub title:   String,
  pub message: String,
}

#[derive(Debug, Clone, Default)]
pub enum Overlay
{
  #[default]
  None,
  Messages,
  Menu(MenuState),
  Notice(Box<NoticeState>),
}

#[derive(Debug, Clone, Default)]
pub struct KeyState
{
  pub map:     KeyMap,
  pub pending: String,
  pub last_at: Option<std::time::Instant>,
}

/// Mutable application state driving the launcher UI.
pub struct App
{
  pub(crate) config:            Config,
  pub(crate) nav:               Navigator,
  // ROMs of the active system, in display order
  pub(crate) roms:              Vec<String>,
  pub(crate) pages:             PageState,
  // Selection relative to the active page
  pub(crate) list_state:        ListState,
  pub(crate) viewport_rows:     u16,
  pub(crate) recent_messages:   Vec<String>,
  // Overlay state (mutually exclusive)
  pub(crate) overlay:           Overlay,
  pub(crate) keys:              KeyState,
  pub(crate) runner:            Box<dyn Runner>,
  pub(crate) last_launch:       Option<Launch>,
  pub(crate) force_full_redraw: bool,
  // Signal to exit after handling a key/action
  pub(crate) should_quit:       bool,
}

impl App
{
  /// Load `init.lua`, resolve the ROM root (`rom_dir` wins when given) and
  /// run the first discovery pass.
  ///
  /// Fails with [`io::ErrorKind::NotFound`] when no directory under the root
  /// carries a valid system config.
  pub fn new(rom_dir: Option<&Path>) -> io::Result<Self>
  {
    let mut load_error = None;
    let (config, maps) = match crate::config::discover_config_paths()
      .and_then(|paths| crate::config::load_config(&paths))
    {
      Ok(loaded) => loaded,
      Err(e) =>
      {
        crate::trace::log(format!("[config] load error: {}", e));
        load_error = Some(e.to_string());
        (Config::default(), crate::config::default_keymaps())
      }
    };
    if let Some(ref log_file) = config.log_file
      && !crate::trace::enabled()
    {
      crate::trace::init(log_file);
    }
    let root =
      crate::config::resolve_rom_dir(rom_dir, config.rom_dir.as_deref());
    let mut app = Self::with_config(&root, config, maps, Box::new(ShellRunner))?;
    if let Some(e) = load_error
    {
      app.add_message(&format!("Config error: {}", e));
    }
    Ok(app)
  }

  /// Build an [`App`] over `root` without touching the user config.
  pub fn with_config(
    root: &Path,
    config: Config,
    maps: Vec<KeyMapping>,
    runner: Box<dyn Runner>,
  ) -> io::Result<Self>
  {
    crate::trace::log(format!("[app] scanning systems in {}", root.display()));
    let nav = Navigator::discover(root, &config.system_config);
    if nav.is_empty()
    {
      return Err(io::Error::new(
        io::ErrorKind::NotFound,
        format!(
          "no systems with a [{}] section found in {}",
          crate::core::ini::DEFAULT_SECTION,
          root.display()
        ),
      ));
    }
    let mut app = Self {
      config,
      nav,
      roms: Vec::new(),
      pages: PageState::new(0, 1),
      list_state: ListState::default(),
      viewport_rows: DEFAULT_VIEWPORT_ROWS,
      recent_messages: Vec::new(),
      overlay: Overlay::None,
      keys: KeyState { map: KeyMap::new(maps), ..KeyState::default() },
      runner,
      last_launch: None,
      force_full_redraw: false,
      should_quit: false,
    };
    app.enter_system();
    Ok(app)
  }

  /// Replace the process runner (the binary wraps it with terminal
  /// suspend/resume).
  pub fn set_runner(
    &mut self,
    runner: Box<dyn Runner>,
  )
  {
    self.runner = runner;
  }

  pub fn root(&self) -> PathBuf
  {
    self.nav.root().to_path_buf()
  }

  pub fn system_names(&self) -> Vec<String>
  {
    self.nav.systems().iter().map(|s| s.name.clone()).collect()
  }

  pub fn current_system_name(&self) -> Option<String>
  {
    self.nav.current().map(|s| s.name.clone())
  }

  pub fn system_index(&self) -> usize
  {
    self.nav.index()
  }

  pub fn roms(&self) -> &[String]
  {
    &self.roms
  }

  /// ROMs shown on the active page.
  pub fn page_roms(&self) -> &[String]
  {
    &self.roms[self.pages.range()]
  }

  pub fn page(&self) -> usize
  {
    self.pages.page()
  }

  pub fn page_count(&self) -> usize
  {
    self.pages.page_count()
  }

  pub fn overlay(&self) -> &Overlay
  {
    &self.overlay
  }

  pub fn messages(&self) -> &[String]
  {
    &self.recent_messages
  }

  pub fn last_launch(&self) -> Option<&Launch>
  {
    self.last_launch.as_ref()
  }

  pub fn should_quit(&self) -> bool
  {
    self.should_quit
  }

  pub fn config(&self) -> &Config
  {
    &self.config
  }

  pub(crate) fn add_message(
    &mut self,
    msg: &str,
  )
  {
    crate::trace::log(format!("[msg] {}", msg));
    self.recent_messages.push(msg.to_string());
    if self.recent_messages.len() > MAX_MESSAGES
    {
      let excess = self.recent_messages.len() - MAX_MESSAGES;
      self.recent_messages.drain(0..excess);
    }
  }
}
