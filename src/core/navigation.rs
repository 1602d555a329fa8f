use std::path::{
  Path,
  PathBuf,
};

use super::systems::{
  System,
  discover_systems,
};

/// Ordered list of valid systems and the one currently shown.
#[derive(Debug, Clone)]
pub struct Navigator
{
  root:        PathBuf,
  config_name: String,
  systems:     Vec<System>,
  index:       usize,
}

impl Navigator
{
  /// Run a discovery pass over `root` and start on the first system.
  pub fn discover(
    root: &Path,
    config_name: &str,
  ) -> Self
  {
    let mut nav = Self {
      root:        root.to_path_buf(),
      config_name: config_name.to_string(),
      systems:     Vec::new(),
      index:       0,
    };
    nav.reload();
    nav
  }

  pub fn root(&self) -> &Path
  {
    &self.root
  }

  pub fn systems(&self) -> &[System]
  {
    &self.systems
  }

  pub fn len(&self) -> usize
  {
    self.systems.len()
  }

  pub fn is_empty(&self) -> bool
  {
    self.systems.is_empty()
  }

  pub fn index(&self) -> usize
  {
    self.index
  }

  pub fn current(&self) -> Option<&System>
  {
    self.systems.get(self.index)
  }

  /// Move to the next system, wrapping after the last. No-op on an empty
  /// list.
  pub fn advance(&mut self) -> Option<&System>
  {
    if self.systems.is_empty()
    {
      return None;
    }
    self.index = (self.index + 1) % self.systems.len();
    crate::trace::log(format!(
      "[nav] switching to system {}",
      self.systems[self.index].name
    ));
    self.systems.get(self.index)
  }

  /// Rescan the root from scratch and reset to the first system.
  pub fn reload(&mut self) -> &[System]
  {
    self.systems = discover_systems(&self.root, &self.config_name);
    self.index = 0;
    crate::trace::log(format!(
      "[nav] detected systems: {:?}",
      self.systems.iter().map(|s| s.name.as_str()).collect::<Vec<_>>()
    ));
    &self.systems
  }
}
