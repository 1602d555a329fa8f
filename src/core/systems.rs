use std::{
  fs,
  path::{
    Path,
    PathBuf,
  },
};

use super::ini::SystemConfig;

/// Default name of the per-system config file.
pub const SYSTEM_CONFIG_FILE: &str = "default.cfg";

/// A ROM directory under the root, validated by its config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct System
{
  pub name:   String,
  pub path:   PathBuf,
  pub config: SystemConfig,
}

impl System
{
  /// Bind `rom` to a concrete launch command. Returns `None` when the system
  /// declares no `command` template or its path is not valid UTF-8.
  pub fn bind(
    &self,
    rom: &str,
  ) -> Option<super::launch::Launch>
  {
    let template = self.config.command()?;
    let dir = self.path.to_str()?;
    Some(super::launch::Launch {
      system:  self.name.clone(),
      rom:     rom.to_string(),
      command: super::launch::build_command(
        template,
        dir,
        rom,
      ),
    })
  }
}

/// Scan `root` one level deep and return the systems whose config declares a
/// `[default]` section, ordered by directory name.
///
/// `config_name` is the file looked up inside each candidate directory
/// (normally [`SYSTEM_CONFIG_FILE`]). An unreadable root yields no systems.
pub fn discover_systems(
  root: &Path,
  config_name: &str,
) -> Vec<System>
{
  let read = match fs::read_dir(root)
  {
    Ok(rd) => rd,
    Err(e) =>
    {
      crate::trace::log(format!(
        "[scan] cannot read root {}: {}",
        root.display(),
        e
      ));
      return Vec::new();
    }
  };

  let mut names: Vec<String> = read
    .filter_map(|res| res.ok())
    .filter(|e| e.path().is_dir())
    .filter_map(|e| match e.file_name().into_string()
    {
      Ok(name) => Some(name),
      Err(raw) =>
      {
        crate::trace::log(format!("[scan] skipping non-UTF-8 dir {:?}", raw));
        None
      }
    })
    .filter(|name| !name.starts_with('.'))
    .collect();
  names.sort();

  let mut systems = Vec::new();
  for name in names
  {
    let path = root.join(&name);
    if path.to_str().is_none()
    {
      crate::trace::log(format!("[scan] skipping non-UTF-8 path {:?}", path));
      continue;
    }
    let config = SystemConfig::load(&path.join(config_name));
    if config.is_valid()
    {
      crate::trace::log(format!("[scan] system '{}' ok", name));
      systems.push(System { name, path, config });
    }
    else
    {
      crate::trace::log(format!(
        "[scan] skipping '{}': no [{}] section",
        name,
        super::ini::DEFAULT_SECTION
      ));
    }
  }
  systems
}
