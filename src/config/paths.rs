use std::{
  env,
  fs,
  path::{
    Path,
    PathBuf,
  },
};

/// Resolved configuration locations for retroboi.
#[derive(Debug, Clone)]
pub struct ConfigPaths
{
  pub root:   PathBuf,
  pub entry:  PathBuf,
  pub exists: bool,
}

/// Discover the effective configuration directory and entry point.
///
/// Checks `RETROBOI_CONFIG_DIR`, then `XDG_CONFIG_HOME/retroboi`.
///
/// Platform-specific fallbacks:
/// - Unix: `~/.config/retroboi`
/// - Windows: `%LOCALAPPDATA%\\retroboi`, then `%APPDATA%\\retroboi`
///
/// The returned struct includes the root directory, the path to `init.lua`, and
/// whether the file currently exists.
pub fn discover_config_paths() -> std::io::Result<ConfigPaths>
{
  fn root_from_env() -> Option<PathBuf>
  {
    if let Ok(dir) = env::var("RETROBOI_CONFIG_DIR")
      && !dir.trim().is_empty()
    {
      return Some(PathBuf::from(dir));
    }
    None
  }

  let root = if let Some(over) = root_from_env()
  {
    over
  }
  else if let Ok(xdg) = env::var("XDG_CONFIG_HOME")
    && !xdg.trim().is_empty()
  {
    Path::new(&xdg).join("retroboi")
  }
  else
  {
    #[cfg(windows)]
    {
      if let Ok(local) = env::var("LOCALAPPDATA")
        && !local.trim().is_empty()
      {
        Path::new(&local).join("retroboi")
      }
      else if let Ok(app) = env::var("APPDATA")
        && !app.trim().is_empty()
      {
        Path::new(&app).join("retroboi")
      }
      else
      {
        Path::new(".config").join("retroboi")
      }
    }
    #[cfg(not(windows))]
    {
      if let Ok(home) = env::var("HOME")
        && !home.trim().is_empty()
      {
        Path::new(&home).join(".config").join("retroboi")
      }
      else
      {
        Path::new(".config").join("retroboi")
      }
    }
  };

  let entry = root.join("init.lua");
  let exists = fs::metadata(&entry).map(|m| m.is_file()).unwrap_or(false);
  Ok(ConfigPaths { root, entry, exists })
}

/// Pick the ROM root: command line, then `RETROBOI_ROM_DIR`, then the
/// configured `rom_dir`, then `./roms`.
pub fn resolve_rom_dir(
  cli: Option<&Path>,
  configured: Option<&Path>,
) -> PathBuf
{
  if let Some(p) = cli
  {
    return p.to_path_buf();
  }
  if let Ok(dir) = env::var("RETROBOI_ROM_DIR")
    && !dir.trim().is_empty()
  {
    return PathBuf::from(dir);
  }
  if let Some(p) = configured
  {
    return p.to_path_buf();
  }
  PathBuf::from("roms")
}
