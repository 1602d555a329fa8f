use std::{
  cell::RefCell,
  fs,
  io,
  path::Path,
  rc::Rc,
};

use super::{
  Config,
  ConfigPaths,
  KeyMapping,
  LuaEngine,
};

type ConfigArtifacts = (Config, Vec<KeyMapping>);

/// Load `init.lua` from `paths` on top of the built-in defaults. A missing
/// entry file just yields the defaults.
pub fn load_config(paths: &ConfigPaths) -> io::Result<ConfigArtifacts>
{
  if !paths.exists
  {
    crate::trace::log(format!(
      "[lua] no user config at {}",
      paths.entry.display()
    ));
    return Ok((Config::default(), super::default_keymaps()));
  }
  let code = fs::read_to_string(&paths.entry)
    .map_err(|e| io_err(format!("read init.lua failed: {e}")))?;
  crate::trace::log(format!("[lua] exec user config: {}", paths.entry.display()));
  run_config_code(&code, &paths.root, &paths.entry.to_string_lossy())
}

/// Evaluate config `code` as if it were `init.lua` under `root`.
pub fn load_config_from_code(
  code: &str,
  root: Option<&Path>,
) -> io::Result<ConfigArtifacts>
{
  let base = match root
  {
    Some(p) => p.to_path_buf(),
    None => std::env::current_dir().unwrap_or_else(|_| ".".into()),
  };
  run_config_code(code, &base, "inline init.lua")
}

fn run_config_code(
  code: &str,
  root: &Path,
  chunk_name: &str,
) -> io::Result<ConfigArtifacts>
{
  let engine =
    LuaEngine::new().map_err(|e| io_err(format!("lua init failed: {e}")))?;
  let lua = engine.lua();

  let config_acc = Rc::new(RefCell::new(Config::default()));
  let keymaps_acc = Rc::new(RefCell::new(super::default_keymaps()));

  super::install_retroboi_api(
    lua,
    Rc::clone(&config_acc),
    Rc::clone(&keymaps_acc),
  )
  .map_err(|e| io_err(format!("retroboi api install failed: {e}")))?;
  super::install_require(lua, &root.join("lua"))
    .map_err(|e| io_err(format!("require install failed: {e}")))?;

  if let Err(e) = lua.load(code).set_name(chunk_name).exec()
  {
    crate::trace::log(format!("[lua] {} error: {}", chunk_name, e));
    return Err(io_err(format!("{chunk_name} execution failed: {e}")));
  }

  let cfg = config_acc.borrow().clone();
  let maps = keymaps_acc.borrow().clone();
  Ok((cfg, maps))
}

fn io_err(msg: String) -> io::Error
{
  io::Error::other(msg)
}
