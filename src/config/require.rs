use mlua::{
  Error as LuaError,
  Lua,
  Table,
  Value,
};
use std::path::Path;

/// Install a `require()` that only resolves `<lua_root>/<name>.lua`.
///
/// Dotted names map to subdirectories. Each module is evaluated once; later
/// calls return the cached value.
pub(crate) fn install_require(
  lua: &Lua,
  lua_root: &Path,
) -> mlua::Result<()>
{
  let root = lua_root.to_path_buf();
  let loaded: Table = lua.create_table()?;
  let require_fn = lua.create_function(move |lua, name: String| {
    if name.is_empty() || name.contains("..") || name.starts_with('/')
    {
      return Err(LuaError::external("invalid module name"));
    }
    if let Ok(v) = loaded.get::<Value>(name.as_str())
      && !v.is_nil()
    {
      return Ok(v);
    }
    let path = root.join(format!("{}.lua", name.replace('.', "/")));
    let canon = std::fs::canonicalize(&path)
      .map_err(|e| LuaError::external(format!("module '{name}': {e}")))?;
    let canon_root = std::fs::canonicalize(&root)
      .map_err(|e| LuaError::external(format!("{e}")))?;
    if !canon.starts_with(&canon_root)
    {
      return Err(LuaError::external("module outside config root"));
    }
    let code = std::fs::read_to_string(&canon)
      .map_err(|e| LuaError::external(format!("{e}")))?;
    crate::trace::log(format!("[lua] require '{}'", name));
    let value = lua.load(&code).set_name(name.as_str()).eval::<Value>()?;
    // A module returning nil is still recorded as loaded
    let stored = if value.is_nil() { Value::Boolean(true) } else { value };
    loaded.set(name.as_str(), stored.clone())?;
    Ok(stored)
  })?;
  lua.globals().set("require", require_fn)?;
  Ok(())
}
