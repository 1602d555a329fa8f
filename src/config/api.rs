use mlua::{
  Error as LuaError,
  Lua,
  Table,
  Value,
};
use std::{
  cell::RefCell,
  path::PathBuf,
  rc::Rc,
};

use super::{
  Config,
  KeyMapping,
  UiTheme,
};

/// Install the `retroboi` table:
/// - `retroboi.config(tbl)` merges fields into the accumulated [`Config`]
/// - `retroboi.mapkey(seq, action, description?)` adds or replaces a binding
pub(crate) fn install_retroboi_api(
  lua: &Lua,
  config_acc: Rc<RefCell<Config>>,
  maps: Rc<RefCell<Vec<KeyMapping>>>,
) -> mlua::Result<()>
{
  let api: Table = lua.create_table()?;

  let cfg_ref = Rc::clone(&config_acc);
  let config_fn = lua.create_function(move |_, tbl: Value| {
    let Value::Table(t) = tbl
    else
    {
      return Err(LuaError::RuntimeError(
        "retroboi.config expects a table".to_string(),
      ));
    };
    let mut cfg = cfg_ref
      .try_borrow_mut()
      .map_err(|e| LuaError::RuntimeError(e.to_string()))?;
    merge_config_table(&mut cfg, &t)?;
    Ok(true)
  })?;
  api.set("config", config_fn)?;

  let maps_ref = Rc::clone(&maps);
  let mapkey_fn = lua.create_function(
    move |_, (seq, action, desc): (String, String, Option<String>)| {
      if seq.is_empty() || action.trim().is_empty()
      {
        return Ok(false);
      }
      let mut list = maps_ref
        .try_borrow_mut()
        .map_err(|e| LuaError::RuntimeError(e.to_string()))?;
      list.retain(|m| m.sequence != seq);
      list.push(KeyMapping { sequence: seq, action, description: desc });
      Ok(true)
    },
  )?;
  api.set("mapkey", mapkey_fn)?;

  lua.globals().set("retroboi", api)?;
  Ok(())
}

fn merge_config_table(
  cfg: &mut Config,
  t: &Table,
) -> mlua::Result<()>
{
  if let Ok(s) = t.get::<String>("rom_dir")
  {
    cfg.rom_dir = Some(PathBuf::from(s));
  }
  if let Ok(s) = t.get::<String>("system_config")
    && !s.trim().is_empty()
  {
    cfg.system_config = s;
  }
  if let Ok(s) = t.get::<String>("log_file")
  {
    cfg.log_file = Some(PathBuf::from(s));
  }
  if let Ok(keys) = t.get::<Table>("keys")
    && let Ok(ms) = keys.get::<u64>("sequence_timeout_ms")
  {
    cfg.keys.sequence_timeout_ms = ms;
  }
  if let Ok(ui) = t.get::<Table>("ui")
  {
    if let Ok(rows) = ui.get::<u16>("chrome_rows")
    {
      cfg.ui.chrome_rows = rows;
    }
    if let Ok(h) = ui.get::<String>("header")
    {
      cfg.ui.header = Some(h);
    }
    if let Ok(th) = ui.get::<Table>("theme")
    {
      let mut theme = cfg.ui.theme.clone().unwrap_or_default();
      merge_theme_table(&mut theme, &th);
      cfg.ui.theme = Some(theme);
    }
  }
  if let Ok(menu) = t.get::<Table>("menu")
  {
    if let Ok(s) = menu.get::<String>("shutdown")
    {
      cfg.menu.shutdown = Some(s);
    }
    if let Ok(s) = menu.get::<String>("reboot")
    {
      cfg.menu.reboot = Some(s);
    }
  }
  Ok(())
}

fn merge_theme_table(
  theme: &mut UiTheme,
  t: &Table,
)
{
  let get = |k: &str| t.get::<String>(k).ok();
  let fields: [(&str, &mut Option<String>); 7] = [
    ("pane_bg", &mut theme.pane_bg),
    ("border_fg", &mut theme.border_fg),
    ("item_fg", &mut theme.item_fg),
    ("selected_item_fg", &mut theme.selected_item_fg),
    ("selected_item_bg", &mut theme.selected_item_bg),
    ("title_fg", &mut theme.title_fg),
    ("title_bg", &mut theme.title_bg),
  ];
  for (key, slot) in fields
  {
    if let Some(v) = get(key)
    {
      *slot = Some(v);
    }
  }
}
