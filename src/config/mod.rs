//! Application configuration.
//!
//! retroboi reads an optional `init.lua` from its config directory. The file
//! runs in a sandboxed Lua state and talks to the application through the
//! `retroboi` table (`retroboi.config{...}`, `retroboi.mapkey(...)`). The
//! per-system `default.cfg` files are a separate format handled by
//! [`crate::core::ini`].

mod api;
mod defaults;
mod loader;
mod lua_engine;
mod paths;
mod require;
mod types;

pub(crate) use api::install_retroboi_api;
pub use defaults::default_keymaps;
pub use loader::{
  load_config,
  load_config_from_code,
};
pub use lua_engine::LuaEngine;
pub use paths::{
  ConfigPaths,
  discover_config_paths,
  resolve_rom_dir,
};
pub(crate) use require::install_require;
pub use types::*;
