//! Discovery, filtering, paging and launching. Nothing in here touches the
//! terminal.

pub mod escape;
pub mod ini;
pub mod launch;
pub mod navigation;
pub mod pagination;
pub mod roms;
pub mod systems;
