use std::fs;

use super::systems::System;

/// List the ROMs of `system`: regular entries directly inside its directory,
/// sorted by name and narrowed to the configured suffixes.
///
/// A missing or unreadable directory is just an empty system.
pub fn list_roms(system: &System) -> Vec<String>
{
  let read = match fs::read_dir(&system.path)
  {
    Ok(rd) => rd,
    Err(e) =>
    {
      crate::trace::log(format!(
        "[roms] cannot read {}: {}",
        system.path.display(),
        e
      ));
      return Vec::new();
    }
  };

  let mut names: Vec<String> = read
    .filter_map(|res| res.ok())
    .filter(|e| !e.path().is_dir())
    .filter_map(|e| utf8_name(e.file_name(), &system.name))
    .collect();
  names.sort();

  let filter = system.config.filter().filter(|f| !f.is_empty());
  if let Some(suffixes) = filter
  {
    names.retain(|n| matches_filter(n, &suffixes));
  }
  crate::trace::log(format!(
    "[roms] {} rom(s) in '{}'",
    names.len(),
    system.name
  ));
  names
}

// Non-UTF-8 names are skipped; they cannot appear in a launch command.
fn utf8_name(
  name: std::ffi::OsString,
  system: &str,
) -> Option<String>
{
  match name.into_string()
  {
    Ok(s) => Some(s),
    Err(raw) =>
    {
      crate::trace::log(format!(
        "[roms] skipping non-UTF-8 entry {:?} in '{}'",
        raw, system
      ));
      None
    }
  }
}

/// Exact, case-sensitive suffix match against any of `suffixes`.
pub fn matches_filter(
  name: &str,
  suffixes: &[&str],
) -> bool
{
  suffixes.iter().any(|s| name.ends_with(s))
}
