//! Lenient reader for the per-system `default.cfg` files.
//!
//! The format is the informal INI dialect most emulator front-ends use:
//! `[section]` headers, `key = value` (or `key: value`) pairs, `#`/`;`
//! comments, and indented continuation lines. Anything else is skipped.

use std::{
  collections::HashMap,
  fs,
  path::Path,
};

/// Section every valid system config must declare.
pub const DEFAULT_SECTION: &str = "default";
/// Launch template key inside [`DEFAULT_SECTION`].
pub const COMMAND_KEY: &str = "command";
/// Space separated suffix list inside [`DEFAULT_SECTION`].
pub const FILTER_KEY: &str = "filter";

/// Section name -> (key -> value) mapping for one system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemConfig
{
  sections: HashMap<String, HashMap<String, String>>,
}

impl SystemConfig
{
  /// Load `path`. Missing or unreadable files yield an empty config.
  pub fn load(path: &Path) -> Self
  {
    match fs::read_to_string(path)
    {
      Ok(text) => Self::parse(&text),
      Err(e) =>
      {
        crate::trace::log(format!(
          "[ini] cannot read {}: {}",
          path.display(),
          e
        ));
        Self::default()
      }
    }
  }

  /// Parse config text, silently dropping lines that do not fit the format.
  pub fn parse(text: &str) -> Self
  {
    let mut sections: HashMap<String, HashMap<String, String>> =
      HashMap::new();
    let mut section: Option<String> = None;
    let mut last_key: Option<String> = None;

    for raw in text.lines()
    {
      let line = raw.trim_end_matches('\r');
      let trimmed = line.trim();
      if trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with(';')
      {
        continue;
      }

      // Indented line: continuation of the previous value
      if line.starts_with([' ', '\t'])
        && let (Some(sec), Some(key)) = (section.as_ref(), last_key.as_ref())
        && let Some(value) =
          sections.get_mut(sec).and_then(|kv| kv.get_mut(key))
      {
        if !value.is_empty()
        {
          value.push('\n');
        }
        value.push_str(trimmed);
        continue;
      }

      if let Some(rest) = trimmed.strip_prefix('[')
      {
        match rest.find(']')
        {
          // Empty header: ignored like any other unparsable line
          Some(0) => continue,
          // Name verbatim; anything after `]` is ignored
          Some(end) =>
          {
            let name = rest[..end].to_string();
            sections.entry(name.clone()).or_default();
            section = Some(name);
          }
          None => section = None,
        }
        last_key = None;
        continue;
      }

      let Some(sec) = section.as_ref()
      else
      {
        continue;
      };
      let Some(split) = trimmed.find(['=', ':'])
      else
      {
        last_key = None;
        continue;
      };
      let key = trimmed[..split].trim().to_lowercase();
      if key.is_empty()
      {
        last_key = None;
        continue;
      }
      let value = trimmed[split + 1..].trim().to_string();
      if let Some(kv) = sections.get_mut(sec)
      {
        kv.insert(key.clone(), value);
      }
      last_key = Some(key);
    }

    Self { sections }
  }

  pub fn has_section(
    &self,
    name: &str,
  ) -> bool
  {
    self.sections.contains_key(name)
  }

  pub fn get(
    &self,
    section: &str,
    key: &str,
  ) -> Option<&str>
  {
    self
      .sections
      .get(section)
      .and_then(|kv| kv.get(&key.to_lowercase()))
      .map(String::as_str)
  }

  /// True when the required `[default]` section is present.
  pub fn is_valid(&self) -> bool
  {
    self.has_section(DEFAULT_SECTION)
  }

  /// The launch template from `[default] command`.
  pub fn command(&self) -> Option<&str>
  {
    self.get(DEFAULT_SECTION, COMMAND_KEY)
  }

  /// Suffixes from `[default] filter`, or `None` when no filter is set.
  pub fn filter(&self) -> Option<Vec<&str>>
  {
    self
      .get(DEFAULT_SECTION, FILTER_KEY)
      .map(|f| f.split_whitespace().collect())
  }

  pub fn section_names(&self) -> Vec<&str>
  {
    let mut names: Vec<&str> =
      self.sections.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
  }
}
