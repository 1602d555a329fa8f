//! Key sequence bookkeeping: tokenizing configured sequences and resolving
//! typed keys to actions.

use std::collections::{
  HashMap,
  HashSet,
};

use crossterm::event::KeyModifiers;

use crate::config::KeyMapping;

/// Split a key sequence string into tokens, preserving modifier tokens like
/// "<C-x>" as single units.
pub fn tokenize_sequence(seq: &str) -> Vec<String>
{
  let mut toks = Vec::new();
  let mut rest = seq;
  while let Some(ch) = rest.chars().next()
  {
    if ch == '<'
      && let Some(j) = rest[1..].find('>')
    {
      let end = j + 2;
      toks.push(rest[..end].to_string());
      rest = &rest[end..];
      continue;
    }
    toks.push(ch.to_string());
    rest = &rest[ch.len_utf8()..];
  }
  toks
}

/// Build a key token from a character and its modifiers.
/// Examples: 'x' -> "x", Ctrl-x -> "<C-x>", Alt-x -> "<M-x>"
pub fn build_token(
  ch: char,
  mods: KeyModifiers,
) -> String
{
  let ctrl = mods.contains(KeyModifiers::CONTROL);
  let alt = mods.contains(KeyModifiers::ALT);
  if !ctrl && !alt
  {
    return ch.to_string();
  }
  let mut tok = String::from("<");
  if ctrl
  {
    tok.push_str("C-");
  }
  if alt
  {
    tok.push_str("M-");
  }
  tok.push(ch);
  tok.push('>');
  tok
}

/// Result of feeding one more token into a pending sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution
{
  /// The sequence is bound to this action.
  Action(String),
  /// The sequence is a prefix of a longer binding; keep collecting.
  Pending,
  /// Nothing matches.
  None,
}

/// Lookup tables built from the configured [`KeyMapping`]s.
#[derive(Debug, Clone, Default)]
pub struct KeyMap
{
  maps:     Vec<KeyMapping>,
  lookup:   HashMap<String, String>,
  prefixes: HashSet<String>,
}

impl KeyMap
{
  pub fn new(maps: Vec<KeyMapping>) -> Self
  {
    let mut km = Self { maps, ..Self::default() };
    km.rebuild();
    km
  }

  fn rebuild(&mut self)
  {
    self.lookup.clear();
    self.prefixes.clear();
    for m in &self.maps
    {
      self.lookup.insert(m.sequence.clone(), m.action.clone());
      let tokens = tokenize_sequence(&m.sequence);
      let mut acc = String::new();
      for t in tokens.iter().take(tokens.len().saturating_sub(1))
      {
        acc.push_str(t);
        self.prefixes.insert(acc.clone());
      }
    }
  }

  pub fn mappings(&self) -> &[KeyMapping]
  {
    &self.maps
  }

  pub fn action_for(
    &self,
    seq: &str,
  ) -> Option<&str>
  {
    self.lookup.get(seq).map(String::as_str)
  }

  pub fn is_prefix(
    &self,
    seq: &str,
  ) -> bool
  {
    self.prefixes.contains(seq)
  }

  /// Exact matches win over prefixes.
  pub fn resolve(
    &self,
    seq: &str,
  ) -> Resolution
  {
    if let Some(action) = self.action_for(seq)
    {
      Resolution::Action(action.to_string())
    }
    else if self.is_prefix(seq)
    {
      Resolution::Pending
    }
    else
    {
      Resolution::None
    }
  }
}
