//! Input handling for keyboard events.

use crate::{
  actions::{
    InternalAction,
    dispatch_action,
    internal::execute_internal_action,
    parse_internal_action,
  },
  app::{
    App,
    Overlay,
  },
  keymap::{
    Resolution,
    build_token,
  },
};
use std::io;

use crossterm::event::{
  KeyCode,
  KeyEvent,
  KeyEventKind,
  KeyModifiers,
};

/// Accept a terminal key event and mutate the [`App`] accordingly.
///
/// Returns `Ok(true)` when the caller should exit. Overlays take the key
/// first; otherwise character keys go through the keymap and the fixed
/// navigation keys (arrows, Enter, Page Up/Down, Tab, Esc) act directly.
pub fn handle_key(
  app: &mut App,
  key: KeyEvent,
) -> io::Result<bool>
{
  // Ignore key release/repeat events to avoid double-processing (esp. on
  // Windows)
  if key.kind != KeyEventKind::Press
  {
    return Ok(false);
  }

  match app.overlay
  {
    Overlay::Notice(_) =>
    {
      app.close_overlay();
      return Ok(false);
    }
    Overlay::Menu(_) =>
    {
      handle_menu_key(app, key);
      return Ok(app.should_quit);
    }
    Overlay::Messages =>
    {
      return handle_messages_key(app, key);
    }
    Overlay::None =>
    {}
  }

  if key.modifiers.contains(KeyModifiers::CONTROL)
    && matches!(key.code, KeyCode::Char('c'))
  {
    app.should_quit = true;
    return Ok(true);
  }

  if let KeyCode::Char(ch) = key.code
  {
    let token = build_token(ch, key.modifiers);
    match app.feed_key_token(&token)
    {
      Resolution::Action(action) =>
      {
        dispatch_action(app, &action)?;
      }
      Resolution::Pending | Resolution::None =>
      {}
    }
    return Ok(app.should_quit);
  }

  app.clear_pending_keys();
  let action = match key.code
  {
    KeyCode::Enter => Some(InternalAction::Launch),
    KeyCode::Up => Some(InternalAction::Up),
    KeyCode::Down => Some(InternalAction::Down),
    KeyCode::Home => Some(InternalAction::Top),
    KeyCode::End => Some(InternalAction::Bottom),
    KeyCode::PageDown | KeyCode::Right => Some(InternalAction::NextPage),
    KeyCode::PageUp | KeyCode::Left => Some(InternalAction::PrevPage),
    KeyCode::Tab => Some(InternalAction::NextSystem),
    KeyCode::Esc => Some(InternalAction::Back),
    _ => None,
  };
  if let Some(a) = action
  {
    execute_internal_action(app, a);
  }
  Ok(app.should_quit)
}

/// The message log captures keys. Only actions that close it or quit run.
fn handle_messages_key(
  app: &mut App,
  key: KeyEvent,
) -> io::Result<bool>
{
  let action = match key.code
  {
    KeyCode::Esc =>
    {
      app.clear_pending_keys();
      app.close_overlay();
      return Ok(false);
    }
    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) =>
    {
      app.should_quit = true;
      return Ok(true);
    }
    KeyCode::Char(ch) =>
    {
      match app.feed_key_token(&build_token(ch, key.modifiers))
      {
        Resolution::Action(action) => action,
        Resolution::Pending | Resolution::None => return Ok(false),
      }
    }
    _ => return Ok(false),
  };
  let closes = action
    .split(';')
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .all(|a| {
      matches!(
        parse_internal_action(a),
        Some(
          InternalAction::Messages | InternalAction::Back | InternalAction::Quit
        )
      )
    });
  if closes
  {
    dispatch_action(app, &action)?;
  }
  else
  {
    crate::trace::log(format!(
      "[input] '{}' ignored while messages are open",
      action
    ));
  }
  Ok(app.should_quit)
}

fn handle_menu_key(
  app: &mut App,
  key: KeyEvent,
)
{
  match key.code
  {
    KeyCode::Up | KeyCode::Char('k') => app.menu_move(-1),
    KeyCode::Down | KeyCode::Char('j') => app.menu_move(1),
    KeyCode::Enter | KeyCode::Char('a') => app.menu_activate(),
    KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('o') =>
    {
      app.close_overlay()
    }
    _ =>
    {}
  }
}
