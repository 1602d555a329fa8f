// Built-in actions bound to keys.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalAction
{
  Quit,
  Launch,
  NextSystem,
  Reload,
  Menu,
  Back,
  Messages,
  Up,
  Down,
  Top,
  Bottom,
  NextPage,
  PrevPage,
}

pub fn parse_internal_action(s: &str) -> Option<InternalAction>
{
  let low = s.trim().to_ascii_lowercase();
  let action = match low.as_str()
  {
    "quit" | "q" | "exit" => InternalAction::Quit,
    "launch" | "select" | "play" => InternalAction::Launch,
    "system:next" | "next_system" => InternalAction::NextSystem,
    "reload" | "rescan" => InternalAction::Reload,
    "menu" => InternalAction::Menu,
    "back" | "close" => InternalAction::Back,
    "messages" => InternalAction::Messages,
    "nav:up" | "up" => InternalAction::Up,
    "nav:down" | "down" => InternalAction::Down,
    "nav:top" | "top" => InternalAction::Top,
    "nav:bottom" | "bottom" => InternalAction::Bottom,
    "page:next" => InternalAction::NextPage,
    "page:prev" => InternalAction::PrevPage,
    _ => return None,
  };
  Some(action)
}

pub(crate) fn execute_internal_action(
  app: &mut crate::app::App,
  action: InternalAction,
)
{
  match action
  {
    InternalAction::Quit =>
    {
      app.should_quit = true;
    }
    InternalAction::Launch => app.launch_selected(),
    InternalAction::NextSystem => app.next_system(),
    InternalAction::Reload => app.reload_systems(),
    InternalAction::Menu => app.open_menu(),
    InternalAction::Back => app.close_overlay(),
    InternalAction::Messages => app.toggle_messages(),
    InternalAction::Up => app.move_selection(-1),
    InternalAction::Down => app.move_selection(1),
    InternalAction::Top => app.select_top(),
    InternalAction::Bottom => app.select_bottom(),
    InternalAction::NextPage => app.next_page(),
    InternalAction::PrevPage => app.prev_page(),
  }
}
