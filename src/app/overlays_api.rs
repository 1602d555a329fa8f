//! Menu, notice and message overlays for App.

use crate::app::{
  App,
  MenuState,
  NoticeState,
  Overlay,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry
{
  Shutdown,
  Reboot,
  Exit,
}

impl MenuEntry
{
  pub const ALL: [MenuEntry; 3] =
    [MenuEntry::Shutdown, MenuEntry::Reboot, MenuEntry::Exit];

  pub fn label(self) -> &'static str
  {
    match self
    {
      MenuEntry::Shutdown => "Shutdown",
      MenuEntry::Reboot => "Reboot",
      MenuEntry::Exit => "Exit Application",
    }
  }
}

impl App
{
  pub(crate) fn open_menu(&mut self)
  {
    self.overlay = Overlay::Menu(MenuState::default());
    self.force_full_redraw = true;
  }

  pub(crate) fn menu_move(
    &mut self,
    delta: isize,
  )
  {
    if let Overlay::Menu(ref mut st) = self.overlay
    {
      let len = MenuEntry::ALL.len() as isize;
      st.selected = (st.selected as isize + delta).rem_euclid(len) as usize;
    }
  }

  pub(crate) fn menu_activate(&mut self)
  {
    let entry = match self.overlay
    {
      Overlay::Menu(ref st) => MenuEntry::ALL[st.selected % MenuEntry::ALL.len()],
      _ => return,
    };
    self.overlay = Overlay::None;
    self.force_full_redraw = true;
    match entry
    {
      MenuEntry::Shutdown =>
      {
        let cmd = self.config.menu.shutdown.clone();
        self.run_menu_command(entry.label(), cmd);
      }
      MenuEntry::Reboot =>
      {
        let cmd = self.config.menu.reboot.clone();
        self.run_menu_command(entry.label(), cmd);
      }
      MenuEntry::Exit =>
      {
        crate::trace::log("[menu] quit");
        self.should_quit = true;
      }
    }
  }

  /// Show a dismissible notice; any key closes it.
  pub(crate) fn open_notice(
    &mut self,
    title: &str,
    message: &str,
  )
  {
    self.overlay = Overlay::Notice(Box::new(NoticeState {
      title:   title.to_string(),
      message: message.to_string(),
    }));
    self.force_full_redraw = true;
  }

  pub(crate) fn toggle_messages(&mut self)
  {
    self.overlay = match self.overlay
    {
      Overlay::Messages => Overlay::None,
      _ => Overlay::Messages,
    };
    self.force_full_redraw = true;
  }

  pub(crate) fn close_overlay(&mut self)
  {
    if !matches!(self.overlay, Overlay::None)
    {
      self.overlay = Overlay::None;
      self.force_full_redraw = true;
    }
  }
}
