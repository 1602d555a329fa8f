use std::{
  io,
  time::Duration,
};

use crossterm::{
  event,
  event::Event,
  execute,
  terminal::{
    EnterAlternateScreen,
    LeaveAlternateScreen,
    disable_raw_mode,
    enable_raw_mode,
  },
};
use ratatui::{
  Terminal,
  backend::CrosstermBackend,
};

use crate::{
  app::App,
  core::launch::{
    Runner,
    ShellRunner,
  },
};

/// Hands the terminal to the child process for the duration of a launch:
/// leaves raw mode and the alternate screen, runs the command, then
/// restores both.
#[derive(Debug, Default)]
pub struct SuspendingRunner<R: Runner = ShellRunner>
{
  inner: R,
}

impl<R: Runner> SuspendingRunner<R>
{
  pub fn new(inner: R) -> Self
  {
    Self { inner }
  }
}

impl<R: Runner> Runner for SuspendingRunner<R>
{
  fn run(
    &mut self,
    command: &str,
  ) -> io::Result<bool>
  {
    // leave tui
    disable_raw_mode().ok();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
    let res = self.inner.run(command);
    // re-enter tui
    let _ = execute!(io::stdout(), EnterAlternateScreen);
    enable_raw_mode().ok();
    res
  }
}

pub fn run_app(app: &mut App) -> Result<(), Box<dyn std::error::Error>>
{
  enable_raw_mode()?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend)?;
  terminal.clear()?;

  // Ensure we always restore the terminal even if an error occurs during event
  // handling
  let res: Result<(), Box<dyn std::error::Error>> = {
    let mut result: Result<(), Box<dyn std::error::Error>> = Ok(());
    loop
    {
      if app.force_full_redraw
      {
        let _ = terminal.clear();
        app.force_full_redraw = false;
      }
      match terminal.size()
      {
        Ok(size) => app.set_viewport_rows(size.height),
        Err(e) =>
        {
          result = Err(e.into());
          break;
        }
      }
      if let Err(e) = terminal.draw(|f| crate::ui::draw(f, app))
      {
        result = Err(e.into());
        break;
      }
      match event::poll(Duration::from_millis(200))
      {
        Ok(true) => match event::read()
        {
          Ok(ev) => match crate::runtime_util::process_event(app, ev)
          {
            Ok(true) => break, // graceful exit
            Ok(false) =>
            {}
            Err(e) =>
            {
              result = Err(e.into());
              break;
            }
          },
          Err(e) =>
          {
            result = Err(e.into());
            break;
          }
        },
        Ok(false) =>
        {}
        Err(e) =>
        {
          result = Err(e.into());
          break;
        }
      }
    }
    result
  };

  disable_raw_mode()?;
  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
  terminal.show_cursor()?;
  res
}
