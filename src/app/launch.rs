//! Launching the selected ROM.

use crate::{
  app::App,
  core::launch::{
    LaunchOutcome,
    launch,
  },
};

impl App
{
  /// Bind the selected ROM to its system's command and run it, blocking
  /// until the emulator exits. Failures end up in a notice; browsing state
  /// is left as it was.
  pub(crate) fn launch_selected(&mut self)
  {
    let Some(rom) = self.selected_rom().map(str::to_string)
    else
    {
      self.add_message("Nothing to launch");
      return;
    };
    let Some(system) = self.nav.current()
    else
    {
      return;
    };
    let Some(job) = system.bind(&rom)
    else
    {
      let name = system.name.clone();
      self.open_notice(
        "Launch",
        &format!("No command configured for system '{}'", name),
      );
      return;
    };

    let outcome = launch(self.runner.as_mut(), &job);
    self.force_full_redraw = true;
    match outcome
    {
      LaunchOutcome::Exited(true) =>
      {
        self.add_message(&format!("Finished {}", job.rom));
      }
      LaunchOutcome::Exited(false) =>
      {
        self.add_message(&format!("{} exited with an error", job.rom));
      }
      LaunchOutcome::Failed(e) =>
      {
        self.add_message(&format!("Launch failed: {}", e));
        self.open_notice("Error", "Error launching game, check config");
      }
    }
    self.last_launch = Some(job);
  }

  /// Run a menu command (shutdown/reboot) through the same runner.
  pub(crate) fn run_menu_command(
    &mut self,
    label: &str,
    command: Option<String>,
  )
  {
    let Some(cmd) = command.filter(|c| !c.trim().is_empty())
    else
    {
      self.add_message(&format!("{}: no command configured", label));
      return;
    };
    crate::trace::log(format!("[menu] {} -> {}", label, cmd));
    self.force_full_redraw = true;
    if let Err(e) = self.runner.run(&cmd)
    {
      self.add_message(&format!("{} failed: {}", label, e));
      self.open_notice("Error", &format!("{} failed, check config", label));
    }
  }
}
