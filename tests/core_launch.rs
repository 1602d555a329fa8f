use std::{
  cell::RefCell,
  io,
  rc::Rc,
};

use retroboi::core::{
  escape::escape,
  ini::SystemConfig,
  launch::{
    Launch,
    LaunchOutcome,
    Runner,
    build_command,
    launch,
  },
  systems::System,
};

#[derive(Default, Clone)]
struct Recorder
{
  calls: Rc<RefCell<Vec<String>>>,
}

impl Runner for Recorder
{
  fn run(
    &mut self,
    command: &str,
  ) -> io::Result<bool>
  {
    self.calls.borrow_mut().push(command.to_string());
    Ok(true)
  }
}

struct Broken;

impl Runner for Broken
{
  fn run(
    &mut self,
    _command: &str,
  ) -> io::Result<bool>
  {
    Err(io::Error::new(io::ErrorKind::NotFound, "no such emulator"))
  }
}

fn system(cfg: &str) -> System
{
  System {
    name:   "snes".into(),
    path:   "/roms/snes".into(),
    config: SystemConfig::parse(cfg),
  }
}

#[test]
fn escape_covers_parens_and_spaces_only()
{
  assert_eq!(escape("Sonic (USA).bin"), "Sonic\\ \\(USA\\).bin");
  assert_eq!(escape("Tom's[!].nes"), "Tom's[!].nes");
}

#[test]
fn bind_builds_command_from_template()
{
  let sys = system("[default]\ncommand = retroarch -L snes.so %s\n");
  let job = sys.bind("Super Mario World (USA).sfc").expect("bound");
  assert_eq!(
    job.command,
    "retroarch -L snes.so /roms/snes/Super\\ Mario\\ World\\ \\(USA\\).sfc"
  );
  assert_eq!(job.rom, "Super Mario World (USA).sfc");
  assert_eq!(job.system, "snes");
}

#[test]
fn bind_without_command_is_none()
{
  assert!(system("[default]\nfilter = .sfc\n").bind("a.sfc").is_none());
}

#[test]
fn template_without_placeholder_is_kept_verbatim()
{
  assert_eq!(build_command("mednafen", "/r", "a b.pce"), "mednafen");
}

#[test]
fn launch_hands_command_to_runner()
{
  let mut rec = Recorder::default();
  let job = Launch {
    system:  "snes".into(),
    rom:     "a.sfc".into(),
    command: "echo /roms/snes/a.sfc".into(),
  };
  let outcome = launch(&mut rec, &job);
  assert!(outcome.is_success());
  assert_eq!(*rec.calls.borrow(), vec!["echo /roms/snes/a.sfc".to_string()]);
}

#[test]
fn spawn_failure_is_reported_not_propagated()
{
  let job = Launch {
    system:  "snes".into(),
    rom:     "a.sfc".into(),
    command: "missing-emu a.sfc".into(),
  };
  match launch(&mut Broken, &job)
  {
    LaunchOutcome::Failed(e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
    other => panic!("unexpected outcome: {:?}", other),
  }
}

#[test]
#[cfg(unix)]
fn shell_runner_reports_exit_status()
{
  use retroboi::core::launch::ShellRunner;
  let mut sh = ShellRunner;
  assert!(sh.run("true").expect("spawn"));
  assert!(!sh.run("exit 3").expect("spawn"));
  // Output is discarded rather than leaking into the terminal
  assert!(sh.run("echo noisy; echo noisy >&2").expect("spawn"));
}
