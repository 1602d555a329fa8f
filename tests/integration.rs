use std::{
  cell::RefCell,
  fs,
  io,
  path::Path,
  rc::Rc,
};

use crossterm::event::{
  KeyCode,
  KeyEvent,
  KeyEventKind,
  KeyModifiers,
};
use retroboi::{
  App,
  actions::dispatch_action,
  app::Overlay,
  config::{
    Config,
    default_keymaps,
  },
  core::{
    escape::escape,
    launch::Runner,
  },
  input::handle_key,
};

#[derive(Default, Clone)]
struct Recorder
{
  calls:  Rc<RefCell<Vec<String>>>,
  status: Option<bool>,
}

impl Runner for Recorder
{
  fn run(
    &mut self,
    command: &str,
  ) -> io::Result<bool>
  {
    self.calls.borrow_mut().push(command.to_string());
    match self.status
    {
      Some(ok) => Ok(ok),
      None => Err(io::Error::new(io::ErrorKind::NotFound, "spawn failed")),
    }
  }
}

fn ok_runner() -> Recorder
{
  Recorder { status: Some(true), ..Recorder::default() }
}

fn add_system(
  root: &Path,
  name: &str,
  cfg: &str,
  roms: &[&str],
)
{
  let dir = root.join(name);
  fs::create_dir_all(&dir).unwrap();
  fs::write(dir.join("default.cfg"), cfg).unwrap();
  for r in roms
  {
    fs::write(dir.join(r), b"").unwrap();
  }
}

fn make_app(
  root: &Path,
  runner: Recorder,
) -> App
{
  App::with_config(root, Config::default(), default_keymaps(), Box::new(runner))
    .expect("app")
}

fn press(
  app: &mut App,
  code: KeyCode,
) -> bool
{
  handle_key(app, KeyEvent::new(code, KeyModifiers::NONE)).expect("key")
}

fn chars(
  app: &mut App,
  s: &str,
)
{
  for ch in s.chars()
  {
    press(app, KeyCode::Char(ch));
  }
}

#[test]
fn selecting_a_rom_runs_its_system_command()
{
  let tmp = tempfile::tempdir().unwrap();
  let root = tmp.path();
  add_system(root, "snes", "[default]\ncommand = echo %s\n", &["Mario.sfc"]);
  let rec = ok_runner();
  let mut app = make_app(root, rec.clone());

  assert_eq!(app.current_system_name().as_deref(), Some("snes"));
  assert_eq!(app.selected_rom(), Some("Mario.sfc"));
  assert!(!press(&mut app, KeyCode::Char('a')));

  let expected =
    format!("echo {}", escape(&format!("{}/snes/Mario.sfc", root.display())));
  assert_eq!(*rec.calls.borrow(), vec![expected.clone()]);
  assert_eq!(app.last_launch().map(|l| l.command.as_str()), Some(expected.as_str()));
  assert!(matches!(app.overlay(), Overlay::None));
  assert_eq!(app.selected_rom(), Some("Mario.sfc"));
}

#[test]
fn rom_names_are_escaped_in_the_command()
{
  let tmp = tempfile::tempdir().unwrap();
  let root = tmp.path();
  add_system(
    root,
    "genesis",
    "[default]\nfilter = .bin\ncommand = gens --fullscreen %s\n",
    &["Sonic (USA).bin"],
  );
  let rec = ok_runner();
  let mut app = make_app(root, rec.clone());
  press(&mut app, KeyCode::Enter);
  let cmd = rec.calls.borrow()[0].clone();
  assert!(cmd.starts_with("gens --fullscreen "));
  assert!(cmd.ends_with("/genesis/Sonic\\ \\(USA\\).bin"), "{cmd}");
}

#[test]
fn failed_launch_opens_notice_and_keeps_browsing()
{
  let tmp = tempfile::tempdir().unwrap();
  let root = tmp.path();
  add_system(root, "nes", "[default]\nfilter = .nes\ncommand = nope %s\n", &["a.nes", "b.nes"]);
  let mut app = make_app(root, Recorder::default());
  press(&mut app, KeyCode::Down);
  press(&mut app, KeyCode::Char('a'));

  match app.overlay()
  {
    Overlay::Notice(n) => assert_eq!(n.message, "Error launching game, check config"),
    other => panic!("expected notice, got {:?}", other),
  }
  // Any key dismisses the notice without acting on it
  assert!(!press(&mut app, KeyCode::Char('q')));
  assert!(matches!(app.overlay(), Overlay::None));
  assert_eq!(app.selected_rom(), Some("b.nes"));
  assert!(!app.should_quit());
}

#[test]
fn system_without_command_reports_instead_of_launching()
{
  let tmp = tempfile::tempdir().unwrap();
  let root = tmp.path();
  add_system(root, "gb", "[default]\nfilter = .gb\n", &["tetris.gb"]);
  let rec = ok_runner();
  let mut app = make_app(root, rec.clone());
  press(&mut app, KeyCode::Enter);
  assert!(rec.calls.borrow().is_empty());
  assert!(matches!(app.overlay(), Overlay::Notice(_)));
}

#[test]
fn next_system_cycles_and_refreshes_roms()
{
  let tmp = tempfile::tempdir().unwrap();
  let root = tmp.path();
  add_system(root, "gb", "[default]\nfilter = .gb\ncommand = x %s\n", &["tetris.gb"]);
  add_system(root, "nes", "[default]\nfilter = .nes\ncommand = x %s\n", &["zelda.nes", "contra.nes"]);
  let mut app = make_app(root, ok_runner());

  assert_eq!(app.roms(), ["tetris.gb"]);
  press(&mut app, KeyCode::Char('i'));
  assert_eq!(app.current_system_name().as_deref(), Some("nes"));
  assert_eq!(app.roms(), ["contra.nes", "zelda.nes"]);
  assert_eq!(app.selected_index(), Some(0));
  press(&mut app, KeyCode::Tab);
  assert_eq!(app.current_system_name().as_deref(), Some("gb"));
}

#[test]
fn reload_finds_new_systems_and_starts_over()
{
  let tmp = tempfile::tempdir().unwrap();
  let root = tmp.path();
  add_system(root, "nes", "[default]\ncommand = x %s\n", &[]);
  let mut app = make_app(root, ok_runner());
  add_system(root, "atari", "[default]\ncommand = x %s\n", &[]);
  press(&mut app, KeyCode::Char('r'));
  assert_eq!(app.system_names(), vec!["atari", "nes"]);
  assert_eq!(app.system_index(), 0);
  assert_eq!(app.messages().last().map(String::as_str), Some("Reloaded 2 system(s)"));
}

#[test]
fn reload_with_everything_gone_leaves_an_empty_view()
{
  let tmp = tempfile::tempdir().unwrap();
  let root = tmp.path();
  add_system(root, "nes", "[default]\ncommand = x %s\n", &["a.nes"]);
  let rec = ok_runner();
  let mut app = make_app(root, rec.clone());
  fs::remove_dir_all(root.join("nes")).unwrap();
  press(&mut app, KeyCode::Char('r'));
  assert!(app.system_names().is_empty());
  assert!(app.roms().is_empty());
  assert!(app.selected_rom().is_none());
  press(&mut app, KeyCode::Char('a'));
  assert!(rec.calls.borrow().is_empty());
}

#[test]
fn startup_without_systems_is_not_found()
{
  let tmp = tempfile::tempdir().unwrap();
  fs::create_dir_all(tmp.path().join("empty")).unwrap();
  let err = App::with_config(
    tmp.path(),
    Config::default(),
    default_keymaps(),
    Box::new(ok_runner()),
  )
  .err()
  .expect("no systems");
  assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

#[test]
fn paging_follows_viewport_height()
{
  let tmp = tempfile::tempdir().unwrap();
  let root = tmp.path();
  let roms: Vec<String> = (0..10).map(|i| format!("rom{:02}.a26", i)).collect();
  let refs: Vec<&str> = roms.iter().map(String::as_str).collect();
  add_system(root, "atari", "[default]\nfilter = .a26\ncommand = x %s\n", &refs);
  let mut app = make_app(root, ok_runner());

  // 4 rows of chrome leave 4 slots
  app.set_viewport_rows(8);
  assert_eq!(app.page_count(), 3);
  assert_eq!(app.page_roms().len(), 4);

  press(&mut app, KeyCode::End);
  assert_eq!(app.selected_rom(), Some("rom03.a26"));
  press(&mut app, KeyCode::Down);
  assert_eq!(app.selected_rom(), Some("rom03.a26"));

  press(&mut app, KeyCode::Char('n'));
  assert_eq!(app.page(), 1);
  assert_eq!(app.selected_rom(), Some("rom04.a26"));
  press(&mut app, KeyCode::Char('n'));
  assert_eq!(app.page_roms(), ["rom08.a26", "rom09.a26"]);
  press(&mut app, KeyCode::Char('n'));
  assert_eq!(app.page(), 0);
  press(&mut app, KeyCode::Char('p'));
  assert_eq!(app.page(), 2);

  // Growing the viewport keeps the selected ROM visible
  app.set_viewport_rows(10);
  assert_eq!(app.selected_rom(), Some("rom08.a26"));
  assert!(app.page_roms().iter().any(|r| r == "rom08.a26"));
}

#[test]
fn multi_key_sequences_resolve()
{
  let tmp = tempfile::tempdir().unwrap();
  let root = tmp.path();
  add_system(root, "nes", "[default]\nfilter = .nes\ncommand = x %s\n", &["a.nes", "b.nes", "c.nes"]);
  let mut app = make_app(root, ok_runner());
  chars(&mut app, "G");
  assert_eq!(app.selected_rom(), Some("c.nes"));
  chars(&mut app, "g");
  assert_eq!(app.pending_keys(), "g");
  chars(&mut app, "g");
  assert_eq!(app.pending_keys(), "");
  assert_eq!(app.selected_rom(), Some("a.nes"));
  // A broken prefix falls back to the last key alone
  chars(&mut app, "gj");
  assert_eq!(app.selected_rom(), Some("b.nes"));
}

#[test]
fn menu_exit_quits()
{
  let tmp = tempfile::tempdir().unwrap();
  add_system(tmp.path(), "nes", "[default]\ncommand = x %s\n", &[]);
  let mut app = make_app(tmp.path(), ok_runner());
  press(&mut app, KeyCode::Char('o'));
  assert!(matches!(app.overlay(), Overlay::Menu(_)));
  press(&mut app, KeyCode::Up);
  assert!(press(&mut app, KeyCode::Enter));
  assert!(app.should_quit());
}

#[test]
fn menu_shutdown_runs_configured_command()
{
  let tmp = tempfile::tempdir().unwrap();
  add_system(tmp.path(), "nes", "[default]\ncommand = x %s\n", &[]);
  let mut cfg = Config::default();
  cfg.menu.shutdown = Some("sudo poweroff".into());
  let rec = ok_runner();
  let mut app = App::with_config(tmp.path(), cfg, default_keymaps(), Box::new(rec.clone()))
    .expect("app");
  press(&mut app, KeyCode::Char('o'));
  assert!(!press(&mut app, KeyCode::Enter));
  assert_eq!(*rec.calls.borrow(), vec!["sudo poweroff".to_string()]);

  // Reboot is unconfigured
  press(&mut app, KeyCode::Char('o'));
  press(&mut app, KeyCode::Down);
  press(&mut app, KeyCode::Enter);
  assert_eq!(rec.calls.borrow().len(), 1);
  assert_eq!(
    app.messages().last().map(String::as_str),
    Some("Reboot: no command configured")
  );
}

#[test]
fn quit_key_and_action_sequences()
{
  let tmp = tempfile::tempdir().unwrap();
  add_system(tmp.path(), "nes", "[default]\ncommand = x %s\n", &["a.nes", "b.nes"]);
  let mut app = make_app(tmp.path(), ok_runner());

  assert!(dispatch_action(&mut app, "nav:down; messages").unwrap());
  assert_eq!(app.selected_index(), Some(1));
  assert!(matches!(app.overlay(), Overlay::Messages));
  press(&mut app, KeyCode::Esc);
  assert!(matches!(app.overlay(), Overlay::None));

  assert!(!dispatch_action(&mut app, "warp").unwrap());
  assert_eq!(app.messages().last().map(String::as_str), Some("Unknown action: warp"));

  assert!(press(&mut app, KeyCode::Char('q')));
}

#[test]
fn release_events_are_ignored()
{
  let tmp = tempfile::tempdir().unwrap();
  add_system(tmp.path(), "nes", "[default]\ncommand = x %s\n", &[]);
  let mut app = make_app(tmp.path(), ok_runner());
  let mut ev = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
  ev.kind = KeyEventKind::Release;
  assert!(!handle_key(&mut app, ev).unwrap());
  assert!(handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)).unwrap());
}

#[test]
fn filtered_system_beside_unconfigured_dir_launches_escaped_path()
{
  let tmp = tempfile::tempdir().unwrap();
  let root = tmp.path();
  add_system(
    root,
    "snes",
    "[default]\nfilter = .sfc\ncommand = echo %s\n",
    &["Mario.sfc", "readme.txt"],
  );
  fs::create_dir_all(root.join("genesis")).unwrap();
  fs::write(root.join("genesis").join("Sonic.bin"), b"").unwrap();

  let rec = ok_runner();
  let mut app = make_app(root, rec.clone());
  assert_eq!(app.system_names(), vec!["snes"]);
  assert_eq!(app.roms(), ["Mario.sfc"]);

  press(&mut app, KeyCode::Char('a'));
  let expected =
    format!("echo {}", escape(&format!("{}/snes/Mario.sfc", root.display())));
  assert_eq!(*rec.calls.borrow(), vec![expected]);
}

#[test]
fn system_whose_filter_matches_nothing_has_nothing_to_launch()
{
  let tmp = tempfile::tempdir().unwrap();
  let root = tmp.path();
  add_system(
    root,
    "n64",
    "[default]\nfilter = .z64\ncommand = mupen64plus %s\n",
    &["notes.txt"],
  );
  let rec = ok_runner();
  let mut app = make_app(root, rec.clone());
  assert_eq!(app.current_system_name().as_deref(), Some("n64"));
  assert!(app.roms().is_empty());
  assert!(app.page_roms().is_empty());
  assert_eq!(app.page_count(), 1);
  assert!(app.selected_rom().is_none());

  press(&mut app, KeyCode::Char('a'));
  press(&mut app, KeyCode::Enter);
  assert!(rec.calls.borrow().is_empty());
  assert_eq!(
    app.messages().iter().filter(|m| *m == "Nothing to launch").count(),
    2
  );
  assert!(matches!(app.overlay(), Overlay::None));
}

#[test]
fn message_log_swallows_keys_meant_for_the_list()
{
  let tmp = tempfile::tempdir().unwrap();
  let root = tmp.path();
  add_system(root, "nes", "[default]\ncommand = x %s\n", &["a.nes", "b.nes"]);
  add_system(root, "snes", "[default]\ncommand = x %s\n", &["c.sfc"]);
  let rec = ok_runner();
  let mut app = make_app(root, rec.clone());

  press(&mut app, KeyCode::Char('m'));
  assert!(matches!(app.overlay(), Overlay::Messages));
  press(&mut app, KeyCode::Char('a'));
  press(&mut app, KeyCode::Enter);
  press(&mut app, KeyCode::Char('j'));
  press(&mut app, KeyCode::Char('i'));
  assert!(rec.calls.borrow().is_empty());
  assert_eq!(app.selected_rom(), Some("a.nes"));
  assert_eq!(app.current_system_name().as_deref(), Some("nes"));
  assert!(matches!(app.overlay(), Overlay::Messages));

  press(&mut app, KeyCode::Char('m'));
  assert!(matches!(app.overlay(), Overlay::None));
  press(&mut app, KeyCode::Char('m'));
  press(&mut app, KeyCode::Char('b'));
  assert!(matches!(app.overlay(), Overlay::None));
  press(&mut app, KeyCode::Char('m'));
  assert!(press(&mut app, KeyCode::Char('q')));
}
