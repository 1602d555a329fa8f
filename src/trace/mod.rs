//! Append-only diagnostic log.
//!
//! Logging is off until [`init`] (or [`init_from_env`]) opens a file. If the
//! file cannot be opened the log stays disabled and nothing is reported.

use std::{
  fs::{
    File,
    OpenOptions,
  },
  io::Write,
  path::{
    Path,
    PathBuf,
  },
  sync::{
    Mutex,
    OnceLock,
  },
};

static SINK: OnceLock<Mutex<Option<File>>> = OnceLock::new();

fn sink() -> &'static Mutex<Option<File>>
{
  SINK.get_or_init(|| Mutex::new(None))
}

/// Open `path` for appending and route all later [`log`] calls to it.
/// Returns whether logging is now active.
pub fn init(path: &Path) -> bool
{
  let file = OpenOptions::new().create(true).append(true).open(path).ok();
  let active = file.is_some();
  if let Ok(mut guard) = sink().lock()
  {
    *guard = file;
  }
  active
}

/// Enable logging when `RETROBOI_TRACE` or `RETROBOI_TRACE_FILE` is set.
pub fn init_from_env() -> bool
{
  let flag = std::env::var("RETROBOI_TRACE")
    .map(|v| !v.is_empty() && v != "0")
    .unwrap_or(false);
  let file = std::env::var("RETROBOI_TRACE_FILE").ok().filter(|s| !s.is_empty());
  match (flag, file)
  {
    (_, Some(fp)) => init(Path::new(&fp)),
    (true, None) => init(&default_path()),
    (false, None) => false,
  }
}

pub fn enabled() -> bool
{
  sink().lock().map(|g| g.is_some()).unwrap_or(false)
}

/// Default log location: `$TMPDIR/retroboi.log`, else `/tmp/retroboi.log`.
pub fn default_path() -> PathBuf
{
  if let Ok(tmp) = std::env::var("TMPDIR")
    && !tmp.is_empty()
  {
    return PathBuf::from(tmp).join("retroboi.log");
  }
  PathBuf::from("/tmp/retroboi.log")
}

pub fn log<S: AsRef<str>>(s: S)
{
  let Ok(mut guard) = sink().lock()
  else
  {
    return;
  };
  if let Some(f) = guard.as_mut()
  {
    let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let _ = writeln!(f, "{} {}", stamp, s.as_ref());
  }
}

/// Install a panic hook that logs panic message, location, and backtrace
/// to the trace log and attempts to restore the terminal state so the
/// panic is visible to the user.
pub fn install_panic_hook()
{
  std::panic::set_hook(Box::new(|info| {
    let msg = if let Some(s) = info.payload().downcast_ref::<&str>()
    {
      s.to_string()
    }
    else if let Some(s) = info.payload().downcast_ref::<String>()
    {
      s.clone()
    }
    else
    {
      String::from("<non-string panic payload>")
    };
    let loc = info
      .location()
      .map(|l| format!("{}:{}", l.file(), l.line()))
      .unwrap_or_else(|| "<unknown>".to_string());
    let bt = std::backtrace::Backtrace::force_capture();
    log(format!("[panic] {msg} @ {loc}"));
    log(format!("[panic] backtrace:\n{bt}"));
    // Best-effort terminal restore so the panic is visible
    let _ = crossterm::terminal::disable_raw_mode();
    let mut out = std::io::stdout();
    let _ = crossterm::execute!(out, crossterm::terminal::LeaveAlternateScreen);
    eprintln!("retroboi panicked: {msg} @ {loc}");
  }));
}
