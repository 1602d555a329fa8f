use std::path::PathBuf;

use retroboi::{
  App,
  core::launch::ShellRunner,
  runtime,
  runtime::SuspendingRunner,
  trace,
};

fn print_version()
{
  println!("retroboi {}", env!("CARGO_PKG_VERSION"));
}

fn usage() -> &'static str
{
  "Usage: retroboi [OPTIONS] [ROMDIR]\n\n\
     Options:\n\
       -h, --help            Show this help and exit\n\
       -V, --version         Show version and exit\n\
           --config-dir DIR  Use DIR as the config root (sets RETROBOI_CONFIG_DIR)\n\
           --trace[=FILE]    Write a diagnostic log to FILE (default $TMPDIR/retroboi.log)\n\
     Arguments:\n\
       ROMDIR                Directory holding one subdirectory per system\n"
}

fn main() -> Result<(), Box<dyn std::error::Error>>
{
  use std::env;
  trace::install_panic_hook();

  // Minimal argument parsing (avoid external deps)
  let mut args = env::args().skip(1);
  let mut rom_dir: Option<PathBuf> = None;
  let mut trace_file: Option<PathBuf> = None;
  let mut trace_flag = false;
  while let Some(a) = args.next()
  {
    match a.as_str()
    {
      "-h" | "--help" =>
      {
        println!("{}", usage());
        return Ok(());
      }
      "-V" | "--version" =>
      {
        print_version();
        return Ok(());
      }
      s if s == "--trace" || s.starts_with("--trace=") =>
      {
        trace_flag = true;
        if let Some((_, file)) = s.split_once('=')
          && !file.is_empty()
        {
          trace_file = Some(PathBuf::from(file));
        }
      }
      "--config-dir" =>
      {
        if let Some(dir) = args.next()
        {
          unsafe { env::set_var("RETROBOI_CONFIG_DIR", &dir) };
        }
        else
        {
          eprintln!("retroboi: --config-dir requires a DIR argument");
          eprintln!("{}", usage());
          std::process::exit(2);
        }
      }
      s if s.starts_with("--config-dir=") =>
      {
        if let Some((_, dir)) = s.split_once('=')
        {
          unsafe { env::set_var("RETROBOI_CONFIG_DIR", dir) };
        }
      }
      "--" =>
      {
        rom_dir = args.next().map(PathBuf::from);
        break;
      }
      s if s.starts_with('-') =>
      {
        eprintln!("retroboi: unknown option: {}", s);
        eprintln!("{}", usage());
        std::process::exit(2);
      }
      other =>
      {
        if rom_dir.is_none()
        {
          rom_dir = Some(PathBuf::from(other));
        }
      }
    }
  }

  // Logging is optional; an unopenable file just leaves it off
  match (trace_flag, trace_file)
  {
    (_, Some(file)) =>
    {
      trace::init(&file);
    }
    (true, None) =>
    {
      trace::init(&trace::default_path());
    }
    (false, None) =>
    {
      trace::init_from_env();
    }
  }

  trace::log("[main] starting retroboi");
  let mut app = match App::new(rom_dir.as_deref())
  {
    Ok(app) => app,
    Err(e) =>
    {
      trace::log(format!("[error] startup: {e}"));
      eprintln!("retroboi: {}", e);
      std::process::exit(1);
    }
  };
  app.set_runner(Box::new(SuspendingRunner::new(ShellRunner)));
  if let Err(e) = runtime::run_app(&mut app)
  {
    trace::log(format!("[error] runtime::run_app: {e}"));
    return Err(e);
  }
  trace::log("[main] clean exit");
  println!("Goodbye!");
  Ok(())
}
