use am_shell::widgets::boot::{BootEvent, BootSequence};
use am_shell::{CommandOutcome, DesktopApp, ShellConfig};
use anyhow::Result;
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    // Config comes first so its log level can seed the logger
    let (config, config_error) = match ShellConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (ShellConfig::default(), Some(e)),
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level.as_str())).init();
    if let Some(e) = config_error {
        log::warn!("Using default config: {}", e);
    }

    ctrlc::set_handler(|| {
        log::info!("Interrupted, shutting down");
        std::process::exit(0);
    })?;

    log::info!("Starting AM desktop");
    let app = DesktopApp::new(config);

    if app.needs_boot() {
        run_boot(&app);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        writeln!(stdout, "{}", app.render())?;
        write!(stdout, "> ")?;
        stdout.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        match app.execute(&line) {
            CommandOutcome::Continue(Some(message)) => writeln!(stdout, "{}\n", message)?,
            CommandOutcome::Continue(None) => {}
            CommandOutcome::Quit => break,
        }
    }

    log::info!("Goodbye");
    Ok(())
}

fn run_boot(app: &DesktopApp) {
    let boot = app.start_boot();
    for event in boot.events().iter() {
        if let Some(text) = BootSequence::render(&event) {
            println!("{}", text);
        }
        if event == BootEvent::Complete {
            break;
        }
    }
}
