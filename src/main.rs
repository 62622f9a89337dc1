use anyhow::Result;
use todolist::config::{Command, Config, USAGE};
use todolist::logging;
use todolist::tasks::TaskList;
use todolist::tui::{App, AppState, TerminalError, TerminalUi};

fn main() -> Result<()> {
    let config = match Config::parse(std::env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::PrintHelp) => {
            println!("{USAGE}");
            return Ok(());
        }
        Ok(Command::PrintVersion) => {
            println!("todo {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Err(e) => {
            eprintln!("error: {e}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let _log_guard = logging::init(&config)?;

    let tasks: TaskList = config.initial_tasks.iter().map(String::as_str).collect();
    let mut state = AppState::new(tasks);
    state.show_help = config.show_help;

    // Initialize and run the app; the terminal is restored when the app is dropped
    let result = {
        let mut app = App::with_state(TerminalUi::new()?, state);
        app.run()
    };

    match result {
        Err(e) if matches!(e.downcast_ref::<TerminalError>(), Some(TerminalError::Interrupted)) => {
            tracing::info!("interrupted, exiting");
            Ok(())
        }
        other => other,
    }
}
