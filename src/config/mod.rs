use std::path::PathBuf;

/// Default `EnvFilter` directive once logging is switched on
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const USAGE: &str = "\
Usage: todo [OPTIONS] [TITLE]...

Interactive task list editor. Each TITLE is added as an initial task.

Options:
      --hide-help          Start with the instruction block hidden
      --log-dir <DIR>      Write a log file into DIR
      --log-level <FILTER> Log filter directive (default: info)
  -h, --help               Print this help
  -V, --version            Print version";

/// Errors from parsing the command line
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("option '{0}' requires a value")]
    MissingValue(String),
}

/// Runtime settings taken from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Show the instruction block on start
    pub show_help: bool,

    /// Directory for the log file; `None` with no level means logging is off
    pub log_dir: Option<PathBuf>,

    /// Filter directive; set only when given on the command line
    pub log_level: Option<String>,

    /// Titles to seed the list with, in order
    pub initial_tasks: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_help: true,
            log_dir: None,
            log_level: None,
            initial_tasks: vec![],
        }
    }
}

/// What `main` should do after parsing arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Config),
    PrintHelp,
    PrintVersion,
}

impl Config {
    /// Parse arguments, excluding the program name
    pub fn parse<I, S>(args: I) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter().map(Into::<String>::into);
        let mut positional_only = false;

        while let Some(arg) = args.next() {
            if positional_only {
                config.initial_tasks.push(arg);
                continue;
            }
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::PrintHelp),
                "-V" | "--version" => return Ok(Command::PrintVersion),
                "--hide-help" => config.show_help = false,
                "--log-dir" => {
                    let dir = args.next().ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    config.log_dir = Some(PathBuf::from(dir));
                }
                "--log-level" => {
                    let level = args.next().ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    config.log_level = Some(level);
                }
                "--" => positional_only = true,
                s if s.starts_with('-') && s.len() > 1 => {
                    return Err(ConfigError::UnknownOption(s.to_string()));
                }
                _ => config.initial_tasks.push(arg),
            }
        }

        Ok(Command::Run(config))
    }

    /// Logging is on when either log option was given
    pub fn logging_enabled(&self) -> bool {
        self.log_dir.is_some() || self.log_level.is_some()
    }

    pub fn log_filter(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Log directory, falling back to the platform data directory
    pub fn resolved_log_dir(&self) -> Option<PathBuf> {
        self.log_dir.clone().or_else(default_log_dir)
    }
}

/// `<data dir>/todolist/logs` for the current platform
pub fn default_log_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "todolist").map(|dirs| dirs.data_local_dir().join("logs"))
}
