use importy::{
    cli::{Args, Command},
    ImportyError,
};
use std::process;

fn main() {
    let args = Args::parse_args();
    let command = Command::from_args(args);

    process::exit(run_command(command));
}

/// Run the command and turn its outcome into an exit code
fn run_command(command: Command) -> i32 {
    match command.execute() {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{}: {}", err.severity(), err.user_message());

            if let Some(suggestion) = suggestion(&err) {
                eprintln!("Suggestion: {}", suggestion);
            }

            importy::cli::commands::exit_code(err.severity())
        }
    }
}

fn suggestion(err: &ImportyError) -> Option<&'static str> {
    match err {
        ImportyError::InvalidPath { .. } | ImportyError::NotADirectory { .. } => {
            Some("Pass the directory to scan with --dir")
        }
        ImportyError::Config { .. } => Some("Run with --help to see the available options"),
        ImportyError::ConfigNotFound { .. } => {
            Some("Create a .importy.toml with --init or point --config at an existing file")
        }
        ImportyError::ConfigParse { .. } => Some("Check the configuration file for TOML syntax errors"),
        _ => None,
    }
}
