//! The `rmenu` command: reads a menu description, shows it and prints the
//! selected entry.
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rmenu::{Settings, Status, Style};

/// Show a cascading popup menu and print the selected entry
#[derive(Parser, Debug)]
#[command(name = "rmenu")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Menu description to read instead of the standard input
    file: Option<PathBuf>,

    /// Font of the labels, as "<family> <points>"
    #[arg(short, long, default_value = "Sans 12")]
    font: String,

    /// Integer scale to draw at, instead of the display's
    #[arg(short, long)]
    scale: Option<u32>,

    /// PNG image stretched over every item
    #[arg(short, long)]
    texture: Option<PathBuf>,

    /// Draw a border around every item
    #[arg(short, long)]
    border: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(cli) {
        Ok(Status::Selected(selection)) => {
            let mut stdout = io::stdout().lock();

            if let Err(error) = writeln!(stdout, "{selection}").and_then(|()| stdout.flush()) {
                log::error!("Failed to print the selection: {error}");
                return ExitCode::FAILURE;
            }

            ExitCode::SUCCESS
        }
        Ok(Status::Running | Status::Dismissed) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> rmenu::Result {
    let input = rmenu::read(cli.file.as_deref())?;

    let style = Style::default().with_border(cli.border);
    let settings = Settings {
        font: rmenu::renderer::Font::parse(&cli.font),
        scale: cli.scale,
        texture: cli.texture,
        ..Settings::default()
    };

    rmenu::run(&input, style, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_arguments() {
        let cli = Cli::try_parse_from(["rmenu", "-vv", "--border", "--scale", "2", "menu.txt"])
            .unwrap();

        assert_eq!(cli.verbose, 2);
        assert!(cli.border);
        assert_eq!(cli.scale, Some(2));
        assert_eq!(cli.file, Some(PathBuf::from("menu.txt")));
        assert_eq!(cli.font, "Sans 12");
    }
}
