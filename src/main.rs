use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use log::{error, info};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use mmpsheet::Worksheet;

#[derive(Parser)]
#[command(
    name = "mmpsheet",
    version,
    about = "Reads a MMP proof worksheet and prints it as JSON"
)]
struct Cli {
    /// MMP file to read, `-` for stdin
    input: PathBuf,
    /// Print the worksheet on a single line
    #[arg(long)]
    compact: bool,
    /// One of off, error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn read_input(input: &Path) -> io::Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(input)
    }
}

fn main() {
    let cli = Cli::parse();
    let _ = TermLogger::init(
        cli.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let text = match read_input(&cli.input) {
        Ok(text) => text,
        Err(e) => {
            error!("cannot read {}: {}", cli.input.display(), e);
            eprintln!("cannot read {}: {}", cli.input.display(), e);
            process::exit(1);
        }
    };
    info!("read {} bytes from {}", text.len(), cli.input.display());

    let worksheet = Worksheet::from_mmp(&text);
    let json = if cli.compact {
        serde_json::to_string(&worksheet)
    } else {
        serde_json::to_string_pretty(&worksheet)
    };
    match json {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("cannot serialize worksheet: {}", e);
            process::exit(1);
        }
    }
}
