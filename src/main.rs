//! draftboard - Timed Draft Pick Reveal Board
//!
//! A terminal draft board that reveals picks one at a time on a timer.

use anyhow::Result;
use clap::{Arg, Command};
use std::path::PathBuf;

use draftboard::ui::TerminalUI;
use draftboard::{Application, BoardConfig};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let matches = Command::new("draftboard")
        .version(draftboard::VERSION)
        .about("A terminal draft board that reveals picks on a timer")
        .long_about(
            "draftboard renders an ordered pick list into a row of board cells, \
             revealing one pick every few seconds with a position highlight and \
             team logo reference, then stops once the board is complete.",
        )
        .arg(
            Arg::new("board")
                .help("Path to a TOML board file (built-in round 1 board if omitted)")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("interval-ms")
                .long("interval-ms")
                .value_name("MILLIS")
                .help("Delay between reveals, overriding the board file")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("logo-base")
                .long("logo-base")
                .value_name("PATH")
                .help("Base path for team logo assets, overriding the board file"),
        )
        .get_matches();

    let mut config = match matches.get_one::<String>("board") {
        Some(path) => {
            let board_path = PathBuf::from(path);
            if !board_path.exists() {
                anyhow::bail!("Board file does not exist: {}", board_path.display());
            }
            if !board_path.is_file() {
                anyhow::bail!("Path is not a regular file: {}", board_path.display());
            }
            BoardConfig::load(&board_path)?
        }
        None => BoardConfig::default(),
    };

    if let Some(interval_ms) = matches.get_one::<u64>("interval-ms") {
        config.interval_ms = *interval_ms;
    }
    if let Some(logo_base) = matches.get_one::<String>("logo-base") {
        config.logo_base = logo_base.clone();
    }

    let ui_renderer = Box::new(TerminalUI::new(config.round)?);
    let mut app = Application::new(config, ui_renderer);

    app.run().await?;

    Ok(())
}
