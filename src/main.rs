mod input;
mod ui;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use input::{map_key, TapInput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use skyflap::build_info;
use skyflap::core::constants::REALTIME_FRAME_MS;
use skyflap::core::{logging, paths};
use skyflap::sprites::SpriteSheet;
use skyflap::{GameConfig, GameError, GameSession, SessionEvent, Simulation};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use ui::Hud;

/// Options accepted on the command line.
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    seed: Option<u64>,
    config_path: Option<PathBuf>,
}

#[derive(Debug, PartialEq)]
enum CliCommand {
    Play(CliArgs),
    Version,
    Help,
}

fn parse_args(args: &[String]) -> Result<CliCommand, String> {
    let mut cli = CliArgs::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let value = args.get(i).ok_or("--seed requires a number")?;
                cli.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("--seed requires a number, got '{}'", value))?,
                );
            }
            "--config" => {
                i += 1;
                let value = args.get(i).ok_or("--config requires a path")?;
                cli.config_path = Some(PathBuf::from(value));
            }
            "--version" | "-v" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(CliCommand::Play(cli))
}

fn print_usage() {
    println!(
        "Skyflap - Flappy Bird in your terminal\n\
         \n\
         Usage: skyflap [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --seed N        RNG seed for pipe placement\n\
         \x20 --config PATH   Config file (default: ~/.skyflap/config.json)\n\
         \x20 --version, -v   Show version information\n\
         \x20 --help, -h      Show this help\n\
         \n\
         Set RUST_LOG=debug to log to ~/.skyflap/skyflap.log"
    );
}

fn load_config(cli: &CliArgs) -> Result<GameConfig, GameError> {
    match &cli.config_path {
        // An explicit path must exist
        Some(path) => GameConfig::load(path),
        None => GameConfig::load_or_default(&paths::config_path()?),
    }
}

fn main() -> Result<(), GameError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(CliCommand::Play(cli)) => cli,
        Ok(CliCommand::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Ok(CliCommand::Help) => {
            print_usage();
            return Ok(());
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'skyflap --help' for usage.");
            std::process::exit(1);
        }
    };

    match paths::log_path().map_err(GameError::from).and_then(|p| logging::init(&p)) {
        Ok(()) => {}
        Err(e) => eprintln!("Warning: file logging disabled: {}", e),
    }

    // Fail before touching the terminal
    let config = load_config(&cli)?;
    let sprites = SpriteSheet::load()?;
    let seed = cli.seed.or(config.seed).unwrap_or_else(rand::random);
    log::info!("starting {} with seed {}", build_info::version_line(), seed);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut sim = Simulation::new(GameSession::new(config));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, &mut sim, &sprites, &mut rng, seed);

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("{}", e);
    }
    result
}

fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    sim: &mut Simulation,
    sprites: &SpriteSheet,
    rng: &mut StdRng,
    seed: u64,
) -> Result<(), GameError> {
    let mut hud = Hud {
        best_score: 0,
        seed,
    };
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, sim.session(), sprites, &hud))?;

        if event::poll(Duration::from_millis(REALTIME_FRAME_MS))? {
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    TapInput::Tap => {
                        let events = sim.tap(rng);
                        record(&mut hud, &events);
                    }
                    TapInput::Quit => return Ok(()),
                    TapInput::Other => {}
                }
            }
        }

        let now = Instant::now();
        let events = sim.advance(now.duration_since(last_frame), rng);
        last_frame = now;
        record(&mut hud, &events);
    }
}

fn record(hud: &mut Hud, events: &[SessionEvent]) {
    for event in events {
        if let SessionEvent::Scored { score } = event {
            hud.best_score = hud.best_score.max(*score);
        }
    }
}
