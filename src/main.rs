//! Terminal front end for tictactoe-pro.
//!
//! Reads one command per line from stdin and prints the board, status line
//! and toasts to stdout. Logs go to stderr, filtered by `RUST_LOG`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tictactoe_pro::render::{self, MarkTable, RESET_MESSAGE};
use tictactoe_pro::{
    DarkMode, EventLog, GameConfig, GameEngine, GameEvent, JsonFileStore, MemoryStore,
    PreferenceStore, Scoreboard,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "NxN tic-tac-toe for 2 to 4 players", long_about = None)]
struct Args {
    /// Board edge length (3, 5 or 7)
    #[arg(short, long, default_value_t = 3)]
    grid_size: usize,

    /// Number of players (2 to 4)
    #[arg(short, long, default_value_t = 2)]
    players: usize,

    /// JSON file that stores the theme choice
    #[arg(long)]
    prefs: Option<PathBuf>,

    /// Start in dark mode when no choice is stored
    #[arg(long)]
    prefer_dark: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Play(usize),
    Jump(usize),
    History,
    Reset,
    Config { grid_size: usize, players: usize },
    Theme,
    Stats,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            bail!("empty command");
        };
        let mut number = |what: &str| -> Result<usize> {
            let word = words.next().with_context(|| format!("missing {what}"))?;
            word.parse()
                .with_context(|| format!("{what} must be a number, got {word:?}"))
        };

        let command = match head {
            "play" | "p" => Command::Play(number("cell")?),
            "jump" | "j" => Command::Jump(number("history index")?),
            "history" | "h" => Command::History,
            "reset" | "r" => Command::Reset,
            "config" | "c" => {
                let grid_size = number("grid size")?;
                let players = number("player count")?;
                Command::Config { grid_size, players }
            }
            "theme" | "t" => Command::Theme,
            "stats" | "s" => Command::Stats,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => match other.parse() {
                Ok(cell) => Command::Play(cell),
                Err(_) => bail!("unknown command {other:?} (try \"help\")"),
            },
        };
        if let Some(extra) = words.next() {
            bail!("unexpected {extra:?} after {head:?}");
        }
        Ok(command)
    }
}

const HELP: &str = "\
commands:
  play <cell> | <cell>   mark a cell
  jump <index>           show a history position (0 = game start)
  history                list history positions
  reset                  start a new game
  config <N> <P>         new game on an NxN board with P players
  theme                  toggle dark mode
  stats                  show the session scoreboard
  quit                   leave";

struct Session {
    engine: GameEngine<(EventLog, Scoreboard)>,
    marks: MarkTable,
    theme: DarkMode<Box<dyn PreferenceStore>>,
}

impl Session {
    /// Run one command. Returns false when the session should end.
    fn handle(&mut self, command: Command, out: &mut impl Write) -> Result<bool> {
        match command {
            Command::Play(cell) => match self.engine.apply_move(cell) {
                Ok(_) => self.show_board(out)?,
                Err(err) => writeln!(out, "{err}")?,
            },
            Command::Jump(index) => match self.engine.jump_to_history(index) {
                Ok(()) => self.show_board(out)?,
                Err(err) => writeln!(out, "{err}")?,
            },
            Command::History => {
                for entry in render::history_entries(self.engine.state()) {
                    let marker = if entry.current { '>' } else { ' ' };
                    writeln!(out, "{marker} {:>3}  {}", entry.index, entry.label)?;
                }
            }
            Command::Reset => {
                self.engine.reset_game();
                self.show_board(out)?;
            }
            Command::Config { grid_size, players } => {
                match self.engine.reconfigure(grid_size, players) {
                    Ok(()) => self.show_board(out)?,
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            Command::Theme => match self.theme.toggle() {
                Ok(theme) => writeln!(out, "{}", theme.activation_message())?,
                Err(err) => {
                    warn!(%err, "could not store theme");
                    writeln!(out, "{err}")?;
                }
            },
            Command::Stats => self.show_stats(out)?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        self.show_toasts(out)?;
        Ok(true)
    }

    fn show_board(&self, out: &mut impl Write) -> Result<()> {
        let state = self.engine.state();
        writeln!(out, "{}", render::board_text(state, &self.marks))?;
        writeln!(out, "{}", render::status_line(state, &self.marks))?;
        Ok(())
    }

    fn show_toasts(&mut self, out: &mut impl Write) -> Result<()> {
        let (log, scoreboard) = self.engine.observer_mut();
        let events = log.drain();
        let milestone = scoreboard.take_milestone();

        for event in events {
            match event {
                GameEvent::Reset { .. } => writeln!(out, "* {RESET_MESSAGE}")?,
                GameEvent::GameEnded { result } => {
                    writeln!(out, "* {}", render::game_end_message(&result, &self.marks))?;
                }
            }
        }
        if let Some(milestone) = milestone {
            writeln!(out, "* {}", render::milestone_message(milestone))?;
        }
        Ok(())
    }

    fn show_stats(&self, out: &mut impl Write) -> Result<()> {
        let (_, scoreboard) = self.engine.observer();
        writeln!(out, "Games Played: {}", scoreboard.games_played)?;
        for (player, wins) in scoreboard.wins.iter() {
            writeln!(out, "{} Wins: {wins}", self.marks.symbol(player))?;
        }
        writeln!(out, "Draws: {}", scoreboard.draws)?;
        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = GameConfig::new(args.grid_size, args.players)?;

    let store: Box<dyn PreferenceStore> = match &args.prefs {
        Some(path) => Box::new(JsonFileStore::open_or_reset(path)?),
        None => Box::new(MemoryStore::new()),
    };

    let scoreboard = Scoreboard::new(config.player_count());
    let mut session = Session {
        engine: GameEngine::new(config, (EventLog::new(), scoreboard)),
        marks: MarkTable::default(),
        theme: DarkMode::load(store, args.prefer_dark),
    };
    info!(%config, theme = %session.theme.theme(), "session started");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "tictactoe-pro: {config}. Type \"help\" for commands.")?;
    session.show_board(&mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err:#}")?;
                continue;
            }
        };
        if !session.handle(command, &mut out)? {
            break;
        }
        out.flush()?;
    }
    Ok(())
}
