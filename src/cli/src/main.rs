use std::{fmt::Write, path::PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};
use config::Config;
use env_logger::TimestampPrecision;
use log::{LevelFilter, info};
use owo_colors::{OwoColorize, Style};
use rubiks_core::{Color, Cube, Rotation};

mod config;

/// Shuffles, turns and prints a 3x3x3 Rubik's cube
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Read defaults from a TOML file
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Print plain letters instead of colored stickers
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// How the cube is held while printing and turning by pose.
#[derive(Args)]
struct Hold {
    /// The color of the face looking at the viewer
    #[arg(long)]
    front: Option<Color>,
    /// The color of the face on top; must be adjacent to the front
    #[arg(long)]
    top: Option<Color>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a solved cube
    Show {
        #[command(flatten)]
        hold: Hold,
    },
    /// Shuffle a cube with random quarter turns and print it
    Shuffle {
        #[command(flatten)]
        hold: Hold,
        /// How many quarter turns to apply
        #[arg(long, short = 'n')]
        count: Option<usize>,
        /// Seed the turns for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Turn one face, optionally after shuffling, and print the cube
    Turn {
        #[command(flatten)]
        hold: Hold,
        /// The center color of the face to turn
        #[arg(long)]
        face: Color,
        /// Either clockwise (cw) or anticlockwise (acw)
        #[arg(long, short = 'r', default_value = "clockwise")]
        rotation: Rotation,
        /// How many times to repeat the turn
        #[arg(long, default_value_t = 1)]
        times: usize,
        /// Shuffle this many times before turning
        #[arg(long)]
        shuffles: Option<usize>,
        /// Seed the shuffle
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .parse_default_env()
        .init();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let colored = config.color() && !cli.no_color;

    let cube = match cli.command {
        Commands::Show { hold } => hold_cube(&hold, &config, None)?,
        Commands::Shuffle { hold, count, seed } => {
            let mut cube = hold_cube(&hold, &config, seed)?;
            cube.shuffle(count.unwrap_or_else(|| config.shuffles()))?;
            cube
        }
        Commands::Turn {
            hold,
            face,
            rotation,
            times,
            shuffles,
            seed,
        } => {
            let mut cube = hold_cube(&hold, &config, seed)?;
            let shuffles = shuffles.unwrap_or(0);
            if shuffles > 0 {
                cube.shuffle(shuffles)?;
                info!("Shuffled the cube {shuffles} times before turning");
            }
            for _ in 0..times {
                cube.rotate(face, rotation)?;
            }
            cube
        }
    };

    let net = cube.net()?;
    let mut out = String::new();
    if colored {
        net.write_with(&mut out, |f, color| {
            write!(f, "{}", color.letter().style(sticker_style(color)))
        })?;
        if cube.is_sorted() {
            writeln!(out, "Cube is {}", "sorted".green())?;
        } else {
            writeln!(out, "Cube is {}", "not sorted".red())?;
        }
    } else {
        write!(out, "{cube}")?;
    }
    print!("{out}");

    Ok(())
}

fn hold_cube(hold: &Hold, config: &Config, seed: Option<u64>) -> color_eyre::Result<Cube> {
    let front = hold.front.unwrap_or_else(|| config.front());
    let cube = Cube::new(front, hold.top.or(config.top))?;
    Ok(match seed.or(config.seed) {
        Some(seed) => cube.with_seed(seed),
        None => cube,
    })
}

fn sticker_style(color: Color) -> Style {
    let style = Style::new().black().bold();
    match color {
        Color::Red => style.on_red(),
        Color::Green => style.on_green(),
        Color::Blue => style.on_blue(),
        Color::Yellow => style.on_yellow(),
        Color::Orange => style.on_truecolor(255, 140, 0),
        Color::White => style.on_white(),
    }
}
