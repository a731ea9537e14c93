use broadside::{
    init_logging, simulate, ui, AutomaticPlayer, Board, Dimensions, FleetSpec, Game, GameConfig,
    GameStatus, ManualPlayer, Player, BOARD_HEIGHT, BOARD_WIDTH,
};

use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct BoardArgs {
    #[arg(long, default_value_t = BOARD_WIDTH)]
    width: usize,
    #[arg(long, default_value_t = BOARD_HEIGHT)]
    height: usize,
    #[arg(
        long,
        default_value_t = FleetSpec::default(),
        help = "Ships as length:count pairs (e.g., 1:1,2:1,5:2)"
    )]
    fleet: FleetSpec,
}

impl BoardArgs {
    fn config(&self) -> GameConfig {
        GameConfig {
            dimensions: Dimensions::new(self.width, self.height),
            fleet: self.fleet.clone(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the automatic player in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value = "You")]
        name: String,
        #[command(flatten)]
        board: BoardArgs,
    },
    /// Pit the automatic player against the random player many times.
    Simulate {
        #[arg(long, default_value_t = 100)]
        games: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, help = "Print the summary as JSON")]
        json: bool,
        #[command(flatten)]
        board: BoardArgs,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, name, board } => {
            let mut rng = if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            play(&mut rng, name, &board.config())?;
        }
        Commands::Simulate {
            games,
            seed,
            json,
            board,
        } => {
            let summary = simulate(&board.config(), games, seed)?;
            if json {
                println!("{}", serde_json::to_string(&summary)?);
            } else {
                println!(
                    "Automatic player won {} / {} games ({:.1}%), {:.1} turns per game on average.",
                    summary.automatic_wins,
                    summary.games,
                    summary.automatic_win_rate() * 100.0,
                    summary.average_turns
                );
            }
        }
    }
    Ok(())
}

fn play(rng: &mut SmallRng, name: String, config: &GameConfig) -> anyhow::Result<()> {
    let human = ManualPlayer::stdio(name, Board::from_config(rng, config)?);
    let bot = AutomaticPlayer::new("Computer", Board::from_config(rng, config)?);

    println!("Your fleet:");
    print!("{}", ui::render_board(human.board(), true));

    let mut game = Game::new(Box::new(human), Box::new(bot));
    while game.status() == GameStatus::InProgress {
        let record = game.play_turn(rng)?;
        if record.attacker == 1 {
            let verdict = match (record.outcome.hit, record.outcome.sunk) {
                (true, true) => "and sank your ship",
                (true, false) => "and hit",
                (false, _) => "and missed",
            };
            println!(
                "{} fired at {} {}.",
                game.player(1).name(),
                record.target,
                verdict
            );
        }
    }

    println!("\nYour board:");
    print!("{}", ui::render_board(game.player(0).board(), true));
    println!("\nComputer's board:");
    print!("{}", ui::render_board(game.player(1).board(), true));
    if let Some(report) = game.report() {
        println!("\n{} won after {} turns.", report.winner_name, report.turns);
    }
    Ok(())
}
