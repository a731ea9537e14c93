use broadside::{init_logging, simulate, GameConfig};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if !(2..=3).contains(&args.len()) {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = match args.get(2) {
        Some(g) => g.parse()?,
        None => 100,
    };

    let summary = simulate(&GameConfig::default(), games, seed)?;
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
