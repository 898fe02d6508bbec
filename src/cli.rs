use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "memterm")]
#[command(about = "A terminal memory game: watch the sequence, echo it back")]
#[command(version)]
pub struct Args {
    /// Tick rate of the render loop, in frames per second
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// How long each move in the sequence is displayed, in milliseconds
    #[arg(long = "move-ms", default_value_t = 500, value_parser = clap::value_parser!(u64).range(50..=5000))]
    pub move_ms: u64,

    /// Seed for the move generator, for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,
}
