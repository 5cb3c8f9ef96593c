use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[clap(author, version)]
#[clap(name = "Trace Producing Player")]
#[clap(about = "Plays chess agents against each other through the environment service", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Trajectory(TrajectoryCommand),
    Game(GameCommand),
    Measurement(MeasurementCommand),
}

#[derive(Args)]
pub struct PlayerArgs {
    #[clap(short, long, default_value_t = String::from("player.conf"))]
    pub config: String,

    /// Base URL of the agent playing white.
    #[clap(short, long)]
    pub white: String,

    /// Base URL of the agent playing black.
    #[clap(short, long)]
    pub black: String,
}

#[derive(Args)]
#[clap(about = "Plays a bounded number of steps and prints both sides' traces", long_about = None)]
pub struct TrajectoryCommand {
    #[clap(flatten)]
    pub player: PlayerArgs,

    #[clap(short, long)]
    pub step: usize,

    /// Starting position; repeat for a batch. Defaults to the configured starting position.
    #[clap(short, long = "fen")]
    pub fens: Vec<String>,
}

#[derive(Args)]
#[clap(about = "Plays one game to its end and prints it with its result", long_about = None)]
pub struct GameCommand {
    #[clap(flatten)]
    pub player: PlayerArgs,
}

#[derive(Args)]
#[clap(about = "Plays a batch of games and prints each side's statistics", long_about = None)]
pub struct MeasurementCommand {
    #[clap(flatten)]
    pub player: PlayerArgs,

    #[clap(short, long)]
    pub playtime: usize,
}
