mod cli;

use anyhow::Result;
use arena::{Game, HttpPlayers, Measurement, PlayerOptions, Trajectory};
use clap::Parser;
use cli::{Cli, Commands, PlayerArgs};
use common::{get_env_usize, ConfigLoader, FsExt};
use dotenv::dotenv;
use engine::Position;
use env_logger::Env;
use log::{error, info};
use serde::Serialize;

const CONFIG_SCOPE: &str = "player";

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut builder = tokio::runtime::Builder::new_multi_thread();

    builder.enable_all();

    if let Some(worker_threads) = get_env_usize("TOKIO_THREADS")? {
        builder.worker_threads(worker_threads);
    }

    info!("{:?}", builder);

    builder.build()?.block_on(async_main())
}

async fn async_main() -> Result<()> {
    let cli = Cli::parse();

    let res = run(&cli.command).await;

    if let Err(err) = &res {
        error!("{:?}", err);
    }

    res
}

async fn run(command: &Commands) -> Result<()> {
    match command {
        Commands::Trajectory(args) => {
            let players = players(&args.player)?;
            let positions: Vec<_> = args.fens.iter().map(|fen| Position::new(fen.as_str())).collect();

            let trace = Trajectory::new(players).executed(&positions, args.step).await?;

            print_json(&trace)
        }
        Commands::Game(args) => {
            let record = Game::new(players(&args.player)?).executed().await?;

            print_json(&record)
        }
        Commands::Measurement(args) => {
            let report = Measurement::new(players(&args.player)?)
                .executed(args.playtime)
                .await?;

            print_json(&report)
        }
    }
}

fn players(args: &PlayerArgs) -> Result<HttpPlayers> {
    let options = load_options(&args.config)?;

    info!("Environment at {}, white at {}, black at {}", options.env_url, args.white, args.black);

    HttpPlayers::from_urls(&options, &args.white, &args.black)
}

/// A missing config file is not an error; every key then comes from the environment or
/// its default.
fn load_options(config: &str) -> Result<PlayerOptions> {
    let config_path = config.relative_to_cwd()?;

    let config = if config_path.is_file() {
        ConfigLoader::new(config_path, CONFIG_SCOPE.to_string())?
    } else {
        info!("No config at {:?}, using defaults", config_path);
        ConfigLoader::without_file(CONFIG_SCOPE.to_string())?
    };

    config.load()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);

    Ok(())
}
