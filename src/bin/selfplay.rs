//! Engine-vs-engine runner
//!
//! Usage: selfplay [games] [black] [white] [--size N] [--seed N] [--parallel]
//!
//! Player names are the menu names ("random ai", "basic ai", "static ai") or
//! their short forms ("random", "minimax", "alphabeta"). Stats go to stdout as JSON.

use anyhow::{bail, Context};
use othello_ai::logging;
use othello_ai::player::ai::AIConfig;
use othello_ai::player::PlayerKind;
use othello_ai::selfplay::{run_selfplay, SelfPlayConfig};
use std::env;

fn parse_args(args: &[String]) -> anyhow::Result<SelfPlayConfig> {
    let mut config = SelfPlayConfig {
        ai_config: AIConfig::get().clone(),
        ..SelfPlayConfig::default()
    };
    let mut positional = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--parallel" => config.parallel = true,
            "--size" => {
                let value = iter.next().context("--size needs a value")?;
                config.board_size = value.parse().context("invalid --size")?;
            }
            "--seed" => {
                let value = iter.next().context("--seed needs a value")?;
                config.seed = Some(value.parse().context("invalid --seed")?);
            }
            flag if flag.starts_with("--") => bail!("unknown option {}", flag),
            _ => positional.push(arg.as_str()),
        }
    }

    if let Some(n) = positional.first() {
        config.num_games = n.parse().context("invalid game count")?;
    }
    if let Some(name) = positional.get(1) {
        config.black = name.parse()?;
    }
    if let Some(name) = positional.get(2) {
        config.white = name.parse()?;
    }
    for kind in [config.black, config.white] {
        if kind == PlayerKind::External {
            bail!("console players cannot take part in self-play");
        }
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let args: Vec<String> = env::args().skip(1).collect();
    let config = parse_args(&args)?;

    tracing::info!(
        games = config.num_games,
        size = config.board_size,
        black = %config.black,
        white = %config.white,
        parallel = config.parallel,
        "starting self-play"
    );
    let stats = run_selfplay(&config)?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
