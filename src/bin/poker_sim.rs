//! Симулятор: гоняет N раздач с заданным составом ботов и печатает
//! статистику по местам.

use anyhow::{Context, Error};
use holdem_engine::sim::{run_hands, SimulationConfig};
use log::info;
use pico_args::Arguments;

const HELP: &str = "\
Run a batch of hold'em hands between bots and report per-seat results

USAGE:
  poker_sim [OPTIONS]

OPTIONS:
  --config     PATH        JSON simulation config   [default: built-in 4x RandomBot + EasyBot]
  --hands      N           Number of hands to play  [default: from config]
  --seed       N           Base RNG seed            [default: from config]

FLAGS:
  --json                   Print the report as JSON
  -h, --help               Print help information
";

struct Args {
    config: Option<String>,
    hands: Option<u64>,
    seed: Option<u64>,
    json: bool,
}

fn main() -> Result<(), Error> {
    let mut pargs = Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let args = Args {
        config: pargs.opt_value_from_str("--config")?,
        hands: pargs.opt_value_from_str("--hands")?,
        seed: pargs.opt_value_from_str("--seed")?,
        json: pargs.contains("--json"),
    };

    let rest = pargs.finish();
    if !rest.is_empty() {
        anyhow::bail!("unknown arguments: {rest:?}");
    }

    env_logger::builder().format_target(false).init();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_json_file(path)
            .with_context(|| format!("loading config {path}"))?,
        None => SimulationConfig::default(),
    };
    if let Some(hands) = args.hands {
        config.hands = hands;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    info!(
        "poker_sim: {} hands, seed {}, {} bots",
        config.hands,
        config.seed,
        config.bots.len()
    );

    let report = run_hands(&config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}
