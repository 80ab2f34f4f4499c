use anyhow::{Context, anyhow, bail};
use tracing::debug;

use spanner_ids::{IdGenerator, Policy, config::Config, logs};

const USAGE: &str = "usage: spanner-ids [--config <path>] <instance|database> <base>...";

struct Args {
    config_path: Option<String>,
    policy: Policy,
    bases: Vec<String>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Args> {
    let mut config_path = None;
    let mut positional = Vec::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a path\n{}", USAGE))?;
                config_path = Some(path);
            }
            "--help" | "-h" => bail!("{}", USAGE),
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let policy = positional
        .next()
        .ok_or_else(|| anyhow!("resource kind not provided\n{}", USAGE))?
        .parse::<Policy>()?;

    let bases: Vec<String> = positional.collect();
    if bases.is_empty() {
        bail!("base name not provided\n{}", USAGE);
    }

    Ok(Args {
        config_path,
        policy,
        bases,
    })
}

fn main() -> anyhow::Result<()> {
    logs::init()?;

    let args = parse_args(std::env::args().skip(1))?;

    let config = match &args.config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    debug!("config: {:?}", config);

    let generator = IdGenerator::from_config(config)?;
    for base in &args.bases {
        let id = generator
            .generate(args.policy, base)
            .with_context(|| format!("failed to generate {} id", args.policy))?;
        println!("{}", id);
    }

    Ok(())
}
