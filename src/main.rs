use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use listree::{list, tree, ConvertConfig, Converter, Strategy};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "listree", about = "Build a height-balanced BST from a sorted list")]
struct Cli {
    /// Values in list order (read from --input or stdin when omitted).
    #[arg(allow_negative_numbers = true)]
    values: Vec<i32>,
    /// File with whitespace- or comma-separated values.
    #[arg(long, conflicts_with = "values")]
    input: Option<PathBuf>,
    /// Construction strategy.
    #[arg(long, value_enum, default_value_t = StrategyArg::Flatten)]
    strategy: StrategyArg,
    /// Reject input that is not sorted in non-decreasing order.
    #[arg(long)]
    check_sorted: bool,
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Compact)]
    format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    Flatten,
    Streaming,
    TwoPointer,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Flatten => Strategy::Flatten,
            StrategyArg::Streaming => Strategy::Streaming,
            StrategyArg::TwoPointer => Strategy::TwoPointer,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    /// `v(left,right)` with `-` for absent children.
    Compact,
    /// One line per depth.
    Levels,
    /// In-order traversal.
    Inorder,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let values = load_values(&cli)?;

    let config = ConvertConfig::new()
        .with_strategy(cli.strategy.into())
        .with_sorted_check(cli.check_sorted);
    let head = list::from_values(values);
    let conversion = Converter::new(config)
        .run(head.as_deref())
        .context("conversion failed")?;

    let root = conversion.root.as_deref();
    match cli.format {
        Format::Compact => match root {
            Some(node) => println!("{}", node),
            None => println!("-"),
        },
        Format::Levels => println!("{}", tree::render_levels(root)),
        Format::Inorder => println!(
            "{}",
            tree::inorder(root)
                .iter()
                .map(i32::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        ),
    }

    eprintln!(
        "nodes={}\theight={}\tbound={}",
        conversion.len,
        conversion.height,
        conversion.height_bound()
    );

    Ok(())
}

fn load_values(cli: &Cli) -> Result<Vec<i32>> {
    if !cli.values.is_empty() {
        return Ok(cli.values.clone());
    }

    let text = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read values from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read values from stdin")?;
            buf
        }
    };

    list::parse_values(&text).context("failed to parse values")
}
