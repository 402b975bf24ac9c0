use anyhow::{Context, Result};
use listree::{list, tree, ConvertConfig, Converter, Strategy};

fn main() -> Result<()> {
    let values = list::parse_values("-10, -3, 0, 5, 9, 12, 20")
        .context("demo values should parse")?;
    let head = list::from_values(values);

    let config = ConvertConfig::new()
        .with_strategy(Strategy::Flatten)
        .with_sorted_check(true);
    let conversion = Converter::new(config)
        .run(head.as_deref())
        .context("demo list should be sorted")?;

    let root = conversion.root.as_deref();
    if let Some(node) = root {
        println!("Compact: {}", node);
    }
    println!("Levels:\n{}", tree::render_levels(root));
    println!(
        "Height {} (bound {}), size {}",
        conversion.height,
        conversion.height_bound(),
        tree::size(root)
    );

    Ok(())
}
