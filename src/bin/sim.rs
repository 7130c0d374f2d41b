#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    broadside::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [seed]", args[0]);
        std::process::exit(1);
    }
    let seed = args.get(1).map(|s| s.parse::<u64>()).transpose()?;

    let summary = broadside::sim::simulate(seed).map_err(|e| anyhow::anyhow!(e))?;
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
