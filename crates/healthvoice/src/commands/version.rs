pub fn run() -> anyhow::Result<()> {
    println!("healthvoice {}", env!("CARGO_PKG_VERSION"));
    println!("Rule-based symptom, mood and medication extraction from voice notes");
    Ok(())
}
