fn main() -> anyhow::Result<()> {
    millwork_observability::init();

    let report = millwork_cli::run(std::env::args().nth(1), |key| std::env::var(key).ok())?;

    if !report.requirements.warnings.is_empty() {
        tracing::warn!(
            count = report.requirements.warnings.len(),
            "some snapshot records were skipped"
        );
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
