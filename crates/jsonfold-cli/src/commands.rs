use crate::args::Cli;
use crate::config::Config;
use anyhow::{ensure, Context, Result};
use is_terminal::IsTerminal;
use jsonfold_engine::{render_page, RenderOptions};
use jsonfold_types::JsonValue;
use owo_colors::OwoColorize;
use std::time::Instant;

pub fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::default(),
    };

    let open_levels = cli.open_levels.unwrap_or(config.default_open_levels);
    ensure!(open_levels >= 1, "--open-levels must be at least 1");

    let content = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let parsed: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", cli.input.display()))?;
    let value = JsonValue::from(parsed);

    let options = RenderOptions {
        default_open_levels: open_levels,
    };

    let start = Instant::now();
    let html = render_page(&value, &options);
    let elapsed = start.elapsed();

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension("html"));
    std::fs::write(&output, html)
        .with_context(|| format!("failed to write {}", output.display()))?;

    let message = format!(
        "Wrote {} (render time: {}ms)",
        output.display(),
        elapsed.as_millis()
    );
    if std::io::stdout().is_terminal() {
        println!("{}", message.green());
    } else {
        println!("{}", message);
    }

    Ok(())
}
