//! Replays a JSON event script and prints the resulting frames.
//!
//! Usage: `keyboard-handoff-replay <script.json>`

use anyhow::{Context, Result, bail};
use keyboard_handoff::{logging, replay};

fn main() -> Result<()> {
    logging::init();

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: keyboard-handoff-replay <script.json>");
    };

    let json = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let frames = replay::replay_json(&json).with_context(|| format!("replaying {path}"))?;
    tracing::info!(frames = frames.len(), "Replayed {}", path);

    println!("{}", serde_json::to_string_pretty(&frames)?);
    Ok(())
}
