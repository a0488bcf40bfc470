//! Breakout session runner
//!
//! Replays a scripted session against the headless scene and prints the
//! outcome. The interactive game runs inside a host framework that
//! implements `breakout::Scene`.
//!
//! Usage:
//!   breakout [--script session.json] [--settings settings.json] [--json]

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs;
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;

    use breakout::script::{self, ScriptEvent};
    use breakout::{GameController, HeadlessScene, Settings};

    #[derive(Parser)]
    #[command(name = "breakout")]
    #[command(about = "Replay a Breakout session against a headless scene")]
    struct Args {
        /// JSON session script (built-in demo when omitted)
        #[arg(long)]
        script: Option<PathBuf>,
        /// JSON settings file
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Playfield width
        #[arg(long, default_value_t = 750.0)]
        width: f32,
        /// Playfield height
        #[arg(long, default_value_t = 1334.0)]
        height: f32,
        /// Print the session report as JSON
        #[arg(long)]
        json: bool,
    }

    pub fn run() -> Result<()> {
        let args = Args::parse();

        let settings = match &args.settings {
            Some(path) => Settings::load(path),
            None => Settings::default(),
        };

        let scene = HeadlessScene::new(args.width, args.height);
        let mut controller =
            GameController::new(scene, settings).context("cannot attach controller")?;

        let events: Vec<ScriptEvent> = match &args.script {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                script::parse(&json).with_context(|| format!("failed to parse {}", path.display()))?
            }
            None => {
                log::info!("No script given, running built-in demo");
                script::demo(controller.total_bricks())
            }
        };

        let report = script::run(&mut controller, &events).context("session aborted")?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("=== SESSION ===");
            println!("  Steps:     {}", report.steps);
            println!("  Events:    {}", report.events.len());
            println!("  Phase:     {:?}", report.phase);
            println!("  Score:     {}", report.score);
            println!("  Lives:     {}", report.lives);
            println!("  Bricks:    {}", report.bricks_remaining);
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Breakout session runner starting...");
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web host drives `GameController` directly
}
