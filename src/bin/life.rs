use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use life_engine::{
    EngineConfig, LifeEngine, Pattern, Playback, PlaybackConfig, Renderer, SeedSource,
    TextRenderer,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "life", version, about = "Run Conway's Game of Life and print a generation")]
struct Cli {
    /// Generation to show (or the last one to animate).
    #[arg(short, long, default_value_t = 1000, allow_negative_numbers = true)]
    generation: i64,

    /// Rows of a random seed grid (requires --cols).
    #[arg(long, requires = "cols", allow_negative_numbers = true)]
    rows: Option<i64>,

    /// Columns of a random seed grid (requires --rows).
    #[arg(long, requires = "rows", allow_negative_numbers = true)]
    cols: Option<i64>,

    /// RNG seed for a random grid (from --rows/--cols or a random --config).
    #[arg(long, conflicts_with = "pattern")]
    seed: Option<u64>,

    /// Start from a named pattern (blinker, block, beehive, toad, beacon, glider).
    #[arg(long, conflicts_with = "config")]
    pattern: Option<Pattern>,

    /// Load the engine configuration from a JSON file.
    #[arg(long, conflicts_with_all = ["rows", "cols"])]
    config: Option<PathBuf>,

    /// Animate every generation up to --generation instead of printing one.
    #[arg(long)]
    animate: bool,

    /// Delay between animation frames, in milliseconds.
    #[arg(long, default_value_t = 200)]
    delay_ms: u64,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = engine_config(&cli)?;
    let mut engine = LifeEngine::with_config(&config).context("invalid seed configuration")?;
    if let Some(seed) = engine.rng_seed() {
        info!(seed, "random seed grid");
    }

    let renderer = TextRenderer::new().with_generation_header(true);
    if cli.animate {
        let end = usize::try_from(cli.generation)
            .with_context(|| format!("cannot animate up to generation {}", cli.generation))?;
        let playback = Playback::new(
            PlaybackConfig::default()
                .with_range(0, end)
                .with_frame_delay(Duration::from_millis(cli.delay_ms)),
        );
        playback.run(&mut engine, &renderer, &mut io::stdout().lock())?;
    } else {
        let resolved = engine.resolve(cli.generation)?;
        print!("{}", renderer.render(resolved.generation, &resolved.grid));
        if resolved.is_truncated() {
            println!("(stable since generation {})", resolved.generation);
        }
    }

    let stats = engine.stats();
    info!(
        computed = stats.generations_computed,
        stable = engine.is_stable(),
        "done"
    );
    Ok(())
}

fn engine_config(cli: &Cli) -> Result<EngineConfig> {
    let config = match (&cli.config, cli.pattern, cli.rows, cli.cols) {
        (Some(path), ..) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        (None, Some(pattern), rows, cols) => {
            EngineConfig::pattern(pattern, rows.unwrap_or(8), cols.unwrap_or(8))
        }
        (None, None, Some(rows), Some(cols)) => EngineConfig::random(rows, cols),
        _ => EngineConfig::builtin(),
    };

    match cli.seed {
        Some(seed) if matches!(config.seed, SeedSource::Random { .. }) => {
            Ok(config.with_rng_seed(seed))
        }
        Some(_) => bail!("--seed only applies to a random grid"),
        None => Ok(config),
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}
