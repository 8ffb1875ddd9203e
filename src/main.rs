//! Reference benchmark run: two random 500×500 `f64` matrices, three strategies.

use matbench::{BenchConfig, Matrix, benchmark};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let config = BenchConfig::default();
    info!(size = config.size, min = config.min, max = config.max, "building inputs");

    let mut a = Matrix::<f64>::new(config.size, config.size);
    let mut b = Matrix::<f64>::new(config.size, config.size);
    a.randomize(config.min, config.max)?;
    b.randomize(config.min, config.max)?;

    info!(
        threads = matbench::threaded::available_parallelism().get(),
        "running benchmark"
    );
    benchmark(&a, &b)?;

    Ok(())
}
