//! Movable Ball
//!
//! Steer the ball with W/A/S/D.
//!
//! Run with: cargo run -p easel_demo --bin movable_ball

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting movable ball");
    easel_app::start_graphics(easel_demo::config())?;
    Ok(())
}
