use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

use crate::app::App;

mod app;
mod chart;
mod cli;
mod dataset;
mod utils;

fn main() -> Result<()> {
    // Quiet by default so log lines don't trample the prompt; RUST_LOG overrides.
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let args = cli::get_args();
    App::new(args).run()
}
