use std::process::exit;

use parish_rolodex::prelude::run_app;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run_app() {
        eprintln!("Error: {}", err);
        exit(1);
    }
}
