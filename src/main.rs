use std::env;

use startup_common::startup::ArgumentRegistry;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = ArgumentRegistry::new();
    args.add("port", 25565)
        .add("host", "0.0.0.0")
        .add("online-mode", true)
        .build(env::args().skip(1));

    for (key, argument) in &args {
        info!(key = key.as_str(), value = %argument.value(), set = argument.is_set(), "startup argument");
    }

    match args.get_as::<u16>("port") {
        Ok(port) => info!(port, "would bind here"),
        Err(error) => tracing::error!(%error, "unusable port argument"),
    }
}
