//! # Container Demo
//!
//! Drives a hydrogen-like gas container through the [`Container`] interface:
//!
//! - Prints the pressure change for a 100 K rise and a 100 K drop from 300 K.
//! - Tries to remove more gas than the container holds, which is rejected.
//! - Adds 500 kg of gas and prints the updated contents.
//!
//! Log output goes to stderr and is filtered with `RUST_LOG` (default `info`).
//!
//! ## Running the Example
//!
//! ```sh
//! cargo run --example container_demo
//! ```
//!
//! [`Container`]: gasbox_thermo::Container

use gasbox_examples::container_walkthrough;
use gasbox_thermo::{ContainerAdapter, ContainerConfig, ContainerError};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ContainerError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ContainerConfig::default();
    info!(?config, "creating container");
    let mut container = ContainerAdapter::from(config);

    for line in container_walkthrough(&mut container)? {
        println!("{line}");
    }

    Ok(())
}
