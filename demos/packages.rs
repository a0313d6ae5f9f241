//! Packages Example
//!
//! Packages a discount from a fixture set and prints the resulting table.
//!
//! Use `-f` to load a fixture set by name
//! Use `-d` to pick the discount key within the set
//! Use `-p` to enable performance tweaks (per-line packaging for unrestricted discounts)

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use discount_packager::{
    config::PackagingConfig, fixtures::Fixture, promotions::pipeline::package_discount,
    report::PackageReport,
};

/// Arguments for the packages example
#[derive(Debug, Parser)]
struct PackagesArgs {
    /// Fixture set to load the cart & discounts from
    #[clap(short, long, default_value = "grocery")]
    fixture: String,

    /// Discount key within the fixture set
    #[clap(short, long, default_value = "everything")]
    discount: String,

    /// Enable performance tweaks
    #[clap(short, long)]
    performance_tweaks: bool,

    /// Optional YAML config file; overrides `--performance-tweaks`
    #[clap(short, long)]
    config: Option<String>,
}

/// Packages Example
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = PackagesArgs::parse();

    let config = match args.config.as_deref() {
        Some(path) => PackagingConfig::from_file(path)?,
        None => PackagingConfig {
            performance_tweaks: args.performance_tweaks,
        },
    };

    let fixture = Fixture::from_set(&args.fixture)?;

    let packages = package_discount(
        fixture.discount(&args.discount)?,
        fixture.cart()?,
        &fixture.context()?,
        config,
    )?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    PackageReport::new(&packages).write_to(&mut handle)?;

    Ok(())
}
