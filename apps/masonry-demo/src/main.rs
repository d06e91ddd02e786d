use anyhow::{Context, Result};
use masonry_demo::{
    describe, picker_line, render_scene, sample_gallery, DemoArgs, SimulatedLoader,
};
use masonry_ui::ContentRegistry;
use std::time::Duration;

const SETTLE_TIMEOUT: Duration = Duration::from_secs(10);

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = DemoArgs::parse(std::env::args().skip(1))?;
    let images = sample_gallery();
    let loader = SimulatedLoader::new(args.latency).failing(args.fail.iter().copied());
    let mut registry = ContentRegistry::new(loader);

    println!("=== Masonry Gallery ===");
    println!("{}", picker_line(args.columns));
    println!();

    let first = render_scene(&images, &args, &mut registry).context("laying out the gallery")?;
    println!("First frame:");
    for line in describe(&images, &first) {
        println!("{line}");
    }
    println!();

    if !registry.wait_settled(SETTLE_TIMEOUT) {
        log::warn!(
            "{} images still loading after {SETTLE_TIMEOUT:?}",
            registry.pending_count()
        );
    }

    let settled = render_scene(&images, &args, &mut registry).context("laying out the gallery")?;
    println!("Settled:");
    for line in describe(&images, &settled) {
        println!("{line}");
    }
    Ok(())
}
