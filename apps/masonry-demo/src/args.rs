use anyhow::{anyhow, bail, Context, Result};
use masonry_ui::BalanceStrategy;
use std::time::Duration;

/// Command-line configuration of the demo.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoArgs {
    pub columns: usize,
    pub width: f32,
    pub spacing: f32,
    pub strategy: BalanceStrategy,
    /// Image ids whose simulated acquisition fails.
    pub fail: Vec<u32>,
    pub latency: Duration,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            columns: 2,
            width: 390.0,
            spacing: 12.0,
            strategy: BalanceStrategy::ItemCount,
            fail: Vec::new(),
            latency: Duration::from_millis(40),
        }
    }
}

pub const USAGE: &str = "usage: masonry-demo [--columns N] [--width W] [--spacing S] \
[--strategy count|height] [--fail ID]... [--latency MS]";

impl DemoArgs {
    /// Parses arguments, excluding the program name.
    ///
    /// Values are only checked for syntax; a column count or width the grid
    /// cannot lay out is reported by the layout pass.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            let mut value = || {
                args.next()
                    .ok_or_else(|| anyhow!("{flag} needs a value\n{USAGE}"))
            };
            match flag.as_str() {
                "--columns" => {
                    let raw = value()?;
                    parsed.columns = raw
                        .parse()
                        .with_context(|| format!("invalid column count {raw:?}"))?;
                }
                "--width" => {
                    let raw = value()?;
                    parsed.width = raw
                        .parse()
                        .with_context(|| format!("invalid width {raw:?}"))?;
                }
                "--spacing" => {
                    let raw = value()?;
                    parsed.spacing = raw
                        .parse()
                        .with_context(|| format!("invalid spacing {raw:?}"))?;
                }
                "--strategy" => {
                    parsed.strategy = match value()?.as_str() {
                        "count" => BalanceStrategy::ItemCount,
                        "height" => BalanceStrategy::DeclaredHeight,
                        other => bail!("unknown strategy {other:?}, expected count or height"),
                    };
                }
                "--fail" => {
                    let raw = value()?;
                    let id = raw
                        .parse()
                        .with_context(|| format!("invalid image id {raw:?}"))?;
                    parsed.fail.push(id);
                }
                "--latency" => {
                    let raw = value()?;
                    let millis = raw
                        .parse()
                        .with_context(|| format!("invalid latency {raw:?}"))?;
                    parsed.latency = Duration::from_millis(millis);
                }
                other => bail!("unexpected argument {other:?}\n{USAGE}"),
            }
        }
        Ok(parsed)
    }
}

#[cfg(test)]
#[path = "tests/args_tests.rs"]
mod tests;
