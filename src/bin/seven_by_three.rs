//! Command-line demo of the three-digit display.
//!
//! Drives one display component through the mock buses and prints the
//! resulting digits as seven-segment art, or as JSON with `--json`.
//!
//! ```bash
//! cargo run --features cli -- 173
//! cargo run --features cli -- 42 --json
//! RUST_LOG=trace cargo run --features cli -- 255
//! ```

use anyhow::{anyhow, Context};
use log::info;

use seven_by_three::hal::{AsciiRenderer, MockInputs, MockOutputs};
use seven_by_three::traits::SegmentRenderer;
use seven_by_three::{DisplayConfig, SevenByThree};

/// Configures command-line interface using clap
fn get_cli_config<'a>() -> clap::ArgMatches<'a> {
    clap::App::new("seven-by-three")
        .version("0.1")
        .about("8-bit binary to three-digit seven-segment display")
        .arg(
            clap::Arg::with_name("VALUE")
                .help("Value to display (0-255)")
                .required(true)
                .index(1),
        )
        .arg(
            clap::Arg::with_name("json")
                .long("json")
                .help("Print digits and segment patterns as JSON"),
        )
        .get_matches()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = get_cli_config();
    let raw = matches
        .value_of("VALUE")
        .ok_or_else(|| anyhow!("missing VALUE"))?;
    let value: u8 = raw
        .parse()
        .with_context(|| format!("'{}' is not a value between 0 and 255", raw))?;

    let mut component = SevenByThree::new(DisplayConfig::default())?;
    let mut inputs = MockInputs::new();
    let mut outputs = MockOutputs::new();
    component.connect(&inputs)?;

    inputs.set_value(u64::from(value));
    let digits = component.step(&inputs, &mut outputs)?;
    info!("displaying {}", component.display().to_text());

    if matches.is_present("json") {
        let report = serde_json::json!({
            "value": value,
            "digits": digits,
            "frame": component.frame(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let mut renderer = AsciiRenderer::new();
        renderer.init()?;
        component.render(&mut renderer)?;
        println!("{}", renderer);
    }

    Ok(())
}
