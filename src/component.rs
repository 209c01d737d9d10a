//! The complete display component, as a host simulator drives it.
//!
//! [`SevenByThree`] pairs a [`BcdEncoder`] (the evaluation node) with a
//! [`DisplayState`] (the renderer side) and maps the host callbacks onto
//! them. It holds no logic of its own.
//!
//! | Host callback | Method |
//! |---------------|--------|
//! | inputs wired | [`connect`](SevenByThree::connect) |
//! | input changed | [`inputs_changed`](SevenByThree::inputs_changed) |
//! | write outputs | [`write_outputs`](SevenByThree::write_outputs) |
//! | outputs observable | [`observe`](SevenByThree::observe) |
//! | repaint | [`render`](SevenByThree::render) |
//!
//! # Example
//!
//! ```rust
//! use seven_by_three::{DisplayConfig, SevenByThree};
//! use seven_by_three::hal::{MockInputs, MockOutputs};
//! use seven_by_three::pins::DigitPosition;
//!
//! let mut component = SevenByThree::new(DisplayConfig::default()).unwrap();
//! let mut inputs = MockInputs::new();
//! let mut outputs = MockOutputs::new();
//! component.connect(&inputs).unwrap();
//!
//! // Before any evaluation the display reads "000"
//! assert_eq!(component.display().to_text().as_str(), "000");
//!
//! inputs.set_value(255);
//! component.step(&inputs, &mut outputs).unwrap();
//! assert_eq!(component.display().digit(DigitPosition::Hundreds), 2);
//! ```

use log::debug;

use crate::bcd::BcdDigits;
use crate::config::DisplayConfig;
use crate::display::{DisplayFrame, DisplayState};
use crate::encoder::BcdEncoder;
use crate::error::{Error, Result};
use crate::traits::{InputBus, OutputBus, SegmentRenderer};

/// An 8-bit decimal display: encoder plus render state.
#[derive(Clone, Debug)]
pub struct SevenByThree {
    config: DisplayConfig,
    encoder: BcdEncoder,
    display: DisplayState,
}

impl SevenByThree {
    /// Create a component from its configuration.
    pub fn new(config: DisplayConfig) -> Result<Self> {
        let encoder = BcdEncoder::new(config.clone())?;
        debug!("created display '{}'", config.label);
        Ok(Self {
            config,
            encoder,
            display: DisplayState::new(),
        })
    }

    /// Validates the input wiring.
    pub fn connect<I: InputBus>(&self, inputs: &I) -> Result<()> {
        self.encoder.connect(inputs)
    }

    /// Input-changed callback: reads the inputs and computes new outputs.
    pub fn inputs_changed<I: InputBus>(&mut self, inputs: &I) -> Result<BcdDigits> {
        self.encoder.read_inputs(inputs)
    }

    /// Output callback: publishes the computed outputs.
    pub fn write_outputs<O: OutputBus>(
        &self,
        outputs: &mut O,
    ) -> core::result::Result<(), O::Error> {
        self.encoder.write_outputs(outputs)
    }

    /// Observation callback: captures the outputs for rendering.
    pub fn observe<O: OutputBus>(&mut self, outputs: &O) {
        self.display.observe(outputs);
    }

    /// Render callback: draws the last observed digits in the configured
    /// colors.
    pub fn render<R: SegmentRenderer>(
        &self,
        renderer: &mut R,
    ) -> core::result::Result<(), R::Error> {
        self.display.render(renderer, &self.config)
    }

    /// The frame [`render`](Self::render) would draw.
    pub fn frame(&self) -> DisplayFrame {
        self.display.frame().with_colors(&self.config)
    }

    /// One full evaluation: read inputs, write outputs, observe them.
    pub fn step<I, O>(&mut self, inputs: &I, outputs: &mut O) -> Result<BcdDigits>
    where
        I: InputBus,
        O: OutputBus,
        Error: From<O::Error>,
    {
        let digits = self.inputs_changed(inputs)?;
        self.write_outputs(outputs)?;
        self.observe(outputs);
        Ok(digits)
    }

    /// Digits computed by the last evaluation.
    pub fn digits(&self) -> BcdDigits {
        self.encoder.digits()
    }

    /// The encoder half.
    pub fn encoder(&self) -> &BcdEncoder {
        &self.encoder
    }

    /// The render state.
    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Configuration the component was created with.
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::{MockInputs, MockOutputs, MockRenderer};
    use crate::pins::DigitPosition;
    use crate::config::Rgb;
    use crate::segments::{segments_for, Segment};

    fn component() -> SevenByThree {
        SevenByThree::new(DisplayConfig::default()).unwrap()
    }

    #[test]
    fn new_validates_config() {
        assert!(matches!(
            SevenByThree::new(DisplayConfig::default().with_bits(99)),
            Err(Error::InvalidBitWidth(99))
        ));
    }

    #[test]
    fn step_updates_display() {
        let mut component = component();
        let mut inputs = MockInputs::new();
        let mut outputs = MockOutputs::new();
        inputs.set_value(64);

        let digits = component.step(&inputs, &mut outputs).unwrap();
        assert_eq!(digits.to_array(), [4, 6, 0]);
        assert_eq!(component.display().digits(), digits);
        assert_eq!(component.digits(), digits);
    }

    #[test]
    fn display_lags_until_observed() {
        let mut component = component();
        let mut inputs = MockInputs::new();
        let mut outputs = MockOutputs::new();
        inputs.set_value(9);

        component.inputs_changed(&inputs).unwrap();
        component.write_outputs(&mut outputs).unwrap();
        assert_eq!(component.display().to_text().as_str(), "000");

        component.observe(&outputs);
        assert_eq!(component.display().to_text().as_str(), "009");
    }

    #[test]
    fn step_maps_bus_failure() {
        let mut component = component();
        let inputs = MockInputs::new();
        let mut outputs = MockOutputs::new().failing();
        assert_eq!(component.step(&inputs, &mut outputs), Err(Error::Bus));
    }

    #[test]
    fn render_reflects_latest_step() {
        let mut component = component();
        let mut inputs = MockInputs::new();
        let mut outputs = MockOutputs::new();
        let mut renderer = MockRenderer::new();

        for value in [3u64, 30, 254] {
            inputs.set_value(value);
            component.step(&inputs, &mut outputs).unwrap();
            component.render(&mut renderer).unwrap();
        }

        let frame = renderer.last_frame.unwrap();
        assert_eq!(frame.pattern(DigitPosition::Ones), segments_for(4));
        assert_eq!(frame.pattern(DigitPosition::Tens), segments_for(5));
        assert_eq!(frame.pattern(DigitPosition::Hundreds), segments_for(2));
        assert_eq!(renderer.render_count, 3);
        // init stays with the renderer's owner
        assert!(!renderer.initialized);
    }

    #[test]
    fn render_carries_configured_colors() {
        let green = Rgb::new(0, 255, 0);
        let mut component =
            SevenByThree::new(DisplayConfig::default().with_on_color(green)).unwrap();
        let mut inputs = MockInputs::new();
        let mut outputs = MockOutputs::new();
        let mut renderer = MockRenderer::new();

        inputs.set_value(188);
        component.step(&inputs, &mut outputs).unwrap();
        component.render(&mut renderer).unwrap();

        let frame = renderer.last_frame.unwrap();
        assert_eq!(frame, component.frame());
        assert_eq!(frame.on_color(), green);
        assert_eq!(frame.off_color(), Rgb::DARK_GRAY);
        assert_eq!(frame.color(DigitPosition::Tens, Segment::A), green);
        assert_ne!(frame, component.display().frame());
    }

    #[test]
    fn config_is_kept() {
        let component =
            SevenByThree::new(DisplayConfig::default().with_label("Accumulator")).unwrap();
        assert_eq!(component.config().label.as_str(), "Accumulator");
        assert_eq!(component.encoder().bits(), 1);
    }
}
