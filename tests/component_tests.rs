//! Integration tests for the display component driven through the mock HAL

use seven_by_three::{
    hal::{AsciiRenderer, MockInputs, MockOutputs, MockRenderer},
    segments_for, DigitPosition, DisplayConfig, Error, OutputBus, Rgb, Segment, SegmentRenderer,
    SevenByThree,
};

fn wired() -> (SevenByThree, MockInputs, MockOutputs) {
    let component = SevenByThree::new(DisplayConfig::default()).unwrap();
    let inputs = MockInputs::new();
    component.connect(&inputs).unwrap();
    (component, inputs, MockOutputs::new())
}

// ============================================================================
// Default state
// ============================================================================

#[test]
fn fresh_component_renders_zeros() {
    let (component, _, _) = wired();
    let mut renderer = MockRenderer::new();
    component.render(&mut renderer).unwrap();

    let frame = renderer.last_frame.unwrap();
    for position in DigitPosition::ALL {
        assert_eq!(frame.pattern(position), segments_for(0));
    }
}

// ============================================================================
// Colors
// ============================================================================

#[test]
fn configured_colors_reach_the_renderer() {
    let draw = |config: DisplayConfig| {
        let mut component = SevenByThree::new(config).unwrap();
        let mut inputs = MockInputs::new();
        let mut outputs = MockOutputs::new();
        let mut renderer = MockRenderer::new();
        inputs.set_value(188);
        component.step(&inputs, &mut outputs).unwrap();
        component.render(&mut renderer).unwrap();
        renderer.last_frame.unwrap()
    };

    let plain = draw(DisplayConfig::default());
    let green = draw(DisplayConfig::default().with_on_color(Rgb::new(0, 255, 0)));

    assert_ne!(plain, green);
    assert_eq!(plain.color(DigitPosition::Hundreds, Segment::B), Rgb::RED);
    assert_eq!(
        green.color(DigitPosition::Hundreds, Segment::B),
        Rgb::new(0, 255, 0)
    );
    assert_eq!(
        green.color(DigitPosition::Hundreds, Segment::A),
        Rgb::DARK_GRAY
    );
}

// ============================================================================
// Pin contract
// ============================================================================

#[test]
fn output_pins_carry_lsb_first_nibbles() {
    let (mut component, mut inputs, mut outputs) = wired();
    inputs.set_value(137);
    component.step(&inputs, &mut outputs).unwrap();

    let read = |i: usize| outputs.read(i).unwrap();
    // ones = 7 = 0111
    assert_eq!([read(0), read(1), read(2), read(3)], [1, 1, 1, 0]);
    // tens = 3 = 0011
    assert_eq!([read(4), read(5), read(6), read(7)], [1, 1, 0, 0]);
    // hundreds = 1 = 0001
    assert_eq!([read(8), read(9), read(10), read(11)], [1, 0, 0, 0]);
}

#[test]
fn single_input_lines() {
    let (mut component, mut inputs, mut outputs) = wired();
    for bit in 0..8 {
        inputs.set_value(0);
        inputs.set_line(bit, 1);
        let digits = component.step(&inputs, &mut outputs).unwrap();
        assert_eq!(u32::from(digits.value()), 1 << bit);
    }
}

#[test]
fn every_value_reaches_the_display() {
    let (mut component, mut inputs, mut outputs) = wired();
    for v in 0..=255u64 {
        inputs.set_value(v);
        component.step(&inputs, &mut outputs).unwrap();
        assert_eq!(u64::from(component.display().digits().value()), v);
    }
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn repeated_renders_show_the_same_frame() {
    let (mut component, mut inputs, mut outputs) = wired();
    let mut renderer = MockRenderer::new();
    inputs.set_value(86);
    component.step(&inputs, &mut outputs).unwrap();

    for _ in 0..5 {
        component.render(&mut renderer).unwrap();
    }

    assert_eq!(renderer.render_count, 5);
    assert!(renderer.frames.windows(2).all(|w| w[0] == w[1]));
    // 8 shows the same segments as 0
    let frame = renderer.last_frame.unwrap();
    assert_eq!(frame.pattern(DigitPosition::Tens), segments_for(0));
    assert_eq!(frame.pattern(DigitPosition::Ones), segments_for(6));
}

#[test]
fn ascii_output_for_max_value() {
    let (mut component, mut inputs, mut outputs) = wired();
    inputs.set_value(255);
    component.step(&inputs, &mut outputs).unwrap();

    let mut renderer = AsciiRenderer::new();
    renderer.init().unwrap();
    component.render(&mut renderer).unwrap();
    assert_eq!(
        format!("{}", renderer),
        " _   _   _ \n _| |_  |_ \n|_   _|  _|"
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn wiring_errors() {
    let component = SevenByThree::new(DisplayConfig::default()).unwrap();

    let mut inputs = MockInputs::new();
    inputs.disconnect(0);
    assert_eq!(component.connect(&inputs), Err(Error::MissingInput { pin: 0 }));

    let inputs = MockInputs::new().with_bits(2);
    assert_eq!(
        component.connect(&inputs),
        Err(Error::BitWidthMismatch {
            pin: 0,
            expected: 1,
            found: 2
        })
    );
}

#[test]
fn failed_evaluation_keeps_last_display() {
    let (mut component, mut inputs, mut outputs) = wired();
    inputs.set_value(77);
    component.step(&inputs, &mut outputs).unwrap();

    inputs.clear_line(6);
    assert_eq!(
        component.step(&inputs, &mut outputs),
        Err(Error::InputUnavailable { pin: 6 })
    );
    assert_eq!(component.display().to_text().as_str(), "077");
}

#[test]
fn instances_are_independent() {
    let (mut a, mut inputs, mut outputs_a) = wired();
    let (b, _, _) = wired();

    inputs.set_value(123);
    a.step(&inputs, &mut outputs_a).unwrap();

    assert_eq!(a.display().to_text().as_str(), "123");
    assert_eq!(b.display().to_text().as_str(), "000");
}
