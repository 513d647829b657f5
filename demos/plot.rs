use anyhow::Result;
use syncwave::{
    Impulse, InverseRamp, Ramp, Sine, Step, SyncExt, SyncFunction, Trapezoidal, Triangular,
};

const WIDTH: u32 = 60;
const HEIGHT: usize = 8;

/// Prints one period of `node` as a small ASCII chart.
fn plot(title: &str, node: &mut impl SyncFunction) {
    println!("{title} (period {} ms)", node.period());

    let step = (node.period() / WIDTH).max(1);
    let values: Vec<f32> = node.samples(step).map(|(_, v)| v).collect();
    let top = values.iter().copied().fold(1.0f32, f32::max);

    for row in (0..HEIGHT).rev() {
        let threshold = top * (row as f32 + 0.5) / HEIGHT as f32;
        let line: String = values
            .iter()
            .map(|&v| if v >= threshold { '#' } else { ' ' })
            .collect();
        println!("|{line}");
    }
    println!("+{}\n", "-".repeat(values.len()));
}

fn main() -> Result<()> {
    // RUST_LOG=trace shows repetition boundaries as they are crossed
    env_logger::init();

    // Example 1: Primitive shapes
    plot("Ramp", &mut Ramp::new(1000)?);
    plot("Sine", &mut Sine::new(1000)?);
    plot("Trapezoidal", &mut Trapezoidal::new(200, 500, 300)?);

    // Example 2: Concatenation with `+`
    let mut sawtooth = Ramp::new(400)? + InverseRamp::new(100)?;
    plot("Ramp + InverseRamp", &mut sawtooth);

    // Example 3: Repetition and mirroring
    let mut pulses = Step::new(60, 200)?.repeat(4)?;
    plot("Step repeated 4 times", &mut pulses);

    let mut swell = Triangular::new(300, 100)?.mirror()?;
    plot("Mirrored triangle", &mut swell);

    // Example 4: Operators
    let mut gated = Sine::new(1000)?.and(Step::new(500, 1000)?)?;
    plot("Sine AND first-half gate", &mut gated);

    let mut envelope = Ramp::new(1000)?.min(Sine::new(1000)?.slice_x(250)?)?;
    plot("min(Ramp, shifted Sine)", &mut envelope);

    // Example 5: Speed also scales the value axis
    let mut fast = Ramp::new(1000)?.speed(2.0)?.scale_y(0.5)?;
    plot("Ramp at double speed, rescaled", &mut fast);

    // Example 6: One-shot impulses inside a repetition
    let mut clicks = Impulse::new(100)?.repeat(5)?;
    let fired: Vec<u32> = (0..clicks.period())
        .filter(|&t| clicks.value_at(t) == 1.0)
        .collect();
    println!("Impulse x5 fires at {fired:?}");

    Ok(())
}
