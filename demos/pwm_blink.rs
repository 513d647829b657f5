//! Simulates a microcontroller main loop driving three LEDs.

use anyhow::Result;
use syncwave::{Clock, ManualClock, Ramp, SyncExt, SyncFunction, millis, presets::pwm};

fn main() -> Result<()> {
    let clock = ManualClock::new(0);

    let mut status = pwm(millis!("100ms"), millis!("1s"))?;
    let beeping = pwm(millis!("50ms"), millis!("200ms"))?;
    let mut alarm = beeping.and(pwm(millis!("1s"), millis!("2s"))?)?;
    let mut fade = Ramp::new(millis!("1s 500ms"))?.mirror()?.repeat_forever()?;

    // A 4 second run at a 100ms loop interval
    while clock.now() < millis!("4s") {
        let led = |v: f32| if v > 0.5 { '*' } else { '.' };
        println!(
            "{:>5} ms  status {}  alarm {}  fade {:>4.2}",
            clock.now(),
            led(status.value_now(&clock)),
            led(alarm.value_now(&clock)),
            fade.value_now(&clock),
        );
        clock.advance(millis!("100ms"));
    }

    Ok(())
}
