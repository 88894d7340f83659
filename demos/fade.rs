//! Headless driver-loop demo: fades a sprite out while sliding it right,
//! then chains a fade back in. Run with `RUST_LOG=debug` to watch the
//! registry work.

use std::collections::HashMap;
use tweenkit::{shared, Animatable, EasingFunction, MemoryRegistry, Tween, TweenRegistry};

struct Sprite {
    x: f64,
    opacity: f64,
}

impl Animatable for Sprite {
    fn get(&self, property: &str) -> Option<f64> {
        match property {
            "x" => Some(self.x),
            "opacity" => Some(self.opacity),
            _ => None,
        }
    }

    fn set(&mut self, property: &str, value: f64) {
        match property {
            "x" => self.x = value,
            "opacity" => self.opacity = value,
            _ => {}
        }
    }
}

fn main() -> tweenkit::Result<()> {
    env_logger::init();

    let sprite = shared(Sprite {
        x: 0.0,
        opacity: 1.0,
    });
    let mut registry = MemoryRegistry::new();

    let fade_in = Tween::new(
        sprite.clone(),
        HashMap::from([("opacity".to_string(), 1.0)]),
    )?
    .duration(12)?
    .with_easing(EasingFunction::EaseOutCubic)
    .on_complete(|_| println!("faded back in"));

    registry.add(
        Tween::new(
            sprite.clone(),
            HashMap::from([("x".to_string(), 160.0), ("opacity".to_string(), 0.0)]),
        )?
        .duration(24)?
        .delay(6)
        .with_easing(EasingFunction::EaseInOutQuad)
        .chain(vec![fade_in]),
    );

    // The host's frame loop: one tick per frame until everything settles.
    let mut frame = 0;
    while !registry.is_empty() {
        registry.tick();
        frame += 1;

        let sprite = sprite.borrow();
        println!(
            "frame {frame:>2}: x = {:>6.1}  opacity = {:.2}",
            sprite.get("x").unwrap(),
            sprite.get("opacity").unwrap()
        );
    }

    Ok(())
}
