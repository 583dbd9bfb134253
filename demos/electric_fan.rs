//! Electric Fan
//!
//! This demo wires up a four-gear fan where every button works from every
//! state, then presses a few buttons.
//!
//! Key concepts:
//! - Enum states and events via `state_enum!` / `event_enum!`
//! - Handlers that perform a side effect before returning the next state
//! - Structured logging of transitions through `tracing`
//!
//! Run with: cargo run --example electric_fan

use gearshift::{event_enum, state_enum, Engine};
use tracing_subscriber::EnvFilter;

state_enum! {
    enum Gear {
        Off,
        First,
        Second,
        Third,
    }
}

event_enum! {
    enum Button {
        Off,
        First,
        Second,
        Third,
    }
}

/// A fan is just an engine plus whatever it wants to print.
struct ElectricFan {
    fsm: Engine<Gear, Button>,
}

impl ElectricFan {
    fn new(initial: Gear) -> Self {
        let fsm = Engine::new(initial);
        let buttons = [
            (Button::Off, Gear::Off, "fan is off"),
            (Button::First, Gear::First, "first gear, a gentle breeze"),
            (Button::Second, Gear::Second, "second gear, nice and cool"),
            (Button::Third, Gear::Third, "third gear, hair everywhere"),
        ];
        for state in [Gear::Off, Gear::First, Gear::Second, Gear::Third] {
            for (button, target, message) in buttons {
                fsm.register_handler(state, button, move || {
                    println!("  {message}");
                    target
                });
            }
        }
        Self { fsm }
    }

    fn press(&self, button: Button) {
        println!("press {button:?}");
        if let Err(e) = self.fsm.dispatch(button) {
            eprintln!("  dispatch failed: {e}");
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Electric Fan ===\n");

    let fan = ElectricFan::new(Gear::Off);
    fan.press(Button::Third);
    fan.press(Button::Off);
    fan.press(Button::First);
    fan.press(Button::Second);
    fan.press(Button::Off);

    println!("\nFinal state: {:?}", fan.fsm.current_state());
    println!("Transitions recorded: {}", fan.fsm.history().len());
}
