//! Door
//!
//! This demo builds a door from a declarative transition table and
//! announces every state change through an observer.
//!
//! Run with: cargo run --example door

use gearshift::{BuildError, EngineBuilder, TransitionBuilder};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), BuildError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Door ===\n");

    let to = "heaven";
    let door = EngineBuilder::new()
        .initial("closed")
        .transition(TransitionBuilder::new().on("open").from("closed").to("open"))?
        .transition(TransitionBuilder::new().on("close").from("open").to("closed"))?
        .build()?;

    door.on_transition(move |record| println!("The door to {to} is {}", record.to));

    println!("Current: {}", door.current_state());
    for event in ["open", "open", "close"] {
        if !door.can(&event) {
            println!("({event} does nothing while {})", door.current_state());
        }
        if let Err(e) = door.dispatch(event) {
            eprintln!("dispatch failed: {e}");
        }
    }
    println!("Current: {}", door.current_state());

    Ok(())
}
