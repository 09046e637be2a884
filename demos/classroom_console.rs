//! Classroom Console Walkthrough
//!
//! Drives a seeded store the way the console's views would: toggles a device,
//! flips a policy, cuts the whole class, pairs a new device, then prints the
//! snapshot the presentation layer would render.

use classdesk::{BulkStatus, StateStore};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut store = StateStore::with_seed();

    println!("=== Classroom Console ===\n");
    for device in store.devices() {
        println!("  {:<10} {:<12} {}", device.name, device.model, device.status);
    }

    println!("\nCutting network for device 1...");
    if let Err(e) = store.toggle_device("1") {
        println!("  {e}");
    }

    println!("Enabling policy p5...");
    if let Err(e) = store.toggle_policy("p5") {
        println!("  {e}");
    }

    println!("Disconnecting the whole class...");
    store.set_all_status(BulkStatus::Disconnected);

    let paired = store.add_simulated_device();
    println!("Paired {} ({})", paired.name, paired.model);

    println!("\nActivity log (newest first):");
    for entry in store.logs().iter() {
        println!("  [{}] {:<14} {}", entry.time, entry.subject, entry.action);
    }

    match store.snapshot().to_json_pretty() {
        Ok(json) => println!("\nSnapshot:\n{json}"),
        Err(e) => eprintln!("snapshot export failed: {e}"),
    }
}
