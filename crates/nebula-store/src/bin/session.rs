//! # Storefront Session Walkthrough
//!
//! Drives a scripted storefront session against the real store layer for
//! development: seeds the catalog, subscribes a logger to the cart store,
//! replays a typical shopping session, and submits a contact message.
//!
//! ## Usage
//! ```bash
//! # Standard walkthrough (2 s contact uplink delay)
//! cargo run -p nebula-store --bin session
//!
//! # Impatient mode
//! cargo run -p nebula-store --bin session -- --delay-ms 0
//!
//! # With store-level debug logs
//! RUST_LOG=debug cargo run -p nebula-store --bin session
//! ```

use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use nebula_core::types::Category;
use nebula_store::{seeded_catalog, seeded_testimonials, CartStore, ContactMessage, Transmitter};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=nebula_store=trace` - Show trace for store crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,nebula_store=debug,nebula_core=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut delay_ms: u64 = 2000;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--delay-ms" => {
                if i + 1 < args.len() {
                    delay_ms = args[i + 1].parse().unwrap_or(2000);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("NebulaCraft Session Walkthrough");
                println!();
                println!("Usage: session [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --delay-ms <N>   Contact uplink delay in milliseconds (default: 2000)");
                println!("  -h, --help       Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    init_tracing();

    println!("🛸 NebulaCraft Session Walkthrough");
    println!("==================================");
    println!();

    // Catalog
    let catalog = seeded_catalog();
    println!("Catalog ({} artifacts):", catalog.len());
    for category in Category::ALL {
        let items = catalog.filter(Some(category));
        println!("  [{}]", category.label());
        for item in items {
            println!("    #{} {:<18} {}", item.id, item.name, item.price());
        }
    }
    println!();

    let logs = seeded_testimonials();
    println!("Transmission logs: {} on file", logs.len());
    println!();

    // Store with a rendering stand-in subscribed
    let store = Arc::new(CartStore::new());
    store.subscribe(|snapshot| {
        info!(
            lines = snapshot.lines.len(),
            total_items = snapshot.total_items,
            total_price = %snapshot.total_price,
            sidebar = if snapshot.is_open { "open" } else { "closed" },
            "render"
        );
    });

    // A typical session: browse, add, fiddle with quantities, check out of
    // the sidebar, change mind about one artifact.
    let holo = catalog.get("1").expect("seeded catalog has the Holo-Plant");
    let visor = catalog.get("3").expect("seeded catalog has the Cyber-Visor");

    store.add_item(holo);
    store.add_item(holo); // double-add folds into one line
    store.add_item(visor);
    store.toggle_visibility(); // open the cargo bay
    store.update_quantity("1", -1);
    store.update_quantity("1", -1); // clamped at 1
    store.remove_item("3");
    store.remove_item("3"); // idempotent

    let snapshot = store.snapshot();
    println!();
    println!("Final cargo bay: {}", serde_json::to_string_pretty(&snapshot)?);
    println!();

    // Contact uplink
    let uplink = Transmitter::with_delay(Duration::from_millis(delay_ms));
    let receipt = uplink
        .submit(&ContactMessage {
            name: "Jax Orion".to_string(),
            email: "jax@orion.dev".to_string(),
            message: "Does the Cyber-Visor fit over a flight helmet?".to_string(),
        })
        .await?;

    println!("✓ Transmission received: {} at {}", receipt.id, receipt.received_at);

    Ok(())
}
