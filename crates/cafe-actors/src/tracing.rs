//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber used by every store and by
//! the demo binary.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started` / `Shutdown` with the entity type and final size
//! - **Store operations**: `Created`, `Updated`, `Action ok`, `Not found` with the record id
//! - **Client calls**: one span per `#[instrument]`ed client method
//! - **Cart changes**: line added, quantity changed, cleared
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run -p cafe-shop    # one line per state change
//! RUST_LOG=debug cargo run -p cafe-shop   # payloads and list filters as well
//! ```
//!
//! `RUST_LOG` wins over the default filter passed in by the caller. With `debug` the
//! order checkout reads roughly:
//!
//! ```text
//! DEBUG checkout:submit_order: Sending request customer="Rahim"
//! DEBUG Create entity_type="Order" params=OrderCreate { .. }
//!  INFO Created entity_type="Order" id=order_1 size=1
//!  INFO checkout: Order placed order_id=order_1 total=950
//! ```

use tracing_subscriber::EnvFilter;

/// Installs a compact fmt subscriber.
///
/// `default_filter` (e.g. `"info"`) applies when `RUST_LOG` is unset or unparsable.
/// Calling this twice is harmless: the second install is ignored.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type already says where a line came from
        .compact()
        .try_init();
}
