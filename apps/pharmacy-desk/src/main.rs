//! # Pharmacy Desk Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Load configuration from `PHARMACY_*` variables
//! 3. Open the database & create missing tables
//! 4. Run the form session on stdin/stdout

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The actual setup is in lib.rs for better testability
    pharmacy_desk::run().await
}
