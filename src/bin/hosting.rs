//! Hosting Server Binary
//!
//! Serves the engine's operations and live sessions over HTTP.
//! Binds to BIND_ADDR, or 127.0.0.1:8080 when unset.

use ludics::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    hosting::Server::run().await?;
    Ok(())
}
