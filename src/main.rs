#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() {
    if let Err(err) = portfolio_site::server::run().await {
        tracing::error!(error = %err, "static host stopped");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    if let Err(err) = portfolio_site::frontend::run() {
        tracing::error!(error = %err, "site failed to start");
    }
}
