#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    awsam_portfolio::backend::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    awsam_portfolio::frontend::run();
}
