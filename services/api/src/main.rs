#[tokio::main]
async fn main() {
    if let Err(error) = renthub_api::run().await {
        eprintln!("renthub-api failed: {error}");
        std::process::exit(1);
    }
}
