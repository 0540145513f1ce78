#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ocean::cli::run().await
}
