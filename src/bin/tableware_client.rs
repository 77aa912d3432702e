// src/bin/tableware_client.rs

use tableware_rest::client::demo;
use tableware_rest::infra::config;
use tableware_rest::TablewareClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_dotenv();
    config::init_tracing();

    let base_url = config::api_url();
    tracing::info!(%base_url, "running tableware demo");

    let client = TablewareClient::new(base_url);
    let mut stdout = std::io::stdout();
    demo::run_demo(&client, &mut stdout).await
}
