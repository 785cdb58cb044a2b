use era_portfolio::server::{init_tracing, run_dev_server, DevServerConfig};

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(e) = run_dev_server(DevServerConfig::default()).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
