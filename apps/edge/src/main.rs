use anyhow::Context;
use phub::kernel::config::load_config;
use phub_edge::Server;
use phub_logger::Logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    let cfg = load_config(Some("edge")).context("Critical: Configuration is malformed")?;

    Server::builder().config(cfg).build().await?.run().await
}
