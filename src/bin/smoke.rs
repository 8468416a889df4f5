use anyhow::Result;
use javatheque_load::config::Config;
use javatheque_load::domain::TestCredentials;
use javatheque_load::smoke;
use javatheque_load::telemetry::init_tracing;
use javatheque_load::transport::HttpTransport;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cfg = Config::load()?;
    init_tracing(&cfg.log);

    info!(host = %cfg.target.host, "starting smoke run");
    let transport = HttpTransport::new(&cfg.target)?;
    let report = smoke::run(transport, TestCredentials::generate()).await?;

    println!("{}", report.stats);
    if !report.passed() {
        anyhow::bail!("smoke run failed: {report:?}");
    }
    info!("smoke run passed");
    Ok(())
}
