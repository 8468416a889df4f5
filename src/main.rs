use anyhow::Result;
use goose::prelude::*;
use javatheque_load::{config, fixture, scenario, telemetry};
use config::Config;
use fixture::DatabaseFixture;
use std::sync::Arc;
use telemetry::init_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cfg = Config::load()?;
    init_tracing(&cfg.log);

    let target = Arc::new(cfg.target.clone());
    let attack = GooseAttack::initialize()?
        .register_scenario(scenario::build(Arc::clone(&target), &cfg.load)?)
        .set_default(GooseDefault::Host, target.normalized_host().as_str())?;

    let fixture = DatabaseFixture::on_test_start(cfg.database.clone()).await;
    let result = attack.execute().await;
    fixture.on_test_stop().await;

    result?;
    info!("load test finished");
    Ok(())
}
