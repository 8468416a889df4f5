//! Goose wiring: one scenario whose users log in on start, run the weighted
//! task set with a think-time between tasks, and log out on stop.

use goose::prelude::*;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::{debug, error};

use crate::config::{LoadConfig, TargetConfig};
use crate::domain::{SimulatedUser, TestCredentials};
use crate::session;
use crate::tasks::{self, TaskKind};
use crate::transport::GooseTransport;

pub const SCENARIO_NAME: &str = "JavathequeUser";

pub fn build(target: Arc<TargetConfig>, load: &LoadConfig) -> Result<Scenario, GooseError> {
    let (min_wait, max_wait) = load.wait_range();
    let mut scenario = scenario!(SCENARIO_NAME)
        .set_wait_time(min_wait, max_wait)?
        .register_transaction(on_start(Arc::clone(&target)).set_name("on_start").set_on_start())
        .register_transaction(on_stop(Arc::clone(&target)).set_name("on_stop").set_on_stop());

    for kind in TaskKind::iter() {
        let transaction = task(Arc::clone(&target), kind)
            .set_name(kind.as_ref())
            .set_weight(kind.weight())?;
        scenario = scenario.register_transaction(transaction);
    }
    Ok(scenario)
}

fn on_start(target: Arc<TargetConfig>) -> Transaction {
    let closure: TransactionFunction = Arc::new(move |user| {
        let target = Arc::clone(&target);
        Box::pin(async move {
            let mut state = SimulatedUser::new(TestCredentials::generate());
            {
                let mut transport = GooseTransport::new(user, &target);
                match session::start(&mut state, &mut transport).await {
                    Ok(outcome) => debug!(?outcome, "session started"),
                    Err(e) => error!(error = %e, "error during login"),
                }
            }
            user.set_session_data(state);
            Ok(())
        })
    });
    Transaction::new(closure)
}

fn on_stop(target: Arc<TargetConfig>) -> Transaction {
    let closure: TransactionFunction = Arc::new(move |user| {
        let target = Arc::clone(&target);
        Box::pin(async move {
            let Some(mut state) = user.get_session_data::<SimulatedUser>().cloned() else {
                return Ok(());
            };
            {
                let mut transport = GooseTransport::new(user, &target);
                match session::stop(&mut state, &mut transport).await {
                    Ok(outcome) => debug!(?outcome, "session stopped"),
                    Err(e) => error!(error = %e, "error during logout"),
                }
            }
            user.set_session_data(state);
            Ok(())
        })
    });
    Transaction::new(closure)
}

fn task(target: Arc<TargetConfig>, kind: TaskKind) -> Transaction {
    let closure: TransactionFunction = Arc::new(move |user| {
        let target = Arc::clone(&target);
        Box::pin(async move {
            let Some(mut state) = user.get_session_data::<SimulatedUser>().cloned() else {
                return Ok(());
            };
            {
                let mut transport = GooseTransport::new(user, &target);
                match tasks::run(kind, &mut state, &mut transport).await {
                    Ok(outcome) => debug!(task = %kind, ?outcome, "task finished"),
                    Err(e) => error!(task = %kind, error = %e, "task error"),
                }
            }
            user.set_session_data(state);
            Ok(())
        })
    });
    Transaction::new(closure)
}
