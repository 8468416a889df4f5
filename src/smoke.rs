//! Single-user walk through every flow, outside goose.
//!
//! Miss the login and register, log out, log back in with the same
//! credentials, run each task once, and log out again.

use tracing::{error, info};

use crate::domain::{SimulatedUser, TestCredentials};
use crate::error::DriverError;
use crate::session::{self, LoginOutcome, LogoutOutcome, RegisterOutcome};
use crate::stats::RunStats;
use crate::tasks::{self, TaskKind, TaskOutcome};
use crate::transport::HttpTransport;

#[derive(Debug)]
pub struct SmokeReport {
    pub first_login: LoginOutcome,
    pub relogin: Option<LoginOutcome>,
    pub tasks: Vec<(TaskKind, TaskOutcome)>,
    pub logout: LogoutOutcome,
    pub stats: RunStats,
}

impl SmokeReport {
    pub fn passed(&self) -> bool {
        let logged_in = match &self.first_login {
            LoginOutcome::LoggedIn => true,
            LoginOutcome::Registration(RegisterOutcome::Registered) => {
                self.relogin == Some(LoginOutcome::LoggedIn)
            }
            _ => false,
        };
        logged_in
            && self
                .tasks
                .iter()
                .all(|(_, outcome)| !matches!(outcome, TaskOutcome::Failed(_)))
            && self.logout == LogoutOutcome::LoggedOut
    }
}

/// Ordered so the library is listed before the tasks that need film ids.
const WALK: [TaskKind; 5] = [
    TaskKind::SearchFilms,
    TaskKind::AddFilmToLibrary,
    TaskKind::ViewLibrary,
    TaskKind::ShowFilm,
    TaskKind::UpdateFilm,
];

pub async fn run(
    mut transport: HttpTransport,
    credentials: TestCredentials,
) -> Result<SmokeReport, DriverError> {
    let mut user = SimulatedUser::new(credentials);
    let first_login = session::start(&mut user, &mut transport).await?;
    info!(?first_login, "first login");

    let mut relogin = None;
    if first_login.is_logged_in() {
        session::stop(&mut user, &mut transport).await?;
        let outcome = session::start(&mut user, &mut transport).await?;
        if outcome != LoginOutcome::LoggedIn {
            error!(?outcome, "login with freshly registered credentials failed");
        }
        relogin = Some(outcome);
    }

    let mut outcomes = Vec::with_capacity(WALK.len());
    for kind in WALK {
        let outcome = tasks::run(kind, &mut user, &mut transport).await?;
        info!(task = %kind, ?outcome, "task finished");
        outcomes.push((kind, outcome));
    }

    let logout = session::stop(&mut user, &mut transport).await?;
    Ok(SmokeReport {
        first_login,
        relogin,
        tasks: outcomes,
        logout,
        stats: transport.into_stats(),
    })
}
