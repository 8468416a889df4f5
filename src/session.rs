//! Per-user start and stop hooks: log in (registering on a miss) and log out.

use tracing::{error, info};

use crate::domain::SimulatedUser;
use crate::endpoints;
use crate::error::DriverError;
use crate::transport::{Transport, Verdict};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn,
    /// The account did not exist and registration was attempted.
    Registration(RegisterOutcome),
    Rejected(u16),
}

impl LoginOutcome {
    pub fn is_logged_in(&self) -> bool {
        matches!(
            self,
            LoginOutcome::LoggedIn | LoginOutcome::Registration(RegisterOutcome::Registered)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    Registered,
    InvalidData,
    Failed(u16),
}

impl RegisterOutcome {
    fn from_status(status: u16) -> Self {
        match status {
            200 => RegisterOutcome::Registered,
            400 => RegisterOutcome::InvalidData,
            other => RegisterOutcome::Failed(other),
        }
    }

    pub fn verdict(&self) -> Verdict {
        match self {
            RegisterOutcome::Registered => Verdict::Success,
            RegisterOutcome::InvalidData => Verdict::Failure("Invalid registration data".to_string()),
            RegisterOutcome::Failed(status) => {
                Verdict::Failure(format!("Registration failed: {status}"))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoutOutcome {
    NotLoggedIn,
    LoggedOut,
    Failed(u16),
}

/// Logs the user in, falling back to registration when the account is unknown.
pub async fn start<T>(user: &mut SimulatedUser, transport: &mut T) -> Result<LoginOutcome, DriverError>
where
    T: Transport + ?Sized,
{
    let reply = transport.send(endpoints::login(user.credentials())).await?;
    match reply.status {
        200 => {
            user.set_logged_in(true);
            info!(email = %user.credentials().email, "test user logged in");
            Ok(LoginOutcome::LoggedIn)
        }
        401 | 404 => {
            info!(
                email = %user.credentials().email,
                "test user not found, creating new test user"
            );
            Ok(LoginOutcome::Registration(register(user, transport).await?))
        }
        status => {
            error!(status, "login failed");
            Ok(LoginOutcome::Rejected(status))
        }
    }
}

pub async fn register<T>(
    user: &mut SimulatedUser,
    transport: &mut T,
) -> Result<RegisterOutcome, DriverError>
where
    T: Transport + ?Sized,
{
    let reply = transport.send(endpoints::register(user.credentials())).await?;
    let outcome = RegisterOutcome::from_status(reply.status);
    match &outcome {
        RegisterOutcome::Registered => {
            user.set_logged_in(true);
            info!(email = %user.credentials().email, "test user created");
        }
        RegisterOutcome::InvalidData => {
            error!(body = %reply.body, "invalid registration data");
        }
        RegisterOutcome::Failed(status) => {
            error!(status, body = %reply.body, "registration failed");
        }
    }
    transport.record(outcome.verdict());
    Ok(outcome)
}

pub async fn stop<T>(user: &mut SimulatedUser, transport: &mut T) -> Result<LogoutOutcome, DriverError>
where
    T: Transport + ?Sized,
{
    if !user.is_logged_in() {
        return Ok(LogoutOutcome::NotLoggedIn);
    }

    let reply = transport.send(endpoints::logout()).await?;
    if reply.is_ok() {
        user.set_logged_in(false);
        info!(email = %user.credentials().email, "test user logged out");
        Ok(LogoutOutcome::LoggedOut)
    } else {
        error!(status = reply.status, "logout failed");
        Ok(LogoutOutcome::Failed(reply.status))
    }
}
