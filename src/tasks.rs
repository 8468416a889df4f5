//! # Weighted task set
//!
//! The five request templates a logged-in user repeats for the rest of the run.
//! Goose picks among them proportionally to [`TaskKind::weight`].
//!
//! | Task                  | Weight | Needs known film ids |
//! |-----------------------|--------|----------------------|
//! | `view_library`        | 3      | no                   |
//! | `search_films`        | 2      | no                   |
//! | `add_film_to_library` | 2      | no                   |
//! | `show_film`           | 1      | yes                  |
//! | `update_film`         | 1      | yes                  |
//!
//! A task that cannot run returns [`TaskOutcome::Skipped`] without sending
//! anything. Non-200 answers are recorded as named failures; only transport
//! problems surface as `Err`.

use strum::{AsRefStr, Display, EnumIter};
use tracing::{debug, info};

use crate::domain::{random_search_title, FilmUpdate, NewFilm, SimulatedUser};
use crate::endpoints;
use crate::error::DriverError;
use crate::scrape::extract_film_ids;
use crate::transport::{AppRequest, Transport, Verdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum TaskKind {
    ViewLibrary,
    SearchFilms,
    AddFilmToLibrary,
    ShowFilm,
    UpdateFilm,
}

impl TaskKind {
    pub fn weight(self) -> usize {
        match self {
            TaskKind::ViewLibrary => 3,
            TaskKind::SearchFilms | TaskKind::AddFilmToLibrary => 2,
            TaskKind::ShowFilm | TaskKind::UpdateFilm => 1,
        }
    }

    pub fn needs_film_ids(self) -> bool {
        matches!(self, TaskKind::ShowFilm | TaskKind::UpdateFilm)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    Skipped,
    Passed,
    Failed(String),
}

impl From<Verdict> for TaskOutcome {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Success => TaskOutcome::Passed,
            Verdict::Failure(message) => TaskOutcome::Failed(message),
        }
    }
}

pub async fn run<T>(
    kind: TaskKind,
    user: &mut SimulatedUser,
    transport: &mut T,
) -> Result<TaskOutcome, DriverError>
where
    T: Transport + ?Sized,
{
    if !user.is_logged_in() || (kind.needs_film_ids() && user.film_ids().is_empty()) {
        debug!(task = %kind, "skipping task");
        return Ok(TaskOutcome::Skipped);
    }

    match kind {
        TaskKind::ViewLibrary => view_library(user, transport).await,
        TaskKind::SearchFilms => search_films(transport).await,
        TaskKind::AddFilmToLibrary => add_film_to_library(transport).await,
        TaskKind::ShowFilm => show_film(user, transport).await,
        TaskKind::UpdateFilm => update_film(user, transport).await,
    }
}

async fn view_library<T>(user: &mut SimulatedUser, transport: &mut T) -> Result<TaskOutcome, DriverError>
where
    T: Transport + ?Sized,
{
    let reply = transport.send(endpoints::library()).await?;
    if reply.is_ok() {
        let ids = extract_film_ids(&reply.body);
        let count = ids.len();
        if user.remember_film_ids(ids) {
            info!(count, "found films in library");
        }
    }
    Ok(conclude(transport, reply.status, |s| {
        format!("Failed to view library: {s}")
    }))
}

async fn search_films<T>(transport: &mut T) -> Result<TaskOutcome, DriverError>
where
    T: Transport + ?Sized,
{
    let title = random_search_title(&mut rand::thread_rng());
    let reply = transport.send(endpoints::search(title)).await?;
    if reply.is_ok() {
        info!(title, "searched for movie");
    }
    Ok(conclude(transport, reply.status, |s| {
        format!("Film search failed: {s}")
    }))
}

async fn add_film_to_library<T>(transport: &mut T) -> Result<TaskOutcome, DriverError>
where
    T: Transport + ?Sized,
{
    let film = NewFilm::generate();
    let reply = transport.send(endpoints::add_film(&film)?).await?;
    if reply.is_ok() {
        info!(title = %film.title, "added film");
    }
    Ok(conclude(transport, reply.status, |s| {
        format!("Failed to add film: {s}")
    }))
}

async fn show_film<T>(user: &SimulatedUser, transport: &mut T) -> Result<TaskOutcome, DriverError>
where
    T: Transport + ?Sized,
{
    let Some(id) = user.random_film_id(&mut rand::thread_rng()) else {
        return Ok(TaskOutcome::Skipped);
    };
    let reply = transport.send(endpoints::show_film(&id)).await?;
    if reply.is_ok() {
        info!(film_id = %id, "film shown");
    }
    Ok(conclude(transport, reply.status, |s| {
        format!("Failed to show film: {s}")
    }))
}

async fn update_film<T>(user: &SimulatedUser, transport: &mut T) -> Result<TaskOutcome, DriverError>
where
    T: Transport + ?Sized,
{
    let request: AppRequest = {
        let mut rng = rand::thread_rng();
        let Some(id) = user.random_film_id(&mut rng) else {
            return Ok(TaskOutcome::Skipped);
        };
        endpoints::update_film(&id, &FilmUpdate::random(&mut rng))?
    };
    let reply = transport.send(request).await?;
    if reply.is_ok() {
        info!("film updated");
    }
    Ok(conclude(transport, reply.status, |s| {
        format!("Failed to update film: {s}")
    }))
}

fn conclude<T>(transport: &mut T, status: u16, describe: impl FnOnce(u16) -> String) -> TaskOutcome
where
    T: Transport + ?Sized,
{
    let verdict = Verdict::expect_ok(status, describe);
    transport.record(verdict.clone());
    verdict.into()
}
