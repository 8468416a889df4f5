//! Request templates for the javatheque HTTP surface.

use crate::domain::{FilmUpdate, NewFilm, TestCredentials, SEARCH_LANG};
use crate::error::DriverError;
use crate::transport::{AppRequest, Body};

pub fn login(creds: &TestCredentials) -> AppRequest {
    AppRequest::post(
        "/login",
        "login",
        Body::Form(vec![
            ("email", creds.email.clone()),
            ("password", creds.password.clone()),
        ]),
    )
}

pub fn register(creds: &TestCredentials) -> AppRequest {
    AppRequest::post(
        "/register",
        "register",
        Body::Form(vec![
            ("email", creds.email.clone()),
            ("password", creds.password.clone()),
            ("firstname", creds.firstname.clone()),
            ("lastname", creds.lastname.clone()),
        ]),
    )
}

pub fn library() -> AppRequest {
    AppRequest::get("/library", "library?search=all")
}

pub fn search(title: &str) -> AppRequest {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("title", title)
        .append_pair("lang", SEARCH_LANG)
        .append_pair("page", "1")
        .finish();
    AppRequest::get("/film/search", format!("film/search?{query}"))
}

pub fn add_film(film: &NewFilm) -> Result<AppRequest, DriverError> {
    Ok(AppRequest::post("/film/add", "film/add", Body::json(film)?))
}

pub fn show_film(id: &str) -> AppRequest {
    AppRequest::get("/film/show", format!("film/show?id={}", encode(id)))
}

pub fn update_film(id: &str, update: &FilmUpdate) -> Result<AppRequest, DriverError> {
    Ok(AppRequest::post(
        "/film/update",
        format!("film/update?id={}", encode(id)),
        Body::json(update)?,
    ))
}

pub fn logout() -> AppRequest {
    AppRequest::get("/logout", "logout")
}

fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
