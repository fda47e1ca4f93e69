/// HTTP request handlers
use crate::domain::{Health, Shoot, Snapshot};
use crate::errors::ApiError;
use crate::gallery;
use crate::services::SnapshotService;
use crate::store::SnapshotStore;
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub snapshot_service: Arc<SnapshotService>,
    pub snapshot_store: Arc<SnapshotStore>,
    pub photos_dir: PathBuf,
    pub pages_dir: PathBuf,
}

/// Successful response wrapper
#[derive(Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub ok: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self { ok: true, data }
    }
}

/// Health check handler
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        now: Utc::now(),
    })
}

/// Home page: today's sky data and the astronomy picture of the day
pub async fn home(State(state): State<AppState>) -> Html<String> {
    Html(render_home(&state.snapshot_store.current()))
}

/// Photo gallery page
pub async fn photos(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let shoots = gallery::list_shoots(&state.photos_dir)?;
    Ok(Html(render_photos(&shoots)))
}

/// Serve a named static HTML page from the pages directory
pub async fn page(
    Path(page): Path<String>,
    State(state): State<AppState>,
) -> Result<Html<String>, ApiError> {
    // Page names map straight to file names; reject anything that
    // could walk out of the pages directory.
    if page.is_empty()
        || !page
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ApiError::NotFound(page));
    }

    let path = state.pages_dir.join(format!("{page}.html"));
    match tokio::fs::read_to_string(&path).await {
        Ok(body) => Ok(Html(body)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ApiError::NotFound(page)),
        Err(e) => Err(ApiError::Io(e)),
    }
}

/// Current snapshot as JSON
pub async fn get_snapshot(State(state): State<AppState>) -> Json<Value> {
    let snap = state.snapshot_store.current();
    Json(serde_json::json!(SuccessResponse::new(&*snap)))
}

/// Force a refresh now and return the freshly installed snapshot
pub async fn refresh_snapshot(State(state): State<AppState>) -> Json<Value> {
    let snap = state.snapshot_service.refresh().await;
    Json(serde_json::json!(SuccessResponse::new(&*snap)))
}

fn render_home(snap: &Snapshot) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>Tonight's Sky</title></head>\n\
         <body>\n\
         <h1>Tonight's Sky</h1>\n\
         <table>\n\
         <tr><td>Sunrise</td><td>{sunrise}</td></tr>\n\
         <tr><td>Sunset</td><td>{sunset}</td></tr>\n\
         <tr><td>Moonrise</td><td>{moonrise}</td></tr>\n\
         <tr><td>Moonset</td><td>{moonset}</td></tr>\n\
         <tr><td>Moon phase</td><td>{phase} ({fracillum} illuminated)</td></tr>\n\
         </table>\n\
         <h2>Astronomy Picture of the Day: {title}</h2>\n\
         <p class=\"apod-date\">{date}</p>\n\
         {image}\n\
         <p>{explanation}</p>\n\
         <p class=\"apod-copyright\">&copy; {copyright}</p>\n\
         </body>\n\
         </html>\n",
        sunrise = snap.sunrise,
        sunset = snap.sunset,
        moonrise = snap.moonrise,
        moonset = snap.moonset,
        phase = snap.phase,
        fracillum = snap.fracillum,
        title = snap.apod_title,
        date = snap.apod_date,
        image = snap.apod_image,
        explanation = snap.apod_explanation,
        copyright = snap.apod_copyright,
    )
}

fn render_photos(shoots: &[Shoot]) -> String {
    let mut body = String::from(
        "<!DOCTYPE html>\n<html>\n<head><title>Photos</title></head>\n<body>\n<h1>Photos</h1>\n",
    );
    for shoot in shoots {
        body.push_str(&format!("<h2>{}</h2>\n{}\n", shoot.name, shoot.markup));
    }
    body.push_str("</body>\n</html>\n");
    body
}
