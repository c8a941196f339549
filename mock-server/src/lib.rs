use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

pub const USERNAME: &str = "webuser";
pub const PASSWORD: &str = "password";

/// Seeded file that only has a disk copy.
pub const DISK_FILE: &str = "/stornext/snfs1/projects/reel01.mov";
/// Seeded file that has been truncated: only the media copy remains.
pub const TRUNCATED_FILE: &str = "/stornext/snfs1/archive/master.dpx";

/// Where the Tertiary Storage Manager currently holds a file's data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileLocation {
    Disk,
    DiskAndArchive,
    Archive,
}

/// Query parameters accepted by every endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct Params {
    pub username: Option<String>,
    pub password: Option<String>,
    pub format: Option<String>,
    pub file: Option<String>,
    pub verbose: Option<String>,
}

pub type Db = Arc<RwLock<HashMap<String, FileLocation>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::from([
        (DISK_FILE.to_string(), FileLocation::Disk),
        (TRUNCATED_FILE.to_string(), FileLocation::Archive),
    ])));
    Router::new()
        .route("/sws/v2/system/info", get(system_info))
        .route("/sws/v2/fsmedinfo", get(media_info))
        .route("/sws/v2/file/fsfileinfo", get(file_info))
        .route("/sws/v2/file/fsstore", get(store))
        .route("/sws/v2/file/fsretrieve", get(retrieve))
        .route("/sws/v2/file/fsrmdiskcopy", get(remove_disk_copy))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Check credentials and the requested format. Only `json` is served.
fn authorize(params: &Params) -> Result<(), Response> {
    if params.username.as_deref() != Some(USERNAME) || params.password.as_deref() != Some(PASSWORD) {
        return Err(error(StatusCode::UNAUTHORIZED, "invalid username or password"));
    }
    match params.format.as_deref() {
        Some("json") => Ok(()),
        _ => Err(error(StatusCode::BAD_REQUEST, "unsupported format")),
    }
}

fn require_file(params: &Params) -> Result<&str, Response> {
    params
        .file
        .as_deref()
        .filter(|f| !f.is_empty())
        .ok_or_else(|| error(StatusCode::BAD_REQUEST, "missing file parameter"))
}

fn command_result(command: &str, file: &str, location: FileLocation) -> Response {
    Json(json!({
        "command": command,
        "file": file,
        "location": location,
        "status": "completed",
    }))
    .into_response()
}

async fn system_info(Query(params): Query<Params>) -> Response {
    if let Err(resp) = authorize(&params) {
        return resp;
    }
    Json(json!({
        "statuses": [
            { "component": "snfs1", "status": "ACTIVE" },
            { "component": "tsm", "status": "ACTIVE" },
            { "component": "database", "status": "ACTIVE" },
        ]
    }))
    .into_response()
}

async fn media_info(Query(params): Query<Params>) -> Response {
    if let Err(resp) = authorize(&params) {
        return resp;
    }
    let mut media = vec![json!({ "mediaId": "000001", "status": "AVAIL", "type": "LTO-8" })];
    if params.verbose.as_deref() == Some("true") {
        media[0]["formatted"] = Value::Bool(true);
        media[0]["filesOnMedia"] = json!(1);
    }
    Json(json!({ "media": media })).into_response()
}

async fn file_info(State(db): State<Db>, Query(params): Query<Params>) -> Response {
    if let Err(resp) = authorize(&params) {
        return resp;
    }
    let file = match require_file(&params) {
        Ok(f) => f,
        Err(resp) => return resp,
    };
    match db.read().await.get(file) {
        Some(location) => Json(json!({ "fileInfo": { "fileName": file, "location": location } })).into_response(),
        None => error(StatusCode::NOT_FOUND, "file not known to the storage manager"),
    }
}

async fn store(State(db): State<Db>, Query(params): Query<Params>) -> Response {
    transition(db, params, "fsstore", |loc| match loc {
        FileLocation::Disk => Ok(FileLocation::DiskAndArchive),
        other => Ok(other),
    })
    .await
}

async fn retrieve(State(db): State<Db>, Query(params): Query<Params>) -> Response {
    transition(db, params, "fsretrieve", |loc| match loc {
        FileLocation::Archive => Ok(FileLocation::DiskAndArchive),
        other => Ok(other),
    })
    .await
}

async fn remove_disk_copy(State(db): State<Db>, Query(params): Query<Params>) -> Response {
    transition(db, params, "fsrmdiskcopy", |loc| match loc {
        FileLocation::Disk => Err("file has not been stored to media"),
        _ => Ok(FileLocation::Archive),
    })
    .await
}

/// Apply a lifecycle step to a known file, answering 404 for unknown files
/// and 409 when the step is not allowed from the current location.
async fn transition(
    db: Db,
    params: Params,
    command: &str,
    step: impl Fn(FileLocation) -> Result<FileLocation, &'static str>,
) -> Response {
    if let Err(resp) = authorize(&params) {
        return resp;
    }
    let file = match require_file(&params) {
        Ok(f) => f,
        Err(resp) => return resp,
    };
    let mut files = db.write().await;
    let Some(location) = files.get_mut(file) else {
        return error(StatusCode::NOT_FOUND, "file not known to the storage manager");
    };
    match step(*location) {
        Ok(next) => {
            *location = next;
            command_result(command, file, next)
        }
        Err(message) => error(StatusCode::CONFLICT, message),
    }
}
