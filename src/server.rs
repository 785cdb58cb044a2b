use std::{
    path::{Path as FsPath, PathBuf},
    sync::Arc,
};

use axum::{
    body::Body,
    extract::{Path, Request, State},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use http::{StatusCode, Uri};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use thiserror::Error;
use tower::ServiceExt;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::projects::{get_project, get_projects, Project, ProjectError};

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("couldn't bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },
    #[error("server stopped: {0}")]
    Serve(std::io::Error),
    #[error("couldn't list directory: {0}")]
    Listing(std::io::Error),
}

/// Log filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

impl IntoResponse for ProjectError {
    fn into_response(self) -> Response {
        let status = match self {
            ProjectError::NotFound => StatusCode::NOT_FOUND,
            ProjectError::ParseError => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

/// JSON endpoints for the project list and detail pages, nested under `/api`.
pub fn api_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/projects", get(list_projects))
        .route("/projects/{name}", get(project_detail))
}

async fn list_projects() -> Result<Json<Vec<Project>>, ProjectError> {
    Ok(Json(get_projects()?))
}

async fn project_detail(Path(name): Path<String>) -> Result<Json<Project>, ProjectError> {
    get_project(&name).map(Json).map_err(|e| {
        tracing::debug!(%name, "project lookup failed: {e}");
        e
    })
}

#[derive(Debug, Clone)]
pub struct DevServerConfig {
    pub host: String,
    pub port: u16,
    pub root: PathBuf,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3000,
            root: PathBuf::from("public"),
        }
    }
}

impl DevServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Static file server for local development: `/` maps to `/index.html`,
/// directories without an index get a listing, and every response carries
/// permissive CORS headers.
pub fn dev_router(config: DevServerConfig) -> Router {
    Router::new()
        .fallback(serve_static)
        .with_state(Arc::new(config))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn run_dev_server(config: DevServerConfig) -> Result<(), ServerError> {
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!("Development server starting on http://{addr}");
    tracing::info!("Serving files from: {}", config.root.display());
    axum::serve(listener, dev_router(config).into_make_service())
        .await
        .map_err(ServerError::Serve)
}

/// Characters escaped when a file name becomes a path segment in a link.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Maps a percent-encoded request path onto the served directory. Paths
/// that try to climb out of the root resolve to nothing.
fn resolve(root: &FsPath, url_path: &str) -> Option<PathBuf> {
    let mut resolved = root.to_path_buf();
    for segment in url_path.split('/') {
        let segment = percent_decode_str(segment).decode_utf8().ok()?;
        match &*segment {
            "" | "." => {}
            ".." => return None,
            part if part.contains(['/', '\\']) => return None,
            part => resolved.push(part),
        }
    }
    Some(resolved)
}

async fn serve_static(State(config): State<Arc<DevServerConfig>>, req: Request) -> Response {
    let url_path = req.uri().path().to_string();

    if url_path != "/" {
        let Some(fs_path) = resolve(&config.root, &url_path) else {
            return StatusCode::NOT_FOUND.into_response();
        };
        let is_dir = tokio::fs::metadata(&fs_path)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);
        let has_index = tokio::fs::metadata(fs_path.join("index.html"))
            .await
            .is_ok();
        if is_dir && !has_index {
            return match directory_listing(&fs_path, &url_path).await {
                Ok(html) => Html(html).into_response(),
                Err(e) => {
                    tracing::warn!("{e}");
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            };
        }
    }

    let req = if url_path == "/" {
        let (mut parts, body) = req.into_parts();
        parts.uri = Uri::from_static("/index.html");
        Request::from_parts(parts, body)
    } else {
        req
    };

    match ServeDir::new(&config.root).oneshot(req).await {
        Ok(res) => res.map(Body::new).into_response(),
        Err(never) => match never {},
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// HTML index of `dir`: directories first, then files, each alphabetical.
pub async fn directory_listing(dir: &FsPath, url_path: &str) -> Result<String, ServerError> {
    let mut entries = tokio::fs::read_dir(dir).await.map_err(ServerError::Listing)?;
    let mut dirs = Vec::new();
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(ServerError::Listing)? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let file_type = entry.file_type().await.map_err(ServerError::Listing)?;
        if file_type.is_dir() {
            dirs.push(name);
        } else {
            files.push(name);
        }
    }
    dirs.sort();
    files.sort();

    let base = if url_path.ends_with('/') {
        url_path.to_string()
    } else {
        format!("{url_path}/")
    };
    let title = escape_html(&percent_decode_str(&base).decode_utf8_lossy());
    let href_base = escape_html(&base);

    let mut items = Vec::new();
    if base != "/" {
        items.push(format!("<li><a href=\"{href_base}../\">../</a></li>"));
    }
    let entries = dirs
        .iter()
        .map(|d| (format!("{}/", utf8_percent_encode(d, SEGMENT)), format!("{d}/")))
        .chain(files.iter().map(|f| (utf8_percent_encode(f, SEGMENT).to_string(), f.clone())));
    for (href, label) in entries {
        items.push(format!(
            "<li><a href=\"{href_base}{}\">{}</a></li>",
            escape_html(&href),
            escape_html(&label)
        ));
    }

    Ok(format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Index of {title}</title></head>\
         <body><h1>Index of {title}</h1><ul>{}</ul></body></html>",
        items.join("")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = tempfile::tempdir().expect("should create temp dir");
        std::fs::write(dir.path().join("index.html"), "<h1>home</h1>").unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets/site.css"), "body {}").unwrap();
        std::fs::write(dir.path().join("assets/app.js"), "1").unwrap();
        std::fs::create_dir(dir.path().join("assets/fonts")).unwrap();
        dir
    }

    fn router(dir: &TempDir) -> Router {
        dev_router(DevServerConfig {
            root: dir.path().to_path_buf(),
            ..Default::default()
        })
    }

    async fn get_path(router: Router, path: &str) -> (StatusCode, http::HeaderMap, String) {
        let req = Request::builder()
            .uri(path)
            .header("origin", "http://example.com")
            .body(Body::empty())
            .unwrap();
        let res = router.oneshot(req).await.unwrap();
        let status = res.status();
        let headers = res.headers().clone();
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, headers, String::from_utf8_lossy(&body).into_owned())
    }

    #[test]
    fn test_default_config() {
        let config = DevServerConfig::default();
        assert_eq!(config.addr(), "localhost:3000");
        assert_eq!(config.root, PathBuf::from("public"));
    }

    #[test]
    fn test_resolve_rejects_parent() {
        let root = FsPath::new("/srv");
        assert_eq!(resolve(root, "/a/b.css"), Some(PathBuf::from("/srv/a/b.css")));
        assert_eq!(resolve(root, "/a/../../etc/passwd"), None);
    }

    #[test]
    fn test_resolve_decodes_segments() {
        let root = FsPath::new("/srv");
        assert_eq!(
            resolve(root, "/my%20docs/a%20b.txt"),
            Some(PathBuf::from("/srv/my docs/a b.txt"))
        );
        assert_eq!(resolve(root, "/%2e%2e/etc"), None);
        assert_eq!(resolve(root, "/a%2Fb"), None);
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let dir = fixture();
        let (status, headers, body) = get_path(router(&dir), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<h1>home</h1>");
        assert_eq!(
            headers.get("access-control-allow-origin").unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_serves_file() {
        let dir = fixture();
        let (status, _, body) = get_path(router(&dir), "/assets/site.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body {}");
    }

    #[tokio::test]
    async fn test_directory_listing() {
        let dir = fixture();
        let (status, _, body) = get_path(router(&dir), "/assets").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Index of /assets/"));
        assert!(body.contains("href=\"/assets/../\""));
        let fonts = body.find("fonts/").unwrap();
        let app = body.find("app.js").unwrap();
        let css = body.find("site.css").unwrap();
        assert!(fonts < app && app < css);
    }

    #[tokio::test]
    async fn test_directory_listing_with_escaped_names() {
        let dir = fixture();
        std::fs::create_dir(dir.path().join("my docs")).unwrap();
        std::fs::write(dir.path().join("my docs/a b.txt"), "ab").unwrap();
        std::fs::write(dir.path().join("my docs/50%#1.txt"), "x").unwrap();

        let (status, _, body) = get_path(router(&dir), "/my%20docs/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Index of /my docs/"));
        assert!(body.contains("href=\"/my%20docs/a%20b.txt\""));
        assert!(body.contains("href=\"/my%20docs/50%25%231.txt\""));

        let (status, _, body) = get_path(router(&dir), "/my%20docs/a%20b.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ab");
    }

    #[tokio::test]
    async fn test_missing_file_is_404() {
        let dir = fixture();
        let (status, _, _) = get_path(router(&dir), "/nope.txt").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_project_api() {
        let api = Router::new().nest("/api", api_router());
        let (status, _, body) = get_path(api.clone(), "/api/projects").await;
        assert_eq!(status, StatusCode::OK);
        let projects: Vec<Project> = serde_json::from_str(&body).unwrap();
        assert_eq!(projects, get_projects().unwrap());

        let slug = projects[0].slug();
        let (status, _, body) = get_path(api.clone(), &format!("/api/projects/{slug}")).await;
        assert_eq!(status, StatusCode::OK);
        let project: Project = serde_json::from_str(&body).unwrap();
        assert_eq!(project, projects[0]);

        let (status, _, _) = get_path(api, "/api/projects/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
