//! Local static server for the built site
//!
//! Serves `dist_dir` over HTTP/1 through `tower_http`'s `ServeDir`. Unknown
//! extensionless paths fall back to `index.html` so in-page anchors and
//! client routes survive a reload.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use http_body_util::combinators::UnsyncBoxBody;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::header::{HeaderValue, CACHE_CONTROL, CONTENT_TYPE};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

use folio_core::prelude::*;

const INDEX_FILE: &str = "index.html";

/// Pause after a failed `accept` so a persistent error (EMFILE) does not spin
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

pub type ResponseBody = UnsyncBoxBody<Bytes, std::io::Error>;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
}

/// Bind and serve until Ctrl-C
pub async fn run(config: ServerConfig) -> Result<()> {
    if !config.dist_dir.join(INDEX_FILE).is_file() {
        warn!(
            "{} has no {}; build the website first",
            config.dist_dir.display(),
            INDEX_FILE
        );
    }

    let listener = bind(config.port).await?;

    tokio::select! {
        _ = serve(listener, config.dist_dir) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down");
        }
    }
    Ok(())
}

/// Listen on all interfaces; port 0 picks a free port
pub async fn bind(port: u16) -> Result<TcpListener> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| Error::server(format!("Failed to bind {}: {}", addr, e)))?;
    info!("Serving on http://{}", listener.local_addr()?);
    Ok(listener)
}

/// Accept connections forever, one task per connection
pub async fn serve(listener: TcpListener, root: PathBuf) {
    let root = Arc::new(root);

    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(s) => s,
            Err(e) => {
                back_off(&e).await;
                continue;
            }
        };
        let root = root.clone();

        tokio::spawn(async move {
            let io = TokioIo::new(socket);
            let service = service_fn(move |req: Request<hyper::body::Incoming>| {
                let root = root.clone();
                async move { Ok::<_, Infallible>(respond(&root, req).await) }
            });
            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                debug!("Connection from {} ended with error: {}", peer, err);
            }
        });
    }
}

async fn back_off(error: &std::io::Error) {
    warn!("Failed to accept connection: {}", error);
    tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
}

/// Whether the raw request path tries to climb out of the site root
fn escapes_root(url_path: &str) -> bool {
    url_path.split('/').any(|segment| segment == "..")
}

/// Client routes have no extension; missing assets do
fn wants_index(url_path: &str) -> bool {
    Path::new(url_path).extension().is_none()
}

/// Build the response for one request
pub async fn respond<B>(root: &Path, req: Request<B>) -> Response<ResponseBody>
where
    B: Send + 'static,
{
    let method = req.method().clone();
    let url_path = req.uri().path().to_string();

    if escapes_root(&url_path) {
        warn!("Refusing path outside the site root: {}", url_path);
        return text_response(StatusCode::FORBIDDEN, "Forbidden");
    }

    let mut response = match ServeDir::new(root).oneshot(req).await {
        Ok(response) => response.map(|body| body.boxed_unsync()),
        Err(never) => match never {},
    };

    if response.status() == StatusCode::NOT_FOUND && is_readable(&method) && wants_index(&url_path) {
        response = serve_index(root, method.clone()).await;
    }

    set_cache_control(&mut response);
    debug!("{} {} -> {}", method, url_path, response.status());
    response
}

fn is_readable(method: &Method) -> bool {
    *method == Method::GET || *method == Method::HEAD
}

async fn serve_index(root: &Path, method: Method) -> Response<ResponseBody> {
    let mut request = Request::new(());
    *request.method_mut() = method;
    match ServeFile::new(root.join(INDEX_FILE)).oneshot(request).await {
        Ok(response) => response.map(|body| body.boxed_unsync()),
        Err(never) => match never {},
    }
}

/// The HTML shell must be revalidated; hashed assets may be cached
fn set_cache_control(response: &mut Response<ResponseBody>) {
    if !response.status().is_success() {
        return;
    }
    let is_html = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("text/html"));
    let cache = if is_html {
        "no-cache"
    } else {
        "public, max-age=3600"
    };
    response
        .headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static(cache));
}

fn text_response(status: StatusCode, body: &'static str) -> Response<ResponseBody> {
    let body = Full::new(Bytes::from_static(body.as_bytes()))
        .map_err(|_: Infallible| std::io::Error::other("never"))
        .boxed_unsync();
    let mut response = Response::new(body);
    *response.status_mut() = status;
    response.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_accept_error_backs_off() {
        let error = std::io::Error::other("too many open files");
        let start = tokio::time::Instant::now();

        back_off(&error).await;

        assert!(start.elapsed() >= ACCEPT_RETRY_DELAY);
    }

    #[test]
    fn test_escapes_root() {
        assert!(escapes_root("/../etc/passwd"));
        assert!(escapes_root("/assets/../../etc/passwd"));
        assert!(!escapes_root("/assets/app.js"));
        assert!(!escapes_root("/a..b/file.txt"));
    }

    #[test]
    fn test_wants_index_only_for_extensionless_paths() {
        assert!(wants_index("/"));
        assert!(wants_index("/projects"));
        assert!(!wants_index("/assets/missing.png"));
        assert!(!wants_index("/site_bg.wasm"));
    }
}
