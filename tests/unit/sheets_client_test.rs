//! Unit tests for the SheetsClient transport, using a minimal HTTP stub
//! server on a local TCP port. The stub captures every request it receives
//! so tests can assert on method, target, and body — including that exactly
//! one request is issued per operation (no retries).

use std::sync::{Arc, Mutex};

use rstest::rstest;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use themesheet::services::sheets_client::{theme_from_row, SheetsClient, HEADER_ROW_OFFSET};
use themesheet::types::errors::SheetsError;
use themesheet::types::theme::{ThemeDraft, ThemeStatus};

#[derive(Debug, Clone)]
struct CapturedRequest {
    method: String,
    target: String,
    body: String,
}

/// Minimal single-purpose HTTP server: answers every request with a fixed
/// status and body, recording each request as it arrives.
struct StubServer {
    url: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl StubServer {
    async fn start(status: u16, response_body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub server");
        let addr = listener.local_addr().expect("local addr");
        let requests: Arc<Mutex<Vec<CapturedRequest>>> = Arc::new(Mutex::new(Vec::new()));

        let captured = requests.clone();
        let response_body = response_body.to_string();
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let request = read_request(&mut socket).await;
                captured.lock().unwrap().push(request);

                let response = format!(
                    "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    response_body.len(),
                    response_body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Self {
            url: format!("http://{}", addr),
            requests,
        }
    }

    fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Reads one HTTP request (request line, headers, and a Content-Length body).
async fn read_request(socket: &mut TcpStream) -> CapturedRequest {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];

    let header_end = loop {
        if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
        let n = socket.read(&mut buf).await.expect("read request");
        if n == 0 {
            break data.len();
        }
        data.extend_from_slice(&buf[..n]);
    };

    let head = String::from_utf8_lossy(&data[..header_end]).to_string();
    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())?
        })
        .unwrap_or(0);

    while data.len() < header_end + content_length {
        let n = socket.read(&mut buf).await.expect("read body");
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);
    }

    let mut request_line = head.lines().next().unwrap_or_default().split(' ');
    let method = request_line.next().unwrap_or_default().to_string();
    let target = request_line.next().unwrap_or_default().to_string();
    let body = String::from_utf8_lossy(&data[header_end..]).to_string();

    CapturedRequest { method, target, body }
}

fn draft(title: &str, description: &str, done: ThemeStatus) -> ThemeDraft {
    ThemeDraft {
        title: title.to_string(),
        description: description.to_string(),
        done,
    }
}

// === list_themes ===

#[tokio::test]
async fn test_list_themes_maps_rows_positionally() {
    let server =
        StubServer::start(200, r#"[["2024-01-01 10:00","Title A","Desc A","NÃO"]]"#).await;
    let client = SheetsClient::new(&server.url);

    let themes = client.list_themes().await.unwrap();
    assert_eq!(themes.len(), 1);
    assert_eq!(themes[0].id, Some(2));
    assert_eq!(themes[0].timestamp, "2024-01-01 10:00");
    assert_eq!(themes[0].title, "Title A");
    assert_eq!(themes[0].description, "Desc A");
    assert_eq!(themes[0].done, ThemeStatus::NotDone);

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert!(
        requests[0].target.contains("directive=getAll"),
        "getAll directive must travel as a query parameter: {}",
        requests[0].target
    );
}

#[tokio::test]
async fn test_list_themes_row_ids_are_sequential_from_two() {
    let server = StubServer::start(
        200,
        r#"[["t1","A","",""],["t2","B","","SIM"],["t3","C","","NÃO"]]"#,
    )
    .await;
    let client = SheetsClient::new(&server.url);

    let themes = client.list_themes().await.unwrap();
    let ids: Vec<Option<u32>> = themes.iter().map(|t| t.id).collect();
    assert_eq!(ids, [Some(2), Some(3), Some(4)]);
    assert_eq!(themes[1].done, ThemeStatus::Done);
}

#[tokio::test]
async fn test_list_themes_empty_sheet() {
    let server = StubServer::start(200, "[]").await;
    let client = SheetsClient::new(&server.url);
    assert!(client.list_themes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_themes_non_success_status() {
    let server = StubServer::start(500, "").await;
    let client = SheetsClient::new(&server.url);

    match client.list_themes().await {
        Err(SheetsError::RequestFailed { directive, status }) => {
            assert_eq!(directive, "getAll");
            assert_eq!(status, 500);
        }
        other => panic!("expected RequestFailed, got {:?}", other),
    }
    assert_eq!(server.requests().len(), 1, "no retry may be attempted");
}

#[tokio::test]
async fn test_list_themes_unparseable_body() {
    let server = StubServer::start(200, "this is not json").await;
    let client = SheetsClient::new(&server.url);
    assert!(matches!(
        client.list_themes().await,
        Err(SheetsError::InvalidResponse(_))
    ));
}

// === mutations ===

#[tokio::test]
async fn test_create_theme_sends_one_create_directive() {
    let server = StubServer::start(200, "").await;
    let client = SheetsClient::new(&server.url);

    client
        .create_theme(&draft("T", "D", ThemeStatus::NotDone))
        .await
        .unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 1, "exactly one request per operation");
    assert_eq!(requests[0].method, "POST");

    let body: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(body["directive"], "create");
    assert_eq!(body["title"], "T");
    assert_eq!(body["description"], "D");
    assert_eq!(body["done"], "NÃO");
    assert!(
        !body["timestamp"].as_str().unwrap_or_default().is_empty(),
        "create must carry a client-computed timestamp"
    );
}

#[tokio::test]
async fn test_create_theme_failure_is_not_retried() {
    let server = StubServer::start(404, "").await;
    let client = SheetsClient::new(&server.url);

    match client.create_theme(&draft("T", "", ThemeStatus::Done)).await {
        Err(SheetsError::RequestFailed { directive, status }) => {
            assert_eq!(directive, "create");
            assert_eq!(status, 404);
        }
        other => panic!("expected RequestFailed, got {:?}", other),
    }
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn test_update_theme_carries_row_index_and_no_timestamp() {
    let server = StubServer::start(200, "").await;
    let client = SheetsClient::new(&server.url);

    client
        .update_theme(5, &draft("New title", "New desc", ThemeStatus::Done))
        .await
        .unwrap();

    let body: serde_json::Value = serde_json::from_str(&server.requests()[0].body).unwrap();
    assert_eq!(body["directive"], "update");
    assert_eq!(body["rowIndex"], 5);
    assert_eq!(body["title"], "New title");
    assert_eq!(body["done"], "SIM");
    assert!(
        body.get("timestamp").is_none(),
        "update must not recompute the timestamp"
    );
}

#[tokio::test]
async fn test_delete_theme_carries_only_row_index() {
    let server = StubServer::start(200, "").await;
    let client = SheetsClient::new(&server.url);

    client.delete_theme(9).await.unwrap();

    let body: serde_json::Value = serde_json::from_str(&server.requests()[0].body).unwrap();
    assert_eq!(body["directive"], "delete");
    assert_eq!(body["rowIndex"], 9);
    assert!(body.get("title").is_none());
}

// === preconditions & transport ===

#[tokio::test]
async fn test_unconfigured_client_fails_before_any_network_call() {
    assert!(matches!(
        SheetsClient::from_config(None),
        Err(SheetsError::NotConfigured)
    ));
}

#[tokio::test]
async fn test_connection_refused_surfaces_as_transport_error() {
    // Bind to get a free port, then drop the listener so nothing answers.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = SheetsClient::new(format!("http://{}", addr));
    assert!(matches!(
        client.list_themes().await,
        Err(SheetsError::Transport(_))
    ));
}

// === row mapping ===

#[rstest]
#[case(0, &["2024-01-01 10:00", "Title A", "Desc A", "SIM"], 2, "Title A", ThemeStatus::Done)]
#[case(3, &["t", "Title B", "", "NÃO"], 5, "Title B", ThemeStatus::NotDone)]
#[case(1, &["t", "short row"], 3, "short row", ThemeStatus::NotDone)]
#[case(0, &[], 2, "", ThemeStatus::NotDone)]
#[case(0, &["t", "X", "d", "garbage"], 2, "X", ThemeStatus::NotDone)]
fn test_theme_from_row_cases(
    #[case] index: usize,
    #[case] row: &[&str],
    #[case] expected_id: u32,
    #[case] expected_title: &str,
    #[case] expected_done: ThemeStatus,
) {
    let row: Vec<String> = row.iter().map(|s| s.to_string()).collect();
    let theme = theme_from_row(index, &row);
    assert_eq!(theme.id, Some(expected_id));
    assert_eq!(theme.title, expected_title);
    assert_eq!(theme.done, expected_done);
}

#[test]
fn test_header_row_offset_reserves_header() {
    assert_eq!(HEADER_ROW_OFFSET, 2);
    let theme = theme_from_row(0, &["a".to_string()]);
    assert_eq!(theme.id, Some(2), "first data row sits below the header");
}
