use serde_json::Value;
use std::fs;
use todo_progress_cli::{run, run_with, EmployeeArgs, Format, RunError};
use todo_progress_client::{FetchError, TodoApiClient};
use todo_progress_core::EmployeeId;
use todo_progress_export::{ConsoleExporter, CsvExporter, JsonExporter};

const TODOS: &str = r#"[
    {"userId": 7, "id": 1, "title": "Task A", "completed": true},
    {"userId": 7, "id": 2, "title": "Task B", "completed": false},
    {"userId": 7, "id": 3, "title": "Task C, with comma", "completed": true}
]"#;

const USER: &str = r#"{"id": 7, "name": "Jane Doe", "username": "jdoe"}"#;

async fn api(todos_status: usize, user_status: usize) -> mockito::ServerGuard {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/users/7/todos")
        .with_status(todos_status)
        .with_header("content-type", "application/json")
        .with_body(TODOS)
        .create_async()
        .await;
    server
        .mock("GET", "/users/7")
        .with_status(user_status)
        .with_header("content-type", "application/json")
        .with_body(USER)
        .create_async()
        .await;
    server
}

fn id() -> EmployeeId {
    EmployeeId::new(7).unwrap()
}

#[tokio::test]
async fn test_console_summary() {
    let server = api(200, 200).await;
    let client = TodoApiClient::new(server.url()).unwrap();
    let exporter = ConsoleExporter::new(Vec::new());

    let report = run_with(&client, &exporter, id()).await.unwrap();

    assert_eq!(report.rows, 2);
    assert_eq!(
        String::from_utf8(exporter.into_inner()).unwrap(),
        "Employee Jane Doe is done with tasks(2/3):\n\t Task A\n\t Task C, with comma\n"
    );
}

#[tokio::test]
async fn test_csv_round_trip() {
    let server = api(200, 200).await;
    let dir = tempfile::tempdir().unwrap();
    let client = TodoApiClient::new(server.url()).unwrap();

    let report = run_with(&client, &CsvExporter::new(dir.path()), id())
        .await
        .unwrap();

    let path = dir.path().join("7.csv");
    assert_eq!(report.destination.as_deref(), Some(path.as_path()));

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let header = reader.headers().unwrap().clone();
    assert_eq!(
        header.iter().collect::<Vec<_>>(),
        vec!["USER_ID", "USERNAME", "TASK_COMPLETED_STATUS", "TASK_TITLE"]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows.iter().filter(|r| &r[2] == "True").count(), 2);
    assert!(rows.iter().all(|r| &r[0] == "7" && &r[1] == "jdoe"));
    assert_eq!(&rows[2][3], "Task C, with comma");
}

#[tokio::test]
async fn test_json_round_trip() {
    let server = api(200, 200).await;
    let dir = tempfile::tempdir().unwrap();
    let client = TodoApiClient::new(server.url()).unwrap();

    run_with(&client, &JsonExporter::new(dir.path()), id())
        .await
        .unwrap();

    let raw = fs::read_to_string(dir.path().join("7.json")).unwrap();
    let document: Value = serde_json::from_str(&raw).unwrap();
    let entries = document["7"].as_array().unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(
        entries.iter().filter(|e| e["completed"] == Value::Bool(true)).count(),
        2
    );
    assert!(entries.iter().all(|e| e["username"] == "jdoe"));
    assert_eq!(entries[1]["task"], "Task B");
}

#[tokio::test]
async fn test_owner_failure_writes_nothing() {
    let server = api(200, 404).await;
    let dir = tempfile::tempdir().unwrap();
    let client = TodoApiClient::new(server.url()).unwrap();

    let csv = run_with(&client, &CsvExporter::new(dir.path()), id()).await;
    let json = run_with(&client, &JsonExporter::new(dir.path()), id()).await;

    assert!(matches!(
        csv,
        Err(RunError::Fetch(FetchError::OwnerUnavailable { status: 404 }))
    ));
    assert!(json.is_err());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_tasks_failure_exit_code() {
    let server = api(503, 200).await;
    let dir = tempfile::tempdir().unwrap();

    let args = EmployeeArgs {
        employee_id: id(),
        base_url: server.url(),
        output_dir: dir.path().to_path_buf(),
    };

    let err = run(Format::Json, &args).await.unwrap_err();

    assert_eq!(err.exit_code(), todo_progress_cli::EXIT_FETCH);
    assert_eq!(err.headline().as_deref(), Some("Failed to retrieve TODO list."));
    assert!(!dir.path().join("7.json").exists());
}

#[tokio::test]
async fn test_run_writes_into_output_dir() {
    let server = api(200, 200).await;
    let dir = tempfile::tempdir().unwrap();

    let args = EmployeeArgs {
        employee_id: id(),
        base_url: server.url(),
        output_dir: dir.path().to_path_buf(),
    };

    let first = run(Format::Csv, &args).await.unwrap();
    let bytes = fs::read(dir.path().join("7.csv")).unwrap();
    let second = run(Format::Csv, &args).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(fs::read(dir.path().join("7.csv")).unwrap(), bytes);
}
