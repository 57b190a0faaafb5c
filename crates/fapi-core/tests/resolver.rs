//! Template resolution against a mock remote store and a local override
//! directory

use fapi_core::{TemplateOrigin, TemplateResolver};
use std::path::Path;
use url::Url;

fn resolver(base: &str, override_dir: Option<&Path>) -> TemplateResolver {
    TemplateResolver::new(
        override_dir.map(|p| p.to_path_buf()),
        Url::parse(base).unwrap(),
    )
}

#[tokio::test]
async fn remote_store_serves_template() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/templates/main.py")
        .with_status(200)
        .with_body("app for {{PROJECT_NAME}}")
        .create_async()
        .await;

    let r = resolver(&server.url(), None);
    let resolved = r.resolve("main.py").await.unwrap();

    assert_eq!(resolved.origin, TemplateOrigin::Remote);
    assert_eq!(resolved.content, "app for {{PROJECT_NAME}}");
}

#[tokio::test]
async fn nested_template_ids_map_to_nested_paths() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/templates/licenses/mit")
        .with_status(200)
        .with_body("MIT {{YEAR}} {{AUTHOR_NAME}}")
        .create_async()
        .await;

    let r = resolver(&server.url(), None);
    let resolved = r.resolve("licenses/mit").await.unwrap();
    assert_eq!(resolved.origin, TemplateOrigin::Remote);
}

#[tokio::test]
async fn non_success_status_reports_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/templates/main.py")
        .with_status(404)
        .create_async()
        .await;

    let r = resolver(&server.url(), None);
    let err = r.resolve("main.py").await.unwrap_err();
    assert_eq!(err.id, "main.py");
}

#[tokio::test]
async fn connection_failure_reports_not_found() {
    // Nothing listens on port 1
    let r = resolver("http://127.0.0.1:1", None);
    assert!(r.resolve("main.py").await.is_err());
}

#[tokio::test]
async fn local_override_wins_over_remote() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/templates/main.py")
        .with_status(200)
        .with_body("remote version")
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let templates = dir.path().join("templates");
    std::fs::create_dir_all(&templates).unwrap();
    std::fs::write(templates.join("main.py"), "local version").unwrap();

    let r = resolver(&server.url(), Some(dir.path()));
    let resolved = r.resolve("main.py").await.unwrap();

    assert_eq!(resolved.origin, TemplateOrigin::Local);
    assert_eq!(resolved.content, "local version");
}

#[tokio::test]
async fn override_dir_is_per_file_not_per_directory() {
    // The override dir exists but lacks this specific file; remote must
    // still be attempted.
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/templates/gitignore")
        .with_status(200)
        .with_body("*.pyc\n")
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("templates")).unwrap();

    let r = resolver(&server.url(), Some(dir.path()));
    let resolved = r.resolve("gitignore").await.unwrap();
    assert_eq!(resolved.origin, TemplateOrigin::Remote);
}
