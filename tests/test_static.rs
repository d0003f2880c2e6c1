use battery_beacon::http::response::StatusCode;
use battery_beacon::routes::static_files::file_response;
use battery_beacon::routes::StaticFileResolver;
use std::fs;
use std::path::Path;

#[test]
fn test_resolve_is_relative_to_root() {
    let files = StaticFileResolver::new("/srv/www");

    assert_eq!(files.resolve("/public/demo.html"), Path::new("/srv/www/public/demo.html"));
    assert_eq!(files.resolve("//x"), Path::new("/srv/www/x"));
}

#[test]
fn test_existing_file_is_served_byte_for_byte() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir_all(root.path().join("existing")).unwrap();
    let content = b"line one\r\nline two\x00\xff".to_vec();
    fs::write(root.path().join("existing/file.txt"), &content).unwrap();

    let files = StaticFileResolver::new(root.path());
    assert_eq!(files.read("/existing/file.txt").unwrap(), content);

    let response = file_response(&files, "/existing/file.txt");
    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.body, content);
    assert_eq!(response.header("Content-Type"), None);
}

#[test]
fn test_missing_file_is_not_found() {
    let root = tempfile::tempdir().unwrap();
    let files = StaticFileResolver::new(root.path());

    let err = files.read("/missing.txt").unwrap_err();
    assert_eq!(err.path, root.path().join("missing.txt"));

    let response = file_response(&files, "/missing.txt");
    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.body, b"File Not Found: /missing.txt".to_vec());
}

#[test]
fn test_directory_is_not_found() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir_all(root.path().join("public")).unwrap();
    let files = StaticFileResolver::new(root.path());

    assert!(files.read("/public").is_err());
    assert!(files.read("/").is_err());
    assert_eq!(file_response(&files, "/").status, StatusCode::NotFound);
}

#[test]
fn test_parent_segments_are_not_rewritten() {
    let outer = tempfile::tempdir().unwrap();
    fs::create_dir_all(outer.path().join("root")).unwrap();
    fs::write(outer.path().join("outside.txt"), b"outside").unwrap();

    let files = StaticFileResolver::new(outer.path().join("root"));
    assert_eq!(files.read("/../outside.txt").unwrap(), b"outside".to_vec());
}
