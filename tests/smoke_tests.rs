//! Smoke tests for overall application functionality
//!
//! High-level checks that the pieces work together end to end

use tally::config::ConfigManager;
use tally::App;
use tempfile::TempDir;

#[test]
fn test_config_file_to_rendered_app() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{ "editor": { "initialText": "from the config" }, "ui": { "spanMarker": "glyph" } }"#,
    )
    .unwrap();

    let mut manager = ConfigManager::new(temp_dir.path());
    manager.load().unwrap();
    let app = App::with_config(manager.into_config(), temp_dir.path().to_path_buf());

    assert_eq!(app.editor.surface().word_count_text(), "03");
    assert_eq!(app.editor.surface().query("glyph").count(), 15);
    assert_eq!(app.input.value(), "from the config");
}

#[test]
fn test_load_from_directory_smoke_test() {
    let temp_dir = TempDir::new().unwrap();
    let user_dir = temp_dir.path().join("tally");

    let mut app = tokio_test::block_on(App::load(user_dir.clone())).unwrap();
    assert!(user_dir.exists());
    assert!(app.running);

    app.fill("Hello World");
    assert_eq!(app.editor.surface().word_count_text(), "02");
    assert_eq!(app.editor.surface().char_spans().len(), 11);
}

#[test]
fn test_load_rejects_broken_config() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("config.json"), "{ broken").unwrap();

    let result = tokio_test::block_on(App::load(temp_dir.path().to_path_buf()));
    assert!(result.is_err());
}

#[test]
fn test_editing_session_smoke_test() {
    let mut app = App::default();

    app.fill("Test");
    assert_eq!(app.editor.surface().display_text(), "Test");

    app.fill("Hello");
    assert_eq!(app.editor.surface().display_text(), "Hello");
    assert_eq!(app.editor.surface().char_spans().len(), 5);

    app.fill("");
    assert_eq!(app.editor.surface().word_count_text(), "00");
    assert_eq!(app.status_bar.get_slot("chars").unwrap().content, "chars 0");
}
