use qrgen::config::OutputOptions;
use qrgen::{AppMode, Controller, QrDecoder, Screen, shell};

async fn run_script(script: &str, output: &OutputOptions) -> (Controller, String) {
    let mut controller = Controller::new();
    let mut out = Vec::new();
    shell::run(script.as_bytes(), &mut out, &mut controller, output)
        .await
        .expect("shell session");
    (controller, String::from_utf8(out).expect("utf-8 output"))
}

fn output_in(dir: &std::path::Path) -> OutputOptions {
    OutputOptions {
        directory: Some(dir.to_path_buf()),
        ..OutputOptions::default()
    }
}

#[tokio::test]
async fn wifi_session_saves_decodable_image() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = "wifi\nssid Home\npassword secret123\nsecurity wpa\npreview\nsave\nquit\n";

    let (controller, transcript) = run_script(script, &output_in(dir.path())).await;

    assert!(transcript.starts_with("== QR Code Generator =="));
    assert!(transcript.contains("== WiFi Mode =="));
    assert!(transcript.contains("WiFi QR Code"));
    assert!(
        transcript.contains("info: QR Code saved to:"),
        "unexpected transcript: {transcript}"
    );
    assert_eq!(controller.state().screen(), Screen::Preview);

    let saved = dir.path().join("qrcode.png");
    let image = image::open(&saved).expect("saved png");
    let decoded = QrDecoder::new().decode(&image).expect("decode saved png");
    assert_eq!(decoded.as_str(), "WIFI:T:WPA;S:Home;P:secret123;;");
}

#[tokio::test]
async fn validation_errors_keep_the_screen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = "url\ntext    \npreview\nwifi\n";

    let (controller, transcript) = run_script(script, &output_in(dir.path())).await;

    assert!(transcript.contains("warning: Please enter text or URL for the QR code!"));
    assert!(transcript.contains("error: 'wifi' is not available on the URL / Text Mode screen"));
    assert_eq!(controller.state().screen(), Screen::UrlInput);
    assert_eq!(controller.state().mode(), AppMode::Url);
}

#[tokio::test]
async fn back_from_preview_returns_to_input() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = "url\ntext https://example.com\npreview\nback\n";

    let (controller, transcript) = run_script(script, &output_in(dir.path())).await;

    assert!(transcript.contains("URL/Text QR Code"));
    assert_eq!(controller.state().screen(), Screen::UrlInput);
    assert_eq!(controller.state().url_text(), "");
    assert!(controller.state().generated().is_none());
}

#[tokio::test]
async fn save_without_code_and_cancel() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = "save\nwifi\nssid Cafe\nsecurity nopass\npreview\ncancel\nsave custom.jpg\n";

    let (controller, transcript) = run_script(script, &output_in(dir.path())).await;

    assert!(transcript.contains("error: 'save' is not available on the QR Code Generator screen"));
    assert!(controller.state().generated().is_some());
    assert!(dir.path().join("custom.jpg").exists());
    assert!(!dir.path().join("qrcode.png").exists());
}

#[tokio::test]
async fn failed_save_keeps_image_for_retry() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = "url\ntext retry me\npreview\nsave missing/dir/out.png\nsave out.png\n";

    let (controller, transcript) = run_script(script, &output_in(dir.path())).await;

    assert!(transcript.contains("error: Failed to save QR code:"));
    assert!(controller.state().generated().is_some());
    assert!(dir.path().join("out.png").exists());
}

#[tokio::test]
async fn unknown_lines_are_reported_and_ignored() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (controller, transcript) =
        run_script("dance\nshow-password sometimes\n\nhelp\n", &output_in(dir.path())).await;

    assert!(transcript.contains("warning: Invalid command: unknown command 'dance'"));
    assert!(transcript.contains("Commands:"));
    assert_eq!(controller.state().screen(), Screen::ModeSelect);
}
