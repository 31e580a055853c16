//! Helpers for rendering generated codes and screen state for the terminal

use crate::app::{AppState, Screen};
use crate::config::OutputOptions;
use crate::error::{Error, Result};
use crate::export;
use crate::payload::{QrPayload, WifiCredentials, WifiEncryption, build_text_payload};
use crate::qr::{GeneratedImage, QrDecoder, QrEncoder};
use image::ImageFormat;
use serde_json::{Map, Value, json};
use std::path::{Path, PathBuf};
use tracing::info;

/// Combined structured and human-readable representation of a generated code
#[derive(Debug, Clone)]
pub struct RenderedQr {
    /// Structured JSON representation suitable for scripting
    pub json: Value,
    /// Human-readable lines for terminal presentation
    pub human: Vec<String>,
}

/// Content requested by a one-shot generate command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrSource {
    /// Free-form text or a URL
    Text(String),
    /// WiFi network credentials
    Wifi(WifiCredentials),
}

impl QrSource {
    fn payload(&self) -> Result<QrPayload> {
        let payload = match self {
            Self::Text(text) => build_text_payload(text)?,
            Self::Wifi(credentials) => credentials.to_payload()?,
        };
        Ok(payload)
    }
}

/// Per-invocation switches for [`generate`]
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Destination image; resolved against [`OutputOptions`] when relative or absent
    pub path: Option<PathBuf>,
    /// Decode the rendered image and compare it with the payload before saving
    pub verify: bool,
    /// Prepend the terminal drawing to the human-readable lines
    pub print: bool,
}

/// Build, encode and save a code in one step.
///
/// Nothing is written when the payload is rejected or verification fails.
pub fn generate(
    source: &QrSource,
    options: &GenerateOptions,
    output: &OutputOptions,
) -> Result<RenderedQr> {
    let payload = source.payload()?;
    let generated = QrEncoder::new().encode(&payload)?;

    if options.verify {
        QrDecoder::new().verify(generated.image(), generated.payload())?;
        info!("Rendered image decodes to the expected payload");
    }

    let path = output.resolve(options.path.as_deref());
    let format = export::save(&generated, &path)?;
    let mut rendered = render_generated(&generated, Some((path.as_path(), format)));

    if options.print {
        let drawing = generated.terminal().lines().map(str::to_string);
        rendered.human.splice(0..0, drawing);
    }
    Ok(rendered)
}

/// Render a generated code, and where it was saved, into JSON and text forms.
pub fn render_generated(
    generated: &GeneratedImage,
    saved: Option<(&Path, ImageFormat)>,
) -> RenderedQr {
    let mut root = Map::new();
    root.insert(
        "payload".to_string(),
        Value::String(generated.payload().as_str().to_string()),
    );
    root.insert(
        "byte_length".to_string(),
        Value::from(generated.payload().as_bytes().len()),
    );
    root.insert("version".to_string(), Value::from(generated.version()));
    root.insert("modules".to_string(), Value::from(generated.modules()));
    root.insert(
        "image".to_string(),
        json!({ "width": generated.width(), "height": generated.height() }),
    );

    let mut human = vec![
        format!("  Payload: {}", format_text_snippet(generated.payload().as_str())),
        format!(
            "  Version: {} ({}x{} modules)",
            generated.version(),
            generated.modules(),
            generated.modules()
        ),
        format!("  Image: {}x{} px", generated.width(), generated.height()),
    ];

    if let Some((path, format)) = saved {
        root.insert(
            "saved".to_string(),
            json!({
                "path": path.display().to_string(),
                "format": format_label(format),
            }),
        );
        human.push(format!("QR Code saved to:\n{}", path.display()));
    }

    RenderedQr {
        json: Value::Object(root),
        human,
    }
}

/// Describe the active screen and its fields, one line each.
pub fn render_screen(state: &AppState) -> Vec<String> {
    let mut lines = vec![format!("== {} ==", state.screen().title())];

    match state.screen() {
        Screen::ModeSelect => {
            lines.push("Choose QR Code Type".to_string());
            lines.push("  url   URL / Text Mode".to_string());
            lines.push("  wifi  WiFi Mode".to_string());
        }
        Screen::UrlInput => {
            lines.push(format!("  Text or URL: {}", state.url_text()));
        }
        Screen::WifiInput => {
            if let Some(form) = state.wifi() {
                lines.push(format!("  SSID: {}", form.credentials.ssid));
                lines.push(format!("  Password: {}", form.display_password()));
                lines.push(format!(
                    "  Show password: {}",
                    if form.show_password { "on" } else { "off" }
                ));
                lines.push(format!(
                    "  Security: {}",
                    security_choices(form.encryption())
                ));
            }
        }
        Screen::Preview => {
            if let Some(title) = state.preview_title() {
                lines.push(title.to_string());
            }
            if let Some(generated) = state.generated() {
                lines.extend(generated.terminal().lines().map(str::to_string));
            }
        }
    }

    lines
}

/// Prefix an error with its severity for display as a notice.
pub fn render_notice(err: &Error) -> String {
    if err.is_warning() {
        format!("warning: {err}")
    } else {
        format!("error: {err}")
    }
}

fn security_choices(selected: WifiEncryption) -> String {
    WifiEncryption::ALL
        .iter()
        .map(|option| {
            if *option == selected {
                format!("[{}]", option.label())
            } else {
                option.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_label(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "png",
        ImageFormat::Jpeg => "jpeg",
        _ => format.extensions_str().first().copied().unwrap_or("unknown"),
    }
}

fn format_text_snippet(text: &str) -> String {
    const MAX: usize = 120;
    if text.chars().count() <= MAX {
        text.to_string()
    } else {
        let snippet: String = text.chars().take(MAX).collect();
        let total = text.chars().count();
        format!("{}... ({} chars)", snippet, total)
    }
}
