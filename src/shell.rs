//! Line-oriented terminal front-end for the generator screens
//!
//! Every input line maps to one [`Command`] (or a shell-only action such as
//! `status`). Failures are printed as notices and never end the session.

use crate::app::{Command, Controller, Mode, Transition};
use crate::config::OutputOptions;
use crate::error::{Error, Result};
use crate::output::{render_notice, render_screen};
use crate::payload::WifiEncryption;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const HELP: &str = "\
Commands:
  url | wifi                choose a QR code type
  back                      return to the previous screen
  text <value>              set the text or URL
  ssid <value>              set the WiFi network name
  password <value>          set the WiFi password
  security <wpa|wep|nopass> set the WiFi security type
  show-password <on|off>    show or mask the password
  preview                   generate and preview the QR code
  save [path]               save the previewed QR code
  cancel                    dismiss the save prompt
  status                    show the current screen
  help                      show this message
  quit                      leave the shell";

/// One parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellLine {
    /// Forward a command to the controller
    Dispatch(Command),
    /// Save to the configured default path
    SaveDefault,
    /// Redisplay the current screen
    Status,
    /// Print usage
    Help,
    /// End the session
    Quit,
    /// Blank line
    Empty,
}

/// Parse one input line.
///
/// The argument is everything after the first space, kept verbatim so values
/// such as passwords may start or end with spaces.
pub fn parse_line(line: &str) -> Result<ShellLine> {
    let line = line.trim_end_matches(['\r', '\n']).trim_start();
    if line.trim().is_empty() {
        return Ok(ShellLine::Empty);
    }

    let (keyword, arg) = line.split_once(' ').unwrap_or((line, ""));

    let parsed = match keyword.to_ascii_lowercase().as_str() {
        "url" | "text-mode" => ShellLine::Dispatch(Command::SelectMode(Mode::Url)),
        "wifi" => ShellLine::Dispatch(Command::SelectMode(Mode::Wifi)),
        "back" => ShellLine::Dispatch(Command::Back),
        "text" => ShellLine::Dispatch(Command::SetText(arg.to_string())),
        "ssid" => ShellLine::Dispatch(Command::SetSsid(arg.to_string())),
        "password" => ShellLine::Dispatch(Command::SetPassword(arg.to_string())),
        "security" => {
            let encryption = arg.parse::<WifiEncryption>().map_err(Error::InvalidCommand)?;
            ShellLine::Dispatch(Command::SetEncryption(encryption))
        }
        "show-password" => ShellLine::Dispatch(Command::ShowPassword(parse_toggle(arg)?)),
        "preview" => ShellLine::Dispatch(Command::Preview),
        "save" if arg.trim().is_empty() => ShellLine::SaveDefault,
        "save" => ShellLine::Dispatch(Command::Save(Some(arg.trim().into()))),
        "cancel" => ShellLine::Dispatch(Command::Save(None)),
        "status" => ShellLine::Status,
        "help" | "?" => ShellLine::Help,
        "quit" | "exit" => ShellLine::Quit,
        other => return Err(Error::InvalidCommand(format!("unknown command '{other}'"))),
    };

    Ok(parsed)
}

fn parse_toggle(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Ok(true),
        "off" | "false" | "0" | "no" => Ok(false),
        other => Err(Error::InvalidCommand(format!(
            "expected 'on' or 'off', got '{other}'"
        ))),
    }
}

/// Run the shell until `quit` or end of input.
pub async fn run<R, W>(
    reader: R,
    writer: &mut W,
    controller: &mut Controller,
    output: &OutputOptions,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_lines(writer, &render_screen(controller.state())).await?;

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let parsed = match parse_line(&line) {
            Ok(parsed) => parsed,
            Err(err) => {
                write_lines(writer, &[render_notice(&err)]).await?;
                continue;
            }
        };

        let command = match parsed {
            ShellLine::Empty => continue,
            ShellLine::Quit => break,
            ShellLine::Help => {
                write_lines(writer, &[HELP.to_string()]).await?;
                continue;
            }
            ShellLine::Status => {
                write_lines(writer, &render_screen(controller.state())).await?;
                continue;
            }
            ShellLine::SaveDefault => Command::Save(Some(output.suggested_path())),
            ShellLine::Dispatch(Command::Save(Some(path))) => {
                Command::Save(Some(output.resolve(Some(path.as_path()))))
            }
            ShellLine::Dispatch(command) => command,
        };

        let response = match controller.dispatch(command) {
            Ok(Transition::Navigated { .. }) => render_screen(controller.state()),
            Ok(Transition::Saved { path, .. }) => {
                vec![format!("info: QR Code saved to:\n{}", path.display())]
            }
            Ok(Transition::Updated | Transition::Dismissed) => Vec::new(),
            Err(err) => vec![render_notice(&err)],
        };
        write_lines(writer, &response).await?;
    }

    writer.flush().await?;
    Ok(())
}

async fn write_lines<W>(writer: &mut W, lines: &[String]) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    for line in lines {
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }
    writer.flush().await?;
    Ok(())
}
