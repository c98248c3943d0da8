//! Line-oriented operator console.
//!
//! Commands: `mask <device>`, `unmask <device>`, `status`, `exit`/`quit`.
//! Device names are case-sensitive substrings matched against
//! {keyboard, mouse, printer}. Unrecognized input produces a diagnostic and
//! changes nothing.

use std::io::{self, BufRead, Write};

use irqsim_core::{Device, InterruptController};

/// A parsed console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Mask(Device),
    Unmask(Device),
    Status,
    Exit,
    /// mask/unmask verb without a recognizable device token.
    MissingDevice,
    Unknown,
}

/// Parses one console line.
pub fn parse(line: &str) -> Command {
    let line = line.trim();
    match line {
        "exit" | "quit" => return Command::Exit,
        "status" => return Command::Status,
        _ => {}
    }

    // "unmask" must be checked first; "mask" is its suffix.
    if let Some(rest) = line.strip_prefix("unmask") {
        return match device_token(rest) {
            Some(device) => Command::Unmask(device),
            None => Command::MissingDevice,
        };
    }
    if let Some(rest) = line.strip_prefix("mask") {
        return match device_token(rest) {
            Some(device) => Command::Mask(device),
            None => Command::MissingDevice,
        };
    }

    Command::Unknown
}

/// Matches a device token as a case-sensitive substring.
pub fn device_token(text: &str) -> Option<Device> {
    if text.contains("keyboard") {
        Some(Device::Keyboard)
    } else if text.contains("mouse") {
        Some(Device::Mouse)
    } else if text.contains("printer") {
        Some(Device::Printer)
    } else {
        None
    }
}

/// Reads commands until `exit`/`quit` or end of input, applying each one to
/// the controller. A `> ` prompt is written before every read.
pub fn run<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    controller: &InterruptController,
) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        match parse(&line) {
            Command::Exit => {
                writeln!(output, "Exiting...")?;
                break;
            }
            Command::Status => print_status(output, controller)?,
            Command::Mask(device) => controller.mask(device),
            Command::Unmask(device) => controller.unmask(device),
            Command::MissingDevice => {
                writeln!(output, "Expected a device: keyboard, mouse or printer")?
            }
            Command::Unknown => {
                writeln!(output, "Unknown command. Try: mask/unmask <device>, status, exit")?
            }
        }
    }
    Ok(())
}

fn print_status<W: Write>(output: &mut W, controller: &InterruptController) -> io::Result<()> {
    let status = controller.status();
    writeln!(output, "Masks:")?;
    for (device, masked) in status.masks {
        writeln!(
            output,
            "  {} => {}",
            device,
            if masked { "MASKED" } else { "ENABLED" }
        )?;
    }
    writeln!(output, "Execution history entries: {}", status.history_len)
}
