use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use streambind_frame::RawFrame;
use streambind_values::ValueBindingTable;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct FrameOutput {
    index: usize,
    kind: &'static str,
    size: usize,
    payload: String,
}

fn frame_output(index: usize, frame: &RawFrame) -> FrameOutput {
    match frame {
        RawFrame::Line(line) => FrameOutput {
            index,
            kind: "line",
            size: line.len(),
            payload: line.clone(),
        },
        RawFrame::Bytes(bytes) => FrameOutput {
            index,
            kind: "bytes",
            size: bytes.len(),
            payload: hex_string(bytes),
        },
    }
}

pub fn print_frames(frames: &[RawFrame], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out: Vec<FrameOutput> = frames
                .iter()
                .enumerate()
                .map(|(i, f)| frame_output(i, f))
                .collect();
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "[]".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["#", "KIND", "SIZE", "PAYLOAD"]);
            for (i, frame) in frames.iter().enumerate() {
                let out = frame_output(i, frame);
                table.add_row(vec![
                    out.index.to_string(),
                    out.kind.to_string(),
                    out.size.to_string(),
                    out.payload,
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for (i, frame) in frames.iter().enumerate() {
                let out = frame_output(i, frame);
                println!("frame={} kind={} size={} payload={}", i, out.kind, out.size, out.payload);
            }
        }
        OutputFormat::Raw => {
            for frame in frames {
                match frame {
                    RawFrame::Line(line) => println!("{line}"),
                    RawFrame::Bytes(bytes) => print_raw(bytes),
                }
            }
        }
    }
}

pub fn print_values(values: &ValueBindingTable, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["NAME", "TYPE", "VALUE"]);
            for slot in values.iter() {
                table.add_row(vec![
                    slot.name.clone(),
                    slot.kind().to_string(),
                    slot.value.to_string(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty | OutputFormat::Raw => {
            for slot in values.iter() {
                println!("{} = {} ({})", slot.name, slot.value, slot.kind());
            }
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

pub fn hex_string(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 3);
    for (i, byte) in data.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{byte:02x}"));
    }
    out
}
