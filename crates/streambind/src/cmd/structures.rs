use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use streambind_frame::WireProtocol;

use crate::cmd::StructuresArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::OutputFormat;

const PROTOCOLS: [WireProtocol; 4] = [
    WireProtocol::Lines,
    WireProtocol::Raw,
    WireProtocol::Data255,
    WireProtocol::Cobs,
];

#[derive(Serialize)]
struct ProtocolOutput {
    protocol: WireProtocol,
    default_structure: &'static str,
    structures: Vec<&'static str>,
}

pub fn run(_args: StructuresArgs, format: OutputFormat) -> CliResult<i32> {
    match format {
        OutputFormat::Json => {
            let out: Vec<ProtocolOutput> = PROTOCOLS
                .iter()
                .map(|&p| ProtocolOutput {
                    protocol: p,
                    default_structure: p.default_structure().label(),
                    structures: p.structures().iter().map(|s| s.label()).collect(),
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "[]".to_string())
            );
        }
        _ => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["PROTOCOL", "STRUCTURES", "DEFAULT"]);
            for &protocol in &PROTOCOLS {
                let structures: Vec<&str> =
                    protocol.structures().iter().map(|s| s.label()).collect();
                table.add_row(vec![
                    protocol.label().to_string(),
                    structures.join(", "),
                    protocol.default_structure().label().to_string(),
                ]);
            }
            println!("{table}");
        }
    }
    Ok(SUCCESS)
}
