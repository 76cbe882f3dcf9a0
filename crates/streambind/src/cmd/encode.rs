use streambind_frame::{encode_payload, WireProtocol};

use crate::cmd::EncodeArgs;
use crate::exit::{frame_error, CliResult, SUCCESS};
use crate::output::{hex_string, print_raw, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let protocol = WireProtocol::from(args.protocol);
    let payload = args.input.resolve()?;

    let wire = encode_payload(protocol, &payload).map_err(|err| frame_error("encode failed", err))?;

    match format {
        OutputFormat::Raw => print_raw(&wire),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string(&hex_string(&wire)).unwrap_or_default()
        ),
        OutputFormat::Table | OutputFormat::Pretty => println!("{}", hex_string(&wire)),
    }
    Ok(SUCCESS)
}
