use streambind_frame::{FrameDecoder, WireProtocol};
use tracing::warn;

use crate::cmd::DecodeArgs;
use crate::exit::{CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_frames, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let protocol = WireProtocol::from(args.protocol);
    let mut input = args.input.resolve()?;

    // One-shot decode: terminate a trailing unfinished line.
    if protocol == WireProtocol::Lines && !input.ends_with(b"\n") {
        input.push(b'\n');
    }

    let mut decoder = FrameDecoder::new(protocol);
    let frames = decoder.push(&input);
    print_frames(&frames, format);

    if decoder.dropped_frames() > 0 {
        warn!(dropped = decoder.dropped_frames(), "malformed frames dropped");
        return Ok(DATA_INVALID);
    }
    Ok(SUCCESS)
}
