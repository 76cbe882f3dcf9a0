use streambind_frame::WireProtocol;
use streambind_module::{ModuleConfig, StreamModule};
use streambind_transport::MemoryTransport;

use crate::cmd::BindArgs;
use crate::exit::{CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_values, OutputFormat};

pub fn run(args: BindArgs, format: OutputFormat) -> CliResult<i32> {
    let protocol = WireProtocol::from(args.protocol);
    let structure = args
        .structure
        .map(Into::into)
        .unwrap_or_else(|| protocol.default_structure());

    let config = ModuleConfig {
        protocol,
        structure,
        auto_add: !args.no_auto_add,
        first_value_is_name: !args.indexed,
        ..ModuleConfig::default()
    };
    let mut module = StreamModule::new("cli", config, MemoryTransport::new())
        .map_err(|err| CliError::new(USAGE, err.to_string()))?;

    let mut input = args.input.resolve()?;
    if protocol == WireProtocol::Lines && !input.ends_with(b"\n") {
        input.push(b'\n');
    }
    module.receive(&input);

    print_values(module.values(), format);
    Ok(SUCCESS)
}
