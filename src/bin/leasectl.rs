use std::fmt::Display;

use arrrg::CommandLine;
use arrrg_derive::CommandLine;
use handled::Handle;

use esileap::{
    ClientConfig, ConfigOverrides, LeaseClient,
    cli_utils::{self, OutputFormat},
    commands::{UserError, format_cli_error, handle_contract_command},
};

#[derive(CommandLine, Default, PartialEq, Eq)]
struct Options {
    #[arrrg(optional, "Base URL of the lease service")]
    base_url: Option<String>,
    #[arrrg(optional, "Auth token sent as X-Auth-Token")]
    auth_token: Option<String>,
    #[arrrg(optional, "Per-request timeout in seconds")]
    timeout_secs: Option<String>,
    #[arrrg(
        optional,
        "Output format for list/show commands: table, json, yaml or value (default: table)"
    )]
    output: OutputFormat,
    #[arrrg(flag, "Enable debug logging")]
    verbose: bool,
}

const USAGE: &str = r#"Usage: leasectl [options] <command> [args...]

Options:
  --base-url <url>       Base URL of the lease service (default: $LEASE_URL or http://localhost:7777)
  --auth-token <token>   Auth token sent as X-Auth-Token (default: $OS_AUTH_TOKEN)
  --timeout-secs <n>     Per-request timeout in seconds (default: $LEASE_TIMEOUT_SECS or 30)
  --output <format>      Output format for list/show commands: table, json, yaml or value
  --verbose              Enable debug logging

Commands:
  contract create --offer-uuid <uuid> [--start-date <date>] [--end-date <date>]
                  [--status <status>] [--properties <json>]
                                               Create a contract against an offer
  contract list [--long]                       List contracts
  contract show <uuid>                         Show a contract
  contract delete <uuid>                       Delete a contract"#;

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn exit_with_cli_error<E>(error: &E) -> !
where
    E: Handle<UserError> + Display,
{
    eprintln!("{}", format_cli_error(error));
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    let (options, free) = Options::from_command_line_relaxed("USAGE: leasectl [options] <command>");

    if free.is_empty() {
        cli_utils::exit_with_usage_error("No command specified", USAGE);
    }

    init_logging(options.verbose);

    let config = ClientConfig::from_env(ConfigOverrides {
        base_url: options.base_url,
        auth_token: options.auth_token,
        timeout_secs: options.timeout_secs,
    })
    .unwrap_or_else(|e| exit_with_cli_error(&e));
    log::debug!("using lease service at {}", config.base_url);

    let client = LeaseClient::new(config).unwrap_or_else(|e| exit_with_cli_error(&e));

    let result = match free[0].as_str() {
        "contract" => handle_contract_command(&free[1..], &client, options.output).await,
        _ => cli_utils::exit_with_usage_error(
            &format!("Unknown command '{}'. Available commands: contract", free[0]),
            USAGE,
        ),
    };

    if let Err(e) = result {
        log::debug!("command failed: {:?}", e);
        exit_with_cli_error(&e);
    }
}
