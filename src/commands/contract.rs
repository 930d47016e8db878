//! # Contract Command Handler
//!
//! This module handles lease contract CLI commands: creation, listing,
//! display, and deletion of contracts.
//!
//! Each command is split in two.  `from_args` validates the command line and
//! never touches the network; `take_action` issues exactly one call on the
//! injected [`ContractManager`] and shapes what comes back.

use arrrg::CommandLine;
use arrrg_derive::CommandLine;

use crate::{
    Contract, ContractField, ContractManager, CreateContractRequest, Listing, Record, cli_utils,
    commands::errors::{CommandError, PropertiesParseError, UsageError},
    commands::shared::{
        as_strs, dispatch_command, parse_properties, reject_free_args, validate_args_count,
        validate_uuid,
    },
    contract::{LIST_FIELDS, LONG_LIST_FIELDS, SHOW_FIELDS},
};

const CONTRACT_USAGE: &str = "Usage: leasectl contract <create|list|show|delete> [args...]";

/// Handles all contract-related commands.
///
/// # Arguments
/// * `args` - Command arguments (first element is the subcommand)
/// * `client` - Lease service client
/// * `output_format` - Output format for list/show commands
pub async fn handle_contract_command<C: ContractManager>(
    args: &[String],
    client: &C,
    output_format: cli_utils::OutputFormat,
) -> Result<(), CommandError> {
    dispatch_command!("contract", CONTRACT_USAGE, args, client, output_format, {
        "create" => handle_contract_create,
        "list" => handle_contract_list,
        "show" => handle_contract_show,
        "delete" => handle_contract_delete,
    })
}

async fn handle_contract_create<C: ContractManager>(
    args: &[String],
    client: &C,
    _output_format: cli_utils::OutputFormat,
) -> Result<(), CommandError> {
    let command = CreateLeaseContract::from_args(&args[1..])?;
    let contract = command.take_action(client).await?;
    cli_utils::print_success(&format!("Created contract: {}", contract.uuid));
    Ok(())
}

async fn handle_contract_list<C: ContractManager>(
    args: &[String],
    client: &C,
    output_format: cli_utils::OutputFormat,
) -> Result<(), CommandError> {
    let command = ListLeaseContract::from_args(&args[1..])?;
    let listing = command.take_action(client).await?;
    cli_utils::print_listing(&listing, output_format)?;
    Ok(())
}

async fn handle_contract_show<C: ContractManager>(
    args: &[String],
    client: &C,
    output_format: cli_utils::OutputFormat,
) -> Result<(), CommandError> {
    let command = ShowLeaseContract::from_args(&args[1..])?;
    let record = command.take_action(client).await?;
    cli_utils::print_record(&record, output_format)?;
    Ok(())
}

async fn handle_contract_delete<C: ContractManager>(
    args: &[String],
    client: &C,
    _output_format: cli_utils::OutputFormat,
) -> Result<(), CommandError> {
    let command = DeleteLeaseContract::from_args(&args[1..])?;
    command.take_action(client).await?;
    cli_utils::print_success(&format!("Deleted contract: {}", command.uuid));
    Ok(())
}

/////////////////////////////////////////////// Create ///////////////////////////////////////////////

#[derive(CommandLine, Default, PartialEq, Eq)]
struct CreateOptions {
    #[arrrg(optional, "UUID of the offer to create the contract against")]
    offer_uuid: Option<String>,
    #[arrrg(optional, "Start date of the contract")]
    start_date: Option<String>,
    #[arrrg(optional, "End date of the contract")]
    end_date: Option<String>,
    #[arrrg(optional, "Initial status of the contract")]
    status: Option<String>,
    #[arrrg(optional, "Contract properties as a JSON object")]
    properties: Option<String>,
}

/// `contract create`: creates a contract against an offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateLeaseContract {
    /// `--offer-uuid`, required.
    pub offer_uuid: String,
    /// `--start-date`
    pub start_date: Option<String>,
    /// `--end-date`
    pub end_date: Option<String>,
    /// `--status`
    pub status: Option<String>,
    /// `--properties`, still JSON-encoded.
    pub properties: Option<String>,
}

impl CreateLeaseContract {
    /// Usage text for `contract create`.
    pub const USAGE: &'static str = "Usage: leasectl contract create --offer-uuid <uuid> \
[--start-date <date>] [--end-date <date>] [--status <status>] [--properties <json>]";

    /// Parses the arguments that follow `create`.
    pub fn from_args(args: &[String]) -> Result<Self, UsageError> {
        let (options, free) = CreateOptions::from_arguments_relaxed(Self::USAGE, &as_strs(args));
        reject_free_args(&free, "create", Self::USAGE)?;
        let offer_uuid = options
            .offer_uuid
            .filter(|uuid| !uuid.is_empty())
            .ok_or_else(|| UsageError::new("create command requires --offer-uuid", Self::USAGE))?;
        Ok(Self {
            offer_uuid,
            start_date: options.start_date,
            end_date: options.end_date,
            status: options.status,
            properties: options.properties,
        })
    }

    /// The request body this command sends, with `properties` decoded.
    pub fn request(&self) -> Result<CreateContractRequest, PropertiesParseError> {
        Ok(CreateContractRequest {
            offer_uuid: self.offer_uuid.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            status: self.status.clone(),
            properties: parse_properties(self.properties.as_deref())?,
        })
    }

    /// Creates the contract.  Malformed properties fail before the service is called.
    pub async fn take_action<C: ContractManager>(
        &self,
        client: &C,
    ) -> Result<Contract, CommandError> {
        let request = self.request()?;
        log::info!("creating contract against offer {}", request.offer_uuid);
        Ok(client.create(&request).await?)
    }
}

//////////////////////////////////////////////// List ////////////////////////////////////////////////

#[derive(CommandLine, Default, PartialEq, Eq)]
struct ListOptions {
    #[arrrg(flag, "List every field of each contract")]
    long: bool,
}

/// `contract list`: lists contracts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListLeaseContract {
    /// `--long`: show every field rather than the summary columns.
    pub long: bool,
}

impl ListLeaseContract {
    /// Usage text for `contract list`.
    pub const USAGE: &'static str = "Usage: leasectl contract list [--long]";

    /// Parses the arguments that follow `list`.
    pub fn from_args(args: &[String]) -> Result<Self, UsageError> {
        let (options, free) = ListOptions::from_arguments_relaxed(Self::USAGE, &as_strs(args));
        reject_free_args(&free, "list", Self::USAGE)?;
        Ok(Self { long: options.long })
    }

    /// Lists contracts and projects them onto the summary or long columns.
    pub async fn take_action<C: ContractManager>(
        &self,
        client: &C,
    ) -> Result<Listing, CommandError> {
        let contracts = client.list().await?;
        log::info!("listed {} contracts", contracts.len());
        let fields: &[ContractField] = if self.long {
            &LONG_LIST_FIELDS
        } else {
            &LIST_FIELDS
        };
        Ok(Listing::from_contracts(&contracts, fields))
    }
}

//////////////////////////////////////////////// Show ////////////////////////////////////////////////

/// `contract show`: displays one contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowLeaseContract {
    /// The contract to show.
    pub uuid: String,
}

impl ShowLeaseContract {
    /// Usage text for `contract show`.
    pub const USAGE: &'static str = "Usage: leasectl contract show <uuid>";

    /// Parses the arguments that follow `show`.
    pub fn from_args(args: &[String]) -> Result<Self, UsageError> {
        validate_args_count(args, 1, 1, "show", Self::USAGE)?;
        let uuid = validate_uuid(&args[0], "show", Self::USAGE)?;
        Ok(Self {
            uuid: uuid.to_string(),
        })
    }

    /// Fetches the contract and lays its fields out in display order.
    pub async fn take_action<C: ContractManager>(
        &self,
        client: &C,
    ) -> Result<Record, CommandError> {
        log::info!("fetching contract {}", self.uuid);
        let contract = client.get(&self.uuid).await?;
        Ok(Record::from_contract(&contract, &SHOW_FIELDS))
    }
}

/////////////////////////////////////////////// Delete ///////////////////////////////////////////////

/// `contract delete`: deletes one contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteLeaseContract {
    /// The contract to delete.
    pub uuid: String,
}

impl DeleteLeaseContract {
    /// Usage text for `contract delete`.
    pub const USAGE: &'static str = "Usage: leasectl contract delete <uuid>";

    /// Parses the arguments that follow `delete`.
    pub fn from_args(args: &[String]) -> Result<Self, UsageError> {
        validate_args_count(args, 1, 1, "delete", Self::USAGE)?;
        let uuid = validate_uuid(&args[0], "delete", Self::USAGE)?;
        Ok(Self {
            uuid: uuid.to_string(),
        })
    }

    /// Deletes the contract.
    pub async fn take_action<C: ContractManager>(&self, client: &C) -> Result<(), CommandError> {
        log::info!("deleting contract {}", self.uuid);
        client.delete(&self.uuid).await?;
        Ok(())
    }
}
