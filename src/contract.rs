use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

////////////////////////////////////////////// Contract ////////////////////////////////////////////////

/// A lease contract as reported by the lease service.
///
/// The uuid is assigned by the service and never changes.  Every other field is owned by the
/// service as well; this crate only reads them for display or copies them into requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Service-assigned identifier.
    pub uuid: String,
    /// The offer this contract was created against.
    pub offer_uuid: String,
    /// Project that holds the contract.
    #[serde(default)]
    pub project_id: Option<String>,
    /// Start of the contract's validity window.
    #[serde(default, alias = "start_time")]
    pub start_date: Option<String>,
    /// End of the contract's validity window.
    #[serde(default, alias = "end_time")]
    pub end_date: Option<String>,
    /// Lifecycle status as reported by the service.
    #[serde(default)]
    pub status: Option<String>,
    /// Free-form key/value properties.
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl Display for Contract {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "contract:{} (offer {})", self.uuid, self.offer_uuid)
    }
}

/// Envelope returned by the service when listing contracts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractCollection {
    /// The contracts, in the order the service returned them.
    pub contracts: Vec<Contract>,
}

/// Body of a contract create call.
///
/// Optional fields that were not supplied on the command line are left out of the serialized
/// body entirely so the service applies its own defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateContractRequest {
    /// The offer to create the contract against.
    pub offer_uuid: String,
    /// Requested start of the validity window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Requested end of the validity window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Requested initial status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Free-form properties, decoded from the `--properties` JSON.
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl CreateContractRequest {
    /// A request for `offer_uuid` with nothing else set.
    pub fn new(offer_uuid: impl Into<String>) -> Self {
        Self {
            offer_uuid: offer_uuid.into(),
            start_date: None,
            end_date: None,
            status: None,
            properties: Map::new(),
        }
    }
}

/////////////////////////////////////////// Field projections //////////////////////////////////////////

/// One displayable field of a [`Contract`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractField {
    /// `uuid`
    Uuid,
    /// `offer_uuid`
    OfferUuid,
    /// `project_id`
    ProjectId,
    /// `properties`
    Properties,
    /// `start_date`
    StartDate,
    /// `end_date`
    EndDate,
    /// `status`
    Status,
}

/// Columns of `contract list`.
pub const LIST_FIELDS: [ContractField; 5] = [
    ContractField::Uuid,
    ContractField::StartDate,
    ContractField::EndDate,
    ContractField::OfferUuid,
    ContractField::Status,
];

/// Columns of `contract list --long`.
pub const LONG_LIST_FIELDS: [ContractField; 7] = [
    ContractField::EndDate,
    ContractField::OfferUuid,
    ContractField::ProjectId,
    ContractField::Properties,
    ContractField::StartDate,
    ContractField::Status,
    ContractField::Uuid,
];

/// Fields of `contract show`, in display order.
pub const SHOW_FIELDS: [ContractField; 7] = LONG_LIST_FIELDS;

impl ContractField {
    /// The attribute name, as used by `contract show`.
    pub fn name(self) -> &'static str {
        match self {
            ContractField::Uuid => "uuid",
            ContractField::OfferUuid => "offer_uuid",
            ContractField::ProjectId => "project_id",
            ContractField::Properties => "properties",
            ContractField::StartDate => "start_date",
            ContractField::EndDate => "end_date",
            ContractField::Status => "status",
        }
    }

    /// The column heading, as used by `contract list`.
    pub fn label(self) -> &'static str {
        match self {
            ContractField::Uuid => "UUID",
            ContractField::OfferUuid => "Offer UUID",
            ContractField::ProjectId => "Project ID",
            ContractField::Properties => "Properties",
            ContractField::StartDate => "Start Date",
            ContractField::EndDate => "End Date",
            ContractField::Status => "Status",
        }
    }

    /// Reads this field out of `contract`.  Absent optional fields become `Value::Null`.
    pub fn value(self, contract: &Contract) -> Value {
        fn optional(field: &Option<String>) -> Value {
            field.clone().map(Value::String).unwrap_or(Value::Null)
        }
        match self {
            ContractField::Uuid => Value::String(contract.uuid.clone()),
            ContractField::OfferUuid => Value::String(contract.offer_uuid.clone()),
            ContractField::ProjectId => optional(&contract.project_id),
            ContractField::Properties => Value::Object(contract.properties.clone()),
            ContractField::StartDate => optional(&contract.start_date),
            ContractField::EndDate => optional(&contract.end_date),
            ContractField::Status => optional(&contract.status),
        }
    }
}

impl Contract {
    /// Projects this contract onto `fields`, in order.
    pub fn project(&self, fields: &[ContractField]) -> Vec<Value> {
        fields.iter().map(|field| field.value(self)).collect()
    }
}
