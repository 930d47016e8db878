#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use axum::routing::get;
use serde_json::{Map, Value};

use esileap::{ClientConfig, Contract, ContractCollection, CreateContractRequest, LeaseClient};

/// Everything the fake service has seen and holds.
#[derive(Default)]
pub struct ServiceState {
    pub contracts: Vec<Contract>,
    /// Raw create bodies, exactly as received.
    pub create_bodies: Vec<Value>,
    /// The X-Auth-Token of every request, in order.
    pub tokens: Vec<Option<String>>,
    next_uuid: u64,
}

type Shared = Arc<Mutex<ServiceState>>;

/// An in-process lease service listening on an ephemeral loopback port.
pub struct FakeLeaseService {
    pub addr: SocketAddr,
    pub state: Shared,
}

impl FakeLeaseService {
    pub async fn start(contracts: Vec<Contract>) -> Self {
        let state = Arc::new(Mutex::new(ServiceState {
            contracts,
            next_uuid: 1,
            ..ServiceState::default()
        }));
        let app = Router::new()
            .route("/v1/contracts", get(list_contracts).post(create_contract))
            .route(
                "/v1/contracts/:uuid",
                get(get_contract).delete(delete_contract),
            )
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn client(&self, auth_token: Option<&str>) -> LeaseClient {
        LeaseClient::new(ClientConfig {
            base_url: self.base_url(),
            auth_token: auth_token.map(str::to_string),
            ..ClientConfig::default()
        })
        .unwrap()
    }

    pub fn contracts(&self) -> Vec<Contract> {
        self.state.lock().unwrap().contracts.clone()
    }

    pub fn create_bodies(&self) -> Vec<Value> {
        self.state.lock().unwrap().create_bodies.clone()
    }

    pub fn tokens(&self) -> Vec<Option<String>> {
        self.state.lock().unwrap().tokens.clone()
    }
}

pub fn fake_contract() -> Contract {
    Contract {
        uuid: "9999999".to_string(),
        offer_uuid: "111111111".to_string(),
        project_id: Some("xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx".to_string()),
        start_date: Some("2010".to_string()),
        end_date: Some("3000-00-00T13".to_string()),
        status: Some("fake_status".to_string()),
        properties: Map::new(),
    }
}

fn remember_token(state: &Shared, headers: &HeaderMap) {
    let token = headers
        .get("x-auth-token")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.lock().unwrap().tokens.push(token);
}

fn not_found(uuid: &str) -> (StatusCode, String) {
    (
        StatusCode::NOT_FOUND,
        format!("Contract {} not found", uuid),
    )
}

async fn list_contracts(
    State(state): State<Shared>,
    headers: HeaderMap,
) -> Json<ContractCollection> {
    remember_token(&state, &headers);
    let contracts = state.lock().unwrap().contracts.clone();
    Json(ContractCollection { contracts })
}

async fn create_contract(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Contract>), (StatusCode, String)> {
    remember_token(&state, &headers);
    let request: CreateContractRequest = serde_json::from_value(body.clone())
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let mut state = state.lock().unwrap();
    state.create_bodies.push(body);
    let uuid = format!("contract-{}", state.next_uuid);
    state.next_uuid += 1;
    let contract = Contract {
        uuid,
        offer_uuid: request.offer_uuid,
        project_id: Some("xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx".to_string()),
        start_date: request.start_date,
        end_date: request.end_date,
        status: request.status.or_else(|| Some("created".to_string())),
        properties: request.properties,
    };
    state.contracts.push(contract.clone());
    Ok((StatusCode::CREATED, Json(contract)))
}

async fn get_contract(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(uuid): Path<String>,
) -> Result<Json<Contract>, (StatusCode, String)> {
    remember_token(&state, &headers);
    let state = state.lock().unwrap();
    state
        .contracts
        .iter()
        .find(|c| c.uuid == uuid)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(&uuid))
}

async fn delete_contract(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(uuid): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    remember_token(&state, &headers);
    let mut state = state.lock().unwrap();
    let before = state.contracts.len();
    state.contracts.retain(|c| c.uuid != uuid);
    if state.contracts.len() == before {
        Err(not_found(&uuid))
    } else {
        Ok(StatusCode::NO_CONTENT)
    }
}
