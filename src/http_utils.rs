use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::{
    ClientConfig, Contract, ContractCollection, ContractManager, CreateContractRequest,
    RemoteError,
};

const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// HTTP client for the lease service's v1 API.
pub struct LeaseClient {
    client: Client,
    base_url: Url,
    auth_token: Option<String>,
}

impl LeaseClient {
    /// Builds a client for `config`.
    ///
    /// # Returns
    /// * `Ok(LeaseClient)` - A client for `config.base_url`
    /// * `Err(RemoteError)` - The base URL cannot carry a path, or the HTTP client failed to build
    pub fn new(config: ClientConfig) -> Result<Self, RemoteError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| RemoteError::new("parse base URL", &e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(RemoteError::new(
                "parse base URL",
                &format!("'{}' cannot carry a path", config.base_url),
            ));
        }
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RemoteError::new("build HTTP client", &e.to_string()))?;
        Ok(Self {
            client,
            base_url,
            auth_token: config.auth_token,
        })
    }

    /// Constructs a full API URL from path segments.
    ///
    /// Each segment is percent-encoded, so a segment containing `/`, `?` or `#` stays a single
    /// path segment.
    pub fn api_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("v1").extend(segments);
        }
        url
    }

    /// The URL of one contract.  Empty, `.` and `..` uuids would name the collection.
    fn contract_url(&self, uuid: &str, operation: &str) -> Result<Url, RemoteError> {
        match uuid {
            "" | "." | ".." => Err(RemoteError::new(
                operation,
                &format!("invalid contract uuid '{}'", uuid),
            )),
            _ => Ok(self.api_url(&["contracts", uuid])),
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => request.header(AUTH_TOKEN_HEADER, token),
            None => request,
        }
    }

    /// Sends `request` and maps transport failures and error statuses to [`RemoteError`].
    async fn send(
        &self,
        request: RequestBuilder,
        operation: &str,
    ) -> Result<Response, RemoteError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| RemoteError::new(operation, &e.to_string()))?;
        let status = response.status();
        log::debug!("{}: HTTP {}", operation, status.as_u16());
        if status.is_success() {
            Ok(response)
        } else {
            let details = response.text().await.unwrap_or_default();
            Err(RemoteError::with_status(operation, status.as_u16(), &details))
        }
    }

    async fn decode<T>(response: Response, operation: &str) -> Result<T, RemoteError>
    where
        T: DeserializeOwned,
    {
        response
            .json()
            .await
            .map_err(|e| RemoteError::new(operation, &format!("invalid response body: {}", e)))
    }

    /// Makes a GET request and deserializes the response
    pub async fn get_json<T>(&self, url: Url, operation: &str) -> Result<T, RemoteError>
    where
        T: DeserializeOwned,
    {
        log::debug!("GET {}", url);
        let response = self.send(self.client.get(url), operation).await?;
        Self::decode(response, operation).await
    }

    /// Makes a POST request with JSON body and deserializes the response
    pub async fn post_json<B, T>(
        &self,
        url: Url,
        body: &B,
        operation: &str,
    ) -> Result<T, RemoteError>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        log::debug!("POST {}", url);
        let response = self.send(self.client.post(url).json(body), operation).await?;
        Self::decode(response, operation).await
    }

    /// Makes a DELETE request (no body expected)
    pub async fn delete_url(&self, url: Url, operation: &str) -> Result<(), RemoteError> {
        log::debug!("DELETE {}", url);
        self.send(self.client.delete(url), operation).await?;
        Ok(())
    }
}

impl ContractManager for LeaseClient {
    async fn create(&self, request: &CreateContractRequest) -> Result<Contract, RemoteError> {
        let url = self.api_url(&["contracts"]);
        self.post_json(url, request, "create contract").await
    }

    async fn list(&self) -> Result<Vec<Contract>, RemoteError> {
        let url = self.api_url(&["contracts"]);
        let collection: ContractCollection = self.get_json(url, "list contracts").await?;
        Ok(collection.contracts)
    }

    async fn get(&self, uuid: &str) -> Result<Contract, RemoteError> {
        let operation = format!("get contract {}", uuid);
        let url = self.contract_url(uuid, &operation)?;
        self.get_json(url, &operation).await
    }

    async fn delete(&self, uuid: &str) -> Result<(), RemoteError> {
        let operation = format!("delete contract {}", uuid);
        let url = self.contract_url(uuid, &operation)?;
        self.delete_url(url, &operation).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> LeaseClient {
        LeaseClient::new(ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn api_url_joins_segments() {
        let client = client("http://lease.example:7777");
        assert_eq!(
            client.api_url(&["contracts"]).as_str(),
            "http://lease.example:7777/v1/contracts"
        );
        assert_eq!(
            client.api_url(&["contracts", "9999999"]).as_str(),
            "http://lease.example:7777/v1/contracts/9999999"
        );
    }

    #[test]
    fn api_url_keeps_base_path() {
        let client = client("http://lease.example:7777/lease");
        assert_eq!(
            client.api_url(&["contracts"]).as_str(),
            "http://lease.example:7777/lease/v1/contracts"
        );
    }

    #[test]
    fn api_url_escapes_segments() {
        let client = client("http://lease.example:7777");
        assert_eq!(
            client.api_url(&["contracts", "bogus/../9999999"]).as_str(),
            "http://lease.example:7777/v1/contracts/bogus%2F..%2F9999999"
        );
        let url = client.api_url(&["contracts", "9999999?x=1#y"]);
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
        assert_eq!(url.path(), "/v1/contracts/9999999%3Fx=1%23y");
    }

    #[tokio::test]
    async fn parent_and_empty_uuids_never_leave_the_client() {
        // Nothing listens on the discard port; a request would fail with a transport error.
        let client = client("http://127.0.0.1:9");
        for uuid in ["", ".", ".."] {
            let err = client.delete(uuid).await.unwrap_err();
            assert_eq!(err.details, format!("invalid contract uuid '{}'", uuid));
        }
    }

    #[test]
    fn base_url_must_be_a_url() {
        let err = LeaseClient::new(ClientConfig {
            base_url: "not a url".to_string(),
            ..ClientConfig::default()
        })
        .err()
        .unwrap();
        assert_eq!(err.operation, "parse base URL");
    }

    #[tokio::test]
    async fn unreachable_service_is_a_remote_error() {
        // Nothing listens on the discard port.
        let client = client("http://127.0.0.1:9");
        let err = client.list().await.unwrap_err();
        assert_eq!(err.operation, "list contracts");
        assert_eq!(err.status, None);
    }
}
