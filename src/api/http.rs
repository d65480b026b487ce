use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{ApiError, DashboardApi, endpoints};
use crate::core::family::{Family, NewFamily};
use crate::core::quick_task::{NewQuickTask, QuickTask};
use crate::core::task::Task;
use crate::store::LocalStore;

/// HTTP implementation of [`DashboardApi`].
///
/// The token is read from the local store on every request, so a logout or a
/// token change takes effect without rebuilding the client.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    base_url: String,
    store: LocalStore,
    http: Client,
}

impl HttpApiClient {
    pub fn new(base_url: &str, store: LocalStore) -> Result<Self, ApiError> {
        let http = Client::builder().build().map_err(|e| ApiError::Network {
            method: "INIT",
            path: base_url.to_string(),
            message: format!("Failed to build HTTP client: {}", e),
        })?;
        Ok(Self {
            base_url: format!("{}/", base_url.trim().trim_end_matches('/')),
            store,
            http,
        })
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let token = self.store.token().ok_or(ApiError::MissingToken)?;
        let url = format!("{}{}", self.base_url, path);
        Ok(self
            .http
            .request(method, url)
            .header("Authorization", format!("Token {}", token)))
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<Response, ApiError> {
        let method_name = method_name(&method);
        log::debug!("{} {}", method_name, path);

        let resp = builder.send().await.map_err(|e| ApiError::Network {
            method: method_name,
            path: path.to_string(),
            message: e.to_string(),
        })?;

        let status = resp.status();
        if !status.is_success() {
            log::warn!("{} {} returned {}", method_name, path, status);
            return Err(ApiError::Status {
                method: method_name,
                path: path.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(resp)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.request(Method::GET, path)?;
        let resp = self.send(Method::GET, path, builder).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    async fn post_json<B: Serialize + ?Sized + Sync>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let builder = self.request(Method::POST, path)?.json(body);
        self.send(Method::POST, path, builder).await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let builder = self.request(Method::DELETE, path)?;
        self.send(Method::DELETE, path, builder).await?;
        Ok(())
    }
}

fn method_name(method: &Method) -> &'static str {
    if *method == Method::GET {
        "GET"
    } else if *method == Method::POST {
        "POST"
    } else if *method == Method::DELETE {
        "DELETE"
    } else {
        "REQUEST"
    }
}

#[async_trait]
impl DashboardApi for HttpApiClient {
    async fn list_families(&self) -> Result<Vec<Family>, ApiError> {
        self.get_json(endpoints::FAMILIES).await
    }

    async fn create_family(&self, family: &NewFamily) -> Result<(), ApiError> {
        self.post_json(endpoints::FAMILIES, family).await
    }

    async fn delete_family(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&endpoints::family(id)).await
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.get_json(endpoints::TASKS).await
    }

    async fn list_quick_tasks(&self) -> Result<Vec<QuickTask>, ApiError> {
        self.get_json(endpoints::QUICK_TASKS).await
    }

    async fn create_quick_task(&self, task: &NewQuickTask) -> Result<(), ApiError> {
        self.post_json(endpoints::QUICK_TASKS, task).await
    }

    async fn delete_quick_task(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&endpoints::quick_task(id)).await
    }
}
