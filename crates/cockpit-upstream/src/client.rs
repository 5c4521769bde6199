//! HTTP client for the upstream tracking service.

use reqwest::RequestBuilder;
use serde_json::json;
use tracing::debug;

use cockpit_models::{Offer, Project, TargetTypes, WorkItem, WorkItemPatch};

use crate::error::{Result, UpstreamError};
use crate::shapes::{HalCollection, HalProject, HalWorkPackage};

/// Client for the upstream project API.
///
/// Authenticates with Basic auth (`username:token`) when a token is
/// configured; anonymous otherwise. Cloning shares the underlying
/// connection pool.
#[derive(Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
    username: String,
    token: Option<String>,
}

impl UpstreamClient {
    /// Creates a client against the given base URL. `token` of `None`
    /// leaves requests unauthenticated.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        token: Option<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            username: username.into(),
            token,
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.basic_auth(&self.username, Some(token)),
            None => request,
        }
    }

    async fn send<T: serde::de::DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status, body });
        }
        Ok(response.json().await?)
    }

    /// Lists all projects as summaries (no work packages, no offers).
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let url = format!("{}/api/v3/projects", self.base_url);
        debug!(%url, "listing upstream projects");
        let collection: HalCollection<HalProject> = self.send(self.client.get(&url)).await?;
        Ok(collection
            .into_elements()
            .into_iter()
            .map(HalProject::into_project)
            .collect())
    }

    /// Fetches one project and its type-filtered work packages concurrently
    /// and returns the populated project. Offers are always empty here; the
    /// upstream service has no offer concept.
    pub async fn project_details(&self, id: u64, types: &TargetTypes) -> Result<Project> {
        let (raw_project, work_packages) =
            tokio::try_join!(self.fetch_project(id), self.fetch_work_packages(id, types))?;

        let mut project = raw_project.into_project();
        project.work_packages = work_packages;
        Ok(project)
    }

    async fn fetch_project(&self, id: u64) -> Result<HalProject> {
        let url = format!("{}/api/v3/projects/{}", self.base_url, id);
        self.send(self.client.get(&url)).await
    }

    async fn fetch_work_packages(&self, id: u64, types: &TargetTypes) -> Result<Vec<WorkItem>> {
        let url = format!("{}/api/v3/projects/{}/work_packages", self.base_url, id);
        let request = self
            .client
            .get(&url)
            .query(&[("filters", type_filter_param(types))]);
        let collection: HalCollection<HalWorkPackage> = self.send(request).await?;
        Ok(collection
            .into_elements()
            .into_iter()
            .map(HalWorkPackage::into_work_item)
            .collect())
    }

    /// Forwards a work-package patch and returns the normalized result.
    pub async fn patch_work_package(
        &self,
        work_package_id: u64,
        patch: &WorkItemPatch,
    ) -> Result<WorkItem> {
        let url = format!("{}/api/v3/work_packages/{}", self.base_url, work_package_id);
        debug!(%url, "patching upstream work package");
        let raw: HalWorkPackage = self.send(self.client.patch(&url).json(patch)).await?;
        Ok(raw.into_work_item())
    }

    /// Forwards an offer payload verbatim and returns the stored offer.
    pub async fn post_offer(&self, project_id: u64, offer: &Offer) -> Result<Offer> {
        let url = format!("{}/api/v3/projects/{}/offers", self.base_url, project_id);
        debug!(%url, "posting offer upstream");
        self.send(self.client.post(&url).json(offer)).await
    }
}

/// JSON-encoded `filters` parameter restricting work packages to the
/// configured target types.
fn type_filter_param(types: &TargetTypes) -> String {
    json!([{
        "type": {
            "operator": "=",
            "values": types.upstream_whitelist(),
        }
    }])
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_filter_param_shape() {
        let param = type_filter_param(&TargetTypes::default());
        let parsed: serde_json::Value = serde_json::from_str(&param).unwrap();
        assert_eq!(parsed[0]["type"]["operator"], "=");
        assert_eq!(
            parsed[0]["type"]["values"],
            serde_json::json!(["Milestone", "Deliverable", "Goal", "Internal Goal"])
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = UpstreamClient::new("https://op.example.com/", "apikey", None);
        assert_eq!(client.base_url, "https://op.example.com");
    }
}
