//! Blocking GitHub REST client.

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::model::{DispatchRequest, Environment, EnvironmentPage, Repository, Variable, VariablePage};
use super::GitHub;
use crate::core::auth::BearerToken;
use crate::core::config::GitHubSettings;
use crate::core::constants::{GITHUB_API_VERSION, PER_PAGE};
use crate::core::domain::{Scope, Variables};
use crate::core::http;
use crate::error::Result;

const SERVICE: &str = "github";

/// GitHub client bound to one repository.
#[derive(Debug)]
pub struct GitHubClient {
    http: Client,
    api_url: String,
    token: BearerToken,
    repo: String,
    repository_id: u64,
}

impl GitHubClient {
    /// Connect to a repository and resolve its numeric id.
    ///
    /// Environment-scoped endpoints are addressed by id, so this performs one
    /// `GET /repos/{repo}` up front.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the repository cannot be read with this token.
    pub fn connect(settings: &GitHubSettings, token: BearerToken, repo: &str) -> Result<Self> {
        let mut client = Self {
            http: http::client(SERVICE)?,
            api_url: settings.api_url.clone(),
            token,
            repo: repo.to_string(),
            repository_id: 0,
        };

        let url = client.url(client.repo_segments(&[]))?;
        let repository: Repository = client.get_json(&url)?;
        debug!(repo, id = repository.id, "resolved repository");
        client.repository_id = repository.id;

        Ok(client)
    }

    /// Repository in `<org>/<repo>` form.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// `/repos/{org}/{repo}/...`
    fn repo_segments<'a>(&'a self, rest: &[&'a str]) -> Vec<&'a str> {
        let mut segments = vec!["repos"];
        segments.extend(self.repo.split('/'));
        segments.extend_from_slice(rest);
        segments
    }

    /// Collection URL holding the variables of a scope.
    fn variables_url(&self, scope: &Scope) -> Result<Url> {
        match scope {
            Scope::Repository => self.url(self.repo_segments(&["actions", "variables"])),
            Scope::Environment(env) => {
                let id = self.repository_id.to_string();
                self.url([
                    "repositories",
                    id.as_str(),
                    "environments",
                    env.as_str(),
                    "variables",
                ])
            }
        }
    }

    fn url<'a, I>(&self, segments: I) -> Result<Url>
    where
        I: IntoIterator<Item = &'a str>,
    {
        http::join(SERVICE, &self.api_url, segments)
    }

    fn request(&self, method: Method, url: &Url) -> RequestBuilder {
        self.http
            .request(method, url.clone())
            .bearer_auth(self.token.expose())
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        let resp = http::send(SERVICE, "GET", url, self.request(Method::GET, url))?;
        http::decode(SERVICE, url, resp)
    }

    /// Fetch every page of a list endpoint.
    ///
    /// `split` returns the page's `total_count` and its items.
    fn get_paged<P, T, F>(&self, url: &Url, split: F) -> Result<Vec<T>>
    where
        P: DeserializeOwned,
        F: Fn(P) -> (usize, Vec<T>),
    {
        let mut items = Vec::new();
        let mut page = 1usize;

        loop {
            let mut paged = url.clone();
            paged
                .query_pairs_mut()
                .append_pair("per_page", &PER_PAGE.to_string())
                .append_pair("page", &page.to_string());

            let (total, batch) = split(self.get_json(&paged)?);
            let fetched = batch.len();
            items.extend(batch);

            if fetched == 0 || items.len() >= total {
                break;
            }
            page += 1;
        }

        Ok(items)
    }

    fn send_json<B: serde::Serialize + ?Sized>(
        &self,
        method: Method,
        url: &Url,
        body: &B,
    ) -> Result<reqwest::blocking::Response> {
        let label = method.as_str().to_string();
        http::send(SERVICE, &label, url, self.request(method, url).json(body))
    }
}

impl GitHub for GitHubClient {
    fn list_variables(&self, scope: &Scope) -> Result<Variables> {
        let url = self.variables_url(scope)?;
        let variables: Vec<Variable> =
            self.get_paged(&url, |p: VariablePage| (p.total_count, p.variables))?;

        debug!(%scope, count = variables.len(), "listed variables");
        Ok(variables.into_iter().map(|v| (v.name, v.value)).collect())
    }

    fn create_variable(&self, scope: &Scope, name: &str, value: &str) -> Result<()> {
        let url = self.variables_url(scope)?;
        info!("POST {} k={} v={}", url, name, value);

        let body = Variable {
            name: name.to_string(),
            value: value.to_string(),
        };
        self.send_json(Method::POST, &url, &body)?;
        Ok(())
    }

    fn update_variable(&self, scope: &Scope, name: &str, value: &str) -> Result<()> {
        let collection = self.variables_url(scope)?;
        let url = http::join(SERVICE, collection.as_str(), [name])?;
        info!("PATCH {} k={} v={}", url, name, value);

        let body = Variable {
            name: name.to_string(),
            value: value.to_string(),
        };
        self.send_json(Method::PATCH, &url, &body)?;
        Ok(())
    }

    fn list_environments(&self) -> Result<Vec<Environment>> {
        let id = self.repository_id.to_string();
        let url = self.url(["repositories", id.as_str(), "environments"])?;
        let environments =
            self.get_paged(&url, |p: EnvironmentPage| (p.total_count, p.environments))?;

        debug!(count = environments.len(), "listed environments");
        Ok(environments)
    }

    fn put_environment(&self, name: &str) -> Result<()> {
        let id = self.repository_id.to_string();
        let url = self.url(["repositories", id.as_str(), "environments", name])?;
        info!("PUT {}", url);

        self.send_json(Method::PUT, &url, &serde_json::json!({}))?;
        Ok(())
    }

    fn dispatch_workflow(
        &self,
        workflow: &str,
        git_ref: &str,
        inputs: &Variables,
    ) -> Result<u16> {
        let url = self.url(self.repo_segments(&[
            "actions",
            "workflows",
            workflow,
            "dispatches",
        ]))?;

        let body = DispatchRequest {
            git_ref,
            inputs: inputs.as_map(),
        };
        info!("POST {} -- {}", url, serde_json::to_string(&body)?);

        let resp = self.send_json(Method::POST, &url, &body)?;
        Ok(resp.status().as_u16())
    }
}
