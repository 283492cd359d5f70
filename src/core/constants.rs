//! Constants used throughout ghstage.
//!
//! Centralizes magic strings and configuration defaults.

/// Local configuration file name (.ghstage.toml).
pub const CONFIG_FILE: &str = ".ghstage.toml";

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "GHSTAGE_CONFIG";

/// Environment variable holding the GitHub bearer token.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_BEARER_TOKEN";

/// Environment variable holding a Google Cloud access token.
pub const GCP_TOKEN_ENV: &str = "GHSTAGE_GCP_TOKEN";

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "GHSTAGE_LOG";

pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const GITHUB_API_URL_ENV: &str = "GHSTAGE_GITHUB_API_URL";
pub const GITHUB_API_VERSION: &str = "2022-11-28";

pub const RESOURCE_MANAGER_URL: &str = "https://cloudresourcemanager.googleapis.com";
pub const RESOURCE_MANAGER_URL_ENV: &str = "GHSTAGE_RESOURCE_MANAGER_URL";

pub const DNS_URL: &str = "https://dns.googleapis.com";
pub const DNS_URL_ENV: &str = "GHSTAGE_DNS_URL";

/// Managed zone holding the SOA record of a project's base domain.
pub const DNS_ZONE: &str = "ingress-default";

/// Default workflow file dispatched by `trigger`.
pub const DEFAULT_WORKFLOW: &str = "dispatch.yaml";

/// Default git reference dispatched by `trigger`.
pub const DEFAULT_REF: &str = "main";

/// Page size for GitHub list endpoints.
pub const PER_PAGE: usize = 30;

/// Prefix of repository variables holding a stage matrix.
pub const STAGE_PREFIX: &str = "STAGE_";

/// Dispatch input key for a matrix given without a stage name.
pub const UNSTAGED_INPUT: &str = "MATRIX";

/// Project label naming the environment shortname.
pub const SHORTNAME_LABEL: &str = "shortname";

/// Project label naming the platform environment.
pub const ENV_LABEL: &str = "env";

pub const PROJECT_ID: &str = "PROJECT_ID";
pub const PROJECT_NUMBER: &str = "PROJECT_NUMBER";
pub const DPLATFORM: &str = "DPLATFORM";
pub const BASE_DOMAIN: &str = "BASE_DOMAIN";

/// Shown for a well-known variable missing from an environment.
pub const UNKNOWN: &str = "UNKNOWN";

pub const UNDEFINED_SHORTNAME: &str = "__UNDEFINED__";
pub const UNDEFINED_ENV: &str = "__UNDEFINED_ENV__";
pub const UNDEFINED_BASE_DOMAIN: &str = "__UNDEFINED_BASE_DOMAIN__";

/// Marker printed after each reconciled scope.
pub const SCOPE_SEPARATOR: &str = "---";
