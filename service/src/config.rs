use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;
use social_auth::providers::github::{DEFAULT_API_BASE_URL, DEFAULT_AUTH_BASE_URL};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq)]
pub enum RustEnv {
    Development,
    Production,
    Staging,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RustEnvParseError;

impl FromStr for RustEnv {
    type Err = RustEnvParseError;
    fn from_str(level: &str) -> Result<RustEnv, Self::Err> {
        match level.to_lowercase().as_str() {
            "development" => Ok(RustEnv::Development),
            "production" => Ok(RustEnv::Production),
            "staging" => Ok(RustEnv::Staging),
            _ => Err(RustEnvParseError),
        }
    }
}

impl fmt::Display for RustEnv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RustEnv::Development => write!(f, "development"),
            RustEnv::Production => write!(f, "production"),
            RustEnv::Staging => write!(f, "staging"),
        }
    }
}

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None, args_override_self = true)]
pub struct Config {
    /// A list of full CORS origin URLs that allowed to receive server responses.
    #[arg(
        long,
        env,
        value_delimiter = ',',
        use_value_delimiter = true,
        default_value = "http://localhost:3000,https://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// The GitHub OAuth app client ID.
    #[arg(long, env)]
    github_app: Option<String>,

    /// The GitHub OAuth app client secret.
    #[arg(long, env)]
    github_key: Option<String>,

    /// The GitHub OAuth server that exchanges authorization codes.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_AUTH_BASE_URL)]
    github_auth_url: String,

    /// The GitHub API server used to read the logged-in user.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_API_BASE_URL)]
    github_api_url: String,

    /// Externally visible origin of this server (e.g. https://login.example.com).
    /// Used to rebuild the callback URI sent to GitHub as `redirect_uri`; when not
    /// set, `http://` plus the request's Host header is used.
    #[arg(long, env)]
    public_base_url: Option<String>,

    /// Timeout in seconds for each call made to GitHub
    #[arg(long, env, default_value_t = 30)]
    pub http_timeout_secs: u64,

    /// The host interface to listen for incoming connections
    #[arg(short, long, env, default_value = "127.0.0.1")]
    pub interface: Option<String>,

    /// The host TCP port to listen for incoming connections
    #[arg(short, long, env, default_value_t = 4000)]
    pub port: u16,

    /// Set the log level verbosity threshold (level) to control what gets displayed
    /// on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,

    /// Set the Rust runtime environment to use.
    #[arg(
    short,
    long,
    env,
    default_value_t = RustEnv::Development,
    value_parser = clap::builder::PossibleValuesParser::new([
        "DEVELOPMENT", "PRODUCTION", "STAGING",
        "development", "production", "staging"
    ])
        .map(|s| s.parse::<RustEnv>().unwrap()),
    )]
    pub runtime_env: RustEnv,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    /// Returns the GitHub OAuth app client ID, if configured and not empty.
    pub fn github_app(&self) -> Option<String> {
        self.github_app.clone().filter(|app| !app.is_empty())
    }

    /// Returns the GitHub OAuth app client secret, if configured and not empty.
    pub fn github_key(&self) -> Option<String> {
        self.github_key.clone().filter(|key| !key.is_empty())
    }

    pub fn github_auth_url(&self) -> &str {
        &self.github_auth_url
    }

    pub fn github_api_url(&self) -> &str {
        &self.github_api_url
    }

    /// Returns the externally visible origin, without a trailing slash.
    pub fn public_base_url(&self) -> Option<&str> {
        self.public_base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .filter(|url| !url.is_empty())
    }

    pub fn runtime_env(&self) -> RustEnv {
        self.runtime_env.clone()
    }

    pub fn is_production(&self) -> bool {
        self.runtime_env() == RustEnv::Production
    }
}

/// Parses a `Config` with every env-backed setting given explicitly, so the
/// developer's shell and `.env` cannot leak into tests. Credentials start empty;
/// later `args` override the baseline.
#[cfg(test)]
pub(crate) fn test_config(args: &[&str]) -> Config {
    let mut argv = vec![
        "social_login_rs",
        "--allowed-origins",
        "http://localhost:3000",
        "--github-app",
        "",
        "--github-key",
        "",
        "--github-auth-url",
        DEFAULT_AUTH_BASE_URL,
        "--github-api-url",
        DEFAULT_API_BASE_URL,
        "--public-base-url",
        "",
        "--http-timeout-secs",
        "30",
        "--interface",
        "127.0.0.1",
        "--port",
        "4000",
        "--log-level-filter",
        "INFO",
        "--runtime-env",
        "development",
    ];
    argv.extend_from_slice(args);
    Config::parse_from(argv)
}
