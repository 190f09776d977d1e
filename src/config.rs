// src/config.rs
// Runtime settings, from flags or the environment.

use std::time::Duration;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "oraculum-qa", version, about = "Answers simple factual questions from Wikipedia")]
pub struct Config {
    /// Base URL of the MediaWiki site to consult.
    #[arg(long, env = "ORACULUM_WIKI_URL", default_value = "https://en.wikipedia.org")]
    pub wiki_url: String,

    #[arg(long, env = "ORACULUM_USER_AGENT", default_value = concat!("oraculum-qa/", env!("CARGO_PKG_VERSION")))]
    pub user_agent: String,

    /// Per-request timeout in seconds; 0 waits forever.
    #[arg(long, env = "ORACULUM_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, env = "ORACULUM_LOG", default_value = "warn")]
    pub log_level: String,
}

impl Config {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}
