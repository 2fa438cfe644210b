use clap::Parser;
use std::net::SocketAddr;

/// cvsskit — CVSS v3.1 base score calculator
#[derive(Parser, Debug)]
#[command(name = "cvsskit", version, about = "CVSS v3.1 base score calculator")]
pub struct Args {
    /// Attack Vector: N=network, A=adjacent, L=local, P=physical
    #[arg(long = "av", value_name = "CODE")]
    pub attack_vector: Option<String>,

    /// Attack Complexity: L=low, H=high
    #[arg(long = "ac", value_name = "CODE")]
    pub attack_complexity: Option<String>,

    /// Privileges Required: N=none, L=low, H=high
    #[arg(long = "pr", value_name = "CODE")]
    pub privileges_required: Option<String>,

    /// User Interaction: N=none, R=required
    #[arg(long = "ui", value_name = "CODE")]
    pub user_interaction: Option<String>,

    /// Scope: U=unchanged, C=changed
    #[arg(long = "scope", value_name = "CODE")]
    pub scope: Option<String>,

    /// Confidentiality impact: N=none, L=low, H=high
    #[arg(long = "conf", value_name = "CODE")]
    pub confidentiality: Option<String>,

    /// Integrity impact: N=none, L=low, H=high
    #[arg(long = "integ", value_name = "CODE")]
    pub integrity: Option<String>,

    /// Availability impact: N=none, L=low, H=high
    #[arg(long = "avail", value_name = "CODE")]
    pub availability: Option<String>,

    /// Emit the result as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Increase verbosity level (use -v or -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Start the REST API server instead of scoring
    #[arg(long)]
    pub api: bool,

    /// API listen address (with --api)
    #[arg(long = "listen", value_name = "ADDR", default_value = "127.0.0.1:3000")]
    pub listen: SocketAddr,
}
