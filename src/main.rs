use std::ffi::OsString;

use clap::Parser;
use repo_stats::{Config, GitHubApi, collect, make_client, write_report};

/// Get GitHub repository information and last releases
#[derive(Parser, Debug)]
#[command(name = "repo-stats")]
struct Args {
    /// GitHub Personal Access Token
    #[arg(long, value_name = "TOKEN")]
    token: String,
}

/// Accepts the single-dash `-token` spelling alongside `--token`.
fn normalize_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some(s) if s == "-token" || s.starts_with("-token=") => format!("-{s}").into(),
            _ => arg,
        })
        .collect()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse_from(normalize_args(std::env::args_os()));

    let config = Config::new(args.token);
    log::info!("reporting for {}/{}", config.owner, config.name);
    let client = make_client(&config)?;
    let repo_name = config.name.clone();
    let api = GitHubApi::new(config, client);

    let collected = collect(&api).await;
    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), &repo_name, &collected)?;
    Ok(())
}
