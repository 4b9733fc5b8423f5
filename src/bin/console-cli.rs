use clap::{Parser, Subcommand};
use reqwest::redirect::Policy;
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "console-cli")]
#[command(about = "Management CLI for the operator console shell", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[arg(short, long, default_value = "CHANGE_ME_IN_PRODUCTION")]
    key: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check shell status
    Status,
    /// Show the published navigation
    Navigation {
        /// Only entries the sidebar lists
        #[arg(long)]
        sidebar: bool,
    },
    /// Resolve a path against the current route tree
    Resolve { path: String },
    /// Log the console session in
    Login,
    /// Log the console session out
    Logout,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::builder().redirect(Policy::none()).build()?;

    let res = match cli.command {
        Commands::Status => client.get(format!("{}/api/status", cli.url)).send().await?,
        Commands::Navigation { sidebar } => {
            let endpoint = if sidebar { "navigation/sidebar" } else { "navigation" };
            client.get(format!("{}/api/{}", cli.url, endpoint)).send().await?
        }
        Commands::Resolve { path } => {
            let path = path.trim_start_matches('/');
            client.get(format!("{}/{}", cli.url, path)).send().await?
        }
        Commands::Login => {
            client
                .post(format!("{}/api/session", cli.url))
                .json(&json!({ "api_key": cli.key }))
                .send()
                .await?
        }
        Commands::Logout => client.delete(format!("{}/api/session", cli.url)).send().await?,
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if let Some(location) = res.headers().get(reqwest::header::LOCATION) {
        println!("{} -> {}", status, location.to_str()?);
    }
    if status.is_client_error() || status.is_server_error() {
        eprintln!("Error: shell returned status {}", status);
    }

    let text = res.text().await?;
    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) if !text.is_empty() => println!("{}", text),
        Err(_) => {}
    }
    Ok(())
}
