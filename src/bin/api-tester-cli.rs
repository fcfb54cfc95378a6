use clap::{Parser, Subcommand};
use serde_json::{json, Map, Value};

#[derive(Parser)]
#[command(name = "api-tester-cli")]
#[command(about = "Command-line client for the api-tester backend", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the backend is up
    Status,
    /// Send a request through the forwarding gateway
    Forward {
        /// Target URL
        target: String,
        /// HTTP method
        #[arg(short = 'X', long, default_value = "GET")]
        method: String,
        /// Header as "Name: value" (repeatable)
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,
        /// JSON body (sent for POST, PUT and PATCH only)
        #[arg(short, long)]
        data: Option<String>,
    },
    /// List a user's request history
    History { user_id: u64 },
    /// List a user's collections
    Collections { user_id: u64 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Status => {
            let res = client.get(&cli.url).send().await?;
            println!("{} {}", res.status(), res.text().await?);
        }
        Commands::Forward {
            target,
            method,
            headers,
            data,
        } => {
            let mut header_map = Map::new();
            for raw in headers {
                let (name, value) = raw
                    .split_once(':')
                    .ok_or_else(|| format!("invalid header '{}', expected 'Name: value'", raw))?;
                header_map.insert(name.trim().to_string(), Value::String(value.trim().to_string()));
            }
            let body = match data {
                Some(text) => serde_json::from_str::<Value>(&text)?,
                None => Value::Null,
            };

            let res = client
                .post(format!("{}/api/proxy", cli.url))
                .json(&json!({
                    "url": target,
                    "method": method,
                    "headers": header_map,
                    "body": body,
                }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::History { user_id } => {
            let res = client
                .get(format!("{}/api/history/{}", cli.url, user_id))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Collections { user_id } => {
            let res = client
                .get(format!("{}/api/collections/{}", cli.url, user_id))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let json: Value = res.json().await?;
    if !status.is_success() {
        eprintln!("Error: backend returned status {}", status);
    }
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
