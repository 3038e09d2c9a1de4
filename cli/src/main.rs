use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use bytes::Bytes;
use clap::{Parser, Subcommand, ValueEnum};
use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use siyuan_client::api::file::{PathPayload, PutFileContent, PutFilePayload};
use siyuan_client::api::query::SqlPayload;
use siyuan_client::engine::fetch::HeadersInit;
use siyuan_client::{
    BroadcastParams, Client, ClientError, EngineKind, KernelConfig, Method, RequestDescriptor, RequestInit,
    ResponseData, ResponseKind,
};
use tokio_tungstenite::tungstenite::Message;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("invalid header `{0}`; expected NAME:VALUE")]
    InvalidHeader(String),
    #[error("invalid method `{0}`")]
    InvalidMethod(String),
    #[error("io failed: {0}")]
    Io(#[from] io::Error),
    #[error("broadcast failed: {0}")]
    Broadcast(Box<tokio_tungstenite::tungstenite::Error>),
    #[error("timed out waiting for broadcast message")]
    Timeout,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EngineArg {
    Fetch,
    Xhr,
}

impl From<EngineArg> for EngineKind {
    fn from(arg: EngineArg) -> Self {
        match arg {
            EngineArg::Fetch => Self::Fetch,
            EngineArg::Xhr => Self::Xhr,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "siyuan", about = "SiYuan kernel API and broadcast CLI")]
struct Cli {
    #[arg(long, env = "SIYUAN_BASE_URL", default_value = siyuan_client::config::DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "SIYUAN_TOKEN", default_value = "", hide_env_values = true)]
    token: String,

    #[arg(long, env = "SIYUAN_CLIENT_TYPE", value_enum, default_value_t = EngineArg::Xhr)]
    engine: EngineArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the kernel version.
    Version,
    /// POST to any kernel endpoint and print the result.
    Call {
        pathname: String,
        #[arg(long)]
        data: Option<String>,
        /// Print the body as returned, without envelope checks.
        #[arg(long, default_value_t = false)]
        raw: bool,
    },
    Sql {
        stmt: String,
    },
    GetFile {
        path: String,
        /// Write the bytes here instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    PutFile {
        path: String,
        local: PathBuf,
    },
    Notebooks,
    /// Perform a request through the kernel's forward proxy.
    Fetch {
        url: String,
        #[arg(long, default_value = "GET")]
        method: String,
        #[arg(long = "header")]
        headers: Vec<String>,
        #[arg(long)]
        data: Option<String>,
    },
    /// Join a broadcast channel and print its messages.
    Broadcast {
        channel: String,
        #[arg(long)]
        send: Option<String>,
        /// Exit after this many messages.
        #[arg(long)]
        count: Option<usize>,
        #[arg(long, default_value_t = 30)]
        idle_secs: u64,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let client = Client::from_config(&KernelConfig {
        engine: cli.engine.into(),
        base_url: cli.base_url,
        token: cli.token,
        ..KernelConfig::default()
    })?;
    tracing::debug!(engine = %client.kind(), base_url = client.base_url(), "client ready");

    match cli.command {
        Command::Version => {
            let version = client.version(None).await?.data;
            println!("{version}");
            Ok(())
        }
        Command::Call { pathname, data, raw } => run_call(&client, pathname, data, raw).await,
        Command::Sql { stmt } => {
            let rows = client.sql(&SqlPayload::new(stmt), None).await?.data;
            print_json(&Value::Array(rows.into_iter().map(Value::Object).collect()))
        }
        Command::GetFile { path, output } => run_get_file(&client, path, output).await,
        Command::PutFile { path, local } => {
            let bytes = tokio::fs::read(&local).await?;
            let payload = PutFilePayload {
                path,
                is_dir: false,
                mod_time: None,
                file: Some(PutFileContent { bytes: Bytes::from(bytes), ..PutFileContent::default() }),
            };
            client.put_file(&payload, None).await?;
            println!("ok");
            Ok(())
        }
        Command::Notebooks => {
            let notebooks = client.ls_notebooks(None).await?.data.notebooks;
            for notebook in notebooks {
                let state = if notebook.closed { "closed" } else { "open" };
                println!("{}\t{}\t{state}", notebook.id, notebook.name);
            }
            Ok(())
        }
        Command::Fetch { url, method, headers, data } => run_fetch(&client, url, &method, headers, data).await,
        Command::Broadcast { channel, send, count, idle_secs } => {
            run_broadcast(&client, channel, send, count, Duration::from_secs(idle_secs)).await
        }
    }
}

async fn run_call(client: &Client, pathname: String, data: Option<String>, raw: bool) -> Result<(), CliError> {
    let mut request = RequestDescriptor::new(pathname, Method::POST);
    if let Some(data) = data {
        request = request.payload(serde_json::from_str::<Value>(&data)?);
    }
    if raw {
        request = request.raw();
    }
    match client.dispatch(request).await? {
        ResponseData::Envelope(envelope) => print_json(&envelope.data),
        ResponseData::Json(value) => print_json(&value),
        other => write_stdout(&other.into_bytes().await?),
    }
}

async fn run_get_file(client: &Client, path: String, output: Option<PathBuf>) -> Result<(), CliError> {
    let data = client
        .get_file(&PathPayload::new(path), Some(ResponseKind::ArrayBuffer), None)
        .await?;
    let bytes = data.into_bytes().await?;
    match output {
        Some(output) => tokio::fs::write(output, &bytes).await?,
        None => write_stdout(&bytes)?,
    }
    Ok(())
}

async fn run_fetch(
    client: &Client,
    url: String,
    method: &str,
    headers: Vec<String>,
    data: Option<String>,
) -> Result<(), CliError> {
    let method: Method = method
        .to_ascii_uppercase()
        .parse()
        .map_err(|_| CliError::InvalidMethod(method.to_owned()))?;
    let pairs = headers
        .iter()
        .map(|raw| {
            raw.split_once(':')
                .map(|(name, value)| (name.trim().to_owned(), value.trim().to_owned()))
                .ok_or_else(|| CliError::InvalidHeader(raw.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let init = RequestInit {
        method: Some(method),
        headers: (!pairs.is_empty()).then_some(HeadersInit::Pairs(pairs)),
        body: data.map(Bytes::from),
    };

    let response = client.fetch(url, Some(init)).await?;
    eprintln!("{} {}", response.status.as_u16(), response.status_text);
    for (name, value) in &response.headers {
        eprintln!("{name}: {}", String::from_utf8_lossy(value.as_bytes()));
    }
    write_stdout(&response.body)
}

async fn run_broadcast(
    client: &Client,
    channel: String,
    send: Option<String>,
    count: Option<usize>,
    idle: Duration,
) -> Result<(), CliError> {
    let mut stream = client.broadcast(&BroadcastParams::channel(channel), &[], None).await?;
    if let Some(message) = send {
        stream
            .send(Message::Text(message.into()))
            .await
            .map_err(|e| CliError::Broadcast(Box::new(e)))?;
    }

    let mut received = 0usize;
    while count.is_none_or(|limit| received < limit) {
        let next = tokio::time::timeout(idle, stream.next())
            .await
            .map_err(|_| CliError::Timeout)?;
        let Some(message) = next else {
            break;
        };
        match message.map_err(|e| CliError::Broadcast(Box::new(e)))? {
            Message::Text(text) => println!("{text}"),
            Message::Binary(bytes) => println!("<{} bytes>", bytes.len()),
            Message::Close(_) => break,
            _ => continue,
        }
        received += 1;
    }
    Ok(())
}

fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn write_stdout(bytes: &[u8]) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(bytes)?;
    stdout.flush()?;
    Ok(())
}

/// `RUST_LOG` directives, or warnings only when unset or unparsable.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
