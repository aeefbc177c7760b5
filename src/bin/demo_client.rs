//! Fires the sample requests at a running adboard service and prints the replies.
//!
//! Usage: `demo_client [create-user|get-user|create-ad|get-ad|delete-ad|hello|all]`
//! Target: `DEMO_BASE_URL`, default `http://127.0.0.1:8088`.

use anyhow::bail;
use reqwest::{Client, RequestBuilder};
use serde_json::json;

async fn send(label: &str, req: RequestBuilder) -> anyhow::Result<()> {
    let res = req.send().await?;
    let status = res.status();
    let body = res.text().await?;
    println!("{label}: {status} {body}");
    Ok(())
}

async fn run(client: &Client, base: &str, step: &str) -> anyhow::Result<()> {
    match step {
        "create-user" => {
            send(
                step,
                client.post(format!("{base}/users")).json(&json!({
                    "username": "vanya",
                    "email": "vanya@vanya.ru",
                    "password": "Ivan123",
                })),
            )
            .await
        }
        "get-user" => send(step, client.get(format!("{base}/users/1"))).await,
        "create-ad" => {
            send(
                step,
                client.post(format!("{base}/ads")).json(&json!({
                    "title": "vanya",
                    "description": "vanya",
                    "creator_id": 1,
                })),
            )
            .await
        }
        "get-ad" => send(step, client.get(format!("{base}/ads/1"))).await,
        "delete-ad" => send(step, client.delete(format!("{base}/ads/1"))).await,
        "hello" => send(step, client.get(format!("{base}/ads/hello"))).await,
        other => bail!("unknown step {other:?}"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let base = std::env::var("DEMO_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:8088".into());
    let step = std::env::args().nth(1).unwrap_or_else(|| "all".into());
    let client = Client::new();

    if step == "all" {
        for s in [
            "hello",
            "create-user",
            "get-user",
            "create-ad",
            "get-ad",
            "delete-ad",
            "get-ad",
        ] {
            run(&client, &base, s).await?;
        }
        return Ok(());
    }
    run(&client, &base, &step).await
}
