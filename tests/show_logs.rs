// End-to-end tests for GET /show-logs/ over a real listener.
use std::io::Write;

use logwindow::Dataset;
use logwindow_service::{start_service, ServiceHandle};
use serde_json::{json, Value};

const USER: &str = "31b20726-b870-47ba-bbcd-372b38527c89";
const ANCHOR: &str = "2021-01-09 23:01:59.140";

fn write_dataset() -> anyhow::Result<tempfile::NamedTempFile> {
    let mut file = tempfile::NamedTempFile::new()?;
    let timestamps = [
        "2021-01-09 22:58:00.000",
        "2021-01-09 22:59:30.500",
        "2021-01-09 23:00:12.250",
        "2021-01-09 23:01:59.140",
        "2021-01-09 23:02:40.003",
        "2021-01-09 23:03:00.000",
        "2021-01-09 23:05:17.999",
    ];
    for (seq, ts) in timestamps.iter().enumerate() {
        writeln!(file, "{}", json!({ "user_id": USER, "timestamp": ts, "seq": seq }))?;
        writeln!(file, "{}", json!({ "user_id": "other-user", "timestamp": ts }))?;
    }
    Ok(file)
}

struct Harness {
    handle: ServiceHandle,
    client: reqwest::Client,
    _dataset: tempfile::NamedTempFile,
}

impl Harness {
    async fn start() -> anyhow::Result<Self> {
        let file = write_dataset()?;
        let dataset = Dataset::load(file.path())?;
        let handle = start_service("127.0.0.1:0", dataset).await?;
        Ok(Self {
            handle,
            client: reqwest::Client::new(),
            _dataset: file,
        })
    }

    async fn show_logs(
        &self,
        anchor: &str,
        user_id: &str,
        limit: i64,
        scrolling: i64,
    ) -> anyhow::Result<(u16, Value)> {
        let response = self
            .client
            .get(format!("http://{}/show-logs/", self.handle.addr))
            .query(&[
                ("anchor_timestamp", anchor.to_string()),
                ("user_id", user_id.to_string()),
                ("log_appearance_limit", limit.to_string()),
                ("scrolling", scrolling.to_string()),
            ])
            .send()
            .await?;
        let status = response.status().as_u16();
        Ok((status, response.json().await?))
    }
}

#[tokio::test]
async fn anchor_is_centered_with_full_window() -> anyhow::Result<()> {
    let harness = Harness::start().await?;

    let (status, body) = harness.show_logs(ANCHOR, USER, 1, 0).await?;
    assert_eq!(status, 200);

    let logs = body["logs"].as_array().expect("logs array");
    assert_eq!(logs.len(), 3);
    let center = logs
        .iter()
        .position(|log| log["timestamp"] == ANCHOR)
        .expect("anchor log returned");
    assert_eq!(logs[..center].len(), logs[center + 1..].len());
    assert_eq!(body["user_logs_amount"], 7);

    harness.handle.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn forward_scroll_stops_at_the_budget() -> anyhow::Result<()> {
    let harness = Harness::start().await?;
    let limit = 1;

    let (_, sample) = harness.show_logs(ANCHOR, USER, limit, 0).await?;
    let to_end = sample["scrolling_steps_to_end"].as_i64().expect("budget");

    let (last_ok, _) = harness.show_logs(ANCHOR, USER, limit, to_end - limit).await?;
    let (first_rejected, body) = harness
        .show_logs(ANCHOR, USER, limit, to_end - limit + 1)
        .await?;

    assert_eq!(last_ok, 200);
    assert_eq!(first_rejected, 400);
    assert_eq!(body["kind"], "scroll_exceeds_end");

    harness.handle.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn backward_scroll_stops_at_the_budget() -> anyhow::Result<()> {
    let harness = Harness::start().await?;
    let limit = 1;

    let (_, sample) = harness.show_logs(ANCHOR, USER, limit, 0).await?;
    let to_start = sample["scrolling_steps_to_start"].as_i64().expect("budget");

    let (last_ok, _) = harness
        .show_logs(ANCHOR, USER, limit, -(to_start - limit))
        .await?;
    let (first_rejected, body) = harness
        .show_logs(ANCHOR, USER, limit, -(to_start - limit + 1))
        .await?;

    assert_eq!(last_ok, 200);
    assert_eq!(first_rejected, 400);
    assert_eq!(body["kind"], "scroll_exceeds_start");
    assert_eq!(body["max_log_appearance_limit"], 0);

    harness.handle.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn invalid_inputs_are_bad_requests() -> anyhow::Result<()> {
    let harness = Harness::start().await?;

    let (status, body) = harness.show_logs(ANCHOR, ".................", 1, 0).await?;
    assert_eq!((status, body["kind"].clone()), (400, json!("unknown_user")));

    let (status, body) = harness
        .show_logs("0000-00-00 00:00:00.000", USER, 1, 0)
        .await?;
    assert_eq!((status, body["kind"].clone()), (400, json!("malformed_timestamp")));

    let (status, body) = harness.show_logs(ANCHOR, USER, -1, 0).await?;
    assert_eq!((status, body["kind"].clone()), (400, json!("invalid_radius")));

    let (status, body) = harness
        .show_logs("2021-01-09 23:05:17.999", USER, 1, 0)
        .await?;
    assert_eq!((status, body["kind"].clone()), (400, json!("anchor_not_found")));

    harness.handle.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn terms_of_service_and_health_are_served() -> anyhow::Result<()> {
    let harness = Harness::start().await?;
    let base = format!("http://{}", harness.handle.addr);

    let tos: Value = harness
        .client
        .get(format!("{base}/tos"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(tos["massage"], "No terms of service");

    let health: Value = harness
        .client
        .get(format!("{base}/health"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(health["records"], 14);

    harness.handle.shutdown().await;
    Ok(())
}
