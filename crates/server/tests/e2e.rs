use std::net::SocketAddr;

use configs::{AppConfig, StatusPolicy};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use server::startup::{build_app, prepare_database};

struct TestApp {
    base_url: String,
}

async fn start_server(policy: StatusPolicy) -> anyhow::Result<TestApp> {
    let mut cfg = AppConfig::default();
    cfg.server.status_policy = policy;
    cfg.database.url = configs::DEFAULT_DATABASE_URL.to_string();
    cfg.database.normalize_from_env();

    let db = prepare_database(&cfg.database).await?;
    let app = build_app(db, &cfg);

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn ride_body(rider: &str) -> Value {
    json!({
        "start_lat": 20,
        "start_long": 100,
        "end_lat": 20,
        "end_long": 100,
        "rider_name": rider,
        "driver_name": "Victor",
        "driver_vehicle": "Volvo"
    })
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let app = start_server(StatusPolicy::AlwaysOk).await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.text().await?, "Healthy");
    Ok(())
}

#[tokio::test]
async fn e2e_create_on_empty_store() -> anyhow::Result<()> {
    let app = start_server(StatusPolicy::AlwaysOk).await?;
    let c = reqwest::Client::new();

    let res = c.post(format!("{}/rides", app.base_url)).json(&ride_body("John")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let rows = res.json::<Value>().await?;
    assert_eq!(rows.as_array().map(Vec::len), Some(1));
    let ride = &rows[0];
    assert_eq!(ride["rideID"], 1);
    assert_eq!(ride["startLat"], 20.0);
    assert_eq!(ride["startLong"], 100.0);
    assert_eq!(ride["endLat"], 20.0);
    assert_eq!(ride["endLong"], 100.0);
    assert_eq!(ride["riderName"], "John");
    assert_eq!(ride["driverName"], "Victor");
    assert_eq!(ride["driverVehicle"], "Volvo");
    Ok(())
}

#[tokio::test]
async fn e2e_create_rejects_out_of_range_start() -> anyhow::Result<()> {
    let app = start_server(StatusPolicy::AlwaysOk).await?;
    let c = reqwest::Client::new();

    let mut body = ride_body("John");
    body["start_lat"] = json!(-91);
    let res = c.post(format!("{}/rides", app.base_url)).json(&body).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let err = res.json::<Value>().await?;
    assert_eq!(err["error_code"], "VALIDATION_ERROR");
    assert_eq!(
        err["message"],
        "Start latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively"
    );

    // nothing was stored
    let res = c.get(format!("{}/rides", app.base_url)).send().await?;
    assert_eq!(res.json::<Value>().await?["error_code"], "RIDES_NOT_FOUND_ERROR");
    Ok(())
}

#[tokio::test]
async fn e2e_list_windows_and_lookup() -> anyhow::Result<()> {
    let app = start_server(StatusPolicy::AlwaysOk).await?;
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/rides", app.base_url)).send().await?;
    let err = res.json::<Value>().await?;
    assert_eq!(err, json!({"error_code": "RIDES_NOT_FOUND_ERROR", "message": "Could not find any rides"}));

    for i in 0..5 {
        c.post(format!("{}/rides", app.base_url)).json(&ride_body(&format!("rider-{i}"))).send().await?;
    }

    let rows = c
        .get(format!("{}/rides?from=2&count=2", app.base_url))
        .send()
        .await?
        .json::<Value>()
        .await?;
    let ids: Vec<i64> = rows.as_array().into_iter().flatten().filter_map(|r| r["rideID"].as_i64()).collect();
    assert_eq!(ids, [3, 4]);

    let err = c
        .get(format!("{}/rides?from=1.1&count=-2", app.base_url))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(err["error_code"], "VALIDATION_ERROR");

    let one = c.get(format!("{}/rides/4", app.base_url)).send().await?.json::<Value>().await?;
    assert_eq!(one[0]["rideID"], 4);
    assert_eq!(one[0]["riderName"], "rider-3");

    let missing = c.get(format!("{}/rides/99", app.base_url)).send().await?.json::<Value>().await?;
    assert_eq!(missing["error_code"], "RIDES_NOT_FOUND_ERROR");
    Ok(())
}

#[tokio::test]
async fn e2e_conventional_status_codes() -> anyhow::Result<()> {
    let app = start_server(StatusPolicy::Conventional).await?;
    let c = reqwest::Client::new();

    let mut body = ride_body("John");
    body["driver_vehicle"] = json!("");
    let res = c.post(format!("{}/rides", app.base_url)).json(&body).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["message"], "Driver vehicle must be a non empty string");

    let res = c.get(format!("{}/rides/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = c.post(format!("{}/rides", app.base_url)).json(&ride_body("John")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(())
}
