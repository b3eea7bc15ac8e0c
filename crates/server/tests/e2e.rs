use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, StorageBackend};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::Value;
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

// Real listener on an ephemeral port, memory backend so no database is needed.
async fn start_server() -> anyhow::Result<TestApp> {
    let mut cfg = AppConfig::default();
    cfg.storage.backend = StorageBackend::Memory;
    let app: Router = server::startup::build_app(&cfg).await?;

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_phonebook_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/people", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let res = c.post(format!("{}/people", app.base_url))
        .form(&[("name", "Charlie"), ("phoneNr", "8734265034")])
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    let res = c.get(format!("{}/people", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let people = res.json::<Vec<Value>>().await?;
    assert_eq!(people.len(), 1);
    let id = people[0]["id"].as_i64().unwrap();

    let res = c.put(format!("{}/people/{}", app.base_url, id))
        .form(&[("name", "Charlie Brown"), ("phoneNr", "5550100")])
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.get(format!("{}/people/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Charlie Brown");
    assert_eq!(body["phoneNr"], "5550100");

    let res = c.delete(format!("{}/people/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.get(format!("{}/people/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}
