use std::{path::PathBuf, str::FromStr, time::Duration};

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use tower::ServiceExt;
use weekmenu::{
    AppState,
    config::{
        Config, DatabaseConfig, ObservabilityConfig, RakutenConfig, ServerConfig, SessionConfig,
    },
    session::WorkflowStore,
};

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    #[allow(dead_code)]
    pub async fn post_form(&self, uri: &str, form: &[(&str, &str)]) -> Response<Body> {
        self.send(form_request(uri, form, None)).await
    }
}

#[allow(dead_code)]
pub fn form_request(uri: &str, form: &[(&str, &str)], cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");

    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    builder
        .body(Body::from(serde_urlencoded::to_string(form).unwrap()))
        .unwrap()
}

#[allow(dead_code)]
pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// `name=value` part of the `Set-Cookie` header.
#[allow(dead_code)]
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_owned)
}

#[allow(dead_code)]
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn test_config(url: String) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        database: DatabaseConfig {
            url,
            max_connections: 1,
        },
        rakuten: RakutenConfig {
            // Nothing listens on the discard port
            endpoint: "http://127.0.0.1:9/ranking".to_owned(),
            timeout_secs: 1,
            ..Default::default()
        },
        session: SessionConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub async fn setup_test_app(path: PathBuf) -> anyhow::Result<TestApp> {
    let url = format!("sqlite:{}", path.to_str().unwrap());
    let opts = SqliteConnectOptions::from_str(&url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    weekmenu_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;
    drop(conn);

    let state = AppState::new(
        test_config(url),
        weekmenu_shared::State::single(pool),
        WorkflowStore::new(Duration::from_secs(60)),
    );

    Ok(TestApp {
        router: weekmenu::routes::router(state.clone()),
        state,
    })
}

#[allow(dead_code)]
pub async fn add_ingredient(app: &TestApp, name: &str) -> anyhow::Result<String> {
    Ok(app
        .state
        .pantry_command
        .add(weekmenu_pantry::AddInput {
            name: name.to_owned(),
            quantity: "1個".to_owned(),
            purchase_date: "2026-10-19".to_owned(),
            expiration_date: "2026-10-26".to_owned(),
            memo: None,
            storage_method: "冷蔵".to_owned(),
        })
        .await?)
}

#[allow(dead_code)]
pub async fn create_recipe(
    app: &TestApp,
    title: &str,
    ingredients: &str,
) -> anyhow::Result<String> {
    Ok(app
        .state
        .recipe_command
        .create(weekmenu_recipe::CreateInput {
            title: title.to_owned(),
            recipe_url: "https://recipe.example.com/1".to_owned(),
            ingredients: ingredients.to_owned(),
            ..Default::default()
        })
        .await?)
}
