//! 服务启动器
//!
//! 提供统一的服务启动模式

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use axum::http::StatusCode;
use axum::Router;
use storefront_config::{AppConfig, ServerConfig, ServiceDefaults};
use storefront_errors::AppResult;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::runtime::{init_runtime, shutdown_signal};

/// 运行 HTTP 服务
///
/// 所有微服务的统一入口点：
/// 1. 加载配置
/// 2. 初始化日志
/// 3. 调用用户提供的闭包构建路由（数据库、下游客户端等在这里创建）
/// 4. 挂载公共中间件（超时、请求日志、CORS）
/// 5. 启动服务器并处理 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run(ServiceDefaults::new("rating-service", 4000), |config| async move {
///         Ok(rating_service::router(state))
///     })
///     .await
/// }
/// ```
pub async fn run<F, Fut>(
    defaults: ServiceDefaults,
    router_builder: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(AppConfig) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    let config = AppConfig::load(&AppConfig::config_dir(), defaults)?;

    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    let app_name = config.app_name.clone();
    let server = config.server.clone();
    let router = router_builder(config).await?;
    let app = with_common_layers(router, &server);

    let addr: SocketAddr = format!("{}:{}", server.host, server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("{} service stopped", app_name);
    Ok(())
}

/// 挂载所有服务共用的中间件
pub fn with_common_layers(router: Router, server: &ServerConfig) -> Router {
    router
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(server.request_timeout_secs),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health_check;
    use axum::{
        body::{to_bytes, Body},
        http::Request,
        routing::get,
    };
    use tower::ServiceExt;

    fn server() -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 5,
        }
    }

    #[tokio::test]
    async fn test_health_through_common_layers() {
        let app = with_common_layers(Router::new().route("/health", get(health_check)), &server());

        let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_cors_headers_present() {
        let app = with_common_layers(Router::new().route("/health", get(health_check)), &server());

        let req = Request::builder()
            .uri("/health")
            .header("Origin", "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_slow_handler_times_out() {
        let config = ServerConfig {
            request_timeout_secs: 1,
            ..server()
        };
        let slow = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "done"
            }),
        );
        let app = with_common_layers(slow, &config);

        let req = Request::builder().uri("/slow").body(Body::empty()).unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }
}
