//! HTTP服务模块
//!
//! 单一路径（默认 `/diary`）：GET 查询，POST 记录，其他方法（包括 HEAD）返回 405

pub mod error;
pub mod handlers;
pub mod middleware;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::diary::DiaryService;
use crate::errors::Result;

pub use error::ApiError;

/// HTTP服务
pub struct HttpService {
    service: DiaryService,
    path: String,
}

impl HttpService {
    pub fn new(service: DiaryService, path: impl Into<String>) -> Self {
        Self {
            service,
            path: path.into(),
        }
    }

    /// 构建路由
    pub fn router(&self) -> Router {
        Router::new()
            .route(
                &self.path,
                get(handlers::query_entries)
                    .post(handlers::record_entry)
                    .head(handlers::method_not_allowed)
                    .fallback(handlers::method_not_allowed),
            )
            .layer(axum::middleware::from_fn(middleware::logging_middleware))
            .layer(TraceLayer::new_for_http())
            .with_state(self.service.clone())
    }

    /// 在给定的监听器上运行，收到 Ctrl+C 后优雅退出
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("HTTP服务已停止");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("收到退出信号，正在关闭服务..."),
        Err(e) => {
            warn!("无法监听退出信号: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
