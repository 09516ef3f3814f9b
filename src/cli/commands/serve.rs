//! 启动日记服务

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::cli::context::ExecutionContext;
use crate::diary::DiaryService;
use crate::errors::Result;
use crate::http::HttpService;
use crate::storage::FileRepository;

/// 绑定端口并运行服务，直到收到 Ctrl+C
pub async fn execute(context: &ExecutionContext) -> Result<()> {
    let repository = Arc::new(FileRepository::new(context.data_file()));
    let service = DiaryService::new(repository);
    let http = HttpService::new(service, context.route_path());

    let listener = TcpListener::bind((context.host(), context.port())).await?;
    let local_addr = listener.local_addr()?;
    info!("HTTP服务监听于 {}{}", local_addr, context.route_path());

    print_banner(context, local_addr);

    http.serve(listener).await
}

fn print_banner(context: &ExecutionContext, local_addr: SocketAddr) {
    let now = chrono::Local::now();

    println!("=== 日记API服务 ===");
    println!("启动时间: {}", now.format("%Y年%m月%d日 %H:%M:%S"));
    println!("端口: {}", local_addr.port());
    println!("数据文件: {}", context.data_file().display());
    println!("按 Ctrl+C 退出。");
}
