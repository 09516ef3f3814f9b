use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

use diary_server::cli::{context::ExecutionContext, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 解析命令行参数，端口无效时 clap 直接退出
    let cli = Cli::parse();

    // 创建执行上下文以确定最终的日志级别
    let context = match ExecutionContext::new(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("创建执行上下文失败: {}", e);
            std::process::exit(1);
        }
    };

    // guard 在进程结束前不能释放，否则文件日志会丢失
    let _guard = init_tracing(&context)?;

    info!("{} {} 启动，日志级别: {}", diary_server::NAME, diary_server::VERSION, context.log_level());

    if let Err(e) = cli.execute_with_context(context).await {
        error!("服务启动失败: {}", e);
        eprintln!("\n服务启动失败: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(context: &ExecutionContext) -> Result<Option<WorkerGuard>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let level = context.log_level();
    let env_filter = format!("diary_server={level},tower_http={level}");

    let console_layer = if context.log_json() {
        fmt::layer().json().boxed()
    } else {
        fmt::layer().boxed()
    };

    let (file_layer, guard) = match context.log_dir() {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "diary-server.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_ansi(false).with_writer(writer)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| env_filter.into()))
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
