//! 日志模块
//!
//! 只有四个级别的日志门面：DEBUG、INFO、WARN、ERROR。
//!
//! # 特性
//!
//! - [`Logger`] trait：所有实现只需要支持四个方法
//! - 进程级默认 logger：[`get_default`] / [`set_default`]，无锁读取
//! - 通过 [`Context`](crate::Context) 在调用链上传递 logger：[`with_context`] / [`from_context`]
//! - 两个实现：转发到 tracing 的 [`TracingLogger`]，按行写入 `Write` 的 [`WriterLogger`]
//! - 基于配置创建：[`init`]、[`create_logger_from_type_options`]
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use ctxlog::log::*;
//! use ctxlog::Context;
//! use std::sync::Arc;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config: LogsConfig = json5::from_str(r#"
//!         {
//!             default: {
//!                 type: "WriterLogger",
//!                 options: {
//!                     target: "stderr",
//!                     debug: false
//!                 }
//!             }
//!         }
//!     "#)?;
//!     init(config)?;
//!
//!     // 为某个请求绑定单独的 logger
//!     let ctx = with_context(&Context::background(), Arc::new(WriterLogger::stdout(true)));
//!     debug(&ctx, "request accepted");
//!
//!     // 没有绑定时使用默认 logger
//!     info(&Context::background(), "application started");
//!
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod global;
pub mod level;
pub mod logger;
pub mod macros;
pub mod registry;
pub mod tracing_logger;
pub mod writer_logger;

// 重新导出核心类型
pub use level::LogLevel;
pub use logger::{FormattedError, Logger};

pub use global::{get_default, init, set_default, LogsConfig};

pub use context::{
    debug,
    error,
    errorf,
    from_context,
    info,
    warn,
    // 格式化版本，通常通过 warnf! / errorf! 宏调用
    warnf,
    with_context,
};

pub use registry::{create_logger_from_type_options, register_logger, register_loggers};

pub use tracing_logger::{span_from_context, with_span, TracingLogger, TracingLoggerConfig};
pub use writer_logger::{Target, WriterLogger, WriterLoggerConfig};
