//! ctxlog - 随上下文传递的日志门面
//!
//! 提供四个级别的 `Logger` trait、
//! 进程级可替换的默认 logger，以及通过请求上下文传递 logger 的能力。
//!
//! ## 模块
//!
//! - **context**: 不可变、可派生的请求上下文
//! - **log**: Logger trait、默认 logger、上下文绑定、便捷方法和两个实现
//! - **cfg**: `{ type, options }` 形式的配置描述
//!
//! ## 设计理念
//!
//! - 🔒 **不打断调用方**: 所有日志方法都不返回错误，输出失败就地吞掉
//! - ⚡ **无锁读取**: 默认 logger 使用原子引用替换，读取从不阻塞
//! - 🔄 **可组合**: 组件只依赖 `Logger` trait，具体实现按需替换

pub mod cfg;
pub mod context;
pub mod log;

// 重新导出主要的公共 API
pub use cfg::TypeOptions;

pub use context::Context;

pub use log::{
    debug, error, errorf, from_context, get_default, info, init, set_default, warn, warnf,
    with_context, LogLevel, Logger, LogsConfig, TracingLogger, WriterLogger,
};
