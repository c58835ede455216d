use crate::context::Context;
use crate::log::{LogLevel, Logger};
use serde::Deserialize;
use std::error::Error;
use tracing::{Dispatch, Span};

struct SpanKey;

/// 把 tracing span 绑定到上下文，[`TracingLogger`] 输出的事件会落在这个 span 内
pub fn with_span(ctx: &Context, span: Span) -> Context {
    ctx.with_value::<SpanKey, _>(span)
}

/// 取出上下文中绑定的 span
pub fn span_from_context(ctx: &Context) -> Option<&Span> {
    ctx.value::<SpanKey, Span>()
}

/// TracingLogger 配置
///
/// 始终使用调用时的默认 dispatcher，暂无可配置项
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TracingLoggerConfig {}

/// 转发到 tracing 的 logger
///
/// 未指定 dispatch 时，每次调用都使用当前线程的默认 dispatcher，
/// 因此之后再安装的 subscriber 也能收到日志。
///
/// 所有事件都从本模块内的同一组 callsite 发出：subscriber 看到的 target 是
/// `ctxlog::log::tracing_logger`，file/line 也指向这里而不是调用方。
/// 需要按调用位置过滤时，把调用方信息放进上下文 span 的字段里。
#[derive(Debug, Clone, Default)]
pub struct TracingLogger {
    dispatch: Option<Dispatch>,
}

impl TracingLogger {
    pub fn new(dispatch: Option<Dispatch>) -> Self {
        Self { dispatch }
    }

    /// 固定输出到指定的 dispatch
    pub fn with_dispatch(dispatch: Dispatch) -> Self {
        Self::new(Some(dispatch))
    }

    fn emit(&self, ctx: &Context, level: LogLevel, msg: &str) {
        let event = || match level {
            LogLevel::Debug => tracing::debug!("{}", msg),
            LogLevel::Info => tracing::info!("{}", msg),
            LogLevel::Warn => tracing::warn!("{}", msg),
            LogLevel::Error => tracing::error!("{}", msg),
        };

        let in_span = || match span_from_context(ctx) {
            Some(span) => span.in_scope(event),
            None => event(),
        };

        match &self.dispatch {
            Some(dispatch) => tracing::dispatcher::with_default(dispatch, in_span),
            None => in_span(),
        }
    }
}

impl From<TracingLoggerConfig> for TracingLogger {
    fn from(_config: TracingLoggerConfig) -> Self {
        Self::default()
    }
}

impl Logger for TracingLogger {
    fn debug(&self, ctx: &Context, msg: &str) {
        self.emit(ctx, LogLevel::Debug, msg);
    }

    fn info(&self, ctx: &Context, msg: &str) {
        self.emit(ctx, LogLevel::Info, msg);
    }

    fn warn(&self, ctx: &Context, err: &dyn Error) {
        self.emit(ctx, LogLevel::Warn, &err.to_string());
    }

    fn error(&self, ctx: &Context, err: &dyn Error) {
        self.emit(ctx, LogLevel::Error, &err.to_string());
    }
}
