use crate::context::Context;
use std::error::Error;
use std::fmt;

/// 日志接口
///
/// 需要打日志的组件只依赖这个 trait，不依赖具体实现。
/// 所有方法都不返回错误：输出失败由实现自行吞掉，不能影响调用方的控制流。
pub trait Logger: Send + Sync {
    /// 以 DEBUG 级别记录一条消息
    fn debug(&self, ctx: &Context, msg: &str);

    /// 以 INFO 级别记录一条消息
    fn info(&self, ctx: &Context, msg: &str);

    /// 以 WARN 级别记录一个错误
    fn warn(&self, ctx: &Context, err: &dyn Error);

    /// 以 ERROR 级别记录一个错误
    fn error(&self, ctx: &Context, err: &dyn Error);

    /// 以 WARN 级别记录一条格式化消息
    ///
    /// 默认实现把格式化结果包装成 [`FormattedError`] 交给 [`Logger::warn`]。
    fn warnf(&self, ctx: &Context, args: fmt::Arguments<'_>) {
        self.warn(ctx, &FormattedError::new(args));
    }

    /// 以 ERROR 级别记录一条格式化消息
    fn errorf(&self, ctx: &Context, args: fmt::Arguments<'_>) {
        self.error(ctx, &FormattedError::new(args));
    }
}

/// 由格式化参数生成的错误，`warnf` / `errorf` 的默认实现使用
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct FormattedError(pub String);

impl FormattedError {
    pub fn new(args: fmt::Arguments<'_>) -> Self {
        Self(args.to_string())
    }
}
