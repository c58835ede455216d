use crate::context::Context;
use crate::log::global::get_default;
use crate::log::Logger;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// 上下文中存放 logger 的键
struct LoggerKey;

/// 把 logger 绑定到上下文
///
/// 返回新的子上下文，`ctx` 本身不变；内层绑定会遮蔽外层绑定。
pub fn with_context(ctx: &Context, logger: Arc<dyn Logger>) -> Context {
    ctx.with_value::<LoggerKey, _>(logger)
}

/// 从上下文取出 logger
///
/// 上下文中没有绑定 logger 时返回 [`get_default`]。
pub fn from_context(ctx: &Context) -> Arc<dyn Logger> {
    match ctx.value::<LoggerKey, Arc<dyn Logger>>() {
        Some(logger) => Arc::clone(logger),
        None => get_default(),
    }
}

// ========== 使用上下文中 logger 的便捷方法 ==========

/// 使用 [`from_context`] 得到的 logger 记录 DEBUG 级别日志
pub fn debug(ctx: &Context, msg: &str) {
    from_context(ctx).debug(ctx, msg);
}

/// 使用 [`from_context`] 得到的 logger 记录 INFO 级别日志
pub fn info(ctx: &Context, msg: &str) {
    from_context(ctx).info(ctx, msg);
}

/// 使用 [`from_context`] 得到的 logger 以 WARN 级别记录错误
pub fn warn(ctx: &Context, err: &dyn Error) {
    from_context(ctx).warn(ctx, err);
}

/// 使用 [`from_context`] 得到的 logger 以 ERROR 级别记录错误
pub fn error(ctx: &Context, err: &dyn Error) {
    from_context(ctx).error(ctx, err);
}

/// 使用 [`from_context`] 得到的 logger 记录 WARN 级别格式化日志
///
/// 通常通过 [`warnf!`](crate::warnf) 宏调用
pub fn warnf(ctx: &Context, args: fmt::Arguments<'_>) {
    from_context(ctx).warnf(ctx, args);
}

/// 使用 [`from_context`] 得到的 logger 记录 ERROR 级别格式化日志
///
/// 通常通过 [`errorf!`](crate::errorf) 宏调用
pub fn errorf(ctx: &Context, args: fmt::Arguments<'_>) {
    from_context(ctx).errorf(ctx, args);
}
