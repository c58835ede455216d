/// 日志宏模块
///
/// 格式化版本的便捷方法，logger 从上下文中解析
///
/// # 示例
///
/// ```ignore
/// use ctxlog::{errorf, warnf};
///
/// warnf!(&ctx, "disk {}% full", usage);
/// errorf!(&ctx, "upload {} failed after {} retries", key, retries);
/// ```

/// 记录 WARN 级别格式化日志
///
/// # 示例
///
/// ```ignore
/// warnf!(&ctx, "slow query: {}ms", elapsed);
/// ```
#[macro_export]
macro_rules! warnf {
    ($ctx:expr, $($arg:tt)+) => {
        $crate::log::warnf($ctx, format_args!($($arg)+))
    };
}

/// 记录 ERROR 级别格式化日志
///
/// # 示例
///
/// ```ignore
/// errorf!(&ctx, "connection to {} lost", host);
/// ```
#[macro_export]
macro_rules! errorf {
    ($ctx:expr, $($arg:tt)+) => {
        $crate::log::errorf($ctx, format_args!($($arg)+))
    };
}
