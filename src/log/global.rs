use crate::cfg::TypeOptions;
use crate::log::registry::create_logger_from_type_options;
use crate::log::{Logger, TracingLogger};
use anyhow::Result;
use arc_swap::ArcSwap;
use serde::Deserialize;
use smart_default::SmartDefault;
use std::sync::Arc;

/// 全局默认 logger
///
/// 首次访问时初始化为使用 tracing 当前默认 dispatcher 的 [`TracingLogger`]。
/// 读取走 `ArcSwap::load`，不加锁；`set_default` 整体替换引用。
///
/// `ArcSwap<T>` 要求 `T: Sized`，`dyn Logger` 不满足，所以外层再包一层 `Arc`，
/// 读取时多一次指针跳转。
static DEFAULT_LOGGER: once_cell::sync::Lazy<ArcSwap<Arc<dyn Logger>>> =
    once_cell::sync::Lazy::new(|| {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::default());
        ArcSwap::from_pointee(logger)
    });

/// 全局日志配置
#[derive(Debug, Clone, Deserialize, SmartDefault, PartialEq)]
#[serde(default)]
pub struct LogsConfig {
    /// 默认 logger 配置
    #[default(TypeOptions { type_name: "TracingLogger".to_string(), options: serde_json::json!({}) })]
    pub default: TypeOptions,
}

/// 获取当前默认 logger
pub fn get_default() -> Arc<dyn Logger> {
    let guard = DEFAULT_LOGGER.load();
    Arc::clone(&**guard)
}

/// 替换默认 logger
///
/// 对并发的 [`get_default`] 调用是原子的：读到的要么是旧值要么是新值。
///
/// 参数是 `Arc<dyn Logger>`，传不进空值，默认 logger 永远存在：
///
/// ```compile_fail
/// ctxlog::set_default(None);
/// ```
pub fn set_default(logger: Arc<dyn Logger>) {
    DEFAULT_LOGGER.store(Arc::new(logger));
}

/// 按配置创建 logger 并设置为默认 logger
///
/// 创建失败时返回错误，原有的默认 logger 保持不变。
///
/// # 示例
///
/// ```ignore
/// let config: LogsConfig = json5::from_str(r#"
///     {
///         default: {
///             type: "WriterLogger",
///             options: { target: "stdout", debug: true }
///         }
///     }
/// "#)?;
/// ctxlog::log::init(config)?;
/// ```
pub fn init(config: LogsConfig) -> Result<()> {
    let logger = create_logger_from_type_options(&config.default)?;
    set_default(logger);
    Ok(())
}
