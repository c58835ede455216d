// Logger 类型注册表和工厂函数

use crate::cfg::TypeOptions;
use crate::log::{Logger, TracingLogger, TracingLoggerConfig, WriterLogger, WriterLoggerConfig};
use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

// 构造函数类型
type Constructor = Box<dyn Fn(JsonValue) -> Result<Arc<dyn Logger>> + Send + Sync>;

// 全局注册表，内置 logger 在初始化时写入，早于任何用户注册
static REGISTRY: Lazy<RwLock<HashMap<String, Constructor>>> = Lazy::new(|| {
    let mut registry = HashMap::new();
    registry.insert(
        "WriterLogger".to_string(),
        constructor::<WriterLogger, WriterLoggerConfig>(),
    );
    registry.insert(
        "TracingLogger".to_string(),
        constructor::<TracingLogger, TracingLoggerConfig>(),
    );
    RwLock::new(registry)
});

fn constructor<T, Config>() -> Constructor
where
    T: Logger + TryFrom<Config> + 'static,
    <T as TryFrom<Config>>::Error: Into<anyhow::Error>,
    Config: DeserializeOwned + 'static,
{
    Box::new(|value: JsonValue| -> Result<Arc<dyn Logger>> {
        let config: Config = serde_json::from_value(value)?;
        let logger = T::try_from(config).map_err(Into::<anyhow::Error>::into)?;
        Ok(Arc::new(logger) as Arc<dyn Logger>)
    })
}

/// 注册一个可以从配置创建的 logger 类型
///
/// `T` 需要实现 `TryFrom<Config>`（实现了 `From<Config>` 的类型自动满足），
/// 同名注册会覆盖之前的构造函数，包括内置的 `WriterLogger` 和 `TracingLogger`。
///
/// # 示例
/// ```ignore
/// register_logger::<MyLogger, MyLoggerConfig>("MyLogger")?;
///
/// let opts = TypeOptions::from_json(r#"{ type: "MyLogger", options: {...} }"#)?;
/// let logger = create_logger_from_type_options(&opts)?;
/// ```
pub fn register_logger<T, Config>(type_name: &str) -> Result<()>
where
    T: Logger + TryFrom<Config> + 'static,
    <T as TryFrom<Config>>::Error: Into<anyhow::Error>,
    Config: DeserializeOwned + 'static,
{
    let mut registry = REGISTRY
        .write()
        .map_err(|_| anyhow!("Failed to acquire write lock"))?;
    registry.insert(type_name.to_string(), constructor::<T, Config>());
    Ok(())
}

/// 重新注册内置的 `WriterLogger` 和 `TracingLogger`
///
/// 内置类型在注册表初始化时已经存在，只有被同名注册覆盖后才需要调用。
pub fn register_loggers() -> Result<()> {
    register_logger::<WriterLogger, WriterLoggerConfig>("WriterLogger")?;
    register_logger::<TracingLogger, TracingLoggerConfig>("TracingLogger")?;
    Ok(())
}

/// 根据 TypeOptions 创建 logger
pub fn create_logger_from_type_options(type_options: &TypeOptions) -> Result<Arc<dyn Logger>> {
    let registry = REGISTRY
        .read()
        .map_err(|_| anyhow!("Failed to acquire read lock"))?;

    let constructor = registry
        .get(&type_options.type_name)
        .ok_or_else(|| anyhow!("Logger type '{}' not registered", type_options.type_name))?;

    constructor(type_options.options.clone()).map_err(|e| {
        anyhow!(
            "failed to create logger '{}': {}",
            type_options.type_name,
            e
        )
    })
}
