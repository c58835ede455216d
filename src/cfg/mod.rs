//! cfg 模块 - 配置描述
//!
//! 以 `{ type, options }` 的形式描述一个可按名称创建的组件

pub mod type_options;

pub use type_options::TypeOptions;
