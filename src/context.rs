//! 请求上下文
//!
//! 不可变的键值链表：每次 `with_value` 都会在当前节点之上派生出一个新的子节点，
//! 父节点保持不变。查找时从最内层节点向根节点逐级回溯，返回离调用方最近的值。
//!
//! 键是任意 `'static` 标记类型（按 `TypeId` 区分），值以 `Arc<dyn Any>` 存储，
//! 取值时按调用方期望的类型 downcast，类型不匹配视为不存在。

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

struct Node {
    parent: Option<Arc<Node>>,
    key: TypeId,
    value: Arc<dyn Any + Send + Sync>,
}

/// 请求级上下文
///
/// `Clone` 只复制一个 `Arc`，可以随意在线程、异步任务之间传递。
#[derive(Clone, Default)]
pub struct Context {
    node: Option<Arc<Node>>,
}

impl Context {
    /// 空的根上下文
    pub fn background() -> Self {
        Self::default()
    }

    /// 派生一个绑定了 `K => value` 的子上下文
    ///
    /// 当前上下文不受影响；子上下文中原有的其他值仍然可见，
    /// 同一个键的旧值被遮蔽而不是被删除。
    pub fn with_value<K, V>(&self, value: V) -> Self
    where
        K: 'static,
        V: Any + Send + Sync,
    {
        Self {
            node: Some(Arc::new(Node {
                parent: self.node.clone(),
                key: TypeId::of::<K>(),
                value: Arc::new(value),
            })),
        }
    }

    /// 查找键 `K` 上最近绑定的值
    ///
    /// 最近的值类型不是 `V` 时返回 `None`，不会继续向外层查找。
    pub fn value<K, V>(&self) -> Option<&V>
    where
        K: 'static,
        V: Any + Send + Sync,
    {
        let key = TypeId::of::<K>();
        let mut node = self.node.as_deref();
        while let Some(current) = node {
            if current.key == key {
                return current.value.downcast_ref::<V>();
            }
            node = current.parent.as_deref();
        }
        None
    }

    /// 链上绑定的值的个数（包含被遮蔽的值）
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut node = self.node.as_deref();
        while let Some(current) = node {
            depth += 1;
            node = current.parent.as_deref();
        }
        depth
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("depth", &self.depth())
            .finish()
    }
}
