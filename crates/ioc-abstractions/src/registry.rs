//! 注册表契约
//!
//! 按类型规格获取共享实例与查询可用性的能力边界

use crate::errors::ResolutionResult;
use crate::instance::{downcast_shared, SharedInstance};
use crate::spec::TypeSpec;
use std::any::Any;
use std::sync::Arc;

/// IoC 注册表 trait
///
/// 按类型规格提供共享实例。"共享"是策略标签而非结构保证：
/// 进程级单例、作用域实例、对象池都是合法的实现策略，
/// 重复以同一类型规格调用 [`get`] 允许但不要求返回同一实例。
///
/// `Send + Sync` 约束使注册表可以作为 trait 对象跨线程共享，
/// 但契约本身不保证任何操作的原子性：[`has`] 与随后的 [`get`]
/// 不构成原子对，并发与重入纪律由具体实现自行文档化。
///
/// [`get`]: IocRegistry::get
/// [`has`]: IocRegistry::has
pub trait IocRegistry: Send + Sync {
    /// 获取指定类型规格的共享实例
    ///
    /// # Errors
    ///
    /// 失败条件与工厂契约一致，另加注册表专属条件（如类型规格未注册）。
    /// 实现必须以解析失败错误显式上报，不得返回空实例或静默吞掉。
    fn get(&self, spec: &TypeSpec) -> ResolutionResult<SharedInstance>;

    /// 查询指定类型规格是否可以获取实例
    ///
    /// 返回 `true` 时随后的 [`get`] 预期成功（竞态等异常情况除外）；
    /// 返回 `false` 时 [`get`] 预期失败。本方法是 [`get`] 的不抛错
    /// 查询对应项：对任何输入（包括格式错误或未知的类型规格）
    /// 都只返回布尔值，不得产生解析失败，也不得 panic。
    ///
    /// [`get`]: IocRegistry::get
    fn has(&self, spec: &TypeSpec) -> bool;
}

/// IoC 注册表泛型扩展
///
/// 为所有注册表实现（包括 `dyn IocRegistry` trait 对象）提供
/// 按具体类型解析的便捷方法。
pub trait IocRegistryExt: IocRegistry {
    /// 获取指定具体类型的共享实例
    ///
    /// # Errors
    ///
    /// 除 [`IocRegistry::get`] 的失败条件外，当注册表返回的实例
    /// 无法转换为 `T` 时返回 [`ResolutionError::TypeMismatch`]。
    ///
    /// [`ResolutionError::TypeMismatch`]: crate::errors::ResolutionError::TypeMismatch
    fn get_typed<T>(&self) -> ResolutionResult<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        let spec = TypeSpec::of::<T>();
        let instance = self.get(&spec)?;
        downcast_shared(instance, &spec)
    }

    /// 查询指定具体类型是否可以获取实例
    fn has_typed<T>(&self) -> bool
    where
        T: ?Sized + 'static,
    {
        self.has(&TypeSpec::of::<T>())
    }
}

impl<R: IocRegistry + ?Sized> IocRegistryExt for R {}
