//! 工厂契约
//!
//! 按类型规格创建全新实例的能力边界

use crate::errors::ResolutionResult;
use crate::instance::{downcast_boxed, BoxedInstance};
use crate::spec::TypeSpec;
use std::any::Any;

/// IoC 工厂 trait
///
/// 每次调用都构造并返回一个全新的独立实例。实例共享是注册表契约的
/// 职责，工厂实现不得隐式缓存或复用已返回的实例。
///
/// 构造期间的副作用（文件 I/O、网络访问等）由实现自行定义，
/// 契约不做纯度承诺。
pub trait IocFactory: Send + Sync {
    /// 创建指定类型规格的新实例
    ///
    /// # Errors
    ///
    /// 当类型规格未知、无法解析、指代没有具体映射的抽象类型，
    /// 或实例构造过程本身失败时，返回解析失败错误，
    /// 错误中携带触发失败的类型规格。
    fn create(&self, spec: &TypeSpec) -> ResolutionResult<BoxedInstance>;
}

/// IoC 工厂泛型扩展
///
/// 为所有工厂实现（包括 `dyn IocFactory` trait 对象）提供
/// 按具体类型解析的便捷方法。
pub trait IocFactoryExt: IocFactory {
    /// 创建指定具体类型的新实例
    ///
    /// 以 `T` 的类型令牌构造类型规格，委托给 [`IocFactory::create`]
    /// 后将结果收窄为 `T`。
    ///
    /// # Errors
    ///
    /// 除 [`IocFactory::create`] 的失败条件外，当工厂返回的实例
    /// 无法转换为 `T` 时返回 [`ResolutionError::TypeMismatch`]。
    ///
    /// [`ResolutionError::TypeMismatch`]: crate::errors::ResolutionError::TypeMismatch
    fn create_typed<T>(&self) -> ResolutionResult<T>
    where
        T: Any + Send + Sync,
    {
        let spec = TypeSpec::of::<T>();
        let instance = self.create(&spec)?;
        downcast_boxed(instance, &spec)
    }
}

impl<F: IocFactory + ?Sized> IocFactoryExt for F {}
