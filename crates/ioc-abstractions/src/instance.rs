//! 实例传递形式定义
//!
//! 契约对实例的形状不做任何约束，实例以类型擦除的形式跨越契约边界，
//! 由调用方按类型规格所指代的类型收窄。

use crate::errors::{ResolutionError, ResolutionResult};
use crate::spec::TypeSpec;
use std::any::Any;
use std::sync::Arc;

/// 新建实例
///
/// 工厂契约的返回形式：调用方独占所有权的全新实例。
pub type BoxedInstance = Box<dyn Any + Send + Sync>;

/// 共享实例
///
/// 注册表契约的返回形式：可在多个持有方之间共享的实例句柄。
pub type SharedInstance = Arc<dyn Any + Send + Sync>;

/// 将新建实例收窄为具体类型
///
/// # Errors
///
/// 实例的实际类型与 `T` 不符时返回 [`ResolutionError::TypeMismatch`]，
/// 并携带请求时使用的类型规格。
pub fn downcast_boxed<T>(instance: BoxedInstance, spec: &TypeSpec) -> ResolutionResult<T>
where
    T: Any + Send + Sync,
{
    instance
        .downcast::<T>()
        .map(|instance| *instance)
        .map_err(|_| ResolutionError::type_mismatch(spec.clone()))
}

/// 将共享实例收窄为具体类型
///
/// # Errors
///
/// 实例的实际类型与 `T` 不符时返回 [`ResolutionError::TypeMismatch`]，
/// 并携带请求时使用的类型规格。
pub fn downcast_shared<T>(instance: SharedInstance, spec: &TypeSpec) -> ResolutionResult<Arc<T>>
where
    T: Any + Send + Sync,
{
    instance
        .downcast::<T>()
        .map_err(|_| ResolutionError::type_mismatch(spec.clone()))
}
