//! 单项契约性质检查
//!
//! 每个检查针对契约的一条义务，输入待检的实现与类型规格，
//! 返回是否违约。检查之间相互独立，可以单独调用，
//! 也可以通过 [`ConformanceSuite`] 批量运行。
//!
//! [`ConformanceSuite`]: crate::suite::ConformanceSuite

use crate::errors::{ConformanceFailure, ConformanceResult};
use ioc_abstractions::{BoxedInstance, IocFactory, IocRegistry, TypeSpec};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::debug;

/// 检查可用性查询声明可用的类型规格能被成功获取
///
/// 对应义务：`has` 返回 `true` 时，随后的 `get` 必须成功并
/// 返回可用的实例，而不是空结果。
///
/// # Errors
///
/// `get` 失败时返回 [`ConformanceFailure::UnexpectedGetFailure`]。
pub fn check_available_spec(registry: &dyn IocRegistry, spec: &TypeSpec) -> ConformanceResult {
    debug!("检查可用类型规格的获取: {}", spec);

    match registry.get(spec) {
        Ok(_) => Ok(()),
        Err(source) => Err(ConformanceFailure::UnexpectedGetFailure {
            spec: spec.clone(),
            source,
        }),
    }
}

/// 检查可用性查询声明不可用的类型规格获取必然失败
///
/// 对应义务：`has` 返回 `false` 时，`get` 必须上报解析失败，
/// 不得静默返回实例。
///
/// # Errors
///
/// `get` 成功时返回 [`ConformanceFailure::UnexpectedGetSuccess`]。
pub fn check_unavailable_spec(registry: &dyn IocRegistry, spec: &TypeSpec) -> ConformanceResult {
    debug!("检查不可用类型规格的获取: {}", spec);

    match registry.get(spec) {
        Err(_) => Ok(()),
        Ok(_) => Err(ConformanceFailure::UnexpectedGetSuccess { spec: spec.clone() }),
    }
}

/// 按可用性查询的结果逐个检查 `has` 与 `get` 的一致性
///
/// # Errors
///
/// 任何一个类型规格违反一致性义务时返回对应的失败。
pub fn check_registry_consistency(
    registry: &dyn IocRegistry,
    specs: &[TypeSpec],
) -> ConformanceResult {
    for spec in specs {
        if registry.has(spec) {
            check_available_spec(registry, spec)?;
        } else {
            check_unavailable_spec(registry, spec)?;
        }
    }
    Ok(())
}

/// 检查工厂连续两次创建返回互相独立的实例
///
/// 对应义务：工厂每次调用都构造全新实例，不得复用。所有权语义
/// 已经结构性排除了实例共享，此检查额外验证两次创建都成功且
/// 实例地址互异。对零大小类型的实例地址没有判别意义。
///
/// # Errors
///
/// 创建失败时返回 [`ConformanceFailure::UnexpectedCreateFailure`]；
/// 两次创建返回同一地址时返回 [`ConformanceFailure::InstancesNotDistinct`]。
pub fn check_distinct_instances(factory: &dyn IocFactory, spec: &TypeSpec) -> ConformanceResult {
    debug!("检查工厂实例独立性: {}", spec);

    let first = create_for_check(factory, spec)?;
    let second = create_for_check(factory, spec)?;

    if instance_addr(&first) == instance_addr(&second) {
        return Err(ConformanceFailure::InstancesNotDistinct { spec: spec.clone() });
    }
    Ok(())
}

/// 检查可用性查询对任意输入都不 panic
///
/// 对应义务：`has` 是不抛错的查询操作，对格式错误或未知的
/// 类型规格也必须只返回布尔值。
///
/// # Errors
///
/// 任何一次查询 panic 时返回 [`ConformanceFailure::AvailabilityQueryPanicked`]。
pub fn check_has_never_panics(registry: &dyn IocRegistry, specs: &[TypeSpec]) -> ConformanceResult {
    for spec in specs {
        debug!("探测可用性查询: {}", spec);

        let outcome = catch_unwind(AssertUnwindSafe(|| registry.has(spec)));
        if outcome.is_err() {
            return Err(ConformanceFailure::AvailabilityQueryPanicked { spec: spec.clone() });
        }
    }
    Ok(())
}

fn create_for_check(
    factory: &dyn IocFactory,
    spec: &TypeSpec,
) -> Result<BoxedInstance, ConformanceFailure> {
    factory
        .create(spec)
        .map_err(|source| ConformanceFailure::UnexpectedCreateFailure {
            spec: spec.clone(),
            source,
        })
}

fn instance_addr(instance: &BoxedInstance) -> *const () {
    let erased: &(dyn Any + Send + Sync) = instance.as_ref();
    erased as *const (dyn Any + Send + Sync) as *const ()
}
