//! 错误类型定义

use ioc_abstractions::{ResolutionError, TypeSpec};
use thiserror::Error;

/// 一致性检查失败
///
/// 每个变体都携带触发失败的类型规格，便于定位违反契约的注册条目。
#[derive(Error, Debug)]
pub enum ConformanceFailure {
    /// 可用性查询声明可用，获取却失败了
    #[error("声明可用的类型规格获取失败: {spec}, 原因: {source}")]
    UnexpectedGetFailure {
        /// 检查的类型规格
        spec: TypeSpec,
        /// 获取操作返回的错误
        source: ResolutionError,
    },

    /// 可用性查询声明不可用，获取却成功了
    #[error("声明不可用的类型规格获取成功: {spec}")]
    UnexpectedGetSuccess {
        /// 检查的类型规格
        spec: TypeSpec,
    },

    /// 声明可创建的类型规格创建失败
    #[error("类型规格创建失败: {spec}, 原因: {source}")]
    UnexpectedCreateFailure {
        /// 检查的类型规格
        spec: TypeSpec,
        /// 创建操作返回的错误
        source: ResolutionError,
    },

    /// 连续两次创建返回了同一实例
    #[error("工厂返回了同一实例而不是全新实例: {spec}")]
    InstancesNotDistinct {
        /// 检查的类型规格
        spec: TypeSpec,
    },

    /// 可用性查询发生 panic
    #[error("可用性查询发生 panic: {spec}")]
    AvailabilityQueryPanicked {
        /// 触发 panic 的类型规格
        spec: TypeSpec,
    },
}

impl ConformanceFailure {
    /// 获取触发失败的类型规格
    pub fn spec(&self) -> &TypeSpec {
        match self {
            Self::UnexpectedGetFailure { spec, .. }
            | Self::UnexpectedGetSuccess { spec }
            | Self::UnexpectedCreateFailure { spec, .. }
            | Self::InstancesNotDistinct { spec }
            | Self::AvailabilityQueryPanicked { spec } => spec,
        }
    }
}

/// 结果类型别名
pub type ConformanceResult = Result<(), ConformanceFailure>;
