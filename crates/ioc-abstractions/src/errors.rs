//! 错误类型定义

use crate::spec::TypeSpec;
use thiserror::Error;

/// 解析失败错误
///
/// 契约定义的唯一失败种类，由 `create` 与 `get` 上报；`has` 永不产生。
/// 实现必须以该错误显式上报失败，而不是返回空实例或静默吞掉；
/// 契约不定义重试或恢复策略。
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// 类型规格未注册或无法解析
    #[error("类型规格无法解析: {spec}")]
    NotResolvable {
        /// 请求的类型规格
        spec: TypeSpec,
    },

    /// 实例构造失败
    #[error("实例构造失败: {spec}, 原因: {source}")]
    ConstructionFailed {
        /// 请求的类型规格
        spec: TypeSpec,
        /// 底层构造错误
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// 解析结果无法转换为请求的具体类型
    #[error("实例类型不匹配: {spec}")]
    TypeMismatch {
        /// 请求的类型规格
        spec: TypeSpec,
    },
}

impl ResolutionError {
    /// 创建无法解析错误
    pub fn not_resolvable(spec: TypeSpec) -> Self {
        Self::NotResolvable { spec }
    }

    /// 创建构造失败错误
    pub fn construction_failed(
        spec: TypeSpec,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::ConstructionFailed {
            spec,
            source: source.into(),
        }
    }

    /// 创建类型不匹配错误
    pub fn type_mismatch(spec: TypeSpec) -> Self {
        Self::TypeMismatch { spec }
    }

    /// 获取触发失败的类型规格
    pub fn spec(&self) -> &TypeSpec {
        match self {
            Self::NotResolvable { spec }
            | Self::ConstructionFailed { spec, .. }
            | Self::TypeMismatch { spec } => spec,
        }
    }
}

/// 结果类型别名
pub type ResolutionResult<T> = Result<T, ResolutionError>;
