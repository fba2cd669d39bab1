//! 类型规格定义
//!
//! 提供解析请求所使用的查找键

use std::any::TypeId;
use std::fmt;

/// 类型规格
///
/// 解析请求的查找键，指代调用方希望获取实例的类型。
/// 可以由 Rust 类型令牌构造（[`TypeSpec::of`]），也可以由稳定的
/// 字符串标识构造（[`TypeSpec::named`]，用于配置驱动的注册场景）。
///
/// 两种构造方式产生互不相等的键：以类型令牌注册的条目只响应
/// 类型令牌规格，以名称注册的条目只响应名称规格。
/// 规格本身不做任何校验，"可解析"由具体容器定义。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeSpec {
    /// 类型标识名称
    name: String,
    /// 类型ID（仅类型令牌构造时存在）
    type_id: Option<TypeId>,
}

impl TypeSpec {
    /// 从类型令牌创建类型规格
    ///
    /// 名称取完整的类型路径，供诊断输出使用。
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            name: std::any::type_name::<T>().to_string(),
            type_id: Some(TypeId::of::<T>()),
        }
    }

    /// 从稳定的字符串标识创建类型规格
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_id: None,
        }
    }

    /// 获取类型标识名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 获取类型ID
    pub fn type_id(&self) -> Option<TypeId> {
        self.type_id
    }

    /// 获取简短的类型名称（不包含模块路径）
    pub fn short_name(&self) -> &str {
        self.name.split("::").last().unwrap_or(&self.name)
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
