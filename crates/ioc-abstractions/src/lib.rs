//! # IoC Interop Abstractions
//!
//! IoC 互操作抽象层，定义跨容器实现共享的解析契约。
//!
//! ## 核心契约
//!
//! - [`IocFactory`] - 工厂契约：按类型规格创建全新实例
//! - [`IocRegistry`] - 注册表契约：按类型规格获取共享实例并查询可用性
//!
//! 两个契约相互独立，不共享公共基 trait，仅通过"按类型规格解析"
//! 这一共同词汇组合；具体容器可以同时实现两者。
//! 应用代码只依赖这两个抽象即可与任意容器实现解耦。
//!
//! ## 支持类型
//!
//! - [`TypeSpec`] - 解析请求的查找键（类型令牌或稳定字符串标识）
//! - [`BoxedInstance`] / [`SharedInstance`] - 类型擦除的实例传递形式
//! - [`ResolutionError`] - 唯一的失败种类，由 `create`/`get` 上报，`has` 永不产生

pub mod errors;
pub mod factory;
pub mod instance;
pub mod registry;
pub mod spec;

pub use errors::*;
pub use factory::*;
pub use instance::*;
pub use registry::*;
pub use spec::*;
