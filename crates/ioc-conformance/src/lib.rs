//! # IoC Conformance
//!
//! IoC 互操作契约的一致性测试套件。容器作者可以用它验证自己的
//! [`IocFactory`] / [`IocRegistry`] 实现是否遵守契约义务。
//!
//! ## 核心能力
//!
//! - [`checks`] - 单项契约性质检查（可用性与获取一致、全新实例、查询不 panic）
//! - [`ConformanceSuite`] - 组合多项检查的套件运行器
//! - [`ConformanceReport`] - 通过/失败统计与失败明细
//!
//! ## 基本使用
//!
//! ```rust,no_run
//! use ioc_abstractions::{IocRegistry, TypeSpec};
//! use ioc_conformance::ConformanceSuite;
//!
//! fn verify(registry: &dyn IocRegistry) {
//!     let report = ConformanceSuite::new()
//!         .with_registry(registry)
//!         .add_registry_spec(TypeSpec::named("Logger"))
//!         .add_probe_spec(TypeSpec::named("!!malformed!!"))
//!         .run();
//!
//!     assert!(report.is_conformant(), "注册表违反契约: {:?}", report.failures);
//! }
//! ```
//!
//! [`IocFactory`]: ioc_abstractions::IocFactory
//! [`IocRegistry`]: ioc_abstractions::IocRegistry

pub mod checks;
pub mod errors;
pub mod suite;

pub use checks::*;
pub use errors::*;
pub use suite::*;
