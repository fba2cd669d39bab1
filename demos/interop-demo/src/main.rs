//! # IoC 互操作契约演示
//!
//! 演示一个玩具容器同时实现两个互操作契约，包括：
//! - 通过注册表契约获取共享实例
//! - 通过工厂契约创建全新实例
//! - 解析失败的统一上报
//! - 用一致性套件验证容器守约

use dashmap::DashMap;
use ioc_abstractions::{
    BoxedInstance, IocFactory, IocFactoryExt, IocRegistry, IocRegistryExt, ResolutionError,
    ResolutionResult, SharedInstance, TypeSpec,
};
use ioc_conformance::ConformanceSuite;
use std::sync::Arc;
use tracing::{info, warn};

// ========== 示例服务 ==========

/// 应用配置服务
pub struct AppConfig {
    pub service_name: String,
    pub max_connections: u32,
}

/// 问候服务
pub struct Greeter {
    pub greeting: String,
}

impl Greeter {
    pub fn greet(&self, who: &str) -> String {
        format!("{}, {}!", self.greeting, who)
    }
}

// ========== 玩具容器 ==========

type Constructor = fn() -> BoxedInstance;

/// 同时实现注册表契约和工厂契约的玩具容器
///
/// 共享实例登记后直接缓存，构造器每次调用产出全新实例。
pub struct ServiceContainer {
    shared: DashMap<TypeSpec, SharedInstance>,
    constructors: DashMap<TypeSpec, Constructor>,
}

impl ServiceContainer {
    /// 创建空容器
    pub fn new() -> Self {
        Self {
            shared: DashMap::new(),
            constructors: DashMap::new(),
        }
    }

    /// 登记共享实例
    pub fn register_shared(&self, spec: TypeSpec, instance: SharedInstance) {
        info!("登记共享实例: {}", spec);
        self.shared.insert(spec, instance);
    }

    /// 登记全新实例的构造器
    pub fn register_constructor(&self, spec: TypeSpec, constructor: Constructor) {
        info!("登记实例构造器: {}", spec);
        self.constructors.insert(spec, constructor);
    }
}

impl Default for ServiceContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl IocRegistry for ServiceContainer {
    fn get(&self, spec: &TypeSpec) -> ResolutionResult<SharedInstance> {
        self.shared
            .get(spec)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| ResolutionError::not_resolvable(spec.clone()))
    }

    fn has(&self, spec: &TypeSpec) -> bool {
        self.shared.contains_key(spec)
    }
}

impl IocFactory for ServiceContainer {
    fn create(&self, spec: &TypeSpec) -> ResolutionResult<BoxedInstance> {
        self.constructors
            .get(spec)
            .map(|entry| entry.value()())
            .ok_or_else(|| ResolutionError::not_resolvable(spec.clone()))
    }
}

// ========== 演示函数 ==========

/// 演示注册表契约的共享实例语义
fn demo_shared_resolution(registry: &dyn IocRegistry) -> ResolutionResult<()> {
    info!("=== 共享实例获取演示 ===");

    let config = registry.get_typed::<AppConfig>()?;
    info!(
        "获取配置: service_name={}, max_connections={}",
        config.service_name, config.max_connections
    );

    let first = registry.get_typed::<AppConfig>()?;
    let second = registry.get_typed::<AppConfig>()?;
    info!(
        "两次获取指向同一实例: {}",
        Arc::ptr_eq(&first, &second)
    );

    info!(
        "可用性查询: AppConfig={}, Unregistered={}",
        registry.has_typed::<AppConfig>(),
        registry.has(&TypeSpec::named("Unregistered"))
    );
    Ok(())
}

/// 演示工厂契约的全新实例语义
fn demo_fresh_creation(factory: &dyn IocFactory) -> ResolutionResult<()> {
    info!("=== 全新实例创建演示 ===");

    let mut first = factory.create_typed::<Greeter>()?;
    let second = factory.create_typed::<Greeter>()?;

    // 两个实例互相独立，修改一个不影响另一个
    first.greeting = "你好".to_string();
    info!("第一个实例: {}", first.greet("互操作"));
    info!("第二个实例: {}", second.greet("interop"));
    Ok(())
}

/// 演示解析失败的统一上报
fn demo_failure_reporting(registry: &dyn IocRegistry) {
    info!("=== 解析失败上报演示 ===");

    let spec = TypeSpec::named("Unregistered");
    match registry.get(&spec) {
        Ok(_) => warn!("未登记的类型规格不应当解析成功"),
        Err(error) => info!("按预期上报失败: {}", error),
    }
}

/// 演示一致性套件对容器的验证
fn demo_conformance(container: &ServiceContainer) {
    info!("=== 契约一致性验证演示 ===");

    let report = ConformanceSuite::new()
        .with_registry(container)
        .with_factory(container)
        .add_registry_spec(TypeSpec::of::<AppConfig>())
        .add_registry_spec(TypeSpec::named("Unregistered"))
        .add_factory_spec(TypeSpec::of::<Greeter>())
        .add_probe_spec(TypeSpec::named("!!malformed!!"))
        .run();

    info!(
        "套件结果: 守约={}, 通过 {} 项, 失败 {} 项",
        report.is_conformant(),
        report.passed,
        report.failures.len()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    info!("🚀 IoC 互操作契约演示程序启动");

    let container = ServiceContainer::new();
    container.register_shared(
        TypeSpec::of::<AppConfig>(),
        Arc::new(AppConfig {
            service_name: "interop-demo".to_string(),
            max_connections: 32,
        }),
    );
    container.register_constructor(TypeSpec::of::<Greeter>(), || {
        Box::new(Greeter {
            greeting: "Hello".to_string(),
        })
    });

    demo_shared_resolution(&container)?;
    demo_fresh_creation(&container)?;
    demo_failure_reporting(&container);
    demo_conformance(&container);

    info!("✓ 演示完成");
    Ok(())
}
