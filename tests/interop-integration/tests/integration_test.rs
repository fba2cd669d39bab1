//! IoC 互操作契约的集中集成测试
//!
//! 用贴近真实容器的测试替身覆盖两个契约的完整往返：
//! 具名与带类型的规格解析、共享与全新实例语义、失败上报，
//! 以及一致性套件对守约和违约实现的判定。

use ioc_abstractions::{
    downcast_shared, BoxedInstance, IocFactory, IocFactoryExt, IocRegistry, IocRegistryExt,
    ResolutionError, ResolutionResult, SharedInstance, TypeSpec,
};
use ioc_conformance::{ConformanceFailure, ConformanceSuite};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use tracing::debug;

static INIT_LOGGER: Once = Once::new();

/// 初始化测试日志系统（只初始化一次）
fn init_test_logger() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .try_init()
            .ok(); // 忽略初始化失败的错误
    });
}

/// 日志服务抽象
trait Logger: Send + Sync {
    fn log(&self, message: &str) -> String;
}

/// 日志服务实现
#[derive(Debug)]
struct LoggerImpl {
    prefix: String,
}

impl LoggerImpl {
    fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Logger for LoggerImpl {
    fn log(&self, message: &str) -> String {
        format!("[{}] {}", self.prefix, message)
    }
}

/// 带序号的组件，用于区分工厂的每次创建
#[derive(Debug)]
struct Widget {
    serial: usize,
}

type SharedBuilder = Box<dyn Fn() -> anyhow::Result<SharedInstance> + Send + Sync>;

/// 贴近真实容器的注册表替身：登记构造器，首次获取后缓存共享实例
struct InteropRegistry {
    builders: HashMap<TypeSpec, SharedBuilder>,
    cache: RwLock<HashMap<TypeSpec, SharedInstance>>,
}

impl InteropRegistry {
    fn new() -> Self {
        Self {
            builders: HashMap::new(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn register<F>(&mut self, spec: TypeSpec, builder: F)
    where
        F: Fn() -> anyhow::Result<SharedInstance> + Send + Sync + 'static,
    {
        self.builders.insert(spec, Box::new(builder));
    }
}

impl IocRegistry for InteropRegistry {
    fn get(&self, spec: &TypeSpec) -> ResolutionResult<SharedInstance> {
        if let Some(cached) = self.cache.read().get(spec) {
            return Ok(cached.clone());
        }

        let builder = self
            .builders
            .get(spec)
            .ok_or_else(|| ResolutionError::not_resolvable(spec.clone()))?;
        let instance = builder()
            .map_err(|source| ResolutionError::construction_failed(spec.clone(), source))?;

        debug!("构造并缓存共享实例: {}", spec);
        self.cache.write().insert(spec.clone(), instance.clone());
        Ok(instance)
    }

    fn has(&self, spec: &TypeSpec) -> bool {
        self.builders.contains_key(spec) || self.cache.read().contains_key(spec)
    }
}

type OwnedBuilder = Box<dyn Fn() -> anyhow::Result<BoxedInstance> + Send + Sync>;

/// 工厂替身：每次调用登记的构造器，产出全新实例
struct InteropFactory {
    builders: HashMap<TypeSpec, OwnedBuilder>,
}

impl InteropFactory {
    fn new() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    fn register<F>(&mut self, spec: TypeSpec, builder: F)
    where
        F: Fn() -> anyhow::Result<BoxedInstance> + Send + Sync + 'static,
    {
        self.builders.insert(spec, Box::new(builder));
    }
}

impl IocFactory for InteropFactory {
    fn create(&self, spec: &TypeSpec) -> ResolutionResult<BoxedInstance> {
        let builder = self
            .builders
            .get(spec)
            .ok_or_else(|| ResolutionError::not_resolvable(spec.clone()))?;
        builder().map_err(|source| ResolutionError::construction_failed(spec.clone(), source))
    }
}

fn logger_registry() -> InteropRegistry {
    let mut registry = InteropRegistry::new();
    registry.register(TypeSpec::named("Logger"), || {
        Ok(Arc::new(LoggerImpl::new("app")))
    });
    registry.register(TypeSpec::of::<LoggerImpl>(), || {
        Ok(Arc::new(LoggerImpl::new("typed")))
    });
    registry
}

/// 只依赖契约的消费方，不知道具体的容器类型
fn announce(registry: &dyn IocRegistry) -> anyhow::Result<String> {
    let spec = TypeSpec::named("Logger");
    let instance = registry.get(&spec)?;
    let logger = downcast_shared::<LoggerImpl>(instance, &spec)?;
    Ok(logger.log("启动完成"))
}

#[test]
fn test_named_spec_maps_abstraction_to_implementation() {
    init_test_logger();
    let registry = logger_registry();
    let spec = TypeSpec::named("Logger");

    assert!(registry.has(&spec));
    let instance = registry.get(&spec).unwrap();
    let logger = downcast_shared::<LoggerImpl>(instance, &spec).unwrap();
    assert_eq!(logger.log("hello"), "[app] hello");
}

#[test]
fn test_typed_specs_resolve_through_extension_methods() {
    init_test_logger();
    let registry = logger_registry();
    let registry: &dyn IocRegistry = &registry;

    assert!(registry.has_typed::<LoggerImpl>());
    let logger = registry.get_typed::<LoggerImpl>().unwrap();
    assert_eq!(logger.log("hello"), "[typed] hello");
}

#[test]
fn test_shared_instances_are_reused_across_gets() {
    init_test_logger();
    let registry = logger_registry();

    let first = registry.get_typed::<LoggerImpl>().unwrap();
    let second = registry.get_typed::<LoggerImpl>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_unregistered_spec_reports_offending_spec() {
    init_test_logger();
    let registry = InteropRegistry::new();
    let spec = TypeSpec::named("Unregistered");

    assert!(!registry.has(&spec));
    let error = registry.get(&spec).unwrap_err();
    assert!(matches!(error, ResolutionError::NotResolvable { .. }));
    assert_eq!(error.spec().name(), "Unregistered");
}

#[test]
fn test_availability_query_is_infallible_on_malformed_names() {
    init_test_logger();
    let registry = logger_registry();

    assert!(!registry.has(&TypeSpec::named("")));
    assert!(!registry.has(&TypeSpec::named("!!malformed!!")));
    assert!(!registry.has(&TypeSpec::named("a".repeat(4096))));
}

#[test]
fn test_factory_returns_fresh_instances_per_call() {
    init_test_logger();
    let mut factory = InteropFactory::new();
    let serial = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&serial);
    factory.register(TypeSpec::of::<Widget>(), move || {
        Ok(Box::new(Widget {
            serial: counter.fetch_add(1, Ordering::SeqCst),
        }))
    });

    let factory: &dyn IocFactory = &factory;
    let first = factory.create_typed::<Widget>().unwrap();
    let second = factory.create_typed::<Widget>().unwrap();

    assert_ne!(first.serial, second.serial);
    assert_eq!(serial.load(Ordering::SeqCst), 2);
}

#[test]
fn test_factory_construction_failure_preserves_source() {
    init_test_logger();
    let mut factory = InteropFactory::new();
    factory.register(TypeSpec::named("Flaky"), || {
        Err(anyhow::anyhow!("下游资源未就绪"))
    });

    let error = factory.create(&TypeSpec::named("Flaky")).unwrap_err();
    assert!(matches!(error, ResolutionError::ConstructionFailed { .. }));
    assert_eq!(error.spec().name(), "Flaky");
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_consumer_wired_only_against_contracts() {
    init_test_logger();
    let registry = logger_registry();

    let line = announce(&registry).unwrap();
    assert_eq!(line, "[app] 启动完成");

    let empty = InteropRegistry::new();
    assert!(announce(&empty).is_err());
}

#[test]
fn test_conformance_suite_accepts_interop_doubles() {
    init_test_logger();
    let registry = logger_registry();
    let mut factory = InteropFactory::new();
    factory.register(TypeSpec::of::<Widget>(), || Ok(Box::new(Widget { serial: 0 })));

    let report = ConformanceSuite::new()
        .with_registry(&registry)
        .with_factory(&factory)
        .add_registry_spec(TypeSpec::named("Logger"))
        .add_registry_spec(TypeSpec::of::<LoggerImpl>())
        .add_registry_spec(TypeSpec::named("Unregistered"))
        .add_factory_spec(TypeSpec::of::<Widget>())
        .add_probe_spec(TypeSpec::named(""))
        .add_probe_spec(TypeSpec::named("!!malformed!!"))
        .run();

    assert!(report.is_conformant(), "违约明细: {:?}", report.failures);
    // 一致性 3 项 + 不 panic 探测 5 项 + 工厂独立性 1 项
    assert_eq!(report.passed, 9);
}

#[test]
fn test_conformance_suite_rejects_misbehaving_registry() {
    init_test_logger();

    /// 声明可用却永远获取失败的违约注册表
    struct MisbehavingRegistry;

    impl IocRegistry for MisbehavingRegistry {
        fn get(&self, spec: &TypeSpec) -> ResolutionResult<SharedInstance> {
            Err(ResolutionError::not_resolvable(spec.clone()))
        }

        fn has(&self, _spec: &TypeSpec) -> bool {
            true
        }
    }

    let registry = MisbehavingRegistry;
    let report = ConformanceSuite::new()
        .with_registry(&registry)
        .add_registry_spec(TypeSpec::named("Anything"))
        .run();

    assert!(!report.is_conformant());
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(
        report.failures[0],
        ConformanceFailure::UnexpectedGetFailure { .. }
    ));
}
