//! 契约一致性套件运行器
//!
//! 把多项单项检查组合成一次完整的契约验证，输出通过数量与
//! 失败明细。套件对被检实现只持有借用，不要求任何所有权。

use crate::checks;
use crate::errors::{ConformanceFailure, ConformanceResult};
use ioc_abstractions::{IocFactory, IocRegistry, TypeSpec};
use tracing::{error, info, warn};

/// 套件运行选项
#[derive(Debug, Clone)]
pub struct ConformanceOptions {
    /// 遇到第一个失败立即停止
    pub fail_fast: bool,
    /// 对注册表规格与探测规格执行不 panic 探测
    pub probe_panics: bool,
}

impl Default for ConformanceOptions {
    fn default() -> Self {
        Self {
            fail_fast: false,
            probe_panics: true,
        }
    }
}

/// 一次套件运行的结果
#[derive(Debug, Default)]
pub struct ConformanceReport {
    /// 通过的检查数量
    pub passed: usize,
    /// 失败明细，按发生顺序排列
    pub failures: Vec<ConformanceFailure>,
}

impl ConformanceReport {
    /// 是否全部检查通过
    pub fn is_conformant(&self) -> bool {
        self.failures.is_empty()
    }

    /// 实际执行的检查总数
    pub fn checks_run(&self) -> usize {
        self.passed + self.failures.len()
    }
}

/// 契约一致性套件
///
/// 通过构建器方法挂载待检的注册表和工厂，并登记要覆盖的
/// 类型规格。`run` 按固定顺序执行检查：注册表一致性、
/// 可用性查询探测、工厂实例独立性。
pub struct ConformanceSuite<'a> {
    registry: Option<&'a dyn IocRegistry>,
    factory: Option<&'a dyn IocFactory>,
    registry_specs: Vec<TypeSpec>,
    factory_specs: Vec<TypeSpec>,
    probe_specs: Vec<TypeSpec>,
    options: ConformanceOptions,
}

impl<'a> ConformanceSuite<'a> {
    /// 创建空套件，使用默认选项
    pub fn new() -> Self {
        Self {
            registry: None,
            factory: None,
            registry_specs: Vec::new(),
            factory_specs: Vec::new(),
            probe_specs: Vec::new(),
            options: ConformanceOptions::default(),
        }
    }

    /// 挂载待检的注册表
    pub fn with_registry(mut self, registry: &'a dyn IocRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// 挂载待检的工厂
    pub fn with_factory(mut self, factory: &'a dyn IocFactory) -> Self {
        self.factory = Some(factory);
        self
    }

    /// 覆盖套件运行选项
    pub fn with_options(mut self, options: ConformanceOptions) -> Self {
        self.options = options;
        self
    }

    /// 登记参与注册表一致性检查的类型规格
    pub fn add_registry_spec(mut self, spec: TypeSpec) -> Self {
        self.registry_specs.push(spec);
        self
    }

    /// 登记参与工厂实例独立性检查的类型规格
    pub fn add_factory_spec(mut self, spec: TypeSpec) -> Self {
        self.factory_specs.push(spec);
        self
    }

    /// 登记仅用于不 panic 探测的类型规格
    ///
    /// 适合放入格式错误或刻意未注册的名称。
    pub fn add_probe_spec(mut self, spec: TypeSpec) -> Self {
        self.probe_specs.push(spec);
        self
    }

    /// 运行全部已登记的检查并汇总结果
    pub fn run(&self) -> ConformanceReport {
        info!(
            "开始契约一致性检查: 注册表规格 {} 个, 工厂规格 {} 个, 探测规格 {} 个",
            self.registry_specs.len(),
            self.factory_specs.len(),
            self.probe_specs.len()
        );

        let mut report = ConformanceReport::default();

        if let Some(registry) = self.registry {
            for spec in &self.registry_specs {
                let result =
                    checks::check_registry_consistency(registry, std::slice::from_ref(spec));
                if self.record(&mut report, result) {
                    return Self::finish(report);
                }
            }

            if self.options.probe_panics {
                for spec in self.registry_specs.iter().chain(&self.probe_specs) {
                    let result =
                        checks::check_has_never_panics(registry, std::slice::from_ref(spec));
                    if self.record(&mut report, result) {
                        return Self::finish(report);
                    }
                }
            }
        }

        if let Some(factory) = self.factory {
            for spec in &self.factory_specs {
                let result = checks::check_distinct_instances(factory, spec);
                if self.record(&mut report, result) {
                    return Self::finish(report);
                }
            }
        }

        Self::finish(report)
    }

    /// 记录单项检查结果，返回是否应当提前终止
    fn record(&self, report: &mut ConformanceReport, result: ConformanceResult) -> bool {
        match result {
            Ok(()) => {
                report.passed += 1;
                false
            }
            Err(failure) => {
                error!("契约检查失败: {}", failure);
                report.failures.push(failure);
                self.options.fail_fast
            }
        }
    }

    fn finish(report: ConformanceReport) -> ConformanceReport {
        if report.is_conformant() {
            info!("契约一致性检查完成: {} 项全部通过", report.passed);
        } else {
            warn!(
                "契约一致性检查完成: 通过 {} 项, 失败 {} 项",
                report.passed,
                report.failures.len()
            );
        }
        report
    }
}

impl Default for ConformanceSuite<'_> {
    fn default() -> Self {
        Self::new()
    }
}
