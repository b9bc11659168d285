//! Class compiler
//!
//! Runs the classifier over every field of a class, then the constraint
//! validator over the classified fields, and either produces a
//! [`CompiledClass`] for emission or a [`ClassRejection`].
//!
//! Classes are independent: a batch compiles each class on its own, in
//! parallel when enabled, and one rejected class never affects another.

use std::thread;

use crate::observability::{log_event_with_fields, Event, MetricsRegistry, ObservationScope};

use super::classifier::{EntityCatalog, FieldClassifier};
use super::errors::{ClassRejection, Violation};
use super::naming;
use super::types::{CompiledClass, DeclaredClass};
use super::validator::ConstraintValidator;

/// Outcome of compiling one class.
pub type ClassOutcome = Result<CompiledClass, ClassRejection>;

/// Batch compilation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilerOptions {
    /// Compile classes on worker threads
    pub parallel: bool,
    /// Upper bound on worker threads
    pub max_threads: usize,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            max_threads: 4,
        }
    }
}

impl CompilerOptions {
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }
}

/// Per-class outcomes of a batch, in input order.
#[derive(Debug)]
pub struct BatchReport {
    outcomes: Vec<ClassOutcome>,
}

impl BatchReport {
    pub fn outcomes(&self) -> &[ClassOutcome] {
        &self.outcomes
    }

    pub fn into_outcomes(self) -> Vec<ClassOutcome> {
        self.outcomes
    }

    /// Classes ready for emission.
    pub fn compiled(&self) -> impl Iterator<Item = &CompiledClass> {
        self.outcomes.iter().filter_map(|o| o.as_ref().ok())
    }

    /// Classes that must not be emitted.
    pub fn rejected(&self) -> impl Iterator<Item = &ClassRejection> {
        self.outcomes.iter().filter_map(|o| o.as_ref().err())
    }

    /// True when every class compiled.
    pub fn is_clean(&self) -> bool {
        self.outcomes.iter().all(|o| o.is_ok())
    }
}

/// Compiles declared classes against one entity catalog.
pub struct SchemaCompiler {
    catalog: EntityCatalog,
    options: CompilerOptions,
    validator: ConstraintValidator,
    metrics: MetricsRegistry,
}

impl SchemaCompiler {
    pub fn new(catalog: EntityCatalog) -> Self {
        Self::with_options(catalog, CompilerOptions::default())
    }

    pub fn with_options(catalog: EntityCatalog, options: CompilerOptions) -> Self {
        Self {
            catalog,
            options,
            validator: ConstraintValidator::new(),
            metrics: MetricsRegistry::new(),
        }
    }

    /// Creates a compiler whose catalog names every class in `classes`.
    pub fn for_classes(classes: &[DeclaredClass], options: CompilerOptions) -> Self {
        Self::with_options(EntityCatalog::from_classes(classes), options)
    }

    pub fn catalog(&self) -> &EntityCatalog {
        &self.catalog
    }

    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    /// Compiles one class.
    ///
    /// Every field is classified even after a failure. Name uniqueness is
    /// checked over every declared field and the remaining constraints over
    /// the fields that did classify, so a rejection lists every problem
    /// found. Classification failures come first, in field order, followed
    /// by validation violations.
    pub fn compile_class(&self, class: &DeclaredClass) -> ClassOutcome {
        let classifier = FieldClassifier::new(&self.catalog);
        let results = classifier.classify_all(&class.fields);

        let validation = self.validator.validate_declared(&class.fields, &results);

        let mut classified = Vec::with_capacity(results.len());
        let mut violations: Vec<Violation> = Vec::new();
        for result in results {
            match result {
                Ok(field) => classified.push(field),
                Err(err) => violations.push(err.into_violation()),
            }
        }

        self.metrics.add_fields_classified(classified.len() as u64);
        self.metrics.add_classification_failures(violations.len() as u64);
        self.metrics
            .add_validation_violations(validation.violations().len() as u64);
        violations.extend(validation.into_violations());

        if !violations.is_empty() {
            self.metrics.increment_classes_rejected();
            return Err(ClassRejection::new(&class.name, violations));
        }

        self.metrics.increment_classes_compiled();
        Ok(CompiledClass {
            class_name: class.name.clone(),
            proxy_class_name: naming::proxy_class_name(&class.name),
            proxy_interface_name: naming::proxy_interface_name(&class.name),
            fields: classified,
        })
    }

    /// Compiles every class, returning outcomes in input order.
    pub fn compile_batch(&self, classes: &[DeclaredClass]) -> BatchReport {
        let class_count = classes.len().to_string();
        let scope = ObservationScope::with_fields("SCHEMA_BATCH", &[("classes", class_count.as_str())]);
        self.metrics.increment_batches();

        let outcomes = if self.options.parallel && self.options.max_threads > 1 && classes.len() > 1 {
            self.compile_parallel(classes)
        } else {
            classes.iter().map(|c| self.compile_class(c)).collect()
        };

        // Logged after the join so the order matches the input.
        for outcome in &outcomes {
            log_outcome(outcome);
        }

        let report = BatchReport { outcomes };
        let rejected = report.rejected().count().to_string();
        scope.complete_with_fields(&[("rejected", rejected.as_str())]);
        report
    }

    fn compile_parallel(&self, classes: &[DeclaredClass]) -> Vec<ClassOutcome> {
        let workers = self.options.max_threads.min(classes.len());
        let chunk_size = classes.len().div_ceil(workers);

        thread::scope(|s| {
            let handles: Vec<_> = classes
                .chunks(chunk_size)
                .map(|chunk| {
                    s.spawn(move || chunk.iter().map(|c| self.compile_class(c)).collect::<Vec<_>>())
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
                .collect()
        })
    }
}

fn log_outcome(outcome: &ClassOutcome) {
    match outcome {
        Ok(compiled) => {
            let fields = compiled.fields.len().to_string();
            log_event_with_fields(
                Event::ClassCompiled,
                &[
                    ("class", compiled.class_name.as_str()),
                    ("fields", fields.as_str()),
                    ("proxy", compiled.proxy_class_name.as_str()),
                ],
            );
        }
        Err(rejection) => {
            let count = rejection.violations.len().to_string();
            let codes: Vec<&str> = rejection.violations.iter().map(|v| v.kind.code()).collect();
            let codes = codes.join(",");
            log_event_with_fields(
                Event::ClassRejected,
                &[
                    ("class", rejection.class_name.as_str()),
                    ("codes", codes.as_str()),
                    ("violations", count.as_str()),
                ],
            );
        }
    }
}
