#![deny(missing_docs)]

//! # Routes Module
//!
//! Classifies route descriptors into the function definitions the template
//! renderer consumes: typed and ordered parameters, the shared import list,
//! and the code-generation flags.

pub mod naming;
pub mod params;

use crate::config::GeneratorConfig;
use crate::error::{AppError, AppResult};
use crate::oas::models::{
    ApiRoute, Param, ParamKind, ParamShape, RawParam, RouteDescriptor, ScalarParam, TypeShape,
};
use crate::oas::registry::SchemaRegistry;
use crate::oas::routes::naming::{
    base_type, bare_type_name, function_name, sanitize_type, split_generic_type,
};
use crate::oas::routes::params::{partition_by_optionality, type_body_param, type_scalar_param};
use indexmap::IndexSet;
use std::collections::HashSet;

/// Type names that never appear in import statements.
pub const RESERVED_TYPES: [&str; 5] = ["void", "any", "string", "Record", "number"];

const VOID_TYPE: &str = "void";
const ANY_TYPE: &str = "any";

/// Per-run route classifier.
///
/// Holds the registry read-only, so relaxed types must be resolved before
/// the classifier can be built.
#[derive(Debug)]
pub struct RouteClassifier<'a> {
    registry: &'a SchemaRegistry,
    import_list: IndexSet<String>,
    routes: Vec<ApiRoute>,
    function_names: HashSet<String>,
    has_enum_variables: bool,
}

impl<'a> RouteClassifier<'a> {
    /// Creates a classifier over a classified registry.
    pub fn new(registry: &'a SchemaRegistry, config: &GeneratorConfig) -> AppResult<Self> {
        if !registry.is_classified() {
            return Err(AppError::RegistryNotClassified);
        }
        let mut import_list = IndexSet::new();
        import_list.insert(config.artifact_name.clone());
        Ok(Self {
            registry,
            import_list,
            routes: Vec::new(),
            function_names: HashSet::new(),
            has_enum_variables: false,
        })
    }

    /// Classifies one route and records it.
    ///
    /// Fails if the route's function name was already generated.
    pub fn classify(&mut self, route: &RouteDescriptor) -> AppResult<ApiRoute> {
        let fn_name = function_name(&route.method, &route.namespace, &route.base_name);
        if self.function_names.contains(&fn_name) {
            return Err(AppError::DuplicateFunctionName {
                name: fn_name,
                route: route.path.clone(),
            });
        }

        self.has_enum_variables = false;
        tracing::info!(
            "parsing route: {} {}",
            route.method.to_uppercase(),
            route.path
        );

        self.add_type_to_import_list(&route.response.success);
        self.add_type_to_import_list(&route.response.error);

        let mut parsed = Vec::with_capacity(route.params.len());
        for raw in &route.params {
            let param = self.parse_param(raw);
            self.add_type_to_import_list(&param.ts_type);
            parsed.push(param);
        }

        let of_kind = |kind: ParamKind| -> Vec<Param> {
            parsed
                .iter()
                .filter(|p| p.param_type == kind)
                .cloned()
                .collect()
        };
        let query_params = of_kind(ParamKind::Query);
        let path_params = of_kind(ParamKind::Path);
        let body_param = of_kind(ParamKind::Body).into_iter().next();
        let all_params = partition_by_optionality(parsed);

        let success = &route.response.success;
        let error = &route.response.error;
        let wrap_in_json = should_wrap_return_result_in_json(success);
        let success_is_void = success == VOID_TYPE;

        let api_route = ApiRoute {
            method: route.method.to_uppercase(),
            route: route.path.clone(),
            success_type: sanitize_type(success),
            error_type: sanitize_type(error),
            description: route.summary.clone().or_else(|| route.description.clone()),
            namespace: route.namespace.clone(),
            api_function: route.base_name.clone(),
            function_name: fn_name.clone(),
            query_argument: route.query_argument.clone(),
            should_allow_relaxed_types: self.should_allow_relaxed_types(
                success,
                wrap_in_json,
                &all_params,
            ),
            query_params,
            path_params,
            body_param,
            all_params,
            is_query: route.method.eq_ignore_ascii_case("get"),
            should_wrap_return_result_in_json: wrap_in_json,
            success_response_is_void: success_is_void,
            success_and_error_response_is_void: success_is_void && error == VOID_TYPE,
        };

        self.function_names.insert(fn_name);
        self.routes.push(api_route.clone());
        Ok(api_route)
    }

    /// Routes classified so far.
    pub fn routes(&self) -> &[ApiRoute] {
        &self.routes
    }

    /// Import list accumulated over every classified route.
    pub fn import_list(&self) -> &IndexSet<String> {
        &self.import_list
    }

    /// Consumes the classifier, returning the routes and the import list.
    pub fn into_parts(self) -> (Vec<ApiRoute>, Vec<String>) {
        (self.routes, self.import_list.into_iter().collect())
    }

    fn parse_param(&mut self, raw: &RawParam) -> Param {
        match raw {
            RawParam::Query(p) => self.parse_scalar(p, ParamKind::Query),
            RawParam::Path(p) => self.parse_scalar(p, ParamKind::Path),
            RawParam::Body(body) => {
                let registry = self.registry;
                for field in body.properties.values() {
                    if field.has_enum() {
                        self.has_enum_variables = true;
                    }
                    let Some(reference) = field.reference.as_deref() else {
                        continue;
                    };
                    match registry.component_by_ref(reference) {
                        Some(entry) => {
                            if let Some(name) = entry.generated_type_name() {
                                self.add_type_to_import_list(name);
                            }
                            if entry.is_relaxed_type() {
                                self.has_enum_variables = true;
                            }
                        }
                        None => tracing::debug!(
                            reference,
                            "body property references an unregistered component"
                        ),
                    }
                }
                let mut param = type_body_param(body);
                if let Some(ts_type) = self.resolve_reference_array(&body.shape, &param.name) {
                    param.ts_type = ts_type;
                }
                param
            }
        }
    }

    fn parse_scalar(&mut self, p: &ScalarParam, kind: ParamKind) -> Param {
        let (mut param, is_enum) = type_scalar_param(p, kind);
        if is_enum {
            self.has_enum_variables = true;
        }
        if let ParamShape::Typed(shape) = &p.shape {
            if let Some(ts_type) = self.resolve_reference_array(shape, &p.name) {
                param.ts_type = ts_type;
            }
        }
        param
    }

    /// Types an array of `$ref` items as the referenced component's generated
    /// name. `None` keeps the `any[]` fallback.
    fn resolve_reference_array(&self, shape: &TypeShape, param: &str) -> Option<String> {
        let TypeShape::ReferenceArray(reference) = shape else {
            return None;
        };
        let resolved = self
            .registry
            .component_by_ref(reference)
            .and_then(|entry| entry.generated_type_name());
        if resolved.is_none() {
            tracing::warn!(
                reference = %reference,
                param,
                "array items reference an unnamed or unknown component, using 'any[]'"
            );
        }
        resolved.map(|name| format!("{}[]", name))
    }

    fn should_allow_relaxed_types(
        &self,
        success: &str,
        wrap_in_json: bool,
        params: &[Param],
    ) -> bool {
        wrap_in_json
            || success.starts_with("Record<")
            || self.has_enum_variables
            || params.iter().any(|p| self.is_relaxed(&base_type(&p.ts_type)))
            || self.is_relaxed(&base_type(&sanitize_type(success)))
    }

    fn is_relaxed(&self, type_name: &str) -> bool {
        self.registry
            .component_by_type_name(type_name)
            .is_some_and(|c| c.is_relaxed_type())
    }

    fn add_type_to_import_list(&mut self, ty: &str) {
        for piece in split_generic_type(ty) {
            let name = bare_type_name(&piece);
            if RESERVED_TYPES.contains(&name.as_str()) {
                continue;
            }
            if self.registry.type_names().contains(&name) {
                self.import_list.insert(name);
            }
        }
    }
}

/// True when the success type is untyped (`any`/`void`) or a map/record.
pub fn should_wrap_return_result_in_json(success: &str) -> bool {
    success == ANY_TYPE
        || success == VOID_TYPE
        || success.contains("Record<")
        || success.contains("Map<")
}
