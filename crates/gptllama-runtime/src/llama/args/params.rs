//! Request parameter translation and merging over defaults.

use gptllama_core::{
    DefaultParameterSet, FieldTranslationTable, OperatorConfig, ParamValue,
    RecognizedUserArguments, RequestParameters, UserArgPolicy,
};
use indexmap::IndexMap;

use super::user_args::validate_user_args;
use super::vector::ArgumentVector;
use crate::llama::error::{ArgsError, ArgsResult, UserArgErrors};

/// Translate request fields into llama.cpp flags.
///
/// Fields without an entry in `translation` are skipped.
pub fn translate_request(
    request: &RequestParameters,
    translation: &FieldTranslationTable,
) -> IndexMap<String, ParamValue> {
    request
        .fields()
        .into_iter()
        .filter_map(|(field, value)| {
            translation
                .flag_for(field)
                .map(|flag| (flag.to_string(), value))
        })
        .collect()
}

/// Overlay translated request values on the defaults.
///
/// Flags keep their default position when overridden; flags without a
/// default are appended in request order.
pub fn merge_parameters(
    defaults: &DefaultParameterSet,
    converted: IndexMap<String, ParamValue>,
) -> IndexMap<String, ParamValue> {
    let mut merged: IndexMap<String, ParamValue> = defaults
        .iter()
        .map(|(flag, value)| (flag.to_string(), ParamValue::from(value)))
        .collect();
    merged.extend(converted);
    merged
}

/// Flatten merged parameters into `[flag, value, ...]`, skipping falsy values.
pub fn serialize_parameters(params: &IndexMap<String, ParamValue>) -> ArgumentVector {
    let mut args = ArgumentVector::new();
    for (flag, value) in params {
        if let Some(rendered) = value.render() {
            args.push_pair(flag.as_str(), rendered);
        }
    }
    args
}

/// Builds the llama.cpp argument vector for each request.
///
/// Holds the fixed tables and the operator configuration captured at
/// startup. Mapping is pure: the same request always yields the same vector.
///
/// # Example
///
/// ```rust
/// use gptllama_core::{OperatorConfig, RequestParameters, UserArgPolicy};
/// use gptllama_runtime::ParameterMapper;
///
/// let mapper = ParameterMapper::new(OperatorConfig::new(["threads", "8"], UserArgPolicy::Reject));
/// let request = RequestParameters { temperature: Some(0.2), ..Default::default() };
///
/// let args = mapper.map(&request).unwrap();
/// assert_eq!(args.value_of("--temp"), Some("0.2"));
/// assert_eq!(args.value_of("--threads"), Some("8"));
/// ```
#[derive(Debug, Clone)]
pub struct ParameterMapper {
    defaults: DefaultParameterSet,
    translation: FieldTranslationTable,
    whitelist: RecognizedUserArguments,
    operator: OperatorConfig,
}

impl ParameterMapper {
    /// Create a mapper over the standard tables.
    pub fn new(operator: OperatorConfig) -> Self {
        Self::with_tables(
            operator,
            DefaultParameterSet::standard(),
            FieldTranslationTable::standard(),
            RecognizedUserArguments::standard(),
        )
    }

    /// Create a mapper over custom tables.
    pub const fn with_tables(
        operator: OperatorConfig,
        defaults: DefaultParameterSet,
        translation: FieldTranslationTable,
        whitelist: RecognizedUserArguments,
    ) -> Self {
        Self {
            defaults,
            translation,
            whitelist,
            operator,
        }
    }

    pub const fn operator(&self) -> &OperatorConfig {
        &self.operator
    }

    pub const fn defaults(&self) -> &DefaultParameterSet {
        &self.defaults
    }

    /// Validate the operator tokens against this mapper's whitelist.
    pub fn validate_operator_args(&self) -> Result<Vec<String>, UserArgErrors> {
        validate_user_args(self.operator.tokens(), &self.whitelist)
    }

    /// Build the argument vector for one request.
    ///
    /// The steps are:
    /// 1. Translate request fields into flags
    /// 2. Validate operator tokens (see [`UserArgPolicy`] for failures)
    /// 3. Overlay request flags on the defaults
    /// 4. Emit non-falsy `[flag, value]` pairs in order
    /// 5. Append the validated operator arguments
    pub fn map(&self, request: &RequestParameters) -> ArgsResult<ArgumentVector> {
        let converted = translate_request(request, &self.translation);

        let user_args = match self.validate_operator_args() {
            Ok(args) => args,
            Err(errors) => match self.operator.policy() {
                UserArgPolicy::Reject => return Err(ArgsError::InvalidUserArgs(errors)),
                UserArgPolicy::Ignore => {
                    tracing::warn!(
                        "Ignoring invalid operator arguments ({errors}); \
                         continuing without them"
                    );
                    Vec::new()
                }
            },
        };

        let params = merge_parameters(&self.defaults, converted);
        let mut args = serialize_parameters(&params);
        args.extend(user_args);

        tracing::debug!(len = args.len(), "Built llama.cpp arguments: {args}");
        Ok(args)
    }

    /// Build the argument vector straight from a JSON request body.
    pub fn map_json(&self, body: &str) -> ArgsResult<ArgumentVector> {
        let request = RequestParameters::from_json_str(body)?;
        self.map(&request)
    }
}
