use crate::error::{Error, Result};
use crate::model::{Arguments, QueryParams, scalar_to_string};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Keys every action accepts without forwarding them as query parameters.
pub const CLIENT_ONLY_PARAMS: &[&str] = &["ignore"];

static REGISTRY: LazyLock<ParamsRegistry> = LazyLock::new(|| {
    let mut registry = ParamsRegistry::empty();
    registry.register(
        crate::actions::snapshot::GET_REPOSITORY,
        crate::actions::snapshot::GET_REPOSITORY_PARAMS,
    );
    registry
});

/// Query parameters each action accepts, keyed by action name.
pub struct ParamsRegistry {
    actions: HashMap<&'static str, &'static [&'static str]>,
}

impl ParamsRegistry {
    fn empty() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    fn register(&mut self, action: &'static str, params: &'static [&'static str]) {
        self.actions.insert(action, params);
    }

    /// Process-wide registry, built on first access.
    pub fn global() -> &'static ParamsRegistry {
        &REGISTRY
    }

    pub fn get(&self, action: &str) -> Result<&'static [&'static str]> {
        self.actions
            .get(action)
            .copied()
            .ok_or_else(|| Error::UnknownAction(action.to_string()))
    }
}

/// Rejects keys outside the action's whitelist, then renders the whitelisted
/// ones as query pairs.
pub fn validate_and_extract_params(args: &Arguments, action: &'static str) -> Result<QueryParams> {
    let allowed = ParamsRegistry::global().get(action)?;
    validate_params(args, action, allowed)?;
    extract_params(args, allowed)
}

pub(crate) fn validate_params(
    args: &Arguments,
    action: &'static str,
    allowed: &[&str],
) -> Result<()> {
    let mut unknown: Vec<String> = args
        .keys()
        .filter(|key| !allowed.contains(key) && !CLIENT_ONLY_PARAMS.contains(key))
        .map(ToString::to_string)
        .collect();
    if unknown.is_empty() {
        return Ok(());
    }
    unknown.sort();
    Err(Error::UnrecognizedParameter {
        action,
        keys: unknown,
    })
}

pub(crate) fn extract_params(args: &Arguments, allowed: &[&str]) -> Result<QueryParams> {
    let mut params = QueryParams::new();
    for key in allowed {
        let Some(value) = args.get(key) else {
            continue;
        };
        if let Some(value) = param_value(key, value)? {
            params.push((key.to_string(), value));
        }
    }
    Ok(params)
}

fn param_value(key: &str, value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::Array(items) => {
            let parts = items
                .iter()
                .map(|item| scalar_to_string(key, item))
                .collect::<Result<Vec<_>>>()?;
            Ok(Some(parts.join(",")))
        }
        other => scalar_to_string(key, other).map(Some),
    }
}
