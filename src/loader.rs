//! Spec file loading: read, deserialize, schema-check.
//!
//! Only the shape of individual entities is enforced here. Cross-references
//! and uniqueness are left to [`crate::engine::validate`], which reports
//! rather than rejects.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::{SpecFormat, SpecSource};
use crate::error::{Result, SystemError};
use crate::models::Spec;

static BO_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^BO-[0-9]{4}$").unwrap());
static FE_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^FE-[0-9]{4}$").unwrap());
static AT_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^AT-[0-9]{4}$").unwrap());

/// Read and parse the spec described by `source`.
pub fn load_spec(source: &SpecSource) -> Result<Spec> {
    debug!(
        "Loading {} spec from {}",
        source.format.as_str(),
        source.path.display()
    );
    let raw = std::fs::read_to_string(&source.path).map_err(|e| SystemError::Io {
        path: source.path.clone(),
        source: e,
    })?;
    parse_spec(&raw, source.format)
}

/// Deserialize and schema-check spec text.
pub fn parse_spec(raw: &str, format: SpecFormat) -> Result<Spec> {
    let spec: Spec = match format {
        SpecFormat::Yaml => serde_yaml::from_str(raw).map_err(|e| SystemError::Parse {
            message: e.to_string(),
        })?,
        SpecFormat::Json => serde_json::from_str(raw).map_err(|e| SystemError::Parse {
            message: e.to_string(),
        })?,
    };
    check_schema(&spec)?;
    Ok(spec)
}

fn check_schema(spec: &Spec) -> Result<()> {
    for bo in &spec.business_objectives {
        check_id(&BO_ID, &bo.id, "businessObjectives[].id")?;
    }
    for feature in &spec.features {
        check_id(&FE_ID, &feature.id, "features[].id")?;
    }
    for at in &spec.acceptance_tests {
        check_id(&AT_ID, &at.id, "acceptanceTests[].id")?;
        check_id(&FE_ID, &at.covers, "acceptanceTests[].covers")?;
    }
    Ok(())
}

fn check_id(pattern: &Regex, id: &str, field: &str) -> Result<()> {
    if pattern.is_match(id) {
        Ok(())
    } else {
        Err(SystemError::Parse {
            message: format!("{}: \"{}\" does not match {}", field, id, pattern.as_str()),
        })
    }
}
