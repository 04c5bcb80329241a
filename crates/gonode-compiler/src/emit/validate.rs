use std::collections::HashSet;

use gonode_core::ExportedFunction;
use gonode_core::utils::is_c_identifier;

use super::EmitError;

/// Check that an IR sequence can be emitted consistently by every target.
pub fn validate(ir: &[ExportedFunction]) -> Result<(), EmitError> {
    let mut seen = HashSet::new();

    for (index, func) in ir.iter().enumerate() {
        if func.name.is_empty() {
            return Err(EmitError::EmptyName { index });
        }
        if let Some(index) = func.params.iter().position(|p| p.name.is_empty()) {
            return Err(EmitError::EmptyParameterName {
                function: func.name.clone(),
                index,
            });
        }

        let name = func.external_name();
        if !seen.insert(name.clone()) {
            return Err(EmitError::DuplicateExport { name });
        }
    }

    Ok(())
}

/// Check that a module name can serve as a C++ namespace and an interface name.
pub fn validate_module(name: &str) -> Result<(), EmitError> {
    if is_c_identifier(name) {
        Ok(())
    } else {
        Err(EmitError::InvalidModuleName {
            name: name.to_string(),
        })
    }
}
