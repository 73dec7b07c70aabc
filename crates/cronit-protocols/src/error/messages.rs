//! Default user-facing messages for error codes.

use super::registration::{
    EXPRESSION_NOT_VALID, JOB_ALREADY_EXISTS, STORE_FAILURE, TENANT_CONTEXT_MISSING,
    TENANT_RESOLUTION_FAILED,
};

fn template(code: &str) -> Option<&'static str> {
    match code {
        JOB_ALREADY_EXISTS => Some("Job '{0}' already exists"),
        EXPRESSION_NOT_VALID => Some("Schedule expression of job '{0}' is not valid: {1}"),
        TENANT_CONTEXT_MISSING => Some("No authenticated tenant context"),
        TENANT_RESOLUTION_FAILED => Some("Tenant could not be resolved: {0}"),
        STORE_FAILURE => Some("Job definition storage failed: {0}"),
        _ => None,
    }
}

/// Render the English message for `code`, substituting `{0}`, `{1}`, ...
/// with `args`. Unknown codes render as the code itself.
///
/// Substitution is a single pass over the template; argument text is never
/// scanned for placeholders.
pub fn render(code: &str, args: &[String]) -> String {
    let Some(template) = template(code) else {
        return code.to_string();
    };

    let mut message = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        message.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let arg = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            args.get(index).map(|arg| (arg, close))
        });
        match arg {
            Some((arg, close)) => {
                message.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                message.push('{');
                rest = after;
            }
        }
    }
    message.push_str(rest);
    message
}
