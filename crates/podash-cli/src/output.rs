//! Plain-text rendering of roles for the terminal.

use podash::{PermissionRepository, PermissionSession};
use podash_core::AppError;
use podash_models::{ModuleStatus, Role};
use std::fmt::Write;

/// Checkbox glyph for a module status: `[x]`, `[-]` or `[ ]`.
pub fn status_marker(status: ModuleStatus) -> &'static str {
    if status.is_checked() {
        "[x]"
    } else if status.is_indeterminate() {
        "[-]"
    } else {
        "[ ]"
    }
}

pub fn role_line(role: &Role) -> String {
    format!(
        "{:<24} {:<28} {:>3} permissions",
        role.id.as_str(),
        role.name,
        role.permissions.len()
    )
}

/// One line per module with its status, followed by each permission's checkbox.
pub fn module_table<R: PermissionRepository>(
    session: &PermissionSession<R>,
    role_id: &str,
) -> Result<String, AppError> {
    let role = session.role(role_id)?;
    let mut out = String::new();

    writeln!(out, "{} ({})", role.name, role.id)?;
    if let Some(description) = &role.description {
        writeln!(out, "{}", description)?;
    }

    for (module, status) in session.module_statuses(role_id)? {
        writeln!(out, "\n{} {} ({})", status_marker(status), module, status)?;

        let Some(members) = session.modules().get(module) else {
            continue;
        };
        for permission in session
            .catalog()
            .permissions()
            .iter()
            .filter(|p| members.contains(p.id.as_str()))
        {
            let marker = if role.permissions.contains(&permission.id) {
                "[x]"
            } else {
                "[ ]"
            };
            writeln!(out, "    {} {:<20} {}", marker, permission.id.as_str(), permission.name)?;
        }
    }

    Ok(out)
}
