use std::path::Path;

use anyhow::Result;

use localetypes::{ModuleResolver, SessionPhase};

use super::{HostedSession, Project};

pub fn cmd_resolve(project: &Project, specifier: &str, from: Option<&Path>, json: bool) -> Result<()> {
    let hosted = HostedSession::start(project, "resolve", json);
    if hosted.session.phase() == SessionPhase::Uninitialized {
        anyhow::bail!("plugin options rejected; see `localetypes check`");
    }

    let containing_file = match from {
        Some(path) if path.is_relative() => project.root.join(path),
        Some(path) => path.to_path_buf(),
        None => project.entry_file(),
    };
    let resolved = hosted.hook.resolve_module_names(
        &[specifier.to_string()],
        &containing_file,
        None,
    )?;
    let answer = resolved.into_iter().next().flatten();

    if json {
        let output = serde_json::json!({
            "event": "resolution",
            "command": "resolve",
            "specifier": specifier,
            "resolved_file_name": answer.as_ref().map(|m| m.path()),
            "is_external_library_import": answer.as_ref().map(|m| m.is_external_library_import),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        match &answer {
            Some(module) if module.is_external_library_import => {
                println!("{specifier} -> {} (external)", module.path().display())
            }
            Some(module) => println!("{specifier} -> {}", module.path().display()),
            None => println!("{specifier} -> unresolved"),
        }
    }

    Ok(())
}
