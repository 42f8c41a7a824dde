use anyhow::Result;

use localetypes::domain::value_objects::LocaleName;
use localetypes::{LocalHost, ServerHost};

use super::Project;

pub fn cmd_check(project: &Project, json: bool) -> Result<()> {
    let config = match project.plugin_config() {
        Ok(config) => config,
        Err(rejection) => {
            if json {
                let output = serde_json::json!({
                    "event": "check",
                    "status": "rejected",
                    "reason": rejection.to_string(),
                });
                println!("{}", serde_json::to_string(&output)?);
            }
            anyhow::bail!("plugin would stay inactive: {rejection}");
        }
    };

    let locales: Vec<String> = LocalHost::new()
        .list_locale_files(config.locales_dir())?
        .iter()
        .filter_map(|path| LocaleName::from_path(path))
        .map(|name| name.to_string())
        .collect();

    if json {
        let output = serde_json::json!({
            "event": "check",
            "status": "ok",
            "module_name": config.module_name(),
            "locales_dir": config.locales_dir(),
            "output": config.output_path(),
            "mode": config.mode().to_string(),
            "locales": locales,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("✓ Options valid ({})", project.config_path.display());
        println!("  module:  {}", config.module_name());
        println!("  locales: {} ({})", config.locales_dir().display(), locales.join(", "));
        println!("  output:  {}", config.output_path().display());
        println!("  mode:    {}", config.mode());
    }

    Ok(())
}
