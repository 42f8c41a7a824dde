use anyhow::{Context, Result};

use localetypes::infrastructure::{TracingLogger, TypeScriptGenerator, YamlLocaleParser};
use localetypes::{LocalHost, RegenerationPipeline, SessionEvent, Target};

use super::Project;

pub fn cmd_generate(project: &Project, target: Target, stdout: bool, json: bool) -> Result<()> {
    let config = project
        .plugin_config()
        .map_err(|rejection| anyhow::anyhow!("plugin options rejected: {rejection}"))?;

    let host = LocalHost::new();
    let logger = TracingLogger::new();
    let pipeline =
        RegenerationPipeline::new(&host, &YamlLocaleParser, &TypeScriptGenerator, &logger);

    // Runtime modules are never persisted by the plugin; print them
    if stdout || target == Target::Runtime {
        let (_, source) = pipeline.render(&config, target)?;
        print!("{source}");
        return Ok(());
    }

    let report = pipeline
        .run(&config)
        .with_context(|| format!("failed to generate {}", config.output_path().display()))?;

    if json {
        let event = SessionEvent::Regenerated {
            output: report.output.clone(),
            locales: report.locales.len(),
            hash: report.hash.short().to_string(),
        };
        println!(
            "{}",
            localetypes::infrastructure::JsonEventSink::render("generate", &event)
        );
    } else {
        let names: Vec<&str> = report.locales.iter().map(|l| l.as_str()).collect();
        println!(
            "✓ Wrote {} ({}) [{}]",
            report.output.display(),
            names.join(", "),
            report.hash.short()
        );
    }

    Ok(())
}
