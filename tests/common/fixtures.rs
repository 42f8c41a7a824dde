//! Test fixtures - reusable content constants for tests.

/// Project config pointing at `locales/` and `src/i18n.d.ts`
pub const CONFIG: &str = r#"[plugin]
module_name = "i18n"
locales = "locales"
output = "src/i18n.d.ts"
"#;

/// Lazy-mode project config
pub const LAZY_CONFIG: &str = r#"[plugin]
module_name = "i18n"
locales = "locales"
output = "src/i18n.d.ts"
lazy = true
default_locale = "en"
"#;

pub const EN_YAML: &str = r#"greeting: "Hello, {name}!"
menu:
  open: Open
  close: Close
"#;

pub const FR_YAML: &str = r#"greeting: "Bonjour, {name} !"
menu:
  open: Ouvrir
  close: Fermer
farewell: Au revoir
"#;
