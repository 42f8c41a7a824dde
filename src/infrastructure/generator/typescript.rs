//! TypeScript generator
//!
//! Emits declarations describing every locale at once. The `Locale` interface
//! is the union of all locales' keys; a key missing from some locale is
//! optional. A message containing `{name}` placeholders is typed as a function
//! taking those parameters.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

use crate::domain::entities::{GeneratedOutput, LocaleEntry, LocaleNode, LocaleTree};
use crate::domain::ports::CodeGenerator;
use crate::domain::value_objects::{GenerationMode, Target};

const HEADER: &str = "// Generated by localetypes. Do not edit.\n";

/// Generates TypeScript declarations and runtime modules
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptGenerator;

impl TypeScriptGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CodeGenerator for TypeScriptGenerator {
    fn generate(
        &self,
        entries: &[LocaleEntry],
        target: Target,
        mode: &GenerationMode,
    ) -> Result<GeneratedOutput, String> {
        let shape = merge_shapes(entries)?;
        match mode {
            GenerationMode::Normal => {
                let source = match target {
                    Target::Type => render_declarations(entries, &shape, None),
                    Target::Runtime => render_runtime(entries),
                };
                Ok(GeneratedOutput::Single(source))
            }
            GenerationMode::Lazy { default_locale } => {
                if !entries.iter().any(|e| e.name.as_str() == default_locale) {
                    return Err(format!(
                        "default locale '{default_locale}' has no locale file"
                    ));
                }
                Ok(GeneratedOutput::Lazy {
                    types: render_declarations(entries, &shape, Some(default_locale)),
                    loader: render_loader(entries, default_locale),
                })
            }
        }
    }
}

/// Merged shape of one key across locales
#[derive(Debug)]
struct Field {
    shape: Shape,
    /// Number of locales (among those having the parent) defining this key
    count: usize,
}

#[derive(Debug)]
enum Shape {
    Message(BTreeSet<String>),
    Group(BTreeMap<String, Field>),
}

fn merge_shapes(entries: &[LocaleEntry]) -> Result<BTreeMap<String, Field>, String> {
    let mut root = BTreeMap::new();
    for entry in entries {
        merge_tree(&mut root, &entry.tree, "")
            .map_err(|e| format!("locale '{}': {e}", entry.name))?;
    }
    Ok(root)
}

fn merge_tree(
    fields: &mut BTreeMap<String, Field>,
    tree: &LocaleTree,
    path: &str,
) -> Result<(), String> {
    for (key, node) in tree.iter() {
        let key_path = if path.is_empty() {
            key.clone()
        } else {
            format!("{path}.{key}")
        };
        let field = fields.entry(key.clone()).or_insert_with(|| Field {
            shape: match node {
                LocaleNode::Text(_) => Shape::Message(BTreeSet::new()),
                LocaleNode::Group(_) => Shape::Group(BTreeMap::new()),
            },
            count: 0,
        });
        field.count += 1;
        match (&mut field.shape, node) {
            (Shape::Message(params), LocaleNode::Text(text)) => params.extend(placeholders(text)),
            (Shape::Group(children), LocaleNode::Group(subtree)) => {
                merge_tree(children, subtree, &key_path)?
            }
            _ => {
                return Err(format!(
                    "'{key_path}' is a message in one locale and a group in another"
                ))
            }
        }
    }
    Ok(())
}

/// Placeholder names in a message, e.g. `Hello {name}` -> `name`
fn placeholders(text: &str) -> Vec<String> {
    segments(text)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.to_string()),
            Segment::Literal(_) => None,
        })
        .collect()
}

#[derive(Debug, PartialEq)]
enum Segment<'a> {
    Literal(&'a str),
    Param(&'a str),
}

fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if is_identifier(&after[..close]) => {
                if open > 0 {
                    out.push(Segment::Literal(&rest[..open]));
                }
                out.push(Segment::Param(&after[..close]));
                rest = &after[close + 1..];
            }
            _ => {
                out.push(Segment::Literal(&rest[..=open]));
                rest = after;
            }
        }
    }
    if !rest.is_empty() {
        out.push(Segment::Literal(rest));
    }
    out
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{s}\""))
}

fn property_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        quote(key)
    }
}

fn language_union(entries: &[LocaleEntry]) -> String {
    if entries.is_empty() {
        return "never".to_string();
    }
    entries
        .iter()
        .map(|e| quote(e.name.as_str()))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn render_declarations(
    entries: &[LocaleEntry],
    shape: &BTreeMap<String, Field>,
    default_locale: Option<&str>,
) -> String {
    let mut out = String::from(HEADER);
    let _ = writeln!(out);
    let _ = writeln!(out, "export type Language = {}", language_union(entries));
    let _ = writeln!(out);
    if let Some(default_locale) = default_locale {
        let _ = writeln!(
            out,
            "export declare const defaultLanguage: {}",
            quote(default_locale)
        );
        let _ = writeln!(out);
    }
    let _ = writeln!(out, "export interface Locale {{");
    render_fields(&mut out, shape, entries.len(), 1);
    let _ = writeln!(out, "}}");
    let _ = writeln!(out);
    match default_locale {
        None => {
            let _ = writeln!(out, "declare const i18n: Record<Language, Locale>");
        }
        Some(_) => {
            let _ = writeln!(out, "declare const i18n: {{");
            let _ = writeln!(out, "  readonly language: Language");
            let _ = writeln!(out, "  readonly messages: Locale");
            let _ = writeln!(out, "  load(language: Language): Promise<Locale>");
            let _ = writeln!(out, "}}");
        }
    }
    let _ = writeln!(out, "export default i18n");
    out
}

fn render_fields(out: &mut String, fields: &BTreeMap<String, Field>, parent_count: usize, depth: usize) {
    let indent = "  ".repeat(depth);
    for (key, field) in fields {
        let optional = if field.count < parent_count { "?" } else { "" };
        let key = property_key(key);
        match &field.shape {
            Shape::Message(params) if params.is_empty() => {
                let _ = writeln!(out, "{indent}{key}{optional}: string");
            }
            Shape::Message(params) => {
                let params = params
                    .iter()
                    .map(|p| format!("{p}: string"))
                    .collect::<Vec<_>>()
                    .join("; ");
                let _ = writeln!(
                    out,
                    "{indent}{key}{optional}: (params: {{ {params} }}) => string"
                );
            }
            Shape::Group(children) => {
                let _ = writeln!(out, "{indent}{key}{optional}: {{");
                render_fields(out, children, field.count, depth + 1);
                let _ = writeln!(out, "{indent}}}");
            }
        }
    }
}

/// Runtime value of one message: a string literal or a formatting function
fn render_message(text: &str) -> String {
    let parts = segments(text);
    if !parts.iter().any(|s| matches!(s, Segment::Param(_))) {
        return quote(text);
    }
    let body = parts
        .iter()
        .map(|segment| match segment {
            Segment::Literal(literal) => quote(literal),
            Segment::Param(name) => format!("params.{name}"),
        })
        .collect::<Vec<_>>()
        .join(" + ");
    format!("(params) => {body}")
}

fn render_tree(out: &mut String, tree: &LocaleTree, depth: usize) {
    let indent = "  ".repeat(depth);
    for (key, node) in tree.iter() {
        let key = property_key(key);
        match node {
            LocaleNode::Text(text) => {
                let _ = writeln!(out, "{indent}{key}: {},", render_message(text));
            }
            LocaleNode::Group(subtree) => {
                let _ = writeln!(out, "{indent}{key}: {{");
                render_tree(out, subtree, depth + 1);
                let _ = writeln!(out, "{indent}}},");
            }
        }
    }
}

fn render_runtime(entries: &[LocaleEntry]) -> String {
    let mut out = String::from(HEADER);
    let _ = writeln!(out);
    let _ = writeln!(out, "const i18n = {{");
    for entry in entries {
        let _ = writeln!(out, "  {}: {{", quote(entry.name.as_str()));
        render_tree(&mut out, &entry.tree, 2);
        let _ = writeln!(out, "  }},");
    }
    let _ = writeln!(out, "}}");
    let _ = writeln!(out);
    let _ = writeln!(out, "export default i18n");
    out
}

fn render_loader(entries: &[LocaleEntry], default_locale: &str) -> String {
    let mut out = String::from(HEADER);
    let _ = writeln!(out);
    let _ = writeln!(out, "const locales = {{");
    for entry in entries {
        let _ = writeln!(out, "  {}: () => ({{", quote(entry.name.as_str()));
        render_tree(&mut out, &entry.tree, 2);
        let _ = writeln!(out, "  }}),");
    }
    let _ = writeln!(out, "}}");
    let _ = writeln!(out);
    let _ = writeln!(out, "export const defaultLanguage = {}", quote(default_locale));
    let _ = writeln!(out);
    let _ = writeln!(out, "let language = defaultLanguage");
    let _ = writeln!(out, "let messages = locales[language]()");
    let _ = writeln!(out);
    let _ = writeln!(out, "export default {{");
    let _ = writeln!(out, "  get language() {{ return language }},");
    let _ = writeln!(out, "  get messages() {{ return messages }},");
    let _ = writeln!(out, "  load(next) {{");
    let _ = writeln!(out, "    language = next");
    let _ = writeln!(out, "    messages = locales[next]()");
    let _ = writeln!(out, "    return Promise.resolve(messages)");
    let _ = writeln!(out, "  }},");
    let _ = writeln!(out, "}}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::LocaleName;

    fn entry(name: &str, tree: LocaleTree) -> LocaleEntry {
        LocaleEntry::new(LocaleName::new(name), tree)
    }

    fn greeting_entries() -> Vec<LocaleEntry> {
        vec![
            entry("en", LocaleTree::new().with_text("greeting", "hi")),
            entry("fr", LocaleTree::new().with_text("greeting", "salut")),
        ]
    }

    fn types(entries: &[LocaleEntry]) -> String {
        TypeScriptGenerator::new()
            .generate(entries, Target::Type, &GenerationMode::Normal)
            .unwrap()
            .into_primary()
    }

    #[test]
    fn normal_mode_declarations() {
        insta::assert_snapshot!(types(&greeting_entries()), @r#"
        // Generated by localetypes. Do not edit.

        export type Language = "en" | "fr"

        export interface Locale {
          greeting: string
        }

        declare const i18n: Record<Language, Locale>
        export default i18n
        "#);
    }

    #[test]
    fn keys_missing_somewhere_are_optional() {
        let entries = vec![
            entry(
                "en",
                LocaleTree::new()
                    .with_text("greeting", "hi")
                    .with_text("farewell", "bye"),
            ),
            entry("fr", LocaleTree::new().with_text("greeting", "salut")),
        ];
        let source = types(&entries);
        assert!(source.contains("  farewell?: string\n"));
        assert!(source.contains("  greeting: string\n"));
    }

    #[test]
    fn nested_optional_is_relative_to_parent() {
        let entries = vec![
            entry(
                "en",
                LocaleTree::new().with_group("menu", LocaleTree::new().with_text("open", "Open")),
            ),
            entry("fr", LocaleTree::new().with_text("title", "Titre")),
        ];
        let source = types(&entries);
        assert!(source.contains("  menu?: {\n    open: string\n  }\n"));
        assert!(source.contains("  title?: string\n"));
    }

    #[test]
    fn placeholders_become_parameters() {
        let entries = vec![
            entry("en", LocaleTree::new().with_text("welcome", "Hello {name}, {count} new")),
            entry("fr", LocaleTree::new().with_text("welcome", "Bonjour {name} {extra}")),
        ];
        let source = types(&entries);
        assert!(
            source.contains("  welcome: (params: { count: string; extra: string; name: string }) => string\n"),
            "{source}"
        );
    }

    #[test]
    fn non_identifier_keys_are_quoted() {
        let entries = vec![entry("en", LocaleTree::new().with_text("not-found", "404"))];
        assert!(types(&entries).contains("  \"not-found\": string\n"));
    }

    #[test]
    fn conflicting_shapes_fail() {
        let entries = vec![
            entry("en", LocaleTree::new().with_text("menu", "Menu")),
            entry(
                "fr",
                LocaleTree::new().with_group("menu", LocaleTree::new().with_text("open", "Ouvrir")),
            ),
        ];
        let err = TypeScriptGenerator::new()
            .generate(&entries, Target::Type, &GenerationMode::Normal)
            .unwrap_err();
        assert!(err.contains("locale 'fr'"), "{err}");
        assert!(err.contains("'menu'"), "{err}");
    }

    #[test]
    fn no_entries_yields_never() {
        assert!(types(&[]).contains("export type Language = never\n"));
    }

    #[test]
    fn lazy_mode_yields_types_and_loader() {
        let output = TypeScriptGenerator::new()
            .generate(
                &greeting_entries(),
                Target::Type,
                &GenerationMode::Lazy {
                    default_locale: "en".to_string(),
                },
            )
            .unwrap();
        let types = output.primary();
        assert!(types.contains("export declare const defaultLanguage: \"en\"\n"));
        assert!(types.contains("  load(language: Language): Promise<Locale>\n"));
        let loader = output.loader().unwrap();
        assert!(loader.contains("  \"fr\": () => ({\n    greeting: \"salut\",\n  }),\n"));
        assert!(loader.contains("export const defaultLanguage = \"en\"\n"));
    }

    #[test]
    fn lazy_mode_requires_present_default_locale() {
        let err = TypeScriptGenerator::new()
            .generate(
                &greeting_entries(),
                Target::Type,
                &GenerationMode::Lazy {
                    default_locale: "de".to_string(),
                },
            )
            .unwrap_err();
        assert!(err.contains("'de'"));
    }

    #[test]
    fn runtime_target_renders_values() {
        let entries = vec![entry(
            "en",
            LocaleTree::new()
                .with_text("welcome", "Hello {name}!")
                .with_text("plain", "a {not closed"),
        )];
        let source = TypeScriptGenerator::new()
            .generate(&entries, Target::Runtime, &GenerationMode::Normal)
            .unwrap()
            .into_primary();
        assert!(source.contains("    plain: \"a {not closed\",\n"), "{source}");
        assert!(
            source.contains("    welcome: (params) => \"Hello \" + params.name + \"!\",\n"),
            "{source}"
        );
    }

    #[test]
    fn segments_split_literals_and_params() {
        assert_eq!(
            segments("a {x} b {1} {y}"),
            vec![
                Segment::Literal("a "),
                Segment::Param("x"),
                Segment::Literal(" b {"),
                Segment::Literal("1} "),
                Segment::Param("y"),
            ]
        );
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(types(&greeting_entries()), types(&greeting_entries()));
    }
}
