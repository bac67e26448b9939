//! TypeScript code emission via the Emit trait.
//!
//! Each IR type implements `Emit`; the output follows the conventional
//! layout of generated declaration files: 4-space indentation, aligned
//! property colons, one blank line between declarations.

use super::types::{TsLiteral, TsModule, TsPrimitive, TsType, TsTypeDef, TypeDefKind};
use super::utils::{escape_js_string, quote_if_needed};

const INDENT: &str = "    ";

/// Trait for emitting TypeScript code from IR nodes.
pub trait Emit {
    /// Convert the IR node to its TypeScript string representation.
    fn emit(&self) -> String;
}

impl Emit for TsPrimitive {
    fn emit(&self) -> String {
        match self {
            TsPrimitive::String => "string".to_string(),
            TsPrimitive::Number => "number".to_string(),
            TsPrimitive::Boolean => "boolean".to_string(),
            TsPrimitive::Null => "null".to_string(),
            TsPrimitive::Any => "any".to_string(),
        }
    }
}

impl Emit for TsLiteral {
    fn emit(&self) -> String {
        match self {
            TsLiteral::String(s) => format!("\"{}\"", escape_js_string(s)),
        }
    }
}

impl Emit for TsType {
    fn emit(&self) -> String {
        match self {
            TsType::Primitive(p) => p.emit(),
            TsType::Array(inner) => {
                let inner_str = inner.emit();
                if matches!(**inner, TsType::Union(_)) {
                    format!("({inner_str})[]")
                } else {
                    format!("{inner_str}[]")
                }
            }
            TsType::Union(types) => types.iter().map(Emit::emit).collect::<Vec<_>>().join(" | "),
            TsType::Map(value) => format!("{{ [key: string]: {} }}", value.emit()),
            TsType::Literal(lit) => lit.emit(),
            TsType::Ref(name) => name.clone(),
        }
    }
}

impl Emit for TsTypeDef {
    fn emit(&self) -> String {
        match &self.kind {
            TypeDefKind::Interface { properties } => {
                let keys: Vec<String> = properties
                    .iter()
                    .map(|prop| {
                        let opt = if prop.optional { "?" } else { "" };
                        format!("{}{opt}:", quote_if_needed(&prop.name))
                    })
                    .collect();
                let width = keys.iter().map(|k| k.chars().count()).max().unwrap_or(0);

                let mut output = format!("export interface {} {{\n", self.name);
                for (key, prop) in keys.iter().zip(properties) {
                    output.push_str(&format!(
                        "{INDENT}{key:<width$} {};\n",
                        prop.ty.emit()
                    ));
                }
                output.push_str("}\n");
                output
            }
            TypeDefKind::TypeAlias { ty } => {
                format!("export type {} = {};\n", self.name, ty.emit())
            }
            TypeDefKind::Enum { cases } => {
                let mut output = format!("export enum {} {{\n", self.name);
                for case in cases {
                    output.push_str(&format!(
                        "{INDENT}{} = \"{}\",\n",
                        case.name,
                        escape_js_string(&case.value)
                    ));
                }
                output.push_str("}\n");
                output
            }
        }
    }
}

impl Emit for TsModule {
    fn emit(&self) -> String {
        self.types
            .iter()
            .map(Emit::emit)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
