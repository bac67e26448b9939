//! Code generation from a merged `Shape` to TypeScript IR.
//!
//! Declarations are emitted parent-first: a slot is reserved before the
//! children of an object are visited and filled once its properties are
//! known. Structurally identical interfaces and enums share one name.

use std::collections::{HashMap, HashSet};

use super::GeneratorOptions;
use super::emit::Emit;
use super::shape::{MAX_TRACKED_STRINGS, ObjectShape, Shape, StringStats};
use super::types::{
    EnumCase, TsLiteral, TsModule, TsPrimitive, TsProp, TsType, TsTypeDef, TypeDefKind,
};
use super::utils::{pascal_case, singularize, type_identifier};

const FALLBACK_NAME: &str = "Element";

/// Generate the declarations for `shape`, rooted at `type_name`.
pub fn codegen_module(type_name: &str, shape: &Shape, options: &GeneratorOptions) -> TsModule {
    let root = type_identifier(type_name, FALLBACK_NAME);
    let mut cx = Codegen::new(options);
    cx.used.insert(root.clone());

    if let Some(object) = shape.as_object_only() {
        cx.object_type(object, Some(root), type_name);
    } else {
        let slot = cx.reserve();
        let hint = format!("{root}{FALLBACK_NAME}");
        let ty = cx.type_of(shape, &hint);
        cx.defs[slot] = Some(TsTypeDef {
            name: root,
            kind: TypeDefKind::TypeAlias { ty },
        });
    }

    TsModule {
        types: cx.defs.into_iter().flatten().collect(),
    }
}

struct Codegen<'a> {
    options: &'a GeneratorOptions,
    defs: Vec<Option<TsTypeDef>>,
    used: HashSet<String>,
    /// Rendered body of a declaration -> the name it was emitted under.
    shared: HashMap<String, String>,
}

impl<'a> Codegen<'a> {
    fn new(options: &'a GeneratorOptions) -> Self {
        Self {
            options,
            defs: Vec::new(),
            used: HashSet::new(),
            shared: HashMap::new(),
        }
    }

    fn reserve(&mut self) -> usize {
        self.defs.push(None);
        self.defs.len() - 1
    }

    fn unique_name(&mut self, hint: &str) -> String {
        let base = type_identifier(&pascal_case(hint), FALLBACK_NAME);
        let mut candidate = base.clone();
        let mut n = 2;
        while self.used.contains(&candidate) {
            candidate = format!("{base}{n}");
            n += 1;
        }
        self.used.insert(candidate.clone());
        candidate
    }

    fn type_of(&mut self, shape: &Shape, hint: &str) -> TsType {
        let mut members = Vec::new();

        if let Some(object) = &shape.object {
            members.push(self.object_type(object, None, hint));
        }
        if let Some(element) = &shape.array {
            let element_ty = if element.is_empty() {
                TsType::Primitive(TsPrimitive::Any)
            } else {
                self.type_of(element, &singularize(hint))
            };
            members.push(TsType::Array(Box::new(element_ty)));
        }
        if shape.boolean {
            members.push(TsType::Primitive(TsPrimitive::Boolean));
        }
        if shape.number {
            members.push(TsType::Primitive(TsPrimitive::Number));
        }
        if let Some(strings) = &shape.string {
            members.extend(self.string_types(strings, hint));
        }
        if shape.null {
            members.push(TsType::Primitive(TsPrimitive::Null));
        }

        match members.len() {
            0 => TsType::Primitive(TsPrimitive::Any),
            1 => members.remove(0),
            _ => TsType::Union(members),
        }
    }

    /// Emit (or reuse) an interface for `object`; `fixed` pins the root name.
    fn object_type(&mut self, object: &ObjectShape, fixed: Option<String>, hint: &str) -> TsType {
        if object.props.is_empty() && fixed.is_none() {
            return TsType::Map(Box::new(TsType::Primitive(TsPrimitive::Any)));
        }

        let slot = self.reserve();
        let mut props = object.props.clone();
        if self.options.alphabetize_properties {
            props.sort_by(|a, b| a.name.cmp(&b.name));
        }
        let properties: Vec<TsProp> = props
            .iter()
            .map(|prop| TsProp {
                name: prop.name.clone(),
                ty: self.type_of(&prop.shape, &prop.name),
                optional: prop.is_optional(object.samples),
            })
            .collect();
        let kind = TypeDefKind::Interface { properties };

        let body = body_key(&kind);
        let name = match fixed {
            Some(name) => name,
            None => {
                if let Some(existing) = self.shared.get(&body) {
                    return TsType::Ref(existing.clone());
                }
                self.unique_name(hint)
            }
        };
        self.shared.entry(body).or_insert_with(|| name.clone());
        self.defs[slot] = Some(TsTypeDef {
            name: name.clone(),
            kind,
        });
        TsType::Ref(name)
    }

    fn string_types(&mut self, strings: &StringStats, hint: &str) -> Vec<TsType> {
        let distinct = strings.values.len();
        let is_enum = !strings.overflow
            && strings.count >= 2
            && distinct < strings.count
            && distinct <= MAX_TRACKED_STRINGS;

        if !is_enum {
            return vec![TsType::Primitive(TsPrimitive::String)];
        }
        if self.options.prefer_unions || (distinct == 1 && self.options.prefer_const_values) {
            return strings
                .values
                .iter()
                .map(|v| TsType::Literal(TsLiteral::String(v.clone())))
                .collect();
        }
        vec![self.enum_type(strings, hint)]
    }

    fn enum_type(&mut self, strings: &StringStats, hint: &str) -> TsType {
        let mut seen = HashSet::new();
        let cases: Vec<EnumCase> = strings
            .values
            .iter()
            .map(|value| {
                let base = type_identifier(&pascal_case(value), "Empty");
                let mut name = base.clone();
                let mut n = 2;
                while !seen.insert(name.clone()) {
                    name = format!("{base}{n}");
                    n += 1;
                }
                EnumCase {
                    name,
                    value: value.clone(),
                }
            })
            .collect();
        let kind = TypeDefKind::Enum { cases };

        let body = body_key(&kind);
        if let Some(existing) = self.shared.get(&body) {
            return TsType::Ref(existing.clone());
        }
        let name = self.unique_name(hint);
        self.shared.insert(body, name.clone());
        self.defs.push(Some(TsTypeDef {
            name: name.clone(),
            kind,
        }));
        TsType::Ref(name)
    }
}

fn body_key(kind: &TypeDefKind) -> String {
    let prefix = match kind {
        TypeDefKind::Interface { .. } => "interface",
        TypeDefKind::TypeAlias { .. } => "type",
        TypeDefKind::Enum { .. } => "enum",
    };
    let def = TsTypeDef {
        name: String::new(),
        kind: kind.clone(),
    };
    format!("{prefix}:{}", def.emit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(name: &str, value: &serde_json::Value, options: &GeneratorOptions) -> String {
        codegen_module(name, &Shape::of(value), options).emit()
    }

    #[test]
    fn test_flat_object_alphabetized() {
        let out = render(
            "User",
            &json!({"name": "x", "id": 1, "active": true}),
            &GeneratorOptions::default(),
        );
        assert_eq!(
            out,
            "export interface User {\n    active: boolean;\n    id:     number;\n    name:   string;\n}\n"
        );
    }

    #[test]
    fn test_nested_object_gets_own_interface_after_parent() {
        let out = render(
            "User",
            &json!({"id": 1, "address": {"city": "Paris"}}),
            &GeneratorOptions::default(),
        );
        assert_eq!(
            out,
            "export interface User {\n    address: Address;\n    id:      number;\n}\n\nexport interface Address {\n    city: string;\n}\n"
        );
    }

    #[test]
    fn test_array_of_objects_is_singularized_and_merged() {
        let out = render(
            "Post",
            &json!({"comments": [{"id": 1, "body": "a"}, {"id": 2}]}),
            &GeneratorOptions::default(),
        );
        assert!(out.contains("    comments: Comment[];\n"));
        assert!(out.contains("export interface Comment {\n    body?: string;\n    id:    number;\n}\n"));
    }

    #[test]
    fn test_identical_shapes_share_a_declaration() {
        let out = render(
            "Order",
            &json!({"billing": {"zip": "1"}, "shipping": {"zip": "2"}}),
            &GeneratorOptions::default(),
        );
        assert!(out.contains("    billing:  Billing;\n"));
        assert!(out.contains("    shipping: Billing;\n"));
        assert_eq!(out.matches("export interface").count(), 2);
    }

    #[test]
    fn test_mixed_values_become_union_with_null_last() {
        let out = render(
            "Row",
            &json!({"values": [1, "a", null]}),
            &GeneratorOptions::default(),
        );
        assert!(out.contains("    values: (number | string | null)[];\n"));
    }

    #[test]
    fn test_empty_collections() {
        let out = render(
            "Meta",
            &json!({"extra": {}, "tags": []}),
            &GeneratorOptions::default(),
        );
        assert!(out.contains("    extra: { [key: string]: any };\n"));
        assert!(out.contains("    tags:  any[];\n"));
    }

    #[test]
    fn test_repeated_strings_become_literal_union() {
        let out = render(
            "Task",
            &json!({"items": [{"status": "open"}, {"status": "done"}, {"status": "open"}]}),
            &GeneratorOptions::default(),
        );
        assert!(out.contains("    status: \"open\" | \"done\";\n"));
    }

    #[test]
    fn test_repeated_strings_become_enum_without_unions() {
        let options = GeneratorOptions {
            prefer_unions: false,
            ..GeneratorOptions::default()
        };
        let out = render(
            "Task",
            &json!({"items": [{"status": "open"}, {"status": "in-progress"}, {"status": "open"}]}),
            &options,
        );
        assert!(out.contains("    status: Status;\n"));
        assert!(out.contains(
            "export enum Status {\n    Open = \"open\",\n    InProgress = \"in-progress\",\n}\n"
        ));
    }

    #[test]
    fn test_single_repeated_string_is_const_value() {
        let options = GeneratorOptions {
            prefer_unions: false,
            ..GeneratorOptions::default()
        };
        let out = render(
            "Event",
            &json!({"kinds": ["click", "click"]}),
            &options,
        );
        assert!(out.contains("    kinds: \"click\"[];\n"));
    }

    #[test]
    fn test_top_level_scalar_is_alias() {
        let out = render("Count", &json!(3), &GeneratorOptions::default());
        assert_eq!(out, "export type Count = number;\n");
    }

    #[test]
    fn test_top_level_array_uses_element_name() {
        let out = render("Ids", &json!([{"id": 1}]), &GeneratorOptions::default());
        assert_eq!(
            out,
            "export type Ids = IdsElement[];\n\nexport interface IdsElement {\n    id: number;\n}\n"
        );
    }

    #[test]
    fn test_leading_digit_name_is_prefixed() {
        let out = render("123Items", &json!({"a": 1}), &GeneratorOptions::default());
        assert!(out.starts_with("export interface T123Items {"));
    }

    #[test]
    fn test_nested_name_collision_gets_suffix() {
        let out = render(
            "User",
            &json!({"user": {"name": "x"}}),
            &GeneratorOptions::default(),
        );
        assert!(out.contains("    user: User2;\n"));
        assert!(out.contains("export interface User2 {"));
    }

    #[test]
    fn test_root_name_is_made_an_identifier() {
        let out = render("user-info", &json!({"id": 1}), &GeneratorOptions::default());
        assert_eq!(out, "export interface UserInfo {\n    id: number;\n}\n");

        let out = render("my api 2", &json!(true), &GeneratorOptions::default());
        assert_eq!(out, "export type MyApi2 = boolean;\n");

        let out = render("9-lives", &json!({"a": 1}), &GeneratorOptions::default());
        assert!(out.starts_with("export interface T9Lives {"));
    }

    #[test]
    fn test_control_characters_stay_inside_literals() {
        let out = render(
            "Table",
            &json!({"rows": [{"s": "a\nb"}, {"s": "a\nb"}], "k\tey": 1}),
            &GeneratorOptions::default(),
        );
        assert!(out.contains("    s: \"a\\nb\";\n"));
        assert!(out.contains("    \"k\\tey\": number;\n"));
        assert!(!out.contains('\t'));
        assert_eq!(out.lines().filter(|l| l.contains("a\\nb")).count(), 1);
    }

    #[test]
    fn test_enum_values_are_escaped() {
        let options = GeneratorOptions {
            prefer_unions: false,
            ..GeneratorOptions::default()
        };
        let out = render(
            "Line",
            &json!({"ends": ["x\u{2028}", "x\u{2028}"], "tags": ["a\"b", "c\rd", "a\"b"]}),
            &options,
        );
        assert!(out.contains("    ends: \"x\\u2028\"[];\n"));
        assert!(out.contains("    tags: Tag[];\n"));
        assert!(out.contains("    AB = \"a\\\"b\",\n"));
        assert!(out.contains("    CD = \"c\\rd\",\n"));
    }
}
