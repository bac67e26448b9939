//! TypeScript IR for generated declarations.
//!
//! - TsType: types (primitives, arrays, unions, literals, references)
//! - TsTypeDef: named top-level declarations (interfaces, aliases, enums)

/// TypeScript type representation
#[derive(Debug, Clone, PartialEq)]
pub enum TsType {
    /// Primitive types: string, number, boolean, null, any
    Primitive(TsPrimitive),
    /// Array type: T[]
    Array(Box<TsType>),
    /// Union type: A | B | C
    Union(Vec<TsType>),
    /// Index signature object: { [key: string]: T }
    Map(Box<TsType>),
    /// Literal type: "foo"
    Literal(TsLiteral),
    /// Named type reference
    Ref(String),
}

/// TypeScript primitive types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsPrimitive {
    /// `string`
    String,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// `null`
    Null,
    /// `any`, for positions nothing was observed at
    Any,
}

/// TypeScript literal values
#[derive(Debug, Clone, PartialEq)]
pub enum TsLiteral {
    /// A string literal, stored unescaped
    String(String),
}

/// Interface property definition
#[derive(Debug, Clone, PartialEq)]
pub struct TsProp {
    /// Key as it appears in the JSON, quoted on emission if needed
    pub name: String,
    /// Property type
    pub ty: TsType,
    /// Rendered with `?` when some samples lacked the key
    pub optional: bool,
}

/// One case of a string enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumCase {
    /// Member identifier
    pub name: String,
    /// String value the member stands for
    pub value: String,
}

/// Named type definition
#[derive(Debug, Clone, PartialEq)]
pub struct TsTypeDef {
    /// Exported identifier
    pub name: String,
    /// What is declared under that name
    pub kind: TypeDefKind,
}

/// Body of a named declaration
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDefKind {
    /// export interface Name { ... }
    Interface { properties: Vec<TsProp> },
    /// export type Name = T;
    TypeAlias { ty: TsType },
    /// export enum Name { A = "a" }
    Enum { cases: Vec<EnumCase> },
}

/// A rendered file: declarations in emission order.
#[derive(Debug, Clone, Default)]
pub struct TsModule {
    /// Declarations, root first
    pub types: Vec<TsTypeDef>,
}
