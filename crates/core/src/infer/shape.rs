//! Merged shape of one or more JSON samples.
//!
//! A `Shape` records every kind of value observed at one position. Merging
//! a second sample never loses information, so unions and optional
//! properties fall out of the fold directly.

use serde_json::{Map, Value};

/// Distinct string values tracked per position before giving up on enums.
pub const MAX_TRACKED_STRINGS: usize = 8;

/// Every kind of value observed at one position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shape {
    /// A `null` was seen.
    pub null: bool,
    /// A boolean was seen.
    pub boolean: bool,
    /// A number was seen.
    pub number: bool,
    /// String occurrences, if any string was seen.
    pub string: Option<StringStats>,
    /// Element shape of every array seen here; empty if all arrays were empty.
    pub array: Option<Box<Shape>>,
    /// Merged shape of every object seen here.
    pub object: Option<ObjectShape>,
}

/// Counts used to decide between `string`, literals and enums.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringStats {
    /// Strings seen, repeats included.
    pub count: usize,
    /// Distinct values in first-seen order, capped at `MAX_TRACKED_STRINGS`.
    pub values: Vec<String>,
    /// More distinct values were seen than are tracked.
    pub overflow: bool,
}

/// Objects merged across samples.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectShape {
    /// Objects folded in.
    pub samples: usize,
    /// Keys in first-seen order.
    pub props: Vec<PropShape>,
}

/// One key of an [`ObjectShape`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropShape {
    /// Key as found in the JSON.
    pub name: String,
    /// Objects that contained the key.
    pub seen: usize,
    /// Merged shape of its values.
    pub shape: Shape,
}

impl Shape {
    /// Shape of a single value.
    pub fn of(value: &Value) -> Self {
        let mut shape = Self::default();
        shape.observe(value);
        shape
    }

    /// Fold one more value into this shape.
    pub fn observe(&mut self, value: &Value) {
        match value {
            Value::Null => self.null = true,
            Value::Bool(_) => self.boolean = true,
            Value::Number(_) => self.number = true,
            Value::String(s) => self.string.get_or_insert_with(StringStats::default).record(s),
            Value::Array(items) => {
                let element = self.array.get_or_insert_with(Box::default);
                for item in items {
                    element.observe(item);
                }
            }
            Value::Object(map) => self
                .object
                .get_or_insert_with(ObjectShape::default)
                .observe(map),
        }
    }

    /// Nothing was observed here, e.g. the elements of `[]`.
    pub fn is_empty(&self) -> bool {
        !self.null
            && !self.boolean
            && !self.number
            && self.string.is_none()
            && self.array.is_none()
            && self.object.is_none()
    }

    /// The object shape, if objects are the only kind observed here.
    pub fn as_object_only(&self) -> Option<&ObjectShape> {
        let object = self.object.as_ref()?;
        let only = !self.null
            && !self.boolean
            && !self.number
            && self.string.is_none()
            && self.array.is_none();
        only.then_some(object)
    }
}

impl StringStats {
    fn record(&mut self, value: &str) {
        self.count += 1;
        if self.values.iter().any(|v| v == value) {
            return;
        }
        if self.values.len() < MAX_TRACKED_STRINGS {
            self.values.push(value.to_string());
        } else {
            self.overflow = true;
        }
    }
}

impl ObjectShape {
    fn observe(&mut self, map: &Map<String, Value>) {
        self.samples += 1;
        for (key, value) in map {
            if let Some(prop) = self.props.iter_mut().find(|p| p.name == *key) {
                prop.seen += 1;
                prop.shape.observe(value);
            } else {
                self.props.push(PropShape {
                    name: key.clone(),
                    seen: 1,
                    shape: Shape::of(value),
                });
            }
        }
    }
}

impl PropShape {
    /// A property is optional when some object at this position lacked it.
    pub fn is_optional(&self, samples: usize) -> bool {
        self.seen < samples
    }
}
