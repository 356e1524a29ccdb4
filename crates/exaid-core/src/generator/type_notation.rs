//! Parser for the type notation found in Swagger documents.
//!
//! Definition names and `type` fields produced by Java-flavoured generators
//! carry generics (`PageResult<List<Pet>>`), a guillemet spelling of the same
//! thing (`PageResult«List«Pet»»`) and array suffixes (`Pet[]`). All of them
//! decode into a [`TypeNode`] tree whose [`Display`](fmt::Display) output is
//! the canonical spelling used throughout the generated code.

use std::{
  borrow::Cow,
  collections::{HashMap, HashSet},
  fmt,
};

pub const ANY: &str = "any";
pub const ARRAY: &str = "array";
pub const RECORD: &str = "Record";
pub const STRING: &str = "string";

const ARRAY_SUFFIX: &str = "[]";

const DEFAULT_ALIASES: &[(&str, &str)] = &[
  ("integer", "number"),
  ("int", "number"),
  ("long", "number"),
  ("float", "number"),
  ("double", "number"),
  ("decimal", "number"),
  ("bigdecimal", "number"),
  ("Integer", "number"),
  ("Long", "number"),
  ("Float", "number"),
  ("Double", "number"),
  ("BigDecimal", "number"),
  ("date", "string"),
  ("date-time", "string"),
  ("String", "string"),
  ("Boolean", "boolean"),
  ("Object", "any"),
  ("Void", "void"),
  ("file", "File"),
  ("List", "array"),
  ("Set", "array"),
  ("Array", "array"),
  ("Collection", "array"),
  ("Map", "Record"),
];

const DEFAULT_BASE_TYPES: &[&str] = &[
  "string",
  "number",
  "object",
  "boolean",
  "array",
  "any",
  "void",
  "undefined",
  "null",
  "Record",
  "File",
];

/// A decoded type: a name plus its ordered generic arguments.
///
/// Array types use the name [`ARRAY`] with the element as the only argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNode {
  pub name: String,
  pub generic_args: Vec<TypeNode>,
}

impl TypeNode {
  pub fn named(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      generic_args: vec![],
    }
  }

  pub fn any() -> Self {
    Self::named(ANY)
  }

  pub fn array_of(element: TypeNode) -> Self {
    Self {
      name: ARRAY.to_string(),
      generic_args: vec![element],
    }
  }

  pub fn record_of(value: TypeNode) -> Self {
    Self {
      name: RECORD.to_string(),
      generic_args: vec![Self::named(STRING), value],
    }
  }

  pub fn is_array(&self) -> bool {
    self.name == ARRAY
  }
}

impl fmt::Display for TypeNode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.is_array() {
      return match self.generic_args.first() {
        Some(element) => write!(f, "{element}{ARRAY_SUFFIX}"),
        None => write!(f, "{ANY}{ARRAY_SUFFIX}"),
      };
    }

    f.write_str(&self.name)?;
    if self.generic_args.is_empty() {
      return Ok(());
    }

    f.write_str("<")?;
    for (position, arg) in self.generic_args.iter().enumerate() {
      if position > 0 {
        f.write_str(",")?;
      }
      write!(f, "{arg}")?;
    }
    f.write_str(">")
  }
}

/// Canonicalization data for one compilation.
///
/// `aliases` maps foreign names (`integer`, `List`, `Map`) onto the target
/// vocabulary; `base_types` lists the names that never need an import. The
/// table is plain data so independent compilations never share state.
#[derive(Debug, Clone)]
pub struct TypeTable {
  aliases: HashMap<String, String>,
  base_types: HashSet<String>,
}

impl Default for TypeTable {
  fn default() -> Self {
    Self {
      aliases: DEFAULT_ALIASES
        .iter()
        .map(|(from, to)| ((*from).to_string(), (*to).to_string()))
        .collect(),
      base_types: DEFAULT_BASE_TYPES.iter().map(|name| (*name).to_string()).collect(),
    }
  }
}

impl TypeTable {
  /// Adds or replaces aliases. Later entries win over the defaults.
  ///
  /// Alias targets become base types: a configured `Long -> bigint` names a
  /// type the generated code gets from its environment, never from an import.
  #[must_use]
  pub fn with_aliases(mut self, aliases: impl IntoIterator<Item = (String, String)>) -> Self {
    for (from, to) in aliases {
      self.base_types.insert(to.clone());
      self.aliases.insert(from, to);
    }
    self
  }

  pub fn canonical_name<'a>(&'a self, name: &'a str) -> &'a str {
    self.aliases.get(name).map_or(name, String::as_str)
  }

  pub fn is_base_type(&self, name: &str) -> bool {
    self.base_types.contains(name)
  }

  /// Decodes a type string. Empty input decodes to `any`.
  pub fn parse(&self, notation: &str) -> TypeNode {
    self.parse_normalized(&normalize_brackets(notation))
  }

  fn parse_normalized(&self, notation: &str) -> TypeNode {
    let notation = notation.trim();
    if notation.is_empty() {
      return TypeNode::any();
    }

    if let Some(element) = notation.strip_suffix(ARRAY_SUFFIX) {
      return TypeNode::array_of(self.parse_normalized(element));
    }

    let Some(open) = notation.find('<') else {
      return TypeNode::named(self.canonical_name(notation));
    };

    let base = notation[..open].trim();
    if base.is_empty() {
      return TypeNode::any();
    }

    let segment = match matching_close(notation, open) {
      Some(close) => &notation[open + 1..close],
      None => &notation[open + 1..],
    };

    let generic_args = if segment.trim().is_empty() {
      vec![]
    } else {
      split_generic_args(segment)
        .into_iter()
        .map(|arg| self.parse_normalized(arg))
        .collect()
    };

    TypeNode {
      name: self.canonical_name(base).to_string(),
      generic_args,
    }
  }

  /// Appends every non-base name in `node` to `imports`, outermost first.
  pub fn collect_imports(&self, node: &TypeNode, imports: &mut Vec<String>) {
    if !self.is_base_type(&node.name) {
      imports.push(node.name.clone());
    }
    for arg in &node.generic_args {
      self.collect_imports(arg, imports);
    }
  }
}

fn normalize_brackets(notation: &str) -> Cow<'_, str> {
  if notation.contains(['«', '»']) {
    Cow::Owned(notation.replace('«', "<").replace('»', ">"))
  } else {
    Cow::Borrowed(notation)
  }
}

/// Byte index of the `>` closing the `<` at `open`.
fn matching_close(notation: &str, open: usize) -> Option<usize> {
  let mut depth = 0usize;
  for (offset, ch) in notation[open..].char_indices() {
    match ch {
      '<' => depth += 1,
      '>' => {
        depth = depth.saturating_sub(1);
        if depth == 0 {
          return Some(open + offset);
        }
      }
      _ => {}
    }
  }
  None
}

/// Splits the inside of a generic segment into its top-level arguments.
///
/// A comma separates arguments only at bracket depth zero, so
/// `Set<Product<S,B>>,String` yields `Set<Product<S,B>>` and `String`. A
/// trailing comma does not produce an empty argument.
pub fn split_generic_args(segment: &str) -> Vec<&str> {
  let mut args = vec![];
  let mut depth = 0usize;
  let mut start = 0;

  for (index, ch) in segment.char_indices() {
    match ch {
      '<' => depth += 1,
      '>' => depth = depth.saturating_sub(1),
      ',' if depth == 0 => {
        args.push(segment[start..index].trim());
        start = index + 1;
      }
      _ => {}
    }
  }

  if start < segment.len() {
    args.push(segment[start..].trim());
  }

  args
}
