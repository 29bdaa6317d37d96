//! Identifier normalization for emitted C#.
//!
//! Schema identifiers arrive in camelCase, snake_case or kebab-case. C# wants
//! PascalCase type members and forbids identifiers that start with a digit or
//! spell a reserved keyword.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `install-location` | [`to_pascal_case`] | `InstallLocation` |
//! | `7zip` | [`to_pascal_case`] | `_7zip` |
//! | `continue` | [`escape_keyword`] | `@continue` |
//! | `install-location` | [`parameter_name`] | `installLocation` |
//! | `game` in class `Game` | [`property_name`] | `GameValue` |

/// C# reserved keywords. Contextual keywords (`value`, `async`, ...) are legal
/// identifiers and are not listed.
const RESERVED_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Suffix appended to a property that would otherwise share its class's name
const SELF_COLLISION_SUFFIX: &str = "Value";

/// Convert a schema identifier to PascalCase.
///
/// Splits on `-` and `_`, uppercases the first letter of every segment and
/// concatenates. A result starting with a digit gets a leading `_`.
///
/// # Examples
///
/// ```
/// use butlergen_codegen::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("caveId"), "CaveId");
/// assert_eq!(to_pascal_case("install-location"), "InstallLocation");
/// assert_eq!(to_pascal_case("max_results"), "MaxResults");
/// assert_eq!(to_pascal_case("64bit"), "_64bit");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let result: String = s.split(['-', '_']).map(capitalize).collect();

    if result.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{result}")
    } else {
        result
    }
}

/// Uppercase the first character, leaving the rest as is.
///
/// # Examples
///
/// ```
/// use butlergen_codegen::naming::capitalize;
///
/// assert_eq!(capitalize("caveId"), "CaveId");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Whether `name` is a C# reserved keyword
pub fn is_reserved(name: &str) -> bool {
    RESERVED_KEYWORDS.contains(&name)
}

/// Make a parameter or local name safe to declare.
///
/// Reserved keywords get the verbatim-identifier prefix `@`.
///
/// # Examples
///
/// ```
/// use butlergen_codegen::naming::escape_keyword;
///
/// assert_eq!(escape_keyword("continue"), "@continue");
/// assert_eq!(escape_keyword("gameId"), "gameId");
/// ```
pub fn escape_keyword(name: &str) -> String {
    if is_reserved(name) {
        format!("@{name}")
    } else {
        name.to_string()
    }
}

/// Name of the constructor parameter that sets the field `field_name`.
///
/// The normalized property name with its first letter lowercased, then
/// keyword-escaped, so kebab-case and snake_case fields become legal
/// identifiers.
///
/// # Examples
///
/// ```
/// use butlergen_codegen::naming::parameter_name;
///
/// assert_eq!(parameter_name("install-location"), "installLocation");
/// assert_eq!(parameter_name("caveId"), "caveId");
/// assert_eq!(parameter_name("continue"), "@continue");
/// ```
pub fn parameter_name(field_name: &str) -> String {
    let pascal = to_pascal_case(field_name);
    let mut chars = pascal.chars();
    let camel: String = match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    };
    escape_keyword(&camel)
}

/// Display name of a property declared inside `enclosing_type`.
///
/// C# rejects a member named like its enclosing type, so such a property is
/// renamed with a `Value` suffix.
///
/// # Examples
///
/// ```
/// use butlergen_codegen::naming::property_name;
///
/// assert_eq!(property_name("game", "Response"), "Game");
/// assert_eq!(property_name("game", "Game"), "GameValue");
/// ```
pub fn property_name(field_name: &str, enclosing_type: &str) -> String {
    let mut name = to_pascal_case(field_name);
    if name == enclosing_type {
        name.push_str(SELF_COLLISION_SUFFIX);
    }
    name
}
