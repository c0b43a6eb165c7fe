//! Human-readable one-line rendering of aggregates.
//!
//! An aggregate renders as space-separated `name=value` pairs. Values follow their [`Shape`]:
//!
//! | shape        | rendering                          |
//! |--------------|------------------------------------|
//! | text, char   | double-quoted, no escaping         |
//! | scalar       | `Display`                          |
//! | enumerator   | the constant's name                |
//! | aggregate    | its own members, wrapped in `{}`   |
//! | sequence     | `[a, b, c]`                        |
//! | tuple        | `(a, b)`                           |
//! | map          | `{k: v, k: v}`                     |
//! | optional     | `None`, or the payload's rendering |
//! | debug-only   | `Debug`                            |
//! | opaque       | `<opaque>`                         |

use std::fmt::{self, Write as _};

use crate::aggregate::{DynAggregate, MemberValues};
use crate::reflect::{Reflect, Shape};

/// Render the members of `object` as `name=value` pairs.
///
/// ```
/// #[derive(reflection::Reflect)]
/// struct Person {
///     name: &'static str,
///     email: String,
///     age: u32,
/// }
///
/// let person = Person { name: "John Doe", email: "john@doe.com".into(), age: 42 };
/// assert_eq!(reflection::inspect(&person), r#"name="John Doe" email="john@doe.com" age=42"#);
/// ```
pub fn inspect<T: MemberValues>(object: &T) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_members(&mut out, object);
    out
}

/// Render every object on its own line, each line terminated by `\n`.
#[tracing::instrument(level = "debug", skip_all, fields(ty = T::TYPE_NAME, count = objects.len()))]
pub fn inspect_all<T: MemberValues>(objects: &[T]) -> String {
    let mut out = String::new();
    for object in objects {
        let _ = write_members(&mut out, object);
        out.push('\n');
    }
    out
}

fn write_members(out: &mut dyn fmt::Write, object: &dyn DynAggregate) -> fmt::Result {
    for (index, name, value) in object.members() {
        if index > 0 {
            out.write_char(' ')?;
        }
        write!(out, "{name}=")?;
        write_value(out, value)?;
    }
    Ok(())
}

pub(crate) fn write_value(out: &mut dyn fmt::Write, value: &dyn Reflect) -> fmt::Result {
    match value.shape() {
        Shape::Text(text) => write!(out, "\"{text}\""),
        Shape::Char(c) => write!(out, "\"{c}\""),
        Shape::Scalar(scalar) => write!(out, "{scalar}"),
        Shape::Enumerator(name) => out.write_str(name),
        Shape::Aggregate(nested) => {
            out.write_char('{')?;
            write_members(out, nested)?;
            out.write_char('}')
        }
        Shape::Sequence(items) => write_list(out, ('[', ']'), items),
        Shape::Tuple(items) => write_list(out, ('(', ')'), items),
        Shape::Map(entries) => {
            out.write_char('{')?;
            for (i, (key, value)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_value(out, key)?;
                out.write_str(": ")?;
                write_value(out, value)?;
            }
            out.write_char('}')
        }
        Shape::Optional(None) => out.write_str("None"),
        Shape::Optional(Some(payload)) => write_value(out, payload),
        Shape::Debug(value) => write!(out, "{value:?}"),
        Shape::Opaque => out.write_str("<opaque>"),
    }
}

fn write_list(out: &mut dyn fmt::Write, (open, close): (char, char), items: Vec<&dyn Reflect>) -> fmt::Result {
    out.write_char(open)?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_value(out, item)?;
    }
    out.write_char(close)
}
