//! TypeScript expressions and object literals.
//!
//! An expression renders either on one line or as a block that spans
//! several lines. Block rendering follows the usual formatter layout:
//! a call whose last argument is a block "hugs" it (`f({` ... `})`),
//! while a call marked multiline puts every argument on its own line.

use crate::builder::CodeFragment;

/// A TypeScript expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Emitted verbatim (identifiers, operators, member access).
    Raw(String),
    /// A string literal, double quoted.
    Str(String),
    /// An object literal.
    Object(JsObject),
    /// An array literal; non-empty arrays render one element per line.
    Array(Vec<Expr>),
    /// A function call.
    Call(Call),
    /// `await <expr>`
    Await(Box<Expr>),
    /// `new <expr>`
    New(Box<Expr>),
}

impl Expr {
    pub fn raw(s: impl Into<String>) -> Self {
        Self::Raw(s.into())
    }

    pub fn str(s: impl Into<String>) -> Self {
        Self::Str(s.into())
    }

    pub fn array(items: impl IntoIterator<Item = Expr>) -> Self {
        Self::Array(items.into_iter().collect())
    }

    pub fn awaited(self) -> Self {
        Self::Await(Box::new(self))
    }

    /// Prefix with `new`.
    pub fn construct(self) -> Self {
        Self::New(Box::new(self))
    }

    /// Whether the expression needs more than one line.
    pub fn is_block(&self) -> bool {
        match self {
            Self::Raw(_) | Self::Str(_) => false,
            Self::Object(obj) => obj.multiline && !obj.properties.is_empty(),
            Self::Array(items) => !items.is_empty(),
            Self::Call(call) => call.multiline || call.args.iter().any(Expr::is_block),
            Self::Await(inner) | Self::New(inner) => inner.is_block(),
        }
    }

    /// Single-line rendering, ignoring any block layout.
    pub fn inline(&self) -> String {
        match self {
            Self::Raw(s) => s.clone(),
            Self::Str(s) => quote(s),
            Self::Object(obj) => obj.inline(),
            Self::Array(items) => {
                let items: Vec<_> = items.iter().map(Expr::inline).collect();
                format!("[{}]", items.join(", "))
            }
            Self::Call(call) => {
                let args: Vec<_> = call.args.iter().map(Expr::inline).collect();
                format!("{}({})", call.callee, args.join(", "))
            }
            Self::Await(inner) => format!("await {}", inner.inline()),
            Self::New(inner) => format!("new {}", inner.inline()),
        }
    }

    /// Render with `prefix` before the first line and `suffix` after the last.
    pub fn fragments(&self, prefix: &str, suffix: &str) -> Vec<CodeFragment> {
        if !self.is_block() {
            return vec![self.line(prefix, suffix)];
        }

        match self {
            Self::Object(obj) => vec![CodeFragment::block(
                format!("{prefix}{{"),
                obj.property_fragments(),
                format!("}}{suffix}"),
            )],
            Self::Array(items) => vec![CodeFragment::block(
                format!("{prefix}["),
                items.iter().flat_map(|e| e.fragments("", ",")).collect(),
                format!("]{suffix}"),
            )],
            Self::Call(call) => call.fragments(prefix, suffix),
            Self::Await(inner) => inner.fragments(&format!("{prefix}await "), suffix),
            Self::New(inner) => inner.fragments(&format!("{prefix}new "), suffix),
            Self::Raw(_) | Self::Str(_) => vec![self.line(prefix, suffix)],
        }
    }

    fn line(&self, prefix: &str, suffix: &str) -> CodeFragment {
        CodeFragment::line(format!("{prefix}{}{suffix}", self.inline()))
    }
}

impl From<JsObject> for Expr {
    fn from(obj: JsObject) -> Self {
        Self::Object(obj)
    }
}

impl From<Call> for Expr {
    fn from(call: Call) -> Self {
        Self::Call(call)
    }
}

/// A function or method call.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    callee: String,
    args: Vec<Expr>,
    multiline: bool,
}

impl Call {
    pub fn new(callee: impl Into<String>) -> Self {
        Self {
            callee: callee.into(),
            args: Vec::new(),
            multiline: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<Expr>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Put each argument on its own line.
    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    fn fragments(&self, prefix: &str, suffix: &str) -> Vec<CodeFragment> {
        let open = format!("{prefix}{}(", self.callee);
        let close = format!("){suffix}");

        match self.args.split_last() {
            Some((last, leading)) if !self.multiline && !leading.iter().any(Expr::is_block) => {
                let mut hug = open;
                for arg in leading {
                    hug.push_str(&arg.inline());
                    hug.push_str(", ");
                }
                last.fragments(&hug, &close)
            }
            _ => vec![CodeFragment::block(
                open,
                self.args.iter().flat_map(|a| a.fragments("", ",")).collect(),
                close,
            )],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Property {
    key: String,
    value: Option<Expr>,
}

/// Builder for object literals.
///
/// Multiline objects print one property per line with trailing commas;
/// inline objects print as `{ key: value }`.
#[derive(Debug, Clone, PartialEq)]
pub struct JsObject {
    properties: Vec<Property>,
    multiline: bool,
}

impl JsObject {
    /// A multiline object literal.
    pub fn new() -> Self {
        Self {
            properties: Vec::new(),
            multiline: true,
        }
    }

    /// A single-line object literal.
    pub fn inline_literal() -> Self {
        Self {
            properties: Vec::new(),
            multiline: false,
        }
    }

    /// Add a `key: value` property.
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Expr>) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value: Some(value.into()),
        });
        self
    }

    /// Add a shorthand property (`{ skip }`).
    pub fn shorthand(mut self, name: impl Into<String>) -> Self {
        self.properties.push(Property {
            key: name.into(),
            value: None,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    fn inline(&self) -> String {
        if self.properties.is_empty() {
            return "{}".to_string();
        }
        let props: Vec<_> = self
            .properties
            .iter()
            .map(|p| match &p.value {
                Some(value) => format!("{}: {}", p.key, value.inline()),
                None => p.key.clone(),
            })
            .collect();
        format!("{{ {} }}", props.join(", "))
    }

    fn property_fragments(&self) -> Vec<CodeFragment> {
        self.properties
            .iter()
            .flat_map(|p| match &p.value {
                Some(value) => value.fragments(&format!("{}: ", p.key), ","),
                None => vec![CodeFragment::line(format!("{},", p.key))],
            })
            .collect()
    }
}

impl Default for JsObject {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CodeBuilder;

    fn render(expr: &Expr, prefix: &str, suffix: &str) -> String {
        let mut builder = CodeBuilder::typescript();
        for fragment in expr.fragments(prefix, suffix) {
            builder.apply_fragment(fragment);
        }
        builder.build()
    }

    #[test]
    fn test_inline_values() {
        assert_eq!(Expr::str("a \"b\"").inline(), "\"a \\\"b\\\"\"");
        assert_eq!(
            Expr::from(JsObject::inline_literal().prop("status", Expr::raw("404"))).inline(),
            "{ status: 404 }"
        );
        assert_eq!(Expr::from(JsObject::inline_literal()).inline(), "{}");
    }

    #[test]
    fn test_inline_call_stays_on_one_line() {
        let expr = Expr::from(
            Call::new("NextResponse")
                .arg(Expr::raw("null"))
                .arg(JsObject::inline_literal().prop("status", Expr::raw("204"))),
        )
        .construct();
        assert!(!expr.is_block());
        assert_eq!(
            render(&expr, "return ", ";"),
            "return new NextResponse(null, { status: 204 });\n"
        );
    }

    #[test]
    fn test_call_hugs_trailing_object() {
        let expr = Expr::from(
            Call::new("prisma.user.findMany")
                .arg(JsObject::new().shorthand("skip").prop("take", Expr::raw("limit"))),
        )
        .awaited();
        assert_eq!(
            render(&expr, "const items = ", ";"),
            "const items = await prisma.user.findMany({\n  skip,\n  take: limit,\n});\n"
        );
    }

    #[test]
    fn test_multiline_call_puts_arguments_on_lines() {
        let expr = Expr::from(
            Call::new("NextResponse.json")
                .arg(JsObject::inline_literal().prop("error", Expr::str("User not found")))
                .arg(JsObject::inline_literal().prop("status", Expr::raw("404")))
                .multiline(),
        );
        assert_eq!(
            render(&expr, "return ", ";"),
            "return NextResponse.json(\n  { error: \"User not found\" },\n  { status: 404 },\n);\n"
        );
    }

    #[test]
    fn test_array_elements_render_with_trailing_commas() {
        let expr = Expr::from(
            Call::new("Promise.all").arg(Expr::array([
                Expr::from(Call::new("a")),
                Expr::from(Call::new("b").arg(JsObject::new().shorthand("x"))),
            ])),
        );
        assert_eq!(
            render(&expr, "", ";"),
            "Promise.all([\n  a(),\n  b({\n    x,\n  }),\n]);\n"
        );
    }

    #[test]
    fn test_nested_inline_object_inside_block() {
        let expr = Expr::from(
            JsObject::new().prop(
                "where",
                JsObject::inline_literal().prop("id", Expr::raw("params.id")),
            ),
        );
        assert_eq!(render(&expr, "f(", ")"), "f({\n  where: { id: params.id },\n})\n");
    }
}
