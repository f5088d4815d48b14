//! Generation directives embedded in model documentation.
//!
//! A directive is a marker such as `@rest-skip` written anywhere in a
//! model's `///` documentation. Markers are matched case-insensitively.

/// Flags derived from a model's documentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestDirectives {
    /// Leave the model out of generation.
    pub skip: bool,
}

struct DirectiveRule {
    /// Lowercase marker text.
    marker: &'static str,
    apply: fn(&mut RestDirectives),
}

fn set_skip(directives: &mut RestDirectives) {
    directives.skip = true;
}

const RULES: &[DirectiveRule] = &[DirectiveRule {
    marker: "@rest-skip",
    apply: set_skip,
}];

/// Extract directives from optional documentation text.
pub fn parse_directives(documentation: Option<&str>) -> RestDirectives {
    let mut directives = RestDirectives::default();
    let Some(doc) = documentation else {
        return directives;
    };

    let doc = doc.to_lowercase();
    for rule in RULES {
        if doc.contains(rule.marker) {
            (rule.apply)(&mut directives);
        }
    }
    directives
}
