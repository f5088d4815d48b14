//! Line-oriented reader for the subset of Prisma schema language the
//! generator needs: models, enums, doc comments and the `@id`, `@unique`
//! and `@relation` field attributes.

use std::collections::HashMap;

use crate::{
    Result,
    error::SourceContext,
    model::{Entity, Enum, Field, Relation, Schema},
};

/// Parse Prisma schema language into a [`Schema`].
pub fn parse_prisma(content: &str, filename: &str) -> Result<Schema> {
    let mut schema = Reader::new(content, filename).read()?;
    assign_default_relation_names(&mut schema);
    Ok(schema)
}

/// A source line with surrounding whitespace removed, remembering where it starts.
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    text: &'a str,
    offset: usize,
}

impl Line<'_> {
    fn span(&self) -> (usize, usize) {
        (self.offset, self.text.len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Model,
    Enum,
    /// `datasource`, `generator`, `type` and `view` blocks carry nothing
    /// the route generator uses.
    Ignored,
}

struct Reader<'a> {
    ctx: SourceContext,
    lines: Vec<Line<'a>>,
    pos: usize,
    docs: Vec<&'a str>,
}

impl<'a> Reader<'a> {
    fn new(content: &'a str, filename: &str) -> Self {
        let mut lines = Vec::new();
        let mut offset = 0;
        for raw in content.split_inclusive('\n') {
            let trimmed_start = raw.trim_start();
            lines.push(Line {
                text: trimmed_start.trim_end(),
                offset: offset + (raw.len() - trimmed_start.len()),
            });
            offset += raw.len();
        }
        Self {
            ctx: SourceContext::new(content, filename),
            lines,
            pos: 0,
            docs: Vec::new(),
        }
    }

    fn next_line(&mut self) -> Option<Line<'a>> {
        let line = self.lines.get(self.pos).copied();
        self.pos += 1;
        line
    }

    /// Take the doc comment lines collected so far.
    fn take_docs(&mut self) -> Option<String> {
        if self.docs.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.docs).join("\n"))
        }
    }

    fn read(mut self) -> Result<Schema> {
        let mut schema = Schema::default();
        let mut seen: HashMap<String, (usize, usize)> = HashMap::new();

        while let Some(line) = self.next_line() {
            if line.text.is_empty() {
                continue;
            }
            if let Some(doc) = line.text.strip_prefix("///") {
                self.docs.push(doc.trim());
                continue;
            }
            let line = Line {
                text: strip_comment(line.text),
                offset: line.offset,
            };
            if line.text.is_empty() {
                continue;
            }

            let (kind, keyword, name) = self.block_header(line)?;
            if kind != BlockKind::Ignored {
                if let Some(first) = seen.get(name) {
                    return Err(self.ctx.duplicate_error(keyword, name, *first, line.span()));
                }
                seen.insert(name.to_string(), line.span());
            }

            let documentation = self.take_docs();
            match kind {
                BlockKind::Model => {
                    let fields = self.model_body(keyword, name, line)?;
                    schema.entities.push(Entity {
                        name: name.to_string(),
                        documentation,
                        fields,
                    });
                }
                BlockKind::Enum => {
                    let values = self.enum_body(keyword, name, line)?;
                    schema.enums.push(Enum {
                        name: name.to_string(),
                        values,
                    });
                }
                BlockKind::Ignored => self.skip_body(keyword, name, line)?,
            }
        }

        Ok(schema)
    }

    /// Parse `keyword Name {`.
    fn block_header(&self, line: Line<'a>) -> Result<(BlockKind, &'a str, &'a str)> {
        let Some(head) = line.text.strip_suffix('{') else {
            return Err(self
                .ctx
                .syntax_error("expected a block such as 'model Name {'", line.span()));
        };
        let mut tokens = head.split_whitespace();
        let keyword = tokens.next().unwrap_or_default();
        let kind = match keyword {
            "model" => BlockKind::Model,
            "enum" => BlockKind::Enum,
            "datasource" | "generator" | "type" | "view" => BlockKind::Ignored,
            other => {
                return Err(self.ctx.syntax_error(
                    format!("unexpected '{}' at top level", other),
                    line.span(),
                ));
            }
        };
        let name = match (tokens.next(), tokens.next()) {
            (Some(name), None) if is_identifier(name) => name,
            _ => {
                return Err(self.ctx.syntax_error(
                    format!("expected a single {} name before '{{'", keyword),
                    line.span(),
                ));
            }
        };
        Ok((kind, keyword, name))
    }

    /// Read body lines up to the closing brace, handing each meaningful
    /// line to `on_line` together with the doc comment preceding it.
    fn body<F>(&mut self, keyword: &str, name: &str, header: Line<'a>, mut on_line: F) -> Result<()>
    where
        F: FnMut(&Self, Line<'a>, Option<String>) -> Result<()>,
    {
        loop {
            let Some(line) = self.next_line() else {
                return Err(self
                    .ctx
                    .unterminated_block_error(keyword, name, header.span()));
            };
            let text = strip_comment(line.text);
            if let Some(doc) = line.text.strip_prefix("///") {
                self.docs.push(doc.trim());
                continue;
            }
            if text == "}" {
                self.docs.clear();
                return Ok(());
            }
            if text.is_empty() || text.starts_with("@@") {
                continue;
            }
            let docs = self.take_docs();
            on_line(
                self,
                Line {
                    text,
                    offset: line.offset,
                },
                docs,
            )?;
        }
    }

    fn model_body(&mut self, keyword: &str, name: &str, header: Line<'a>) -> Result<Vec<Field>> {
        let mut fields = Vec::new();
        self.body(keyword, name, header, |reader, line, docs| {
            let mut field = reader.field(line)?;
            field.documentation = docs;
            fields.push(field);
            Ok(())
        })?;
        Ok(fields)
    }

    fn enum_body(&mut self, keyword: &str, name: &str, header: Line<'a>) -> Result<Vec<String>> {
        let mut values = Vec::new();
        self.body(keyword, name, header, |reader, line, _| {
            let value = line.text.split_whitespace().next().unwrap_or_default();
            if !is_identifier(value) {
                return Err(reader
                    .ctx
                    .syntax_error(format!("invalid enum value '{}'", value), line.span()));
            }
            values.push(value.to_string());
            Ok(())
        })?;
        Ok(values)
    }

    fn skip_body(&mut self, keyword: &str, name: &str, header: Line<'a>) -> Result<()> {
        self.body(keyword, name, header, |_, _, _| Ok(()))
    }

    /// Parse `name Type[]? @attr @attr(args)`.
    fn field(&self, line: Line<'a>) -> Result<Field> {
        let (name, rest) = split_token(line.text);
        if !is_identifier(name) {
            return Err(self
                .ctx
                .syntax_error(format!("invalid field name '{}'", name), line.span()));
        }
        let (raw_type, attributes) = split_token(rest);
        if raw_type.is_empty() {
            return Err(self
                .ctx
                .syntax_error(format!("field '{}' is missing a type", name), line.span()));
        }

        let (type_name, is_list) = match raw_type.strip_suffix("[]") {
            Some(base) => (base, true),
            None => (raw_type, false),
        };
        let (type_name, is_optional) = match type_name.strip_suffix('?') {
            Some(base) => (base, true),
            None => (type_name, false),
        };

        let mut field = Field::new(name, type_name);
        field.is_list = is_list;
        field.is_required = !is_optional;

        for (attr, args) in attributes_of(attributes) {
            match attr {
                "id" => field.is_id = true,
                "unique" => field.is_unique = true,
                "relation" => field.relation = Some(relation_of(args.unwrap_or_default())),
                _ => {}
            }
        }
        Ok(field)
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Split off the first whitespace-delimited token, keeping parenthesised
/// arguments such as `Unsupported("point")` in one piece.
fn split_token(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => return (&s[..i], s[i..].trim_start()),
            _ => {}
        }
    }
    (s, "")
}

/// Drop a trailing `//` comment that is not inside a string literal.
fn strip_comment(s: &str) -> &str {
    let mut in_string = false;
    let bytes = s.as_bytes();
    for i in 0..bytes.len() {
        match bytes[i] {
            b'"' => in_string = !in_string,
            b'/' if !in_string && bytes.get(i + 1) == Some(&b'/') => return s[..i].trim_end(),
            _ => {}
        }
    }
    s
}

/// Iterate `@name` / `@name(args)` attributes of a field line.
fn attributes_of(s: &str) -> Vec<(&str, Option<&str>)> {
    let mut attrs = Vec::new();
    let mut rest = s;
    while let Some(at) = rest.find('@') {
        let after = &rest[at + 1..];
        let name_len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '.'))
            .unwrap_or(after.len());
        let name = &after[..name_len];
        let tail = &after[name_len..];

        if let Some(inner) = tail.strip_prefix('(') {
            let close = matching_paren(inner).unwrap_or(inner.len());
            attrs.push((name, Some(&inner[..close])));
            rest = inner.get(close + 1..).unwrap_or_default();
        } else {
            attrs.push((name, None));
            rest = tail;
        }
    }
    attrs
}

/// Index of the `)` closing an already-opened parenthesis.
fn matching_paren(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    for (i, c) in s.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '(' if !in_string => depth += 1,
            ')' if !in_string => {
                if depth == 0 {
                    return Some(i);
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    None
}

/// Split on commas that are not nested in brackets, parentheses or strings.
fn split_top_level(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '[' | '(' if !in_string => depth += 1,
            ']' | ')' if !in_string => depth = depth.saturating_sub(1),
            ',' if !in_string && depth == 0 => {
                parts.push(s[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(s[start..].trim());
    parts.retain(|p| !p.is_empty());
    parts
}

fn unquote(s: &str) -> &str {
    s.trim().trim_matches('"')
}

fn list_of(s: &str) -> Vec<String> {
    let inner = s.trim().trim_start_matches('[').trim_end_matches(']');
    split_top_level(inner)
        .into_iter()
        .map(|item| item.to_string())
        .collect()
}

/// Parse the argument list of `@relation(...)`.
fn relation_of(args: &str) -> Relation {
    let mut relation = Relation::default();
    for arg in split_top_level(args) {
        match arg.split_once(':') {
            Some((key, value)) => match key.trim() {
                "name" => relation.name = unquote(value).to_string(),
                "fields" => relation.from_fields = list_of(value),
                "references" => relation.to_fields = list_of(value),
                _ => {}
            },
            None if arg.starts_with('"') => relation.name = unquote(arg).to_string(),
            None => {}
        }
    }
    relation
}

/// Give every relation field a relation name, as Prisma does.
fn assign_default_relation_names(schema: &mut Schema) {
    let model_names: Vec<String> = schema.entities.iter().map(|e| e.name.clone()).collect();
    for entity in &mut schema.entities {
        for field in &mut entity.fields {
            if !model_names.contains(&field.type_name) {
                continue;
            }
            let relation = field.relation.get_or_insert_with(Relation::default);
            if relation.name.is_empty() {
                relation.name = Relation::default_name(&entity.name, &field.type_name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn parse(src: &str) -> Schema {
        parse_prisma(src, "schema.prisma").unwrap()
    }

    #[test]
    fn test_model_with_scalar_fields() {
        let schema = parse(
            r#"
            model User {
              id        String   @id @default(cuid())
              email     String   @unique
              name      String?
              tags      String[]
              createdAt DateTime @default(now())
            }
            "#,
        );

        let user = &schema.entities[0];
        assert_eq!(user.name, "User");
        assert_eq!(user.fields.len(), 5);

        let id = user.field("id").unwrap();
        assert!(id.is_id && id.is_required);
        assert_eq!(id.type_name, "String");
        assert!(user.field("email").unwrap().is_unique);
        assert!(!user.field("name").unwrap().is_required);
        assert!(user.field("tags").unwrap().is_list);
    }

    #[test]
    fn test_doc_comments_attach_to_model_and_field() {
        let schema = parse(
            r#"
            // plain comment, not documentation
            /// Internal audit log
            /// @rest-skip
            model AuditLog {
              /// Primary key
              id Int @id
            }
            "#,
        );

        let log = &schema.entities[0];
        assert_eq!(
            log.documentation.as_deref(),
            Some("Internal audit log\n@rest-skip")
        );
        assert_eq!(log.fields[0].documentation.as_deref(), Some("Primary key"));
    }

    #[test]
    fn test_trailing_comment_on_block_header() {
        let schema = parse(
            "model User { // app users\n  id Int @id\n}\n\nenum Role { // access level\n  USER\n}\n",
        );
        assert_eq!(schema.entities[0].name, "User");
        assert_eq!(schema.entities[0].fields.len(), 1);
        assert_eq!(schema.enums[0].values, vec!["USER"]);
    }

    #[test]
    fn test_relations_and_default_names() {
        let schema = parse(
            r#"
            model User {
              id    String @id
              posts Post[]
            }

            model Post {
              id       Int    @id
              authorId String
              author   User   @relation(fields: [authorId], references: [id], onDelete: Cascade)
              editor   User?  @relation("Editor", fields: [editorId], references: [id])
              editorId String?
            }
            "#,
        );

        let posts = schema.entities[0].field("posts").unwrap();
        assert_eq!(posts.relation.as_ref().unwrap().name, "PostToUser");

        let post = &schema.entities[1];
        let author = post.field("author").unwrap().relation.as_ref().unwrap();
        assert_eq!(author.name, "PostToUser");
        assert_eq!(author.from_fields, vec!["authorId"]);
        assert_eq!(author.to_fields, vec!["id"]);

        let editor = post.field("editor").unwrap().relation.as_ref().unwrap();
        assert_eq!(editor.name, "Editor");
        assert!(post.field("authorId").unwrap().relation.is_none());
    }

    #[test]
    fn test_enums_and_ignored_blocks() {
        let schema = parse(
            r#"
            datasource db {
              provider = "postgresql"
              url      = env("DATABASE_URL")
            }

            generator client {
              provider = "prisma-client-js"
            }

            enum Role {
              USER
              ADMIN @map("admin")
              @@map("roles")
            }
            "#,
        );

        assert!(schema.entities.is_empty());
        assert_eq!(schema.enums[0].name, "Role");
        assert_eq!(schema.enums[0].values, vec!["USER", "ADMIN"]);
    }

    #[test]
    fn test_block_attributes_and_trailing_comments_are_ignored() {
        let schema = parse(
            r#"
            model Membership {
              userId  String // who
              groupId String
              url     String @default("https://example.com")
              @@id([userId, groupId])
            }
            "#,
        );

        let membership = &schema.entities[0];
        assert_eq!(membership.fields.len(), 3);
        assert!(membership.fields.iter().all(|f| !f.is_id));
        assert_eq!(membership.id_field(), "id");
    }

    #[test]
    fn test_unterminated_model() {
        let err = parse_prisma("model User {\n  id Int @id\n", "schema.prisma").unwrap_err();
        assert!(matches!(*err, Error::UnterminatedBlock { ref name, .. } if name == "User"));
    }

    #[test]
    fn test_duplicate_model() {
        let err = parse_prisma(
            "model User {\n  id Int @id\n}\nmodel User {\n  id Int @id\n}\n",
            "schema.prisma",
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Duplicate { ref name, .. } if name == "User"));
    }

    #[test]
    fn test_unexpected_top_level_token() {
        let err = parse_prisma("table User {\n}\n", "schema.prisma").unwrap_err();
        assert!(matches!(*err, Error::Syntax { .. }));
    }

    #[test]
    fn test_field_without_type() {
        let err = parse_prisma("model User {\n  id\n}\n", "schema.prisma").unwrap_err();
        match *err {
            Error::Syntax { ref message, .. } => assert!(message.contains("missing a type")),
            ref other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_split_top_level_respects_nesting() {
        assert_eq!(
            split_top_level(r#""Name", fields: [a, b], references: [c]"#),
            vec![r#""Name""#, "fields: [a, b]", "references: [c]"]
        );
    }
}
