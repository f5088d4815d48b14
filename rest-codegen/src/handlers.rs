//! Next.js route handler emission.
//!
//! Each CRUD operation becomes one exported async function named after its
//! HTTP method, backed by the Prisma client accessor of the model.

use prisma_rest_core::to_camel_case;
use prisma_rest_schema::Entity;

use crate::{
    ast::{Call, Expr, Fn, Import, JsObject, Param, Stmt},
    code_file::CodeFile,
    routes::{Operation, UnknownOperation},
};

/// Default value of the `page` query parameter.
pub const DEFAULT_PAGE: u32 = 1;
/// Default value of the `limit` query parameter.
pub const DEFAULT_LIMIT: u32 = 10;

const ROUTE_PARAMS_TYPE: &str = "{ params: { id: string } }";

/// Source of a single route handler module.
#[derive(Debug, Clone)]
pub struct HandlerSource {
    /// Model name as declared (`BlogPost`).
    pub entity: String,
    /// Prisma client accessor (`blogPost`).
    pub accessor: String,
    /// Field the item routes look records up by.
    pub id_field: String,
    pub operation: Operation,
    /// Module the `prisma` client is imported from.
    pub client_import: String,
}

impl HandlerSource {
    pub fn new(entity: &Entity, operation: Operation, client_import: impl Into<String>) -> Self {
        Self {
            entity: entity.name.clone(),
            accessor: to_camel_case(&entity.name),
            id_field: entity.id_field().to_string(),
            operation,
            client_import: client_import.into(),
        }
    }

    /// The module as a structured file.
    pub fn code_file(&self) -> CodeFile {
        CodeFile::new()
            .imports(self.build_imports())
            .add(self.build_handler())
    }

    pub fn render(&self) -> String {
        self.code_file().render()
    }

    fn build_imports(&self) -> [Import; 2] {
        [
            Import::new("next/server")
                .named("NextRequest")
                .named("NextResponse"),
            Import::new(&self.client_import).named("prisma"),
        ]
    }

    fn build_handler(&self) -> Fn {
        let handler = Fn::new(self.operation.method().as_str())
            .async_()
            .param(Param::new("request", "NextRequest"));

        let (handler, body) = match self.operation {
            Operation::List => (handler, self.list_body()),
            Operation::Create => (handler, self.create_body()),
            Operation::Get => (self.with_route_params(handler), self.get_body()),
            Operation::Update => (self.with_route_params(handler), self.update_body()),
            Operation::Delete => (self.with_route_params(handler), self.delete_body()),
        };

        handler.stmt(Stmt::try_catch(body, "error", vec![self.failure()]))
    }

    fn with_route_params(&self, handler: Fn) -> Fn {
        handler.param(Param::new("{ params }", ROUTE_PARAMS_TYPE))
    }

    fn list_body(&self) -> Vec<Stmt> {
        let page = Stmt::constant(
            "page",
            Expr::raw(format!(
                "parseInt(searchParams.get(\"page\") || \"{DEFAULT_PAGE}\")"
            )),
        );
        let limit = Stmt::constant(
            "limit",
            Expr::raw(format!(
                "parseInt(searchParams.get(\"limit\") || \"{DEFAULT_LIMIT}\")"
            )),
        );
        let find_many = self
            .client_call("findMany")
            .arg(JsObject::new().shorthand("skip").prop("take", Expr::raw("limit")));
        let fetch = Call::new("Promise.all").arg(Expr::array([
            Expr::from(find_many),
            Expr::from(self.client_call("count")),
        ]));
        let payload = JsObject::new()
            .shorthand("items")
            .shorthand("total")
            .shorthand("page")
            .shorthand("limit")
            .prop("totalPages", Expr::raw("Math.ceil(total / limit)"));

        vec![
            Stmt::constant("searchParams", Expr::raw("request.nextUrl.searchParams")),
            page,
            limit,
            Stmt::constant("skip", Expr::raw("(page - 1) * limit")),
            Stmt::Blank,
            Stmt::constant("[items, total]", Expr::from(fetch).awaited()),
            Stmt::Blank,
            Stmt::ret(Call::new("NextResponse.json").arg(payload)),
        ]
    }

    fn get_body(&self) -> Vec<Stmt> {
        let lookup = self
            .client_call("findUnique")
            .arg(JsObject::new().prop("where", self.where_id()));

        vec![
            Stmt::constant("item", Expr::from(lookup).awaited()),
            Stmt::Blank,
            Stmt::if_(
                "!item",
                vec![Stmt::ret(error_response(
                    format!("{} not found", self.entity),
                    404,
                ))],
            ),
            Stmt::Blank,
            Stmt::ret(Call::new("NextResponse.json").arg(Expr::raw("item"))),
        ]
    }

    fn create_body(&self) -> Vec<Stmt> {
        let create = self
            .client_call("create")
            .arg(JsObject::new().prop("data", Expr::raw("body")));

        vec![
            read_body(),
            Stmt::Blank,
            Stmt::constant("item", Expr::from(create).awaited()),
            Stmt::Blank,
            Stmt::ret(
                Call::new("NextResponse.json")
                    .arg(Expr::raw("item"))
                    .arg(status(201)),
            ),
        ]
    }

    fn update_body(&self) -> Vec<Stmt> {
        let update = self.client_call("update").arg(
            JsObject::new()
                .prop("where", self.where_id())
                .prop("data", Expr::raw("body")),
        );

        vec![
            read_body(),
            Stmt::Blank,
            Stmt::constant("item", Expr::from(update).awaited()),
            Stmt::Blank,
            Stmt::ret(Call::new("NextResponse.json").arg(Expr::raw("item"))),
        ]
    }

    fn delete_body(&self) -> Vec<Stmt> {
        let delete = self
            .client_call("delete")
            .arg(JsObject::new().prop("where", self.where_id()));
        let no_content = Call::new("NextResponse")
            .arg(Expr::raw("null"))
            .arg(status(204));

        vec![
            Stmt::Expr(Expr::from(delete).awaited()),
            Stmt::Blank,
            Stmt::ret(Expr::from(no_content).construct()),
        ]
    }

    fn failure(&self) -> Stmt {
        let lower = self.entity.to_lowercase();
        let message = match self.operation {
            Operation::List => format!("Failed to fetch {lower}s"),
            Operation::Get => format!("Failed to fetch {lower}"),
            Operation::Create => format!("Failed to create {lower}"),
            Operation::Update => format!("Failed to update {lower}"),
            Operation::Delete => format!("Failed to delete {lower}"),
        };
        Stmt::ret(error_response(message, 500))
    }

    fn client_call(&self, method: &str) -> Call {
        Call::new(format!("prisma.{}.{method}", self.accessor))
    }

    fn where_id(&self) -> JsObject {
        JsObject::inline_literal().prop(&self.id_field, Expr::raw("params.id"))
    }
}

fn read_body() -> Stmt {
    Stmt::constant("body", Expr::from(Call::new("request.json")).awaited())
}

fn status(code: u16) -> JsObject {
    JsObject::inline_literal().prop("status", Expr::raw(code.to_string()))
}

fn error_response(message: String, code: u16) -> Expr {
    Call::new("NextResponse.json")
        .arg(JsObject::inline_literal().prop("error", Expr::str(message)))
        .arg(status(code))
        .multiline()
        .into()
}

/// Render the handler module for one operation on `entity`.
pub fn emit_handler(entity: &Entity, operation: Operation, client_import: &str) -> String {
    HandlerSource::new(entity, operation, client_import).render()
}

/// Like [`emit_handler`], for an operation given by name.
///
/// Fails on names other than `list`, `get`, `create`, `update` and `delete`.
pub fn emit_handler_named(
    entity: &Entity,
    operation: &str,
    client_import: &str,
) -> Result<String, UnknownOperation> {
    Ok(emit_handler(entity, operation.parse()?, client_import))
}
