//! Route descriptors for the five CRUD operations of a model.

use std::{fmt, str::FromStr};

use prisma_rest_core::pluralize;
use prisma_rest_schema::Entity;
use thiserror::Error;

/// File extension of generated route modules.
pub const ROUTE_EXTENSION: &str = "ts";

/// A canonical CRUD operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// All operations, in route-table order.
    pub const ALL: [Operation; 5] = [
        Operation::List,
        Operation::Get,
        Operation::Create,
        Operation::Update,
        Operation::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    pub fn method(&self) -> HttpMethod {
        match self {
            Self::List | Self::Get => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// The route file this operation's handler lives in.
    pub fn file(&self) -> RouteFile {
        match self {
            Self::List | Self::Create => RouteFile::Collection,
            Self::Get | Self::Update | Self::Delete => RouteFile::Item,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operation name that is not one of the five CRUD operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operation: {0}")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two route modules generated per model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteFile {
    /// `{plural}/route.ts`: list and create.
    Collection,
    /// `{plural}/[id]/route.ts`: get, update and delete.
    Item,
}

impl RouteFile {
    pub const ALL: [RouteFile; 2] = [RouteFile::Collection, RouteFile::Item];

    /// Operations whose handlers share this file, in emission order.
    pub fn operations(&self) -> &'static [Operation] {
        match self {
            Self::Collection => &[Operation::List, Operation::Create],
            Self::Item => &[Operation::Get, Operation::Update, Operation::Delete],
        }
    }

    /// Path of the file relative to the output root.
    pub fn relative_path(&self, plural: &str) -> String {
        match self {
            Self::Collection => format!("{plural}/route.{ROUTE_EXTENSION}"),
            Self::Item => format!("{plural}/[id]/route.{ROUTE_EXTENSION}"),
        }
    }
}

/// A single generated HTTP route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: String,
    pub method: HttpMethod,
    pub handler: String,
    pub entity: String,
    pub operation: Operation,
}

/// Derive the five CRUD routes of `entity` under `base`.
pub fn build_routes(entity: &Entity, base: &str) -> [RouteDescriptor; 5] {
    let collection = format!("{base}/{}", pluralize(&entity.name));
    let item = format!("{collection}/[id]");

    Operation::ALL.map(|operation| RouteDescriptor {
        path: match operation.file() {
            RouteFile::Collection => collection.clone(),
            RouteFile::Item => item.clone(),
        },
        method: operation.method(),
        handler: format!("{}{}", operation.as_str(), entity.name),
        entity: entity.name.clone(),
        operation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_routes() {
        let routes = build_routes(&Entity::new("User"), "/api");
        assert_eq!(routes.len(), 5);

        let get = &routes[1];
        assert_eq!(get.path, "/api/users/[id]");
        assert_eq!(get.handler, "getUser");
        assert_eq!(get.method, HttpMethod::Get);
        assert_eq!(get.operation, Operation::Get);
        assert_eq!(get.entity, "User");
    }

    #[test]
    fn test_methods_and_paths() {
        let routes = build_routes(&Entity::new("BlogPost"), "/api/v1");
        let methods: Vec<_> = routes.iter().map(|r| r.method.as_str()).collect();
        assert_eq!(methods, vec!["GET", "GET", "POST", "PUT", "DELETE"]);

        let paths: Vec<_> = routes.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "/api/v1/blogposts",
                "/api/v1/blogposts/[id]",
                "/api/v1/blogposts",
                "/api/v1/blogposts/[id]",
                "/api/v1/blogposts/[id]",
            ]
        );

        let handlers: Vec<_> = routes.iter().map(|r| r.handler.as_str()).collect();
        assert_eq!(
            handlers,
            vec![
                "listBlogPost",
                "getBlogPost",
                "createBlogPost",
                "updateBlogPost",
                "deleteBlogPost",
            ]
        );
    }

    #[test]
    fn test_naive_pluralization_is_kept() {
        let routes = build_routes(&Entity::new("Category"), "/api");
        assert_eq!(routes[0].path, "/api/categorys");
    }

    #[test]
    fn test_operation_from_str() {
        assert_eq!("update".parse::<Operation>(), Ok(Operation::Update));
        let err = "patch".parse::<Operation>().unwrap_err();
        assert_eq!(err.to_string(), "unknown operation: patch");
    }

    #[test]
    fn test_route_files() {
        assert_eq!(RouteFile::Collection.relative_path("users"), "users/route.ts");
        assert_eq!(RouteFile::Item.relative_path("users"), "users/[id]/route.ts");
        for op in Operation::ALL {
            assert!(op.file().operations().contains(&op));
        }
    }
}
