//! Routes command report.

use prisma_rest_codegen::RouteDescriptor;

use super::output::{Output, Report};

/// Route table for the selected models.
#[derive(Debug)]
pub struct RoutesReport {
    pub routes: Vec<RouteDescriptor>,
}

impl Report for RoutesReport {
    fn render(&self, out: &mut dyn Output) {
        if self.routes.is_empty() {
            out.preformatted("No routes: no models selected");
            return;
        }

        let method_width = self
            .routes
            .iter()
            .map(|r| r.method.as_str().len())
            .max()
            .unwrap_or_default();
        let path_width = self
            .routes
            .iter()
            .map(|r| r.path.len())
            .max()
            .unwrap_or_default();

        let mut current: Option<&str> = None;
        for route in &self.routes {
            if current != Some(route.entity.as_str()) {
                if current.is_some() {
                    out.newline();
                }
                out.section(&route.entity);
                current = Some(route.entity.as_str());
            }
            out.preformatted(&format!(
                "  {:<method_width$}  {:<path_width$}  {}",
                route.method.as_str(),
                route.path,
                route.handler
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use prisma_rest_codegen::build_routes;
    use prisma_rest_schema::Entity;

    use super::*;
    use crate::reports::BufferOutput;

    #[test]
    fn test_route_table() {
        let mut routes = build_routes(&Entity::new("User"), "/api").to_vec();
        routes.extend(build_routes(&Entity::new("Post"), "/api"));
        let mut out = BufferOutput::default();
        RoutesReport { routes }.render(&mut out);

        assert_eq!(out.lines[0], "User:");
        assert_eq!(out.lines[1], "  GET     /api/users       listUser");
        assert_eq!(out.lines[5], "  DELETE  /api/users/[id]  deleteUser");
        assert_eq!(out.lines[6], "");
        assert_eq!(out.lines[7], "Post:");
    }

    #[test]
    fn test_empty_table() {
        let mut out = BufferOutput::default();
        RoutesReport { routes: Vec::new() }.render(&mut out);
        assert_eq!(out.lines, vec!["No routes: no models selected"]);
    }
}
