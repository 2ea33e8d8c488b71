//! Explicit routing table.
//!
//! Each route is declared here as data: method, path, and the full set
//! of response codes the handler may produce. Tests assert that the
//! live router agrees with this table, replacing per-endpoint response
//! documentation annotations.

/// One row of the routing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSpec {
    pub method: &'static str,
    pub path: &'static str,
    /// Every status code this route is allowed to answer with.
    pub responses: &'static [u16],
}

/// All routes served by the loan payment API.
pub const ROUTES: &[RouteSpec] = &[
    RouteSpec {
        method: "GET",
        path: "/health",
        responses: &[200],
    },
    RouteSpec {
        method: "GET",
        path: "/api/loanPayments/all",
        responses: &[200, 404, 500],
    },
    RouteSpec {
        method: "GET",
        path: "/api/loanPayments/date",
        responses: &[200, 400, 404, 500],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_are_unique() {
        for (i, a) in ROUTES.iter().enumerate() {
            for b in &ROUTES[i + 1..] {
                assert!(
                    a.method != b.method || a.path != b.path,
                    "duplicate route {} {}",
                    a.method,
                    a.path
                );
            }
        }
    }

    #[test]
    fn test_every_route_declares_a_success_code() {
        for route in ROUTES {
            assert!(
                route.responses.contains(&200),
                "{} {} declares no 200",
                route.method,
                route.path
            );
        }
    }

    #[test]
    fn test_declared_codes_are_valid_http() {
        for route in ROUTES {
            for code in route.responses {
                assert!(
                    (100..600).contains(code),
                    "{} {} declares invalid code {}",
                    route.method,
                    route.path,
                    code
                );
            }
        }
    }
}
