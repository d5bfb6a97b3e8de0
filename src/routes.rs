use std::fmt;

/// Fixed mapping from logical fakebank resources to their URL path segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiRoute {
    Cards,
    Clients,
    Operations,
    Statements,
    Notifications,
}

impl ApiRoute {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ApiRoute::Cards => "/fakebank/cards",
            ApiRoute::Clients => "/fakebank/clients",
            ApiRoute::Operations => "/fakebank/accounts",
            ApiRoute::Statements => "/fakebank/statements",
            ApiRoute::Notifications => "/fakebank/notifications",
        }
    }
}

impl fmt::Display for ApiRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
