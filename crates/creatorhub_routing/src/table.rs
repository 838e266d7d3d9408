use std::borrow::Cow;
use std::fmt::Debug;

use tracing::debug;

use crate::pattern::{path_component, Pattern};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("The route table has no wildcard route, so some paths would resolve to nothing.")]
    MissingWildcard,

    #[error("The route table declares a second wildcard at position {index}.")]
    DuplicateWildcard { index: usize },

    #[error("The wildcard route at position {index} is not the last route; everything after it is unreachable.")]
    WildcardNotLast { index: usize },

    #[error("The path '{path}' is declared again at position {index}; the later route is unreachable.")]
    DuplicatePath { path: String, index: usize },
}

/// Ordered `(path, page)` pairs closed by a wildcard page.
///
/// Built once and never mutated afterwards. The wildcard is kept apart from
/// the literal routes so that [`RouteTable::resolve`] is total by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable<P> {
    routes: Vec<(Cow<'static, str>, P)>,
    fallback: P,
}

impl<P: Copy + Debug> RouteTable<P> {
    /// Validates a declaration-ordered list of routes.
    pub fn new<I>(entries: I) -> Result<Self, RouteTableError>
    where
        I: IntoIterator<Item = (Pattern, P)>,
    {
        let mut routes: Vec<(Cow<'static, str>, P)> = Vec::new();
        let mut fallback: Option<(usize, P)> = None;

        for (index, (pattern, page)) in entries.into_iter().enumerate() {
            if let Some((wildcard_index, _)) = fallback {
                return Err(if pattern.is_wildcard() {
                    RouteTableError::DuplicateWildcard { index }
                } else {
                    RouteTableError::WildcardNotLast {
                        index: wildcard_index,
                    }
                });
            }

            match pattern {
                Pattern::Wildcard => fallback = Some((index, page)),
                Pattern::Exact(path) => {
                    if routes.iter().any(|(declared, _)| *declared == path) {
                        return Err(RouteTableError::DuplicatePath {
                            path: path.into_owned(),
                            index,
                        });
                    }
                    routes.push((path, page));
                }
            }
        }

        let (_, fallback) = fallback.ok_or(RouteTableError::MissingWildcard)?;

        Ok(Self { routes, fallback })
    }

    pub fn builder() -> RouteTableBuilder<P> {
        RouteTableBuilder { routes: Vec::new() }
    }

    /// Picks the page for `path`. Never fails: unmatched paths get the
    /// wildcard page.
    pub fn resolve(&self, path: &str) -> P {
        let component = path_component(path);
        let page = self
            .routes
            .iter()
            .find(|(declared, _)| declared.as_ref() == component)
            .map(|(_, page)| *page)
            .unwrap_or(self.fallback);

        debug!(path, ?page, "resolved route");

        page
    }

    /// Literal routes in declaration order, wildcard excluded.
    pub fn routes(&self) -> impl Iterator<Item = (&str, P)> + '_ {
        self.routes.iter().map(|(path, page)| (path.as_ref(), *page))
    }

    pub fn fallback(&self) -> P {
        self.fallback
    }

    /// Number of declared routes, wildcard included.
    pub fn len(&self) -> usize {
        self.routes.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Declares literal routes, then closes the table with the wildcard page.
#[derive(Debug, Clone)]
pub struct RouteTableBuilder<P> {
    routes: Vec<(Pattern, P)>,
}

impl<P: Copy + Debug> RouteTableBuilder<P> {
    pub fn route(mut self, path: impl Into<Cow<'static, str>>, page: P) -> Self {
        self.routes.push((Pattern::exact(path), page));
        self
    }

    pub fn fallback(mut self, page: P) -> Result<RouteTable<P>, RouteTableError> {
        self.routes.push((Pattern::Wildcard, page));
        RouteTable::new(self.routes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Page {
        Home,
        SignUp,
        NotFound,
    }

    fn table() -> RouteTable<Page> {
        RouteTable::new([
            (Pattern::exact("/"), Page::Home),
            (Pattern::exact("/signup"), Page::SignUp),
            (Pattern::Wildcard, Page::NotFound),
        ])
        .unwrap()
    }

    #[test]
    fn resolves_declared_paths() {
        let table = table();

        assert_eq!(table.resolve("/"), Page::Home);
        assert_eq!(table.resolve("/signup"), Page::SignUp);
    }

    #[test]
    fn ignores_query_and_fragment() {
        let table = table();

        assert_eq!(table.resolve("/signup?invite=abc"), Page::SignUp);
        assert_eq!(table.resolve("/#top"), Page::Home);
    }

    #[test]
    fn everything_else_is_not_found() {
        let table = table();

        for path in ["/foo", "", "/signup/", "/Signup", "signup", "//", "/signup/x", " /"] {
            assert_eq!(table.resolve(path), Page::NotFound, "{path:?}");
        }
    }

    #[test]
    fn literal_match_is_exact_on_the_path() {
        let table = RouteTable::builder()
            .route("/signup", Page::SignUp)
            .fallback(Page::NotFound)
            .unwrap();

        assert_eq!(table.resolve("/signup"), Page::SignUp);
        assert_eq!(table.resolve("/signup?step=2"), Page::SignUp);
        assert_eq!(table.resolve("/signup#a?b"), Page::SignUp);
        for path in ["/signup/", "/SIGNUP", "/signup/extra", "", "?/signup"] {
            assert_eq!(table.resolve(path), Page::NotFound, "{path:?}");
        }
    }

    #[test]
    fn root_is_not_the_empty_path() {
        let table = RouteTable::builder()
            .route("/", Page::Home)
            .fallback(Page::NotFound)
            .unwrap();

        assert_eq!(table.resolve("/"), Page::Home);
        assert_eq!(table.resolve("/?x=1"), Page::Home);
        assert_eq!(table.resolve(""), Page::NotFound);
    }

    #[test]
    fn resolution_is_repeatable() {
        let table = table();

        for path in ["/", "/signup", "/bogus", ""] {
            assert_eq!(table.resolve(path), table.resolve(path), "{path:?}");
        }
        assert_eq!(table, self::table());
    }

    #[test]
    fn first_match_wins() {
        let table = RouteTable::new([
            (Pattern::exact("/signup"), Page::SignUp),
            (Pattern::exact("/"), Page::Home),
            (Pattern::Wildcard, Page::NotFound),
        ])
        .unwrap();

        assert_eq!(table.resolve("/signup"), Page::SignUp);
        assert_eq!(table.resolve("/"), Page::Home);
    }

    #[test]
    fn wildcard_only_table_is_total() {
        let table = RouteTable::new([(Pattern::Wildcard, Page::NotFound)]).unwrap();

        assert_eq!(table.resolve("/"), Page::NotFound);
        assert_eq!(table.len(), 1);
        assert_eq!(table.routes().count(), 0);
    }

    #[test]
    fn rejects_missing_wildcard() {
        assert_eq!(
            RouteTable::<Page>::new([]),
            Err(RouteTableError::MissingWildcard)
        );
        assert_eq!(
            RouteTable::new([(Pattern::exact("/"), Page::Home)]),
            Err(RouteTableError::MissingWildcard)
        );
    }

    #[test]
    fn rejects_wildcard_before_literal() {
        let result = RouteTable::new([
            (Pattern::exact("/"), Page::Home),
            (Pattern::Wildcard, Page::NotFound),
            (Pattern::exact("/signup"), Page::SignUp),
        ]);

        assert_eq!(result, Err(RouteTableError::WildcardNotLast { index: 1 }));
    }

    #[test]
    fn rejects_second_wildcard() {
        let result = RouteTable::new([
            (Pattern::Wildcard, Page::NotFound),
            (Pattern::Wildcard, Page::Home),
        ]);

        assert_eq!(result, Err(RouteTableError::DuplicateWildcard { index: 1 }));
    }

    #[test]
    fn rejects_shadowed_path() {
        let result = RouteTable::new([
            (Pattern::exact("/signup"), Page::SignUp),
            (Pattern::exact("/signup"), Page::Home),
            (Pattern::Wildcard, Page::NotFound),
        ]);

        assert_eq!(
            result,
            Err(RouteTableError::DuplicatePath {
                path: "/signup".to_owned(),
                index: 1
            })
        );
    }

    #[test]
    fn builder_matches_explicit_list() {
        let built = RouteTable::builder()
            .route("/", Page::Home)
            .route("/signup", Page::SignUp)
            .fallback(Page::NotFound)
            .unwrap();

        assert_eq!(built, table());
        assert_eq!(
            built.routes().collect::<Vec<_>>(),
            vec![("/", Page::Home), ("/signup", Page::SignUp)]
        );
        assert_eq!(built.fallback(), Page::NotFound);
        assert_eq!(built.len(), 3);
    }

    #[test]
    fn error_messages_name_the_problem() {
        let message = RouteTableError::DuplicatePath {
            path: "/signup".to_owned(),
            index: 2,
        }
        .to_string();

        assert!(message.contains("/signup"));
        assert!(message.contains('2'));
    }
}
