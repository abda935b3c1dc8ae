//! Ordered collection of valid routes.

use super::{Prefix, PrefixError};
use serde::Serialize;
use std::slice::Iter;

/// A mutable, ordered sequence of routes.
///
/// Duplicates are allowed; invalid prefixes are refused at insertion so the
/// summarizer never sees one.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct RouteList {
    routes: Vec<Prefix>,
}

impl RouteList {
    pub fn new() -> RouteList {
        RouteList { routes: Vec::new() }
    }

    /// Append a route, refusing it if it is not valid.
    pub fn push(&mut self, prefix: Prefix) -> Result<(), PrefixError> {
        prefix.validate()?;
        self.routes.push(prefix);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Prefix> {
        self.routes.iter()
    }

    pub fn as_slice(&self) -> &[Prefix] {
        &self.routes
    }

    pub fn into_vec(self) -> Vec<Prefix> {
        self.routes
    }

    /// Take the routes out for a rewrite pass, leaving the list empty.
    pub(crate) fn take(&mut self) -> Vec<Prefix> {
        std::mem::take(&mut self.routes)
    }

    /// Put the survivors of a rewrite pass back.
    pub(crate) fn replace(&mut self, routes: Vec<Prefix>) {
        self.routes = routes;
    }
}

impl TryFrom<Vec<Prefix>> for RouteList {
    type Error = PrefixError;

    fn try_from(routes: Vec<Prefix>) -> Result<RouteList, PrefixError> {
        let mut list = RouteList::new();
        for prefix in routes {
            list.push(prefix)?;
        }
        Ok(list)
    }
}

impl<'a> IntoIterator for &'a RouteList {
    type Item = &'a Prefix;
    type IntoIter = Iter<'a, Prefix>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
