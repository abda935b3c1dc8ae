//! Overlap removal: drop routes already covered by a broader route.
//!
//! A route is only dropped when the covering route's metric is equal or
//! better (numerically lower or equal). A specific route is never discarded in
//! favor of a summary with a strictly worse metric.

use super::order::overlap_order;
use super::trace::Trace;
use crate::models::Prefix;

/// Run one overlap-removal pass over `routes`.
///
/// Routes are walked in [`overlap_order`]; each one is compared with the
/// nearest retained route whose block contains it. Returns the retained routes
/// in overlap order and whether any route was removed.
pub(crate) fn overlap_pass(mut routes: Vec<Prefix>, trace: &mut Trace<'_>) -> (Vec<Prefix>, bool) {
    routes.sort_by(overlap_order);

    let mut retained: Vec<Prefix> = Vec::with_capacity(routes.len());
    // Indexes into `retained` of the chain of nested blocks around the walk position
    let mut enclosing: Vec<usize> = Vec::new();
    let mut changed = false;

    for cur in routes {
        while let Some(&top) = enclosing.last() {
            if retained[top].contains(&cur) {
                break;
            }
            enclosing.pop();
        }

        if let Some(&top) = enclosing.last() {
            let prev = &retained[top];
            if cur.metric() >= prev.metric() {
                trace.emit(format_args!(
                    "*   Removing '{cur}', which falls within '{prev}'"
                ));
                changed = true;
                continue;
            }
        }

        enclosing.push(retained.len());
        retained.push(cur);
    }

    (retained, changed)
}
