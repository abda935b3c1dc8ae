//! Merge phase: collapse sibling prefixes into their parent.

use super::order::merge_order;
use super::trace::Trace;
use crate::models::Prefix;

/// What to do with the current route given the last surviving one.
#[derive(Debug, PartialEq, Eq)]
enum PairAction {
    Keep,
    DropDuplicate,
    Absorb,
}

fn pair_action(prev: &Prefix, cur: &Prefix) -> PairAction {
    // Only same-size, same-metric prefixes may merge
    if prev.prefix_len() != cur.prefix_len()
        || prev.metric() != cur.metric()
        || prev.family() != cur.family()
    {
        return PairAction::Keep;
    }
    if prev.prefix_len() == 0 {
        return PairAction::Keep;
    }
    if prev.network_bits() == cur.network_bits() {
        return PairAction::DropDuplicate;
    }
    if prev.is_lower_sibling_of(cur) {
        PairAction::Absorb
    } else {
        PairAction::Keep
    }
}

/// Run one merge pass over `routes`.
///
/// Returns the surviving routes (not in any particular order) and whether any
/// duplicate was dropped or any pair was merged.
pub(crate) fn merge_pass(mut routes: Vec<Prefix>, trace: &mut Trace<'_>) -> (Vec<Prefix>, bool) {
    routes.sort_by(merge_order);

    let mut survivors: Vec<Prefix> = Vec::with_capacity(routes.len());
    let mut changed = false;

    for cur in routes {
        if let Some(prev) = survivors.last_mut() {
            match pair_action(prev, &cur) {
                PairAction::Keep => {}
                PairAction::DropDuplicate => {
                    trace.emit(format_args!("*     Removed duplicate prefix '{cur}'"));
                    changed = true;
                    continue;
                }
                PairAction::Absorb => {
                    let lower = *prev;
                    prev.absorb_sibling();
                    trace.emit(format_args!(
                        "*     Summarized '{lower}' and '{cur}' into '{prev}'"
                    ));
                    changed = true;
                    continue;
                }
            }
        }
        survivors.push(cur);
    }

    (survivors, changed)
}
