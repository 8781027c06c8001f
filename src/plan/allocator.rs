//! Merit-order greedy fill and the over-production compensation step.
//!
//! This is deliberately a greedy heuristic, not an exact optimizer: plants
//! are walked from cheapest to most expensive in a single pass, and a plant
//! whose minimum output would overshoot the load can throttle
//! already-committed plants down to make room. Its tie-break and ordering
//! rules, including the known suboptimal cases, are part of the observable
//! contract.

use std::cmp::Ordering;

use crate::plan::envelope::OperatingEnvelope;

/// Outcome of one allocation pass over merit-ordered envelopes.
#[derive(Debug, Clone)]
pub struct AllocationOutcome {
    /// Committed production per envelope, aligned with the input slice (MW).
    pub committed_mw: Vec<f64>,
    /// Load that could not be covered (MW, >= 0).
    pub unserved_mw: f64,
    /// Over-production the compensation step could not shed (MW, >= 0).
    pub overshoot_mw: f64,
}

/// Assigns production toward `load_mw`, walking `envelopes` from cheapest
/// to most expensive.
///
/// `envelopes` must already be in ascending-cost order (stable, so cost
/// ties keep the caller's plant order); the committed vector is aligned
/// with that order. Every committed value stays within
/// `[0, effective maximum]`, and a plant that runs at all runs at or above
/// its floor.
///
/// A plant whose floor cannot be absorbed is skipped and never
/// reconsidered, even if later compensation frees up room.
pub fn allocate(envelopes: &[OperatingEnvelope], load_mw: f64) -> AllocationOutcome {
    let mut committed = vec![0.0; envelopes.len()];
    let mut remaining = load_mw;
    // Aggregate downward flexibility of plants already running flat out.
    let mut slack = 0.0;
    let mut overshoot = 0.0;

    for (i, env) in envelopes.iter().enumerate() {
        if remaining <= 0.0 {
            // Load already covered; the plant stays off.
            continue;
        }

        if env.max_mw <= remaining {
            // Cheapest plant left: run it flat out.
            committed[i] = env.max_mw;
            remaining -= env.max_mw;
            slack += env.headroom_mw();
        } else if env.min_mw <= remaining {
            // The remaining gap falls inside this plant's range.
            committed[i] = remaining;
            remaining = 0.0;
        } else if env.min_mw - remaining <= slack {
            // Even the floor overshoots, but cheaper plants that are
            // already running can be throttled down by the difference.
            committed[i] = env.min_mw;
            overshoot += compensate(envelopes, &mut committed, env.min_mw - remaining);
            remaining = 0.0;
        }
        // Otherwise the floor cannot be absorbed: the plant is skipped.
    }

    AllocationOutcome {
        committed_mw: committed,
        unserved_mw: remaining,
        overshoot_mw: overshoot,
    }
}

/// Sheds `amount_mw` of committed production, most expensive plants first,
/// never taking a plant below its own floor.
///
/// Returns the amount that could not be shed. The pass condition guarding
/// the compensation branch makes a nonzero residual unreachable from
/// [`allocate`] (slack only counts fully-committed plants, whose headroom
/// is untouched until this runs), but the residual is surfaced anyway so a
/// load-violating plan can never be returned silently.
pub fn compensate(
    envelopes: &[OperatingEnvelope],
    committed_mw: &mut [f64],
    amount_mw: f64,
) -> f64 {
    // Descending-cost view of the same plant set; cost ties keep merit
    // order.
    let mut order: Vec<usize> = (0..envelopes.len()).collect();
    order.sort_by(|&a, &b| {
        envelopes[b]
            .cost_eur_per_mwh
            .total_cmp(&envelopes[a].cost_eur_per_mwh)
    });

    let mut to_shed = amount_mw;
    for i in order {
        if to_shed <= 0.0 {
            break;
        }
        if committed_mw[i] > 0.0 {
            let reducible = committed_mw[i] - envelopes[i].min_mw;
            let cut = to_shed.min(reducible);
            committed_mw[i] -= cut;
            to_shed -= cut;
        }
    }
    to_shed
}

/// Total cmp helper for sorting envelopes ascending by cost.
pub(crate) fn by_cost_ascending(a: &OperatingEnvelope, b: &OperatingEnvelope) -> Ordering {
    a.cost_eur_per_mwh.total_cmp(&b.cost_eur_per_mwh)
}
