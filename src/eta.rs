//! The ETA kernel: all temporal and capacity arithmetic for a single contact
//! lives here (spec §4.3). Every comparison applies [`EPS_T`]/[`EPS_B`]
//! uniformly, per the epsilon discipline spec §9 calls out by name.

use crate::contact::Contact;
use crate::types::{Bytes, Seconds, EPS_B, EPS_T};

/// Outcome of evaluating a contact's feasibility/ETA at a given arrival
/// time. `Infeasible` stands in for the C original's `DBL_MAX` sentinel —
/// an explicit enum reads better than a magic float at call sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Eta {
    /// The contact is feasible; arrival at `to` happens at this absolute
    /// time.
    Feasible(Seconds),
    /// The contact cannot carry the bundle from this arrival time, for any
    /// of the reasons enumerated in spec §4.3.
    Infeasible,
}

impl Eta {
    #[inline]
    pub fn is_feasible(&self) -> bool {
        matches!(self, Eta::Feasible(_))
    }

    /// The arrival time, if feasible.
    #[inline]
    pub fn value(&self) -> Option<Seconds> {
        match self {
            Eta::Feasible(t) => Some(*t),
            Eta::Infeasible => None,
        }
    }
}

/// Cheap viability pre-check: the same arithmetic as [`eta_contact`], but
/// short-circuiting on the first failing condition. Called before the full
/// kernel in hot loops (seeding, expansion) to avoid the redundant
/// arithmetic the full kernel would otherwise repeat on a path that's going
/// to fail anyway (spec §4.3).
#[inline]
pub fn is_viable(contact: &Contact, t_in: Seconds, bundle_bytes: Bytes) -> bool {
    if t_in > contact.t_end + EPS_T {
        return false;
    }
    let start_tx = t_in.max(contact.t_start);
    let window = contact.t_end - start_tx - contact.setup_s;
    if window <= EPS_T {
        return false;
    }
    let rate = contact.effective_rate();
    let window_capacity = window * rate;
    let capacity = contact.residual_bytes.min(window_capacity);
    if capacity + EPS_B < bundle_bytes {
        return false;
    }
    true
}

/// Computes the earliest arrival time at `contact.to`, given arrival time
/// `t_in` at `contact.from`, a bundle of `bundle_bytes`, and an absolute
/// expiry `expiry_abs` (`0.0` meaning "no expiry").
///
/// Implements spec §4.3 exactly: `start_tx`, `window`, `rate`,
/// `window_capacity`, `capacity`, `tx_time`, `finish`, `eta`, and the five
/// feasibility clauses, in order.
pub fn eta_contact(
    contact: &Contact,
    t_in: Seconds,
    bundle_bytes: Bytes,
    expiry_abs: Seconds,
) -> Eta {
    if t_in > contact.t_end + EPS_T {
        return Eta::Infeasible;
    }

    let start_tx = t_in.max(contact.t_start);
    let window = contact.t_end - start_tx - contact.setup_s;
    if window <= EPS_T {
        return Eta::Infeasible;
    }

    let rate = contact.effective_rate();
    let window_capacity = window * rate;
    let capacity = contact.residual_bytes.min(window_capacity);
    if capacity + EPS_B < bundle_bytes {
        return Eta::Infeasible;
    }

    let tx_time = bundle_bytes / rate;
    let finish = start_tx + contact.setup_s + tx_time;
    if finish > contact.t_end + EPS_T {
        return Eta::Infeasible;
    }

    let eta = finish + contact.owlt;
    if expiry_abs > 0.0 && eta > expiry_abs + EPS_T {
        return Eta::Infeasible;
    }

    Eta::Feasible(eta)
}
