//! Canonicalization under the board's eight-element symmetry group.

use crate::codec::peg_key;
use crate::error::StateError;
use crate::geometry::{geometry, Geometry, NUM_CELLS, NUM_TRANSFORMS};
use crate::position::Position;

fn apply_transform(pegs: &[bool; NUM_CELLS], t: usize, geo: &Geometry) -> [bool; NUM_CELLS] {
    let sigma = &geo.transforms[t];
    let mut out = [false; NUM_CELLS];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = pegs[sigma[i] as usize];
    }
    out
}

/// Returns the canonical form of `p`: the symmetry image whose 5-byte packed
/// peg key is lexicographically smallest (ties broken by lowest transform
/// index, which cannot happen for distinct transforms since the key
/// uniquely determines the peg array). The chosen transform index is
/// appended to the returned position's history as event `76 + t`.
#[must_use]
pub fn canonicalize(p: &Position) -> Position {
    let geo = geometry();

    let mut best_t = 0usize;
    let mut best_pegs = apply_transform(&p.pegs, 0, geo);
    let mut best_key = peg_key(&best_pegs);

    for t in 1..NUM_TRANSFORMS {
        let pegs_t = apply_transform(&p.pegs, t, geo);
        let key_t = peg_key(&pegs_t);
        if key_t < best_key {
            best_key = key_t;
            best_pegs = pegs_t;
            best_t = t;
        }
    }

    let mut history = p.history.clone();
    history.push((76 + best_t) as u8);
    Position::new(best_pegs, history)
}

/// Reverses the last canonicalization applied to `p`, in place.
///
/// Requires `p.history` to be non-empty with a trailing transform event
/// (code `>= 76`); that event is popped and the inverse transform is applied
/// to `p.pegs`.
///
/// # Errors
/// Returns [`StateError::NotStandardized`] if the history is empty or its
/// trailing event is a jump rather than a transform.
pub fn un_canonicalize(p: &mut Position) -> Result<(), StateError> {
    let last = p.history.last().copied().ok_or(StateError::NotStandardized)?;
    if usize::from(last) < 76 {
        return Err(StateError::NotStandardized);
    }
    let t_fwd = usize::from(last) - 76;
    p.history.pop();

    let geo = geometry();
    let t_rev = geo.reverse_transforms[t_fwd] as usize;
    p.pegs = apply_transform(&p.pegs, t_rev, geo);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_appends_one_transform_event() {
        let p = Position::start();
        let c = canonicalize(&p);
        assert_eq!(c.history.len(), p.history.len() + 1);
        assert!(c.history.last().copied().unwrap() >= 76);
    }

    #[test]
    fn start_position_is_its_own_canonical_form() {
        let p = Position::start();
        let c = canonicalize(&p);
        assert_eq!(c.pegs, p.pegs);
        assert_eq!(c.history, vec![76]); // R0n: identity is already minimal
    }

    #[test]
    fn canonical_key_is_minimum_over_all_images() {
        let geo = geometry();
        let p = Position::new(
            {
                let mut pegs = [true; NUM_CELLS];
                pegs[5] = false;
                pegs[9] = false;
                pegs
            },
            vec![],
        );
        let c = canonicalize(&p);
        let c_key = peg_key(&c.pegs);
        for t in 0..geo.transforms.len() {
            let pegs_t = apply_transform(&p.pegs, t, geo);
            assert!(c_key <= peg_key(&pegs_t));
        }
    }

    #[test]
    fn un_canonicalize_inverts_canonicalize() {
        let p = Position::new(
            {
                let mut pegs = [true; NUM_CELLS];
                pegs[0] = false;
                pegs[3] = false;
                pegs[20] = false;
                pegs
            },
            vec![5, 12],
        );
        let mut c = canonicalize(&p);
        un_canonicalize(&mut c).unwrap();
        assert_eq!(c.pegs, p.pegs);
        assert_eq!(c.history, p.history);
    }

    #[test]
    fn un_canonicalize_rejects_jump_tail() {
        let mut p = Position::new([true; NUM_CELLS], vec![3]);
        let err = un_canonicalize(&mut p).unwrap_err();
        assert_eq!(err, StateError::NotStandardized);
    }

    #[test]
    fn un_canonicalize_rejects_empty_history() {
        let mut p = Position::new([true; NUM_CELLS], vec![]);
        let err = un_canonicalize(&mut p).unwrap_err();
        assert_eq!(err, StateError::NotStandardized);
    }
}
