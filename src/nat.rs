//! Unary natural numbers.
//!
//! A [`Nat`] is either zero or the successor of another `Nat`. Predecessors are
//! shared through [`Rc`], so taking the successor of a value never copies the
//! chain beneath it. Every operation that walks the chain (equality, counting,
//! dropping) is a loop, which keeps values with very long chains off the host
//! stack.

use std::fmt;
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct Nat {
    pred: Option<Rc<Nat>>,
}

impl Nat {
    #[inline]
    pub fn zero() -> Self {
        Self { pred: None }
    }

    #[inline]
    pub fn succ(self) -> Self {
        Self {
            pred: Some(Rc::new(self)),
        }
    }

    /// The predecessor, or `None` for zero.
    #[inline]
    pub fn pred(&self) -> Option<&Nat> {
        self.pred.as_deref()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.pred.is_none()
    }

    /// Number of successor constructors above zero.
    pub fn to_u64(&self) -> u64 {
        let mut count = 0;
        let mut current = self;
        while let Some(pred) = current.pred() {
            count += 1;
            current = pred;
        }
        count
    }
}

impl From<u64> for Nat {
    fn from(n: u64) -> Self {
        (0..n).fold(Nat::zero(), |nat, _| nat.succ())
    }
}

impl From<&Nat> for u64 {
    fn from(nat: &Nat) -> Self {
        nat.to_u64()
    }
}

impl PartialEq for Nat {
    fn eq(&self, other: &Self) -> bool {
        let (mut lhs, mut rhs) = (self, other);
        loop {
            match (&lhs.pred, &rhs.pred) {
                (None, None) => return true,
                (Some(l), Some(r)) => {
                    if Rc::ptr_eq(l, r) {
                        return true;
                    }
                    lhs = l;
                    rhs = r;
                }
                _ => return false,
            }
        }
    }
}

impl Eq for Nat {}

impl Drop for Nat {
    fn drop(&mut self) {
        let mut next = self.pred.take();
        while let Some(rc) = next {
            match Rc::try_unwrap(rc) {
                Ok(mut nat) => next = nat.pred.take(),
                // still shared, someone else owns the rest of the chain
                Err(_) => break,
            }
        }
    }
}

impl fmt::Display for Nat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_u64())
    }
}

impl fmt::Debug for Nat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Nat({})", self.to_u64())
    }
}
