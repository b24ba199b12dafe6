#![cfg(test)]

use quickcheck::{Arbitrary, Gen};

/// Elements are drawn from a small range so that random operations collide
/// often enough to exercise overwrites and removals.
pub const ELEMENT_RANGE: u8 = 16;

#[derive(Clone, Copy, Debug)]
pub enum Op {
    Insert(u8, u8),
    Erase(u8, u8),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        let a = u8::arbitrary(g) % ELEMENT_RANGE;
        let b = u8::arbitrary(g) % ELEMENT_RANGE;
        // Bias towards inserts so the containers don't stay empty.
        if usize::arbitrary(g) % 3 == 0 {
            Op::Erase(a, b)
        } else {
            Op::Insert(a, b)
        }
    }
}

/// A random sequence of container operations.
#[derive(Clone, Debug)]
pub struct Ops(pub Vec<Op>);

impl Arbitrary for Ops {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 100;
        Ops((0..len).map(|_| Op::arbitrary(g)).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Ops))
    }
}
