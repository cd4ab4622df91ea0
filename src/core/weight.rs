use std::ops::Add;

mod ordered_float;

pub use ordered_float::OrderedFloat;

/// Numeric edge weight.
///
/// Algorithms that need a total order (priority queues, sorting edges) go
/// through the associated [`Ord`](Weight::Ord) type, which is the weight
/// itself for integers and a total-order wrapper for floats.
pub trait Weight: PartialOrd + Add<Self, Output = Self> + Clone + Sized {
    type Ord: Ord + Clone + From<Self> + Into<Self>;

    fn zero() -> Self;

    /// The weight given to edges inserted without an explicit weight.
    fn one() -> Self;

    fn is_unsigned() -> bool;

    /// Sum of two weights, or `None` if it does not fit the type.
    fn checked_add(&self, other: &Self) -> Option<Self>;
}

/// Extracts the weight used by an algorithm from the weight stored in the
/// graph.
pub trait GetWeight<E, W>
where
    W: Weight,
{
    fn get(&self, edge: &E) -> W;

    fn get_const(&self) -> Option<W> {
        None
    }
}

impl<F, E, W> GetWeight<E, W> for F
where
    F: Fn(&E) -> W,
    W: Weight,
{
    fn get(&self, edge: &E) -> W {
        (self)(edge)
    }
}

/// Uses the stored weight as is.
#[derive(Debug)]
pub struct Identity;

impl<E> GetWeight<E, E> for Identity
where
    E: Weight,
{
    fn get(&self, edge: &E) -> E {
        edge.clone()
    }
}

/// Treats every edge as having weight 1, counting hops.
#[derive(Debug)]
pub struct Unit;

impl<E> GetWeight<E, usize> for Unit {
    fn get(&self, _edge: &E) -> usize {
        1
    }

    fn get_const(&self) -> Option<usize> {
        Some(1)
    }
}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            type Ord = Self;

            fn zero() -> Self {
                0
            }

            fn one() -> Self {
                1
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }

            fn checked_add(&self, other: &Self) -> Option<Self> {
                <$ty>::checked_add(*self, *other)
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(isize, false);
impl_int_weight!(usize, true);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            type Ord = OrderedFloat<Self>;

            fn zero() -> Self {
                0.0
            }

            fn one() -> Self {
                1.0
            }

            fn is_unsigned() -> bool {
                false
            }

            // Floats saturate to infinity instead of overflowing.
            fn checked_add(&self, other: &Self) -> Option<Self> {
                Some(*self + *other)
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);
