use std::cmp::Ordering;
use std::fmt::{Debug, Display};

///Wrapper around the [`float_cmp::approx_eq!()`] macro for easy comparison of floats with a certain tolerance.
///Two F64As are considered equal if they are within a certain tolerance of each other.
#[derive(Debug, Clone, Copy)]
pub struct F64A(pub f64);

impl<T> From<T> for F64A
where
    T: Into<f64>,
{
    fn from(n: T) -> Self {
        F64A(n.into())
    }
}

impl PartialEq<Self> for F64A {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f64, self.0, other.0)
    }
}

impl PartialOrd<Self> for F64A {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.eq(other) {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}

impl Display for F64A {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
