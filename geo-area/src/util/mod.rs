mod f64a;

#[doc(inline)]
pub use f64a::F64A;
