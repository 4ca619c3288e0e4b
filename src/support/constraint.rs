//! Numeric invariants checked at construction time.
//!
//! Envelope permeabilities and design air-change rates are physically
//! non-negative, and a NaN in either would poison the pressure-balance
//! solve in ways that are hard to diagnose after the fact. The
//! [`Constrained`] wrapper checks such invariants once, when the value is
//! built, so the models can rely on them without re-validating.
//!
//! The only marker currently provided is [`NonNegative`]; further
//! invariants can be added by implementing [`Constraint`] for new
//! zero-sized marker types.

use std::{cmp::Ordering, marker::PhantomData, ops::Add};

use num_traits::Zero;
use thiserror::Error;

/// A trait for enforcing a numeric invariant at construction time.
///
/// Implement this for a zero-sized marker type and pair it with
/// [`Constrained`].
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the
    /// constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value is not a number")]
    NotANumber,
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use ventilation_models::support::constraint::{Constrained, NonNegative};
///
/// // Window permeability, m³/h·m² at 100 Pa.
/// let permeability = Constrained::<f64, NonNegative>::new(27.0).unwrap();
/// assert_eq!(permeability.into_inner(), 27.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Zero is allowed on purpose: a building with no windows has zero window
/// permeability, and whether the resulting envelope is solvable is decided
/// later by the pressure-balance model, not here.
///
/// ```
/// use ventilation_models::support::constraint::NonNegative;
///
/// assert!(NonNegative::new(0.63).is_ok());
/// assert!(NonNegative::new(0.0).is_ok());
/// assert!(NonNegative::new(-1.0).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is
    /// non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }

    /// Returns zero as a non-negative constrained value.
    #[must_use]
    pub fn zero<T: PartialOrd + Zero>() -> Constrained<T, NonNegative> {
        Constrained {
            value: T::zero(),
            _marker: PhantomData,
        }
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Adds two non-negative values.
///
/// The sum of two non-negative values is non-negative for every numeric
/// type used in this crate; the invariant is checked in debug builds.
impl<T> Add for Constrained<T, NonNegative>
where
    T: Add<Output = T> + PartialOrd + Zero,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let value = self.value + rhs.value;
        debug_assert!(
            value >= T::zero(),
            "addition violated the NonNegative invariant"
        );
        Self {
            value,
            _marker: PhantomData,
        }
    }
}
