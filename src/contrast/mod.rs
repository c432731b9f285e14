//! Contrast-matrix construction for treatment-coded regression coefficients.
//!
//! The fitting engine parametrizes the period effect with treatment coding:
//! the intercept absorbs the reference category and each coefficient is a
//! deviation from it. These builders produce the linear maps that turn the
//! reduced coefficient vector back into one absolute change value per
//! category (or category pair).

mod interaction;
mod single;

pub use interaction::build_interaction_contrast;
pub use single::build_contrast;
