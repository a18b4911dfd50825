//! Reusable UI components.

mod brand;
mod counter_button;

pub use brand::Brand;
pub use counter_button::CounterButton;
