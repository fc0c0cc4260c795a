mod drawer;
mod markers;
mod snackbar;

pub use self::{drawer::*, markers::*, snackbar::*};
