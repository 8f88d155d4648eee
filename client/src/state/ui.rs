//! Local UI chrome state (cart dialog, legal accordion).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of `StorefrontState` so the cart
//! and search transitions stay free of view flags.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::legal::AccordionState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Whether the cart dialog is showing.
    pub cart_open: bool,
    pub legal: AccordionState,
}

impl UiState {
    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }
}
