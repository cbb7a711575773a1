pub mod calculator_form;
pub mod window;

use gpui::{App, ClickEvent, SharedString, Styled, Window, px};
use gpui_component::Sizable;
use gpui_component::button::{Button, ButtonVariants};

pub use calculator_form::CalculatorForm;
pub use window::AppWindow;

/// Creates a primary-styled button with a custom click handler.
pub fn make_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .primary()
        .large()
        .w(px(140.))
        .label(label.into())
        .on_click(on_click)
}
