// components

use gpui::{
    App, Context, Entity, IntoElement, ParentElement, Render, Styled, Subscription, Window, div,
};
use gpui_component::StyledExt;
use tracing::info;

#[cfg(not(target_os = "linux"))]
use crate::Quit;
#[cfg(not(target_os = "linux"))]
use crate::quit;
use crate::components::CalculatorForm;

/// Top-level view of the main window. Quits the app when the window closes
/// (except on Linux, where closing the window leaves the process to the
/// window manager).
pub struct AppWindow {
    _window_close_subscription: Subscription,
    form: Entity<CalculatorForm>,
}

impl AppWindow {
    pub fn new(
        form: Entity<CalculatorForm>,
        cx: &mut Context<Self>,
    ) -> Self {
        let subscription = cx.on_window_closed(|_cx: &mut App| {
            info!("Calculator window closed");
            #[cfg(not(target_os = "linux"))]
            quit(&Quit, _cx);
        });

        info!("Calculator window constructed");
        Self {
            _window_close_subscription: subscription,
            form,
        }
    }
}

impl Render for AppWindow {
    fn render(
        &mut self,
        _: &mut Window,
        _cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div().v_flex().size_full().child(self.form.clone())
    }
}
