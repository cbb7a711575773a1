use gpui::{
    AppContext, ClickEvent, Context, Div, Entity, FontWeight, IntoElement, ParentElement, Render,
    SharedString, Styled, Subscription, TextAlign, Window, div, px,
};
use gpui_component::{
    h_flex,
    input::{Input, InputEvent, InputState},
    v_flex,
};
use interest_core::{CalculatorScreen, FormField, FormState, GrowthSchedule};
use tracing::{debug, info, warn};

use crate::{components::make_button, report::schedule_lines};

const TITLE: &str = "Compound Interest Calculator";

/// The calculator screen: four inputs, a Calculate button, and the result
/// line with its yearly schedule once something has been calculated.
pub struct CalculatorForm {
    principal: Entity<InputState>,
    annual_addition: Entity<InputState>,
    time: Entity<InputState>,
    rate: Entity<InputState>,

    screen: CalculatorScreen,
    decimal_places: usize,
    schedule: Option<GrowthSchedule>,

    _subscriptions: Vec<Subscription>,
}

impl CalculatorForm {
    /// Builds the form, pre-filling the inputs from `screen`.
    pub fn new(
        screen: CalculatorScreen,
        decimal_places: usize,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let form = screen.form().clone();
        let mut subscriptions = Vec::with_capacity(FormField::ALL.len());

        let principal = make_input(&form, FormField::Principal, &mut subscriptions, window, cx);
        let annual_addition =
            make_input(&form, FormField::AnnualAddition, &mut subscriptions, window, cx);
        let time = make_input(&form, FormField::Time, &mut subscriptions, window, cx);
        let rate = make_input(&form, FormField::Rate, &mut subscriptions, window, cx);

        Self {
            principal,
            annual_addition,
            time,
            rate,
            screen,
            decimal_places,
            schedule: None,
            _subscriptions: subscriptions,
        }
    }

    /// Passes the edited text through the screen and shows the normalized
    /// text in the input. Normalized text is left alone, so the change event
    /// from writing it back ends here.
    fn on_edit(
        &mut self,
        field: FormField,
        state: &Entity<InputState>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let typed = state.read(cx).value().to_string();
        let shown = self.screen.edit(field, &typed).to_string();
        if shown != typed {
            debug!(?field, %typed, %shown, "normalized input");
            state.update(cx, |state, cx| state.set_value(shown, window, cx));
        }
    }

    /// Calculates from the fields as last edited.
    fn on_calculate(
        &mut self,
        _: &ClickEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let future_value = self.screen.calculate();
        info!(future_value, "Calculate pressed");

        self.schedule = match self.screen.schedule() {
            Ok(schedule) => Some(schedule),
            Err(error) => {
                warn!(%error, "growth schedule unavailable");
                None
            }
        };
        cx.notify();
    }
}

impl Render for CalculatorForm {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let result_line = self.screen.result_line(self.decimal_places).map(|line| {
            div()
                .mt(px(20.))
                .font_weight(FontWeight::BOLD)
                .child(line)
        });

        v_flex()
            .size_full()
            .items_center()
            .pt(px(75.))
            .px(px(20.))
            .gap_4()
            .child(
                div()
                    .text_xl()
                    .font_weight(FontWeight::BOLD)
                    .mb(px(30.))
                    .child(TITLE),
            )
            .child(make_input_row(&self.principal, FormField::Principal))
            .child(make_input_row(&self.annual_addition, FormField::AnnualAddition))
            .child(make_input_row(&self.time, FormField::Time))
            .child(make_input_row(&self.rate, FormField::Rate))
            .child(make_button(
                "calculate",
                "Calculate",
                cx.listener(Self::on_calculate),
            ))
            .children(result_line)
            .children(self.schedule.as_ref().map(render_schedule))
    }
}

/// Input pre-filled from `form` whose edits are routed to
/// [`CalculatorForm::on_edit`].
fn make_input(
    form: &FormState,
    field: FormField,
    subscriptions: &mut Vec<Subscription>,
    window: &mut Window,
    cx: &mut Context<CalculatorForm>,
) -> Entity<InputState> {
    let value = SharedString::from(form.get(field).to_string());
    let state = cx.new(|input_cx| InputState::new(window, input_cx).default_value(value));

    subscriptions.push(cx.subscribe_in(
        &state,
        window,
        move |this: &mut CalculatorForm, state, event: &InputEvent, window, cx| {
            if let InputEvent::Change = event {
                this.on_edit(field, state, window, cx);
            }
        },
    ));
    state
}

fn make_input_row(
    state: &Entity<InputState>,
    field: FormField,
) -> Div {
    v_flex()
        .gap_1()
        .w(px(200.))
        .child(div().text_align(TextAlign::Left).child(field.label()))
        .child(Input::new(state))
}

fn render_schedule(schedule: &GrowthSchedule) -> Div {
    h_flex().justify_center().child(
        v_flex()
            .gap_1()
            .text_sm()
            .children(schedule_lines(schedule).into_iter().map(|line| div().child(line))),
    )
}
