use gpui::{
    AnyView, App, AppContext, Application, Bounds, Context, KeyBinding, Menu, MenuItem,
    TitlebarOptions, WindowBounds, WindowOptions, px, size,
};
use gpui_component::Root;
use interest_core::CalculatorScreen;
use tracing::{error, info};

use crate::{
    Quit,
    components::{AppWindow, CalculatorForm},
    preferences::Preferences,
    quit,
};

const APP_NAME: &str = "Compound Interest";

/// Starts the desktop application with `screen` as the initial form state.
/// Blocks until the application quits.
pub fn run(
    screen: CalculatorScreen,
    preferences: Preferences,
) {
    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |app_cx: &mut App| {
            setup_app(app_cx);
            if let Err(error) = open_main_window(screen, &preferences, app_cx) {
                error!(?error, "failed to open calculator window");
                app_cx.quit();
            }
        });
}

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    // Bind platform-appropriate quit shortcut
    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: APP_NAME.into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the calculator window, centered, at the configured size.
pub fn open_main_window(
    screen: CalculatorScreen,
    preferences: &Preferences,
    app_cx: &mut App,
) -> anyhow::Result<()> {
    let window_size = size(px(preferences.window.width), px(preferences.window.height));
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
            None,
            window_size,
            app_cx,
        ))),
        titlebar: Some(TitlebarOptions {
            title: Some("Compound Interest Calculator".into()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let decimal_places = preferences.decimal_places;

    app_cx.open_window(options, |window, app_cx| {
        let form = app_cx.new(|form_cx: &mut Context<CalculatorForm>| {
            CalculatorForm::new(screen, decimal_places, window, form_cx)
        });
        let view: AnyView = app_cx
            .new(|window_cx: &mut Context<AppWindow>| AppWindow::new(form, window_cx))
            .into();
        app_cx.new(|root_cx| Root::new(view, window, root_cx))
    })?;

    info!(
        width = preferences.window.width,
        height = preferences.window.height,
        "calculator window opened"
    );
    Ok(())
}
