use am_core::{
    DisabledAudioFactory, ManualScheduler, MemoryStorage, StorageBackend, SCALE_ATTRIBUTE, THEME_ATTRIBUTE,
};
use am_shell::widgets::boot::{complete_at, BootEvent};
use am_shell::{CommandOutcome, DesktopApp, ShellConfig};
use am_widgets::Resolution;
use std::sync::Arc;

fn desktop(storage: Arc<dyn StorageBackend>, config: ShellConfig) -> (DesktopApp, Arc<ManualScheduler>) {
    let scheduler = Arc::new(ManualScheduler::new());
    let app = DesktopApp::with_services(config, storage, scheduler.clone(), Box::new(DisabledAudioFactory));
    (app, scheduler)
}

fn fresh() -> (DesktopApp, Arc<ManualScheduler>) {
    desktop(Arc::new(MemoryStorage::new()), ShellConfig::default())
}

#[test]
fn test_starts_on_about_me() {
    let (app, _scheduler) = fresh();
    assert_eq!(app.context().navigation.active_panel(), "about-me");
    assert_eq!(app.section_count(), 5);

    let screen = app.render();
    assert!(screen.contains("AMARTEL.OS"));
    assert!(screen.contains("┌─ [USR] USER"));
    assert!(screen.contains("SYS 5 modules loaded"));
}

#[test]
fn test_portfolio_drill_down_and_back() {
    let (app, scheduler) = fresh();

    assert_eq!(app.execute("nav portfolio"), CommandOutcome::Continue(None));
    assert!(app.main_panel().is_settling());
    scheduler.run_until_idle();
    assert!(!app.main_panel().is_settling());

    assert_eq!(app.execute("open amartel-os"), CommandOutcome::Continue(None));
    assert_eq!(
        app.main_panel().active(),
        Resolution::Detail {
            section: app.main_panel().sections().find_by_id("portfolio").cloned().unwrap(),
            project_id: "amartel-os".to_string(),
        }
    );

    let screen = app.render();
    assert!(screen.contains("Projects > PROJECT_DETAIL"));
    assert!(screen.contains("│ < Back to Projects  (back)"));
    assert!(screen.contains("AMARTEL.OS"));

    assert_eq!(app.execute("back"), CommandOutcome::Continue(None));
    assert!(!app.main_panel().active().is_detail());
    assert_eq!(app.context().navigation.state().active_project_id, None);
    assert_eq!(
        app.execute("back"),
        CommandOutcome::Continue(Some("No project detail is open.".to_string()))
    );
}

#[test]
fn test_theme_switch_updates_surface() {
    let (app, _scheduler) = fresh();
    assert_eq!(app.surface().get(THEME_ATTRIBUTE), None);
    assert!(app.surface().get(SCALE_ATTRIBUTE).is_some());

    app.execute("theme matrix");
    assert_eq!(app.surface().get(THEME_ATTRIBUTE).as_deref(), Some("matrix"));
    assert!(app.render().contains("Matrix"));

    app.execute("theme neon-cyber");
    assert_eq!(app.surface().get(THEME_ATTRIBUTE), None);

    let rejected = app.execute("theme sepia");
    assert!(matches!(rejected, CommandOutcome::Continue(Some(_))));
    assert_eq!(app.surface().get(THEME_ATTRIBUTE), None);
}

#[test]
fn test_unknown_module_shows_fallback() {
    let (app, _scheduler) = fresh();
    let outcome = app.execute("nav settings");
    assert_eq!(
        outcome,
        CommandOutcome::Continue(Some("No module named 'settings'.".to_string()))
    );

    let screen = app.render();
    assert!(screen.contains("SYSTEM"));
    assert!(screen.contains("No module is registered as 'settings'."));

    app.execute("nav blog");
    assert!(app.render().contains("┌─ [LOG] NOTES"));
}

#[test]
fn test_boot_is_shown_once() {
    let storage: Arc<dyn StorageBackend> = Arc::new(MemoryStorage::new());

    let (app, scheduler) = desktop(storage.clone(), ShellConfig::default());
    assert!(app.needs_boot());
    let boot = app.start_boot();
    scheduler.advance(complete_at());
    let events: Vec<BootEvent> = boot.events().try_iter().collect();
    assert_eq!(events.last(), Some(&BootEvent::Complete));
    assert!(!app.needs_boot());
    drop(app);

    let (again, _scheduler) = desktop(storage, ShellConfig::default());
    assert!(!again.needs_boot());
}

#[test]
fn test_skip_boot_config() {
    let config = ShellConfig {
        skip_boot: true,
        ..ShellConfig::default()
    };
    let (app, _scheduler) = desktop(Arc::new(MemoryStorage::new()), config);
    assert!(!app.needs_boot());
}

#[test]
fn test_settings_survive_restart() {
    let storage: Arc<dyn StorageBackend> = Arc::new(MemoryStorage::new());
    let (app, _scheduler) = desktop(storage.clone(), ShellConfig::default());
    app.execute("theme vaporwave");
    app.execute("scale XL");
    app.execute("sound");
    drop(app);

    let (again, _scheduler) = desktop(storage, ShellConfig::default());
    let state = again.context().settings.state();
    assert_eq!(state.color_scheme.as_str(), "vaporwave");
    assert_eq!(state.ui_scale.label(), "XL");
    assert!(!state.sound_enabled);
    assert_eq!(again.surface().get(THEME_ATTRIBUTE).as_deref(), Some("vaporwave"));

    again.execute("reset");
    assert!(again.context().settings.sound_enabled());
    assert_eq!(again.surface().get(THEME_ATTRIBUTE), None);
}

#[test]
fn test_unknown_command() {
    let (app, _scheduler) = fresh();
    assert_eq!(
        app.execute("  launch  rockets "),
        CommandOutcome::Continue(Some("Unknown command 'launch  rockets', try 'help'.".to_string()))
    );
    assert_eq!(app.execute(""), CommandOutcome::Continue(None));
    assert_eq!(app.execute("quit"), CommandOutcome::Quit);
}

#[test]
fn test_sections_listing_and_help() {
    let (app, _scheduler) = fresh();
    let CommandOutcome::Continue(Some(listing)) = app.execute("sections") else {
        panic!("sections should reply");
    };
    assert_eq!(listing.lines().count(), 5);
    assert!(listing.lines().next().unwrap().starts_with("> about-me"));
    assert!(listing.contains("ForgeHealth"));
    assert!(!listing.contains("not installed"));

    app.execute("nav portfolio");
    let CommandOutcome::Continue(Some(help)) = app.execute("help") else {
        panic!("help should reply");
    };
    assert!(help.contains("Projects commands:"));
    assert!(help.contains("open"));
}

#[test]
fn test_configured_sections() {
    let config = ShellConfig::parse(
        r#"
        [[sections]]
        id = "blog"
        title = "Notes"
        icon = "[LOG]"
        component = "Blog"

        [[sections]]
        id = "forge"
        title = "FORGE"
        icon = "[FRG]"
        component = "ForgeHealth"
        "#,
    )
    .unwrap();
    let (app, _scheduler) = desktop(Arc::new(MemoryStorage::new()), config);
    assert_eq!(app.section_count(), 2);
    assert_eq!(app.context().navigation.active_panel(), "blog");
    assert!(app.render().contains("SYS 2 modules loaded"));
}

#[test]
fn test_reset_keeps_configured_start_panel() {
    let config = ShellConfig::parse(
        r#"
        [[sections]]
        id = "blog"
        title = "Notes"
        icon = "[LOG]"
        component = "Blog"
        "#,
    )
    .unwrap();
    let (app, _scheduler) = desktop(Arc::new(MemoryStorage::new()), config);
    assert_eq!(app.context().navigation.active_panel(), "blog");

    app.execute("nav about-me");
    assert!(matches!(app.main_panel().active(), Resolution::Fallback { .. }));

    app.execute("reset");
    assert_eq!(app.context().navigation.active_panel(), "blog");
    assert!(matches!(app.main_panel().active(), Resolution::Panel(_)));
    assert!(app.render().contains("┌─ [LOG] NOTES"));
}

#[test]
fn test_widget_rail_drawn_beside_panel() {
    let (app, _scheduler) = fresh();
    let now = chrono::NaiveDate::from_ymd_opt(2025, 1, 16)
        .and_then(|d| d.and_hms_opt(7, 4, 31))
        .unwrap();
    let screen = app.render_at(&now);
    assert!(screen.contains("== [CLK] CLOCK =="));
    assert!(screen.contains("07 04 31"));
    assert!(screen.contains("THU, JAN 16, 2025"));
    assert!(screen.contains("hello@alexmartel.com"));
    assert!(screen.contains("ALEX MARTEL"));

    let panel_at = screen.find("┌─ [USR] USER").unwrap();
    let rail_at = screen.find("== [CLK] CLOCK ==").unwrap();
    assert!(panel_at < rail_at);
}
